mod config;

use config::Config;
use eyre::{bail, Report, WrapErr};
use log::info;
use registers::{Qval, RegisterAddress, RegisterData};
use std::env;
use std::process::exit;

fn main() -> Result<(), Report> {
    stable_eyre::install()?;
    pretty_env_logger::init();
    color_backtrace::install();

    let config = Config::from_file()?;
    info!("Using {:?}", config);

    let mut args = env::args();
    let binary_name = args
        .next()
        .ok_or_else(|| eyre::eyre!("Binary name missing"))?;
    let args: Vec<String> = args.collect();

    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["list"] => list(&config),
        ["decode", register, raw] => {
            let data = RegisterData::new(parse_address(register)?, parse_raw(raw)?);
            let scaled = data.scaled_value()?;
            println!("{} = {} ({})", data.address(), scaled, config.format_raw(data.value()));
        }
        ["encode", register, value] => {
            let value: f64 = value
                .parse()
                .wrap_err_with(|| format!("Invalid value {}", value))?;
            let mut data = RegisterData::new(parse_address(register)?, 0);
            data.set_scaled_value_with(value, config.overflow)?;
            println!("{} = {}", data.address(), config.format_raw(data.value()));
        }
        _ => {
            eprintln!("Usage:");
            eprintln!("  {} list", binary_name);
            eprintln!("  {} decode <register> <raw value>", binary_name);
            eprintln!("  {} encode <register> <scaled value>", binary_name);
            eprintln!("Registers may be given by name or by code.");
            exit(1);
        }
    }

    Ok(())
}

fn list(config: &Config) {
    for &address in RegisterAddress::ALL {
        let code = config.format_raw(address.code());
        match Qval::for_address(address) {
            Some(qval) => println!("{:>6}  {:<26} Q{}", code, address, qval.fractional_bits()),
            None => println!("{:>6}  {}", code, address),
        }
    }
}

/// Parses a decimal or `0x`-prefixed hexadecimal number.
fn parse_u16(s: &str) -> Result<u16, Report> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.wrap_err_with(|| format!("Invalid number {}", s))
}

/// Parses a register by name, or by numeric code if it starts with a digit.
fn parse_address(s: &str) -> Result<RegisterAddress, Report> {
    if s.starts_with(|c: char| c.is_ascii_digit()) {
        Ok(RegisterAddress::try_from(parse_u16(s)?)?)
    } else {
        Ok(s.parse::<RegisterAddress>()?)
    }
}

/// Parses a raw register value. Negative numbers are taken as their two's complement bit pattern.
fn parse_raw(s: &str) -> Result<u16, Report> {
    if s.starts_with('-') {
        match s.parse::<i16>() {
            Ok(value) => Ok(value as u16),
            Err(e) => bail!("Invalid raw value {}: {}", s, e),
        }
    } else {
        parse_u16(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_address_by_name_or_code() {
        assert_eq!(parse_address("AlgorithmKp").unwrap(), RegisterAddress::AlgorithmKp);
        assert_eq!(parse_address("56").unwrap(), RegisterAddress::AlgorithmKp);
        assert_eq!(parse_address("0x38").unwrap(), RegisterAddress::AlgorithmKp);
        assert!(parse_address("4000").is_err());
        assert!(parse_address("NotARegister").is_err());
    }

    #[test]
    fn parse_raw_values() {
        assert_eq!(parse_raw("4096").unwrap(), 4096);
        assert_eq!(parse_raw("0xF800").unwrap(), 0xF800);
        assert_eq!(parse_raw("-2048").unwrap(), 0xF800);
        assert!(parse_raw("65536").is_err());
        assert!(parse_raw("-40000").is_err());
    }
}
