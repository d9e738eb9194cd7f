//! Support for the `b64` command-line tool.

use log::info;
use std::io::{Read, Write};
use thiserror::Error;

use crate::{decode, encode, Base64Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encode,
    Decode,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Unknown flag: {0}")]
    UnknownFlag(String),
    #[error(transparent)]
    Base64(#[from] Base64Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Parses the arguments after the program name.
pub fn parse_args<I>(args: I) -> Result<Mode, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut mode = Mode::Encode;
    for arg in args {
        match arg.as_str() {
            "-d" | "--decode" => mode = Mode::Decode,
            "-e" | "--encode" => mode = Mode::Encode,
            _ => return Err(CliError::UnknownFlag(arg)),
        }
    }
    Ok(mode)
}

/// Encodes or decodes `input`, returning the bytes to write to stdout.
///
/// Encoded output ends with a newline. Trailing whitespace is stripped
/// from input before decoding.
pub fn run(mode: Mode, input: &[u8]) -> Result<Vec<u8>, CliError> {
    match mode {
        Mode::Encode => {
            info!("encoding {} bytes", input.len());
            let mut out = encode(input).into_bytes();
            out.push(b'\n');
            Ok(out)
        }
        Mode::Decode => {
            let trimmed = input.trim_ascii_end();
            info!("decoding {} characters", trimmed.len());
            Ok(decode(trimmed)?)
        }
    }
}

/// Reads all of `input`, runs `mode` over it and writes the result to
/// `output`.
pub fn run_io(mode: Mode, mut input: impl Read, mut output: impl Write) -> Result<(), CliError> {
    let mut buf = Vec::new();
    input.read_to_end(&mut buf)?;
    let out = run(mode, &buf)?;
    output.write_all(&out)?;
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_to_encode() {
        assert_eq!(parse_args(args(&[])).unwrap(), Mode::Encode);
    }

    #[test]
    fn decode_flags() {
        assert_eq!(parse_args(args(&["-d"])).unwrap(), Mode::Decode);
        assert_eq!(parse_args(args(&["--decode"])).unwrap(), Mode::Decode);
    }

    #[test]
    fn unknown_flag() {
        assert!(matches!(
            parse_args(args(&["--wrap"])),
            Err(CliError::UnknownFlag(f)) if f == "--wrap"
        ));
    }
}
