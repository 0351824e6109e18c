use std::env;
use std::fs::File;
use std::io::Read;
use std::process::ExitCode;

use huffcode::{CodecConfig, Error, FrequencyTable, HuffmanCodec, Result, SeparatorPolicy};

const USAGE: &str = "usage:
  huffman frequencies <file>
  huffman codes <file>
  huffman encode <file>
  huffman decode <frequency-report> <bits-file> [--legacy]";

#[derive(Debug)]
enum Command {
    Frequencies { input: String },
    Codes { input: String },
    Encode { input: String },
    Decode {
        report: String,
        bits: String,
        legacy: bool,
    },
}

impl Command {
    fn build(mut args: impl Iterator<Item = String>) -> std::result::Result<Command, &'static str> {
        let (mode, input) = match (args.nth(1), args.next()) {
            (Some(m), Some(i)) => (m, i),
            _ => return Err("Not enough arguments"),
        };

        let command = match mode.as_str() {
            "frequencies" => Command::Frequencies { input },
            "codes" => Command::Codes { input },
            "encode" => Command::Encode { input },
            "decode" => {
                let bits = args.next().ok_or("decode needs a bits file")?;
                let legacy = match args.next().as_deref() {
                    None => false,
                    Some("--legacy") => true,
                    Some(_) => return Err("Unknown flag"),
                };
                Command::Decode {
                    report: input,
                    bits,
                    legacy,
                }
            }
            _ => return Err("Unknown mode"),
        };

        if args.next().is_some() {
            return Err("Too many arguments");
        }
        Ok(command)
    }
}

fn read_file(path: &str) -> Result<String> {
    let mut file = File::open(path).map_err(|source| Error::StreamOpen {
        path: path.into(),
        source,
    })?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

fn run(command: Command) -> Result<String> {
    match command {
        Command::Frequencies { input } => Ok(FrequencyTable::from_path(input)?.report()),
        Command::Codes { input } => Ok(HuffmanCodec::from_path(input)?.code_report()),
        Command::Encode { input } => {
            let codec = HuffmanCodec::from_path(&input)?;
            let mut bits = codec.encode_path(&input)?;
            bits.push('\n');
            Ok(bits)
        }
        Command::Decode {
            report,
            bits,
            legacy,
        } => {
            let frequencies: FrequencyTable = read_file(&report)?.parse()?;
            let separators = if legacy {
                SeparatorPolicy::LineBreak
            } else {
                SeparatorPolicy::Reject
            };
            let codec = HuffmanCodec::new(frequencies)?.with_config(CodecConfig {
                separators,
                ..CodecConfig::default()
            });
            let bits = read_file(&bits)?;
            codec.decode(bits.trim_end_matches(|c: char| c == '\r' || c == '\n'))
        }
    }
}

fn main() -> ExitCode {
    let command = match Command::build(env::args()) {
        Ok(command) => command,
        Err(msg) => {
            eprintln!("{msg}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    match run(command) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("huffman: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        std::iter::once("huffman")
            .chain(list.iter().copied())
            .map(String::from)
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn test_mode_dispatch() {
        assert!(matches!(
            Command::build(args(&["frequencies", "in.txt"])),
            Ok(Command::Frequencies { input }) if input == "in.txt"
        ));
        assert!(matches!(
            Command::build(args(&["codes", "in.txt"])),
            Ok(Command::Codes { .. })
        ));
        assert!(matches!(
            Command::build(args(&["encode", "in.txt"])),
            Ok(Command::Encode { .. })
        ));
        assert!(matches!(
            Command::build(args(&["decode", "freq.txt", "bits.txt"])),
            Ok(Command::Decode { ref report, ref bits, legacy: false })
                if report == "freq.txt" && bits == "bits.txt"
        ));
    }

    #[test]
    fn test_legacy_flag() {
        assert!(matches!(
            Command::build(args(&["decode", "freq.txt", "bits.txt", "--legacy"])),
            Ok(Command::Decode { legacy: true, .. })
        ));
    }

    #[test]
    fn test_argument_errors() {
        assert_eq!(Command::build(args(&[])).unwrap_err(), "Not enough arguments");
        assert_eq!(Command::build(args(&["encode"])).unwrap_err(), "Not enough arguments");
        assert_eq!(Command::build(args(&["zip", "in.txt"])).unwrap_err(), "Unknown mode");
        assert_eq!(
            Command::build(args(&["decode", "freq.txt"])).unwrap_err(),
            "decode needs a bits file"
        );
        assert_eq!(
            Command::build(args(&["decode", "freq.txt", "bits.txt", "--fast"])).unwrap_err(),
            "Unknown flag"
        );
        assert_eq!(
            Command::build(args(&["decode", "freq.txt", "bits.txt", "--legacy", "x"]))
                .unwrap_err(),
            "Too many arguments"
        );
        assert_eq!(
            Command::build(args(&["encode", "in.txt", "out.txt"])).unwrap_err(),
            "Too many arguments"
        );
    }

    #[test]
    fn test_read_file_errors() {
        assert!(matches!(
            read_file("/nonexistent/huffcode/report.txt"),
            Err(Error::StreamOpen { .. })
        ));

        let path = std::env::temp_dir()
            .join(format!("huffcode-bin-{}-latin1.txt", std::process::id()));
        std::fs::write(&path, [0x61, 0xff, 0x62]).unwrap();
        let result = read_file(path.to_str().unwrap());
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
