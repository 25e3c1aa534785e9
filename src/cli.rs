use std::io::{Write, stdout};

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{Code, DigitClass, classify, encode};

#[derive(Parser)]
#[command(
    version,
    author,
    about = "Command line utility to compute soundex codes of words"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,

    #[arg(short, long, default_value = "false")]
    /// Output results as a JSON array instead of one line per input
    json: bool,

    #[arg(short, long, default_value = "false")]
    /// Whether to output JSON pretty printed, implies `--json`
    pretty: bool,

    #[arg(short, long, action = ArgAction::Count)]
    /// Log more, `-v` for debug and `-vv` for trace.
    ///
    /// `RUST_LOG` takes precedence when set.
    verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// Encode words into soundex codes.
    ///
    /// The first character of each word is kept uppercased as the head of its
    /// code, followed by three digits.
    Encode {
        /// Words to encode
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Show the digit class of letters.
    ///
    /// Vowels, `h`, `w`, `y` and non-letters have no class and show as `-`.
    Classify {
        /// Letters to classify
        #[arg(required = true)]
        letters: Vec<char>,
    },
}
use Command::*;

impl Cli {
    fn json(&self) -> bool {
        self.json || self.pretty
    }
}

#[derive(Debug, serde::Serialize)]
struct Encoded<'a> {
    word: &'a str,
    code: Code,
}

#[derive(Debug, serde::Serialize)]
struct Classified {
    letter: char,
    class: Option<DigitClass>,
}

fn encode_words(words: &[String]) -> Result<Vec<Encoded<'_>>, String> {
    words
        .iter()
        .map(|word| {
            let code = encode(word).map_err(|e| format!("encode {:?} failed: {}", word, e))?;
            tracing::debug!(word = %word, code = %code, "encoded word");
            Ok(Encoded { word, code })
        })
        .collect()
}

fn classify_letters(letters: &[char]) -> Vec<Classified> {
    letters
        .iter()
        .map(|&letter| Classified {
            letter,
            class: classify(letter),
        })
        .collect()
}

fn write_json<T: serde::Serialize>(
    mut writer: impl Write,
    value: &T,
    pretty: bool,
) -> Result<(), String> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, value)
            .map_err(|e| format!("write JSON to output failed: {}", e))?;
    } else {
        serde_json::to_writer(&mut writer, value)
            .map_err(|e| format!("write JSON to output failed: {}", e))?;
    }
    writeln!(&mut writer).map_err(|e| format!("write newline to output failed: {}", e))
}

fn write_lines(mut writer: impl Write, lines: impl Iterator<Item = String>) -> Result<(), String> {
    for line in lines {
        writeln!(&mut writer, "{line}").map_err(|e| format!("write output failed: {}", e))?;
    }
    Ok(())
}

fn execute(cli: &Cli, writer: impl Write) -> Result<(), String> {
    match &cli.command {
        Encode { words } => {
            let encoded = encode_words(words)?;
            if cli.json() {
                write_json(writer, &encoded, cli.pretty)
            } else {
                write_lines(
                    writer,
                    encoded.iter().map(|e| format!("{} {}", e.word, e.code)),
                )
            }
        }
        Classify { letters } => {
            let classified = classify_letters(letters);
            if cli.json() {
                write_json(writer, &classified, cli.pretty)
            } else {
                write_lines(
                    writer,
                    classified.iter().map(|c| match c.class {
                        Some(class) => format!("{} {}", c.letter, class),
                        None => format!("{} -", c.letter),
                    }),
                )
            }
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "soundex=warn",
        1 => "soundex=debug",
        _ => "soundex=trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .ok();
}

pub fn run(cli: Cli) -> Result<(), String> {
    init_logging(cli.verbose);
    execute(&cli, stdout().lock())
}

#[cfg(test)]
mod test {
    use super::*;

    fn run_args(args: &[&str]) -> Result<String, String> {
        let cli = Cli::try_parse_from(std::iter::once("soundex").chain(args.iter().copied()))
            .map_err(|e| e.to_string())?;
        let mut out = Vec::new();
        execute(&cli, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_encode_lines() {
        let out = run_args(&["encode", "Robert", "lama", "Rcacdl"]).unwrap();
        assert_eq!(out, "Robert R163\nlama L500\nRcacdl R223\n");
    }

    #[test]
    fn test_encode_json() {
        let out = run_args(&["--json", "encode", "Robert", "Ashcraft"]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!([
                { "word": "Robert", "code": "R163" },
                { "word": "Ashcraft", "code": "A261" },
            ])
        );
    }

    #[test]
    fn test_encode_pretty_implies_json() {
        let out = run_args(&["--pretty", "encode", "A"]).unwrap();
        assert!(out.contains('\n'));
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["code"], "A000");
    }

    #[test]
    fn test_encode_empty_word_fails() {
        let err = run_args(&["encode", "Robert", ""]).unwrap_err();
        assert!(err.contains("empty word"), "{err}");
    }

    #[test]
    fn test_encode_requires_words() {
        assert!(run_args(&["encode"]).is_err());
    }

    #[test]
    fn test_classify_lines() {
        let out = run_args(&["classify", "x", "A", "#", "R"]).unwrap();
        assert_eq!(out, "x 2\nA -\n# -\nR 6\n");
    }

    #[test]
    fn test_classify_json() {
        let out = run_args(&["-j", "classify", "m", "h"]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!([
                { "letter": "m", "class": 5 },
                { "letter": "h", "class": null },
            ])
        );
    }

    #[test]
    fn test_classify_rejects_multi_character_argument() {
        assert!(run_args(&["classify", "ab"]).is_err());
    }
}
