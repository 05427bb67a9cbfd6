use anyhow::Context;
use clap::{Parser, ValueEnum};
use serde_json::json;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use textcodec::config::{Config, InputConfig};
use textcodec::{codec, logging, EncodingError, Operation};
use tracing::{debug, error};

const EXIT_RUNTIME: u8 = 1;
const EXIT_ENCODING: u8 = 2;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
enum Command {
    #[value(name = "base64-encode")]
    Base64Encode,
    #[value(name = "base64-decode")]
    Base64Decode,
    #[value(name = "url-encode")]
    UrlEncode,
    #[value(name = "url-decode")]
    UrlDecode,
    #[value(name = "validate-base64")]
    ValidateBase64,
    #[value(name = "safe-string")]
    SafeString,
}

impl Command {
    fn operation(self) -> Option<Operation> {
        match self {
            Self::Base64Encode => Some(Operation::Base64Encode),
            Self::Base64Decode => Some(Operation::Base64Decode),
            Self::UrlEncode => Some(Operation::UrlEncode),
            Self::UrlDecode => Some(Operation::UrlDecode),
            Self::ValidateBase64 | Self::SafeString => None,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "textcodec", version, about = "UTF-8 safe Base64 and URL encoding")]
struct Cli {
    /// TOML config file
    #[arg(long, env = "TEXTCODEC_CONFIG")]
    config: Option<PathBuf>,

    /// Print results and errors as JSON objects
    #[arg(long)]
    json: bool,

    command: Command,

    /// Text to transform; read from stdin when omitted
    input: Option<String>,
}

enum Failure {
    Encoding(EncodingError),
    Runtime(anyhow::Error),
}

impl From<anyhow::Error> for Failure {
    fn from(e: anyhow::Error) -> Self {
        Self::Runtime(e)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Failure::Encoding(e)) => {
            if cli.json {
                eprintln!("{}", json!({ "error": e }));
            } else {
                eprintln!("error[{}]: {}", e.operation(), e.message());
            }
            ExitCode::from(EXIT_ENCODING)
        }
        Err(Failure::Runtime(e)) => {
            error!(e = ?e, "textcodec failed");
            eprintln!("error: {:#}", e);
            ExitCode::from(EXIT_RUNTIME)
        }
    }
}

fn run(cli: &Cli) -> Result<(), Failure> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    logging::init(&config.log.filter);

    let input = match &cli.input {
        Some(input) => input.clone(),
        None => read_input(std::io::stdin().lock(), &config.input)?,
    };
    config.input.check_len(&input)?;
    println!("{}", render(cli, &input)?);
    Ok(())
}

fn render(cli: &Cli, input: &str) -> Result<String, Failure> {
    debug!(command = ?cli.command, len = input.len(), "running command");
    let rendered = match cli.command.operation() {
        Some(operation) => {
            let output = operation.apply_str(input).map_err(Failure::Encoding)?;
            if cli.json {
                json!({ "operation": operation, "result": output }).to_string()
            } else {
                output
            }
        }
        None if cli.command == Command::ValidateBase64 => {
            let valid = codec::is_valid_base64(input);
            if cli.json {
                json!({ "valid": valid }).to_string()
            } else {
                valid.to_string()
            }
        }
        None => {
            let output = codec::safe_string(Some(input));
            if cli.json {
                json!({ "result": output }).to_string()
            } else {
                output
            }
        }
    };
    Ok(rendered)
}

/// Reads piped input, trimming one trailing newline when configured.
fn read_input<R: Read>(reader: R, config: &InputConfig) -> Result<String, anyhow::Error> {
    // room for a trailing "\r\n" on top of the limit
    let cap = config.max_bytes + 2;
    let mut buf = Vec::new();
    reader
        .take(cap + 1)
        .read_to_end(&mut buf)
        .context("failed to read stdin")?;
    if buf.len() as u64 > cap {
        anyhow::bail!("input exceeds limit of {} bytes", config.max_bytes);
    }
    let raw = String::from_utf8(buf).context("stdin is not valid UTF-8")?;
    Ok(config.prepare(&raw).to_owned())
}
