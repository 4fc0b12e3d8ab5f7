use std::fs;
use std::io::{self, Read as _, Write};
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use crate::config::OutputConfig;
use crate::output::TextLayout;

mod config;
mod output;

/// The cargo package version.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Encodes binary data as hex or Base32 text and decodes hex text.
#[derive(Debug, Parser)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Write the output to this file instead of stdout.
    ///
    /// The file is created or truncated.
    #[arg(short, long, global = true)]
    out: Option<PathBuf>,

    /// Wrap encoded output after this many characters.
    ///
    /// `0` disables wrapping. If not specified, the `output.wrap` config value
    /// is used.
    #[arg(short, long, global = true)]
    wrap: Option<usize>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Encode bytes as uppercase hex.
    HexEncode {
        /// The file to read. Reads stdin if not specified.
        input: Option<PathBuf>,
    },
    /// Decode hex text of either case into bytes.
    ///
    /// Whitespace, such as line breaks from wrapped output, is ignored.
    HexDecode {
        /// The file to read. Reads stdin if not specified.
        input: Option<PathBuf>,
    },
    /// Encode bytes as RFC 4648 Base32 without padding.
    ///
    /// The input length must be a multiple of 5 bytes.
    Base32Encode {
        /// The file to read. Reads stdin if not specified.
        input: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    use std::panic;

    let cli = Cli::parse();

    let config = config::build_config()?;
    init_logging(config.log)?;

    // register the custom panic handler after logging is set up
    panic::set_hook(Box::new(on_panic));

    log::info!(target: "bin_text::version", "bin_text v{VERSION}");

    let res = run(&cli, &config.output);
    if let Err(why) = &res {
        log::error!("Exiting due to error: {why:?}");
    }

    log::logger().flush();
    res
}

fn run(cli: &Cli, output: &OutputConfig) -> anyhow::Result<()> {
    let layout = TextLayout::from_config(output, cli.wrap);
    let out = cli.out.as_deref();

    match &cli.command {
        Command::HexEncode { input } => {
            let bytes = read_input(input.as_deref())?;
            let text = bin_text::encode_hex(&bytes);

            log::info!("Encoded {} bytes as hex.", bytes.len());
            write_text(out, layout, &text)
        },
        Command::HexDecode { input } => {
            let text = read_text(input.as_deref())?;
            let text = strip_whitespace(&text);
            let bytes = bin_text::decode_hex(&text).context("input is not valid hex")?;

            log::info!("Decoded {} bytes from hex.", bytes.len());
            write_bytes(out, &bytes)
        },
        Command::Base32Encode { input } => {
            let bytes = read_input(input.as_deref())?;
            let text = bin_text::encode_base32(&bytes).context("cannot encode input as base32")?;

            log::info!("Encoded {} bytes as base32.", bytes.len());
            write_text(out, layout, &text)
        },
    }
}

fn read_input(path: Option<&Path>) -> anyhow::Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path).with_context(|| format!("cannot read input {path:?}")),
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .context("cannot read stdin")?;
            Ok(buf)
        },
    }
}

fn read_text(path: Option<&Path>) -> anyhow::Result<String> {
    let bytes = read_input(path)?;
    String::from_utf8(bytes).context("input is not valid utf-8")
}

/// Removes all ascii whitespace, borrowing if there is none.
fn strip_whitespace(text: &str) -> std::borrow::Cow<'_, str> {
    if text.bytes().any(|b| b.is_ascii_whitespace()) {
        text.split_ascii_whitespace().collect::<String>().into()
    } else {
        text.into()
    }
}

fn open_output(path: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => {
            let file = fs::File::create(path)
                .with_context(|| format!("cannot create output {path:?}"))?;
            Box::new(io::BufWriter::new(file))
        },
        None => Box::new(io::stdout().lock()),
    })
}

fn write_text(path: Option<&Path>, layout: TextLayout, text: &str) -> anyhow::Result<()> {
    let writer = open_output(path)?;
    layout.write(writer, text).context("cannot write output")
}

fn write_bytes(path: Option<&Path>, bytes: &[u8]) -> anyhow::Result<()> {
    let mut writer = open_output(path)?;
    writer.write_all(bytes).context("cannot write output")?;
    writer.flush().context("cannot flush output")
}

fn init_logging(config: log4rs::config::RawConfig) -> anyhow::Result<()> {
    let deserializers = log4rs::config::Deserializers::default();
    let (appenders, errors) = config.appenders_lossy(&deserializers);
    if !errors.is_empty() {
        return Err(errors.into());
    }

    let config = log4rs::Config::builder()
        .appenders(appenders)
        .loggers(config.loggers())
        .build(config.root())?;

    log4rs::init_config(config)?;
    Ok(())
}

/// Custom panic handler that writes the panic to the logger and flushes it.
fn on_panic(info: &std::panic::PanicHookInfo<'_>) {
    use std::backtrace::Backtrace;

    let backtrace = Backtrace::force_capture();
    let thread = std::thread::current();
    let name = thread.name().unwrap_or("<unnamed>");

    // just in case the loggers fail or are empty
    _ = writeln!(io::stderr(), "thread '{name}' {info}");
    log::error!("thread '{name}' {info}\n{backtrace}");
    log::logger().flush();
}
