//! # salestax
//!
//! Prints a sales tax receipt for every cart of `"<qty> <name> at <price>"`
//! lines read from files, stdin, or the built-in sample carts.
//!
//! ## Run Sequence
//! 1. Initialize tracing (stderr)
//! 2. Load `SALESTAX_*` configuration, apply command-line flags on top
//! 3. Read carts (files in order, `-` is stdin; none = samples)
//! 4. For each cart: parse → tax → receipt
//! 5. Write text receipts as they are produced, or one JSON array at the end
//!
//! Exit code is 1 if any cart was rejected or input could not be read.

mod config;
mod input;

use anyhow::Context;
use clap::Parser;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use salestax_core::parser::{parse_cart, parse_cart_lenient};
use salestax_core::{Cart, Receipt, TaxCalculator};

use crate::config::{CliConfig, OutputFormat};
use crate::input::CartInput;

/// Printed after every text receipt.
const SEPARATOR: &str = "--------------------------------------------------";

#[derive(Debug, Parser)]
#[command(
    name = "salestax",
    version,
    about = "Sales tax receipts for '<qty> <name> at <price>' item lines."
)]
struct Cli {
    /// Input files (`-` for stdin). Carts are separated by blank lines.
    /// Without files, the built-in sample carts are printed.
    inputs: Vec<PathBuf>,

    /// Output format (overrides SALESTAX_FORMAT).
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Skip malformed lines instead of rejecting the whole cart.
    #[arg(long, default_value_t = false)]
    lenient: bool,

    /// Do not echo each cart's input lines before its receipt.
    #[arg(long, default_value_t = false)]
    no_echo: bool,
}

impl Cli {
    /// Flags win over the environment.
    fn apply_to(&self, config: CliConfig) -> CliConfig {
        CliConfig {
            format: self.format.unwrap_or(config.format),
            lenient: self.lenient || config.lenient,
            echo_input: config.echo_input && !self.no_echo,
        }
    }
}

fn main() -> ExitCode {
    init_tracing();

    match real_main() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            error!("{:#}", e);
            ExitCode::from(1)
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG` wins, then `SALESTAX_LOG`
/// - Default: WARN, so stdout only carries receipts and stderr stays quiet
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("SALESTAX_LOG"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

/// Returns `Ok(false)` when at least one cart was rejected.
fn real_main() -> anyhow::Result<bool> {
    let cli = Cli::parse();
    let config = cli.apply_to(CliConfig::load().context("load configuration")?);
    debug!(?config, "configuration loaded");

    let carts = if cli.inputs.is_empty() {
        input::sample_carts()
    } else {
        let mut carts = Vec::new();
        for path in &cli.inputs {
            carts.extend(input::read_carts(path)?);
        }
        carts
    };
    info!(carts = carts.len(), "processing carts");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let all_ok = run(&carts, &config, &mut out)?;
    out.flush().context("flush stdout")?;

    Ok(all_ok)
}

/// Processes every cart and writes the output in the configured format.
fn run(carts: &[CartInput], config: &CliConfig, out: &mut impl Write) -> anyhow::Result<bool> {
    let calculator = TaxCalculator::standard();
    let mut all_ok = true;
    let mut receipts = Vec::new();

    for input in carts {
        let Some(mut cart) = build_cart(input, config.lenient) else {
            all_ok = false;
            continue;
        };

        calculator.calculate(&mut cart);
        // Discounts would be applied here, between tax and printing.
        let receipt = Receipt::from_cart(&cart);
        debug!(cart = %input.label(), taxes = %receipt.taxes, total = %receipt.total, "receipt ready");

        match config.format {
            OutputFormat::Text => write_text(&mut *out, input, &receipt, config.echo_input)
                .context("write receipt")?,
            OutputFormat::Json => receipts.push(receipt),
        }
    }

    if config.format == OutputFormat::Json {
        serde_json::to_writer_pretty(&mut *out, &receipts).context("write JSON receipts")?;
        writeln!(out).context("write JSON receipts")?;
    }

    Ok(all_ok)
}

/// Parses one cart, or logs why it was rejected.
fn build_cart(input: &CartInput, lenient: bool) -> Option<Cart> {
    if lenient {
        let (cart, errors) = parse_cart_lenient(&input.lines);
        for err in &errors {
            warn!(cart = %input.label(), "skipped {err}");
        }
        return Some(cart);
    }

    match parse_cart(&input.lines) {
        Ok(cart) => Some(cart),
        Err(err) => {
            error!(cart = %input.label(), "rejected: {err}");
            None
        }
    }
}

/// Echoed input, blank line, receipt, separator.
fn write_text(
    out: &mut impl Write,
    input: &CartInput,
    receipt: &Receipt,
    echo: bool,
) -> io::Result<()> {
    if echo {
        for line in &input.lines {
            writeln!(out, "{line}")?;
        }
        writeln!(out)?;
    }
    write!(out, "{receipt}")?;
    writeln!(out, "{SEPARATOR}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(carts: &[CartInput], config: &CliConfig) -> (String, bool) {
        let mut buf = Vec::new();
        let ok = run(carts, config, &mut buf).unwrap();
        (String::from_utf8(buf).unwrap(), ok)
    }

    fn cart(lines: &[&str]) -> CartInput {
        CartInput {
            source: "test".to_string(),
            index: 1,
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }

    #[test]
    fn test_flags_override_environment() {
        let env = CliConfig {
            format: OutputFormat::Json,
            lenient: false,
            echo_input: true,
        };

        let cli = Cli::try_parse_from(["salestax", "--format", "text", "--lenient", "--no-echo"])
            .unwrap();
        let merged = cli.apply_to(env.clone());
        assert_eq!(merged.format, OutputFormat::Text);
        assert!(merged.lenient);
        assert!(!merged.echo_input);

        let cli = Cli::try_parse_from(["salestax"]).unwrap();
        assert_eq!(cli.apply_to(env.clone()), env);
    }

    #[test]
    fn test_text_output_with_echo() {
        let (text, ok) = render(&[cart(&["1 music CD at 14.99"])], &CliConfig::default());
        assert!(ok);
        assert_eq!(
            text,
            format!("1 music CD at 14.99\n\n1 music CD : 16.49\nTaxes: 1.50\nTotal: 16.49\n{SEPARATOR}\n")
        );
    }

    #[test]
    fn test_text_output_without_echo() {
        let config = CliConfig {
            echo_input: false,
            ..CliConfig::default()
        };
        let (text, _) = render(&[cart(&["1 book at 12.49"])], &config);
        assert_eq!(text, format!("1 book : 12.49\nTaxes: 0.00\nTotal: 12.49\n{SEPARATOR}\n"));
    }

    #[test]
    fn test_strict_rejects_cart_and_continues() {
        let config = CliConfig {
            echo_input: false,
            ..CliConfig::default()
        };
        let carts = [cart(&["1 book at 12.49", "nonsense"]), cart(&["1 book at 12.49"])];
        let (text, ok) = render(&carts, &config);

        assert!(!ok);
        assert_eq!(text.matches("Total:").count(), 1);
    }

    #[test]
    fn test_lenient_skips_bad_lines() {
        let config = CliConfig {
            lenient: true,
            echo_input: false,
            ..CliConfig::default()
        };
        let (text, ok) = render(&[cart(&["1 book at 12.49", "nonsense"])], &config);

        assert!(ok);
        assert!(text.starts_with("1 book : 12.49\nTaxes: 0.00\nTotal: 12.49\n"));
    }

    #[test]
    fn test_json_output() {
        let config = CliConfig {
            format: OutputFormat::Json,
            ..CliConfig::default()
        };
        let (text, ok) = render(&input::sample_carts(), &config);
        assert!(ok);

        let receipts: Vec<Receipt> = serde_json::from_str(&text).unwrap();
        let totals: Vec<_> = receipts.iter().map(|r| r.total.to_string()).collect();
        assert_eq!(totals, ["29.83", "65.15", "74.68"]);
    }
}
