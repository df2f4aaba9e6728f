//! `boxwind` command-line tool.
//!
//! Translates inspector property strings from the command line or from a
//! style sheet file and prints the resulting classes with diagnostics.
//!
//! ```text
//! boxwind translate --layout "Auto{flow=row, gap=8px, w-fill, h-40px}" --fill "#fff, opacity=100"
//! boxwind sheet styles.yaml --format json
//! ```

mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use boxwind::{translate, StyleProps, StyleSheet};
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use output::Format;

/// Translate design-inspector property strings into utility classes.
#[derive(Parser)]
#[command(name = "boxwind", version, about)]
struct Cli {
    /// Log parser activity to stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Translate one element given on the command line
    Translate(TranslateArgs),
    /// Translate every element of a YAML or JSON style sheet
    Sheet(SheetArgs),
}

#[derive(Args)]
struct TranslateArgs {
    /// Layout property string
    #[arg(long)]
    layout: Option<String>,

    /// Position property string
    #[arg(long)]
    position: Option<String>,

    /// Appearance property string
    #[arg(long)]
    appearance: Option<String>,

    /// Fill property string
    #[arg(long)]
    fill: Option<String>,

    /// Stroke property string
    #[arg(long)]
    stroke: Option<String>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args)]
struct SheetArgs {
    /// Sheet file (`.json` is read as JSON, anything else as YAML)
    file: PathBuf,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args)]
struct OutputArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Exit with status 1 when any error is reported
    #[arg(long)]
    deny_errors: bool,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let (rendered, has_errors, output) = match cli.command {
        Command::Translate(args) => {
            let props = StyleProps {
                layout: args.layout,
                position: args.position,
                appearance: args.appearance,
                fill: args.fill,
                stroke: args.stroke,
            };
            let result = translate(&props);
            debug!(classes = result.classes.len(), "translated element");
            let rendered = output::render(&result, args.output.format)?;
            (rendered, result.has_errors(), args.output)
        }
        Command::Sheet(args) => {
            let sheet = StyleSheet::from_path(&args.file)
                .with_context(|| format!("cannot load {}", args.file.display()))?;
            debug!(path = %args.file.display(), elements = sheet.len(), "loaded sheet");
            let results = sheet.translate_all();
            let has_errors = results.iter().any(|(_, result)| result.has_errors());
            let rendered = output::render_sheet(&results, args.output.format)?;
            (rendered, has_errors, args.output)
        }
    };

    print!("{}", rendered);
    if output.deny_errors && has_errors {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
