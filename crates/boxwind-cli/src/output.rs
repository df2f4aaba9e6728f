//! Rendering translation results for the terminal or for other tools.

use std::collections::BTreeMap;
use std::fmt::Write;

use boxwind::AggregateResult;
use clap::ValueEnum;
use console::Style;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Class attribute followed by diagnostics, one per line.
    Text,
    Json,
    Yaml,
}

/// Renders a single element.
pub fn render(result: &AggregateResult, format: Format) -> anyhow::Result<String> {
    Ok(match format {
        Format::Text => {
            let mut out = String::new();
            write_text(&mut out, result, "");
            out
        }
        Format::Json => format!("{}\n", serde_json::to_string_pretty(result)?),
        Format::Yaml => serde_yaml::to_string(result)?,
    })
}

/// Renders every element of a sheet, keyed by name.
pub fn render_sheet(results: &[(&str, AggregateResult)], format: Format) -> anyhow::Result<String> {
    if format == Format::Text {
        let mut out = String::new();
        for (name, result) in results {
            let _ = writeln!(out, "{}", Style::new().bold().apply_to(format!("{}:", name)));
            write_text(&mut out, result, "  ");
        }
        return Ok(out);
    }

    let keyed: BTreeMap<&str, &AggregateResult> =
        results.iter().map(|(name, result)| (*name, result)).collect();
    Ok(match format {
        Format::Json => format!("{}\n", serde_json::to_string_pretty(&keyed)?),
        _ => serde_yaml::to_string(&keyed)?,
    })
}

fn write_text(out: &mut String, result: &AggregateResult, indent: &str) {
    let error = Style::new().red().bold();
    let warning = Style::new().yellow();

    let _ = writeln!(out, "{}{}", indent, result.class_attr());
    if result.is_fixed {
        let _ = writeln!(out, "{}{}", indent, Style::new().cyan().apply_to("fixed: true"));
    }
    for message in &result.errors {
        let _ = writeln!(out, "{}{} {}", indent, error.apply_to("error:"), message);
    }
    for message in &result.warnings {
        let _ = writeln!(out, "{}{} {}", indent, warning.apply_to("warning:"), message);
    }
}
