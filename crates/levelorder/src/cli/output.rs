//! Rendering of command results.

use serde::Serialize;

use crate::config::OutputFormat;
use crate::digits;
use crate::error::Result;
use crate::traversal::{Algorithm, Levels};

/// Result of checking one number for confusability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConfusingReport {
    /// The number checked.
    pub number: u64,
    /// The number rotated by 180°, if every digit rotates.
    pub rotated: Option<u128>,
    /// Whether the rotated number differs from the original.
    pub confusing: bool,
}

impl ConfusingReport {
    /// Check `number`.
    #[must_use]
    pub fn check(number: u64) -> Self {
        Self {
            number,
            rotated: digits::rotate(number),
            confusing: digits::is_confusing(number),
        }
    }
}

#[derive(Serialize)]
struct Comparison<'a> {
    algorithms: Vec<String>,
    agree: bool,
    levels: &'a Levels,
}

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    })
}

fn plain_levels(levels: &Levels) -> String {
    levels
        .iter()
        .map(|level| {
            level
                .iter()
                .map(i32::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render traversal levels.
///
/// Plain output prints one level per line with values separated by spaces.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_levels(levels: &Levels, format: OutputFormat, pretty: bool) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(plain_levels(levels)),
        OutputFormat::Json => to_json(levels, pretty),
    }
}

/// Render the shared result of an algorithm comparison.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_comparison(levels: &Levels, format: OutputFormat, pretty: bool) -> Result<String> {
    let names: Vec<String> = Algorithm::ALL.iter().map(ToString::to_string).collect();
    match format {
        OutputFormat::Plain => {
            let mut out = plain_levels(levels);
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&format!("{} agree", names.join(", ")));
            Ok(out)
        }
        OutputFormat::Json => to_json(
            &Comparison {
                algorithms: names,
                agree: true,
                levels,
            },
            pretty,
        ),
    }
}

/// Render confusing-number reports.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_confusing(
    reports: &[ConfusingReport],
    format: OutputFormat,
    pretty: bool,
) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(reports
            .iter()
            .map(|report| match (report.rotated, report.confusing) {
                (None, _) => format!("{}: not confusing (cannot be rotated)", report.number),
                (Some(_), false) => format!("{}: not confusing (rotates to itself)", report.number),
                (Some(rotated), true) => {
                    format!("{}: confusing (rotates to {rotated})", report.number)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => to_json(reports, pretty),
    }
}
