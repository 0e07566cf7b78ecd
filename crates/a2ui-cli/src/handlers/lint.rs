use crate::config::Config;
use crate::types::OutputFormat;
use a2ui_engine::types::{DEFAULT_ROOT, Message};
use a2ui_engine::{Replay, ValidationError, read_jsonl, validate_components};
use anyhow::{Context, Result, bail};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader};

/// A structural error found in one `updateComponents` snapshot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub line: usize,
    pub surface_id: String,
    #[serde(flatten)]
    pub error: ValidationError,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LintReport {
    pub messages: usize,
    pub snapshots: usize,
    pub surfaces: usize,
    pub findings: Vec<Finding>,
}

pub fn handle(input: &str, format: OutputFormat, config: &Config) -> Result<()> {
    let messages = if input == "-" {
        read_jsonl(io::stdin().lock()).context("failed to read stdin")?
    } else {
        let file = File::open(input).with_context(|| format!("failed to open {}", input))?;
        read_jsonl(BufReader::new(file)).with_context(|| format!("failed to read {}", input))?
    };

    let report = lint(messages);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Plain => print_plain(&report),
    }

    if !report.findings.is_empty() && config.lint.fail_on_error {
        bail!("{} structural error(s) found", report.findings.len());
    }

    Ok(())
}

/// Replay the stream and validate each component snapshot against the root
/// its surface has at that point.
pub fn lint(messages: Vec<(usize, Message)>) -> LintReport {
    let mut replay = Replay::new();
    let mut report = LintReport {
        messages: messages.len(),
        ..Default::default()
    };

    for (line, message) in messages {
        if let Message::UpdateComponents(update) = &message {
            let root = replay
                .surface(&update.surface_id)
                .map(|mirror| mirror.root())
                .unwrap_or(DEFAULT_ROOT);

            let errors = validate_components(root, &update.components);
            tracing::debug!(line, surface_id = %update.surface_id, errors = errors.len(), "checked snapshot");

            report.snapshots += 1;
            report
                .findings
                .extend(errors.into_iter().map(|error| Finding {
                    line,
                    surface_id: update.surface_id.clone(),
                    error,
                }));
        }
        replay.apply(message);
    }

    report.surfaces = replay.len();
    report
}

fn print_plain(report: &LintReport) {
    let color = io::stdout().is_terminal();

    for finding in &report.findings {
        let location = format!("line {} [{}]", finding.line, finding.surface_id);
        if color {
            println!("{} {}", location.dimmed(), finding.error.red());
        } else {
            println!("{} {}", location, finding.error);
        }
    }

    let summary = format!(
        "{} message(s), {} snapshot(s), {} surface(s) open",
        report.messages, report.snapshots, report.surfaces
    );

    if report.findings.is_empty() {
        if color {
            println!("{} {}", "ok".green().bold(), summary);
        } else {
            println!("ok {}", summary);
        }
    } else if color {
        println!(
            "{} {}: {} error(s)",
            "fail".red().bold(),
            summary,
            report.findings.len()
        );
    } else {
        println!("fail {}: {} error(s)", summary, report.findings.len());
    }
}
