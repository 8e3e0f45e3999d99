pub mod export;
pub mod files;
pub mod state;

use crate::generator::{stringify_recording, LogSink};
use crate::parser::RecordingError;
use crate::utils::Config;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;

pub use state::*;

/// Transform every recording matched by `inputs` into a WebdriverIO script.
///
/// Each file is handled by its own task with its own generator state. A file
/// that fails is reported and does not stop the others.
pub async fn run_transforms(inputs: &[String], config: &Config, dry: bool) -> Result<TransformSummary> {
    let files = files::expand_inputs(inputs, &config.recording_extension)?;

    if files.is_empty() {
        println!("{} No recording files found.", "ℹ".blue());
        return Ok(TransformSummary::default());
    }

    let config = Arc::new(config.clone());
    let handles: Vec<_> = files
        .into_iter()
        .map(|file| {
            let config = Arc::clone(&config);
            tokio::spawn(async move { transform_file(file, &config, dry).await })
        })
        .collect();

    let mut reports = Vec::new();
    for joined in futures::future::join_all(handles).await {
        reports.push(joined.context("Transform task panicked")?);
    }

    for report in &reports {
        print_report(report, &config);
    }

    Ok(TransformSummary::from_reports(&reports))
}

/// Read, translate and deliver one recording
pub async fn transform_file(file: PathBuf, config: &Config, dry: bool) -> FileReport {
    log::info!("Transforming {}", file.display());
    println!(
        "{}",
        format!("🤖 Running WebdriverIO transform on {}", file.display()).green()
    );

    let content = match tokio::fs::read_to_string(&file).await {
        Ok(content) => content,
        Err(e) => {
            return FileReport::new(
                file,
                FileStatus::Failed {
                    error: format!("Failed to read file: {}", e),
                },
            )
        }
    };

    let mut sink = LogSink::for_source(file.display().to_string());
    let script = match stringify_recording(&content, &config.indentation, &mut sink) {
        Ok(script) => script,
        Err(e @ RecordingError::Empty) => {
            return FileReport::new(file, FileStatus::Skipped { reason: e.to_string() })
        }
        Err(e) => return FileReport::new(file, FileStatus::Failed { error: e.to_string() }),
    };

    let status = if dry {
        FileStatus::Printed { script }
    } else {
        match files::test_name(&file) {
            None => FileStatus::Skipped {
                reason: "Please try again. No file or folder found".to_string(),
            },
            Some(name) => {
                match export::export_script(
                    &config.output_dir,
                    &name,
                    &config.script_extension,
                    &script,
                )
                .await
                {
                    Ok(output) => FileStatus::Written { output },
                    Err(e) => FileStatus::Failed {
                        error: format!("{:#}", e),
                    },
                }
            }
        }
    };

    log::info!("Finished {}: {}", file.display(), status.label());
    FileReport {
        path: file,
        status,
        diagnostics: sink.reported(),
    }
}

fn print_report(report: &FileReport, config: &Config) {
    match &report.status {
        FileStatus::Written { output } => {
            println!(
                "{}",
                format!(
                    "✅ {} exported to {}",
                    report.path.display(),
                    output.display()
                )
                .green()
            );
        }
        FileStatus::Printed { script } => {
            println!("{}", script);
        }
        FileStatus::Skipped { reason } => {
            println!("{} {}: {}", "⚠️".yellow(), report.path.display(), reason.yellow());
        }
        FileStatus::Failed { error } => {
            println!(
                "{}",
                format!(
                    "😭 Something went wrong exporting {} to {}: {}",
                    report.path.display(),
                    config.output_dir.display(),
                    error
                )
                .red()
            );
        }
    }

    if report.diagnostics > 0 {
        println!(
            "   {} step(s) in {} could not be exported, see warnings above",
            report.diagnostics.to_string().yellow(),
            report.path.display()
        );
    }
}
