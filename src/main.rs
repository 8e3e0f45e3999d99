use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use lumi_replay::{runner, utils};

#[derive(Parser)]
#[command(name = "lumi-replay")]
#[command(author = "NL Team")]
#[command(version = "0.1.0")]
#[command(about = "Convert Chrome DevTools recordings into WebdriverIO tests", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transform recording file(s) into WebdriverIO scripts
    Transform {
        /// Recording files, directories or glob patterns
        #[arg(required = true)]
        files: Vec<String>,

        /// Output directory for generated scripts
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print generated scripts instead of writing them
        #[arg(long, default_value = "false")]
        dry: bool,

        /// Spaces per indentation level
        #[arg(long, default_value = "2")]
        indent: usize,
    },

    /// List key names supported in keyDown/keyUp steps
    Keys,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Transform {
            files,
            output,
            dry,
            indent,
        } => {
            let mut config = utils::Config::default().with_indent_width(indent);
            if let Some(output) = output {
                config = config.with_output_dir(output);
            }

            if !dry {
                println!(
                    "{} Exporting to: {}",
                    "📁".to_string().blue(),
                    config.output_dir.display().to_string().cyan()
                );
            }

            let summary = runner::run_transforms(&files, &config, dry).await?;

            println!(
                "\n{} {} file(s): {} written, {} printed, {} skipped, {} failed",
                "📊".to_string().blue(),
                summary.total_files,
                summary.written.to_string().green(),
                summary.printed,
                summary.skipped.to_string().yellow(),
                summary.failed.to_string().red()
            );

            if summary.is_failure() {
                anyhow::bail!("No recording could be transformed");
            }
        }

        Commands::Keys => {
            for key in lumi_replay::generator::keys::supported_keys() {
                println!("{:<16} {:<16} {}", key.name, key.constant, key.js_value());
            }
        }
    }

    Ok(())
}
