//! # skinsight
//!
//! Adaptive follow-up questionnaire for a skin-image classifier result.
//!
//! ```bash
//! # classifier output saved by the upload page
//! skinsight assess --predictions predictions.json
//!
//! # or just the top label
//! skinsight assess --label basal_cell_cancer
//!
//! skinsight classify "Tinea Corporis"
//! skinsight config show
//! ```
//!
//! Prompts and logs go to stderr; the final result is printed to stdout
//! as JSON.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use eyre::{Result, WrapErr};
use skinsight_cli::config::{self, SkinsightConfig};
use skinsight_cli::prompt::run_questionnaire;
use skinsight_core::ClassifierResult;
use skinsight_engine::Session;
use skinsight_knowledge::classifier::{CATEGORY_RULES, classify_with};
use skinsight_knowledge::{CategoryBank, all_banks, ensure_valid};

#[derive(Parser, Debug)]
#[command(name = "skinsight")]
#[command(about = "Adaptive skin-condition questionnaire")]
#[command(version)]
struct Args {
    /// Config file (defaults to <config dir>/skinsight/config.json)
    #[arg(long, global = true, env = "SKINSIGHT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the questionnaire and print the result as JSON
    Assess {
        /// Classifier output (any supported JSON shape)
        #[arg(long, conflicts_with = "label", required_unless_present = "label")]
        predictions: Option<PathBuf>,

        /// Top classifier label, when no probabilities are available
        #[arg(long)]
        label: Option<String>,

        /// Single-line JSON output
        #[arg(long)]
        compact: bool,
    },
    /// Show which category a classifier label resolves to
    Classify { label: String },
    /// Check every built-in question bank for structural problems
    Validate,
    /// Inspect or manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print the effective config
    Show,
    /// Write the effective config back at the current version
    Init,
    /// Delete the config file
    Reset,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config_path = match args.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };

    match args.command {
        Command::Assess {
            predictions,
            label,
            compact,
        } => {
            let config = config::load_config(&config_path)?;
            let classifier = match (predictions, label) {
                (Some(path), _) => {
                    let json = std::fs::read_to_string(&path)
                        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
                    ClassifierResult::from_json(&json).wrap_err_with(|| {
                        format!("unusable classifier output in {}", path.display())
                    })?
                }
                (None, Some(label)) => ClassifierResult::from_label(label),
                (None, None) => {
                    return Err(eyre::eyre!("either --predictions or --label is required"));
                }
            };
            assess(classifier, &config, compact)
        }
        Command::Classify { label } => {
            let (category, kind) = classify_with(CATEGORY_RULES, &label);
            println!("{category} ({} match)", format!("{kind:?}").to_lowercase());
            Ok(())
        }
        Command::Validate => validate(),
        Command::Config { action } => match action {
            ConfigAction::Show => {
                let config = config::load_config(&config_path)?;
                eprintln!("{}", config_path.display());
                println!("{}", serde_json::to_string_pretty(&config)?);
                Ok(())
            }
            ConfigAction::Init => {
                let config = config::load_config(&config_path)?;
                config::save_config(&config, &config_path)
            }
            ConfigAction::Reset => config::delete_config(&config_path),
        },
    }
}

fn assess(classifier: ClassifierResult, config: &SkinsightConfig, compact: bool) -> Result<()> {
    let mut session = Session::from_classifier(classifier, config.engine.clone());
    ensure_valid(session.bank())?;

    let stdin = io::stdin();
    let mut stderr = io::stderr();
    let result = run_questionnaire(&mut session, stdin.lock(), &mut stderr)?;

    if config.thinking_delay_ms > 0 {
        eprintln!("\nAnalyzing your answers...");
        std::thread::sleep(Duration::from_millis(config.thinking_delay_ms));
    }

    let json = if compact {
        serde_json::to_string(&result)?
    } else {
        serde_json::to_string_pretty(&result)?
    };
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}

fn validate() -> Result<()> {
    let mut problems = 0;
    for bank in all_banks() {
        let errors = bank.validate();
        for error in &errors {
            tracing::warn!(category = %error.category, subject = %error.subject, "{error}");
        }
        if errors.is_empty() {
            tracing::info!(
                category = %bank.category(),
                questions = bank.questions().len(),
                conditions = bank.conditions().len(),
                "bank ok"
            );
        }
        problems += errors.len();
    }

    if problems > 0 {
        return Err(eyre::eyre!("{problems} problem(s) found in the built-in banks"));
    }
    Ok(())
}
