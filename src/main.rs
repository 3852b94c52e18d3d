//! cyber-nj command-line binary.
//!
//! # Usage
//!
//! ```bash
//! cyber-nj assess <67 digits 1-5> [--consent] [--gender G] [--mbti CODE]
//! cyber-nj assess --random
//! cyber-nj import <file|->
//! ```
//!
//! Results are printed to stdout as JSON; logs go to stderr.
//!
//! # Environment Variables
//!
//! - `CYBER_NJ__MODEL__ARTIFACT_PATH` - Model artifact (default: best_mbti_model.json)
//! - `CYBER_NJ__MODEL__SHA256` - Expected artifact digest
//! - `CYBER_NJ__MAPPING__ELEMENTS_POLICY` - `enhanced` (default) or `linear`
//! - `CYBER_NJ__STORAGE__QUESTION_BANK_PATH` - Question bank file
//! - `CYBER_NJ__STORAGE__RESEARCH_LOG_PATH` - Research CSV (default: research_data.csv)
//! - `RUST_LOG` - Tracing filter

use std::io::Read;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::json;

use cyber_nj::application::AssessmentService;
use cyber_nj::config::AppConfig;
use cyber_nj::domain::foundation::{AnswerSet, DomainError, PersonalityType};
use cyber_nj::domain::report::Consent;
use cyber_nj::telemetry;

/// Constitution questionnaire scoring with elements and personality mapping
#[derive(Debug, Parser)]
#[command(name = "cyber-nj")]
#[command(version)]
#[command(about = "Score a constitution questionnaire or import a diagnostic payload")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score 67 answers and print the assessment
    Assess {
        /// Answers as 67 digits from 1 to 5
        #[arg(required_unless_present = "random")]
        digits: Option<String>,

        /// Fill the questionnaire with a random profile
        #[arg(long, conflicts_with = "digits")]
        random: bool,

        /// Donate this submission to the research log
        #[arg(long)]
        consent: bool,

        /// Gender recorded with a consenting submission
        #[arg(long, requires = "consent")]
        gender: Option<String>,

        /// Self-reported personality code, e.g. INTJ
        #[arg(long, requires = "consent")]
        mbti: Option<String>,
    },
    /// Parse a marked diagnostic payload from a file or `-` for stdin
    Import { source: String },
}

fn run_assess(
    service: &AssessmentService,
    digits: Option<&str>,
    random: bool,
    consent: bool,
    gender: Option<String>,
    mbti: Option<&str>,
) -> Result<serde_json::Value, String> {
    let (random_target, answers) = if random {
        let (target, answers) = AnswerSet::random_profile(&mut rand::thread_rng());
        (Some(target), answers)
    } else {
        let digits = digits.unwrap_or_default();
        (None, AnswerSet::from_digits(digits).map_err(|e| e.to_string())?)
    };

    let assessment = service.assess(&answers).map_err(|e| e.to_string())?;

    // random fills are never donated
    let recorded = if consent && !random {
        let self_reported = mbti
            .map(str::parse::<PersonalityType>)
            .transpose()
            .map_err(|e| e.to_string())?;
        let consent = Consent::Granted {
            gender: gender.unwrap_or_else(|| "保密".to_string()),
            self_reported,
        };
        service
            .record_submission(&assessment, &answers, consent)
            .map_err(|e| DomainError::from(e).to_string())?;
        true
    } else {
        false
    };

    Ok(json!({
        "answers": answers.to_digits(),
        "random_target": random_target,
        "assessment": assessment,
        "recorded": recorded,
    }))
}

fn run_import(service: &AssessmentService, source: &str) -> Result<serde_json::Value, String> {
    let text = if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("cannot read stdin: {}", e))?;
        buf
    } else {
        std::fs::read_to_string(source).map_err(|e| format!("cannot read {}: {}", source, e))?
    };

    let imported = service.import_payload(&text).map_err(|e| e.to_string())?;
    serde_json::to_value(imported).map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    telemetry::init(&config.logging);

    if let Err(e) = config.validate() {
        tracing::error!("Invalid configuration: {}", e);
        return ExitCode::FAILURE;
    }

    let service = match AssessmentService::from_config(&config) {
        Ok(service) => service,
        Err(e) => {
            tracing::error!("Failed to start: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Command::Assess {
            digits,
            random,
            consent,
            gender,
            mbti,
        } => run_assess(
            &service,
            digits.as_deref(),
            random,
            consent,
            gender,
            mbti.as_deref(),
        ),
        Command::Import { source } => run_import(&service, &source),
    };

    match result.and_then(|value| serde_json::to_string_pretty(&value).map_err(|e| e.to_string())) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
    }
}
