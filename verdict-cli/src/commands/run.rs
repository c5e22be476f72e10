//! Run command
//!
//! Judges a source file against a suite and prints one row per test case.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use verdict_core::domain::language::Language;
use verdict_core::domain::submission::{ResourceLimits, SubmissionTemplate};
use verdict_core::domain::verdict::{CaseVerdict, SuiteReport};
use verdict_core::dto::submission::Attribution;
use verdict_runner::{Config as EngineConfig, SuiteOrchestrator};

use crate::config::Config;
use crate::suite::Suite;

/// Arguments of `verdict run`
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Source file to judge
    pub source: PathBuf,

    /// Suite file (JSON)
    #[arg(short, long)]
    pub suite: PathBuf,

    /// Language of the source file (python, java, c)
    #[arg(short, long)]
    pub language: Language,

    /// Extra compiler flags (e.g. -lm)
    #[arg(long, allow_hyphen_values = true)]
    pub compiler_options: Option<String>,

    /// Test cases in flight at once; 1 runs them one after another
    #[arg(short, long, default_value_t = 3)]
    pub concurrency: usize,

    /// Delay before each status query
    #[arg(long, default_value_t = 500)]
    pub poll_interval_ms: u64,

    /// Status queries per test case before giving up
    #[arg(long, default_value_t = 10)]
    pub max_attempts: u32,

    /// Longest a single backend request may take
    #[arg(long, default_value_t = 10_000)]
    pub request_timeout_ms: u64,

    /// CPU time limit in seconds
    #[arg(long, default_value_t = 2.0)]
    pub cpu_time_limit: f64,

    /// Memory limit in KB
    #[arg(long, default_value_t = 128_000)]
    pub memory_limit: u64,

    /// Store the result through the relay
    #[arg(long)]
    pub save: bool,

    /// User to attribute the stored submission to
    #[arg(long, requires = "save")]
    pub user_id: Option<String>,

    /// Question to attribute the stored submission to
    #[arg(long, requires = "save")]
    pub question_index: Option<i32>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl RunArgs {
    fn limits(&self) -> ResourceLimits {
        ResourceLimits {
            cpu_time_limit_seconds: self.cpu_time_limit,
            memory_limit_kb: self.memory_limit,
        }
    }

    fn template(&self, source_code: String) -> SubmissionTemplate {
        let template = SubmissionTemplate::new(source_code, self.language).with_limits(self.limits());
        match &self.compiler_options {
            Some(options) => template.with_compiler_options(options.clone()),
            None => template,
        }
    }

    fn engine_config(&self, config: &Config) -> Result<EngineConfig> {
        let mut engine = EngineConfig::new(config.backend_url.clone());
        engine.backend_token = config.backend_token.clone();
        engine.poll_interval = Duration::from_millis(self.poll_interval_ms);
        engine.max_poll_attempts = self.max_attempts;
        engine.request_timeout = Duration::from_millis(self.request_timeout_ms);
        engine.max_concurrent_cases = self.concurrency;
        engine.limits = self.limits();
        if self.save {
            engine = engine.with_store_url(config.relay_url.clone());
        }

        engine.validate()?;
        Ok(engine)
    }

    fn attribution(&self) -> Attribution {
        Attribution {
            user_id: self.user_id.clone(),
            question_index: self.question_index,
        }
    }
}

/// Handle `verdict run`
pub async fn handle_run(args: RunArgs, config: &Config) -> Result<()> {
    let source_code = std::fs::read_to_string(&args.source)
        .with_context(|| format!("Failed to read source file {}", args.source.display()))?;
    let suite = Suite::load(&args.suite)?;

    let template = args.template(source_code);
    let engine = args.engine_config(config)?;
    let orchestrator = SuiteOrchestrator::from_config(&engine);

    if !args.json {
        let fallback = args.source.display().to_string();
        println!(
            "{} {} ({}, {} test case(s))",
            "Judging".bold(),
            suite.title_or(&fallback).cyan(),
            template.language,
            suite.test_cases.len()
        );
        println!();
    }

    let cancel = async {
        // Without a signal handler the run simply cannot be interrupted
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    let Some(report) = orchestrator
        .run_suite_until(&template, &suite.test_cases, cancel)
        .await
    else {
        anyhow::bail!("Run cancelled");
    };

    let saved = args.save && orchestrator.record(&template, &report, &args.attribution()).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
        if args.save {
            print_save_status(saved, &config.relay_url);
        }
    }

    if !report.all_correct {
        anyhow::bail!(
            "{} of {} test case(s) did not pass",
            report.len() - report.passed(),
            report.len()
        );
    }

    Ok(())
}

fn print_report(report: &SuiteReport) {
    for verdict in &report.verdicts {
        print_verdict(verdict);
    }

    println!("{}", "─".repeat(60).dimmed());
    let summary = format!("Passed {}/{}", report.passed(), report.len());
    if report.all_correct {
        println!("{} {}", summary.bold(), "All test cases passed".green());
    } else {
        println!("{} {}", summary.bold(), "Some test cases failed".red());
    }
}

fn print_verdict(verdict: &CaseVerdict) {
    let marker = match verdict.is_correct {
        Some(true) => "✓".green(),
        Some(false) => "✗".red(),
        None => "?".yellow(),
    };

    println!(
        "  {} {}  {}",
        marker,
        verdict.test_case.name().bold(),
        colorize_status(verdict)
    );
    println!("    Expected: {}", verdict.test_case.expected_output());
    println!("    Actual:   {}", verdict.result.output);
    if let Some(error) = &verdict.error_message {
        println!("    Error:    {}", error.trim_end().red());
    }
    println!();
}

fn colorize_status(verdict: &CaseVerdict) -> ColoredString {
    let label = verdict.result.status_label.as_str();
    match verdict.is_correct {
        Some(true) => label.green(),
        Some(false) => label.red(),
        None => label.yellow(),
    }
}

fn print_save_status(saved: bool, relay_url: &str) {
    if saved {
        println!("{}", format!("Submission saved to {}", relay_url).dimmed());
    } else {
        println!("{}", format!("⚠ Could not save submission to {}", relay_url).yellow());
    }
}
