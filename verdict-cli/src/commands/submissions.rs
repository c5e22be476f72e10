//! Submission command handlers

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use verdict_client::StoreClient;
use verdict_core::dto::submission::SubmissionRecord;

use crate::config::Config;

/// Submission subcommands
#[derive(Subcommand)]
pub enum SubmissionCommands {
    /// List stored submissions, newest first
    List {
        /// Only show submissions for this question
        #[arg(short, long)]
        question_index: Option<i32>,
    },
}

/// Handle submission commands
pub async fn handle_submission_command(command: SubmissionCommands, config: &Config) -> Result<()> {
    let client = StoreClient::new(&config.relay_url);

    match command {
        SubmissionCommands::List { question_index } => list_submissions(&client, question_index).await,
    }
}

async fn list_submissions(client: &StoreClient, question_index: Option<i32>) -> Result<()> {
    let records = client
        .list(question_index)
        .await
        .with_context(|| format!("Failed to list submissions from {}", client.base_url()))?;

    if records.is_empty() {
        println!("{}", "No submissions found.".yellow());
        return Ok(());
    }

    println!("{}", format!("Found {} submission(s):", records.len()).bold());
    println!();
    for record in &records {
        print_submission_summary(record);
    }

    Ok(())
}

fn print_submission_summary(record: &SubmissionRecord) {
    let verdict = if record.is_correct {
        "✓ correct".green()
    } else {
        "✗ incorrect".red()
    };

    println!("  {} Submission {}", "▸".cyan(), record.id.to_string().dimmed());
    println!("    Language:  {}", record.language);
    if let Some(index) = record.question_index {
        println!("    Question:  {}", index);
    }
    println!(
        "    Result:    {} ({}/{} passed)",
        verdict,
        record.result.passed(),
        record.result.len()
    );
    println!(
        "    User:      {}",
        record.user_id.as_deref().unwrap_or("anonymous").dimmed()
    );
    println!(
        "    Submitted: {}",
        record
            .submitted_at
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
            .dimmed()
    );
    println!();
}
