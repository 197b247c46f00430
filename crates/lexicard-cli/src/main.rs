//! Lexicard CLI - Vocabulary flashcards from the terminal
//!
//! Adds and lists entries through the Lexicard API and looks up definitions
//! locally against public dictionaries.

mod api;
mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Input, Password, Select};
use tracing_subscriber::EnvFilter;

use api::{CreateVocabRequest, LexicardClient};
use config::Config;
use lexicard::{DefinitionCandidate, LookupReport};

#[derive(Parser)]
#[command(name = "lexicard")]
#[command(about = "Lexicard CLI - Vocabulary flashcards with dictionary lookup", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Login and store API key
    Login {
        /// API key (will prompt if not provided)
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Look up definitions for a word
    Lookup {
        /// Word to look up
        word: String,
        /// Show what every dictionary returned
        #[arg(short, long)]
        verbose: bool,
    },

    /// Add a vocab entry
    Add {
        /// Word to learn
        word: String,
        /// Meaning (looked up and picked interactively if omitted)
        #[arg(short, long)]
        meaning: Option<String>,
        /// Example sentence
        #[arg(short, long)]
        example: Option<String>,
        /// Subject tag (defaults to default_subject from config)
        #[arg(short, long)]
        subject: Option<String>,
    },

    /// List vocab entries
    List {
        /// Only show this subject ("all" for everything)
        #[arg(short, long)]
        subject: Option<String>,
    },

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Login { key } => cmd_login(key).await,
        Commands::Lookup { word, verbose } => cmd_lookup(word, verbose).await,
        Commands::Add {
            word,
            meaning,
            example,
            subject,
        } => cmd_add(word, meaning, example, subject).await,
        Commands::List { subject } => cmd_list(subject).await,
        Commands::Config => cmd_config(),
    }
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_login(key: Option<String>) -> Result<()> {
    let config = Config::load()?;

    let api_key = match key {
        Some(k) => k,
        None => Password::new()
            .with_prompt("API Key")
            .interact()
            .context("Failed to read API key")?,
    };

    // Test connection
    let client = LexicardClient::new(&config.base_url, &api_key);
    print!("Testing connection... ");

    match client.health().await {
        Ok(true) => {
            println!("{}", "OK".green());
        }
        _ => {
            println!("{}", "Failed".red());
            bail!("Could not connect to Lexicard API. Check your API key.");
        }
    }

    Config::store_api_key(api_key)?;

    println!("{} API key saved to {:?}", "✓".green(), Config::config_path()?);

    if config.default_subject.is_none() {
        println!("\n{}", "Tip: set default_subject in the config file to skip --subject".yellow());
    }

    Ok(())
}

async fn cmd_lookup(word: String, verbose: bool) -> Result<()> {
    let config = Config::load()?;
    let report = lookup(&config, &word).await?;

    if verbose {
        print_attempts(&report);
    }

    if report.candidates.is_empty() {
        println!("No definitions found for '{}' - enter the meaning manually", report.word);
        return Ok(());
    }

    println!(
        "{} for '{}' ({}):",
        "Definitions".bold(),
        report.word.cyan(),
        report.source.as_deref().unwrap_or("-").dimmed()
    );
    for (i, candidate) in report.candidates.iter().enumerate() {
        println!("  {}. {}", i + 1, format_candidate(candidate));
        if let Some(example) = &candidate.example {
            println!("     {}", format!("\"{}\"", example).dimmed());
        }
    }

    Ok(())
}

async fn cmd_add(
    word: String,
    meaning: Option<String>,
    example: Option<String>,
    subject: Option<String>,
) -> Result<()> {
    let config = Config::load()?;
    let api_key = config
        .api_key
        .as_ref()
        .context("Not logged in. Run 'lexicard login' first.")?;

    let subject = match config.subject_or_default(subject) {
        Some(subject) => subject,
        None => Input::new()
            .with_prompt("Subject")
            .interact_text()
            .context("Failed to read input")?,
    };

    let (meaning, suggested_example) = match meaning {
        Some(meaning) => (meaning, None),
        None => choose_meaning(&config, &word).await?,
    };

    let request = CreateVocabRequest {
        word,
        meaning,
        example: example.or(suggested_example),
        subject,
    };

    let client = LexicardClient::new(&config.base_url, api_key);
    let entry = client.add_vocab(&request).await?;

    println!(
        "{} Added {} to {}",
        "✓".green(),
        entry.word.cyan().bold(),
        entry.subject.cyan()
    );
    println!("  {}", truncate_string(&entry.meaning, 80).dimmed());

    Ok(())
}

/// Look the word up and let the user pick a suggestion or type a meaning
async fn choose_meaning(config: &Config, word: &str) -> Result<(String, Option<String>)> {
    let report = lookup(config, word).await?;

    if report.candidates.is_empty() {
        println!("No definitions found for '{}' - enter the meaning manually", word);
        let meaning: String = Input::new()
            .with_prompt("Meaning")
            .interact_text()
            .context("Failed to read input")?;
        return Ok((meaning, None));
    }

    let mut items: Vec<String> = report.candidates.iter().map(format_candidate).collect();
    items.push("Enter my own meaning".to_string());

    let selection = Select::new()
        .with_prompt(format!(
            "Pick a definition ({})",
            report.source.as_deref().unwrap_or("-")
        ))
        .items(&items)
        .default(0)
        .interact()
        .context("Failed to read selection")?;

    match report.candidates.into_iter().nth(selection) {
        Some(candidate) => Ok((candidate.definition, candidate.example)),
        None => {
            let meaning: String = Input::new()
                .with_prompt("Meaning")
                .interact_text()
                .context("Failed to read input")?;
            Ok((meaning, None))
        }
    }
}

async fn cmd_list(subject: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let api_key = config
        .api_key
        .as_ref()
        .context("Not logged in. Run 'lexicard login' first.")?;

    let client = LexicardClient::new(&config.base_url, api_key);
    let list = client.list_vocab(subject.as_deref()).await?;

    if list.entries.is_empty() {
        println!("No entries found for '{}'.", list.subject);
        return Ok(());
    }

    println!(
        "{} entries ({}):",
        list.count.to_string().green(),
        list.subject.cyan()
    );

    for entry in list.entries {
        let badge = format!("[{}]", entry.subject).dimmed();
        println!(
            "  {} {} - {}",
            badge,
            entry.word.bold(),
            truncate_string(&entry.meaning, 60)
        );
        if let Some(example) = entry.example {
            println!("      {}", truncate_string(&example, 70).dimmed());
        }
    }

    Ok(())
}

fn cmd_config() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Base URL: {}", config.base_url);
    println!(
        "  API Key: {}",
        if config.api_key.is_some() {
            "Set".green()
        } else {
            "Not set".red()
        }
    );
    println!(
        "  Default Subject: {}",
        config.default_subject.as_deref().unwrap_or("None").cyan()
    );

    let dictionary = config.dictionary_config();
    println!(
        "  Wiktionary: {} ({} section)",
        dictionary.wiktionary_edition, dictionary.wiktionary_language
    );
    println!(
        "  WordsAPI Key: {}",
        if dictionary.words_api_key.is_some() {
            "Set".green()
        } else {
            "Not set".yellow()
        }
    );
    println!(
        "  Lookup Budget: {}s per dictionary",
        dictionary.source_budget.as_secs()
    );

    Ok(())
}

async fn lookup(config: &Config, word: &str) -> Result<LookupReport> {
    let word = word.trim();
    if word.is_empty() {
        bail!("Word must not be empty");
    }

    let lookup = config
        .dictionary_config()
        .build_lookup()
        .context("Failed to set up dictionary lookup")?;

    Ok(lookup.lookup_report(word).await)
}

fn print_attempts(report: &LookupReport) {
    for attempt in &report.attempts {
        eprintln!("  {} {}", attempt.source.dimmed(), attempt.status);
    }
}

fn format_candidate(candidate: &DefinitionCandidate) -> String {
    format!("({}) {}", candidate.part_of_speech, candidate.definition)
}

/// Truncate string safely for UTF-8 (by char count, not bytes)
fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        format!("{}...", s.chars().take(max_chars).collect::<String>())
    } else {
        s.to_string()
    }
}
