//! PromptDeck CLI - Prompt management
//!
//! List, add, update and remove prompts stored behind a REST backend.

mod browse;
mod config;
mod render;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Input;
use tracing_subscriber::EnvFilter;

use promptdeck::domain::validate_field;
use promptdeck::{
    AddPrompt, Field, FetchPrompts, HttpPromptApi, NewPrompt, OperationKind, OperationRunner,
    Prompt, PromptClient, PromptStore, PromptUpdate, RemovePrompt, RunCallbacks, UpdatePrompt,
};

use config::{Config, BASE_URL_ENV};

const DEFAULT_TITLE: &str = "New prompt";
const DEFAULT_PROMPT: &str = "Do this, do that!";

#[derive(Parser)]
#[command(name = "promptdeck")]
#[command(about = "PromptDeck CLI - Prompt management", long_about = None)]
#[command(version)]
struct Cli {
    /// Backend base URL (overrides config and PROMPTDECK_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List prompts, newest first
    List {
        /// Show prompt text and timestamps
        #[arg(short, long)]
        expand: bool,
    },

    /// Add a new prompt
    Add {
        /// Prompt title (will prompt if not provided)
        #[arg(short, long)]
        title: Option<String>,
        /// Prompt text (will prompt if not provided)
        #[arg(short, long)]
        prompt: Option<String>,
    },

    /// Update an existing prompt
    Update {
        /// Prompt ID
        id: String,
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// New prompt text
        #[arg(short, long)]
        prompt: Option<String>,
    },

    /// Remove a prompt
    Remove {
        /// Prompt ID
        id: String,
    },

    /// Browse and edit prompts interactively
    Browse,

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Persist a new backend base URL
    SetUrl {
        /// e.g. http://localhost:3005
        url: String,
    },
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
    let config = Config::resolve(cli.base_url.as_deref())?;

    match cli.command {
        Commands::List { expand } => cmd_list(&connect(&config)?, expand).await,
        Commands::Add { title, prompt } => cmd_add(&connect(&config)?, title, prompt).await,
        Commands::Update { id, title, prompt } => {
            cmd_update(&connect(&config)?, id, title, prompt).await
        }
        Commands::Remove { id } => cmd_remove(&connect(&config)?, id).await,
        Commands::Browse => browse::run(connect(&config)?).await,
        Commands::Config { action } => cmd_config(action),
    }
}

fn connect(config: &Config) -> Result<PromptClient> {
    let api = HttpPromptApi::with_timeout(&config.base_url, config.timeout())
        .context("Failed to build HTTP client")?;
    Ok(PromptClient::new(api, PromptStore::new()))
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_list(client: &PromptClient, expand: bool) -> Result<()> {
    fetch(client).await?;

    let store = client.store();
    if expand {
        for item in store.snapshot().data {
            store.set_expanded(item.id(), true);
        }
    }

    println!("{}", render::render_list(&store.snapshot().data));
    Ok(())
}

async fn cmd_add(
    client: &PromptClient,
    title: Option<String>,
    prompt: Option<String>,
) -> Result<()> {
    let input = NewPrompt::new(
        field_value(Field::Title, title, DEFAULT_TITLE)?,
        field_value(Field::Prompt, prompt, DEFAULT_PROMPT)?,
    );
    input.validate()?;

    let runner = OperationRunner::new(client.clone(), AddPrompt);
    let created = runner
        .run(input, RunCallbacks::new())
        .await
        .context(render::failure_title(OperationKind::Create))?;

    println!(
        "{} Prompt '{}' added [{}]",
        "✓".green(),
        created.title.cyan(),
        created.id.dimmed()
    );
    Ok(())
}

async fn cmd_update(
    client: &PromptClient,
    id: String,
    title: Option<String>,
    prompt: Option<String>,
) -> Result<()> {
    let original = find_prompt(client, &id).await?;

    let (title, prompt) = match (title, prompt) {
        (None, None) => (
            ask_field(Field::Title, &original.title)?,
            ask_field(Field::Prompt, &original.body)?,
        ),
        (title, prompt) => (
            title.unwrap_or_else(|| original.title.clone()),
            prompt.unwrap_or_else(|| original.body.clone()),
        ),
    };

    let update = PromptUpdate::for_prompt(&original, title, prompt);
    update.validate_against(&original)?;

    let runner = OperationRunner::new(client.clone(), UpdatePrompt);
    let changes = runner
        .run(update, RunCallbacks::new())
        .await
        .context(render::failure_title(OperationKind::Update))?;

    println!("{} Prompt '{}' updated", "✓".green(), changes.title.cyan());
    Ok(())
}

async fn cmd_remove(client: &PromptClient, id: String) -> Result<()> {
    let item = find_prompt(client, &id).await?;

    let runner = OperationRunner::new(client.clone(), RemovePrompt);
    let removed = runner
        .run(item, RunCallbacks::new())
        .await
        .context(render::failure_title(OperationKind::Delete))?;

    println!("{} Prompt '{}' removed", "✓".green(), removed.title.cyan());
    Ok(())
}

fn cmd_config(action: Option<ConfigAction>) -> Result<()> {
    let mut config = Config::load()?;

    if let Some(ConfigAction::SetUrl { url }) = action {
        config.base_url = url;
        config.save()?;
        println!("{} Base URL set to {}", "✓".green(), config.base_url.cyan());
        return Ok(());
    }

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Base URL: {}", config.base_url);
    println!("  Timeout: {}s", config.timeout_secs);
    if let Ok(url) = std::env::var(BASE_URL_ENV) {
        println!("  {} overrides Base URL: {}", BASE_URL_ENV, url.yellow());
    }

    Ok(())
}

// ============================================
// Helpers
// ============================================

async fn fetch(client: &PromptClient) -> Result<()> {
    let runner = OperationRunner::new(client.clone(), FetchPrompts);
    eprintln!("{}", "Loading prompts...".dimmed());

    if let Err(e) = runner.run((), RunCallbacks::new()).await {
        bail!("{} while fetching prompts...", e.message());
    }
    Ok(())
}

async fn find_prompt(client: &PromptClient, id: &str) -> Result<Prompt> {
    fetch(client).await?;
    client
        .store()
        .snapshot()
        .find(id)
        .map(|item| item.prompt.clone())
        .with_context(|| format!("Prompt '{}' not found", id))
}

/// Use the flag value if given, otherwise ask interactively
fn field_value(field: Field, value: Option<String>, default: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => ask_field(field, default),
    }
}

/// Read one form field, re-asking until it passes validation
pub(crate) fn ask_field(field: Field, initial: &str) -> Result<String> {
    let label = match field {
        Field::Title => "Prompt title",
        Field::Prompt => "Prompt",
    };

    Input::<String>::new()
        .with_prompt(label)
        .with_initial_text(initial)
        .validate_with(move |value: &String| validate_field(field, value).map_err(|e| e.to_string()))
        .interact_text()
        .context("Failed to read input")
}
