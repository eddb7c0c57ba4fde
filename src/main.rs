// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Interview-Client command line
//!
//! Drives the client library against the interview API, persisting the
//! session and per-user state in a local JSON store.

use clap::{Parser, Subcommand};
use interview_client::{
    config::ClientConfig,
    models::{Article, Credentials},
    services::Theme,
    store::FileStore,
    ui::{Navigator, Notifier},
    InterviewClient,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "interview-client", about = "Interview API client")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create an account
    Register {
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Log in and store the session token
    Login {
        username: String,
        #[arg(long)]
        password: String,
    },
    /// End the session
    Logout,
    /// Show the current user
    Whoami,
    /// Manage viewing history
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
    /// Show or change the theme
    Theme {
        /// New theme tag; omit to show the current one
        tag: Option<String>,
    },
}

#[derive(Subcommand)]
enum HistoryAction {
    List,
    Add { id: String, title: String },
    Remove { id: String },
    Clear,
}

/// Prints notifications to stderr.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify_failure(&self, message: &str) {
        eprintln!("✗ {}", message);
    }
}

/// Tells the user where the application would go next.
struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate(&self, route: &str) {
        eprintln!("→ {}", route);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = ClientConfig::from_env()?;
    let store = Arc::new(FileStore::open(&config.storage_path)?);
    tracing::debug!(base_url = %config.api_base_url, "Client configured");

    let client = InterviewClient::new(
        config,
        store,
        Arc::new(ConsoleNavigator),
        Arc::new(ConsoleNotifier),
    )?;

    run(&client, cli.command).await
}

async fn run(client: &InterviewClient, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Register { username, password } => {
            let body = client
                .auth
                .register(&Credentials::new(username, password))
                .await?;
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        Command::Login { username, password } => {
            let data = client
                .session
                .login(&Credentials::new(username, password))
                .await?;
            println!("Logged in ({})", data.current_authority);
        }
        Command::Logout => {
            client.session.logout().await?;
            println!("Logged out");
        }
        Command::Whoami => {
            let identity = client.session.init().await;
            match client.session.cached_profile() {
                Some(profile) => println!(
                    "{} ({}) avatar={}",
                    profile.name.as_deref().unwrap_or(&profile.username),
                    profile.id,
                    client.avatars.normalize(Some(profile.avatar.as_str()))
                ),
                None => println!("{}", identity.id()),
            }
        }
        Command::History { action } => match action {
            HistoryAction::List => {
                for item in client.history.get_all().await {
                    println!(
                        "{}  {}  {}",
                        item.viewed_at,
                        item.article.id,
                        item.article.title.as_deref().unwrap_or("")
                    );
                }
            }
            HistoryAction::Add { id, title } => {
                report(client.history.add(Article::new(id, title)).await);
            }
            HistoryAction::Remove { id } => {
                report(client.history.remove_by_id(&id).await);
            }
            HistoryAction::Clear => {
                report(client.history.clear().await);
            }
        },
        Command::Theme { tag: None } => {
            println!("{}", client.theme.init().await);
        }
        Command::Theme { tag: Some(tag) } => {
            report(client.theme.set(&Theme::new(tag)).await);
        }
    }
    Ok(())
}

fn report(outcome: interview_client::outcome::Outcome<()>) {
    if let Some(reason) = outcome.reason() {
        eprintln!("warning: {}", reason);
    }
}

/// Initialize logging. `LOG_FORMAT=json` selects structured JSON output.
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("interview_client=info,warn"));

    let registry = tracing_subscriber::registry().with(filter);

    if std::env::var("LOG_FORMAT").is_ok_and(|v| v == "json") {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .with_current_span(true)
                    .flatten_event(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
