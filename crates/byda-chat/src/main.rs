use anyhow::{bail, Result};
use byda_chat::{ChatApi, ChatSession, DEFAULT_SERVER};
use byda_transcript::to_plain_text;
use byda_types::{is_catalog_id, CATALOG, DEMO_USER_ID};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "byda-chat")]
#[command(about = "Chat with Byda o.1 from the terminal")]
struct Args {
    /// Base URL of the Byda API
    #[arg(long, default_value = DEFAULT_SERVER)]
    server: String,

    /// Catalog capability to answer under
    #[arg(short, long, default_value = "coding")]
    capability: String,

    /// User owning the conversations
    #[arg(short, long, default_value = DEMO_USER_ID)]
    user: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List the capability catalog
    Capabilities,
    /// List the user's conversations, most recent first
    History,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Some(Command::Capabilities) => {
            for info in CATALOG.iter() {
                println!("{:<16} {:<20} {}", info.id, info.name, info.description);
            }
            Ok(())
        }
        Some(Command::History) => {
            let api = ChatApi::new(&args.server)?;
            for conversation in api.list_conversations(&args.user).await? {
                println!(
                    "{}  {:<16} {}",
                    conversation.updated_at.format("%Y-%m-%d %H:%M"),
                    conversation.capability,
                    conversation.title
                );
            }
            Ok(())
        }
        None => chat(args).await,
    }
}

async fn chat(args: Args) -> Result<()> {
    if !is_catalog_id(&args.capability) {
        bail!("unknown capability: {}", args.capability);
    }

    let mut session = ChatSession::new(ChatApi::new(&args.server)?, args.user);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        match session.send(&line, &args.capability).await {
            Ok(Some(views)) => println!("{}", to_plain_text(&views)),
            Ok(None) => {}
            // The prompt stays usable after a failed send
            Err(e) => tracing::error!(error = %e, "Failed to send message"),
        }
    }

    Ok(())
}
