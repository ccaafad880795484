//! palaver CLI binary entry point.

use std::io::Write;
use std::sync::Arc;

use clap::Parser;
use palaver::cli::{render_turn, Cli, Input, INPUT_PROMPT};
use palaver::error::Result;
use palaver::gateway::CompletionGateway;
use palaver::provider::{http, openai::OpenAiChatProvider};
use palaver::session::ChatSession;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "palaver=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.load_config()?;
    tracing::debug!(?config, "configuration loaded");

    let provider = OpenAiChatProvider::new(
        http::build_client()?,
        config.api_key(),
        config.base_url().map(str::to_string),
    );
    let gateway = CompletionGateway::builder()
        .provider(Arc::new(provider))
        .model(config.model())
        .system_prompt(config.system_prompt())
        .build();
    let mut session = ChatSession::new(&gateway);

    if let Some(prompt) = cli.prompt {
        let reply = session.submit(&prompt).await;
        println!("{}", reply.content());
        return Ok(());
    }

    println!("{}", config.persona().title());
    println!();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{INPUT_PROMPT}> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };

        match Input::parse(&line) {
            Input::Empty => continue,
            Input::Exit => break,
            Input::History => {
                for turn in session.conversation() {
                    println!("{}", render_turn(turn));
                }
            }
            Input::Message(text) => {
                let reply = session.submit(text).await;
                println!("{}", render_turn(reply));
            }
        }
    }

    Ok(())
}
