//! wortkarte-client entry point
//!
//! Line-oriented flashcard session against the word service.

use std::io::Write;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use wortkarte_client::render::{Command, HELP, render};
use wortkarte_client::{ClientConfig, FlashcardClient, HttpWordSource, ViewState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Logs go to stderr so they do not interleave with the cards
  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .init();

  let config = ClientConfig::from_env().context("invalid client configuration")?;
  let source = HttpWordSource::from_config(&config).context("failed to build HTTP client")?;
  tracing::info!(url = source.url(), "word source configured");

  let mut client = FlashcardClient::new(source);

  println!("{}", render(&ViewState::Loading));
  show(client.mount().await)?;

  let mut lines = BufReader::new(tokio::io::stdin()).lines();
  while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
    if line.trim().is_empty() {
      continue;
    }

    match line.parse::<Command>() {
      Ok(Command::Quit) => break,
      Ok(Command::Help) => println!("{HELP}"),
      Ok(Command::NewWords) => {
        println!("{}", render(&ViewState::Loading));
        show(client.refresh().await)?;
      }
      Ok(Command::Toggle(position)) => {
        let id = client.model().cards().get(position - 1).map(|card| card.id());
        match id.and_then(|id| client.toggle(id)) {
          Some(_) => show(client.state())?,
          None => println!("No card at position {position}"),
        }
      }
      Err(message) => println!("{message}\n{HELP}"),
    }
  }

  Ok(())
}

fn show(state: &ViewState) -> anyhow::Result<()> {
  let mut stdout = std::io::stdout().lock();
  writeln!(stdout, "\n{}", render(state))?;
  writeln!(stdout, "{HELP}")?;
  stdout.flush()?;
  Ok(())
}
