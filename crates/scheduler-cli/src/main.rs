//! `scheduler`: admin commands for the office-scoped scheduler store.
//!
//! Reads `scheduler.toml` (or the path given with `--config`), opens the
//! SQLite store, runs one command, and prints the result as pretty JSON on
//! stdout. Logs go to stderr.
//!
//! ```text
//! scheduler office create --name Main --time-zone Europe/Moscow
//! scheduler client create --office <OFFICE_ID> --name "Client 11"
//! scheduler subject create --office <OFFICE_ID> --file algebra.json
//! scheduler subject list --office <OFFICE_ID> --on 2024-01-01
//! ```

mod command;
mod settings;

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use scheduler_store_sqlite::SqliteStore;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::{command::Command, settings::CliConfig};

#[derive(Parser, Debug)]
#[command(name = "scheduler", author, version, about = "Office-scoped scheduler admin")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "scheduler.toml")]
  config: PathBuf,

  #[command(subcommand)]
  command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();
  let cfg = CliConfig::load(&cli.config)?;

  let store = SqliteStore::open(&cfg.store_path)
    .await
    .with_context(|| format!("failed to open store at {:?}", cfg.store_path))?;
  tracing::info!(store = %cfg.store_path.display(), "store opened");

  let output = command::run(cli.command, Arc::new(store)).await?;
  println!("{}", serde_json::to_string_pretty(&output)?);

  Ok(())
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory as _;
  use scheduler_core::store::OfficeRepository as _;
  use serde_json::json;

  use super::*;

  #[test]
  fn cli_definition_is_consistent() { Cli::command().debug_assert(); }

  #[test]
  fn subject_create_needs_exactly_one_payload() {
    let parse = |extra: &[&str]| {
      let mut args = vec!["scheduler", "subject", "create", "--office", "o"];
      args.extend_from_slice(extra);
      Cli::try_parse_from(args)
    };

    assert!(parse(&[]).is_err());
    assert!(parse(&["--json", "{}", "--file", "x.json"]).is_err());
    assert!(parse(&["--json", "{}"]).is_ok());
  }

  #[test]
  fn list_on_parses_a_date() {
    let cli = Cli::try_parse_from([
      "scheduler", "subject", "list", "--office", "o", "--on", "2024-01-01",
    ])
    .unwrap();
    assert!(matches!(
      cli.command,
      Command::Subject(command::SubjectCommand::List { on: Some(_), .. })
    ));

    assert!(
      Cli::try_parse_from(["scheduler", "subject", "list", "--office", "o", "--on", "Monday"])
        .is_err()
    );
  }

  async fn exec(store: &Arc<SqliteStore>, args: &[&str]) -> anyhow::Result<serde_json::Value> {
    let cli = Cli::try_parse_from(std::iter::once("scheduler").chain(args.iter().copied()))?;
    command::run(cli.command, store.clone()).await
  }

  #[tokio::test]
  async fn commands_round_trip_through_the_services() {
    let store = Arc::new(SqliteStore::open_in_memory().await.unwrap());

    let office = exec(&store, &["office", "create", "--name", "Main", "--time-zone", "UTC"])
      .await
      .unwrap();
    let office_id = office["id"].as_str().unwrap().to_owned();
    assert_eq!(store.list_offices().await.unwrap().len(), 1);

    let group = exec(&store, &["group", "create", "--office", &office_id, "--name", "G1"])
      .await
      .unwrap();
    let payload = json!({
      "name": "Algebra",
      "periodicity": { "type": "daily" },
      "time": { "start": "09:00", "end": "10:00" },
      "groupId": group["id"],
      "requiredTeachers": 1
    })
    .to_string();

    let subject = exec(&store, &["subject", "create", "--office", &office_id, "--json", &payload])
      .await
      .unwrap();
    assert_eq!(subject["periodicity"], json!({ "type": "daily" }));
    assert_eq!(subject["requiredTeachers"], json!(1));

    let listed = exec(&store, &["subject", "list", "--office", &office_id]).await.unwrap();
    assert_eq!(listed, json!([subject]));

    let err = exec(&store, &["client", "list", "--office", "wrong-office-id"])
      .await
      .unwrap_err();
    assert_eq!(err.to_string(), "Office not found");
  }
}
