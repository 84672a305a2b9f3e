//! Command-line surface and dispatch onto the application services.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use scheduler_app::{
  dto::{CreateClientDto, CreateGroupDto, CreateOfficeDto, CreateSubjectDto},
  ClientsService, GroupsService, OfficesService, SubjectsService,
};
use scheduler_core::store::SchedulerStore;
use serde::Serialize;
use serde_json::json;

#[derive(Subcommand, Debug)]
pub enum Command {
  /// Manage offices.
  #[command(subcommand)]
  Office(OfficeCommand),
  /// Manage clients of an office.
  #[command(subcommand)]
  Client(ClientCommand),
  /// Manage groups of an office.
  #[command(subcommand)]
  Group(GroupCommand),
  /// Manage subjects of an office.
  #[command(subcommand)]
  Subject(SubjectCommand),
}

#[derive(Subcommand, Debug)]
pub enum OfficeCommand {
  Create {
    #[arg(long)]
    name:      String,
    /// IANA zone name, e.g. `Europe/Moscow`.
    #[arg(long)]
    time_zone: String,
  },
  Get {
    id: String,
  },
  List,
}

/// The `--office` flag shared by every office-scoped command.
#[derive(Args, Debug)]
pub struct Scope {
  #[arg(long, value_name = "OFFICE_ID")]
  pub office: String,
}

#[derive(Subcommand, Debug)]
pub enum ClientCommand {
  Create {
    #[command(flatten)]
    scope: Scope,
    #[arg(long)]
    name:  String,
  },
  Get {
    #[command(flatten)]
    scope: Scope,
    id:    String,
  },
  List {
    #[command(flatten)]
    scope: Scope,
  },
  Delete {
    #[command(flatten)]
    scope: Scope,
    id:    String,
  },
}

#[derive(Subcommand, Debug)]
pub enum GroupCommand {
  Create {
    #[command(flatten)]
    scope: Scope,
    #[arg(long)]
    name:  String,
  },
  Get {
    #[command(flatten)]
    scope: Scope,
    id:    String,
  },
  List {
    #[command(flatten)]
    scope: Scope,
  },
}

#[derive(Subcommand, Debug)]
pub enum SubjectCommand {
  /// Create a subject from a JSON document.
  Create {
    #[command(flatten)]
    scope:   Scope,
    #[command(flatten)]
    payload: Payload,
  },
  Get {
    #[command(flatten)]
    scope: Scope,
    id:    String,
  },
  List {
    #[command(flatten)]
    scope: Scope,
    /// Only subjects that occur on this date (YYYY-MM-DD).
    #[arg(long)]
    on:    Option<NaiveDate>,
  },
  Delete {
    #[command(flatten)]
    scope: Scope,
    id:    String,
  },
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct Payload {
  /// Inline JSON document.
  #[arg(long)]
  json: Option<String>,
  /// Path to a JSON document.
  #[arg(long, value_name = "FILE")]
  file: Option<PathBuf>,
}

impl Payload {
  fn read(self) -> anyhow::Result<CreateSubjectDto> {
    let raw = match (self.json, self.file) {
      (Some(json), _) => json,
      (None, Some(path)) => std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?,
      (None, None) => anyhow::bail!("either --json or --file is required"),
    };
    serde_json::from_str(&raw).context("subject payload is not valid JSON")
  }
}

/// Run `command` against `store` and return what should be printed.
pub async fn run<S: SchedulerStore>(
  command: Command,
  store: Arc<S>,
) -> anyhow::Result<serde_json::Value> {
  match command {
    Command::Office(cmd) => {
      let offices = OfficesService::new(store);
      match cmd {
        OfficeCommand::Create { name, time_zone } => {
          to_json(offices.create(CreateOfficeDto { name, time_zone }).await?)
        }
        OfficeCommand::Get { id } => to_json(offices.find_one(&id).await?),
        OfficeCommand::List => to_json(offices.find_many().await?),
      }
    }
    Command::Client(cmd) => {
      let clients = ClientsService::new(store);
      match cmd {
        ClientCommand::Create { scope, name } => {
          to_json(clients.create(&scope.office, CreateClientDto { name }).await?)
        }
        ClientCommand::Get { scope, id } => to_json(clients.find_one(&scope.office, &id).await?),
        ClientCommand::List { scope } => to_json(clients.find_many(&scope.office).await?),
        ClientCommand::Delete { scope, id } => {
          clients.delete(&scope.office, &id).await?;
          Ok(json!({ "deleted": id }))
        }
      }
    }
    Command::Group(cmd) => {
      let groups = GroupsService::new(store);
      match cmd {
        GroupCommand::Create { scope, name } => {
          to_json(groups.create(&scope.office, CreateGroupDto { name }).await?)
        }
        GroupCommand::Get { scope, id } => to_json(groups.find_one(&scope.office, &id).await?),
        GroupCommand::List { scope } => to_json(groups.find_many(&scope.office).await?),
      }
    }
    Command::Subject(cmd) => {
      let subjects = SubjectsService::new(store);
      match cmd {
        SubjectCommand::Create { scope, payload } => {
          to_json(subjects.create(&scope.office, payload.read()?).await?)
        }
        SubjectCommand::Get { scope, id } => {
          to_json(subjects.find_one(&scope.office, &id).await?)
        }
        SubjectCommand::List { scope, on: None } => {
          to_json(subjects.find_many(&scope.office).await?)
        }
        SubjectCommand::List { scope, on: Some(date) } => {
          to_json(subjects.find_on(&scope.office, date).await?)
        }
        SubjectCommand::Delete { scope, id } => {
          subjects.delete(&scope.office, &id).await?;
          Ok(json!({ "deleted": id }))
        }
      }
    }
  }
}

fn to_json<T: Serialize>(value: T) -> anyhow::Result<serde_json::Value> {
  Ok(serde_json::to_value(value)?)
}
