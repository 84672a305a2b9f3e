//! Layered CLI configuration: defaults, then the TOML file, then
//! `SCHEDULER_*` environment variables.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

pub const DEFAULT_STORE_PATH: &str = "scheduler.db";

#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
  /// SQLite database file. A leading `~/` is expanded.
  pub store_path: PathBuf,
}

impl CliConfig {
  pub fn load(file: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .set_default("store_path", DEFAULT_STORE_PATH)
      .context("failed to set config defaults")?
      .add_source(config::File::from(file).required(false))
      .add_source(config::Environment::with_prefix("SCHEDULER"))
      .build()
      .context("failed to read config file")?;

    let mut cfg: CliConfig = settings
      .try_deserialize()
      .context("failed to deserialise CliConfig")?;
    cfg.store_path = expand_tilde(&cfg.store_path);
    Ok(cfg)
  }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_file_falls_back_to_default() {
    let cfg = CliConfig::load(Path::new("/nonexistent/scheduler.toml")).unwrap();
    if std::env::var_os("SCHEDULER_STORE_PATH").is_none() {
      assert_eq!(cfg.store_path, PathBuf::from(DEFAULT_STORE_PATH));
    }
  }

  #[test]
  fn file_overrides_default() {
    let dir = std::env::temp_dir().join(format!("scheduler-cli-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let file = dir.join("scheduler.toml");
    std::fs::write(&file, "store_path = \"/var/lib/scheduler/data.db\"\n").unwrap();

    let cfg = CliConfig::load(&file).unwrap();
    if std::env::var_os("SCHEDULER_STORE_PATH").is_none() {
      assert_eq!(cfg.store_path, PathBuf::from("/var/lib/scheduler/data.db"));
    }

    let _ = std::fs::remove_dir_all(&dir);
  }

  #[test]
  fn tilde_is_expanded() {
    let Ok(home) = std::env::var("HOME") else { return };
    assert_eq!(
      expand_tilde(Path::new("~/scheduler.db")),
      PathBuf::from(home).join("scheduler.db")
    );
    assert_eq!(expand_tilde(Path::new("/tmp/x.db")), PathBuf::from("/tmp/x.db"));
  }
}
