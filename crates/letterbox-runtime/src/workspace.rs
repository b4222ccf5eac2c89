use letterbox_store::{FileSlots, Store};
use std::path::{Path, PathBuf};

use crate::{Config, Repository, Result};

/// What `init` did to the data directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    Created { config_path: PathBuf },
    AlreadyInitialized { config_path: PathBuf },
}

/// A data directory plus the configuration read from it.
#[derive(Debug, Clone)]
pub struct Workspace {
    data_dir: PathBuf,
    config: Config,
}

impl Workspace {
    /// Open a data directory. A missing `config.toml` means defaults.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        let config = Config::load_from(&Self::config_path_in(&data_dir))?;
        Ok(Self { data_dir, config })
    }

    pub fn with_config(data_dir: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            data_dir: data_dir.into(),
            config,
        }
    }

    /// Create the directory and write a default config unless one exists.
    pub fn init(&self) -> Result<InitOutcome> {
        let config_path = self.config_path();
        if config_path.exists() {
            return Ok(InitOutcome::AlreadyInitialized { config_path });
        }

        std::fs::create_dir_all(&self.data_dir)?;
        self.config.save_to(&config_path)?;
        tracing::info!(path = %config_path.display(), "wrote default config");
        Ok(InitOutcome::Created { config_path })
    }

    pub fn store(&self) -> Store {
        Store::new(FileSlots::new(&self.data_dir), self.config.storage.key.clone())
    }

    pub fn repository(&self) -> Repository {
        Repository::open(self.store())
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_path(&self) -> PathBuf {
        Self::config_path_in(&self.data_dir)
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join("letterbox.log")
    }

    fn config_path_in(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }
}
