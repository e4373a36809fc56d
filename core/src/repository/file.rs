use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use log::debug;

use crate::model::config::PaydayConfig;
use crate::repository::traits::ConfigRepository;

const CONFIG_DIR_NAME: &str = ".payday";
const DEFAULT_FILE_NAME: &str = "config.json";

/// Reads defaults from a JSON file. The file is optional and never written.
#[derive(Clone)]
pub struct FileConfigRepository {
    file_path: PathBuf,
}

impl FileConfigRepository {
    pub fn new(path: Option<PathBuf>) -> Result<Self> {
        let file_path = match path {
            Some(p) => p,
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(CONFIG_DIR_NAME).join(DEFAULT_FILE_NAME)
            }
        };

        Ok(FileConfigRepository { file_path })
    }
}

impl ConfigRepository for FileConfigRepository {
    fn load(&self) -> Result<PaydayConfig> {
        if !self.file_path.exists() {
            debug!("No config file at {}, using built-in defaults", self.file_path.display());
            return Ok(PaydayConfig::default());
        }

        let file = File::open(&self.file_path)
            .with_context(|| format!("Could not open {}", self.file_path.display()))?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)
            .with_context(|| format!("Invalid config file {}", self.file_path.display()))?;
        debug!("Loaded config from {}", self.file_path.display());
        Ok(config)
    }
}
