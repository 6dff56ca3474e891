use crate::error::{ColScoreError, CsResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::info;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub engine: EngineParams,
    #[command(flatten)]
    pub history: HistoryParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineParams {
    /// Spacing of the candidate grid sampled inside the plan outline.
    #[arg(long, default_value_t = 3.0)]
    pub grid_size: f64,

    /// Decimal places used for coordinates and distances in the details text.
    #[arg(long, default_value_t = 2)]
    pub details_precision: usize,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            grid_size: 3.0,
            details_precision: 2,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum HistorySource {
    None,
    Sample,
    Archive,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryParams {
    /// Where prior placements come from: none, sample or archive.
    #[arg(long, default_value_t = HistorySource::Sample)]
    pub history: HistorySource,

    /// Directory of exported session documents (used by the archive source).
    #[arg(long)]
    pub archive_dir: Option<String>,
}

impl Default for HistoryParams {
    fn default() -> Self {
        Self {
            history: HistorySource::Sample,
            archive_dir: None,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CsResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    pub fn validate(&self) -> CsResult<()> {
        let g = self.engine.grid_size;
        if !g.is_finite() || g <= 0.0 {
            return Err(ColScoreError::Config(format!(
                "grid_size must be a positive number (got {})",
                g
            )));
        }
        if self.history.history == HistorySource::Archive && self.history.archive_dir.is_none() {
            return Err(ColScoreError::Config(
                "history source 'archive' requires --archive-dir".to_string(),
            ));
        }
        Ok(())
    }

    /// Overlays values the user typed on the command line onto `self`,
    /// leaving file-provided values in place for everything else.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(engine.grid_size);
        update_if_present!(engine.details_precision);
        update_if_present!(history.history);
        update_if_present!(history.archive_dir);
    }
}
