use std::fs;
use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::cosmic::DEFAULT_COUNTS_ENDPOINT;
use crate::error::KiraError;

pub const DEFAULT_CONFIG_FILE: &str = "kira-vm.json";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub schema_version: Option<u32>,
    #[serde(default)]
    pub called: Option<Utf8PathBuf>,
    #[serde(default)]
    pub uncalled: Option<Utf8PathBuf>,
    #[serde(default)]
    pub studies: Option<Utf8PathBuf>,
    #[serde(default)]
    pub enrichment: Option<EnrichmentEntry>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct EnrichmentEntry {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichmentSettings {
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for EnrichmentSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_COUNTS_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inputs {
    pub called: Option<Utf8PathBuf>,
    pub uncalled: Option<Utf8PathBuf>,
    pub studies: Option<Utf8PathBuf>,
}

impl Inputs {
    /// Values set here win over the ones in `base`.
    pub fn overlay(self, base: Inputs) -> Inputs {
        Inputs {
            called: self.called.or(base.called),
            uncalled: self.uncalled.or(base.uncalled),
            studies: self.studies.or(base.studies),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub schema_version: u32,
    pub inputs: Inputs,
    pub enrichment: EnrichmentSettings,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            schema_version: 1,
            inputs: Inputs::default(),
            enrichment: EnrichmentSettings::default(),
        }
    }
}

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn resolve(path: Option<&str>) -> Result<ResolvedConfig, KiraError> {
        let config_path = match path {
            Some(path) => Utf8PathBuf::from(path),
            None => Utf8PathBuf::from(DEFAULT_CONFIG_FILE),
        };

        if path.is_none() && !config_path.exists() {
            return Err(KiraError::MissingConfig);
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|_| KiraError::ConfigRead(config_path.clone().into_std_path_buf()))?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|err| KiraError::ConfigParse(err.to_string()))?;

        let base_dir = config_path.parent().unwrap_or(Utf8Path::new(""));
        Self::resolve_config(config, base_dir)
    }

    /// Relative input paths are taken relative to `base_dir`.
    pub fn resolve_config(
        config: Config,
        base_dir: &Utf8Path,
    ) -> Result<ResolvedConfig, KiraError> {
        let schema_version = config.schema_version.unwrap_or(1);
        if schema_version != 1 {
            return Err(KiraError::ConfigParse(format!(
                "unsupported schema_version {schema_version}"
            )));
        }

        let anchor = |path: Utf8PathBuf| {
            if path.is_absolute() {
                path
            } else {
                base_dir.join(path)
            }
        };
        let inputs = Inputs {
            called: config.called.map(anchor),
            uncalled: config.uncalled.map(anchor),
            studies: config.studies.map(anchor),
        };

        let defaults = EnrichmentSettings::default();
        let enrichment = match config.enrichment {
            Some(entry) => EnrichmentSettings {
                endpoint: entry.endpoint.unwrap_or(defaults.endpoint),
                timeout: entry
                    .timeout_secs
                    .map(Duration::from_secs)
                    .unwrap_or(defaults.timeout),
            },
            None => defaults,
        };

        Ok(ResolvedConfig {
            schema_version,
            inputs,
            enrichment,
        })
    }
}
