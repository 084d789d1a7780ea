use serde::Deserialize;
use std::fs;
use std::path::Path;

const ENV_CONFIG_PATH: &str = "VERIFYHIRE_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Relative weights for the three ATS breakdown components
///
/// Defaults to an equal-weighted mean. Weights are relative, not percentages.
#[derive(Debug, Clone, Deserialize)]
pub struct AtsWeights {
    #[serde(default = "default_component_weight")]
    pub formatting: u32,
    #[serde(default = "default_component_weight")]
    pub keyword: u32,
    #[serde(default = "default_component_weight")]
    pub structure: u32,
}

fn default_component_weight() -> u32 {
    1
}

impl Default for AtsWeights {
    fn default() -> Self {
        Self {
            formatting: 1,
            keyword: 1,
            structure: 1,
        }
    }
}

impl AtsWeights {
    pub fn total(&self) -> u32 {
        self.formatting + self.keyword + self.structure
    }
}

/// Scoring configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub ats_weights: AtsWeights,
    /// Relevancy share of the Overall blend, in [0,100]
    #[serde(default = "default_relevancy_weight")]
    pub default_relevancy_weight: u8,
}

fn default_relevancy_weight() -> u8 {
    50
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            ats_weights: AtsWeights::default(),
            default_relevancy_weight: default_relevancy_weight(),
        }
    }
}

impl ScoringConfig {
    /// Repair configurations the scoring core cannot honor, falling back to
    /// defaults with a warning rather than failing startup.
    fn sanitized(mut self) -> Self {
        if self.default_relevancy_weight > 100 {
            tracing::warn!(
                weight = self.default_relevancy_weight,
                "Configured relevancy weight out of range, using default"
            );
            self.default_relevancy_weight = default_relevancy_weight();
        }
        if self.ats_weights.total() == 0 {
            tracing::warn!("All ATS component weights are zero, using equal weights");
            self.ats_weights = AtsWeights::default();
        }
        self
    }
}

/// YAML configuration file structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub scoring: ScoringConfig,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub port: u16,
    pub host: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            port: 8080,
            host: "127.0.0.1".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment and config file
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let config_path =
            std::env::var(ENV_CONFIG_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let scoring = Self::load_config_file(&config_path)
            .map(|cf| cf.scoring)
            .unwrap_or_default()
            .sanitized();

        Self {
            scoring,
            port,
            host,
        }
    }

    /// Load configuration from YAML file
    fn load_config_file(path: &str) -> Option<ConfigFile> {
        let path = Path::new(path);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => {
                // Handle empty file
                let contents = contents.trim();
                if contents.is_empty() {
                    tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
                    return Some(ConfigFile::default());
                }

                match serde_yaml::from_str(contents) {
                    Ok(config) => {
                        tracing::info!(path = %path.display(), "Loaded configuration from file");
                        Some(config)
                    }
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "Failed to parse config file, using defaults");
                        None
                    }
                }
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read config file, using defaults");
                None
            }
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
