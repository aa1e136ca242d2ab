//! Load — config loading from file and environment variables.

use std::path::Path;

use crate::error::{RunError, RunResult};

use super::model::Config;

impl Config {
    /// Load configuration from file or environment variables.
    /// Priority: Environment Variables > Config File > Defaults
    pub fn load() -> RunResult<Self> {
        Self::load_from(|key| std::env::var(key).ok())
    }

    /// Load configuration given an environment lookup. Tests inject a
    /// closure here instead of mutating process-global state.
    pub fn load_from(env: impl Fn(&str) -> Option<String>) -> RunResult<Self> {
        let config_path =
            env("FIXMETRICS_CONFIG_FILE").unwrap_or_else(|| "fixmetrics.toml".to_string());

        let mut config = if Path::new(&config_path).exists() {
            tracing::info!("Loading configuration from: {}", config_path);
            Self::from_file(&config_path)?
        } else {
            Config::default()
        };

        // Environment variables override file config
        if let Some(path) = env("FIXMETRICS_LOG_FILE") {
            config.log_file = path.into();
        }
        if let Some(path) = env("FIXMETRICS_RAW_OUTPUT") {
            config.raw_output = path.into();
        }
        if let Some(path) = env("FIXMETRICS_METRICS_OUTPUT") {
            config.metrics_output = path.into();
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &str) -> RunResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| RunError::ConfigRead {
            path: path.into(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| RunError::ConfigParse {
            path: path.into(),
            source,
        })
    }

    /// Validate that configuration values are sane.
    pub fn validate(&self) -> RunResult<()> {
        if self.log_file.as_os_str().is_empty() {
            return Err(RunError::Config("log_file must not be empty".to_string()));
        }
        if self.raw_output.as_os_str().is_empty() {
            return Err(RunError::Config("raw_output must not be empty".to_string()));
        }
        if self.metrics_output.as_os_str().is_empty() {
            return Err(RunError::Config(
                "metrics_output must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_the_source_tool() {
        let config = Config::default();
        assert_eq!(
            config.log_file,
            Path::new("tmp/FIX.4.4-CUST2_Order-ANCHORAGE.messages.current.log")
        );
        assert_eq!(config.raw_output, Path::new("tmp/log_data.json"));
        assert_eq!(config.metrics_output, Path::new("tmp/log_metrics.txt"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn from_file_reads_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixmetrics.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "log_file = \"logs/session.log\"").unwrap();
        writeln!(file, "metrics_output = \"out/metrics.txt\"").unwrap();

        let config = Config::from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(config.log_file, Path::new("logs/session.log"));
        assert_eq!(config.metrics_output, Path::new("out/metrics.txt"));
        // Unset key falls back to the default
        assert_eq!(config.raw_output, Path::new("tmp/log_data.json"));
    }

    #[test]
    fn from_file_rejects_unknown_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixmetrics.toml");
        std::fs::write(&path, "log_fiel = \"typo.log\"\n").unwrap();

        let err = Config::from_file(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, RunError::ConfigParse { .. }));
    }

    #[test]
    fn from_file_missing_is_read_error() {
        let err = Config::from_file("/no/such/fixmetrics.toml").unwrap_err();
        assert!(matches!(err, RunError::ConfigRead { .. }));
    }

    #[test]
    fn env_overrides_beat_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("fixmetrics.toml");
        std::fs::write(
            &file,
            "log_file = \"from-file.log\"\nraw_output = \"from-file.json\"\n",
        )
        .unwrap();

        let file_path = file.to_str().unwrap().to_string();
        let config = Config::load_from(|key| match key {
            "FIXMETRICS_CONFIG_FILE" => Some(file_path.clone()),
            "FIXMETRICS_LOG_FILE" => Some("from-env.log".to_string()),
            _ => None,
        })
        .unwrap();

        // Env wins over the file
        assert_eq!(config.log_file, Path::new("from-env.log"));
        // Keys set only in the file come from the file
        assert_eq!(config.raw_output, Path::new("from-file.json"));
        // Keys set in neither fall back to defaults
        assert_eq!(config.metrics_output, Path::new("tmp/log_metrics.txt"));
    }

    #[test]
    fn missing_config_file_falls_back_to_defaults() {
        let config = Config::load_from(|key| match key {
            "FIXMETRICS_CONFIG_FILE" => Some("/no/such/fixmetrics.toml".to_string()),
            "FIXMETRICS_METRICS_OUTPUT" => Some("out/metrics.txt".to_string()),
            _ => None,
        })
        .unwrap();

        // File absent: defaults apply, env overrides still win
        assert_eq!(config.log_file, Config::default().log_file);
        assert_eq!(config.metrics_output, Path::new("out/metrics.txt"));
    }

    #[test]
    fn validate_rejects_empty_paths() {
        let config = Config {
            log_file: "".into(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(RunError::Config(_))));
    }
}
