use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InputConfig {
    /// Source CSV exported from the survey workbook
    pub csv: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    /// Destination for the normalized dataset the dashboard loads
    pub json: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[input]
csv = "data/species.csv"

[output]
json = "crates/frontend/public/data.json"
"#;

/// Load configuration from dataprep.toml
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("dataprep.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.input.csv, "data/species.csv");
        assert_eq!(config.output.json, "crates/frontend/public/data.json");
    }
}
