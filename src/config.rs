use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub guardar_path: String,
    pub clusterizados_path: String,
    pub reglas_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            guardar_path: "/kmeans/guardar".to_string(),
            clusterizados_path: "/kmeans/clusterizados".to_string(),
            reglas_path: "/apriori/reglas".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file. A missing file falls back to the
    /// built-in defaults; `VENTAS_API_BASE_URL` (from the environment or a
    /// `.env` file) overrides the base URL either way.
    pub fn load(path: &str) -> Result<Self> {
        dotenv::dotenv().ok();

        let mut config = if Path::new(path).exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path))?;

            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path))?
        } else {
            Config::default()
        };

        if let Ok(base_url) = std::env::var("VENTAS_API_BASE_URL") {
            config.api.base_url = base_url;
        }

        Ok(config)
    }

    /// Default URL for the clustering save endpoint (POST)
    pub fn guardar_url(&self) -> String {
        self.join(&self.api.guardar_path)
    }

    /// Default URL for the clustered-results endpoint (GET)
    pub fn clusterizados_url(&self) -> String {
        self.join(&self.api.clusterizados_path)
    }

    /// Default URL for the association-rule endpoint (GET)
    pub fn reglas_url(&self) -> String {
        self.join(&self.api.reglas_path)
    }

    fn join(&self, path: &str) -> String {
        format!("{}{}", self.api.base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let config = Config::default();
        assert_eq!(config.guardar_url(), "http://127.0.0.1:8000/kmeans/guardar");
        assert_eq!(
            config.clusterizados_url(),
            "http://127.0.0.1:8000/kmeans/clusterizados"
        );
        assert_eq!(config.reglas_url(), "http://127.0.0.1:8000/apriori/reglas");
    }

    #[test]
    fn test_trailing_slash_in_base_url() {
        let mut config = Config::default();
        config.api.base_url = "http://localhost:9000/".to_string();
        assert_eq!(config.reglas_url(), "http://localhost:9000/apriori/reglas");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [api]
            base_url = "http://analytics.local:8080"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "http://analytics.local:8080");
        assert_eq!(config.api.guardar_path, "/kmeans/guardar");
        assert_eq!(config.api.reglas_path, "/apriori/reglas");
    }

    #[test]
    fn test_empty_toml_is_all_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.api.base_url, "http://127.0.0.1:8000");
    }
}
