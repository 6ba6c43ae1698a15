//! Loaded configuration plus an API client built from it.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result, bail};
use tipdesk_business::{ApiClient, ApiConfig};
use tracing::debug;

use crate::config::Config;

const BASE_URL_VAR: &str = "API_BASE_URL";

pub struct Context {
    pub config: Config,
    config_path: PathBuf,
    client: ApiClient,
}

impl Context {
    /// Reads the config file and resolves the API address.
    ///
    /// The address comes from `--api-url`, then `API_BASE_URL`, then the
    /// config file, then the built-in default.
    pub fn load(api_url: Option<String>) -> Result<Self> {
        let config_path = Config::config_path()?;
        let config = Config::load_from(&config_path)?;
        let env_has_url = std::env::var_os(BASE_URL_VAR).is_some();
        let api = resolve_api(api_url, env_has_url, &config)?;
        Self::new(config, config_path, api)
    }

    pub fn new(config: Config, config_path: PathBuf, api: ApiConfig) -> Result<Self> {
        debug!(base_url = api.base_url(), "using admin API");
        let mut client = ApiClient::new(api).context("Failed to build HTTP client")?;
        client.set_token(config.token().map(str::to_owned));
        Ok(Self {
            config,
            config_path,
            client,
        })
    }

    /// Client without any guarantee of a token, for signing in.
    pub fn client(&self) -> ApiClient {
        self.client.clone()
    }

    /// Client carrying the saved token.
    pub fn authed(&self) -> Result<ApiClient> {
        if self.client.token().is_none() {
            bail!("Not signed in. Run `tipdesk login` first.");
        }
        Ok(self.client.clone())
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.client.set_token(token);
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn save(&self) -> Result<()> {
        self.config.save_to(&self.config_path)
    }
}

fn resolve_api(flag: Option<String>, env_has_url: bool, config: &Config) -> Result<ApiConfig> {
    let env = ApiConfig::from_env().context("Invalid API configuration in the environment")?;
    let url = match flag {
        Some(url) => url,
        None if env_has_url => return Ok(env),
        None => match &config.api.base_url {
            Some(url) => url.clone(),
            None => return Ok(env),
        },
    };
    Ok(ApiConfig::new(url).with_timeout(env.timeout()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_url(url: &str) -> Config {
        let mut config = Config::default();
        config.api.base_url = Some(url.to_owned());
        config
    }

    #[test]
    fn test_flag_beats_config_file() {
        let api = resolve_api(
            Some("http://flag.test/".to_owned()),
            false,
            &config_with_url("http://file.test"),
        )
        .expect("valid config");
        assert_eq!(api.base_url(), "http://flag.test");
    }

    #[test]
    fn test_config_file_used_without_flag_or_env() {
        let api = resolve_api(None, false, &config_with_url("http://file.test"))
            .expect("valid config");
        assert_eq!(api.base_url(), "http://file.test");
    }

    #[test]
    fn test_authed_requires_token() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut ctx = Context::new(
            Config::default(),
            dir.path().join("config.toml"),
            ApiConfig::new("http://localhost:1"),
        )
        .expect("context");
        assert!(ctx.authed().is_err());

        ctx.set_token(Some("t".to_owned()));
        assert_eq!(ctx.authed().expect("signed in").token(), Some("t"));
    }

    #[test]
    fn test_saved_token_is_loaded_into_client() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut config = Config::default();
        config.set_auth("Ada", "ada", "saved");
        let ctx = Context::new(config, dir.path().join("config.toml"), ApiConfig::new("http://x"))
            .expect("context");
        assert_eq!(ctx.client().token(), Some("saved"));
    }
}
