use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use talaba_core::ReloadPolicy;
use tracing::info;

/// Environment variable holding the Telegram bot token.
pub const TOKEN_ENV: &str = "BOT_TOKEN";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub replies: RepliesConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DataConfig {
    /// Spreadsheet with the student records, relative to the working directory.
    #[serde(default = "DataConfig::default_path")]
    pub path: PathBuf,
    #[serde(default)]
    pub reload: ReloadPolicy,
    /// Write a sample spreadsheet when `path` does not exist.
    #[serde(default)]
    pub sample_fallback: bool,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
            reload: ReloadPolicy::default(),
            sample_fallback: false,
        }
    }
}

impl DataConfig {
    fn default_path() -> PathBuf {
        PathBuf::from("talabalar.xlsx")
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RepliesConfig {
    /// Number of students shown by `/all`.
    #[serde(default = "RepliesConfig::default_list_limit")]
    pub list_limit: NonZeroUsize,
}

impl Default for RepliesConfig {
    fn default() -> Self {
        Self {
            list_limit: Self::default_list_limit(),
        }
    }
}

impl RepliesConfig {
    const DEFAULT_LIST_LIMIT: NonZeroUsize = match NonZeroUsize::new(15) {
        Some(n) => n,
        None => NonZeroUsize::MIN,
    };

    const fn default_list_limit() -> NonZeroUsize {
        Self::DEFAULT_LIST_LIMIT
    }
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("talaba"))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load `~/talaba/config.json`, falling back to defaults when it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            info!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config file {}: {e}", path.display()))
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Bot token from the process environment (after `.env` is applied).
    pub fn bot_token() -> anyhow::Result<String> {
        Self::token_from(std::env::var(TOKEN_ENV).ok())
    }

    fn token_from(value: Option<String>) -> anyhow::Result<String> {
        match value {
            Some(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
            _ => anyhow::bail!(
                "{TOKEN_ENV} is not set. Export it or add it to a .env file in the working directory"
            ),
        }
    }

    /// Load `.env` from the working directory, if present.
    ///
    /// Runs before logging is set up so `.env` can carry `RUST_LOG`; returns the
    /// file that was applied.
    pub fn load_dotenv() -> anyhow::Result<Option<PathBuf>> {
        match dotenvy::dotenv() {
            Ok(path) => Ok(Some(path)),
            Err(e) if e.not_found() => Ok(None),
            Err(e) => Err(anyhow::anyhow!("Failed to read .env file: {e}")),
        }
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let config_template = r#"{
  "data": {
    "path": "talabalar.xlsx",
    "reload": "per_request",
    "sample_fallback": false
  },
  "replies": {
    "list_limit": 15
  }
}"#;

        std::fs::write(&config_path, config_template)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Put {TOKEN_ENV}=<token> in the environment or a .env file");
        println!("   2. Point data.path at the student spreadsheet");
        println!("   3. Run 'talaba bot' to start the bot");
        println!();
        println!("🔧 Configuration options:");
        println!("   - data.reload: \"per_request\" re-reads the spreadsheet for every message, \"startup\" reads it once");
        println!("   - data.sample_fallback: write a sample spreadsheet when data.path is missing");
        println!("   - replies.list_limit: number of students shown by /all");
        println!();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config = Config::parse("{}").unwrap();
        assert_eq!(config.data.path, PathBuf::from("talabalar.xlsx"));
        assert_eq!(config.data.reload, ReloadPolicy::PerRequest);
        assert!(!config.data.sample_fallback);
        assert_eq!(config.replies.list_limit.get(), 15);
    }

    #[test]
    fn parses_full_config() {
        let config = Config::parse(
            r#"{
                "data": { "path": "/srv/talabalar.xlsx", "reload": "startup", "sample_fallback": true },
                "replies": { "list_limit": 3 }
            }"#,
        )
        .unwrap();
        assert_eq!(config.data.path, PathBuf::from("/srv/talabalar.xlsx"));
        assert_eq!(config.data.reload, ReloadPolicy::Startup);
        assert!(config.data.sample_fallback);
        assert_eq!(config.replies.list_limit.get(), 3);
    }

    #[test]
    fn zero_list_limit_is_rejected() {
        assert!(Config::parse(r#"{ "replies": { "list_limit": 0 } }"#).is_err());
    }

    #[test]
    fn unknown_reload_policy_is_rejected() {
        assert!(Config::parse(r#"{ "data": { "reload": "hourly" } }"#).is_err());
    }

    #[test]
    fn token_is_required() {
        assert!(Config::token_from(None).is_err());
        assert!(Config::token_from(Some("   ".to_string())).is_err());
        assert_eq!(
            Config::token_from(Some(" 123:abc\n".to_string())).ok().as_deref(),
            Some("123:abc")
        );
    }
}
