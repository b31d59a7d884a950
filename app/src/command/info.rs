use talaba_config::{Config, TOKEN_ENV};
use talaba_core::DirectorySource;
use talaba_sheet::{SampleFallback, SpreadsheetSource};
use tracing::info;

/// Strategy for displaying configuration information.
///
/// This strategy outputs:
/// - Config file location
/// - Bot token status (masked)
/// - Data source settings and whether the spreadsheet loads
/// - Reply settings
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;

        println!("=== talaba Configuration ===\n");

        let config_path = Config::config_path()?;
        println!("Config File:");
        if config_path.exists() {
            println!("  Path: {}", config_path.display());
        } else {
            println!("  Path: {} (not found, using defaults)", config_path.display());
        }
        println!();

        println!("Telegram:");
        let token = Config::bot_token().map_or_else(|_| "(not set)".to_string(), |t| mask_token(&t));
        println!("  {TOKEN_ENV}: {token}");
        println!();

        println!("Data:");
        println!("  Path: {}", config.data.path.display());
        println!("  Reload: {:?}", config.data.reload);
        println!("  Sample Fallback: {}", config.data.sample_fallback);

        info!("Test-loading student data");
        // Never generate a sample here; only report what is on disk.
        let source = SpreadsheetSource::new(&config.data.path, SampleFallback::Disabled);
        match source.load() {
            Ok(directory) => {
                let stats = directory.stats();
                println!("  Status: Loaded");
                println!("  Students: {}", stats.total_students);
                println!("  Faculties: {}", stats.distinct_faculties);
                println!("  Groups: {}", stats.distinct_groups);
            }
            Err(e) => {
                println!("  Status: Load failed");
                println!("  Error: {e}");
            }
        }
        println!();

        println!("Replies:");
        println!("  List Limit: {}", config.replies.list_limit);

        Ok(())
    }
}

fn mask_token(token: &str) -> String {
    match token.get(..8) {
        Some(prefix) if token.len() > 8 => format!("{prefix}...***"),
        _ => "***".to_string(),
    }
}
