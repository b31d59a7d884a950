//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own input type, dispatched
//! statically from `main`.

use std::path::PathBuf;
use std::sync::Arc;
use talaba_config::Config;
use talaba_core::{DirectoryStore, ReloadPolicy};
use talaba_sheet::{SampleFallback, SpreadsheetSource};
use tracing::info;

mod bot;
mod info;
mod init;
mod query;
mod sample;
mod version;

pub use bot::{BotInput, BotStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use query::{QueryInput, QueryKind, QueryStrategy};
pub use sample::{SampleInput, SampleStrategy};
pub use version::VersionStrategy;

/// Command-line overrides for the `data` config section.
#[derive(Debug, Clone, Default)]
pub struct DataOverrides {
    pub path: Option<PathBuf>,
    pub reload: Option<ReloadPolicy>,
    pub sample_fallback: bool,
}

/// Open the directory store described by config plus overrides.
fn open_store(config: &Config, overrides: DataOverrides) -> Arc<DirectoryStore> {
    let path = overrides.path.unwrap_or_else(|| config.data.path.clone());
    let reload = overrides.reload.unwrap_or(config.data.reload);
    let fallback = SampleFallback::from(overrides.sample_fallback || config.data.sample_fallback);

    info!(
        "Student data: {} (reload: {reload:?}, sample fallback: {fallback:?})",
        path.display()
    );

    let source = Arc::new(SpreadsheetSource::new(path, fallback));
    Arc::new(DirectoryStore::open(source, reload))
}

/// Core trait defining the contract for all command strategies.
///
/// # Design Principles
/// - **Static dispatch**: All calls are monomorphized at compile time
/// - **Type safety**: Each strategy defines its own input type via associated type
///
/// # Example
/// ```rust,ignore
/// struct MyStrategy;
///
/// impl CommandStrategy for MyStrategy {
///     type Input = MyInput;
///
///     async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
///         // Command logic here
///         Ok(())
///     }
/// }
/// ```
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
