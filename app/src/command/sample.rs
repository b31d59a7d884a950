use std::path::PathBuf;
use talaba_config::Config;
use tracing::info;

pub struct SampleInput {
    /// Destination (defaults to `data.path` from config)
    pub output: Option<PathBuf>,
    /// Overwrite an existing file
    pub force: bool,
}

/// Strategy for writing the sample student spreadsheet.
#[derive(Debug, Clone, Copy)]
pub struct SampleStrategy;

impl super::CommandStrategy for SampleStrategy {
    type Input = SampleInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let path = input.output.unwrap_or(config.data.path);

        if path.exists() && !input.force {
            anyhow::bail!(
                "{} already exists. Pass --force to overwrite it.",
                path.display()
            );
        }

        talaba_sheet::write_sample(&path)?;
        info!("Sample dataset written to {}", path.display());
        println!(
            "✅ Wrote {} sample students to {}",
            talaba_sheet::sample_students().len(),
            path.display()
        );
        Ok(())
    }
}
