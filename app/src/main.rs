#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use clap::{Parser, Subcommand, ValueEnum};
use command::{
    BotInput, BotStrategy, CommandStrategy, DataOverrides, InfoStrategy, InitStrategy, QueryInput,
    QueryKind, QueryStrategy, SampleInput, SampleStrategy, VersionStrategy,
};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use talaba_config::Config;
use talaba_core::ReloadPolicy;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "talaba")]
#[command(about = "Student directory Telegram bot", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the Telegram bot (requires BOT_TOKEN)
    Bot {
        #[command(flatten)]
        data: DataArgs,

        /// When to read the spreadsheet (overrides data.reload)
        #[arg(long, value_enum)]
        reload: Option<ReloadArg>,
    },
    /// Answer one directory query on the command line
    Query {
        #[command(flatten)]
        data: DataArgs,

        #[command(subcommand)]
        kind: QueryCommand,
    },
    /// Write the sample student spreadsheet
    Sample {
        /// Destination (defaults to data.path from config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Initialize configuration
    Init,
    /// Show configuration and data source status
    Info,
    /// Show version
    Version,
}

#[derive(clap::Args)]
struct DataArgs {
    /// Student spreadsheet (overrides data.path)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Write a sample spreadsheet if the data file is missing
    #[arg(long)]
    sample_fallback: bool,
}

impl DataArgs {
    fn into_overrides(self, reload: Option<ReloadArg>) -> DataOverrides {
        DataOverrides {
            path: self.data,
            reload: reload.map(ReloadPolicy::from),
            sample_fallback: self.sample_fallback,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ReloadArg {
    /// Read once at startup
    Startup,
    /// Read again for every message
    PerRequest,
}

impl From<ReloadArg> for ReloadPolicy {
    fn from(arg: ReloadArg) -> Self {
        match arg {
            ReloadArg::Startup => Self::Startup,
            ReloadArg::PerRequest => Self::PerRequest,
        }
    }
}

#[derive(Subcommand)]
enum QueryCommand {
    /// Look up one student by passport ID
    Find { id: String },
    /// Students whose faculty contains the query
    Faculty {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Students whose group name contains the query
    Group {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// First students in file order
    All {
        #[arg(short, long)]
        limit: Option<NonZeroUsize>,
    },
    /// One line per distinct group
    Links,
    /// Student, faculty and group counts
    Stats,
}

impl From<QueryCommand> for QueryKind {
    fn from(cmd: QueryCommand) -> Self {
        match cmd {
            QueryCommand::Find { id } => Self::Find(id),
            QueryCommand::Faculty { query } => Self::Faculty(query.join(" ")),
            QueryCommand::Group { query } => Self::Group(query.join(" ")),
            QueryCommand::All { limit } => Self::All(limit),
            QueryCommand::Links => Self::Links,
            QueryCommand::Stats => Self::Stats,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = Config::load_dotenv()?;

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    if let Some(path) = dotenv {
        info!("Loaded environment from {}", path.display());
    }

    let cli = Cli::parse();

    match cli.command {
        Commands::Bot { data, reload } => {
            BotStrategy
                .execute(BotInput {
                    data: data.into_overrides(reload),
                })
                .await
        }
        Commands::Query { data, kind } => {
            QueryStrategy
                .execute(QueryInput {
                    data: data.into_overrides(None),
                    kind: kind.into(),
                })
                .await
        }
        Commands::Sample { output, force } => {
            SampleStrategy.execute(SampleInput { output, force }).await
        }
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Info => InfoStrategy.execute(()).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}
