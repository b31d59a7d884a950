use super::{CommandStrategy, DataOverrides, open_store};
use std::num::NonZeroUsize;
use talaba_config::Config;
use talaba_core::ReloadPolicy;
use talaba_telegram::{Command, Request, Responder};

/// One directory query, mirroring the bot commands.
#[derive(Debug, Clone)]
pub enum QueryKind {
    Find(String),
    Faculty(String),
    Group(String),
    All(Option<NonZeroUsize>),
    Links,
    Stats,
}

impl QueryKind {
    fn into_request(self) -> Request {
        match self {
            Self::Find(id) => Request::Lookup(id),
            Self::Faculty(q) => Request::Command(Command::Faculty(q)),
            Self::Group(q) => Request::Command(Command::Group(q)),
            Self::All(_) => Request::Command(Command::All),
            Self::Links => Request::Command(Command::Links),
            Self::Stats => Request::Command(Command::Stats),
        }
    }
}

pub struct QueryInput {
    pub data: DataOverrides,
    pub kind: QueryKind,
}

/// Strategy for answering one query on the command line, with the bot's reply texts.
#[derive(Debug, Clone, Copy)]
pub struct QueryStrategy;

impl CommandStrategy for QueryStrategy {
    type Input = QueryInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let data = DataOverrides {
            reload: Some(ReloadPolicy::Startup),
            ..input.data
        };
        let store = open_store(&config, data);

        if !store.current().is_available() {
            anyhow::bail!("Student directory is unavailable; see the log above for details");
        }

        let limit = match input.kind {
            QueryKind::All(Some(limit)) => limit,
            _ => config.replies.list_limit,
        };
        let request = input.kind.into_request();
        let responder = Responder::new(store, limit);

        // Loaded once above, so this does not touch the disk again.
        let replies = responder.respond(&request);
        println!("{}", replies.join("\n\n"));

        Ok(())
    }
}
