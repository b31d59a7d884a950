use crate::{Command, format};
use std::num::NonZeroUsize;
use std::sync::Arc;
use talaba_core::{DirectoryStore, LookupError, Snapshot, lookup};
use tracing::{debug, warn};

/// What an inbound message asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    Command(Command),
    /// Free text, treated as a passport identifier.
    Lookup(String),
    /// Unrecognized command or non-text message.
    Unknown,
}

impl Request {
    #[must_use]
    pub fn from_text(text: Option<&str>) -> Self {
        let Some(text) = text.map(str::trim).filter(|t| !t.is_empty()) else {
            return Self::Unknown;
        };

        if text.starts_with('/') {
            return Command::parse_from_text(text).map_or(Self::Unknown, Self::Command);
        }

        Self::Lookup(text.to_string())
    }
}

/// Turns requests into reply texts. Independent of the messaging transport.
#[derive(Clone)]
pub struct Responder {
    store: Arc<DirectoryStore>,
    list_limit: NonZeroUsize,
}

impl Responder {
    #[must_use]
    pub const fn new(store: Arc<DirectoryStore>, list_limit: NonZeroUsize) -> Self {
        Self { store, list_limit }
    }

    /// Replies for one request, in sending order.
    ///
    /// May block on a directory reload; call from a blocking context.
    #[must_use]
    pub fn respond(&self, request: &Request) -> Vec<String> {
        match request {
            Request::Command(Command::Start) => vec![format::WELCOME.to_string()],
            Request::Command(Command::Help) => vec![format::HELP.to_string()],
            Request::Unknown => vec![format::GUIDANCE.to_string()],
            Request::Command(Command::Faculty(query)) if query.trim().is_empty() => {
                vec![format::FACULTY_USAGE.to_string()]
            }
            Request::Command(Command::Group(query)) if query.trim().is_empty() => {
                vec![format::GROUP_USAGE.to_string()]
            }
            _ => {
                let snapshot = self.store.snapshot();
                self.query(&snapshot, request)
                    .unwrap_or_else(|LookupError::StoreUnavailable| {
                        warn!("Replying without data: student directory is unavailable");
                        vec![format::UNAVAILABLE.to_string()]
                    })
            }
        }
    }

    fn query(&self, snapshot: &Snapshot, request: &Request) -> Result<Vec<String>, LookupError> {
        let replies: Vec<String> = match request {
            Request::Lookup(raw) => {
                let identifier = talaba_core::normalize_identifier(raw);
                match lookup::find_by_identifier(snapshot, &identifier)? {
                    Some(record) => format::student_found(record).into(),
                    None => {
                        debug!("No student with identifier {identifier}");
                        vec![format::student_not_found(&identifier)]
                    }
                }
            }
            Request::Command(Command::Faculty(raw)) => {
                let query = raw.trim().to_lowercase();
                format::faculty_results(&query, &lookup::search_by_faculty(snapshot, &query)?)
            }
            Request::Command(Command::Group(raw)) => {
                let query = raw.trim().to_uppercase();
                format::group_results(&query, &lookup::search_by_group(snapshot, &query)?)
            }
            Request::Command(Command::All) => {
                format::all_students(&lookup::list_all(snapshot, self.list_limit)?)
            }
            Request::Command(Command::Links) => {
                format::group_links(&lookup::list_unique_groups(snapshot)?)
            }
            Request::Command(Command::Stats) => {
                vec![format::stats(&lookup::compute_stats(snapshot)?)]
            }
            Request::Command(Command::Start | Command::Help) | Request::Unknown => Vec::new(),
        };
        Ok(replies)
    }
}
