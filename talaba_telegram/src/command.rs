use teloxide::types::BotCommand;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    /// Faculty substring query, possibly empty.
    Faculty(String),
    /// Group name substring query, possibly empty.
    Group(String),
    All,
    Links,
    Stats,
}

impl Command {
    fn all() -> Vec<BotCommand> {
        [
            ("start", "Botni ishga tushirish"),
            ("help", "Yordam"),
            ("faculty", "Fakultet bo'yicha qidirish"),
            ("group", "Guruh bo'yicha qidirish"),
            ("all", "Barcha talabalar ro'yxati"),
            ("links", "Barcha guruh linklari"),
            ("stats", "Statistika"),
        ]
        .into_iter()
        .map(|(command, description)| BotCommand {
            command: command.to_string(),
            description: description.to_string(),
        })
        .collect()
    }

    #[must_use]
    pub fn bot_commands() -> Vec<BotCommand> {
        Self::all()
    }

    /// Parse `/name args...`. Command names are case-insensitive and may carry
    /// a `@bot_name` suffix; arguments are re-joined with single spaces.
    #[must_use]
    pub fn parse_from_text(text: &str) -> Option<Self> {
        let text = text.trim().strip_prefix('/')?;
        let (name, rest) = text
            .split_once(char::is_whitespace)
            .unwrap_or((text, ""));

        // Remove bot mention if present (e.g., "/start@my_bot")
        let name = name.split('@').next().unwrap_or(name).to_lowercase();
        let args = rest.split_whitespace().collect::<Vec<_>>().join(" ");

        match name.as_str() {
            "start" => Some(Self::Start),
            "help" => Some(Self::Help),
            "faculty" => Some(Self::Faculty(args)),
            "group" => Some(Self::Group(args)),
            "all" => Some(Self::All),
            "links" => Some(Self::Links),
            "stats" => Some(Self::Stats),
            _ => None,
        }
    }
}
