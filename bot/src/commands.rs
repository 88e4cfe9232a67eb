//! Chat command parsing

/// Commands understood by the bot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `/start` - greet and issue a fresh code
    Start,
    /// `/verify` - issue a fresh code
    Verify,
    /// `/help` - print usage
    Help,
    /// Anything else, including plain text
    Other,
}

impl Command {
    /// Parse the first token of a message
    ///
    /// Telegram clients may suffix commands with the bot mention
    /// (`/start@codegate_bot`), which is stripped before matching.
    pub fn parse(text: &str) -> Self {
        let first = text.trim().split_whitespace().next().unwrap_or("");
        let bare = first.split('@').next().unwrap_or("");

        match bare {
            "/start" => Command::Start,
            "/verify" => Command::Verify,
            "/help" => Command::Help,
            _ => Command::Other,
        }
    }
}
