use crate::menu::{welcome_reply, CONTACT_INFO_TEXT};
use crate::models::Reply;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotCommand {
    Start,
    Contact,
}

impl BotCommand {
    pub fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Contact => "contact",
        }
    }

    pub fn reply(self, sender_name: &str) -> Reply {
        match self {
            Self::Start => welcome_reply(sender_name),
            Self::Contact => Reply::markdown(CONTACT_INFO_TEXT),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandParse {
    /// Not a command; route as text.
    Text,
    Known(BotCommand),
    /// A `/command` nobody handles; dropped without a reply.
    Unknown,
}

/// Recognises `/name`, `/name@botname` and `/name args`.
pub fn parse_command(text: &str) -> CommandParse {
    let Some(rest) = text.strip_prefix('/') else {
        return CommandParse::Text;
    };
    let head = rest.split_whitespace().next().unwrap_or_default();
    let name = head.split('@').next().unwrap_or_default();

    match name {
        "start" => CommandParse::Known(BotCommand::Start),
        "contact" => CommandParse::Known(BotCommand::Contact),
        _ => CommandParse::Unknown,
    }
}
