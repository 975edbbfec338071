use serde::{Deserialize, Serialize};

/// A single text message delivered by the chat transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundMessage {
    pub chat_id: i64,
    pub sender_name: Option<String>,
    pub text: String,
}

impl InboundMessage {
    pub fn new(chat_id: i64, sender_name: Option<&str>, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            sender_name: sender_name.map(ToString::to_string),
            text: text.into(),
        }
    }

    pub fn display_name(&self) -> &str {
        self.sender_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or("there")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseMode {
    Markdown,
}

impl ParseMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Markdown => "Markdown",
        }
    }
}

/// The two quick-reply keyboards the bot can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyboardLayout {
    Main,
    Courses,
}

impl KeyboardLayout {
    pub fn rows(self) -> &'static [&'static [&'static str]] {
        use crate::menu::labels::*;

        match self {
            Self::Main => &[
                &[CONTACT_INFO, SKILLS],
                &[CODING_SOURCES, COURSES],
                &[ABOUT_ME, DONATE_HIRE],
            ],
            Self::Courses => &[&[FREE_RESOURCES, BEGINNER_GUIDE], &[BACK_TO_MAIN]],
        }
    }

    pub fn labels(self) -> impl Iterator<Item = &'static str> {
        self.rows().iter().flat_map(|row| row.iter().copied())
    }
}

/// Formatted text plus the delivery options the transport should apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    pub parse_mode: Option<ParseMode>,
    pub disable_web_page_preview: bool,
    pub keyboard: Option<KeyboardLayout>,
}

impl Reply {
    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parse_mode: Some(ParseMode::Markdown),
            disable_web_page_preview: false,
            keyboard: None,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parse_mode: None,
            disable_web_page_preview: false,
            keyboard: None,
        }
    }

    pub fn without_preview(mut self) -> Self {
        self.disable_web_page_preview = true;
        self
    }

    pub fn with_keyboard(mut self, keyboard: KeyboardLayout) -> Self {
        self.keyboard = Some(keyboard);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    pub chat_id: i64,
    #[serde(flatten)]
    pub reply: Reply,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionKind {
    Command,
    Menu,
    Keyword,
    Generated,
    Apology,
    Fallback,
}

impl ResolutionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Command => "command",
            Self::Menu => "menu",
            Self::Keyword => "keyword",
            Self::Generated => "generated",
            Self::Apology => "apology",
            Self::Fallback => "fallback",
        }
    }
}

/// Outcome of resolving one inbound message. Computed per message and dropped
/// once the reply is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Command { command: &'static str, reply: Reply },
    Menu { label: &'static str, reply: Reply },
    Keyword { topic: &'static str, reply: Reply },
    Generated { reply: Reply },
    Apology { reply: Reply },
    Fallback { reply: Reply },
}

impl Resolution {
    pub fn kind(&self) -> ResolutionKind {
        match self {
            Self::Command { .. } => ResolutionKind::Command,
            Self::Menu { .. } => ResolutionKind::Menu,
            Self::Keyword { .. } => ResolutionKind::Keyword,
            Self::Generated { .. } => ResolutionKind::Generated,
            Self::Apology { .. } => ResolutionKind::Apology,
            Self::Fallback { .. } => ResolutionKind::Fallback,
        }
    }

    pub fn reply(&self) -> &Reply {
        match self {
            Self::Command { reply, .. }
            | Self::Menu { reply, .. }
            | Self::Keyword { reply, .. }
            | Self::Generated { reply }
            | Self::Apology { reply }
            | Self::Fallback { reply } => reply,
        }
    }

    pub fn into_outbound(self, chat_id: i64) -> OutboundMessage {
        let reply = match self {
            Self::Command { reply, .. }
            | Self::Menu { reply, .. }
            | Self::Keyword { reply, .. }
            | Self::Generated { reply }
            | Self::Apology { reply }
            | Self::Fallback { reply } => reply,
        };
        OutboundMessage { chat_id, reply }
    }
}
