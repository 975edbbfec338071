pub mod classifier;
pub mod command;
pub mod config;
pub mod error;
pub mod menu;
pub mod models;
pub mod reply;

pub use classifier::{KeywordClassifier, KeywordRule, Trigger, KEYWORD_RULES};
pub use command::{parse_command, BotCommand, CommandParse};
pub use config::{BotConfig, GenerationConfig, TransportConfig};
pub use error::ConfigError;
pub use menu::{MenuOption, MenuPayload, MenuRouter, MENU_OPTIONS};
pub use models::*;
