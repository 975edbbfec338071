use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use resume_agents::Responder;
use resume_api::build_responder;
use resume_core::{
    GenerationConfig, InboundMessage, KeyboardLayout, OutboundMessage, Resolution, Trigger,
    KEYWORD_RULES, MENU_OPTIONS,
};
use resume_observability::{init_tracing, BotMetrics};
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(name = "resume")]
#[command(about = "Resume bot offline console")]
struct Cli {
    /// Ignore GEMINI_API_KEY and answer unmatched text with the static fallback.
    #[arg(long)]
    offline: bool,

    #[arg(long, default_value = "there")]
    name: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve a single message and print the reply.
    Ask {
        text: String,
        #[arg(long)]
        json: bool,
    },
    /// Interactive session on stdin.
    Chat,
    /// List menu labels and keyboards.
    Menu,
    /// List keyword rules in evaluation order.
    Rules,
}

#[derive(Debug, Serialize)]
struct RuleView {
    position: usize,
    topic: &'static str,
    triggers: &'static [&'static str],
    excludes: &'static [&'static str],
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    init_tracing("resume_cli");
    let cli = Cli::parse();

    match cli.command {
        Command::Ask { ref text, json } => {
            let responder = build_cli_responder(cli.offline)?;
            let message = InboundMessage::new(0, Some(cli.name.as_str()), text.as_str());
            match responder.resolve(&message).await {
                Some(resolution) if json => print_json(resolution)?,
                Some(resolution) => print_reply(&resolution),
                None => println!("(ignored)"),
            }
        }
        Command::Chat => {
            let responder = build_cli_responder(cli.offline)?;
            run_chat(&responder, &cli.name).await?;
        }
        Command::Menu => {
            for layout in [KeyboardLayout::Main, KeyboardLayout::Courses] {
                println!("{layout:?} keyboard:");
                for row in layout.rows() {
                    println!("  {}", row.join(" | "));
                }
            }
            println!("\nAll labels:");
            for option in MENU_OPTIONS {
                println!("- {}", option.label);
            }
        }
        Command::Rules => {
            let rules = KEYWORD_RULES
                .iter()
                .enumerate()
                .map(|(index, rule)| {
                    let (triggers, excludes): (&'static [&'static str], &'static [&'static str]) =
                        match rule.trigger {
                            Trigger::Any(any) => (any, &[]),
                            Trigger::AnyExcept { any, none } => (any, none),
                        };
                    RuleView {
                        position: index + 1,
                        topic: rule.topic,
                        triggers,
                        excludes,
                    }
                })
                .collect::<Vec<_>>();
            println!("{}", serde_json::to_string_pretty(&rules)?);
        }
    }

    Ok(())
}

fn build_cli_responder(offline: bool) -> Result<Responder> {
    let generation = if offline {
        None
    } else {
        GenerationConfig::from_env().context("invalid generation settings")?
    };
    build_responder(generation.as_ref(), BotMetrics::shared())
}

async fn run_chat(responder: &Responder, name: &str) -> Result<()> {
    println!("Resume bot console. type 'exit' to quit.");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        let message = line.trim_end_matches(['\r', '\n']);
        if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
            break;
        }
        if message.trim().is_empty() {
            continue;
        }

        match responder.respond(&InboundMessage::new(0, Some(name), message)).await {
            Some(outbound) => print_outbound(&outbound),
            None => println!("(ignored)\n"),
        }
    }

    Ok(())
}

fn print_reply(resolution: &Resolution) {
    println!("[{}]\n{}", resolution.kind().as_str(), resolution.reply().text);
    if let Some(layout) = resolution.reply().keyboard {
        println!("\nkeyboard: {layout:?}");
    }
}

fn print_outbound(outbound: &OutboundMessage) {
    println!("\n{}\n", outbound.reply.text);
    if let Some(layout) = outbound.reply.keyboard {
        for row in layout.rows() {
            println!("  [{}]", row.join("] ["));
        }
        println!();
    }
}

fn print_json(resolution: Resolution) -> Result<()> {
    let kind = resolution.kind();
    let outbound = resolution.into_outbound(0);
    let value = serde_json::json!({
        "kind": kind,
        "reply": outbound.reply,
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
