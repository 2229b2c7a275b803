use anyhow::Result;
use ask_gemini::{GeminiConfig, GeminiService, LogSink, NotificationTarget, Orchestrator};
use std::env;

// Runs one query the way the extension does: `ask_gemini <text>` goes through
// the sidebar flow, `ask_gemini --direct <text>` through the popup flow.
#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let mut args: Vec<String> = env::args().skip(1).collect();
    let direct = args.first().map(|a| a == "--direct").unwrap_or(false);
    if direct {
        args.remove(0);
    }

    let query = args.join(" ");
    let query = query.trim();
    if query.is_empty() {
        anyhow::bail!("usage: ask_gemini [--direct] <text>");
    }

    let config = GeminiConfig::from_env()?;
    log::info!("Using model {}", config.model);
    let orchestrator = Orchestrator::sidebar(GeminiService::new(config)?);

    let answer = if direct {
        orchestrator.ask_direct(query).await?
    } else {
        let target = NotificationTarget::new("cli");
        orchestrator.ask(query, &target, &LogSink).await
    };

    println!("{answer}");
    Ok(())
}
