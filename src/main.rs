use std::sync::Arc;

use signup_wizard::cli;
use signup_wizard::config::WizardConfig;
use signup_wizard::directory::{HttpDirectory, load_option_sources};
use signup_wizard::session::WizardSession;
use signup_wizard::submit::{AccountService, HttpAccountService, Submitter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = match WizardConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("  export SIGNUP_API_BASE=https://platform.example.com");
            std::process::exit(1);
        }
    };
    let api_base = config.api_base.clone();

    eprintln!("📝 Signup Wizard v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   API: {}", api_base);
    eprintln!("   Answer each question and press Enter. /back to go back.\n");

    let directory = HttpDirectory::new(api_base.clone());
    let sources = match load_option_sources(&directory).await {
        Ok(sources) => Arc::new(sources),
        Err(e) => {
            eprintln!("Error: Could not load directory options: {}", e);
            eprintln!("  Is the platform API reachable at {}?", api_base);
            std::process::exit(1);
        }
    };

    let service: Arc<dyn AccountService> = Arc::new(HttpAccountService::new(api_base));
    let submitter = Submitter::new(service);
    let mut session = WizardSession::new(sources, config);

    cli::run(&mut session, &submitter).await?;
    Ok(())
}
