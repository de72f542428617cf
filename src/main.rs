//! Pawbook - a console personal assistant.

use anyhow::Context;
use pawbook::app::Assistant;
use pawbook::cli::Cli;
use pawbook::config::Config;
use pawbook::console::{Console, SessionEnd};
use pawbook::error::AssistantError;
use pawbook::holidays::calendar_for;
use pawbook::logging;
use pawbook::session::{Session, SystemClock};
use pawbook::weather::OpenMeteoClient;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse_args();
    logging::init(cli.log_target());

    if let Err(e) = run(&cli).await {
        match e.downcast_ref::<AssistantError>() {
            Some(cause) => error!("{}: {e:#}", cause.category()),
            None => error!("{e:#}"),
        }
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let config_path = cli.config_path();
    info!("Loading config from: {}", config_path.display());
    let config = Config::load_from_file(&config_path)?;

    let storage = cli.storage_config(&config);
    info!(
        "Contacts: {}, notes: {}",
        storage.contacts.display(),
        storage.notes.display()
    );

    let weather = OpenMeteoClient::new(config.weather.clone())?;
    let holidays = calendar_for(&config.holidays.country)?;
    let session = Session::new(
        storage,
        Box::new(weather),
        holidays,
        Box::new(SystemClock),
    );
    let mut assistant = Assistant::start(session).context("Failed to load the books")?;

    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout());
    match console.run(&mut assistant).await? {
        SessionEnd::Exit => info!("Bye"),
        SessionEnd::EndOfInput => info!("Input closed"),
    }
    Ok(())
}
