use cinema_flow::utils::logger;
use cinema_flow::{CliConfig, Console, Kiosk, PriceTableConfig};
use clap::Parser;
use std::io;

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting cinema-flow");
    tracing::debug!("CLI config: {:?}", config);

    let prices = match PriceTableConfig::default_table() {
        Ok(table) => table.into_table(),
        Err(e) => {
            tracing::error!("❌ Price table validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout().lock());
    let mut kiosk = Kiosk::new(console, &prices);

    if let Err(e) = kiosk.run() {
        tracing::error!("❌ Session failed: {}", e);
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    tracing::info!("cinema-flow finished");
}
