use std::io;

use guess::config::FrontendConfig;
use guess::domain::{GameSession, RngSecrets, SecretSource, SeededSecrets};
use guess::terminal::Terminal;
use guess::AppError;
use tracing::{error, info};

mod telemetry;

fn main() {
    telemetry::init_tracing();

    if let Err(e) = run() {
        error!(code = e.code(), error = %e, "guess exited with error");
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    // Environment variables (all optional):
    // - GUESS_SEED: base seed for reproducible secrets
    // - GUESS_OUTPUT: text | json
    // - GUESS_LIVES_SYMBOL: symbol repeated once per remaining life
    let config = FrontendConfig::from_env()?;

    let secrets: Box<dyn SecretSource> = match config.seed {
        Some(seed) => {
            info!(seed, "using seeded secrets");
            Box::new(SeededSecrets::new(seed))
        }
        None => Box::new(RngSecrets::from_os_rng()),
    };

    let mut terminal = Terminal::new(GameSession::new(secrets), &config);
    terminal.run(io::stdin().lock(), io::stdout().lock())
}
