mod commands;

use anyhow::{Context, Result};
use commands::{Args, Parser};
use rand::rngs::StdRng;
use rand::SeedableRng;
use safebank::{login, Teller, Terminal};

fn main() -> Result<()> {
    // Parse the CLI arguments
    let args = Args::parse();

    // Initialize logger with default level of warn (can be overridden with RUST_LOG)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // 1. Seed the opening balance
    let mut rng = match args.seed {
        Some(seed) => {
            log::info!("Using fixed seed {seed} for the opening balance");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    // 2. Log in over stdin/stdout
    let mut console = Terminal::stdio();
    let account = match login(&mut console, &mut rng) {
        Ok(account) => account,
        Err(e) if e.is_end_of_input() => {
            log::info!("Input closed before login completed");
            return Ok(());
        }
        Err(e) => return Err(e).context("Failed to log in"),
    };

    // 3. Serve the menu until logout
    let mut teller = Teller::new(account, console);
    match teller.run() {
        Err(e) if e.is_end_of_input() => {
            log::info!(
                "Input closed, ending session with balance {}",
                teller.account().balance()
            );
            Ok(())
        }
        result => result.context("Session ended unexpectedly"),
    }
}
