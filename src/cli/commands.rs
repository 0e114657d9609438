pub(crate) use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "safebank",
    author,
    version,
    about = "SafeBank: a toy single-account console bank",
    long_about = None,
    after_help = "LOGGING:\n    Diagnostics go to stderr; set RUST_LOG (e.g. RUST_LOG=debug) for more detail.\n\n    safebank --seed 42 2> safebank.log"
)]
pub struct Args {
    /// Seed for the pretend opening balance
    #[arg(
        long,
        value_name = "SEED",
        help = "Make the opening balance reproducible (default: seeded from the OS)"
    )]
    pub seed: Option<u64>,
}
