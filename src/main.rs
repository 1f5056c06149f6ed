use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use spendwise::config::{SpendwisePaths, Settings};
use spendwise::ledger::Ledger;
use spendwise::models::Money;
use spendwise::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "spendwise",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based personal budgeting with investment suggestions",
    long_about = "Spendwise is a terminal-based budgeting application. Track your \
                  monthly expenses against your salary, set short- and long-term \
                  financial goals, and get rule-based investment suggestions as \
                  your savings grow. All data is session-scoped: quitting starts \
                  you fresh."
)]
struct Cli {
    /// Monthly salary to start the session with (e.g. "5000" or "5000.50")
    #[arg(short, long)]
    salary: Option<String>,

    /// Override the data directory (settings and log file)
    #[arg(long, env = "SPENDWISE_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => SpendwisePaths::with_base_dir(dir),
        None => SpendwisePaths::new()?,
    };
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;

    init_tracing(&paths)?;
    tracing::info!("starting spendwise");

    // Non-numeric or negative salary input starts the session at zero
    // rather than failing.
    let salary = cli
        .salary
        .as_deref()
        .map(|s| Money::parse_or_zero(s).or_zero())
        .unwrap_or_else(Money::zero);

    run_tui(&settings, Ledger::with_salary(salary))?;

    tracing::info!("spendwise exited cleanly");
    Ok(())
}

/// Set up tracing to the log file
///
/// The TUI owns stdout while raw mode is active, so log output goes to a
/// file under the data directory instead. `RUST_LOG` controls verbosity.
fn init_tracing(paths: &SpendwisePaths) -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("spendwise=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}
