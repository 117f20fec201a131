use clap::Parser;
use poker_equity::config::{SimulationConfig, DEFAULT_TRIALS};
use poker_equity::equity::{Equity, EquityError, Simulator};
use poker_equity::hand::Matchup;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Heads-up Hold'em equity by Monte Carlo simulation.
#[derive(Debug, Parser)]
#[command(name = "poker-equity", version = poker_equity::VERSION, about)]
struct Cli {
    /// Hero hole cards, e.g. AhKh
    hero: String,
    /// Villain hole cards, e.g. QsQd
    villain: String,
    /// Known board: 0, 3, 4 or 5 cards, e.g. 2c7h9h
    #[arg(short, long, default_value = "")]
    board: String,
    /// Number of simulated boards
    #[arg(short = 'n', long, env = "POKER_EQUITY_TRIALS", default_value_t = DEFAULT_TRIALS)]
    trials: u32,
    /// Seed for a reproducible run
    #[arg(short, long, env = "POKER_EQUITY_SEED")]
    seed: Option<u64>,
    /// Worker shards; 1 runs sequentially
    #[arg(short = 'j', long, env = "POKER_EQUITY_THREADS", default_value_t = 1)]
    threads: usize,
}

impl Cli {
    fn config(&self) -> SimulationConfig {
        SimulationConfig { trials: self.trials, seed: self.seed, threads: self.threads }
    }
}

fn run(cli: &Cli) -> Result<Equity, EquityError> {
    let matchup = Matchup::parse(&cli.hero, &cli.villain, &cli.board)?;
    info!(hero = %cli.hero, villain = %cli.villain, board = %cli.board, "parsed matchup");
    Simulator::new(matchup)?.run_with(&cli.config())
}

fn percent(p: f64) -> String {
    format!("{:6.2}%", p * 100.0)
}

/// Three result lines: hero, villain, tie.
fn report(hero: &str, villain: &str, eq: &Equity) -> String {
    format!(
        "hero    {:<6} {}\nvillain {:<6} {}\ntie     {:<6} {}",
        hero,
        percent(eq.hero_win),
        villain,
        percent(eq.villain_win),
        "",
        percent(eq.tie)
    )
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(eq) => {
            println!("{}", report(&cli.hero, &cli.villain, &eq));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
