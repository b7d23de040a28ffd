//! Binary entrypoint for the traffic-signal demo.
//!
//! Starts one signal and a handful of waiter threads, then logs each
//! waiter's crossing as the light turns green.

use std::sync::Arc;
use std::thread;
use std::time::Instant;

use anyhow::Result;
use clap::{ArgAction, Parser};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use traffic_signal::TrafficSignal;

/// Simple CLI
#[derive(Debug, Parser)]
#[command(name = "traffic-signal", about = "Self-cycling traffic signal demo")]
struct Cli {
    /// Number of threads waiting for green
    #[arg(long, value_name = "N", default_value_t = 3)]
    waiters: usize,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbosity: u8) -> Result<()> {
    // map -v to log level
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter =
        EnvFilter::from_default_env().add_directive(format!("traffic_signal={level}").parse()?);
    fmt().with_env_filter(filter).with_target(true).init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let signal = Arc::new(TrafficSignal::new());
    let started = Instant::now();
    signal.start();
    info!(waiters = cli.waiters, "signal started in red");

    let handles: Vec<_> = (0..cli.waiters)
        .map(|id| {
            let signal = Arc::clone(&signal);
            thread::spawn(move || {
                signal.wait_for_green();
                (id, started.elapsed())
            })
        })
        .collect();

    for handle in handles {
        if let Ok((id, waited)) = handle.join() {
            info!(id, ?waited, "waiter crossed on green");
        }
    }
    Ok(())
}
