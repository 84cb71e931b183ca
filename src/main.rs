/*!
 * Scheduler Simulator - Main Entry Point
 *
 * Interactive shell over the simulator:
 * - Create, block, unblock, and kill processes
 * - Run FIFO, SJF, Round-Robin, or Priority scheduling cycle by cycle
 */

use anyhow::Context;
use sched_sim::{init_tracing, OutputMode, Shell, SimConfig, Simulator};
use std::io;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = SimConfig::from_env().context("invalid SCHED_SIM_* configuration")?;
    let simulator = Simulator::builder()
        .with_config(config)
        .build()
        .context("failed to build simulator")?;
    info!(quantum = %simulator.config().quantum, "Simulator ready");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(simulator, stdout.lock())
        .with_output(OutputMode::from_env())
        .run(stdin.lock())
        .context("shell I/O failed")?;

    info!("Simulator shut down");
    Ok(())
}
