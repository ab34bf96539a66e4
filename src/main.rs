/*!
 * Scheduling Simulator - Driver
 *
 * Reads a JSON workload (file argument or stdin), runs the selected
 * engine, and prints the Gantt chart and statistics table. With `--json`
 * the full outcome is emitted instead, for downstream tooling.
 */

use anyhow::{Context, Result};
use log::info;
use sched_sim::render;
use sched_sim::workload::WorkloadFile;
use std::fs;
use std::io::Read;

fn main() -> Result<()> {
    env_logger::init();

    let mut path: Option<String> = None;
    let mut json_output = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json_output = true,
            _ => path = Some(arg),
        }
    }

    let raw = match &path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read workload file {path}"))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read workload from stdin")?;
            buf
        }
    };

    let request: WorkloadFile =
        serde_json::from_str(&raw).context("failed to parse workload document")?;
    let engine = request.into_engine().context("invalid workload")?;

    info!("workload loaded, starting simulation");
    let outcome = engine.run();

    if json_output {
        let encoded =
            serde_json::to_string_pretty(&outcome).context("failed to encode outcome")?;
        println!("{encoded}");
    } else {
        print!("{}", render::report(&outcome));
    }
    Ok(())
}
