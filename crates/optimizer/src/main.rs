use std::process;

use catalog::samples;
use common::Config;
use optimizer::Optimizer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    let config = Config::default();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_filter()))
        .init();

    let samples = match samples::all() {
        Ok(samples) => samples,
        Err(e) => {
            error!("Failed to build sample hypergraphs: {}", e);
            process::exit(1);
        }
    };

    let optimizer = Optimizer::new(config);
    info!("Ordering {} sample hypergraphs...", samples.len());

    let mut success_count = 0;
    let mut failure_count = 0;
    for sample in &samples {
        info!("{}", "=".repeat(80));
        info!("[{}]\n{}", sample.name, sample.hypergraph);

        match optimizer.plan(&sample.hypergraph) {
            Ok(plan) => {
                success_count += 1;
                info!("Partition tree:\n{}", plan.tree());
                info!("{}", plan);
                match serde_json::to_string(&plan) {
                    Ok(json) => info!("Plan: {}", json),
                    Err(e) => error!("Failed to serialize plan: {}", e),
                }
                info!("Fingerprint: 0x{:016x}", plan.fingerprint());
            }
            Err(e) => {
                failure_count += 1;
                error!("FAILED: {} - {}", sample.name, e);
            }
        }
    }

    info!("{}", "=".repeat(80));
    info!("SUMMARY:");
    info!("  Total samples: {}", samples.len());
    info!("  Successful: {}", success_count);
    info!("  Failed: {}", failure_count);

    if failure_count > 0 {
        process::exit(1);
    }
}
