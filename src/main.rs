use anyhow::{Context, Result};

use aviary::{
    AllocationDirectory, SharedDirectory, cli::config_path_from_args, config::Config, logging,
    report,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = config_path_from_args()?;
    let config = Config::load(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;
    let logging_guard =
        logging::init_tracing(&config.logging).context("failed to initialize logging")?;
    tracing::info!(
        target: "driver",
        run_id = %logging_guard.run_id(),
        roster_size = config.roster.len(),
        "driver_started"
    );
    println!("Run {}", logging_guard.run_id());

    let directory = SharedDirectory::new(AllocationDirectory::new());

    println!("Intaking and assigning {} birds...", config.roster.len());
    for (slot, record) in config.roster_records().into_iter().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!(target: "driver", slot, kind = ?err.kind, error = %err, "roster_slot_rejected");
                println!(" - slot {slot}: rejected ({err})");
                continue;
            }
        };

        if let Err(err) = directory.intake(record.clone()).await {
            tracing::warn!(target: "driver", slot, kind = ?err.kind, error = %err, "intake_failed");
            println!(" - slot {slot}: {err}");
            continue;
        }

        match directory.assign(&record).await {
            Ok(placement) => println!(" - {placement}"),
            Err(err) => {
                tracing::warn!(target: "driver", slot, kind = ?err.kind, error = %err, "assignment_failed");
                println!(" - {}: {err}", record.display_name());
            }
        }
    }

    let snapshot = directory.snapshot().await;
    println!();
    println!("{}", report::directory_map(&snapshot));
    println!("{}", report::bird_index(&snapshot));
    println!("{}", report::food_report(&directory.consumption_totals().await));

    Ok(())
}
