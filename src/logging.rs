use std::{
    fs,
    path::{Path, PathBuf},
    time::{Duration, SystemTime},
};

use anyhow::{Context, Result, anyhow};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    EnvFilter, Layer, filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};
use uuid::Uuid;

use crate::config::{LoggingConfig, LoggingRotation};

const LOG_FILE_PREFIX: &str = "aviary.log";
const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Keeps the background log writer alive; drop it last.
pub struct LoggingGuard {
    _worker_guard: WorkerGuard,
    run_id: String,
}

impl LoggingGuard {
    pub fn run_id(&self) -> &str {
        &self.run_id
    }
}

pub fn init_tracing(logging_config: &LoggingConfig) -> Result<LoggingGuard> {
    let env_filter = build_env_filter(&logging_config.filter)?;
    let log_dir = absolute_log_dir(&logging_config.dir)?;
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create logging directory {}", log_dir.display()))?;

    let cutoff = retention_cutoff(SystemTime::now(), logging_config.retention_days);
    let purge_failures = purge_expired_logs(&log_dir, cutoff);

    let appender = match logging_config.rotation {
        LoggingRotation::Daily => rolling::daily(&log_dir, LOG_FILE_PREFIX),
        LoggingRotation::Hourly => rolling::hourly(&log_dir, LOG_FILE_PREFIX),
    };
    let (writer, worker_guard) = tracing_appender::non_blocking(appender);

    let file_layer = fmt::layer()
        .json()
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_target(true)
        .with_current_span(true)
        .with_ansi(false)
        .with_writer(writer)
        .with_filter(env_filter);

    let stderr_layer = logging_config.stderr_warn_enabled.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_filter(LevelFilter::WARN)
    });

    tracing_subscriber::registry()
        .with(ErrorLayer::default())
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .context("failed to initialize tracing subscriber")?;

    let run_id = Uuid::now_v7().to_string();
    tracing::info!(
        target: "logging",
        run_id = %run_id,
        dir = %log_dir.display(),
        filter = %logging_config.filter,
        rotation = ?logging_config.rotation,
        "logging_initialized"
    );
    for failure in purge_failures {
        tracing::warn!(target: "logging", failure = %failure, "log_purge_failed");
    }

    Ok(LoggingGuard {
        _worker_guard: worker_guard,
        run_id,
    })
}

fn build_env_filter(filter: &str) -> Result<EnvFilter> {
    if filter.trim().is_empty() {
        return Err(anyhow!("logging.filter cannot be empty"));
    }
    EnvFilter::try_new(filter)
        .with_context(|| format!("failed to parse logging.filter '{}'", filter))
}

fn absolute_log_dir(dir: &Path) -> Result<PathBuf> {
    if dir.as_os_str().is_empty() {
        return Err(anyhow!("logging.dir cannot be empty"));
    }
    if dir.is_absolute() {
        return Ok(dir.to_path_buf());
    }
    Ok(std::env::current_dir()
        .context("failed to read current working directory for logging.dir")?
        .join(dir))
}

fn retention_cutoff(now: SystemTime, retention_days: usize) -> SystemTime {
    let retention = Duration::from_secs((retention_days as u64).saturating_mul(SECONDS_PER_DAY));
    now.checked_sub(retention).unwrap_or(SystemTime::UNIX_EPOCH)
}

/// Removes rotated log files last modified at or before `cutoff`.
///
/// Returns one message per file that could not be inspected or removed.
fn purge_expired_logs(log_dir: &Path, cutoff: SystemTime) -> Vec<String> {
    let entries = match fs::read_dir(log_dir) {
        Ok(entries) => entries,
        Err(err) => return vec![format!("cannot scan {}: {}", log_dir.display(), err)],
    };

    let mut failures = Vec::new();
    for entry in entries.flatten() {
        if !entry.file_name().to_string_lossy().starts_with(LOG_FILE_PREFIX) {
            continue;
        }

        let path = entry.path();
        let modified = entry
            .metadata()
            .and_then(|metadata| {
                if metadata.is_file() {
                    metadata.modified().map(Some)
                } else {
                    Ok(None)
                }
            });

        match modified {
            Ok(Some(modified)) if modified <= cutoff => {
                if let Err(err) = fs::remove_file(&path) {
                    failures.push(format!("cannot remove {}: {}", path.display(), err));
                }
            }
            Ok(_) => {}
            Err(err) => failures.push(format!("cannot stat {}: {}", path.display(), err)),
        }
    }
    failures
}
