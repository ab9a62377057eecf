use std::path::{Path, PathBuf};

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming the log file. Unset means no logging at all.
pub const LOG_ENV_VAR: &str = "PACKLIST_LOG";

/// Initialize tracing with optional file output.
///
/// The TUI owns stdout, so logs only ever go to a file. Set `PACKLIST_LOG`
/// to a path to enable them; `RUST_LOG` narrows the filter (default `info`).
///
/// The file name gets the process id appended so parallel sessions don't
/// write into each other: `{path}.{pid}`.
pub fn init_tracing() {
    let Some(log_path) = std::env::var_os(LOG_ENV_VAR) else {
        return;
    };
    let unique_path = unique_log_path(Path::new(&log_path), std::process::id());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!(
            "Warning: Failed to create log file: {}",
            unique_path.display()
        );
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(UtcTime::rfc_3339());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
}

pub fn unique_log_path(base: &Path, pid: u32) -> PathBuf {
    let mut name = base.as_os_str().to_os_string();
    name.push(format!(".{pid}"));
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_pid_to_file_name() {
        let path = unique_log_path(Path::new("/tmp/packlist.log"), 42);
        assert_eq!(path, PathBuf::from("/tmp/packlist.log.42"));
    }
}
