use std::ffi::OsString;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log file path.
pub const LOG_PATH_ENV: &str = "PICSUM_GALLERY_LOG";

/// Gallery events at `info`; the HTTP and TLS stack only when it warns.
pub const DEFAULT_FILTER: &str = "warn,picsum_gallery=info";

/// Pick the log file: `--log-file` first, then `PICSUM_GALLERY_LOG`.
///
/// An empty environment value counts as unset.
pub fn resolve_log_path(flag: Option<PathBuf>, env: Option<OsString>) -> Option<PathBuf> {
    flag.or_else(|| env.filter(|value| !value.is_empty()).map(PathBuf::from))
}

/// Initialize tracing with optional file output and return the file in use.
///
/// Nothing is logged without a path because the terminal belongs to the UI.
/// `RUST_LOG` overrides [`DEFAULT_FILTER`]. Each run writes to
/// `{path}.{timestamp}.{pid}`, creating missing parent directories.
pub fn init_tracing(log_file: Option<PathBuf>) -> Option<PathBuf> {
    let base = resolve_log_path(log_file, std::env::var_os(LOG_PATH_ENV))?;
    let path = unique_log_path(&base);

    let file = match create_log_file(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: Failed to create log file {}: {}", path.display(), err);
            return None;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    Some(path)
}

fn create_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    File::create(path)
}

fn unique_log_path(base: &Path) -> PathBuf {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut name = base.as_os_str().to_owned();
    name.push(format!(".{}.{}", timestamp, pid));
    PathBuf::from(name)
}
