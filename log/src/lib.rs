//! Logging setup for the tunnel-vision workspace.
//!
//! Logs always go to a file at `warn` level (or higher if the host passes a
//! filter). Stdout logging is enabled when `TUNNEL_LOG` or `RUST_LOG` is set,
//! or in debug builds.
//!
//! ## Environment Variables
//!
//! 1. **`TUNNEL_LOG`** (highest priority) - workspace-specific logging control
//! 2. **`RUST_LOG`** - Standard tracing environment variable
//! 3. **Default** - `warn` globally, `info` for the workspace crates
//!
//! ## Log File Location
//!
//! Default: `<data_local_dir>/tunnel-vision/logs/tunnel-<pid>.log`
//! - macOS: `~/Library/Application Support/tunnel-vision/logs/tunnel-12345.log`
//! - Linux: `~/.local/share/tunnel-vision/logs/tunnel-12345.log`
//!
//! Override by setting [`LogConfig::log_file_path`].

use std::{env, path::PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

/// Returned from [`init`]; must be held alive to ensure log file flushing.
pub struct LogGuard {
    _file_guard: WorkerGuard,
    pub log_file: PathBuf,
}

#[derive(Default)]
pub struct LogConfig {
    /// Either a full file path (has an extension) or a directory to place the
    /// default `tunnel-<pid>.log` file in.
    pub log_file_path: Option<PathBuf>,
}

/// Initialize logging.
///
/// Respects the environment variable priority described in the module docs:
/// `TUNNEL_LOG` > `RUST_LOG` > default settings.
///
/// The returned [`LogGuard`] must be held for the lifetime of the program --
/// dropping it flushes and stops the background file writer.
pub fn init(config: LogConfig) -> Result<LogGuard, Box<dyn std::error::Error + Send + Sync>> {
    let (log_dir, filename) = resolve_log_path(config.log_file_path);

    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::never(&log_dir, &filename);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    // File output stays at `warn` unless the user asked for more.
    let file_filter = if env::var("TUNNEL_LOG").is_ok() || env::var("RUST_LOG").is_ok() {
        create_filter()?
    } else {
        EnvFilter::new("warn")
    };
    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_filter(file_filter);

    let stdout_enabled =
        env::var("TUNNEL_LOG").is_ok() || env::var("RUST_LOG").is_ok() || cfg!(debug_assertions);

    let stdout_layer = if stdout_enabled {
        Some(fmt::layer().with_filter(create_filter()?))
    } else {
        None
    };

    Registry::default()
        .with(file_layer)
        .with(stdout_layer)
        .try_init()?;

    Ok(LogGuard {
        _file_guard: file_guard,
        log_file: log_dir.join(filename),
    })
}

/// Initialize logging for tests.
///
/// Identical to [`init`] but stdout-only (no file output). Will not crash if
/// called multiple times or if logging is already initialized by another test.
pub fn test() {
    let _ = test_init();
}

fn test_init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = create_filter()?;
    fmt().with_env_filter(filter).try_init()?;
    Ok(())
}

fn resolve_log_path(override_path: Option<PathBuf>) -> (PathBuf, String) {
    let filename = format!("tunnel-{}.log", std::process::id());

    if let Some(path) = override_path {
        if path.extension().is_some() {
            let dir = path
                .parent()
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| PathBuf::from("."));
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or(filename);
            return (dir, name);
        }
        return (path, filename);
    }

    let dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tunnel-vision")
        .join("logs");

    (dir, filename)
}

/// Create the appropriate [`EnvFilter`] based on environment variables.
///
/// Implements the priority system: `TUNNEL_LOG` > `RUST_LOG` > defaults.
fn create_filter() -> Result<EnvFilter, Box<dyn std::error::Error + Send + Sync>> {
    if let Ok(tunnel_log) = env::var("TUNNEL_LOG") {
        return Ok(expand_tunnel_log(&tunnel_log));
    }

    if let Ok(rust_log) = env::var("RUST_LOG") {
        return Ok(EnvFilter::new(rust_log));
    }

    Ok(EnvFilter::new("warn,tunnel_vision=info,tunnel_log=info"))
}

/// Expand bare `TUNNEL_LOG` levels into full tracing filter strings.
///
/// `TUNNEL_LOG=debug` becomes `warn,tunnel_vision=debug,tunnel_log=debug`,
/// while module-specific syntax like `TUNNEL_LOG=tunnel_vision=trace` is used
/// as-is.
fn expand_tunnel_log(tunnel_log: &str) -> EnvFilter {
    if tunnel_log.contains('=') || tunnel_log.contains(':') || tunnel_log.contains(',') {
        return EnvFilter::new(tunnel_log);
    }

    EnvFilter::new(format!(
        "warn,tunnel_vision={tunnel_log},tunnel_log={tunnel_log}"
    ))
}
