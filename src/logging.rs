use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directives used when `RUST_LOG` is unset.
pub fn default_filter(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("posts_graphql={level},tower_http={level}")
}

/// Installs the global subscriber: compact lines on stderr, plus a
/// daily-rotated JSON file when `log_file` is given.
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let file_layer = log_file.map(|path| {
        let (dir, file_name) = split_log_path(&path);
        let _ = std::fs::create_dir_all(&dir);
        fmt::layer()
            .with_writer(tracing_appender::rolling::daily(dir, file_name))
            .with_ansi(false)
            .json()
    });

    // An Option<Layer> is a no-op layer when None.
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();
}

fn split_log_path(path: &Path) -> (PathBuf, OsString) {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file_name = path
        .file_name()
        .map(OsStr::to_os_string)
        .unwrap_or_else(|| OsString::from("posts-graphql.log"));
    (dir, file_name)
}
