// pathify/src/util/testing.rs

use std::env;
use std::sync::Once;
use tracing::{debug, info, instrument};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::config::{Settings, ENV_MARKED_FILE, ENV_PATHS_FILE, ENV_STORAGE_DIR};

static TEST_LOGGING: Once = Once::new();

/// Sets up test logging exactly once, whatever test runs first.
pub fn init_test_env() {
    TEST_LOGGING.call_once(|| {
        setup_test_logging();
        info!("Test environment initialized");
    });
}

fn setup_test_logging() {
    debug!("Attempting logger init from testing.rs");
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
        return;
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    subscriber.try_init().unwrap_or_else(|e| {
        eprintln!("Error: Failed to set up logging: {}", e);
    });
}

/// Temporary storage directory plus settings pointing into it.
pub struct TestStorage {
    pub dir: tempfile::TempDir,
    pub settings: Settings,
}

impl TestStorage {
    pub fn new() -> Self {
        init_test_env();
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let settings = Settings::with_storage_dir(dir.path());
        Self { dir, settings }
    }
}

impl Default for TestStorage {
    fn default() -> Self {
        Self::new()
    }
}

/// Restores the PATHIFY_* environment variables on drop.
#[derive(Debug, Clone)]
pub struct EnvGuard {
    storage_dir: Option<String>,
    paths_file: Option<String>,
    marked_file: Option<String>,
}

impl Default for EnvGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvGuard {
    pub fn new() -> Self {
        Self {
            storage_dir: env::var(ENV_STORAGE_DIR).ok(),
            paths_file: env::var(ENV_PATHS_FILE).ok(),
            marked_file: env::var(ENV_MARKED_FILE).ok(),
        }
    }
}

impl Drop for EnvGuard {
    #[instrument(level = "trace")]
    fn drop(&mut self) {
        for (key, value) in [
            (ENV_STORAGE_DIR, &self.storage_dir),
            (ENV_PATHS_FILE, &self.paths_file),
            (ENV_MARKED_FILE, &self.marked_file),
        ] {
            match value {
                Some(val) => env::set_var(key, val),
                None => env::remove_var(key),
            }
        }
    }
}
