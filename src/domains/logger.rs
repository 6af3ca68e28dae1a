use log::{error as log_error, info as log_info, warn as log_warn};
use std::sync::Arc;

/// Domain-level logging port (Hexagonal port).
/// Keep this API intentionally small and non-fallible from the domain perspective.
pub trait DomainLogger: Send + Sync + 'static {
    fn info(&self, msg: &str);
    fn warn(&self, msg: &str);
    fn error(&self, msg: &str);
}

pub type DynLogger = Arc<dyn DomainLogger>;

/// File-backed logger writing through `fast_log`, which stamps each record itself.
pub struct FileLogger;

impl FileLogger {
    /// Initialize fast_log writing to the given log file.
    /// fast_log installs a global logger, so this succeeds at most once per process.
    pub fn init(path: &str) -> Result<(), Box<dyn std::error::Error>> {
        fast_log::init(
            fast_log::config::Config::new()
                .file(path)
                .level(log::LevelFilter::Info),
        )?;
        Ok(())
    }
}

impl DomainLogger for FileLogger {
    fn info(&self, msg: &str) {
        log_info!("{}", msg);
    }

    fn warn(&self, msg: &str) {
        log_warn!("{}", msg);
    }

    fn error(&self, msg: &str) {
        log_error!("{}", msg);
    }
}
