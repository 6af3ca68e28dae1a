use crate::domains::logger::{DomainLogger, DynLogger};
use std::sync::Arc;

/// Forwards every message to each wrapped logger, in order.
pub struct MultiLogger {
    targets: Vec<DynLogger>,
}

impl MultiLogger {
    pub fn new(targets: Vec<DynLogger>) -> Self {
        Self { targets }
    }
}

impl DomainLogger for MultiLogger {
    fn info(&self, msg: &str) {
        self.targets.iter().for_each(|t| t.info(msg));
    }

    fn warn(&self, msg: &str) {
        self.targets.iter().for_each(|t| t.warn(msg));
    }

    fn error(&self, msg: &str) {
        self.targets.iter().for_each(|t| t.error(msg));
    }
}

pub fn init_multi_logger(targets: Vec<DynLogger>) -> DynLogger {
    Arc::new(MultiLogger::new(targets))
}

/// Console logger, plus a file logger when `path` is given and fast_log initializes.
pub fn init_combined_logger(path: Option<&str>) -> DynLogger {
    let console = crate::adapters::outbound::init_console_logger();
    let Some(path) = path else { return console };
    match crate::adapters::outbound::file_logger::init_file_logger(path) {
        Ok(file_logger) => init_multi_logger(vec![console, file_logger]),
        Err(e) => {
            console.warn(&format!("{}; logging to console only", e));
            console
        }
    }
}
