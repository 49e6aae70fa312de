use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::Mutex;

lazy_static::lazy_static! {
    static ref LOGGER: Mutex<Option<File>> = Mutex::new(None);
}

const LOG_FILE: &str = "quizgenius.log";

/// Open the debug log. No-op unless called; the TUI owns stdout, so all
/// diagnostics go to a file.
pub fn init() {
    if let Ok(mut logger) = LOGGER.lock() {
        if logger.is_none() {
            if let Ok(file) = OpenOptions::new().create(true).append(true).open(LOG_FILE) {
                *logger = Some(file);
            }
        }
    }
}

pub fn log(message: &str) {
    if let Ok(mut logger) = LOGGER.lock() {
        if let Some(file) = logger.as_mut() {
            let ts = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
            let _ = writeln!(file, "[{}] {}", ts, message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_without_init_is_silent() {
        log("dropped");
    }
}
