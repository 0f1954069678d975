use std::env;
use std::fs::{File, OpenOptions};
use std::io::Write;

/// Environment variable naming the append-mode debug log file. Unset means
/// no file logging; stderr status lines are always on.
pub const LOG_ENV_VAR: &str = "CYPRESS_HELPERS_LOG";

/// Optional append-mode debug log. Logging failures are swallowed; the log
/// must never take a command down with it.
pub struct LogFile(Option<File>);

impl LogFile {
    pub fn from_env() -> Self {
        let file = env::var_os(LOG_ENV_VAR).and_then(|path| {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .ok()
        });
        Self(file)
    }

    pub fn disabled() -> Self {
        Self(None)
    }

    pub fn line(&mut self, message: &str) {
        if let Some(file) = self.0.as_mut() {
            writeln!(file, "{message}").ok();
            file.flush().ok();
        }
    }
}
