
use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp config directory and set AQ_CONFIG_DIR
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("AQ_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard)
}

/// Clear every override the loader reads so ambient variables don't leak in
pub(crate) fn clear_overrides() -> Vec<EnvGuard> {
    [
        "AQ_HOST",
        "AQ_SCHEME",
        "AQ_IDENTITY_URL",
        "AQ_TIMEOUT_SECS",
        "AQ_USERNAME",
        "AQ_LOGIN_MESSAGE",
        "AQ_OUTPUT",
        "AQ_PRETTY",
        "AQ_LOG_LEVEL",
        "AQ_LOG_COLORED",
        "AQ_LOG_FILE",
    ]
    .into_iter()
    .map(EnvGuard::remove)
    .collect()
}
