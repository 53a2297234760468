//! Environment-driven configuration.

use std::env;

use tracing::warn;

/// Remote used when neither the flag nor the environment names one.
pub const DEFAULT_REMOTE: &str = "origin";

/// Environment variable to override the default push remote.
pub const REMOTE_ENV_VAR: &str = "MODSHIP_REMOTE";

/// Resolve the push remote.
///
/// An explicit `--remote` wins, then `MODSHIP_REMOTE`, then `origin`.
/// Logs a warning if the environment variable is set but empty.
pub fn resolve_remote(flag: Option<String>) -> String {
    if let Some(remote) = flag.filter(|r| !r.trim().is_empty()) {
        return remote;
    }

    match env::var(REMOTE_ENV_VAR) {
        Ok(v) if !v.trim().is_empty() => v.trim().to_string(),
        Ok(_) => {
            warn!(
                "Empty {} value, using default remote '{}'",
                REMOTE_ENV_VAR, DEFAULT_REMOTE
            );
            DEFAULT_REMOTE.to_string()
        }
        Err(_) => DEFAULT_REMOTE.to_string(),
    }
}
