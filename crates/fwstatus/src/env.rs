//! Environment variable helpers for host-side configuration.
//!
//! Firmware targets build without `std` and never read the environment;
//! these exist for tests, tools, and simulators running on a host.
//!
//! | Variable                | Effect                                   |
//! |-------------------------|------------------------------------------|
//! | `FWSTATUS_LOG_LEVEL`    | `off`, `error`, `warn`, `info`, `debug`, `trace` or `0`-`5` |
//! | `FWSTATUS_FLUSH_EPRINT` | flush stderr after every log line        |

use std::str::FromStr;

pub const ENV_LOG_LEVEL: &str = "FWSTATUS_LOG_LEVEL";
pub const ENV_FLUSH_EPRINT: &str = "FWSTATUS_FLUSH_EPRINT";

/// Parse `key` as `T`, or return `default` if unset or unparsable.
///
/// ```ignore
/// let level: LogLevel = env_get(ENV_LOG_LEVEL, LogLevel::Warn);
/// ```
#[inline]
pub fn env_get<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    env_get_opt(key).unwrap_or(default)
}

/// Parse `key` as `T`; `None` if unset or unparsable.
#[inline]
pub fn env_get_opt<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

/// Read `key` as a flag. `1`, `true`, `yes`, `on` (any case) are true;
/// any other value is false; unset returns `default`.
#[inline]
pub fn env_get_bool(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(val) => matches!(val.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on"),
        Err(_) => default,
    }
}
