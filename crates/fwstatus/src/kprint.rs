//! Kernel-style stderr logging for host builds.
//!
//! Level and flushing come from `FWSTATUS_LOG_LEVEL` and
//! `FWSTATUS_FLUSH_EPRINT` (see [`crate::env`]) on first use, or can be set
//! programmatically.
//!
//! ```ignore
//! use fwstatus::{kwarn, kstatus};
//!
//! kwarn!("retrying bus {}", bus);
//! kstatus!(status, "imu init"); // logs only if `status` failed
//! ```

use std::io::Write;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::env::{env_get, env_get_bool, ENV_FLUSH_EPRINT, ENV_LOG_LEVEL};

/// Log levels (matches common conventions)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Off = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl LogLevel {
    /// Convert from the stored byte; anything above 5 saturates to `Trace`.
    pub fn from_u8(v: u8) -> Self {
        match v {
            0 => LogLevel::Off,
            1 => LogLevel::Error,
            2 => LogLevel::Warn,
            3 => LogLevel::Info,
            4 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }

    /// Fixed-width tag printed before each line.
    pub fn prefix(&self) -> &'static str {
        match self {
            LogLevel::Off => "",
            LogLevel::Error => "[ERROR]",
            LogLevel::Warn => "[WARN] ",
            LogLevel::Info => "[INFO] ",
            LogLevel::Debug => "[DEBUG]",
            LogLevel::Trace => "[TRACE]",
        }
    }
}

impl FromStr for LogLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" | "0" => Ok(LogLevel::Off),
            "error" | "1" => Ok(LogLevel::Error),
            "warn" | "2" => Ok(LogLevel::Warn),
            "info" | "3" => Ok(LogLevel::Info),
            "debug" | "4" => Ok(LogLevel::Debug),
            "trace" | "5" => Ok(LogLevel::Trace),
            _ => Err(()),
        }
    }
}

const DEFAULT_LEVEL: LogLevel = LogLevel::Warn;

static FLUSH_ENABLED: AtomicBool = AtomicBool::new(false);
static LOG_LEVEL: AtomicU8 = AtomicU8::new(DEFAULT_LEVEL as u8);
static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Load level and flush mode from the environment. Runs once; later calls
/// are no-ops.
pub fn init() {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }
    FLUSH_ENABLED.store(env_get_bool(ENV_FLUSH_EPRINT, false), Ordering::Relaxed);
    LOG_LEVEL.store(env_get(ENV_LOG_LEVEL, DEFAULT_LEVEL) as u8, Ordering::Relaxed);
}

#[inline]
fn ensure_init() {
    if !INITIALIZED.load(Ordering::Relaxed) {
        init();
    }
}

#[inline]
pub fn log_level() -> LogLevel {
    ensure_init();
    LogLevel::from_u8(LOG_LEVEL.load(Ordering::Relaxed))
}

/// Override the level. Marks logging initialized so the environment is not
/// consulted afterwards.
pub fn set_log_level(level: LogLevel) {
    INITIALIZED.store(true, Ordering::SeqCst);
    LOG_LEVEL.store(level as u8, Ordering::Relaxed);
}

/// Override flushing. Like [`set_log_level`], this stops the environment
/// from being read later.
pub fn set_flush_enabled(enabled: bool) {
    INITIALIZED.store(true, Ordering::SeqCst);
    FLUSH_ENABLED.store(enabled, Ordering::Relaxed);
}

#[inline]
pub fn level_enabled(level: LogLevel) -> bool {
    level != LogLevel::Off && level <= log_level()
}

#[doc(hidden)]
pub fn _kprintln_impl(args: std::fmt::Arguments<'_>) {
    let stderr = std::io::stderr();
    let mut handle = stderr.lock();
    let _ = handle.write_fmt(args);
    let _ = handle.write_all(b"\n");
    if FLUSH_ENABLED.load(Ordering::Relaxed) {
        let _ = handle.flush();
    }
}

#[doc(hidden)]
pub fn _klog_impl(level: LogLevel, args: std::fmt::Arguments<'_>) {
    if !level_enabled(level) {
        return;
    }
    _kprintln_impl(format_args!("{} {}", level.prefix(), args));
}

/// Log `status` at warn level if it failed; successes are silent.
#[doc(hidden)]
pub fn _kstatus_impl(status: crate::StatusCode, what: std::fmt::Arguments<'_>) {
    if status.failed() {
        _klog_impl(LogLevel::Warn, format_args!("{}: {:?}", what, status));
    }
}

/// Print to stderr with newline, ignoring the level.
#[macro_export]
macro_rules! kprintln {
    ($($arg:tt)*) => {{
        $crate::kprint::_kprintln_impl(format_args!($($arg)*));
    }};
}

#[macro_export]
macro_rules! kerror {
    ($($arg:tt)*) => {{
        $crate::kprint::_klog_impl($crate::kprint::LogLevel::Error, format_args!($($arg)*));
    }};
}

#[macro_export]
macro_rules! kwarn {
    ($($arg:tt)*) => {{
        $crate::kprint::_klog_impl($crate::kprint::LogLevel::Warn, format_args!($($arg)*));
    }};
}

#[macro_export]
macro_rules! kinfo {
    ($($arg:tt)*) => {{
        $crate::kprint::_klog_impl($crate::kprint::LogLevel::Info, format_args!($($arg)*));
    }};
}

#[macro_export]
macro_rules! kdebug {
    ($($arg:tt)*) => {{
        $crate::kprint::_klog_impl($crate::kprint::LogLevel::Debug, format_args!($($arg)*));
    }};
}

#[macro_export]
macro_rules! ktrace {
    ($($arg:tt)*) => {{
        $crate::kprint::_klog_impl($crate::kprint::LogLevel::Trace, format_args!($($arg)*));
    }};
}

/// Log a status code at warn level when it is a failure.
///
/// ```ignore
/// kstatus!(imu_init(), "imu init on bus {}", bus);
/// ```
#[macro_export]
macro_rules! kstatus {
    ($status:expr, $($arg:tt)*) => {{
        $crate::kprint::_kstatus_impl($status, format_args!($($arg)*));
    }};
}
