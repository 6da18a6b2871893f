use chrono::{DateTime, Utc};
use env_logger::{Builder, Env};
use log::{log, Level, SetLoggerError};
use serde::Serialize;
use serde_json::Value;
use std::io::Write;

#[doc(hidden)]
pub use serde_json;

/// Target used when a `jlog!` call does not name one.
pub const DEFAULT_TARGET: &str = "employee_form";

const DATETIME_FORMAT: &str = "[%Y-%m-%d][%H:%M:%S]";

#[derive(Serialize, Debug)]
struct LogEntry<'a> {
    level: String,
    #[serde(serialize_with = "custom_datetime_serializer")]
    time: DateTime<Utc>,
    target: &'a str,
    message: &'a str,
    #[serde(flatten)]
    meta: Option<Value>,
}

fn custom_datetime_serializer<S>(x: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    s.serialize_str(&x.format(DATETIME_FORMAT).to_string())
}

/// Writes a structured log line through the `log` facade.
///
/// `jlog!(Info, "Submitting employee form")` produces
/// `{"level":"INFO","target":"employee_form","message":"Submitting employee form",...}`
///
/// Metadata is flattened into the entry:
/// ```text
///   jlog!(Info, "Validation rejected submission", {"code": "email"})
/// ```
/// and a target can be named explicitly:
/// ```text
///   jlog!(Debug, "employee_client", "Response received", {"status": 200})
/// ```
#[macro_export]
macro_rules! jlog {
    ($t:path, $msg:expr) => {{
        $crate::transform_message($t, None, $msg, None)
    }};
    ($t:path, $msg:expr, $json:tt) => {{
        let meta = $crate::serde_json::json!($json);
        $crate::transform_message($t, None, $msg, Some(meta))
    }};
    ($t:path, $target:expr, $msg:expr, $json:tt) => {{
        let meta = $crate::serde_json::json!($json);
        $crate::transform_message($t, Some($target), $msg, Some(meta))
    }};
}

pub fn transform_message(level: Level, target: Option<&str>, msg: &str, meta: Option<Value>) {
    let target = target.unwrap_or(DEFAULT_TARGET);
    let line = format_entry(level, target, msg, meta);
    log!(target: target, level, "{}", line);
}

/// Renders one entry as a single JSON line. Metadata that cannot be flattened
/// (anything but an object) is dropped rather than losing the message.
pub fn format_entry(level: Level, target: &str, msg: &str, meta: Option<Value>) -> String {
    let meta = meta.filter(Value::is_object);
    let entry = LogEntry {
        level: level.to_string(),
        time: Utc::now(),
        target,
        message: msg.trim(),
        meta,
    };
    match serde_json::to_string(&entry) {
        Ok(s) => s,
        Err(err) => format!("Failed to serialize log entry: Error: {:?}, Entry: {:?}", err, entry),
    }
}

fn is_json(msg: &str) -> bool {
    msg.starts_with('{') && msg.ends_with('}')
}

/// Installs `env_logger` with the JSON line format. `RUST_LOG` wins over
/// `default_filter`.
pub fn setup_logger(default_filter: &str) -> Result<(), SetLoggerError> {
    Builder::from_env(Env::default().default_filter_or(default_filter))
        .format(|buf, record| {
            let msg = record.args().to_string();
            if is_json(&msg) {
                writeln!(buf, "{}", msg)
            } else {
                writeln!(buf, "{}", format_entry(record.level(), record.target(), &msg, None))
            }
        })
        .try_init()
}
