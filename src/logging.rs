use serde_json::{Map, Number, Value};
use std::{
    cmp::Ordering,
    sync::atomic::{AtomicU8, Ordering as AtomicOrdering},
};

const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

static MAX_LEVEL: AtomicU8 = AtomicU8::new(DEFAULT_LOG_LEVEL.rank());

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl LogLevel {
    const fn rank(self) -> u8 {
        match self {
            Self::Debug => 0,
            Self::Info => 1,
            Self::Warn => 2,
            Self::Error => 3,
        }
    }

    fn from_rank(rank: u8) -> Self {
        match rank {
            0 => Self::Debug,
            1 => Self::Info,
            2 => Self::Warn,
            _ => Self::Error,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

pub fn set_max_level(level: LogLevel) {
    MAX_LEVEL.store(level.rank(), AtomicOrdering::Relaxed);
}

pub fn max_level() -> LogLevel {
    LogLevel::from_rank(MAX_LEVEL.load(AtomicOrdering::Relaxed))
}

pub fn log_event(level: LogLevel, event: &str, fields: Value) {
    if level < max_level() {
        return;
    }

    emit(level, &build_payload(now_unix_millis(), level, event, fields));
}

fn build_payload(ts: u64, level: LogLevel, event: &str, fields: Value) -> Value {
    let mut payload = Map::new();
    payload.insert("ts".to_string(), Value::Number(Number::from(ts)));
    payload.insert("level".to_string(), Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), Value::String(event.to_string()));

    if let Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    Value::Object(payload)
}

#[cfg(target_arch = "wasm32")]
fn emit(level: LogLevel, payload: &Value) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let line = JsValue::from_str(&payload.to_string());
    match level {
        LogLevel::Debug => console::debug_1(&line),
        LogLevel::Info => console::log_1(&line),
        LogLevel::Warn => console::warn_1(&line),
        LogLevel::Error => console::error_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: LogLevel, payload: &Value) {
    println!("{payload}");
}

#[cfg(target_arch = "wasm32")]
fn now_unix_millis() -> u64 {
    js_sys::Date::now().max(0.0) as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis() as u64)
        .unwrap_or(0)
}
