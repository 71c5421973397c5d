//! Structured attributes attached to a single log call
//!
//! This module provides:
//! - `FieldValue`: typed value of one attribute
//! - `AttributeSet`: insertion-ordered key/value collection rendered as text or JSON
//! - `Format`: the rendering mode chosen by a structured builder

use chrono::{DateTime, Local, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Key always used for error attributes
pub const ERROR_KEY: &str = "error";
/// Key of the captured stack attribute
pub const STACK_KEY: &str = "stack";
/// Key of the message inside a rendered structured line
pub const MESSAGE_KEY: &str = "msg";

/// Rendering mode of an attribute set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// `key=value, key=value, msg=message`
    #[default]
    Text,
    /// One flat JSON object with the message under `msg`
    Json,
}

/// Value type for structured attributes
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Str(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    /// Rendered with its unit suffix, e.g. `1.5s`
    Duration(Duration),
    Time(DateTime<Utc>),
    /// Written verbatim as UTF-8 text
    Bytes(Vec<u8>),
    /// Error message text
    Error(String),
    /// Opaque value; strings render bare, everything else as compact JSON
    Any(serde_json::Value),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Str(s) | FieldValue::Error(s) => f.write_str(s),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Duration(d) => write!(f, "{:?}", d),
            FieldValue::Time(t) => f.write_str(&format_time(t)),
            FieldValue::Bytes(b) => f.write_str(&String::from_utf8_lossy(b)),
            FieldValue::Any(serde_json::Value::String(s)) => f.write_str(s),
            FieldValue::Any(v) => write!(f, "{}", v),
        }
    }
}

fn format_time(t: &DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

impl FieldValue {
    /// Convert to serde_json::Value for JSON rendering
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            FieldValue::Str(s) | FieldValue::Error(s) => serde_json::Value::String(s.clone()),
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
            FieldValue::Int(i) => serde_json::Value::Number((*i).into()),
            FieldValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            FieldValue::Duration(d) => serde_json::Value::String(format!("{:?}", d)),
            FieldValue::Time(t) => serde_json::Value::String(format_time(t)),
            FieldValue::Bytes(b) => {
                serde_json::Value::String(String::from_utf8_lossy(b).into_owned())
            }
            FieldValue::Any(v) => v.clone(),
        }
    }

    /// Wrap any serializable value; values that fail to serialize become their error text
    pub fn any<T: Serialize + ?Sized>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(v) => FieldValue::Any(v),
            Err(e) => FieldValue::Any(serde_json::Value::String(e.to_string())),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Str(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Str(s.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<u32> for FieldValue {
    fn from(i: u32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<Duration> for FieldValue {
    fn from(d: Duration) -> Self {
        FieldValue::Duration(d)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(t: DateTime<Utc>) -> Self {
        FieldValue::Time(t)
    }
}

impl From<DateTime<Local>> for FieldValue {
    fn from(t: DateTime<Local>) -> Self {
        FieldValue::Time(t.with_timezone(&Utc))
    }
}

impl From<Vec<u8>> for FieldValue {
    fn from(b: Vec<u8>) -> Self {
        FieldValue::Bytes(b)
    }
}

impl From<&[u8]> for FieldValue {
    fn from(b: &[u8]) -> Self {
        FieldValue::Bytes(b.to_vec())
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(v: serde_json::Value) -> Self {
        FieldValue::Any(v)
    }
}

/// Attributes accumulated for one log call.
///
/// Keys are unique; setting an existing key replaces its value in place, so
/// rendering order is the order in which keys were first set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeSet {
    format: Format,
    fields: Vec<(String, FieldValue)>,
    stack: Option<String>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(format: Format) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// Set an attribute, replacing any previous value under the same key
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Set the `error` attribute
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.insert(ERROR_KEY, FieldValue::Error(message.into()));
    }

    /// Attach a captured stack dump, rendered after all other attributes
    pub fn set_stack(&mut self, stack: impl Into<String>) {
        self.stack = Some(stack.into());
    }

    pub fn stack(&self) -> Option<&str> {
        self.stack.as_deref()
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// True iff at least one attribute was set
    pub fn is_present(&self) -> bool {
        !self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Render as `key=value, key=value`
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (i, (key, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(key);
            out.push('=');
            out.push_str(&value.to_string());
        }
        if let Some(ref stack) = self.stack {
            if !out.is_empty() {
                out.push_str(", ");
            }
            out.push_str(STACK_KEY);
            out.push('=');
            out.push_str(stack);
        }
        out
    }

    /// Build the flat JSON object of all attributes
    pub fn to_json_map(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut map = serde_json::Map::new();
        for (key, value) in &self.fields {
            map.insert(key.clone(), value.to_json_value());
        }
        if let Some(ref stack) = self.stack {
            map.insert(STACK_KEY.to_string(), serde_json::Value::String(stack.clone()));
        }
        map
    }

    /// Render as a single JSON object
    pub fn to_json(&self) -> String {
        serde_json::Value::Object(self.to_json_map()).to_string()
    }

    /// Render in this set's own format
    pub fn render(&self) -> String {
        match self.format {
            Format::Text => self.to_text(),
            Format::Json => self.to_json(),
        }
    }

    /// Combine the attributes with a message into the body of one log line.
    ///
    /// Text appends `msg=<message>` as the last attribute (a bare message when
    /// no attribute is present); JSON embeds the message under `msg`.
    pub fn render_with_message(&self, message: &str) -> String {
        match self.format {
            Format::Text => {
                let attrs = self.to_text();
                if attrs.is_empty() {
                    message.to_string()
                } else {
                    format!("{}, {}={}", attrs, MESSAGE_KEY, message)
                }
            }
            Format::Json => {
                let mut map = self.to_json_map();
                map.insert(
                    MESSAGE_KEY.to_string(),
                    serde_json::Value::String(message.to_string()),
                );
                serde_json::Value::Object(map).to_string()
            }
        }
    }
}

impl fmt::Display for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_empty_set() {
        let set = AttributeSet::new();
        assert!(!set.is_present());
        assert_eq!(set.to_text(), "");
        assert_eq!(set.to_json(), "{}");
    }

    #[test]
    fn test_text_render_order() {
        let mut set = AttributeSet::new();
        set.insert("key", "value");
        set.insert("bool", true);
        set.insert("count", 3i64);

        assert!(set.is_present());
        assert_eq!(set.to_text(), "key=value, bool=true, count=3");
    }

    #[test]
    fn test_json_render_typed() {
        let mut set = AttributeSet::with_format(Format::Json);
        set.insert("key", "value");
        set.insert("flag", true);
        set.insert("ratio", 0.5);

        assert_eq!(set.render(), r#"{"key":"value","flag":true,"ratio":0.5}"#);
    }

    #[test]
    fn test_error_key_overwrites() {
        let mut set = AttributeSet::new();
        set.insert("error", "placeholder");
        set.insert("op", "read");
        set.set_error("disk full");

        assert_eq!(set.len(), 2);
        assert_eq!(set.get("error"), Some(&FieldValue::Error("disk full".into())));
        assert_eq!(set.to_text(), "error=disk full, op=read");
    }

    #[test]
    fn test_duration_and_bytes() {
        let mut set = AttributeSet::with_format(Format::Json);
        set.insert("elapsed", Duration::from_millis(1500));
        set.insert("raw", b"payload".as_slice());

        assert_eq!(set.to_text(), "elapsed=1.5s, raw=payload");
        assert_eq!(set.to_json(), r#"{"elapsed":"1.5s","raw":"payload"}"#);
    }

    #[test]
    fn test_time_value() {
        let t = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).single().unwrap();
        let value = FieldValue::from(t);
        assert_eq!(value.to_string(), "2024-03-09T07:05:01Z");
    }

    #[test]
    fn test_any_value() {
        #[derive(Serialize)]
        struct Peer {
            host: &'static str,
            port: u16,
        }

        let value = FieldValue::any(&Peer { host: "db", port: 5432 });
        assert_eq!(value.to_string(), r#"{"host":"db","port":5432}"#);

        let value = FieldValue::any("plain");
        assert_eq!(value.to_string(), "plain");

        let value = FieldValue::any(&Option::<u8>::None);
        assert_eq!(value.to_string(), "null");
    }

    #[test]
    fn test_render_with_message() {
        let mut set = AttributeSet::new();
        assert_eq!(set.render_with_message("hello"), "hello");

        set.insert("key", "value");
        assert_eq!(set.render_with_message("hello"), "key=value, msg=hello");

        let mut json = AttributeSet::with_format(Format::Json);
        json.insert("key", "value");
        assert_eq!(
            json.render_with_message("hello"),
            r#"{"key":"value","msg":"hello"}"#
        );
    }

    #[test]
    fn test_stack_rendered_last() {
        let mut set = AttributeSet::with_format(Format::Json);
        set.set_error("boom");
        set.set_stack("frame 0\nframe 1");

        let parsed: serde_json::Value =
            serde_json::from_str(&set.render_with_message("failed")).unwrap();
        assert_eq!(parsed["error"], "boom");
        assert_eq!(parsed["stack"], "frame 0\nframe 1");
        assert_eq!(parsed["msg"], "failed");
    }
}
