use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

/// HTTP-style verb of a logical call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported verb: {0}")]
pub struct UnsupportedVerb(pub String);

impl FromStr for Verb {
    type Err = UnsupportedVerb;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Verb::Get),
            "POST" => Ok(Verb::Post),
            "PUT" => Ok(Verb::Put),
            "DELETE" => Ok(Verb::Delete),
            _ => Err(UnsupportedVerb(s.to_string())),
        }
    }
}

/// A file part of a form upload. Only its description is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub field: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub size: usize,
}

/// Multipart-like container for uploads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub fields: BTreeMap<String, String>,
    pub files: Vec<UploadedFile>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Form(FormData),
}

impl Payload {
    /// Top-level fields, as a shallow merge sees them. Non-object JSON has none.
    pub fn fields(&self) -> Map<String, Value> {
        match self {
            Payload::Json(Value::Object(map)) => map.clone(),
            Payload::Json(_) => Map::new(),
            Payload::Form(form) => form
                .fields
                .iter()
                .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                .collect(),
        }
    }

    /// Non-empty string field
    pub fn text(&self, key: &str) -> Option<String> {
        let text = match self {
            Payload::Json(value) => value.get(key)?.as_str().map(str::to_string),
            Payload::Form(form) => form.fields.get(key).cloned(),
        };
        text.filter(|s| !s.is_empty())
    }

    pub fn file_count(&self) -> usize {
        match self {
            Payload::Form(form) => form.files.len(),
            Payload::Json(_) => 0,
        }
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Payload::Json(value)
    }
}

impl From<FormData> for Payload {
    fn from(form: FormData) -> Self {
        Payload::Form(form)
    }
}

/// A logical API call: where, how, and with what.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiCall {
    pub path: String,
    pub verb: Verb,
    pub payload: Option<Payload>,
}

impl ApiCall {
    pub fn new(verb: Verb, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            verb,
            payload: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Verb::Get, path)
    }

    pub fn post(path: impl Into<String>, payload: impl Into<Payload>) -> Self {
        Self::new(Verb::Post, path).with_payload(payload)
    }

    pub fn put(path: impl Into<String>, payload: impl Into<Payload>) -> Self {
        Self::new(Verb::Put, path).with_payload(payload)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Verb::Delete, path)
    }

    pub fn with_payload(mut self, payload: impl Into<Payload>) -> Self {
        self.payload = Some(payload.into());
        self
    }
}
