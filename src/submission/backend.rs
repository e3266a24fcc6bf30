use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::model::{FileAttachment, RecordResponse};
use super::payload::Contribution;

const FALLBACK_MESSAGE: &str = "Something went wrong. Please try again.";

/// A failed backend call: HTTP status (if one arrived) and the error body.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendError {
    pub status: Option<u16>,
    pub data: Option<Value>,
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for BackendError {}

fn sentence_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn field_message(text: &str) -> String {
    let message = sentence_case(text).trim().to_string();
    if message.ends_with('.') {
        message
    } else {
        format!("{message}.")
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

impl BackendError {
    pub fn new(status: u16, data: Value) -> Self {
        Self {
            status: Some(status),
            data: Some(data),
        }
    }

    /// No response arrived at all.
    pub fn unreachable() -> Self {
        Self {
            status: None,
            data: None,
        }
    }

    /// Flattens field errors into one sentence per message, one per line.
    pub fn message(&self) -> String {
        let mut messages = Vec::new();
        if let Some(Value::Object(fields)) = &self.data {
            for value in fields.values() {
                match value {
                    Value::Array(items) => {
                        messages.extend(items.iter().map(|item| field_message(&value_text(item))));
                    }
                    other => messages.push(field_message(&value_text(other))),
                }
            }
        }

        if messages.is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            messages.join("\n")
        }
    }
}

/// Files to attach to a contribution on behalf of a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileUpload {
    pub contribution: u64,
    pub user: u64,
    pub files: Vec<FileAttachment>,
}

/// The contributions API as seen by the submission bridge.
#[allow(async_fn_in_trait)]
pub trait ContributionBackend {
    async fn create_contribution(&self, contribution: &Contribution) -> Result<RecordResponse, BackendError>;

    async fn update_contribution(
        &self,
        id: u64,
        contribution: &Contribution,
        user: u64,
    ) -> Result<RecordResponse, BackendError>;

    async fn delete_contribution(&self, id: u64) -> Result<(), BackendError>;

    async fn attach_files(&self, upload: &FileUpload) -> Result<(), BackendError>;
}
