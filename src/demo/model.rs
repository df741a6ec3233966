//! Records shown in the demo's three panels

use crate::types::{FileActionKind, FileStatus, Role, SourceKind, StepStatus};
use serde::{Deserialize, Serialize};

/// A discovered source, listed in the right-hand panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRecord {
    pub id: String,
    pub title: String,
    pub url: Option<String>,
    pub kind: SourceKind,
}

impl SourceRecord {
    pub fn new(id: &str, title: &str, kind: SourceKind, url: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            url: url.map(str::to_string),
            kind,
        }
    }

    /// URL with any `http://` or `https://` scheme removed, for display
    pub fn display_url(&self) -> Option<&str> {
        self.url.as_deref().map(|url| {
            url.strip_prefix("https://")
                .or_else(|| url.strip_prefix("http://"))
                .unwrap_or(url)
        })
    }
}

/// Effect a step has on the generated-files list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileAction {
    pub kind: FileActionKind,
    pub file_name: String,
}

/// A generated file, listed in the left-hand panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub name: String,
    /// Text after the last `.` (the whole name when there is no dot), or
    /// `file` when that is empty
    pub file_type: String,
    pub status: FileStatus,
}

impl FileRecord {
    pub fn new(name: &str, status: FileStatus) -> Self {
        Self {
            name: name.to_string(),
            file_type: infer_file_type(name),
            status,
        }
    }
}

fn infer_file_type(name: &str) -> String {
    match name.rsplit('.').next() {
        Some(suffix) if !suffix.is_empty() => suffix.to_string(),
        _ => "file".to_string(),
    }
}

/// One simulated research action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub id: String,
    pub title: String,
    pub subtext: String,
    pub file_action: Option<FileAction>,
    pub sources: Vec<SourceRecord>,
    /// Page being browsed, when the step visits one
    pub url: Option<String>,
    pub status: StepStatus,
}

/// An entry in the transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub steps: Option<Vec<ProcessStep>>,
    pub is_streaming: bool,
    pub is_thinking: bool,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            steps: None,
            is_streaming: false,
            is_thinking: false,
        }
    }

    /// Empty assistant reply waiting for the thinking delay to elapse
    pub fn thinking() -> Self {
        Self {
            role: Role::Assistant,
            content: String::new(),
            steps: None,
            is_streaming: false,
            is_thinking: true,
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }

    pub fn steps(&self) -> &[ProcessStep] {
        self.steps.as_deref().unwrap_or_default()
    }
}
