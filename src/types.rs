//! Type-safe enums for the demo data model
//!
//! String forms match the labels shown in the UI and written by the
//! headless transcript, so `Display` and `FromStr` round-trip.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Lifecycle of a process step
///
/// ```text
/// Pending -> Running -> Completed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum StepStatus {
    #[default]
    Pending = 0,
    Running = 1,
    Completed = 2,
}

impl StepStatus {
    /// Numeric position in the lifecycle
    #[inline]
    pub const fn order(self) -> u8 {
        self as u8
    }

    /// The only status this one may move to, or `None` once completed
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Pending => Some(Self::Running),
            Self::Running => Some(Self::Completed),
            Self::Completed => None,
        }
    }

    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// What a step does to the generated-files list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FileActionKind {
    Created,
    Updated,
}

impl FileActionKind {
    /// Status a file record takes when this action is applied
    pub const fn resulting_status(self) -> FileStatus {
        match self {
            Self::Created => FileStatus::New,
            Self::Updated => FileStatus::Updated,
        }
    }
}

/// Badge shown next to a generated file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FileStatus {
    New,
    Updated,
}

/// Category of a discovered source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SourceKind {
    Web,
    Reddit,
    X,
    Database,
}
