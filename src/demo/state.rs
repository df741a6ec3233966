//! Demo state and its update functions
//!
//! [`DemoState`] owns everything the three demo panels show: the transcript,
//! the generated-files list and the sources list. It is mutated only through
//! the methods here, one transition at a time, on the UI thread.
//!
//! # Invariants
//!
//! - At most one run is active; [`DemoState::submit`] rejects the rest
//! - Steps of a run start strictly in array order, one at a time
//! - A step moves `Pending -> Running -> Completed` and never back
//! - File records are unique by name; an upsert moves the record to the front
//! - Source records only ever accumulate

use super::model::{ChatMessage, FileRecord, SourceRecord};
use super::script;
use super::timeline::DemoEvent;
use crate::types::{FileStatus, StepStatus};
use thiserror::Error;
use tracing::{debug, info};

/// Why a submission was ignored
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Prompt is empty")]
    EmptyPrompt,

    #[error("A research run is already in progress")]
    RunInProgress,
}

/// A timeline event that does not fit the current state
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StepTransitionError {
    #[error("No research run is active")]
    NoActiveRun,

    #[error("Steps have not been revealed yet")]
    StepsNotRevealed,

    #[error("Steps were already revealed")]
    AlreadyRevealed,

    #[error("No step at index {index}")]
    UnknownStep { index: usize },

    #[error("Cannot start step {index} before step {expected} is finished")]
    OutOfOrder { index: usize, expected: usize },

    #[error("Step {index} cannot move from {from} to {to}")]
    InvalidTransition {
        index: usize,
        from: StepStatus,
        to: StepStatus,
    },

    #[error("Response cannot stream while step {index} is unfinished")]
    StepsUnfinished { index: usize },
}

impl From<SubmitError> for crate::error::MerchError {
    fn from(err: SubmitError) -> Self {
        crate::error::MerchError::state(err.to_string())
    }
}

impl From<StepTransitionError> for crate::error::MerchError {
    fn from(err: StepTransitionError) -> Self {
        crate::error::MerchError::state(err.to_string())
    }
}

/// In-memory state of one demo session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoState {
    chats: Vec<ChatMessage>,
    files: Vec<FileRecord>,
    sources: Vec<SourceRecord>,
    /// Index into `chats` of the assistant message the active run drives
    active: Option<usize>,
}

impl DemoState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chats(&self) -> &[ChatMessage] {
        &self.chats
    }

    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    pub fn sources(&self) -> &[SourceRecord] {
        &self.sources
    }

    /// True while a run is in progress and submissions are disabled
    #[inline]
    pub fn is_processing(&self) -> bool {
        self.active.is_some()
    }

    /// The assistant message being driven by the active run
    pub fn active_message(&self) -> Option<&ChatMessage> {
        self.active.and_then(|idx| self.chats.get(idx))
    }

    /// Whether `prompt` would be accepted right now
    pub fn can_submit(&self, prompt: &str) -> bool {
        !self.is_processing() && !prompt.trim().is_empty()
    }

    /// Begin a run for `prompt`.
    ///
    /// Appends the user message and a thinking assistant placeholder, and
    /// returns the placeholder's index in the transcript.
    ///
    /// # Errors
    ///
    /// - `EmptyPrompt` if the prompt is empty or whitespace
    /// - `RunInProgress` if a run is already active
    ///
    /// Neither error changes any state.
    pub fn submit(&mut self, prompt: &str) -> Result<usize, SubmitError> {
        if self.is_processing() {
            return Err(SubmitError::RunInProgress);
        }
        if prompt.trim().is_empty() {
            return Err(SubmitError::EmptyPrompt);
        }

        self.chats.push(ChatMessage::user(prompt));
        self.chats.push(ChatMessage::thinking());
        let idx = self.chats.len() - 1;
        self.active = Some(idx);

        info!(chat = idx, "Research run started");
        Ok(idx)
    }

    /// Apply one timeline event
    pub fn apply(&mut self, event: &DemoEvent) -> Result<(), StepTransitionError> {
        debug!(?event, "Applying demo event");
        match event {
            DemoEvent::RevealSteps => self.reveal_steps(),
            DemoEvent::StartStep(index) => self.start_step(*index),
            DemoEvent::CompleteStep(index) => self.complete_step(*index),
            DemoEvent::AppendChunk(chunk) => self.append_chunk(chunk),
            DemoEvent::Finish => self.finish(),
        }
    }

    fn active_mut(&mut self) -> Result<&mut ChatMessage, StepTransitionError> {
        let idx = self.active.ok_or(StepTransitionError::NoActiveRun)?;
        self.chats
            .get_mut(idx)
            .ok_or(StepTransitionError::NoActiveRun)
    }

    /// End the thinking phase and show the scripted steps, all pending
    pub fn reveal_steps(&mut self) -> Result<(), StepTransitionError> {
        let msg = self.active_mut()?;
        if msg.steps.is_some() {
            return Err(StepTransitionError::AlreadyRevealed);
        }
        msg.is_thinking = false;
        msg.is_streaming = true;
        msg.steps = Some(script::research_steps());
        Ok(())
    }

    /// Mark step `index` running and surface its sources
    pub fn start_step(&mut self, index: usize) -> Result<(), StepTransitionError> {
        let msg = self.active_mut()?;
        let steps = msg
            .steps
            .as_mut()
            .ok_or(StepTransitionError::StepsNotRevealed)?;

        if index >= steps.len() {
            return Err(StepTransitionError::UnknownStep { index });
        }
        if let Some(expected) = steps.iter().position(|s| s.status != StepStatus::Completed) {
            if expected != index {
                return Err(StepTransitionError::OutOfOrder { index, expected });
            }
        }

        let step = &mut steps[index];
        transition(index, &mut step.status, StepStatus::Running)?;
        let discovered = step.sources.clone();
        self.add_sources(discovered);
        Ok(())
    }

    /// Apply step `index`'s file action and mark it completed
    pub fn complete_step(&mut self, index: usize) -> Result<(), StepTransitionError> {
        let msg = self.active_mut()?;
        let steps = msg
            .steps
            .as_mut()
            .ok_or(StepTransitionError::StepsNotRevealed)?;
        let step = steps
            .get_mut(index)
            .ok_or(StepTransitionError::UnknownStep { index })?;

        transition(index, &mut step.status, StepStatus::Completed)?;
        if let Some(action) = step.file_action.clone() {
            self.upsert_file(&action.file_name, action.kind.resulting_status());
        }
        Ok(())
    }

    /// Insert or replace the file record named `name` at the front of the list
    pub fn upsert_file(&mut self, name: &str, status: FileStatus) {
        self.files.retain(|f| f.name != name);
        self.files.insert(0, FileRecord::new(name, status));
    }

    /// Append sources without deduplication
    pub fn add_sources(&mut self, sources: impl IntoIterator<Item = SourceRecord>) {
        self.sources.extend(sources);
    }

    /// Append a piece of the streamed response
    pub fn append_chunk(&mut self, chunk: &str) -> Result<(), StepTransitionError> {
        let msg = self.active_mut()?;
        if let Some(index) = msg
            .steps()
            .iter()
            .position(|s| s.status != StepStatus::Completed)
        {
            return Err(StepTransitionError::StepsUnfinished { index });
        }
        msg.content.push_str(chunk);
        Ok(())
    }

    /// Clear the streaming flag and release the submission guard
    pub fn finish(&mut self) -> Result<(), StepTransitionError> {
        let msg = self.active_mut()?;
        msg.is_streaming = false;
        msg.is_thinking = false;
        let idx = self.active.take();
        info!(chat = ?idx, "Research run finished");
        Ok(())
    }
}

fn transition(
    index: usize,
    status: &mut StepStatus,
    to: StepStatus,
) -> Result<(), StepTransitionError> {
    if status.next() != Some(to) {
        return Err(StepTransitionError::InvalidTransition {
            index,
            from: *status,
            to,
        });
    }
    *status = to;
    Ok(())
}
