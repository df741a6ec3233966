//! Headless playback
//!
//! Plays one research run through the same worker the TUI uses and writes
//! each transition as plain text: step lines, discovered sources, file
//! changes, then the response chunk by chunk and a closing summary.

use crate::demo::{DemoEvent, DemoSession, ProcessStep};
use crate::error::Result;
use crate::types::FileStatus;
use std::io::Write;
use tracing::info;

/// What a finished playback produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackSummary {
    pub steps: usize,
    pub files: usize,
    pub sources: usize,
    pub response_chars: usize,
}

fn step_at(session: &DemoSession, index: usize) -> Option<ProcessStep> {
    session
        .state()
        .chats()
        .last()
        .and_then(|msg| msg.steps().get(index).cloned())
}

/// Submit `prompt` and write the run to `out` as it happens
pub fn play<W: Write>(session: &mut DemoSession, prompt: &str, out: &mut W) -> Result<PlaybackSummary> {
    session.submit(prompt)?;
    writeln!(out, "> {}", prompt)?;
    writeln!(out, "  Thinking...")?;
    out.flush()?;

    let mut total_steps = 0;
    while let Some(event) = session.next_blocking() {
        match &event {
            DemoEvent::RevealSteps => {
                total_steps = session
                    .state()
                    .chats()
                    .last()
                    .map(|msg| msg.steps().len())
                    .unwrap_or(0);
            }
            DemoEvent::StartStep(index) => {
                if let Some(step) = step_at(session, *index) {
                    writeln!(out, "[{}/{}] ▸ {}", index + 1, total_steps, step.title)?;
                    for source in &step.sources {
                        match source.display_url() {
                            Some(url) => writeln!(
                                out,
                                "      + {} source: {} ({})",
                                source.kind, source.title, url
                            )?,
                            None => writeln!(out, "      + {} source: {}", source.kind, source.title)?,
                        }
                    }
                }
            }
            DemoEvent::CompleteStep(index) => {
                if let Some(step) = step_at(session, *index) {
                    writeln!(out, "[{}/{}] ✓ {}", index + 1, total_steps, step.subtext)?;
                    if let Some(action) = &step.file_action {
                        writeln!(
                            out,
                            "      {} {}",
                            action.kind.to_string().to_uppercase(),
                            action.file_name
                        )?;
                    }
                }
            }
            DemoEvent::AppendChunk(chunk) => {
                write!(out, "{}", chunk)?;
            }
            DemoEvent::Finish => {
                writeln!(out)?;
            }
        }
        out.flush()?;
    }

    let state = session.state();
    let response_chars = state
        .chats()
        .last()
        .map(|msg| msg.content.chars().count())
        .unwrap_or(0);

    writeln!(out)?;
    writeln!(out, "Files ({}):", state.files().len())?;
    for file in state.files() {
        let badge = match file.status {
            FileStatus::New => "NEW",
            FileStatus::Updated => "UPDATED",
        };
        writeln!(out, "  {:<28} {:<4} {}", file.name, file.file_type.to_uppercase(), badge)?;
    }
    writeln!(out, "Sources: {}", state.sources().len())?;
    out.flush()?;

    let summary = PlaybackSummary {
        steps: total_steps,
        files: state.files().len(),
        sources: state.sources().len(),
        response_chars,
    };
    info!(?summary, "Headless playback finished");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config_file::{DemoConfig, Timing};
    use crate::demo::script::{self, FINAL_RESPONSE};

    fn instant_session() -> DemoSession {
        DemoSession::new(DemoConfig {
            timing: Timing::instant(),
            seed: Some(7),
            ..DemoConfig::default()
        })
    }

    #[test]
    fn test_play_writes_full_transcript() {
        let mut session = instant_session();
        let mut out = Vec::new();
        let summary = play(&mut session, "who are my competitors?", &mut out).unwrap();

        assert_eq!(summary.steps, 5);
        assert_eq!(summary.files, 4);
        assert_eq!(summary.sources, script::total_sources());
        assert_eq!(summary.response_chars, FINAL_RESPONSE.chars().count());

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("> who are my competitors?"));
        assert!(text.contains("[1/5] ▸ Searched YC Startups"));
        assert!(text.contains("CREATED Competitors.csv"));
        assert!(text.contains("UPDATED Competitor-products.csv"));
        assert!(text.contains(FINAL_RESPONSE));
        assert!(text.contains("Sources: 6"));
        assert!(!session.is_processing());
    }

    #[test]
    fn test_play_rejects_blank_prompt() {
        let mut session = instant_session();
        let mut out = Vec::new();
        assert!(play(&mut session, "   ", &mut out).is_err());
        assert!(out.is_empty());
    }
}
