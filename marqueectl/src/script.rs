//! JSON-lines replay scripts.
//!
//! Each non-blank line that does not start with `#` is one step, tagged by
//! `op`. Any step may carry `"expect_error": "<substring>"` to assert that it
//! fails with a message containing that text.

use std::path::PathBuf;

use marquee_model::{MediaStatus, VideoMediaType};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("line {line}: expect_error must be a string")]
    InvalidExpectation { line: usize },
}

#[derive(Debug, Clone)]
pub struct ScriptLine {
    pub line: usize,
    pub step: Step,
    pub expect_error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    /// Register reference ids so videos can point at them.
    Seed {
        #[serde(default)]
        categories: Vec<String>,
        #[serde(default)]
        genres: Vec<String>,
        #[serde(default)]
        cast_members: Vec<String>,
    },
    CreateVideo {
        alias: String,
        #[serde(default)]
        details: VideoSpec,
    },
    UpdateVideo {
        video: String,
        #[serde(default)]
        details: VideoSpec,
    },
    /// Drive a slot through the status use case directly.
    MediaStatus {
        video: String,
        media: VideoMediaType,
        status: MediaStatus,
        folder: Option<String>,
        file_path: Option<String>,
    },
    /// Feed a `COMPLETED` encoder message through the listener.
    EncoderCompleted {
        video: String,
        media: VideoMediaType,
        folder: String,
        file_path: String,
    },
    /// Feed an `ERROR` encoder message through the listener.
    EncoderError {
        video: String,
        media: VideoMediaType,
        error: String,
    },
    Show {
        video: String,
    },
    Media {
        video: String,
        media_type: String,
    },
    Delete {
        video: String,
    },
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::Seed { .. } => "seed",
            Step::CreateVideo { .. } => "create_video",
            Step::UpdateVideo { .. } => "update_video",
            Step::MediaStatus { .. } => "media_status",
            Step::EncoderCompleted { .. } => "encoder_completed",
            Step::EncoderError { .. } => "encoder_error",
            Step::Show { .. } => "show",
            Step::Media { .. } => "media",
            Step::Delete { .. } => "delete",
        }
    }
}

/// Video fields shared by create and update steps.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VideoSpec {
    pub title: Option<String>,
    pub description: Option<String>,
    pub launched_at: Option<i32>,
    pub duration: Option<f64>,
    pub opened: Option<bool>,
    pub published: Option<bool>,
    pub rating: Option<String>,
    pub categories: Vec<String>,
    pub genres: Vec<String>,
    pub cast_members: Vec<String>,
    pub media: MediaFiles,
}

/// Files to upload, relative to the script's directory.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MediaFiles {
    pub video: Option<PathBuf>,
    pub trailer: Option<PathBuf>,
    pub banner: Option<PathBuf>,
    pub thumbnail: Option<PathBuf>,
    pub thumbnail_half: Option<PathBuf>,
}

pub fn parse_script(text: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    let mut lines = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut value: serde_json::Value = serde_json::from_str(trimmed)
            .map_err(|source| ScriptError::Parse { line, source })?;
        let expect_error = match value
            .as_object_mut()
            .and_then(|object| object.remove("expect_error"))
        {
            Some(serde_json::Value::String(expected)) => Some(expected),
            Some(_) => return Err(ScriptError::InvalidExpectation { line }),
            None => None,
        };
        let step = serde_json::from_value(value)
            .map_err(|source| ScriptError::Parse { line, source })?;

        lines.push(ScriptLine {
            line,
            step,
            expect_error,
        });
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_comments_and_keeps_line_numbers() {
        let script = r#"
# seed first
{"op":"seed","categories":["aulas"]}

{"op":"show","video":"intro","expect_error":"was not found"}
"#;

        let lines = parse_script(script).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].line, 3);
        assert!(matches!(
            &lines[0].step,
            Step::Seed { categories, genres, .. }
                if categories == &["aulas".to_string()] && genres.is_empty()
        ));
        assert_eq!(lines[1].line, 5);
        assert_eq!(lines[1].expect_error.as_deref(), Some("was not found"));
    }

    #[test]
    fn parses_media_slots_and_status() {
        let lines = parse_script(
            r#"{"op":"media_status","video":"intro","media":"TRAILER","status":"PROCESSING"}"#,
        )
        .unwrap();

        let Step::MediaStatus {
            media,
            status,
            folder,
            ..
        } = &lines[0].step
        else {
            panic!("unexpected step {:?}", lines[0].step);
        };
        assert_eq!(*media, VideoMediaType::Trailer);
        assert_eq!(*status, MediaStatus::Processing);
        assert!(folder.is_none());
    }

    #[test]
    fn unknown_op_reports_the_line() {
        let err = parse_script("{\"op\":\"explode\"}").unwrap_err();
        assert!(matches!(err, ScriptError::Parse { line: 1, .. }));
    }

    #[test]
    fn non_string_expectation_is_rejected() {
        let err =
            parse_script(r#"{"op":"show","video":"a","expect_error":true}"#)
                .unwrap_err();
        assert!(matches!(err, ScriptError::InvalidExpectation { line: 1 }));
    }
}
