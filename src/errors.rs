use std::io;

use thiserror::Error;

use crate::types::PaperId;

/// Error type for configuration, per-record, and corpus-boundary failures.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("paper '{paper_id}' has malformed date '{raw}'")]
    MalformedDate { paper_id: PaperId, raw: String },
    #[error("paper '{paper_id}' is missing required field '{field}'")]
    MissingField {
        paper_id: PaperId,
        field: &'static str,
    },
    #[error("no record found for paper '{paper_id}'")]
    LookupMiss { paper_id: PaperId },
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("corpus decode failure: {0}")]
    Decode(#[from] serde_json::Error),
}

impl PipelineError {
    /// Returns `true` when the error affects a single record and the run
    /// may continue with that record skipped.
    pub fn is_per_record(&self) -> bool {
        matches!(
            self,
            Self::MalformedDate { .. } | Self::MissingField { .. } | Self::LookupMiss { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_record_errors_are_recoverable() {
        let malformed = PipelineError::MalformedDate {
            paper_id: "p1".into(),
            raw: "01/02/2001".into(),
        };
        assert!(malformed.is_per_record());

        let missing = PipelineError::MissingField {
            paper_id: "p1".into(),
            field: "author",
        };
        assert!(missing.is_per_record());

        let config = PipelineError::Configuration("unknown modality".into());
        assert!(!config.is_per_record());
    }

    #[test]
    fn errors_render_context() {
        let err = PipelineError::MalformedDate {
            paper_id: "oai:1".into(),
            raw: "not-a-date".into(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("oai:1"));
        assert!(rendered.contains("not-a-date"));
    }
}
