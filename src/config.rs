use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::timeline::{DATE_FORMAT, DEFAULT_EPOCH, DEFAULT_ID_BASE};
use crate::errors::PipelineError;
use crate::types::AuthorId;

/// Text channel used for the `docs` content of an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    /// Use the paper's normalized title.
    Title,
    /// Use the paper's normalized abstract.
    Abstract,
}

impl Modality {
    /// Parse a configuration string into a modality.
    ///
    /// Unknown values are a fatal configuration error: they would silently
    /// change the semantics of every emitted event.
    pub fn parse(value: &str) -> Result<Self, PipelineError> {
        match value {
            "title" => Ok(Self::Title),
            "abstract" => Ok(Self::Abstract),
            other => Err(PipelineError::Configuration(format!(
                "unrecognized modality '{other}' (expected 'title' or 'abstract')"
            ))),
        }
    }
}

/// Top-level pipeline configuration.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    /// Reference date from which elapsed-day timestamps are measured.
    pub epoch_date: NaiveDate,
    /// Which normalized text field populates the `docs` channel.
    pub modality: Modality,
    /// Keep every author id on an event, or only the first author's.
    pub use_coauthors: bool,
    /// Seed for the tie-breaking jitter source; `None` draws a fresh seed,
    /// making same-day ordering non-reproducible across runs.
    pub jitter_seed: Option<u64>,
    /// First id handed out by the identity resolver.
    pub id_base: AuthorId,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            epoch_date: NaiveDate::parse_from_str(DEFAULT_EPOCH, DATE_FORMAT)
                .expect("default epoch is a valid date"),
            modality: Modality::Title,
            use_coauthors: false,
            jitter_seed: None,
            id_base: DEFAULT_ID_BASE,
        }
    }
}

impl PipelineConfig {
    /// Parse an epoch date string in the pipeline's calendar format.
    pub fn parse_epoch(value: &str) -> Result<NaiveDate, PipelineError> {
        NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|err| {
            PipelineError::Configuration(format!("invalid epoch date '{value}': {err}"))
        })
    }
}
