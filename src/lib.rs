#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Event assembly and the full pipeline entry point.
pub mod assembler;
/// Citation-author heuristic normalization rules.
pub mod citation;
/// Pipeline configuration types.
pub mod config;
/// Centralized constants used across the pipeline stages.
pub mod constants;
/// Paper, citation, and event data types.
pub mod data;
/// JSON-lines persistence for event streams.
pub mod export;
/// Stable author-identity registry.
pub mod identity;
/// Title/abstract text normalization and stopword loading.
pub mod normalize;
/// Corpus source traits and built-in sources.
pub mod source;
/// Corpus and author reporting helpers.
pub mod stats;
/// Calendar-date to timestamp mapping and tie-breaking jitter.
pub mod timeline;
/// Shared type aliases.
pub mod types;

mod errors;

pub use assembler::{project_events, Pipeline, RunOutcome, RunReport};
pub use citation::{normalize_citation, normalize_citation_author};
pub use config::{Modality, PipelineConfig};
pub use data::{Citation, DateField, Event, NormalizedPaper, RawCitation, RawPaper};
pub use errors::PipelineError;
pub use identity::IdentityResolver;
pub use normalize::{normalize, Stopwords};
pub use source::{CorpusSource, InMemorySource, JsonCorpusSource};
pub use timeline::{parse_date, to_timestamp, Jitter};
pub use types::{AuthorId, CanonicalToken, PaperId, RawName, SourceId, Timestamp};
