//! Corpus source seam.
//!
//! The pipeline only requires paper-shaped records; where they come from
//! (document store, flat JSON file, test fixture) is the source's concern.
//! `get` is the metadata-join boundary: a missing record surfaces as a
//! recoverable `LookupMiss` and the caller decides whether to skip or abort.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;

use crate::data::{DateField, RawCitation, RawPaper};
use crate::errors::PipelineError;
use crate::types::{PaperId, RawName, SourceId};

/// Pipeline-facing corpus interface.
pub trait CorpusSource {
    /// Stable source identifier used in logs and reports.
    fn id(&self) -> &str;
    /// Load the full corpus in the source's native record order.
    fn load(&self) -> Result<Vec<RawPaper>, PipelineError>;
    /// Fetch a single record by identifier.
    ///
    /// Returns `LookupMiss` when no record matches; each record is
    /// independent and idempotent to reprocess, so callers skip or abort
    /// without retrying.
    fn get(&self, paper_id: &str) -> Result<RawPaper, PipelineError>;
}

/// In-memory corpus for tests and small pre-loaded datasets.
pub struct InMemorySource {
    id: SourceId,
    papers: Vec<RawPaper>,
}

impl InMemorySource {
    /// Create an in-memory source from prebuilt records.
    pub fn new(id: impl Into<SourceId>, papers: Vec<RawPaper>) -> Self {
        Self {
            id: id.into(),
            papers,
        }
    }
}

impl CorpusSource for InMemorySource {
    fn id(&self) -> &str {
        &self.id
    }

    fn load(&self) -> Result<Vec<RawPaper>, PipelineError> {
        Ok(self.papers.clone())
    }

    fn get(&self, paper_id: &str) -> Result<RawPaper, PipelineError> {
        self.papers
            .iter()
            .find(|paper| paper.identifier == paper_id)
            .cloned()
            .ok_or_else(|| PipelineError::LookupMiss {
                paper_id: paper_id.to_string(),
            })
    }
}

/// Paper body as stored in a flat JSON corpus file, where the identifier is
/// the enclosing object key rather than a field.
#[derive(Debug, Deserialize)]
struct PaperBody {
    #[serde(default)]
    title: String,
    #[serde(default, rename = "abstract")]
    abstract_text: String,
    #[serde(default)]
    author: Vec<RawName>,
    #[serde(default)]
    date: DateField,
    #[serde(default)]
    citations: Vec<RawCitation>,
}

/// Corpus backed by a flat JSON file: one top-level object mapping paper
/// identifiers to paper bodies, the format the reference corpus ships in.
pub struct JsonCorpusSource {
    id: SourceId,
    path: PathBuf,
}

impl JsonCorpusSource {
    /// Create a source reading from the JSON mapping at `path`.
    pub fn new(id: impl Into<SourceId>, path: impl AsRef<Path>) -> Self {
        Self {
            id: id.into(),
            path: path.as_ref().to_path_buf(),
        }
    }

    fn read_all(&self) -> Result<IndexMap<PaperId, PaperBody>, PipelineError> {
        let file = File::open(&self.path)?;
        let mapping: IndexMap<PaperId, PaperBody> =
            serde_json::from_reader(BufReader::new(file))?;
        debug!(
            source = %self.id,
            papers = mapping.len(),
            "loaded corpus mapping"
        );
        Ok(mapping)
    }

    fn into_paper(identifier: PaperId, body: PaperBody) -> RawPaper {
        RawPaper {
            identifier,
            title: body.title,
            abstract_text: body.abstract_text,
            author: body.author,
            date: body.date,
            citations: body.citations,
        }
    }
}

impl CorpusSource for JsonCorpusSource {
    fn id(&self) -> &str {
        &self.id
    }

    fn load(&self) -> Result<Vec<RawPaper>, PipelineError> {
        Ok(self
            .read_all()?
            .into_iter()
            .map(|(identifier, body)| Self::into_paper(identifier, body))
            .collect())
    }

    fn get(&self, paper_id: &str) -> Result<RawPaper, PipelineError> {
        let mut mapping = self.read_all()?;
        match mapping.swap_remove(paper_id) {
            Some(body) => Ok(Self::into_paper(paper_id.to_string(), body)),
            None => Err(PipelineError::LookupMiss {
                paper_id: paper_id.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_paper(identifier: &str) -> RawPaper {
        RawPaper {
            identifier: identifier.to_string(),
            title: "A Title".into(),
            abstract_text: "An abstract.".into(),
            author: vec!["A B".into()],
            date: DateField::Many(vec!["2001-01-01".into()]),
            citations: Vec::new(),
        }
    }

    #[test]
    fn in_memory_source_round_trips_records() {
        let source = InMemorySource::new("fixture", vec![sample_paper("p1"), sample_paper("p2")]);
        assert_eq!(source.id(), "fixture");
        assert_eq!(source.load().unwrap().len(), 2);
        assert_eq!(source.get("p2").unwrap().identifier, "p2");
    }

    #[test]
    fn missing_record_is_a_lookup_miss() {
        let source = InMemorySource::new("fixture", vec![sample_paper("p1")]);
        let err = source.get("p9").unwrap_err();
        assert!(matches!(err, PipelineError::LookupMiss { .. }));
        assert!(err.is_per_record());
    }

    #[test]
    fn json_source_reads_flat_mapping() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "oai:1": {{
                    "title": "First",
                    "abstract": "Text one.",
                    "author": ["A B"],
                    "date": ["2001-01-01"],
                    "citations": [{{"author": ["Smith, John"]}}]
                }},
                "oai:2": {{
                    "title": "Second",
                    "author": ["C D"],
                    "date": "2001-01-02"
                }}
            }}"#
        )
        .unwrap();

        let source = JsonCorpusSource::new("arxiv_cs", file.path());
        let papers = source.load().unwrap();
        assert_eq!(papers.len(), 2);
        assert_eq!(papers[0].identifier, "oai:1");
        assert_eq!(papers[0].citations[0].author, vec!["Smith, John"]);
        assert_eq!(papers[1].date.first(), Some("2001-01-02"));

        let single = source.get("oai:2").unwrap();
        assert_eq!(single.title, "Second");
        assert!(matches!(
            source.get("oai:3").unwrap_err(),
            PipelineError::LookupMiss { .. }
        ));
    }
}
