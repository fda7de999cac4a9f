//! Event assembly: the single sequential pass that turns raw papers into a
//! time-ordered event stream.

use indexmap::IndexMap;
use tracing::{debug, info, warn};

use crate::citation::normalize_citation;
use crate::config::{Modality, PipelineConfig};
use crate::constants::modality::{MODALITY_AUTHS, MODALITY_DOCS};
use crate::data::{Event, NormalizedPaper, RawPaper};
use crate::errors::PipelineError;
use crate::identity::IdentityResolver;
use crate::normalize::{normalize, Stopwords};
use crate::timeline::{parse_date, to_timestamp, Jitter};

/// Per-run counters for skipped and emitted records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Papers read from the source.
    pub papers_in: usize,
    /// Papers skipped for an unparsable or absent publication date.
    pub skipped_malformed_date: usize,
    /// Papers skipped for a missing author list or title.
    pub skipped_missing_field: usize,
    /// Events emitted, one per surviving paper.
    pub events_out: usize,
}

/// Everything produced by one pipeline run.
///
/// The identity registry is only handed out here, after the full pass has
/// completed; a partially-populated registry is never observable.
pub struct RunOutcome {
    /// The ordered event stream, ready for the inference collaborator.
    pub events: Vec<Event>,
    /// Normalized papers in event order (same order as `events`).
    pub papers: Vec<NormalizedPaper>,
    /// The finalized author identity registry.
    pub resolver: IdentityResolver,
    /// Skip/emit counters for the run.
    pub report: RunReport,
}

/// The normalization-and-assembly pipeline.
///
/// Strictly single-threaded and batch-oriented: `run` takes the whole
/// pre-loaded corpus, performs normalization, timestamping, sorting, and
/// identity resolution as one sequential pass, and returns the event stream
/// with the finalized registry.
pub struct Pipeline {
    config: PipelineConfig,
    stopwords: Stopwords,
}

impl Pipeline {
    /// Create a pipeline from a validated configuration and stopword set.
    pub fn new(config: PipelineConfig, stopwords: Stopwords) -> Self {
        Self { config, stopwords }
    }

    /// Active configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the full pipeline over a pre-loaded corpus.
    ///
    /// Per-record failures (malformed date, missing field) skip only that
    /// record, with a warning; they never abort the run. Output events are
    /// totally ordered by time: different calendar dates order strictly,
    /// same-day ties are broken by jitter.
    pub fn run(&self, papers: Vec<RawPaper>) -> RunOutcome {
        let mut report = RunReport {
            papers_in: papers.len(),
            ..RunReport::default()
        };

        // Pass 1: pure normalization plus timestamping. Jitter is drawn per
        // surviving paper in source order, so a fixed seed pins the stream.
        let mut jitter = Jitter::from_seed(self.config.jitter_seed);
        let mut normalized: Vec<NormalizedPaper> = Vec::with_capacity(papers.len());
        for paper in &papers {
            match self.normalize_paper(paper, &mut jitter) {
                Ok(paper) => normalized.push(paper),
                Err(err @ PipelineError::MalformedDate { .. }) => {
                    report.skipped_malformed_date += 1;
                    warn!(%err, "skipping paper");
                }
                Err(err @ PipelineError::MissingField { .. }) => {
                    report.skipped_missing_field += 1;
                    warn!(%err, "skipping paper");
                }
                Err(err) => {
                    // Normalization only produces per-record errors today.
                    report.skipped_missing_field += 1;
                    warn!(%err, "skipping paper");
                }
            }
        }

        let mut resolver = IdentityResolver::new(self.config.id_base);
        let events = self.assemble(&mut normalized, &mut resolver);

        report.events_out = events.len();
        debug_assert_eq!(events.len(), normalized.len());
        info!(
            papers_in = report.papers_in,
            events_out = report.events_out,
            skipped_malformed_date = report.skipped_malformed_date,
            skipped_missing_field = report.skipped_missing_field,
            unique_authors = resolver.size(),
            "pipeline run complete"
        );

        RunOutcome {
            events,
            papers: normalized,
            resolver,
            report,
        }
    }

    /// Sort normalized papers ascending by timestamp and emit one event per
    /// paper in that order.
    ///
    /// The stable sort defines the single deterministic iteration order of a
    /// run: the resolver is populated while walking it, so id assignment
    /// correlates with publication order. The resolver is taken by mutable
    /// reference to keep the single-writer discipline explicit.
    pub fn assemble(
        &self,
        papers: &mut Vec<NormalizedPaper>,
        resolver: &mut IdentityResolver,
    ) -> Vec<Event> {
        papers.sort_by(|a, b| a.time.total_cmp(&b.time));
        papers
            .iter()
            .map(|paper| self.emit_event(paper, resolver))
            .collect()
    }

    /// Project events for the inference boundary: restrict content to the
    /// requested modalities and, unless co-authors are enabled, keep only
    /// the first author's id.
    pub fn project_for_inference(&self, events: &[Event], modalities: &[&str]) -> Vec<Event> {
        project_events(events, modalities, self.config.use_coauthors)
    }

    /// Normalize one raw paper into a fresh record; the source is untouched.
    fn normalize_paper(
        &self,
        raw: &RawPaper,
        jitter: &mut Jitter,
    ) -> Result<NormalizedPaper, PipelineError> {
        let raw_date = raw
            .date
            .first()
            .ok_or_else(|| PipelineError::MalformedDate {
                paper_id: raw.identifier.clone(),
                raw: String::new(),
            })?;
        let date = parse_date(&raw.identifier, raw_date)?;

        let authors: Vec<String> = raw
            .author
            .iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();
        if authors.is_empty() {
            return Err(PipelineError::MissingField {
                paper_id: raw.identifier.clone(),
                field: "author",
            });
        }
        if raw.title.trim().is_empty() {
            return Err(PipelineError::MissingField {
                paper_id: raw.identifier.clone(),
                field: "title",
            });
        }

        let time = to_timestamp(date, self.config.epoch_date, jitter.next_offset());
        debug!(paper = %raw.identifier, time, "normalized paper");

        Ok(NormalizedPaper {
            identifier: raw.identifier.clone(),
            title: normalize(&raw.title, &self.stopwords),
            abstract_text: normalize(&raw.abstract_text, &self.stopwords),
            authors,
            citations: raw.citations.iter().map(normalize_citation).collect(),
            date,
            time,
        })
    }

    fn emit_event(&self, paper: &NormalizedPaper, resolver: &mut IdentityResolver) -> Event {
        let docs = match self.config.modality {
            Modality::Title => paper.title.clone(),
            Modality::Abstract => paper.abstract_text.clone(),
        };
        let auths = paper
            .citations
            .iter()
            .flat_map(|citation| citation.authors.iter())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ");

        let author_ids = paper
            .authors
            .iter()
            .map(|name| resolver.resolve(name))
            .collect();

        let mut content = IndexMap::new();
        content.insert(MODALITY_DOCS.to_string(), docs);
        content.insert(MODALITY_AUTHS.to_string(), auths);

        Event {
            time: paper.time,
            content,
            author_ids,
            extra: Vec::new(),
        }
    }
}

/// Restrict event content to `modalities` and optionally truncate the author
/// list to the first author. Event order and times are preserved.
pub fn project_events(events: &[Event], modalities: &[&str], use_coauthors: bool) -> Vec<Event> {
    events
        .iter()
        .map(|event| {
            let content: IndexMap<String, String> = event
                .content
                .iter()
                .filter(|(label, _)| modalities.contains(&label.as_str()))
                .map(|(label, text)| (label.clone(), text.clone()))
                .collect();
            let author_ids = if use_coauthors {
                event.author_ids.clone()
            } else {
                event.author_ids.iter().take(1).copied().collect()
            };
            Event {
                time: event.time,
                content,
                author_ids,
                extra: event.extra.clone(),
            }
        })
        .collect()
}
