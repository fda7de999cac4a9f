use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use crate::types::{AuthorId, CanonicalToken, PaperId, RawName, Timestamp};

/// One raw citation block attached to a paper, as scraped from a bibliography.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RawCitation {
    /// Author-name strings in whatever shape the bibliography produced.
    #[serde(default)]
    pub author: Vec<RawName>,
}

/// Publication date field; corpus files carry either a single date string or
/// a list where the first entry is the publication date.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateField {
    /// A single calendar-date string.
    Single(String),
    /// A list of date strings; only the first is meaningful.
    Many(Vec<String>),
}

impl DateField {
    /// The publication date string, if any is present.
    pub fn first(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value.as_str()),
            Self::Many(values) => values.first().map(String::as_str),
        }
    }
}

impl Default for DateField {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

/// One bibliographic record exactly as read from the corpus source.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawPaper {
    /// Stable unique identifier for the paper.
    pub identifier: PaperId,
    /// Raw title text.
    #[serde(default)]
    pub title: String,
    /// Raw abstract text.
    #[serde(default, rename = "abstract")]
    pub abstract_text: String,
    /// Ordered author-name strings; the first author is distinguished.
    #[serde(default)]
    pub author: Vec<RawName>,
    /// Raw publication date field.
    #[serde(default)]
    pub date: DateField,
    /// Citation blocks scraped from the paper's bibliography.
    #[serde(default)]
    pub citations: Vec<RawCitation>,
}

/// A citation after author normalization: canonical tokens only.
///
/// A citation whose authors all failed normalization keeps an empty token
/// list; it is not dropped from the paper.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// Canonical `#`-joined author tokens that survived the rule table.
    pub authors: Vec<CanonicalToken>,
}

/// A paper after the normalization pass. Produced fresh from a `RawPaper`;
/// the source record is never mutated.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NormalizedPaper {
    /// Stable unique identifier carried over from the raw record.
    pub identifier: PaperId,
    /// Normalized title (lowercased, punctuation-stripped, stopwords removed).
    pub title: String,
    /// Normalized abstract.
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// Trimmed author names in original order.
    pub authors: Vec<RawName>,
    /// Citations with canonicalized author tokens.
    pub citations: Vec<Citation>,
    /// Parsed publication date.
    pub date: NaiveDate,
    /// Jittered elapsed-day timestamp assigned during assembly.
    pub time: Timestamp,
}

/// Immutable event tuple handed to the inference collaborator.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Event {
    /// Elapsed fractional days since the epoch; the stream's total order.
    pub time: Timestamp,
    /// Text channels keyed by modality label (`docs`, then `auths`).
    pub content: IndexMap<String, String>,
    /// Resolved author ids, first author first. Never empty.
    pub author_ids: Vec<AuthorId>,
    /// Reserved for future use; always empty today.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_field_first_handles_both_shapes() {
        let single = DateField::Single("2001-01-01".into());
        assert_eq!(single.first(), Some("2001-01-01"));

        let many = DateField::Many(vec!["2002-02-02".into(), "2003-03-03".into()]);
        assert_eq!(many.first(), Some("2002-02-02"));

        assert_eq!(DateField::default().first(), None);
    }

    #[test]
    fn raw_paper_decodes_corpus_shape() {
        let raw = r#"{
            "identifier": "oai:arXiv.org:cs/9901001",
            "title": "A Title",
            "abstract": "An abstract.",
            "author": ["A B", "C D"],
            "date": ["1999-01-04"],
            "citations": [{"author": ["Smith, John"]}]
        }"#;
        let paper: RawPaper = serde_json::from_str(raw).unwrap();
        assert_eq!(paper.identifier, "oai:arXiv.org:cs/9901001");
        assert_eq!(paper.author.len(), 2);
        assert_eq!(paper.date.first(), Some("1999-01-04"));
        assert_eq!(paper.citations[0].author, vec!["Smith, John"]);
    }

    #[test]
    fn event_serializes_without_empty_extra() {
        let mut content = IndexMap::new();
        content.insert("docs".to_string(), "title text".to_string());
        content.insert("auths".to_string(), "John#Smith".to_string());
        let event = Event {
            time: 12.5,
            content,
            author_ids: vec![0, 1],
            extra: Vec::new(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(!json.contains("extra"));
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back.author_ids, vec![0, 1]);
        assert_eq!(back.content.get_index(0).unwrap().0, "docs");
    }
}
