//! Corpus and author reporting helpers.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use crate::data::{Event, RawPaper};
use crate::timeline::parse_date;
use crate::types::AuthorId;

/// Per-author activity counts derived from an event stream.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthorActivity {
    /// Number of events each author appears on (any position).
    pub papers_per_author: HashMap<AuthorId, usize>,
    /// Number of events each author leads (first-author position).
    pub events_per_first_author: HashMap<AuthorId, usize>,
}

/// Count per-author appearances and first-author leads across a stream.
pub fn author_activity(events: &[Event]) -> AuthorActivity {
    let mut activity = AuthorActivity::default();
    for event in events {
        for id in &event.author_ids {
            *activity.papers_per_author.entry(*id).or_insert(0) += 1;
        }
        if let Some(first) = event.author_ids.first() {
            *activity.events_per_first_author.entry(*first).or_insert(0) += 1;
        }
    }
    activity
}

/// Number of distinct author ids appearing anywhere in the stream.
pub fn unique_author_count(events: &[Event]) -> usize {
    let mut seen: HashSet<AuthorId> = HashSet::new();
    for event in events {
        seen.extend(event.author_ids.iter().copied());
    }
    seen.len()
}

/// Earliest parsable publication date in a raw corpus.
///
/// Useful for choosing an epoch so the whole corpus lands on the
/// non-negative time axis. Malformed dates are ignored.
pub fn earliest_date(papers: &[RawPaper]) -> Option<NaiveDate> {
    papers
        .iter()
        .filter_map(|paper| {
            let raw = paper.date.first()?;
            parse_date(&paper.identifier, raw).ok()
        })
        .min()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DateField;
    use indexmap::IndexMap;

    fn event(ids: &[usize]) -> Event {
        Event {
            time: 0.0,
            content: IndexMap::new(),
            author_ids: ids.to_vec(),
            extra: Vec::new(),
        }
    }

    #[test]
    fn activity_counts_appearances_and_leads() {
        let events = vec![event(&[0, 1]), event(&[1]), event(&[0, 2])];
        let activity = author_activity(&events);
        assert_eq!(activity.papers_per_author[&0], 2);
        assert_eq!(activity.papers_per_author[&1], 2);
        assert_eq!(activity.papers_per_author[&2], 1);
        assert_eq!(activity.events_per_first_author[&0], 2);
        assert_eq!(activity.events_per_first_author[&1], 1);
        assert!(!activity.events_per_first_author.contains_key(&2));
    }

    #[test]
    fn unique_author_count_deduplicates() {
        let events = vec![event(&[0, 1]), event(&[1, 2])];
        assert_eq!(unique_author_count(&events), 3);
        assert_eq!(unique_author_count(&[]), 0);
    }

    #[test]
    fn earliest_date_ignores_malformed_entries() {
        let paper = |id: &str, date: &str| RawPaper {
            identifier: id.to_string(),
            title: String::new(),
            abstract_text: String::new(),
            author: Vec::new(),
            date: DateField::Single(date.to_string()),
            citations: Vec::new(),
        };
        let papers = vec![
            paper("p1", "2001-05-01"),
            paper("p2", "bogus"),
            paper("p3", "1996-06-03"),
        ];
        assert_eq!(
            earliest_date(&papers),
            NaiveDate::from_ymd_opt(1996, 6, 3)
        );
        assert_eq!(earliest_date(&[paper("p", "bogus")]), None);
    }
}
