use std::io::Write;

use bibevents::export::{read_events, write_events};
use bibevents::{CorpusSource, JsonCorpusSource, Pipeline, PipelineConfig, PipelineError, Stopwords};

const CORPUS: &str = r#"{
    "oai:arXiv.org:cs/0101001": {
        "title": "The Complexity of Counting",
        "abstract": "We revisit counting problems.",
        "author": ["A B", "C D"],
        "date": ["2001-01-15"],
        "citations": [
            {"author": ["Valiant, Leslie"]},
            {"author": ["title = leaked entry"]}
        ]
    },
    "oai:arXiv.org:cs/0101002": {
        "title": "Counting, Revisited",
        "abstract": "A follow-up.",
        "author": ["C D"],
        "date": ["2001-02-01"],
        "citations": []
    }
}"#;

fn corpus_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CORPUS.as_bytes()).unwrap();
    file
}

#[test]
fn json_corpus_feeds_the_pipeline_end_to_end() {
    let file = corpus_file();
    let source = JsonCorpusSource::new("arxiv_cs", file.path());

    let config = PipelineConfig {
        jitter_seed: Some(512),
        ..PipelineConfig::default()
    };
    let pipeline = Pipeline::new(config, Stopwords::from_lines(["the", "of", "we", "a"]));
    let outcome = pipeline.run(source.load().unwrap());

    assert_eq!(outcome.events.len(), 2);
    assert_eq!(
        outcome.events[0].content.get("docs").unwrap(),
        "complexity counting"
    );
    // The leaked-title citation entry contributes nothing; the citation
    // itself survives with no authors.
    assert_eq!(
        outcome.events[0].content.get("auths").unwrap(),
        "Leslie#Valiant"
    );
    assert_eq!(outcome.papers[0].citations.len(), 2);
    assert!(outcome.papers[0].citations[1].authors.is_empty());

    // "C D" appears on both papers under the same identity.
    assert_eq!(outcome.events[0].author_ids, vec![0, 1]);
    assert_eq!(outcome.events[1].author_ids, vec![1]);
}

#[test]
fn per_id_lookup_surfaces_misses_as_recoverable() {
    let file = corpus_file();
    let source = JsonCorpusSource::new("arxiv_cs", file.path());

    let hit = source.get("oai:arXiv.org:cs/0101002").unwrap();
    assert_eq!(hit.title, "Counting, Revisited");

    let miss = source.get("oai:arXiv.org:cs/9999999").unwrap_err();
    assert!(matches!(miss, PipelineError::LookupMiss { .. }));
    assert!(miss.is_per_record());
}

#[test]
fn event_stream_round_trips_through_jsonl() {
    let file = corpus_file();
    let source = JsonCorpusSource::new("arxiv_cs", file.path());
    let pipeline = Pipeline::new(
        PipelineConfig {
            jitter_seed: Some(7),
            ..PipelineConfig::default()
        },
        Stopwords::default(),
    );
    let outcome = pipeline.run(source.load().unwrap());

    let mut buffer = Vec::new();
    write_events(&mut buffer, &outcome.events).unwrap();
    let restored = read_events(buffer.as_slice()).unwrap();

    assert_eq!(restored.len(), outcome.events.len());
    for (restored, original) in restored.iter().zip(&outcome.events) {
        assert_eq!(restored.time, original.time);
        assert_eq!(restored.author_ids, original.author_ids);
        assert_eq!(restored.content, original.content);
    }
}
