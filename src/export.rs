//! JSON-lines persistence for the event stream.
//!
//! The inference boundary does not mandate a serialization format, but when
//! a run's output is persisted, one JSON object per line (`time`, `content`,
//! `author_ids`) preserves the stream's order and every invariant.

use std::io::{BufRead, BufReader, Read, Write};

use crate::data::Event;
use crate::errors::PipelineError;

/// Write events as JSON lines, one event per line, in stream order.
pub fn write_events<W: Write>(mut writer: W, events: &[Event]) -> Result<(), PipelineError> {
    for event in events {
        serde_json::to_writer(&mut writer, event)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Read a JSON-lines event stream back, preserving order. Blank lines are
/// skipped.
pub fn read_events<R: Read>(reader: R) -> Result<Vec<Event>, PipelineError> {
    let mut events = Vec::new();
    for line in BufReader::new(reader).lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        events.push(serde_json::from_str(&line)?);
    }
    Ok(events)
}
