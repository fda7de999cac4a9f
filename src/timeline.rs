//! Calendar dates to a continuous, strictly orderable time axis.

use chrono::NaiveDate;
use rand::Rng;

use crate::constants::timeline::DATE_FORMAT;
use crate::errors::PipelineError;
use crate::types::{PaperId, Timestamp};

/// Parse a publication date string against the pipeline's calendar pattern.
pub fn parse_date(paper_id: &PaperId, raw: &str) -> Result<NaiveDate, PipelineError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| PipelineError::MalformedDate {
        paper_id: paper_id.clone(),
        raw: raw.to_string(),
    })
}

/// Map a calendar date to a timestamp: whole days elapsed since `epoch`,
/// plus `jitter` in `[0, 1)`.
///
/// Jitter breaks exact ties between same-day papers while preserving
/// day-level ordering: papers on different dates always compare strictly,
/// regardless of jitter, because the jitter magnitude stays below one day.
pub fn to_timestamp(date: NaiveDate, epoch: NaiveDate, jitter: f64) -> Timestamp {
    debug_assert!((0.0..1.0).contains(&jitter));
    (date - epoch).num_days() as f64 + jitter
}

#[derive(Debug, Clone)]
/// Small deterministic RNG (splitmix64) used for reproducible jitter.
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64_internal(&mut self) -> u64 {
        let mut z = self.state.wrapping_add(0x9E3779B97F4A7C15);
        self.state = z;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }
}

impl rand::RngCore for DeterministicRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64_internal() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_u64_internal()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut offset = 0;
        while offset < dest.len() {
            let value = self.next_u64_internal();
            let bytes = value.to_le_bytes();
            let remaining = dest.len() - offset;
            let copy_len = remaining.min(bytes.len());
            dest[offset..offset + copy_len].copy_from_slice(&bytes[..copy_len]);
            offset += copy_len;
        }
    }
}

/// Per-paper tie-breaking jitter source.
///
/// Seeded construction yields an identical draw sequence across runs, which
/// pins same-day event order for reproducible tests. Unseeded construction
/// draws a fresh seed, so same-day order varies between runs.
#[derive(Debug, Clone)]
pub struct Jitter {
    rng: DeterministicRng,
}

impl Jitter {
    /// Create a jitter source from an optional seed.
    pub fn from_seed(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            rng: DeterministicRng::new(seed),
        }
    }

    /// Draw the next uniform value in `[0, 1)`.
    pub fn next_offset(&mut self) -> f64 {
        self.rng.random_range(0.0..1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(raw: &str) -> NaiveDate {
        parse_date(&"test".to_string(), raw).unwrap()
    }

    #[test]
    fn parse_date_accepts_iso_and_rejects_others() {
        assert!(parse_date(&"p".to_string(), "2001-01-01").is_ok());
        assert!(parse_date(&"p".to_string(), " 2001-01-01 ").is_ok());
        let err = parse_date(&"p".to_string(), "Jan 1, 2001").unwrap_err();
        assert!(matches!(err, PipelineError::MalformedDate { .. }));
    }

    #[test]
    fn timestamps_count_whole_days_from_epoch() {
        let epoch = date("1996-06-03");
        assert_eq!(to_timestamp(epoch, epoch, 0.0), 0.0);
        assert_eq!(to_timestamp(date("1996-06-04"), epoch, 0.0), 1.0);
        assert_eq!(to_timestamp(date("1996-06-13"), epoch, 0.25), 10.25);
        // Dates before the epoch land on the negative axis.
        assert_eq!(to_timestamp(date("1996-06-01"), epoch, 0.5), -1.5);
    }

    #[test]
    fn different_dates_order_strictly_regardless_of_jitter() {
        let epoch = date("1996-06-03");
        let earlier = to_timestamp(date("2001-01-01"), epoch, 0.999_999);
        let later = to_timestamp(date("2001-01-02"), epoch, 0.0);
        assert!(earlier < later);
    }

    #[test]
    fn seeded_jitter_is_reproducible() {
        let mut a = Jitter::from_seed(Some(512));
        let mut b = Jitter::from_seed(Some(512));
        for _ in 0..32 {
            assert_eq!(a.next_offset(), b.next_offset());
        }
    }

    #[test]
    fn jitter_stays_in_unit_interval() {
        let mut jitter = Jitter::from_seed(Some(7));
        for _ in 0..1000 {
            let value = jitter.next_offset();
            assert!((0.0..1.0).contains(&value));
        }
    }
}
