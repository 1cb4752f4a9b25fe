//! Reading time estimation.
//!
//! Words-per-minute defaults are based on a meta-analysis of adult
//! reading rates, see
//! <https://www.sciencedirect.com/science/article/abs/pii/S0749596X19300786>.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Words per minute read by average adults.
pub const AVERAGE_WORDS_PER_MINUTE: f64 = 238.0;

/// Words per minute at a slower pace, such as tired readers or readers
/// looking at monitors and screens all day.
pub const RELAXED_WORDS_PER_MINUTE: f64 = 177.0;

/// A single reading time estimate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReadingEstimate {
    /// Whole minutes: rounded down for the average estimate and up for
    /// the relaxed one, so the two together bound a plausible range for
    /// display.
    pub minutes: u64,

    /// The exact estimated time, fractional minutes included.
    pub duration: Duration,
}

/// Word count and derived reading time estimates for a piece of content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReadingMetrics {
    /// Number of words detected in the content.
    pub word_count: usize,

    /// Estimate at the average reading speed.
    pub average: ReadingEstimate,

    /// Estimate at the relaxed reading speed.
    pub relaxed: ReadingEstimate,
}

impl ReadingMetrics {
    /// Derive metrics from a word count and two reading speeds.
    pub fn estimate(word_count: usize, average_wpm: f64, relaxed_wpm: f64) -> Self {
        let average_time = word_count as f64 / average_wpm;
        let relaxed_time = word_count as f64 / relaxed_wpm;

        ReadingMetrics {
            word_count,
            average: ReadingEstimate {
                minutes: average_time.floor() as u64,
                duration: Duration::from_secs_f64(average_time * 60.0),
            },
            relaxed: ReadingEstimate {
                minutes: relaxed_time.ceil() as u64,
                duration: Duration::from_secs_f64(relaxed_time * 60.0),
            },
        }
    }
}
