//! Run report data model
//!
//! A `RunReport` captures everything measured during one benchmark run:
//! the timing window around the round-trip loop (connection setup is
//! excluded), the number of completed round-trips, and the byte counters
//! for both directions.

use crate::types::Endpoint;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Results of a completed benchmark run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// The endpoint that was tested
    pub endpoint: Endpoint,

    /// Number of round-trips performed
    pub message_count: u64,

    /// Wall-clock duration of the measurement loop only
    pub elapsed: Duration,

    /// Total bytes written to the peer (one per round-trip)
    pub bytes_sent: u64,

    /// Total bytes read back from the peer
    pub bytes_received: u64,

    /// When the measurement loop started
    pub started_at: DateTime<Utc>,
}

impl RunReport {
    /// Create a new run report
    pub fn new(
        endpoint: Endpoint,
        message_count: u64,
        elapsed: Duration,
        bytes_sent: u64,
        bytes_received: u64,
        started_at: DateTime<Utc>,
    ) -> Self {
        Self {
            endpoint,
            message_count,
            elapsed,
            bytes_sent,
            bytes_received,
            started_at,
        }
    }

    /// Completed round-trips divided by the wall-clock duration of the
    /// loop, in messages per second.
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.message_count as f64 / secs
        } else {
            0.0
        }
    }

    /// Average wall-clock time per round-trip
    pub fn avg_round_trip(&self) -> Duration {
        if self.message_count > 0 {
            Duration::from_secs_f64(self.elapsed.as_secs_f64() / self.message_count as f64)
        } else {
            Duration::ZERO
        }
    }

    /// Elapsed time of the loop in seconds
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}
