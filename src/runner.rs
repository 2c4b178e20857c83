//! Benchmark execution: the timed round-trip loop
//!
//! The runner owns the run lifecycle: connect (untimed), run the loop
//! between two timestamps, and assemble the report. Round-trips are
//! strictly sequential; no send begins until the previous receive has
//! returned, and the first failure aborts the run with no partial report.

use crate::error::Result;
use crate::models::{Config, RunReport};
use crate::probe::{ProbeConnection, Transport};
use crate::types::Endpoint;
use chrono::Utc;
use std::time::Instant;

/// Executes one benchmark run against the configured endpoint
pub struct BenchmarkRunner {
    endpoint: Endpoint,
    message_count: u64,
}

impl BenchmarkRunner {
    /// Create a runner from the application configuration
    pub fn new(config: &Config) -> Self {
        Self {
            endpoint: config.endpoint(),
            message_count: config.message_count,
        }
    }

    /// Create a runner for an explicit endpoint and round-trip count
    pub fn with_endpoint(endpoint: Endpoint, message_count: u64) -> Self {
        Self {
            endpoint,
            message_count,
        }
    }

    /// Run the benchmark: connect, perform the round-trips, report.
    ///
    /// Connection setup happens outside the timing window; only the loop
    /// is measured. Any error ends the run immediately, and the connection
    /// is closed on every exit path when the probe is dropped.
    pub fn run(&self) -> Result<RunReport> {
        let mut conn = ProbeConnection::connect(&self.endpoint)?;
        self.run_with_transport(&mut conn)
    }

    /// The measurement loop over an already-established transport
    pub fn run_with_transport<T: Transport>(&self, transport: &mut T) -> Result<RunReport> {
        let started_at = Utc::now();
        let mut bytes_received: u64 = 0;

        let start = Instant::now();
        for _ in 0..self.message_count {
            bytes_received += transport.round_trip()? as u64;
        }
        let elapsed = start.elapsed();

        Ok(RunReport::new(
            self.endpoint.clone(),
            self.message_count,
            elapsed,
            self.message_count, // one request byte per round-trip
            bytes_received,
            started_at,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    /// Scripted transport that records call ordering and can fail at a
    /// chosen round-trip.
    struct ScriptedTransport {
        calls: u64,
        fail_at: Option<u64>,
        response_len: usize,
    }

    impl ScriptedTransport {
        fn echoing() -> Self {
            Self {
                calls: 0,
                fail_at: None,
                response_len: 1,
            }
        }

        fn failing_at(call: u64) -> Self {
            Self {
                calls: 0,
                fail_at: Some(call),
                response_len: 1,
            }
        }
    }

    impl Transport for ScriptedTransport {
        fn round_trip(&mut self) -> crate::error::Result<usize> {
            self.calls += 1;
            if Some(self.calls) == self.fail_at {
                return Err(AppError::peer_closed("scripted close"));
            }
            Ok(self.response_len)
        }
    }

    fn runner(count: u64) -> BenchmarkRunner {
        BenchmarkRunner::with_endpoint(Endpoint::new("127.0.0.1", 8000), count)
    }

    #[test]
    fn test_performs_exactly_n_round_trips() {
        let mut transport = ScriptedTransport::echoing();
        let report = runner(500).run_with_transport(&mut transport).unwrap();

        assert_eq!(transport.calls, 500);
        assert_eq!(report.message_count, 500);
        assert_eq!(report.bytes_sent, 500);
        assert_eq!(report.bytes_received, 500);
    }

    #[test]
    fn test_single_round_trip_reports_positive_rate() {
        let mut transport = ScriptedTransport::echoing();
        let report = runner(1).run_with_transport(&mut transport).unwrap();

        assert_eq!(transport.calls, 1);
        assert!(report.elapsed_secs() > 0.0);
        assert!(report.throughput() > 0.0);
        assert!(report.throughput().is_finite());
    }

    #[test]
    fn test_failure_aborts_with_no_partial_report() {
        let mut transport = ScriptedTransport::failing_at(3);
        let result = runner(10).run_with_transport(&mut transport);

        assert!(matches!(result, Err(AppError::PeerClosed(_))));
        // The failing call was the last one made; nothing continued past it
        assert_eq!(transport.calls, 3);
    }

    #[test]
    fn test_counts_multi_byte_responses() {
        let mut transport = ScriptedTransport {
            calls: 0,
            fail_at: None,
            response_len: 5,
        };
        let report = runner(4).run_with_transport(&mut transport).unwrap();

        assert_eq!(report.bytes_sent, 4);
        assert_eq!(report.bytes_received, 20);
    }
}
