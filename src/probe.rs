//! The probe connection: one blocking TCP stream to the peer under test
//!
//! The wire format is deliberately bare: each request is exactly one byte
//! (`x`), and the peer is expected to answer with at least one byte per
//! request. The receive buffer is 1000 bytes of headroom; there is no
//! framing, delimiter, or length prefix, so any non-empty read completes
//! the round-trip regardless of how many bytes arrived.

use crate::defaults::{RECV_BUFFER_SIZE, REQUEST_BYTE};
use crate::error::{AppError, ErrorContext, Result};
use crate::types::Endpoint;
use std::io::{Read, Write};
use std::net::TcpStream;

/// Seam for the round-trip operation, so the benchmark loop can be
/// exercised against scripted peers in tests.
pub trait Transport {
    /// Perform one send/receive round-trip and return the number of
    /// response bytes read.
    fn round_trip(&mut self) -> Result<usize>;
}

/// A single blocking TCP connection to the peer under test.
///
/// The stream is owned exclusively by this struct and is closed when it is
/// dropped, on every exit path. No read or write timeout is ever set: a
/// peer that accepts but never responds blocks the caller indefinitely.
#[derive(Debug)]
pub struct ProbeConnection {
    stream: TcpStream,
    endpoint: Endpoint,
    recv_buf: Box<[u8; RECV_BUFFER_SIZE]>,
}

impl ProbeConnection {
    /// Open the one connection for a run.
    ///
    /// Failure here is fatal to the run and happens before any timing
    /// starts.
    pub fn connect(endpoint: &Endpoint) -> Result<Self> {
        let addrs = endpoint
            .resolve()
            .map_err(|e| AppError::connect(format!("Failed to resolve {}: {}", endpoint, e)))?;

        let stream = TcpStream::connect(&addrs[..])
            .map_err(|e| AppError::connect(format!("Failed to connect to {}: {}", endpoint, e)))?;

        Ok(Self {
            stream,
            endpoint: endpoint.clone(),
            recv_buf: Box::new([0u8; RECV_BUFFER_SIZE]),
        })
    }

    /// The endpoint this connection is bound to
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}

impl Transport for ProbeConnection {
    fn round_trip(&mut self) -> Result<usize> {
        self.stream
            .write_all(&[REQUEST_BYTE])
            .with_context(|| format!("Send to {} failed", self.endpoint))?;

        let n = self
            .stream
            .read(&mut self.recv_buf[..])
            .with_context(|| format!("Receive from {} failed", self.endpoint))?;

        // A zero-length read means the peer closed the stream. The run
        // fails with a distinct error instead of continuing onto a dead
        // socket.
        if n == 0 {
            return Err(AppError::peer_closed(format!(
                "{} closed the connection mid-run",
                self.endpoint
            )));
        }

        Ok(n)
    }
}
