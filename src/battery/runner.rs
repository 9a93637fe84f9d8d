//! Byte fan-out to registered estimators.

use super::BatteryReport;
use crate::estimators::{Estimator, EstimatorKind};
use std::io::{ErrorKind, Read};
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

/// Default read size when streaming from a reader.
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Errors that can occur while driving the battery.
#[derive(Debug, Error)]
pub enum BatteryError {
    /// Reading the input failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// An ordered set of estimators fed from a single byte stream.
pub struct Battery {
    estimators: Vec<Box<dyn Estimator>>,
    bytes_consumed: u64,
    chunk_size: usize,
    interrupted: bool,
}

impl Battery {
    /// Creates a battery from already-constructed estimators.
    pub fn new(estimators: Vec<Box<dyn Estimator>>) -> Self {
        Self {
            estimators,
            bytes_consumed: 0,
            chunk_size: DEFAULT_CHUNK_SIZE,
            interrupted: false,
        }
    }

    /// The default registry: size, average, mean, pi, euler, lcmc.
    pub fn standard() -> Self {
        Self::from_kinds(&EstimatorKind::ALL)
    }

    /// Builds fresh estimators of the given kinds, in order.
    pub fn from_kinds(kinds: &[EstimatorKind]) -> Self {
        Self::new(kinds.iter().map(|k| k.build()).collect())
    }

    /// Sets the read size used by [`Battery::consume`].
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Names of the registered estimators, in order.
    pub fn names(&self) -> Vec<&'static str> {
        self.estimators.iter().map(|e| e.name()).collect()
    }

    /// Bytes fed so far.
    pub fn bytes_consumed(&self) -> u64 {
        self.bytes_consumed
    }

    /// Dispatches one byte to every estimator.
    #[inline]
    pub fn feed_byte(&mut self, byte: u8) {
        for estimator in &mut self.estimators {
            estimator.process_byte(byte);
        }
        self.bytes_consumed += 1;
    }

    /// Dispatches each byte to every estimator before the next byte.
    pub fn feed(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.feed_byte(byte);
        }
    }

    /// Streams `reader` to end of input in fixed-size chunks.
    ///
    /// If `stop` is set between chunks, reading ends early and the
    /// battery is marked interrupted. Returns the bytes read by this call.
    pub fn consume<R: Read>(
        &mut self,
        mut reader: R,
        stop: Option<&AtomicBool>,
    ) -> Result<u64, BatteryError> {
        let mut buf = vec![0u8; self.chunk_size];
        let mut read_total = 0u64;

        tracing::info!(
            estimators = self.estimators.len(),
            chunk_size = self.chunk_size,
            "Consuming input"
        );

        loop {
            if stop.is_some_and(|s| s.load(Ordering::Relaxed)) {
                tracing::warn!(bytes = read_total, "Input interrupted; finalizing early");
                self.interrupted = true;
                break;
            }

            let n = match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };

            self.feed(&buf[..n]);
            read_total += n as u64;
            tracing::trace!(chunk = n, total = self.bytes_consumed, "Fed chunk");
        }

        tracing::info!(bytes = read_total, "Input exhausted");
        Ok(read_total)
    }

    /// Finalizes every estimator in registration order.
    pub fn finish(self) -> BatteryReport {
        let verdicts = self
            .estimators
            .iter()
            .flat_map(|estimator| {
                let verdicts = estimator.finalize();
                tracing::debug!(
                    estimator = estimator.name(),
                    verdicts = verdicts.len(),
                    "Estimator finalized"
                );
                verdicts
            })
            .collect();

        BatteryReport {
            bytes_consumed: self.bytes_consumed,
            interrupted: self.interrupted,
            verdicts,
        }
    }
}

impl Default for Battery {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimators::Level;
    use std::io::Cursor;

    #[test]
    fn test_standard_registry_line_count() {
        let report = Battery::standard().finish();
        assert_eq!(report.verdicts.len(), 12);
        assert_eq!(report.count(Level::Fail), 12);
    }

    #[test]
    fn test_consume_matches_feed() {
        let data: Vec<u8> = (0..10_000u32).map(|i| (i * 31 + 7) as u8).collect();

        let mut fed = Battery::standard();
        fed.feed(&data);

        let mut streamed = Battery::standard().with_chunk_size(13);
        let n = streamed.consume(Cursor::new(&data), None).unwrap();
        assert_eq!(n, data.len() as u64);

        assert_eq!(fed.finish().verdicts, streamed.finish().verdicts);
    }

    #[test]
    fn test_stop_flag_ends_early() {
        let stop = AtomicBool::new(true);
        let mut battery = Battery::standard();
        let n = battery.consume(Cursor::new(vec![0u8; 4096]), Some(&stop)).unwrap();
        assert_eq!(n, 0);
        assert!(battery.finish().interrupted);
    }

    #[test]
    fn test_custom_order() {
        let battery = Battery::from_kinds(&[EstimatorKind::Pi, EstimatorKind::Size]);
        assert_eq!(battery.names(), ["pi", "size"]);
        let report = battery.finish();
        assert_eq!(report.verdicts[0].test, "pi");
        assert_eq!(report.verdicts[1].test, "size.1kib");
    }

    #[test]
    fn test_read_error_propagates() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(ErrorKind::Other, "boom"))
            }
        }
        let err = Battery::standard().consume(Broken, None).unwrap_err();
        assert!(matches!(err, BatteryError::Io(_)));
    }
}
