//! Fixed-width big-endian sample assembly.

/// Widest supported sample, in bytes.
///
/// Samples are `u64`, and `256^7` still leaves headroom for the
/// running sums some estimators keep.
pub const MAX_WIDTH: usize = 7;

/// Groups raw bytes into `width`-byte big-endian unsigned integers.
///
/// Only the partially assembled value is kept between calls, so
/// memory use does not depend on stream length.
#[derive(Debug, Clone)]
pub struct SampleAssembler {
    width: usize,
    pending: usize,
    value: u64,
}

impl SampleAssembler {
    /// Creates an assembler for `width`-byte samples.
    ///
    /// `width` is clamped into `1..=MAX_WIDTH`.
    pub fn new(width: usize) -> Self {
        Self {
            width: width.clamp(1, MAX_WIDTH),
            pending: 0,
            value: 0,
        }
    }

    /// Consumes one byte, returning a sample once `width` bytes
    /// have accumulated since the previous one.
    #[inline]
    pub fn feed(&mut self, byte: u8) -> Option<u64> {
        self.value = (self.value << 8) | u64::from(byte);
        self.pending += 1;

        if self.pending < self.width {
            return None;
        }

        let sample = self.value;
        self.value = 0;
        self.pending = 0;
        Some(sample)
    }

    /// Sample width in bytes.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Exclusive upper bound on emitted samples (`256^width`).
    #[inline]
    pub fn max_sample(&self) -> u64 {
        1u64 << (8 * self.width)
    }

    /// Bytes buffered toward the next sample.
    ///
    /// These are dropped if the stream ends before the sample completes.
    #[inline]
    pub fn pending(&self) -> usize {
        self.pending
    }
}
