//! split/splitter.rs
//! Recursive bisection of a collection into size-bounded payloads.
//!
//! Each node marshals its items, compresses them when asked, and either
//! emits the result as one payload or halves the items by count and recurses.
//! Halving by count (not bytes) keeps the depth at `⌈log2(N)⌉ + 1` whatever
//! the size skew; the price is re-marshaling surviving items at every level.

use std::panic;

use bytes::Bytes;
use tracing::{debug, info, trace, warn};

use crate::compression::Compressor;
use crate::split::{Marshaler, ParallelismProfile, SizeLimits, SplitError};
use crate::telemetry::{SplitCounters, SplitSnapshot, Stage, StageTimes, TelemetryTimer};

/// One encoded payload. Immutable once handed to the caller.
pub type Payload = Bytes;
pub type Payloads = Vec<Payload>;

/// A contiguous sub-range of the caller's collection.
#[derive(Debug)]
pub struct Chunk<'a, T> {
    items: &'a [T],
    offset: usize,
}

// Manual impls: a chunk is a borrowed view, copyable whatever `T` is.
impl<T> Clone for Chunk<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Chunk<'_, T> {}

impl<'a, T> Chunk<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self { items, offset: 0 }
    }

    pub fn items(&self) -> &'a [T] {
        self.items
    }

    /// Position of the first item in the caller's collection.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Halves of `floor(n/2)` and `ceil(n/2)` items, in order.
    pub fn bisect(&self) -> (Self, Self) {
        let mid = self.items.len() / 2;
        let (left, right) = self.items.split_at(mid);
        (
            Self { items: left, offset: self.offset },
            Self { items: right, offset: self.offset + mid },
        )
    }
}

enum Encoded {
    Fits(Payload),
    TooBig { raw_len: usize, compressed_len: Option<usize> },
}

/// Telemetry owned by one branch of the recursion.
#[derive(Default)]
struct Branch {
    counters: SplitCounters,
    stages: StageTimes,
}

impl Branch {
    fn merge(&mut self, other: Branch) {
        self.counters.merge(&other.counters);
        self.stages.merge(&other.stages);
    }
}

/// Splits collections into payloads that fit a pair of size limits.
///
/// A `Splitter` holds no per-call state and can be shared between
/// concurrent flushes.
pub struct Splitter {
    limits: SizeLimits,
    compressor: Box<dyn Compressor>,
    parallelism: ParallelismProfile,
}

impl Splitter {
    pub fn new(limits: SizeLimits, compressor: Box<dyn Compressor>) -> Self {
        Self {
            limits,
            compressor,
            parallelism: ParallelismProfile::single_threaded(),
        }
    }

    pub fn with_parallelism(mut self, parallelism: ParallelismProfile) -> Self {
        self.parallelism = parallelism;
        self
    }

    pub fn limits(&self) -> SizeLimits {
        self.limits
    }

    pub fn compressor(&self) -> &dyn Compressor {
        self.compressor.as_ref()
    }

    pub fn parallelism(&self) -> ParallelismProfile {
        self.parallelism
    }

    /// Split `items` into payloads, in order.
    ///
    /// Either every item lands in exactly one payload, or an error is returned
    /// and no payload is.
    pub fn split<M: Marshaler>(
        &self,
        items: &[M::Item],
        compress: bool,
        marshaler: &M,
    ) -> Result<Payloads, SplitError> {
        self.split_with_report(items, compress, marshaler)
            .map(|(payloads, _)| payloads)
    }

    /// Like [`Splitter::split`], also returning what the split cost.
    pub fn split_with_report<M: Marshaler>(
        &self,
        items: &[M::Item],
        compress: bool,
        marshaler: &M,
    ) -> Result<(Payloads, SplitSnapshot), SplitError> {
        self.context().run(items, compress, marshaler)
    }

    fn context(&self) -> SplitContext<'_> {
        SplitContext {
            limits: self.limits,
            compressor: self.compressor.as_ref(),
            parallelism: self.parallelism,
        }
    }
}

/// One-shot sequential split with a borrowed compressor, for callers that do
/// not keep a [`Splitter`] around.
pub fn payloads<M: Marshaler>(
    items: &[M::Item],
    compress: bool,
    marshaler: &M,
    limits: SizeLimits,
    compressor: &dyn Compressor,
) -> Result<Payloads, SplitError> {
    let context = SplitContext {
        limits,
        compressor,
        parallelism: ParallelismProfile::single_threaded(),
    };
    context.run(items, compress, marshaler).map(|(payloads, _)| payloads)
}

#[derive(Clone, Copy)]
struct SplitContext<'c> {
    limits: SizeLimits,
    compressor: &'c dyn Compressor,
    parallelism: ParallelismProfile,
}

impl SplitContext<'_> {
    fn run<M: Marshaler>(
        &self,
        items: &[M::Item],
        compress: bool,
        marshaler: &M,
    ) -> Result<(Payloads, SplitSnapshot), SplitError> {
        let mut timer = TelemetryTimer::new();
        let mut branch = Branch::default();

        let result = self.split_chunk(Chunk::new(items), compress, marshaler, 1, &mut branch);

        timer.finish();
        timer.stage_times = branch.stages;

        let payloads = result?;
        let snapshot = SplitSnapshot::from(&branch.counters, &timer);
        info!(
            category = marshaler.category(),
            items = items.len(),
            payloads = payloads.len(),
            max_depth = snapshot.max_depth,
            marshal_calls = snapshot.marshal_calls,
            elapsed_ms = snapshot.elapsed.as_secs_f64() * 1_000.0,
            "split complete"
        );
        Ok((payloads, snapshot))
    }

    fn split_chunk<M: Marshaler>(
        &self,
        chunk: Chunk<'_, M::Item>,
        compress: bool,
        marshaler: &M,
        depth: u32,
        branch: &mut Branch,
    ) -> Result<Payloads, SplitError> {
        let (raw_len, compressed_len) = match self.encode(chunk, compress, marshaler, depth, branch)? {
            Encoded::Fits(payload) => return Ok(vec![payload]),
            Encoded::TooBig { raw_len, compressed_len } => (raw_len, compressed_len),
        };

        if chunk.len() <= 1 {
            branch.counters.add_rejected();
            warn!(
                category = marshaler.category(),
                index = chunk.offset(),
                raw_len,
                ?compressed_len,
                max_uncompressed = self.limits.max_uncompressed(),
                max_compressed = self.limits.max_compressed(),
                "single item exceeds payload limits"
            );
            return Err(SplitError::PayloadTooLarge {
                category: marshaler.category(),
                index: chunk.offset(),
                raw_len,
                compressed_len,
                max_uncompressed: self.limits.max_uncompressed(),
                max_compressed: self.limits.max_compressed(),
            });
        }

        branch.counters.add_bisection();
        debug!(
            category = marshaler.category(),
            depth,
            offset = chunk.offset(),
            items = chunk.len(),
            raw_len,
            ?compressed_len,
            "payload too big, bisecting"
        );

        let (left, right) = chunk.bisect();
        if self.parallelism.should_fork(depth, chunk.len()) {
            return self.split_forked(left, right, compress, marshaler, depth, branch);
        }

        let mut payloads = self.split_chunk(left, compress, marshaler, depth + 1, branch)?;
        payloads.extend(self.split_chunk(right, compress, marshaler, depth + 1, branch)?);
        Ok(payloads)
    }

    /// Marshal, maybe compress, and measure one chunk.
    fn encode<M: Marshaler>(
        &self,
        chunk: Chunk<'_, M::Item>,
        compress: bool,
        marshaler: &M,
        depth: u32,
        branch: &mut Branch,
    ) -> Result<Encoded, SplitError> {
        let raw = branch
            .stages
            .measure(Stage::Marshal, || marshaler.marshal(chunk.items()))?;
        let raw_len = raw.len();
        branch.counters.add_marshal(raw_len, depth);

        // An oversized raw envelope cannot fit whatever it compresses to,
        // so the compressor only runs on candidates.
        if !self.limits.raw_fits(raw_len) {
            return Ok(Encoded::TooBig { raw_len, compressed_len: None });
        }

        let mut compressed_len = None;
        let encoded = if compress {
            branch.counters.add_compress();
            let compressed = branch
                .stages
                .measure(Stage::Compress, || self.compressor.compress(&raw))?;
            compressed_len = Some(compressed.len());
            compressed
        } else {
            raw
        };

        if !self.limits.fits(raw_len, compressed_len) {
            return Ok(Encoded::TooBig { raw_len, compressed_len });
        }

        branch.counters.add_payload(chunk.len(), raw_len, encoded.len());
        trace!(
            category = marshaler.category(),
            offset = chunk.offset(),
            items = chunk.len(),
            raw_len,
            encoded_len = encoded.len(),
            "payload fits"
        );
        Ok(Encoded::Fits(Bytes::from(encoded)))
    }

    /// Runs the left half on a scoped worker and the right half inline.
    /// Results are joined in position order; on failure the left error wins,
    /// as it would sequentially.
    fn split_forked<M: Marshaler>(
        &self,
        left: Chunk<'_, M::Item>,
        right: Chunk<'_, M::Item>,
        compress: bool,
        marshaler: &M,
        depth: u32,
        branch: &mut Branch,
    ) -> Result<Payloads, SplitError> {
        let ((left_result, left_branch), (right_result, right_branch)) =
            crossbeam::thread::scope(|scope| {
                let handle = scope.spawn(|_| {
                    let mut worker = Branch::default();
                    let result = self.split_chunk(left, compress, marshaler, depth + 1, &mut worker);
                    (result, worker)
                });

                let mut inline = Branch::default();
                let right_result = self.split_chunk(right, compress, marshaler, depth + 1, &mut inline);

                let left_out = match handle.join() {
                    Ok(out) => out,
                    Err(payload) => panic::resume_unwind(payload),
                };
                (left_out, (right_result, inline))
            })
            .unwrap_or_else(|payload| panic::resume_unwind(payload));

        branch.merge(left_branch);
        branch.merge(right_branch);

        let mut payloads = left_result?;
        payloads.extend(right_result?);
        Ok(payloads)
    }
}
