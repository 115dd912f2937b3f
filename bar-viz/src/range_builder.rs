use alloc::{vec, vec::Vec};
use core::ops::RangeInclusive;

#[allow(unused_imports)]
use micromath::F32Ext;

use crate::error::{InvalidArgument, Result};

/// Computes the log-scaled bar boundaries for a spectrum of `length` bins.
///
/// The analyser hands out bins on a linear frequency axis, while pitch is
/// perceived on a logarithmic one (A1 = 55 Hz, A2 = 110 Hz, A3 = 220 Hz...).
/// The range `0..log2(length)` is split evenly into `bar_count` steps and
/// each step is raised back to a power of two, so for 256 bins and 8 bars the
/// edges fall on 1, 2, 4, ... 256. One is subtracted to turn those into
/// indices.
///
/// Returns `bar_count + 1` non-decreasing indices. Bar `i` covers
/// `boundary[i]..=boundary[i + 1]`. Low bars may share an edge when the step
/// is small; their ranges then hold a single bin.
///
/// With `std` the edges are computed in `f64`. Without it the float math
/// runs on `micromath` `f32` approximations, so interior edges can land one
/// bin off.
pub fn build_ranges(length: usize, bar_count: usize) -> Result<Vec<usize>> {
    if length == 0 {
        return Err(InvalidArgument::ZeroLength.into());
    }
    if bar_count == 0 {
        return Err(InvalidArgument::ZeroBarCount.into());
    }

    let last_index = length - 1;
    let mut boundaries = vec![0usize; bar_count + 1];

    let mut previous = 0usize;
    for (i, boundary) in boundaries.iter_mut().enumerate() {
        let edge = log_edge(length, bar_count, i);
        let index = edge.saturating_sub(1).min(last_index).max(previous);
        *boundary = index;
        previous = index;
    }
    // floor(2^log2(n)) can come out as n - 1 when n is not a power of two
    boundaries[bar_count] = last_index;

    Ok(boundaries)
}

/// `floor(2^(i * log2(length) / bar_count))`, in double precision.
#[cfg(feature = "std")]
fn log_edge(length: usize, bar_count: usize, i: usize) -> usize {
    let base2_interval = (length as f64).log2() / bar_count as f64;
    2.0f64.powf(i as f64 * base2_interval).floor() as usize
}

#[cfg(not(feature = "std"))]
fn log_edge(length: usize, bar_count: usize, i: usize) -> usize {
    let base2_interval = (length as f32).log2() / bar_count as f32;
    2.0f32.powf(i as f32 * base2_interval).floor() as usize
}

/// Boundary table for one `(sample_count, bar_count)` pair.
///
/// Build it once at setup and again only when either count changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryTable {
    sample_count: usize,
    boundaries: Vec<usize>,
}

impl BoundaryTable {
    pub fn new(sample_count: usize, bar_count: usize) -> Result<Self> {
        let boundaries = build_ranges(sample_count, bar_count)?;
        Ok(Self {
            sample_count,
            boundaries,
        })
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    pub fn bar_count(&self) -> usize {
        self.boundaries.len() - 1
    }

    pub fn boundaries(&self) -> &[usize] {
        &self.boundaries
    }

    /// Inclusive bin range read by bar `index`.
    pub fn bar_range(&self, index: usize) -> Result<RangeInclusive<usize>> {
        if index >= self.bar_count() {
            return Err(InvalidArgument::BarOutOfBounds {
                index,
                bar_count: self.bar_count(),
            }
            .into());
        }
        Ok(self.boundaries[index]..=self.boundaries[index + 1])
    }

    pub fn ranges(&self) -> impl Iterator<Item = RangeInclusive<usize>> + '_ {
        self.boundaries.windows(2).map(|pair| pair[0]..=pair[1])
    }

    /// Whether this table was built for the given counts.
    pub fn matches(&self, sample_count: usize, bar_count: usize) -> bool {
        self.sample_count == sample_count && self.bar_count() == bar_count
    }
}
