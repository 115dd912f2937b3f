use crate::config::BYTE_SAMPLE_SCALE;
use crate::error::{InvalidArgument, Result};
use crate::loudness_curve::{adjust_amplitude, LoudnessCurve, PowerOfTen};
use crate::range_builder::BoundaryTable;

/// Average of `samples[from..=to]`.
///
/// `from == to` is a single-sample range and returns that sample.
pub fn reduce_band<T>(samples: &[T], from: usize, to: usize) -> Result<f32>
where
    T: Copy + Into<f32>,
{
    if from > to {
        return Err(InvalidArgument::InvertedRange { from, to }.into());
    }
    if to >= samples.len() {
        return Err(InvalidArgument::RangeOutOfBounds {
            to,
            len: samples.len(),
        }
        .into());
    }

    let sum: f32 = samples[from..=to].iter().map(|&s| s.into()).sum();
    Ok(sum / ((to - from) + 1) as f32)
}

/// Loudness of bar `bar_index` for 8-bit samples, using the default curve.
pub fn compute_bar_value<T>(samples: &[T], boundaries: &[usize], bar_index: usize) -> Result<f32>
where
    T: Copy + Into<f32>,
{
    if bar_index >= boundaries.len().saturating_sub(1) {
        return Err(InvalidArgument::BarOutOfBounds {
            index: bar_index,
            bar_count: boundaries.len().saturating_sub(1),
        }
        .into());
    }
    let start = boundaries[bar_index];
    let end = boundaries[bar_index + 1];
    let average = reduce_band(samples, start, end)?;
    Ok(adjust_amplitude(average / BYTE_SAMPLE_SCALE))
}

/// Turns one frame of samples into one loudness value per bar.
pub struct BandReducer<C = PowerOfTen> {
    sample_scale: f32,
    curve: C,
}

impl BandReducer<PowerOfTen> {
    /// Reducer for 8-bit analyser bins with the default loudness curve.
    pub fn for_bytes() -> Self {
        Self {
            sample_scale: BYTE_SAMPLE_SCALE,
            curve: PowerOfTen,
        }
    }
}

impl Default for BandReducer<PowerOfTen> {
    fn default() -> Self {
        Self::for_bytes()
    }
}

/// Rejects a divisor that is zero, negative or NaN.
pub(crate) fn check_sample_scale(sample_scale: f32) -> Result<()> {
    // `!(x > 0)` also rejects NaN
    if !(sample_scale > 0.0) {
        return Err(InvalidArgument::NonPositiveScale.into());
    }
    Ok(())
}

impl<C: LoudnessCurve> BandReducer<C> {
    pub fn new(sample_scale: f32, curve: C) -> Result<Self> {
        check_sample_scale(sample_scale)?;
        Ok(Self {
            sample_scale,
            curve,
        })
    }

    pub fn sample_scale(&self) -> f32 {
        self.sample_scale
    }

    pub fn curve(&self) -> &C {
        &self.curve
    }

    pub fn compute_bar_value<T>(
        &self,
        samples: &[T],
        table: &BoundaryTable,
        bar_index: usize,
    ) -> Result<f32>
    where
        T: Copy + Into<f32>,
    {
        let range = table.bar_range(bar_index)?;
        let average = reduce_band(samples, *range.start(), *range.end())?;
        Ok(self.curve.adjust(average / self.sample_scale))
    }

    /// Fills `out` with one value per bar of `table`.
    pub fn reduce_frame<T>(&self, samples: &[T], table: &BoundaryTable, out: &mut [f32]) -> Result<()>
    where
        T: Copy + Into<f32>,
    {
        if out.len() != table.bar_count() {
            return Err(InvalidArgument::BarBufferMismatch {
                expected: table.bar_count(),
                actual: out.len(),
            }
            .into());
        }
        for (i, bar) in out.iter_mut().enumerate() {
            *bar = self.compute_bar_value(samples, table, i)?;
        }
        Ok(())
    }
}
