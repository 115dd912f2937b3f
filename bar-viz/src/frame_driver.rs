use alloc::{vec, vec::Vec};

#[cfg(feature = "logging")]
use defmt::info;
#[cfg(feature = "logging")]
use defmt_rtt as _;

use crate::band_reducer::BandReducer;
use crate::config::{VizConfig, LOG_INTERVAL_FRAMES};
use crate::error::{InvalidArgument, Result};
use crate::loudness_curve::{LoudnessCurve, PowerOfTen};
use crate::range_builder::BoundaryTable;

/// Something that can hand out one spectrum per display frame.
///
/// Implementors own the audio context (analyser, microphone, test signal...)
/// so the driver never reaches for global state.
pub trait SpectrumSource {
    type Sample: Copy + Default + Into<f32>;

    /// Number of bins written by [`refresh`](Self::refresh).
    fn sample_count(&self) -> usize;

    /// Overwrites `buffer` (exactly `sample_count()` long) with the latest spectrum.
    fn refresh(&mut self, buffer: &mut [Self::Sample]);
}

/// Refresh-then-reduce scheduler, called once per display frame.
pub struct FrameDriver<S: SpectrumSource, C = PowerOfTen> {
    source: S,
    samples: Vec<S::Sample>,
    table: BoundaryTable,
    reducer: BandReducer<C>,
    bars: Vec<f32>,
    frame_count: u32,
    log_counter: u32,
}

impl<S: SpectrumSource> FrameDriver<S, PowerOfTen> {
    pub fn new(source: S, config: VizConfig) -> Result<Self> {
        Self::with_curve(source, config, PowerOfTen)
    }
}

impl<S: SpectrumSource, C: LoudnessCurve> FrameDriver<S, C> {
    /// The boundary table rejects a zero bar count and the reducer a bad
    /// sample scale, so `config` is not validated separately.
    pub fn with_curve(source: S, config: VizConfig, curve: C) -> Result<Self> {
        let sample_count = source.sample_count();
        let table = BoundaryTable::new(sample_count, config.bar_count)?;
        let reducer = BandReducer::new(config.sample_scale, curve)?;

        #[cfg(feature = "logging")]
        info!(
            "FrameDriver::new called with sample_count: {}, bar_count: {}",
            sample_count, config.bar_count
        );

        Ok(Self {
            source,
            samples: vec![S::Sample::default(); sample_count],
            table,
            reducer,
            bars: vec![0.0; config.bar_count],
            frame_count: 0,
            log_counter: 0,
        })
    }

    /// Runs one frame: refresh the samples from the source, then reduce them
    /// into one value per bar.
    pub fn tick(&mut self) -> Result<&[f32]> {
        let sample_count = self.source.sample_count();
        if sample_count != self.table.sample_count() {
            self.rebuild(sample_count, self.table.bar_count())?;
        }

        self.source.refresh(&mut self.samples);
        self.reducer
            .reduce_frame(&self.samples, &self.table, &mut self.bars)?;

        self.frame_count = self.frame_count.wrapping_add(1);
        self.log_counter += 1;
        if self.log_counter >= LOG_INTERVAL_FRAMES {
            #[cfg(feature = "logging")]
            info!("Frame {}: bars {}", self.frame_count, self.bars.as_slice());
            self.log_counter = 0;
        }

        Ok(&self.bars)
    }

    /// Changes the number of bars; the next tick uses the new layout.
    pub fn set_bar_count(&mut self, bar_count: usize) -> Result<()> {
        if bar_count == 0 {
            return Err(InvalidArgument::ZeroBarCount.into());
        }
        if bar_count == self.table.bar_count() {
            return Ok(());
        }
        self.rebuild(self.table.sample_count(), bar_count)
    }

    fn rebuild(&mut self, sample_count: usize, bar_count: usize) -> Result<()> {
        let table = BoundaryTable::new(sample_count, bar_count)?;

        #[cfg(feature = "logging")]
        info!(
            "Rebuilding boundary table: sample_count {} -> {}, bar_count {} -> {}",
            self.table.sample_count(),
            sample_count,
            self.table.bar_count(),
            bar_count
        );

        self.samples.resize(sample_count, S::Sample::default());
        self.bars.clear();
        self.bars.resize(bar_count, 0.0);
        self.table = table;
        Ok(())
    }

    /// Bar values from the latest tick (all zero before the first one).
    pub fn bars(&self) -> &[f32] {
        &self.bars
    }

    pub fn bar_count(&self) -> usize {
        self.table.bar_count()
    }

    pub fn boundaries(&self) -> &[usize] {
        self.table.boundaries()
    }

    pub fn table(&self) -> &BoundaryTable {
        &self.table
    }

    /// Samples read on the latest tick.
    pub fn samples(&self) -> &[S::Sample] {
        &self.samples
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }
}
