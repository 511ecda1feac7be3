//! Measurement snapshots returned on each polling call.
//!
//! The raw records are caller-allocated and overwritten by every call; the
//! types here copy what they need so the snapshot survives the next poll.

use eclib_sys::{TCurrentValues_t, TDataBuffer_t, TDataInfos_t, DATA_BUFFER_WORDS};
use serde::Serialize;
use tracing::debug;

use crate::device::{decode, Code};
use crate::error::{EcLibError, ErrorCode, Result};
use crate::types::{ChannelState, IntensityRange, TechniqueId};

/// Current values of a channel.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentValues {
    /// Run state
    pub state: Code<ChannelState>,
    /// Memory filled in bytes
    pub mem_filled: i32,
    /// Time base (s)
    pub time_base: f32,
    /// Working electrode potential (V)
    pub ewe: f32,
    /// Working electrode potential range, min then max (V)
    pub ewe_range: (f32, f32),
    /// Counter electrode potential (V)
    pub ece: f32,
    /// Counter electrode potential range, min then max (V)
    pub ece_range: (f32, f32),
    /// Potential overflow
    pub e_overflow: bool,
    /// Current (A)
    pub i: f32,
    /// Current range
    pub i_range: Code<IntensityRange>,
    /// Current overflow
    pub i_overflow: bool,
    /// Elapsed time (s)
    pub elapsed_time: f32,
    /// Frequency (Hz)
    pub freq: f32,
    /// R compensation (Ohm)
    pub r_comp: f32,
    /// Analog input saturation
    pub saturation: bool,
    /// Raw hardware option error (SP-300 series only), 0 when none
    pub option_error: i32,
    /// Index of the option reporting `option_error`
    pub option_position: i32,
}

impl CurrentValues {
    /// Build from the raw record.
    pub fn from_raw(raw: &TCurrentValues_t) -> Self {
        Self {
            state: decode("State", raw.State, ChannelState::from_raw),
            mem_filled: raw.MemFilled,
            time_base: raw.TimeBase,
            ewe: raw.Ewe,
            ewe_range: (raw.EweRangeMin, raw.EweRangeMax),
            ece: raw.Ece,
            ece_range: (raw.EceRangeMin, raw.EceRangeMax),
            e_overflow: raw.Eoverflow != 0,
            i: raw.I,
            i_range: decode("IRange", raw.IRange, IntensityRange::from_raw),
            i_overflow: raw.Ioverflow != 0,
            elapsed_time: raw.ElapsedTime,
            freq: raw.Freq,
            r_comp: raw.Rcomp,
            saturation: raw.Saturation != 0,
            option_error: raw.OptErr,
            option_position: raw.OptPos,
        }
    }

    /// Hardware option error as a typed error, `Ok` when none is reported.
    pub fn option_status(&self) -> Result<()> {
        crate::error::check(self.option_error)
    }

    /// Typed hardware option error code, if one is reported and documented.
    pub fn option_error_code(&self) -> Option<ErrorCode> {
        ErrorCode::from_raw(self.option_error)
    }

    /// Check if the channel is running.
    pub fn is_running(&self) -> bool {
        self.state == Code::Known(ChannelState::Run)
    }

    /// Check if any overflow or saturation is flagged.
    pub fn is_overloaded(&self) -> bool {
        self.e_overflow || self.i_overflow || self.saturation
    }
}

impl From<&TCurrentValues_t> for CurrentValues {
    fn from(raw: &TCurrentValues_t) -> Self {
        Self::from_raw(raw)
    }
}

/// Metadata of one data buffer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DataInfo {
    /// Number of interrupts skipped by the instrument
    pub irq_skipped: i32,
    /// Number of points in the buffer
    pub n_rows: i32,
    /// Number of words per point
    pub n_cols: i32,
    /// 0-based index of the technique in a linked sequence
    pub technique_index: i32,
    /// Technique that produced the data
    pub technique: Code<TechniqueId>,
    /// 0-based process index; selects the data format together with `technique`
    pub process_index: i32,
    /// Loop counter
    pub loop_number: i32,
    /// Start time (s)
    pub start_time: f64,
    /// Active MP-MEA pad (SP-300 series only)
    pub mux_pad: i32,
}

impl DataInfo {
    /// Build from the raw record.
    pub fn from_raw(raw: &TDataInfos_t) -> Self {
        Self {
            irq_skipped: raw.IRQskipped,
            n_rows: raw.NbRows,
            n_cols: raw.NbCols,
            technique_index: raw.TechniqueIndex,
            technique: decode("TechniqueID", raw.TechniqueID, TechniqueId::from_raw),
            process_index: raw.ProcessIndex,
            loop_number: raw.r#loop,
            start_time: raw.StartTime,
            mux_pad: raw.MuxPad,
        }
    }

    /// Number of words the described data occupies.
    pub fn n_words(&self) -> Result<usize> {
        let shape_error = || EcLibError::BufferShape {
            rows: self.n_rows,
            cols: self.n_cols,
            capacity: DATA_BUFFER_WORDS,
        };
        let rows = usize::try_from(self.n_rows).map_err(|_| shape_error())?;
        let cols = usize::try_from(self.n_cols).map_err(|_| shape_error())?;
        let words = rows.checked_mul(cols).ok_or_else(shape_error)?;
        if words > DATA_BUFFER_WORDS {
            return Err(shape_error());
        }
        Ok(words)
    }
}

impl From<&TDataInfos_t> for DataInfo {
    fn from(raw: &TDataInfos_t) -> Self {
        Self::from_raw(raw)
    }
}

/// Caller-owned data buffer for `BL_GetData`.
///
/// The 4000-byte record lives on the heap. Words are exposed as-is; their
/// meaning depends on the technique and process that produced them.
#[derive(Debug, Clone)]
pub struct DataBuffer {
    raw: Box<TDataBuffer_t>,
}

impl Default for DataBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl DataBuffer {
    /// Allocate a zeroed buffer.
    pub fn new() -> Self {
        Self {
            raw: Box::default(),
        }
    }

    /// Pointer to hand to the vendor library. Valid while `self` is alive
    /// and not moved out of its box.
    pub fn as_mut_ptr(&mut self) -> *mut TDataBuffer_t {
        &mut *self.raw
    }

    /// The raw record.
    pub fn as_raw(&self) -> &TDataBuffer_t {
        &self.raw
    }

    /// All words in the buffer.
    pub fn words(&self) -> &[u32] {
        &self.raw.data
    }

    /// Mutable access to the words.
    pub fn words_mut(&mut self) -> &mut [u32] {
        &mut self.raw.data
    }

    /// Split the words described by `info` into `n_rows` rows of `n_cols` words.
    ///
    /// A shape with zero columns yields `n_rows` empty rows.
    pub fn rows(&self, info: &DataInfo) -> Result<impl Iterator<Item = &[u32]>> {
        let n_words = info.n_words()?;
        // Both are non-negative once `n_words` succeeded.
        let (rows, cols) = (info.n_rows as usize, info.n_cols as usize);
        debug!(
            rows = info.n_rows,
            cols = info.n_cols,
            n_words,
            "slicing data buffer"
        );
        let words = &self.words()[..n_words];
        Ok((0..rows).map(move |row| &words[row * cols..(row + 1) * cols]))
    }

    /// Reset all words to zero.
    pub fn clear(&mut self) {
        self.raw.data.fill(0);
    }
}
