//! Technique parameter records.
//!
//! `BL_LoadTechnique` takes a [`TEccParams_t`]: a length plus a borrowed
//! pointer to an array of [`TEccParam_t`]. [`EccParams`] owns that array and
//! hands out the raw record only by reference, either inside
//! [`EccParams::with_raw`] or through a [`RawEccParams`] borrowing the owner,
//! so the array cannot be dropped while the raw record is in use.
//!
//! The raw record cannot leave the scope of its owner:
//!
//! ```compile_fail
//! use daq_driver_eclib::{EccParam, EccParams};
//!
//! # fn example() -> daq_driver_eclib::Result<()> {
//! let raw = {
//!     let mut params = EccParams::new().with(EccParam::int32("N_Cycles", 3, 0)?)?;
//!     params.as_raw()
//! };
//! let _ = raw.get().len;
//! # Ok(())
//! # }
//! ```

use std::marker::PhantomData;

use eclib_sys::{TEccParam_t, TEccParams_t, PARAM_LABEL_LEN};
use serde::Serialize;
use tracing::warn;

use crate::error::{EcLibError, Result};
use crate::types::ParamType;

/// Longest label that still leaves room for the terminating NUL.
pub const MAX_LABEL_LEN: usize = PARAM_LABEL_LEN - 1;

/// Typed value of a technique parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ParamValue {
    /// 32-bit integer
    Int32(i32),
    /// Boolean, stored as 0 or 1
    Boolean(bool),
    /// Single-precision float, stored as its bit pattern
    Single(f32),
}

impl ParamValue {
    /// Storage type of this value.
    pub fn param_type(self) -> ParamType {
        match self {
            Self::Int32(_) => ParamType::Int32,
            Self::Boolean(_) => ParamType::Boolean,
            Self::Single(_) => ParamType::Single,
        }
    }

    /// Value as stored in `ParamVal`.
    pub fn to_raw(self) -> i32 {
        match self {
            Self::Int32(v) => v,
            Self::Boolean(v) => i32::from(v),
            Self::Single(v) => v.to_bits() as i32,
        }
    }

    /// Decode a `ParamVal` according to its type.
    pub fn from_raw(param_type: ParamType, raw: i32) -> Self {
        match param_type {
            ParamType::Int32 => Self::Int32(raw),
            ParamType::Boolean => Self::Boolean(raw != 0),
            ParamType::Single => Self::Single(f32::from_bits(raw as u32)),
        }
    }
}

/// One elementary technique parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EccParam {
    /// Vendor parameter label, at most 63 ASCII bytes
    pub label: String,
    /// Typed value
    pub value: ParamValue,
    /// 0-based step index for multi-step parameters
    pub index: i32,
}

impl EccParam {
    /// Create a parameter, validating the label.
    pub fn new(label: impl Into<String>, value: ParamValue, index: i32) -> Result<Self> {
        let label = label.into();
        validate_label(&label)?;
        Ok(Self {
            label,
            value,
            index,
        })
    }

    /// Integer parameter.
    pub fn int32(label: impl Into<String>, value: i32, index: i32) -> Result<Self> {
        Self::new(label, ParamValue::Int32(value), index)
    }

    /// Boolean parameter.
    pub fn boolean(label: impl Into<String>, value: bool, index: i32) -> Result<Self> {
        Self::new(label, ParamValue::Boolean(value), index)
    }

    /// Single-precision parameter.
    pub fn single(label: impl Into<String>, value: f32, index: i32) -> Result<Self> {
        Self::new(label, ParamValue::Single(value), index)
    }

    /// Encode into the raw record.
    pub fn to_raw(&self) -> Result<TEccParam_t> {
        validate_label(&self.label)?;
        let mut raw = TEccParam_t {
            ParamType: self.value.param_type().to_raw(),
            ParamVal: self.value.to_raw(),
            ParamIndex: self.index,
            ..Default::default()
        };
        raw.ParamStr[..self.label.len()].copy_from_slice(self.label.as_bytes());
        Ok(raw)
    }

    /// Decode from the raw record.
    ///
    /// The label stops at the first NUL; a label filling all 64 bytes is
    /// accepted as-is.
    pub fn from_raw(raw: &TEccParam_t) -> Result<Self> {
        let bytes = raw.ParamStr;
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        let label = String::from_utf8_lossy(&bytes[..end]).into_owned();
        let param_type = ParamType::try_from(raw.ParamType)?;
        Ok(Self {
            label,
            value: ParamValue::from_raw(param_type, raw.ParamVal),
            index: raw.ParamIndex,
        })
    }
}

fn validate_label(label: &str) -> Result<()> {
    if !label.is_ascii() || label.bytes().any(|b| b == 0) {
        warn!(label, "rejected technique parameter label");
        return Err(EcLibError::InvalidLabel {
            label: label.to_string(),
        });
    }
    if label.len() > MAX_LABEL_LEN {
        warn!(label, len = label.len(), "technique parameter label too long");
        return Err(EcLibError::LabelTooLong {
            label: label.to_string(),
            len: label.len(),
            max: MAX_LABEL_LEN,
        });
    }
    Ok(())
}

/// Owned array of raw technique parameters.
#[derive(Debug, Clone, Default)]
pub struct EccParams {
    params: Vec<TEccParam_t>,
}

impl EccParams {
    /// Create an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter.
    pub fn push(&mut self, param: &EccParam) -> Result<()> {
        if self.params.len() >= i32::MAX as usize {
            return Err(EcLibError::TooManyParams {
                count: self.params.len() + 1,
            });
        }
        self.params.push(param.to_raw()?);
        Ok(())
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, param: EccParam) -> Result<Self> {
        self.push(&param)?;
        Ok(self)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// The raw records.
    pub fn as_slice(&self) -> &[TEccParam_t] {
        &self.params
    }

    /// Decode every record back into an [`EccParam`].
    pub fn to_params(&self) -> Result<Vec<EccParam>> {
        self.params.iter().map(EccParam::from_raw).collect()
    }

    /// Run `f` with the raw record pointing at this list.
    pub fn with_raw<R>(&mut self, f: impl FnOnce(&mut TEccParams_t) -> R) -> R {
        let mut raw = self.as_raw();
        f(&mut raw.raw)
    }

    /// Raw record borrowing this list.
    pub fn as_raw(&mut self) -> RawEccParams<'_> {
        // Length was bounded by `push`.
        let len = self.params.len() as i32;
        let ptr = if self.params.is_empty() {
            std::ptr::null_mut()
        } else {
            self.params.as_mut_ptr()
        };
        RawEccParams {
            raw: TEccParams_t { len, pParams: ptr },
            _owner: PhantomData,
        }
    }
}

impl TryFrom<&[EccParam]> for EccParams {
    type Error = EcLibError;

    fn try_from(params: &[EccParam]) -> Result<Self> {
        let mut out = Self::new();
        for param in params {
            out.push(param)?;
        }
        Ok(out)
    }
}

/// A [`TEccParams_t`] whose pointer borrows an [`EccParams`].
#[derive(Debug)]
pub struct RawEccParams<'a> {
    raw: TEccParams_t,
    _owner: PhantomData<&'a mut EccParams>,
}

impl RawEccParams<'_> {
    /// The record, valid while the owning [`EccParams`] stays borrowed.
    pub fn get(&self) -> &TEccParams_t {
        &self.raw
    }

    /// Pointer to the record, for calls taking it by address.
    pub fn as_mut_ptr(&mut self) -> *mut TEccParams_t {
        &mut self.raw
    }
}
