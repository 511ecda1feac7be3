//! Safe Rust views of Bio-Logic ECLib records.
//!
//! This crate wraps the raw declarations from `eclib-sys` with typed enums,
//! error handling and owned buffers, so application code can prepare and
//! read the records exchanged with the vendor's ECLib library without
//! touching packed fields or raw pointers directly.
//!
//! It does not call the vendor library: connection, firmware loading and
//! acquisition stay in the application that links against ECLib.
//!
//! # Architecture
//!
//! ## Codes
//! - [`ErrorCode`] / [`ErrorCategory`] / [`check`] - vendor return codes
//! - [`DeviceType`], [`ChannelState`], [`TechniqueId`], ... - typed enums
//!
//! ## Descriptors and snapshots
//! - [`DeviceInfo`] / [`ChannelInfo`] - instrument and channel descriptors
//! - [`CurrentValues`] / [`DataInfo`] / [`DataBuffer`] - polling results
//!
//! ## Parameters and configuration
//! - [`EccParam`] / [`EccParams`] - technique parameter arrays
//! - [`TechniqueInfo`] - technique information records
//! - [`HardwareConfig`] / [`ExperimentInfo`] - records exchanged by value
//! - [`TechniqueConfig`] - TOML parameter files
//!
//! # Examples
//!
//! ## Building a parameter array
//!
//! ```
//! use daq_driver_eclib::{EccParam, EccParams};
//!
//! # fn example() -> daq_driver_eclib::Result<()> {
//! let mut params = EccParams::new()
//!     .with(EccParam::single("Rest_time_T", 10.0, 0)?)?
//!     .with(EccParam::single("Record_every_dT", 0.5, 0)?)?;
//!
//! // The raw record only lives inside the closure, e.g. around BL_LoadTechnique.
//! let len = params.with_raw(|raw| raw.len);
//! assert_eq!(len, 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Checking a return code
//!
//! ```
//! use daq_driver_eclib::{check, ErrorCategory};
//!
//! let err = check(eclib_sys::ERR_COMM_COMMFAILED).unwrap_err();
//! assert_eq!(err.category(), Some(ErrorCategory::Communication));
//! ```

mod macros;

pub mod config;
pub mod device;
pub mod error;
pub mod experiment;
pub mod hardware;
pub mod params;
pub mod technique;
pub mod types;
pub mod values;

pub use config::{ParamEntry, ParamLiteral, TechniqueConfig};
pub use device::{ChannelInfo, Code, DeviceInfo};
pub use error::{check, EcLibError, ErrorCategory, ErrorCode, Result};
pub use experiment::ExperimentInfo;
pub use hardware::HardwareConfig;
pub use params::{EccParam, EccParams, ParamValue, RawEccParams, MAX_LABEL_LEN};
pub use technique::TechniqueInfo;
pub use types::{
    AmplifierType, Bandwidth, ChannelState, DeviceType, ElectrodeConnection, FirmwareCode,
    GroundMode, IntensityRange, ParamType, TechniqueId, VoltageRange,
};
pub use values::{CurrentValues, DataBuffer, DataInfo};
