//! Low-level ABI declarations for the Bio-Logic ECLib library.
//!
//! This crate provides raw, layout-exact mirrors of the structures,
//! enumerations and error codes exchanged with ECLib, the vendor's
//! closed-source control library for electrochemistry instruments
//! (VMP3, SP-300 series and related potentiostats).
//!
//! # Layout
//!
//! The vendor compiles its library with `#pragma pack(4)`. Every structure
//! here is therefore `#[repr(C, packed(4))]`: fields keep C order, but no
//! field is aligned to more than 4 bytes. This matters for
//! [`TDataInfos_t::StartTime`] (a `DOUBLE` at offset 28) and for every
//! pointer field on 64-bit targets.
//!
//! Sizes are checked at compile time; field offsets are checked by the
//! crate's tests.
//!
//! # Enumerations
//!
//! C enums are exposed the way bindgen's `Consts` style exposes them: a
//! `c_int` type alias per enum and one constant per value, with the vendor
//! names unchanged. For typed enums, use the `daq-driver-eclib` crate.
//!
//! # Safety
//!
//! Structures with pointer fields ([`TEccParams_t`], [`TTechniqueInfos`])
//! assert no ownership. Keeping the pointed-to arrays alive across a vendor
//! call is the caller's responsibility.
//!
//! # Example (unsafe)
//!
//! ```
//! use eclib_sys::*;
//!
//! let mut params = [TEccParam_t::default(); 2];
//! let raw = TEccParams_t {
//!     len: params.len() as INT32,
//!     pParams: params.as_mut_ptr(),
//! };
//! let len = raw.len;
//! assert_eq!(len, 2);
//! ```

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(missing_docs)]
#![allow(clippy::all)]

use std::mem::size_of;
use std::os::raw::c_int;
use std::ptr;

pub type INT32 = i32;
pub type UINT32 = u32;
pub type FLOAT = f32;
pub type DOUBLE = f64;
pub type BYTE = u8;

/// Number of 32-bit words in [`TDataBuffer_t`].
pub const DATA_BUFFER_WORDS: usize = 1000;

/// Length of [`TEccParam_t::ParamStr`], terminating NUL included.
pub const PARAM_LABEL_LEN: usize = 64;

/// Length of [`TExperimentInfos_t::Filename`], terminating NUL included.
pub const FILENAME_LEN: usize = 256;

// =============================================================================
// Structures
// =============================================================================

/// Information about the device `BL_Connect` connected to.
#[repr(C, packed(4))]
#[derive(Debug, Copy, Clone, Default)]
pub struct TDeviceInfos_t {
    /// Device code, see `TDeviceType_e`
    pub DeviceCode: INT32,
    /// RAM size in MB
    pub RAMSize: INT32,
    pub CPU: INT32,
    /// Number of channels connected
    pub NumberOfChannels: INT32,
    /// Number of slots available
    pub NumberOfSlots: INT32,
    /// Communication firmware version
    pub FirmwareVersion: INT32,
    pub FirmwareDate_yyyy: INT32,
    pub FirmwareDate_mm: INT32,
    pub FirmwareDate_dd: INT32,
    /// Allow hyper-terminal prints (true/false)
    pub HTdisplayOn: INT32,
    /// Number of connected PCs
    pub NbOfConnectedPC: INT32,
}

/// Information about one channel, as returned by `BL_GetChannelInfos`.
#[repr(C, packed(4))]
#[derive(Debug, Copy, Clone, Default)]
pub struct TChannelInfos_t {
    /// Channel (0..15)
    pub Channel: INT32,
    pub BoardVersion: INT32,
    pub BoardSerialNumber: INT32,
    /// Firmware loaded, see `TFirmwareCode_e`
    pub FirmwareCode: INT32,
    pub FirmwareVersion: INT32,
    pub XilinxVersion: INT32,
    /// Amplifier code, see `TAmplifierType_e`
    pub AmpCode: INT32,
    pub NbAmps: INT32,
    /// Low current board present (true/false)
    pub Lcboard: INT32,
    /// Impedance measurement capability (true/false)
    pub Zboard: INT32,
    pub RESERVED: INT32,
    pub RESERVED2: INT32,
    /// Memory size in bytes
    pub MemSize: INT32,
    /// Memory filled in bytes
    pub MemFilled: INT32,
    /// Channel state, see `TChannelState_e`
    pub State: INT32,
    /// Maximum I range allowed, see `TIntensityRange_e`
    pub MaxIRange: INT32,
    /// Minimum I range allowed, see `TIntensityRange_e`
    pub MinIRange: INT32,
    /// Maximum bandwidth allowed, see `TBandwidth_e`
    pub MaxBandwidth: INT32,
    /// Number of techniques loaded
    pub NbOfTechniques: INT32,
}

/// Channel current values measurement.
#[repr(C, packed(4))]
#[derive(Debug, Copy, Clone, Default)]
pub struct TCurrentValues_t {
    /// Channel state, see `TChannelState_e`
    pub State: INT32,
    /// Memory filled in bytes
    pub MemFilled: INT32,
    /// Time base (s)
    pub TimeBase: FLOAT,
    /// Working electrode potential (V)
    pub Ewe: FLOAT,
    pub EweRangeMin: FLOAT,
    pub EweRangeMax: FLOAT,
    /// Counter electrode potential (V)
    pub Ece: FLOAT,
    pub EceRangeMin: FLOAT,
    pub EceRangeMax: FLOAT,
    pub Eoverflow: INT32,
    /// Current value (A)
    pub I: FLOAT,
    /// Current range, see `TIntensityRange_e`
    pub IRange: INT32,
    pub Ioverflow: INT32,
    /// Elapsed time (s)
    pub ElapsedTime: FLOAT,
    /// Frequency (Hz)
    pub Freq: FLOAT,
    /// R compensation (Ohm)
    pub Rcomp: FLOAT,
    /// E and/or I saturation
    pub Saturation: INT32,
    /// Hardware option error code, see `TErrorCodes_e` (SP-300 series only)
    pub OptErr: INT32,
    /// Index of the option generating `OptErr` (SP-300 series only)
    pub OptPos: INT32,
}

/// Metadata about the data received with `BL_GetData`.
#[repr(C, packed(4))]
#[derive(Debug, Copy, Clone, Default)]
pub struct TDataInfos_t {
    pub IRQskipped: INT32,
    /// Number of points saved in the data buffer
    pub NbRows: INT32,
    /// Number of variables defining a point in the data buffer
    pub NbCols: INT32,
    /// 0-based index of the technique that generated the data (linked techniques)
    pub TechniqueIndex: INT32,
    /// Identifier of the technique that generated the data, see `TTechniqueIdentifier_e`
    pub TechniqueID: INT32,
    /// 0-based index of the technique process that generated the data
    pub ProcessIndex: INT32,
    /// Loop number
    pub r#loop: INT32,
    /// Start time (s). Sits at offset 28 because of 4-byte packing.
    pub StartTime: DOUBLE,
    /// Active MP-MEA option pad number (SP-300 series only)
    pub MuxPad: INT32,
}

/// Raw data buffer filled by `BL_GetData`.
#[repr(C, packed(4))]
#[derive(Debug, Copy, Clone)]
pub struct TDataBuffer_t {
    pub data: [UINT32; DATA_BUFFER_WORDS],
}

impl Default for TDataBuffer_t {
    fn default() -> Self {
        Self {
            data: [0; DATA_BUFFER_WORDS],
        }
    }
}

/// Elementary technique parameter, used by `BL_LoadTechnique`.
#[repr(C, packed(4))]
#[derive(Debug, Copy, Clone)]
pub struct TEccParam_t {
    /// NUL-terminated parameter label
    pub ParamStr: [BYTE; PARAM_LABEL_LEN],
    /// Parameter type, see `TParamType_e`
    pub ParamType: INT32,
    /// Parameter value. Singles are stored as their IEEE-754 bit pattern.
    pub ParamVal: INT32,
    /// 0-based index for multi-step parameters, otherwise 0
    pub ParamIndex: INT32,
}

impl Default for TEccParam_t {
    fn default() -> Self {
        Self {
            ParamStr: [0; PARAM_LABEL_LEN],
            ParamType: PARAM_INT32,
            ParamVal: 0,
            ParamIndex: 0,
        }
    }
}

/// Array of technique parameters, used by `BL_LoadTechnique`.
///
/// `pParams` is borrowed: the array must outlive the call it is passed to.
#[repr(C, packed(4))]
#[derive(Debug, Copy, Clone)]
pub struct TEccParams_t {
    /// Length of the array pointed to by `pParams`
    pub len: INT32,
    pub pParams: *mut TEccParam_t,
}

impl Default for TEccParams_t {
    fn default() -> Self {
        Self {
            len: 0,
            pParams: ptr::null_mut(),
        }
    }
}

/// Channel electrode configuration, see `BL_GetHardConf` / `BL_SetHardConf`.
#[repr(C, packed(4))]
#[derive(Debug, Copy, Clone, Default)]
pub struct THardwareConf_t {
    /// Electrode connection, see `TElectrodeConn_e`
    pub Conn: INT32,
    /// Instrument ground, see `TElectrodeMode_e`
    pub Ground: INT32,
}

/// Technique information.
#[repr(C, packed(4))]
#[derive(Debug, Copy, Clone)]
pub struct TTechniqueInfos {
    pub id: INT32,
    pub indx: INT32,
    pub nbParams: INT32,
    pub nbSettings: INT32,
    pub Params: *mut TEccParam_t,
    pub HardSettings: *mut TEccParam_t,
}

impl Default for TTechniqueInfos {
    fn default() -> Self {
        Self {
            id: 0,
            indx: 0,
            nbParams: 0,
            nbSettings: 0,
            Params: ptr::null_mut(),
            HardSettings: ptr::null_mut(),
        }
    }
}

/// Experiment information.
#[repr(C, packed(4))]
#[derive(Debug, Copy, Clone)]
pub struct TExperimentInfos_t {
    pub Group: INT32,
    pub PCidentifier: INT32,
    pub TimeHMS: INT32,
    pub TimeYMD: INT32,
    /// NUL-terminated file name
    pub Filename: [BYTE; FILENAME_LEN],
}

impl Default for TExperimentInfos_t {
    fn default() -> Self {
        Self {
            Group: 0,
            PCidentifier: 0,
            TimeHMS: 0,
            TimeYMD: 0,
            Filename: [0; FILENAME_LEN],
        }
    }
}

// Pointer-free structures have the same size on every target.
const _: () = assert!(size_of::<TDeviceInfos_t>() == 44);
const _: () = assert!(size_of::<TChannelInfos_t>() == 76);
const _: () = assert!(size_of::<TCurrentValues_t>() == 76);
const _: () = assert!(size_of::<TDataInfos_t>() == 40);
const _: () = assert!(size_of::<TDataBuffer_t>() == 4 * DATA_BUFFER_WORDS);
const _: () = assert!(size_of::<TEccParam_t>() == 76);
const _: () = assert!(size_of::<THardwareConf_t>() == 8);
const _: () = assert!(size_of::<TExperimentInfos_t>() == 272);
const _: () = assert!(size_of::<TEccParams_t>() == 4 + size_of::<usize>());
const _: () = assert!(size_of::<TTechniqueInfos>() == 16 + 2 * size_of::<usize>());

// =============================================================================
// Device types
// =============================================================================

pub type TDeviceType_e = c_int;

pub const KBIO_DEV_VMP: TDeviceType_e = 0;
pub const KBIO_DEV_VMP2: TDeviceType_e = 1;
pub const KBIO_DEV_MPG: TDeviceType_e = 2;
pub const KBIO_DEV_BISTAT: TDeviceType_e = 3;
pub const KBIO_DEV_MCS200: TDeviceType_e = 4;
pub const KBIO_DEV_VMP3: TDeviceType_e = 5;
pub const KBIO_DEV_VSP: TDeviceType_e = 6;
pub const KBIO_DEV_HCP803: TDeviceType_e = 7;
pub const KBIO_DEV_EPP400: TDeviceType_e = 8;
pub const KBIO_DEV_EPP4000: TDeviceType_e = 9;
pub const KBIO_DEV_BISTAT2: TDeviceType_e = 10;
pub const KBIO_DEV_FCT150S: TDeviceType_e = 11;
pub const KBIO_DEV_VMP300: TDeviceType_e = 12;
pub const KBIO_DEV_SP50: TDeviceType_e = 13;
pub const KBIO_DEV_SP150: TDeviceType_e = 14;
pub const KBIO_DEV_FCT50S: TDeviceType_e = 15;
pub const KBIO_DEV_SP300: TDeviceType_e = 16;
pub const KBIO_DEV_CLB500: TDeviceType_e = 17;
pub const KBIO_DEV_HCP1005: TDeviceType_e = 18;
pub const KBIO_DEV_CLB2000: TDeviceType_e = 19;
pub const KBIO_DEV_VSP300: TDeviceType_e = 20;
pub const KBIO_DEV_SP200: TDeviceType_e = 21;
pub const KBIO_DEV_MPG2: TDeviceType_e = 22;
pub const KBIO_DEV_SP100: TDeviceType_e = 23;
pub const KBIO_DEV_MOSLED: TDeviceType_e = 24;
/// Unused code
pub const KBIO_DEV_KINEXXX: TDeviceType_e = 25;
pub const KBIO_DEV_NIKITA: TDeviceType_e = 26;
pub const KBIO_DEV_SP240: TDeviceType_e = 27;
/// Not controlled by kernel2
pub const KBIO_DEV_MPG205: TDeviceType_e = 28;
/// Not controlled by kernel2
pub const KBIO_DEV_MPG210: TDeviceType_e = 29;
/// Not controlled by kernel2
pub const KBIO_DEV_MPG220: TDeviceType_e = 30;
/// Not controlled by kernel2
pub const KBIO_DEV_MPG240: TDeviceType_e = 31;
pub const KBIO_DEV_UNKNOWN: TDeviceType_e = 255;

// =============================================================================
// Firmware codes
// =============================================================================

pub type TFirmwareCode_e = c_int;

pub const KIBIO_FIRM_NONE: TFirmwareCode_e = 0;
/// Firmware for EC-Lab software
pub const KIBIO_FIRM_INTERPR: TFirmwareCode_e = 1;
pub const KIBIO_FIRM_UNKNOWN: TFirmwareCode_e = 4;
/// Firmware for the library
pub const KIBIO_FIRM_KERNEL: TFirmwareCode_e = 5;
pub const KIBIO_FIRM_INVALID: TFirmwareCode_e = 8;
/// Firmware for calibration software
pub const KIBIO_FIRM_ECAL: TFirmwareCode_e = 10;

// =============================================================================
// Amplifier types
// =============================================================================

pub type TAmplifierType_e = c_int;

pub const KIBIO_AMPL_NONE: TAmplifierType_e = 0;
pub const KIBIO_AMPL_2A: TAmplifierType_e = 1;
pub const KIBIO_AMPL_1A: TAmplifierType_e = 2;
pub const KIBIO_AMPL_5A: TAmplifierType_e = 3;
pub const KIBIO_AMPL_10A: TAmplifierType_e = 4;
pub const KIBIO_AMPL_20A: TAmplifierType_e = 5;
pub const KIBIO_AMPL_HEUS: TAmplifierType_e = 6;
pub const KIBIO_AMPL_LC: TAmplifierType_e = 7;
pub const KIBIO_AMPL_80A: TAmplifierType_e = 8;
pub const KIBIO_AMPL_4AI: TAmplifierType_e = 9;
pub const KIBIO_AMPL_PAC: TAmplifierType_e = 10;
pub const KIBIO_AMPL_4AI_VSP: TAmplifierType_e = 11;
pub const KIBIO_AMPL_LC_VSP: TAmplifierType_e = 12;
pub const KIBIO_AMPL_UNDEF: TAmplifierType_e = 13;
pub const KIBIO_AMPL_MUIC: TAmplifierType_e = 14;
pub const KIBIO_AMPL_NONE_GIL: TAmplifierType_e = 15;
pub const KIBIO_AMPL_8AI: TAmplifierType_e = 16;
pub const KIBIO_AMPL_LB500: TAmplifierType_e = 17;
pub const KIBIO_AMPL_100A5V: TAmplifierType_e = 18;
pub const KIBIO_AMPL_LB2000: TAmplifierType_e = 19;
/// SP-300 series
pub const KBIO_AMPL_1A48V: TAmplifierType_e = 20;
/// SP-300 series
pub const KBIO_AMPL_4A10V: TAmplifierType_e = 21;

// =============================================================================
// Ranges and bandwidth
// =============================================================================

pub type TIntensityRange_e = c_int;

/// SP-300 series only
pub const KBIO_IRANGE_100pA: TIntensityRange_e = 0;
pub const KBIO_IRANGE_1nA: TIntensityRange_e = 1;
pub const KBIO_IRANGE_10nA: TIntensityRange_e = 2;
pub const KBIO_IRANGE_100nA: TIntensityRange_e = 3;
pub const KBIO_IRANGE_1uA: TIntensityRange_e = 4;
pub const KBIO_IRANGE_10uA: TIntensityRange_e = 5;
pub const KBIO_IRANGE_100uA: TIntensityRange_e = 6;
pub const KBIO_IRANGE_1mA: TIntensityRange_e = 7;
pub const KBIO_IRANGE_10mA: TIntensityRange_e = 8;
pub const KBIO_IRANGE_100mA: TIntensityRange_e = 9;
pub const KBIO_IRANGE_1A: TIntensityRange_e = 10;
pub const KBIO_IRANGE_BOOSTER: TIntensityRange_e = 11;
pub const KBIO_IRANGE_AUTO: TIntensityRange_e = 12;

pub type TVoltageRange_e = c_int;

pub const KBIO_ERANGE_2_5: TVoltageRange_e = 0;
pub const KBIO_ERANGE_5: TVoltageRange_e = 1;
pub const KBIO_ERANGE_10: TVoltageRange_e = 2;
pub const KBIO_ERANGE_AUTO: TVoltageRange_e = 3;

pub type TBandwidth_e = c_int;

pub const KBIO_BW_1: TBandwidth_e = 1;
pub const KBIO_BW_2: TBandwidth_e = 2;
pub const KBIO_BW_3: TBandwidth_e = 3;
pub const KBIO_BW_4: TBandwidth_e = 4;
pub const KBIO_BW_5: TBandwidth_e = 5;
pub const KBIO_BW_6: TBandwidth_e = 6;
pub const KBIO_BW_7: TBandwidth_e = 7;
/// SP-300 series only
pub const KBIO_BW_8: TBandwidth_e = 8;
/// SP-300 series only
pub const KBIO_BW_9: TBandwidth_e = 9;

// =============================================================================
// Electrode configuration
// =============================================================================

pub type TElectrodeConn_e = c_int;

pub const KBIO_CONN_STD: TElectrodeConn_e = 0;
pub const KBIO_CONN_CETOGRND: TElectrodeConn_e = 1;

pub type TElectrodeMode_e = c_int;

pub const KBIO_MODE_GROUNDED: TElectrodeMode_e = 0;
pub const KBIO_MODE_FLOATING: TElectrodeMode_e = 1;

// =============================================================================
// Technique identifiers
// =============================================================================

pub type TTechniqueIdentifier_e = c_int;

pub const KBIO_TECHID_NONE: TTechniqueIdentifier_e = 0;
/// Open Circuit Voltage (Rest)
pub const KBIO_TECHID_OCV: TTechniqueIdentifier_e = 100;
/// Chrono-amperometry
pub const KBIO_TECHID_CA: TTechniqueIdentifier_e = 101;
/// Chrono-potentiometry
pub const KBIO_TECHID_CP: TTechniqueIdentifier_e = 102;
/// Cyclic Voltammetry
pub const KBIO_TECHID_CV: TTechniqueIdentifier_e = 103;
/// Potentio Electrochemical Impedance Spectroscopy
pub const KBIO_TECHID_PEIS: TTechniqueIdentifier_e = 104;
pub const KBIO_TECHID_POTPULSE: TTechniqueIdentifier_e = 105;
pub const KBIO_TECHID_GALPULSE: TTechniqueIdentifier_e = 106;
/// Galvano Electrochemical Impedance Spectroscopy
pub const KBIO_TECHID_GEIS: TTechniqueIdentifier_e = 107;
pub const KBIO_TECHID_STACKPEIS_SLAVE: TTechniqueIdentifier_e = 108;
pub const KBIO_TECHID_STACKPEIS: TTechniqueIdentifier_e = 109;
/// Constant Power
pub const KBIO_TECHID_CPOWER: TTechniqueIdentifier_e = 110;
/// Constant Load
pub const KBIO_TECHID_CLOAD: TTechniqueIdentifier_e = 111;
pub const KBIO_TECHID_FCT: TTechniqueIdentifier_e = 112;
/// Staircase PEIS
pub const KBIO_TECHID_SPEIS: TTechniqueIdentifier_e = 113;
/// Staircase GEIS
pub const KBIO_TECHID_SGEIS: TTechniqueIdentifier_e = 114;
pub const KBIO_TECHID_STACKPDYN: TTechniqueIdentifier_e = 115;
pub const KBIO_TECHID_STACKPDYN_SLAVE: TTechniqueIdentifier_e = 116;
pub const KBIO_TECHID_STACKGDYN: TTechniqueIdentifier_e = 117;
pub const KBIO_TECHID_STACKGEIS_SLAVE: TTechniqueIdentifier_e = 118;
pub const KBIO_TECHID_STACKGEIS: TTechniqueIdentifier_e = 119;
pub const KBIO_TECHID_STACKGDYN_SLAVE: TTechniqueIdentifier_e = 120;
pub const KBIO_TECHID_CPO: TTechniqueIdentifier_e = 121;
pub const KBIO_TECHID_CGA: TTechniqueIdentifier_e = 122;
pub const KBIO_TECHID_COKINE: TTechniqueIdentifier_e = 123;
/// Potentio dynamic
pub const KBIO_TECHID_PDYN: TTechniqueIdentifier_e = 124;
/// Galvano dynamic
pub const KBIO_TECHID_GDYN: TTechniqueIdentifier_e = 125;
/// Cyclic Voltammetry Advanced
pub const KBIO_TECHID_CVA: TTechniqueIdentifier_e = 126;
/// Differential Pulse Voltammetry
pub const KBIO_TECHID_DPV: TTechniqueIdentifier_e = 127;
/// Square Wave Voltammetry
pub const KBIO_TECHID_SWV: TTechniqueIdentifier_e = 128;
/// Normal Pulse Voltammetry
pub const KBIO_TECHID_NPV: TTechniqueIdentifier_e = 129;
/// Reverse Normal Pulse Voltammetry
pub const KBIO_TECHID_RNPV: TTechniqueIdentifier_e = 130;
/// Differential Normal Pulse Voltammetry
pub const KBIO_TECHID_DNPV: TTechniqueIdentifier_e = 131;
/// Differential Pulse Amperometry
pub const KBIO_TECHID_DPA: TTechniqueIdentifier_e = 132;
/// Ecorr vs. time
pub const KBIO_TECHID_EVT: TTechniqueIdentifier_e = 133;
/// Linear Polarization
pub const KBIO_TECHID_LP: TTechniqueIdentifier_e = 134;
/// Generalized corrosion
pub const KBIO_TECHID_GC: TTechniqueIdentifier_e = 135;
/// Cyclic Potentiodynamic Polarization
pub const KBIO_TECHID_CPP: TTechniqueIdentifier_e = 136;
/// Potentiodynamic Pitting
pub const KBIO_TECHID_PDP: TTechniqueIdentifier_e = 137;
/// Potentiostatic Pitting
pub const KBIO_TECHID_PSP: TTechniqueIdentifier_e = 138;
/// Zero Resistance Ammeter
pub const KBIO_TECHID_ZRA: TTechniqueIdentifier_e = 139;
/// Manual IR
pub const KBIO_TECHID_MIR: TTechniqueIdentifier_e = 140;
/// IR determination with potentiostatic impedance
pub const KBIO_TECHID_PZIR: TTechniqueIdentifier_e = 141;
/// IR determination with galvanostatic impedance
pub const KBIO_TECHID_GZIR: TTechniqueIdentifier_e = 142;
/// Loop (linked techniques)
pub const KBIO_TECHID_LOOP: TTechniqueIdentifier_e = 150;
/// Trigger Out
pub const KBIO_TECHID_TO: TTechniqueIdentifier_e = 151;
/// Trigger In
pub const KBIO_TECHID_TI: TTechniqueIdentifier_e = 152;
/// Trigger Set
pub const KBIO_TECHID_TOS: TTechniqueIdentifier_e = 153;
/// Chrono-potentiometry with limits
pub const KBIO_TECHID_CPLIMIT: TTechniqueIdentifier_e = 155;
/// Galvano dynamic with limits
pub const KBIO_TECHID_GDYNLIMIT: TTechniqueIdentifier_e = 156;
/// Chrono-amperometry with limits
pub const KBIO_TECHID_CALIMIT: TTechniqueIdentifier_e = 157;
/// Potentio dynamic with limits
pub const KBIO_TECHID_PDYNLIMIT: TTechniqueIdentifier_e = 158;
/// Large amplitude sinusoidal voltammetry
pub const KBIO_TECHID_LASV: TTechniqueIdentifier_e = 159;
/// Modular Pulse
pub const KBIO_TECHID_MP: TTechniqueIdentifier_e = 167;
/// Constant amplitude sinusoidal micro galvano polarization
pub const KBIO_TECHID_CASG: TTechniqueIdentifier_e = 169;
/// Constant amplitude sinusoidal micro potentio polarization
pub const KBIO_TECHID_CASP: TTechniqueIdentifier_e = 170;

// =============================================================================
// Channel state and parameter type
// =============================================================================

pub type TChannelState_e = c_int;

pub const KBIO_STATE_STOP: TChannelState_e = 0;
pub const KBIO_STATE_RUN: TChannelState_e = 1;
pub const KBIO_STATE_PAUSE: TChannelState_e = 2;

pub type TParamType_e = c_int;

pub const PARAM_INT32: TParamType_e = 0;
pub const PARAM_BOOLEAN: TParamType_e = 1;
pub const PARAM_SINGLE: TParamType_e = 2;

// =============================================================================
// Error codes
// =============================================================================

pub type TErrorCodes_e = c_int;

pub const ERR_NOERROR: TErrorCodes_e = 0;

// General
pub const ERR_GEN_NOTCONNECTED: TErrorCodes_e = -1;
pub const ERR_GEN_CONNECTIONINPROGRESS: TErrorCodes_e = -2;
pub const ERR_GEN_CHANNELNOTPLUGGED: TErrorCodes_e = -3;
pub const ERR_GEN_INVALIDPARAMETERS: TErrorCodes_e = -4;
pub const ERR_GEN_FILENOTEXISTS: TErrorCodes_e = -5;
pub const ERR_GEN_FUNCTIONFAILED: TErrorCodes_e = -6;
pub const ERR_GEN_NOCHANNELELECTED: TErrorCodes_e = -7;
pub const ERR_GEN_INVALIDCONF: TErrorCodes_e = -8;
pub const ERR_GEN_ECLAB_LOADED: TErrorCodes_e = -9;
pub const ERR_GEN_LIBNOTCORRECTLYLOADED: TErrorCodes_e = -10;
pub const ERR_GEN_USBLIBRARYERROR: TErrorCodes_e = -11;
pub const ERR_GEN_FUNCTIONINPROGRESS: TErrorCodes_e = -12;
pub const ERR_GEN_CHANNEL_RUNNING: TErrorCodes_e = -13;
pub const ERR_GEN_DEVICE_NOTALLOWED: TErrorCodes_e = -14;
pub const ERR_GEN_UPDATEPARAMETERS: TErrorCodes_e = -15;

// Instrument
pub const ERR_INSTR_VMEERROR: TErrorCodes_e = -101;
pub const ERR_INSTR_TOOMANYDATA: TErrorCodes_e = -102;
pub const ERR_INSTR_RESPNOTPOSSIBLE: TErrorCodes_e = -103;

// Communication
pub const ERR_COMM_COMMFAILED: TErrorCodes_e = -200;
pub const ERR_COMM_CONNECTIONFAILED: TErrorCodes_e = -201;
pub const ERR_COMM_WAITINGACK: TErrorCodes_e = -202;
pub const ERR_COMM_INVALIDIPADDRESS: TErrorCodes_e = -203;
pub const ERR_COMM_ALLOCMEMFAILED: TErrorCodes_e = -204;
pub const ERR_COMM_LOADFIRMWAREFAILED: TErrorCodes_e = -205;
pub const ERR_COMM_INCOMPATIBLESERVER: TErrorCodes_e = -206;
pub const ERR_COMM_MAXCONNREACHED: TErrorCodes_e = -207;

// Firmware
pub const ERR_FIRM_FIRMFILENOTEXISTS: TErrorCodes_e = -300;
pub const ERR_FIRM_FIRMFILEACCESSFAILED: TErrorCodes_e = -301;
pub const ERR_FIRM_FIRMINVALIDFILE: TErrorCodes_e = -302;
pub const ERR_FIRM_FIRMLOADINGFAILED: TErrorCodes_e = -303;
pub const ERR_FIRM_XILFILENOTEXISTS: TErrorCodes_e = -304;
pub const ERR_FIRM_XILFILEACCESSFAILED: TErrorCodes_e = -305;
pub const ERR_FIRM_XILINVALIDFILE: TErrorCodes_e = -306;
pub const ERR_FIRM_XILLOADINGFAILED: TErrorCodes_e = -307;
pub const ERR_FIRM_FIRMWARENOTLOADED: TErrorCodes_e = -308;
pub const ERR_FIRM_FIRMWAREINCOMPATIBLE: TErrorCodes_e = -309;

// Technique
pub const ERR_TECH_ECCFILENOTEXISTS: TErrorCodes_e = -400;
pub const ERR_TECH_INCOMPATIBLEECC: TErrorCodes_e = -401;
pub const ERR_TECH_ECCFILECORRUPTED: TErrorCodes_e = -402;
pub const ERR_TECH_LOADTECHNIQUEFAILED: TErrorCodes_e = -403;
pub const ERR_TECH_DATACORRUPTED: TErrorCodes_e = -404;
pub const ERR_TECH_MEMFULL: TErrorCodes_e = -405;
