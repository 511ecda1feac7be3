//! Error types for ECLib records and return codes.
//!
//! ECLib functions report failures as negative integer codes grouped by
//! category. [`ErrorCode`] is the typed view of those codes, [`check`]
//! turns a raw return value into a [`Result`], and [`EcLibError`] also
//! covers the failures of this crate's own marshalling helpers.

use std::fmt;
use thiserror::Error;

use crate::macros::raw_enum;

/// Result type alias for ECLib operations.
pub type Result<T> = std::result::Result<T, EcLibError>;

/// Errors that can occur when exchanging records with ECLib.
#[derive(Error, Debug)]
pub enum EcLibError {
    /// Error code returned by the vendor library
    #[error("ECLib error {} ({}): {}", .0.to_raw(), .0.name(), .0.description())]
    Vendor(ErrorCode),

    /// Negative return value that is not a documented vendor code
    #[error("Unknown ECLib error code {0}")]
    UnknownCode(i32),

    /// Raw enumeration value outside the vendor's documented set
    #[error("Unknown {kind} value {raw}")]
    UnknownValue {
        /// Name of the enumeration
        kind: &'static str,
        /// Value received
        raw: i32,
    },

    /// Parameter label does not fit the fixed-size label field
    #[error("Parameter label '{label}' is {len} bytes, at most {max} allowed")]
    LabelTooLong {
        /// Rejected label
        label: String,
        /// Label length in bytes
        len: usize,
        /// Longest accepted length
        max: usize,
    },

    /// Parameter label contains non-ASCII or NUL bytes
    #[error("Parameter label '{label}' must be ASCII without NUL bytes")]
    InvalidLabel {
        /// Rejected label
        label: String,
    },

    /// Experiment file name does not fit the fixed-size field
    #[error("File name is {len} bytes, at most {max} allowed")]
    FilenameTooLong {
        /// File name length in bytes
        len: usize,
        /// Longest accepted length
        max: usize,
    },

    /// More parameters than an `INT32` length can describe
    #[error("Too many technique parameters: {count}")]
    TooManyParams {
        /// Number of parameters requested
        count: usize,
    },

    /// Data buffer shape does not fit the fixed-size buffer
    #[error("Data shape {rows}x{cols} exceeds the {capacity}-word buffer")]
    BufferShape {
        /// Reported row count
        rows: i32,
        /// Reported column count
        cols: i32,
        /// Buffer capacity in words
        capacity: usize,
    },

    /// Null pointer in a record that declares a non-zero element count
    #[error("Null pointer for field '{field}' with {count} elements")]
    NullPointer {
        /// Pointer field name
        field: &'static str,
        /// Declared element count
        count: i32,
    },

    /// Invalid configuration document
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// What is wrong
        message: String,
    },

    /// I/O error from the operating system
    #[error("I/O error: {0}")]
    StdIoError(#[from] std::io::Error),
}

impl EcLibError {
    /// Check if this error was reported by the vendor library.
    pub fn is_vendor(&self) -> bool {
        matches!(self, Self::Vendor(_) | Self::UnknownCode(_))
    }

    /// Vendor error category, if this is a documented vendor code.
    pub fn category(&self) -> Option<ErrorCategory> {
        match self {
            Self::Vendor(code) => Some(code.category()),
            _ => None,
        }
    }

    /// Vendor error code, if this is a documented vendor code.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Vendor(code) => Some(*code),
            _ => None,
        }
    }
}

impl From<ErrorCode> for EcLibError {
    fn from(code: ErrorCode) -> Self {
        Self::Vendor(code)
    }
}

/// Convert a raw ECLib return value into a [`Result`].
///
/// `ERR_NOERROR` is `Ok(())`. Documented codes become [`EcLibError::Vendor`],
/// anything else becomes [`EcLibError::UnknownCode`].
pub fn check(code: i32) -> Result<()> {
    if code == eclib_sys::ERR_NOERROR {
        return Ok(());
    }
    match ErrorCode::from_raw(code) {
        Some(known) => Err(EcLibError::Vendor(known)),
        None => Err(EcLibError::UnknownCode(code)),
    }
}

/// Category of a vendor error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// `ERR_GEN_*` codes
    General,
    /// `ERR_INSTR_*` codes
    Instrument,
    /// `ERR_COMM_*` codes
    Communication,
    /// `ERR_FIRM_*` codes
    Firmware,
    /// `ERR_TECH_*` codes
    Technique,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::General => write!(f, "General"),
            Self::Instrument => write!(f, "Instrument"),
            Self::Communication => write!(f, "Communication"),
            Self::Firmware => write!(f, "Firmware"),
            Self::Technique => write!(f, "Technique"),
        }
    }
}

raw_enum! {
    /// Error code returned by an ECLib function.
    ///
    /// `ERR_NOERROR` is not a variant; [`check`] maps it to `Ok`.
    #[serde(rename_all = "snake_case")]
    pub enum ErrorCode {
        NotConnected = ERR_GEN_NOTCONNECTED,
        ConnectionInProgress = ERR_GEN_CONNECTIONINPROGRESS,
        ChannelNotPlugged = ERR_GEN_CHANNELNOTPLUGGED,
        InvalidParameters = ERR_GEN_INVALIDPARAMETERS,
        FileNotExists = ERR_GEN_FILENOTEXISTS,
        FunctionFailed = ERR_GEN_FUNCTIONFAILED,
        NoChannelSelected = ERR_GEN_NOCHANNELELECTED,
        InvalidConf = ERR_GEN_INVALIDCONF,
        EcLabLoaded = ERR_GEN_ECLAB_LOADED,
        LibNotCorrectlyLoaded = ERR_GEN_LIBNOTCORRECTLYLOADED,
        UsbLibraryError = ERR_GEN_USBLIBRARYERROR,
        FunctionInProgress = ERR_GEN_FUNCTIONINPROGRESS,
        ChannelRunning = ERR_GEN_CHANNEL_RUNNING,
        DeviceNotAllowed = ERR_GEN_DEVICE_NOTALLOWED,
        UpdateParameters = ERR_GEN_UPDATEPARAMETERS,

        VmeError = ERR_INSTR_VMEERROR,
        TooManyData = ERR_INSTR_TOOMANYDATA,
        RespNotPossible = ERR_INSTR_RESPNOTPOSSIBLE,

        CommFailed = ERR_COMM_COMMFAILED,
        ConnectionFailed = ERR_COMM_CONNECTIONFAILED,
        WaitingAck = ERR_COMM_WAITINGACK,
        InvalidIpAddress = ERR_COMM_INVALIDIPADDRESS,
        AllocMemFailed = ERR_COMM_ALLOCMEMFAILED,
        LoadFirmwareFailed = ERR_COMM_LOADFIRMWAREFAILED,
        IncompatibleServer = ERR_COMM_INCOMPATIBLESERVER,
        MaxConnReached = ERR_COMM_MAXCONNREACHED,

        FirmFileNotExists = ERR_FIRM_FIRMFILENOTEXISTS,
        FirmFileAccessFailed = ERR_FIRM_FIRMFILEACCESSFAILED,
        FirmInvalidFile = ERR_FIRM_FIRMINVALIDFILE,
        FirmLoadingFailed = ERR_FIRM_FIRMLOADINGFAILED,
        XilFileNotExists = ERR_FIRM_XILFILENOTEXISTS,
        XilFileAccessFailed = ERR_FIRM_XILFILEACCESSFAILED,
        XilInvalidFile = ERR_FIRM_XILINVALIDFILE,
        XilLoadingFailed = ERR_FIRM_XILLOADINGFAILED,
        FirmwareNotLoaded = ERR_FIRM_FIRMWARENOTLOADED,
        FirmwareIncompatible = ERR_FIRM_FIRMWAREINCOMPATIBLE,

        EccFileNotExists = ERR_TECH_ECCFILENOTEXISTS,
        IncompatibleEcc = ERR_TECH_INCOMPATIBLEECC,
        EccFileCorrupted = ERR_TECH_ECCFILECORRUPTED,
        LoadTechniqueFailed = ERR_TECH_LOADTECHNIQUEFAILED,
        DataCorrupted = ERR_TECH_DATACORRUPTED,
        MemFull = ERR_TECH_MEMFULL,
    }
}

impl ErrorCode {
    /// Category the vendor groups this code under.
    pub fn category(self) -> ErrorCategory {
        match self.to_raw() {
            -99..=-1 => ErrorCategory::General,
            -199..=-100 => ErrorCategory::Instrument,
            -299..=-200 => ErrorCategory::Communication,
            -399..=-300 => ErrorCategory::Firmware,
            _ => ErrorCategory::Technique,
        }
    }

    /// One-line description of the code.
    pub fn description(self) -> &'static str {
        match self {
            Self::NotConnected => "no instrument connected",
            Self::ConnectionInProgress => "connection in progress",
            Self::ChannelNotPlugged => "selected channel(s) unplugged",
            Self::InvalidParameters => "invalid function parameters",
            Self::FileNotExists => "selected file does not exist",
            Self::FunctionFailed => "function failed",
            Self::NoChannelSelected => "no channel selected",
            Self::InvalidConf => "invalid instrument configuration",
            Self::EcLabLoaded => "EC-Lab firmware loaded on the instrument",
            Self::LibNotCorrectlyLoaded => "library not correctly loaded in memory",
            Self::UsbLibraryError => "USB library not correctly loaded in memory",
            Self::FunctionInProgress => "function of the library already in progress",
            Self::ChannelRunning => "selected channel(s) already used",
            Self::DeviceNotAllowed => "device not allowed",
            Self::UpdateParameters => "invalid update function parameters",
            Self::VmeError => "internal instrument communication failed",
            Self::TooManyData => "too many data to transfer from the instrument",
            Self::RespNotPossible => "selected channel(s) unplugged (device error)",
            Self::CommFailed => "communication failed with the instrument",
            Self::ConnectionFailed => "cannot establish connection with the instrument",
            Self::WaitingAck => "waiting for the instrument response",
            Self::InvalidIpAddress => "invalid IP address",
            Self::AllocMemFailed => "cannot allocate memory in the instrument",
            Self::LoadFirmwareFailed => "cannot load firmware into selected channel(s)",
            Self::IncompatibleServer => "communication firmware not compatible with the library",
            Self::MaxConnReached => "maximum number of allowed connections reached",
            Self::FirmFileNotExists => "cannot find kernel.bin file",
            Self::FirmFileAccessFailed => "cannot read kernel.bin file",
            Self::FirmInvalidFile => "invalid kernel.bin file",
            Self::FirmLoadingFailed => "cannot load kernel.bin on the selected channel(s)",
            Self::XilFileNotExists => "cannot find x100_01.txt file",
            Self::XilFileAccessFailed => "cannot read x100_01.txt file",
            Self::XilInvalidFile => "invalid x100_01.txt file",
            Self::XilLoadingFailed => "cannot load x100_01.txt file on the selected channel(s)",
            Self::FirmwareNotLoaded => "no firmware loaded on the selected channel(s)",
            Self::FirmwareIncompatible => "loaded firmware not compatible with the library",
            Self::EccFileNotExists => "cannot find the selected ECC file",
            Self::IncompatibleEcc => "ECC file not compatible with the channel firmware",
            Self::EccFileCorrupted => "ECC file corrupted",
            Self::LoadTechniqueFailed => "cannot load the ECC file",
            Self::DataCorrupted => "data returned by the instrument are corrupted",
            Self::MemFull => "cannot load techniques: full memory",
        }
    }
}
