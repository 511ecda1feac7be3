//! Device and channel descriptors.
//!
//! [`DeviceInfo`] and [`ChannelInfo`] are read-only snapshots of the
//! descriptors ECLib fills in on connection and on channel queries. Raw
//! codes outside the documented sets are kept as integers so a newer
//! instrument never makes the snapshot unreadable.

use chrono::NaiveDate;
use eclib_sys::{TChannelInfos_t, TDeviceInfos_t};
use serde::Serialize;
use tracing::warn;

use crate::types::{AmplifierType, Bandwidth, ChannelState, DeviceType, FirmwareCode, IntensityRange};

/// Typed enum value, or the raw code if it is not documented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Code<T> {
    /// Documented code
    Known(T),
    /// Code outside the documented set
    Raw(i32),
}

impl<T: Copy> Code<T> {
    /// The typed value, if known.
    pub fn known(self) -> Option<T> {
        match self {
            Self::Known(v) => Some(v),
            Self::Raw(_) => None,
        }
    }
}

/// Decode a raw code, logging values the vendor does not document.
pub(crate) fn decode<T>(
    field: &'static str,
    raw: i32,
    from_raw: impl FnOnce(i32) -> Option<T>,
) -> Code<T> {
    match from_raw(raw) {
        Some(v) => Code::Known(v),
        None => {
            warn!(field, raw, "undocumented ECLib code");
            Code::Raw(raw)
        }
    }
}

/// Information about the connected instrument.
#[derive(Debug, Clone, Serialize)]
pub struct DeviceInfo {
    /// Instrument model
    pub device_type: Code<DeviceType>,
    /// RAM size in MB
    pub ram_size_mb: i32,
    /// CPU type code
    pub cpu: i32,
    /// Number of channels fitted
    pub n_channels: i32,
    /// Number of channel slots
    pub n_slots: i32,
    /// Communication firmware version
    pub firmware_version: i32,
    /// Communication firmware date, `None` if the instrument reports an invalid date
    pub firmware_date: Option<NaiveDate>,
    /// Front-panel display enabled
    pub ht_display_on: bool,
    /// Number of PCs connected to the instrument
    pub n_connected_pcs: i32,
}

impl DeviceInfo {
    /// Build from the raw record.
    pub fn from_raw(raw: &TDeviceInfos_t) -> Self {
        let (yyyy, mm, dd) = (raw.FirmwareDate_yyyy, raw.FirmwareDate_mm, raw.FirmwareDate_dd);
        let firmware_date = u32::try_from(mm)
            .ok()
            .zip(u32::try_from(dd).ok())
            .and_then(|(mm, dd)| NaiveDate::from_ymd_opt(yyyy, mm, dd));

        Self {
            device_type: decode("DeviceCode", raw.DeviceCode, DeviceType::from_raw),
            ram_size_mb: raw.RAMSize,
            cpu: raw.CPU,
            n_channels: raw.NumberOfChannels,
            n_slots: raw.NumberOfSlots,
            firmware_version: raw.FirmwareVersion,
            firmware_date,
            ht_display_on: raw.HTdisplayOn != 0,
            n_connected_pcs: raw.NbOfConnectedPC,
        }
    }

    /// Human-readable instrument name.
    pub fn model_name(&self) -> String {
        match self.device_type {
            Code::Known(t) => t.name().trim_start_matches("KBIO_DEV_").to_string(),
            Code::Raw(code) => format!("device #{}", code),
        }
    }
}

impl From<&TDeviceInfos_t> for DeviceInfo {
    fn from(raw: &TDeviceInfos_t) -> Self {
        Self::from_raw(raw)
    }
}

/// Information about one channel.
#[derive(Debug, Clone, Serialize)]
pub struct ChannelInfo {
    /// Channel index (0..15)
    pub channel: i32,
    /// Channel board version
    pub board_version: i32,
    /// Channel board serial number
    pub board_serial_number: i32,
    /// Firmware loaded on the channel
    pub firmware: Code<FirmwareCode>,
    /// Firmware version
    pub firmware_version: i32,
    /// FPGA version
    pub xilinx_version: i32,
    /// Amplifier fitted on the channel
    pub amplifier: Code<AmplifierType>,
    /// Number of amplifiers
    pub n_amplifiers: i32,
    /// Low current board fitted
    pub low_current_board: bool,
    /// Impedance board fitted
    pub impedance_board: bool,
    /// Memory size in bytes
    pub mem_size: i32,
    /// Memory filled in bytes
    pub mem_filled: i32,
    /// Run state
    pub state: Code<ChannelState>,
    /// Highest current range
    pub max_i_range: Code<IntensityRange>,
    /// Lowest current range
    pub min_i_range: Code<IntensityRange>,
    /// Highest bandwidth setting
    pub max_bandwidth: Code<Bandwidth>,
    /// Number of techniques loaded
    pub n_techniques: i32,
}

impl ChannelInfo {
    /// Build from the raw record.
    pub fn from_raw(raw: &TChannelInfos_t) -> Self {
        Self {
            channel: raw.Channel,
            board_version: raw.BoardVersion,
            board_serial_number: raw.BoardSerialNumber,
            firmware: decode("FirmwareCode", raw.FirmwareCode, FirmwareCode::from_raw),
            firmware_version: raw.FirmwareVersion,
            xilinx_version: raw.XilinxVersion,
            amplifier: decode("AmpCode", raw.AmpCode, AmplifierType::from_raw),
            n_amplifiers: raw.NbAmps,
            low_current_board: raw.Lcboard != 0,
            impedance_board: raw.Zboard != 0,
            mem_size: raw.MemSize,
            mem_filled: raw.MemFilled,
            state: decode("State", raw.State, ChannelState::from_raw),
            max_i_range: decode("MaxIRange", raw.MaxIRange, IntensityRange::from_raw),
            min_i_range: decode("MinIRange", raw.MinIRange, IntensityRange::from_raw),
            max_bandwidth: decode("MaxBandwidth", raw.MaxBandwidth, Bandwidth::from_raw),
            n_techniques: raw.NbOfTechniques,
        }
    }

    /// Check if a low current board is fitted.
    pub fn has_low_current_board(&self) -> bool {
        self.low_current_board
    }

    /// Check if the channel can measure impedance.
    pub fn has_impedance(&self) -> bool {
        self.impedance_board
    }

    /// Check if the library firmware (kernel) is loaded.
    pub fn has_kernel_firmware(&self) -> bool {
        self.firmware == Code::Known(FirmwareCode::Kernel)
    }

    /// Fraction of channel memory in use, 0.0 when the size is unknown.
    pub fn memory_fill_ratio(&self) -> f64 {
        if self.mem_size <= 0 {
            0.0
        } else {
            self.mem_filled as f64 / self.mem_size as f64
        }
    }
}

impl From<&TChannelInfos_t> for ChannelInfo {
    fn from(raw: &TChannelInfos_t) -> Self {
        Self::from_raw(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn sample_device() -> TDeviceInfos_t {
        TDeviceInfos_t {
            DeviceCode: eclib_sys::KBIO_DEV_SP300,
            RAMSize: 64,
            NumberOfChannels: 2,
            NumberOfSlots: 2,
            FirmwareVersion: 612,
            FirmwareDate_yyyy: 2019,
            FirmwareDate_mm: 4,
            FirmwareDate_dd: 23,
            NbOfConnectedPC: 1,
            ..Default::default()
        }
    }

    #[test]
    fn test_device_info_from_raw() {
        let info = DeviceInfo::from_raw(&sample_device());
        assert_eq!(info.device_type, Code::Known(DeviceType::Sp300));
        assert_eq!(info.model_name(), "SP300");
        assert_eq!(info.firmware_date, NaiveDate::from_ymd_opt(2019, 4, 23));
        assert_eq!(info.n_channels, 2);
        assert!(!info.ht_display_on);
    }

    #[test]
    fn test_device_info_invalid_date() {
        let mut raw = sample_device();
        raw.FirmwareDate_mm = 13;
        assert_eq!(DeviceInfo::from_raw(&raw).firmware_date, None);
        raw.FirmwareDate_mm = -1;
        assert_eq!(DeviceInfo::from_raw(&raw).firmware_date, None);
    }

    #[test]
    fn test_unknown_device_code_is_kept() {
        let mut raw = sample_device();
        raw.DeviceCode = 99;
        let info = DeviceInfo::from(&raw);
        assert_eq!(info.device_type, Code::Raw(99));
        assert_eq!(info.device_type.known(), None);
        assert_eq!(info.model_name(), "device #99");
    }

    #[test]
    fn test_channel_info_from_raw() {
        let raw = TChannelInfos_t {
            Channel: 1,
            FirmwareCode: eclib_sys::KIBIO_FIRM_KERNEL,
            AmpCode: eclib_sys::KBIO_AMPL_4A10V,
            Lcboard: 1,
            Zboard: 1,
            MemSize: 1000,
            MemFilled: 250,
            State: eclib_sys::KBIO_STATE_RUN,
            MaxIRange: eclib_sys::KBIO_IRANGE_1A,
            MinIRange: eclib_sys::KBIO_IRANGE_100pA,
            MaxBandwidth: eclib_sys::KBIO_BW_9,
            ..Default::default()
        };
        let info = ChannelInfo::from_raw(&raw);
        assert!(info.has_kernel_firmware());
        assert!(info.has_low_current_board());
        assert!(info.has_impedance());
        assert_eq!(info.amplifier, Code::Known(AmplifierType::Amp4A10V));
        assert_eq!(info.state.known(), Some(ChannelState::Run));
        assert_eq!(info.min_i_range.known(), Some(IntensityRange::Range100pA));
        assert_eq!(info.max_bandwidth.known(), Some(Bandwidth::Bw9));
        assert!((info.memory_fill_ratio() - 0.25).abs() < f64::EPSILON);
    }

    #[traced_test]
    #[test]
    fn test_undocumented_code_is_logged() {
        let raw = TChannelInfos_t {
            State: 42,
            MaxBandwidth: eclib_sys::KBIO_BW_1,
            ..Default::default()
        };
        let info = ChannelInfo::from_raw(&raw);
        assert_eq!(info.state, Code::Raw(42));
        assert!(logs_contain("undocumented ECLib code"));
        assert!(logs_contain("raw=42"));
    }

    #[test]
    fn test_reserved_words_are_ignored() {
        let raw = TChannelInfos_t {
            Channel: 3,
            MaxBandwidth: eclib_sys::KBIO_BW_5,
            ..Default::default()
        };
        let mut reserved = raw;
        reserved.RESERVED = 0x5a5a;
        reserved.RESERVED2 = -1;
        let plain = serde_json::to_value(ChannelInfo::from_raw(&raw)).unwrap();
        let with_reserved = serde_json::to_value(ChannelInfo::from_raw(&reserved)).unwrap();
        assert_eq!(plain, with_reserved);
        assert!(plain.get("reserved").is_none());
    }

    #[test]
    fn test_zeroed_channel_info() {
        // A zeroed record has bandwidth 0, which is not a documented code.
        let info = ChannelInfo::from_raw(&TChannelInfos_t::default());
        assert_eq!(info.max_bandwidth, Code::Raw(0));
        assert_eq!(info.memory_fill_ratio(), 0.0);
    }
}
