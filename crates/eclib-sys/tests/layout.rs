//! ECLib ABI layout tests.
//!
//! Pins the size and every field offset of the raw structures under the
//! vendor's 4-byte packing. A failure here means the declarations no longer
//! match the vendor library and must not be shipped.

use eclib_sys::*;
use std::mem::{align_of, offset_of, size_of};

const PTR: usize = size_of::<usize>();

/// Assert that consecutive fields are laid out at the expected offsets.
macro_rules! assert_offsets {
    ($ty:ty { $($field:ident => $offset:expr),+ $(,)? }) => {
        $(
            assert_eq!(
                offset_of!($ty, $field),
                $offset,
                concat!(stringify!($ty), "::", stringify!($field))
            );
        )+
    };
}

#[test]
fn test_all_structures_are_4_byte_aligned() {
    assert_eq!(align_of::<TDeviceInfos_t>(), 4);
    assert_eq!(align_of::<TChannelInfos_t>(), 4);
    assert_eq!(align_of::<TCurrentValues_t>(), 4);
    assert_eq!(align_of::<TDataInfos_t>(), 4);
    assert_eq!(align_of::<TDataBuffer_t>(), 4);
    assert_eq!(align_of::<TEccParam_t>(), 4);
    assert_eq!(align_of::<TEccParams_t>(), 4);
    assert_eq!(align_of::<THardwareConf_t>(), 4);
    assert_eq!(align_of::<TTechniqueInfos>(), 4);
    assert_eq!(align_of::<TExperimentInfos_t>(), 4);
}

#[test]
fn test_device_infos_layout() {
    assert_eq!(size_of::<TDeviceInfos_t>(), 44);
    assert_offsets!(TDeviceInfos_t {
        DeviceCode => 0,
        RAMSize => 4,
        CPU => 8,
        NumberOfChannels => 12,
        NumberOfSlots => 16,
        FirmwareVersion => 20,
        FirmwareDate_yyyy => 24,
        FirmwareDate_mm => 28,
        FirmwareDate_dd => 32,
        HTdisplayOn => 36,
        NbOfConnectedPC => 40,
    });
}

#[test]
fn test_channel_infos_layout() {
    assert_eq!(size_of::<TChannelInfos_t>(), 76);
    assert_offsets!(TChannelInfos_t {
        Channel => 0,
        BoardVersion => 4,
        BoardSerialNumber => 8,
        FirmwareCode => 12,
        FirmwareVersion => 16,
        XilinxVersion => 20,
        AmpCode => 24,
        NbAmps => 28,
        Lcboard => 32,
        Zboard => 36,
        RESERVED => 40,
        RESERVED2 => 44,
        MemSize => 48,
        MemFilled => 52,
        State => 56,
        MaxIRange => 60,
        MinIRange => 64,
        MaxBandwidth => 68,
        NbOfTechniques => 72,
    });
}

#[test]
fn test_current_values_layout() {
    assert_eq!(size_of::<TCurrentValues_t>(), 76);
    assert_offsets!(TCurrentValues_t {
        State => 0,
        MemFilled => 4,
        TimeBase => 8,
        Ewe => 12,
        EweRangeMin => 16,
        EweRangeMax => 20,
        Ece => 24,
        EceRangeMin => 28,
        EceRangeMax => 32,
        Eoverflow => 36,
        I => 40,
        IRange => 44,
        Ioverflow => 48,
        ElapsedTime => 52,
        Freq => 56,
        Rcomp => 60,
        Saturation => 64,
        OptErr => 68,
        OptPos => 72,
    });
}

#[test]
fn test_data_infos_layout() {
    // Natural alignment would put StartTime at 32 and make the struct 48 bytes.
    assert_eq!(size_of::<TDataInfos_t>(), 40);
    assert_offsets!(TDataInfos_t {
        IRQskipped => 0,
        NbRows => 4,
        NbCols => 8,
        TechniqueIndex => 12,
        TechniqueID => 16,
        ProcessIndex => 20,
        StartTime => 28,
        MuxPad => 36,
    });
    assert_eq!(offset_of!(TDataInfos_t, r#loop), 24);
}

#[test]
fn test_data_buffer_layout() {
    assert_eq!(size_of::<TDataBuffer_t>(), 4000);
    assert_eq!(offset_of!(TDataBuffer_t, data), 0);
    assert_eq!(DATA_BUFFER_WORDS, 1000);
}

#[test]
fn test_ecc_param_layout() {
    assert_eq!(size_of::<TEccParam_t>(), 76);
    assert_offsets!(TEccParam_t {
        ParamStr => 0,
        ParamType => 64,
        ParamVal => 68,
        ParamIndex => 72,
    });
}

#[test]
fn test_ecc_params_layout() {
    assert_eq!(size_of::<TEccParams_t>(), 4 + PTR);
    assert_offsets!(TEccParams_t {
        len => 0,
        pParams => 4,
    });
}

#[test]
fn test_hardware_conf_layout() {
    assert_eq!(size_of::<THardwareConf_t>(), 8);
    assert_offsets!(THardwareConf_t {
        Conn => 0,
        Ground => 4,
    });
}

#[test]
fn test_technique_infos_layout() {
    assert_eq!(size_of::<TTechniqueInfos>(), 16 + 2 * PTR);
    assert_offsets!(TTechniqueInfos {
        id => 0,
        indx => 4,
        nbParams => 8,
        nbSettings => 12,
        Params => 16,
        HardSettings => 16 + PTR,
    });
}

#[test]
fn test_experiment_infos_layout() {
    assert_eq!(size_of::<TExperimentInfos_t>(), 272);
    assert_offsets!(TExperimentInfos_t {
        Group => 0,
        PCidentifier => 4,
        TimeHMS => 8,
        TimeYMD => 12,
        Filename => 16,
    });
}

#[test]
fn test_enum_values_match_vendor_codes() {
    assert_eq!(KBIO_DEV_SP300, 16);
    assert_eq!(KBIO_DEV_VSP300, 20);
    assert_eq!(KIBIO_AMPL_LB2000, 19);
    assert_eq!(KBIO_AMPL_1A48V, 20);
    assert_eq!(KBIO_IRANGE_100pA, 0);
    assert_eq!(KBIO_IRANGE_AUTO, 12);
    assert_eq!(KBIO_ERANGE_AUTO, 3);
    assert_eq!(KBIO_BW_9, 9);
    assert_eq!(KBIO_CONN_CETOGRND, 1);
    assert_eq!(KBIO_MODE_FLOATING, 1);
    assert_eq!(KBIO_TECHID_OCV, 100);
    assert_eq!(KBIO_TECHID_PEIS, 104);
    assert_eq!(KBIO_STATE_PAUSE, 2);
    assert_eq!(PARAM_BOOLEAN, 1);
    assert_eq!(ERR_GEN_NOTCONNECTED, -1);
    assert_eq!(ERR_COMM_COMMFAILED, -200);
    assert_eq!(ERR_TECH_ECCFILENOTEXISTS, -400);
}
