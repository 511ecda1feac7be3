//! Typed views of the ECLib enumerations.
//!
//! Each enum is `#[repr(i32)]` with discriminants taken straight from
//! `eclib-sys`, so `to_raw` is a cast and the vendor numbering (including
//! its gaps) is never restated here.

use crate::macros::raw_enum;

raw_enum! {
    /// Instrument model reported in `TDeviceInfos_t::DeviceCode`.
    #[serde(rename_all = "snake_case")]
    pub enum DeviceType {
        Vmp = KBIO_DEV_VMP,
        Vmp2 = KBIO_DEV_VMP2,
        Mpg = KBIO_DEV_MPG,
        Bistat = KBIO_DEV_BISTAT,
        Mcs200 = KBIO_DEV_MCS200,
        Vmp3 = KBIO_DEV_VMP3,
        Vsp = KBIO_DEV_VSP,
        Hcp803 = KBIO_DEV_HCP803,
        Epp400 = KBIO_DEV_EPP400,
        Epp4000 = KBIO_DEV_EPP4000,
        Bistat2 = KBIO_DEV_BISTAT2,
        Fct150s = KBIO_DEV_FCT150S,
        Vmp300 = KBIO_DEV_VMP300,
        Sp50 = KBIO_DEV_SP50,
        Sp150 = KBIO_DEV_SP150,
        Fct50s = KBIO_DEV_FCT50S,
        Sp300 = KBIO_DEV_SP300,
        Clb500 = KBIO_DEV_CLB500,
        Hcp1005 = KBIO_DEV_HCP1005,
        Clb2000 = KBIO_DEV_CLB2000,
        Vsp300 = KBIO_DEV_VSP300,
        Sp200 = KBIO_DEV_SP200,
        Mpg2 = KBIO_DEV_MPG2,
        Sp100 = KBIO_DEV_SP100,
        Mosled = KBIO_DEV_MOSLED,
        Kinexxx = KBIO_DEV_KINEXXX,
        Nikita = KBIO_DEV_NIKITA,
        Sp240 = KBIO_DEV_SP240,
        Mpg205 = KBIO_DEV_MPG205,
        Mpg210 = KBIO_DEV_MPG210,
        Mpg220 = KBIO_DEV_MPG220,
        Mpg240 = KBIO_DEV_MPG240,
        Unknown = KBIO_DEV_UNKNOWN,
    }
}

impl DeviceType {
    /// SP-300 technology instruments (SP-200/240/300, VSP-300, VMP-300).
    ///
    /// Several fields (`OptErr`, `MuxPad`, the 100 pA range, bandwidths 8 and
    /// 9) are only meaningful on these.
    pub fn is_sp300_series(self) -> bool {
        matches!(
            self,
            Self::Sp200 | Self::Sp240 | Self::Sp300 | Self::Vsp300 | Self::Vmp300
        )
    }
}

raw_enum! {
    /// Firmware loaded on a channel.
    #[serde(rename_all = "snake_case")]
    pub enum FirmwareCode {
        None = KIBIO_FIRM_NONE,
        Interpreter = KIBIO_FIRM_INTERPR,
        Unknown = KIBIO_FIRM_UNKNOWN,
        Kernel = KIBIO_FIRM_KERNEL,
        Invalid = KIBIO_FIRM_INVALID,
        Ecal = KIBIO_FIRM_ECAL,
    }
}

raw_enum! {
    /// Amplifier fitted on a channel.
    #[serde(rename_all = "snake_case")]
    pub enum AmplifierType {
        None = KIBIO_AMPL_NONE,
        Amp2A = KIBIO_AMPL_2A,
        Amp1A = KIBIO_AMPL_1A,
        Amp5A = KIBIO_AMPL_5A,
        Amp10A = KIBIO_AMPL_10A,
        Amp20A = KIBIO_AMPL_20A,
        Heus = KIBIO_AMPL_HEUS,
        LowCurrent = KIBIO_AMPL_LC,
        Amp80A = KIBIO_AMPL_80A,
        Amp4Ai = KIBIO_AMPL_4AI,
        Pac = KIBIO_AMPL_PAC,
        Amp4AiVsp = KIBIO_AMPL_4AI_VSP,
        LowCurrentVsp = KIBIO_AMPL_LC_VSP,
        Undefined = KIBIO_AMPL_UNDEF,
        Muic = KIBIO_AMPL_MUIC,
        NoneGil = KIBIO_AMPL_NONE_GIL,
        Amp8Ai = KIBIO_AMPL_8AI,
        Lb500 = KIBIO_AMPL_LB500,
        Amp100A5V = KIBIO_AMPL_100A5V,
        Lb2000 = KIBIO_AMPL_LB2000,
        Amp1A48V = KBIO_AMPL_1A48V,
        Amp4A10V = KBIO_AMPL_4A10V,
    }
}

raw_enum! {
    /// Current (intensity) range.
    pub enum IntensityRange {
        #[serde(rename = "100pA")]
        Range100pA = KBIO_IRANGE_100pA,
        #[serde(rename = "1nA")]
        Range1nA = KBIO_IRANGE_1nA,
        #[serde(rename = "10nA")]
        Range10nA = KBIO_IRANGE_10nA,
        #[serde(rename = "100nA")]
        Range100nA = KBIO_IRANGE_100nA,
        #[serde(rename = "1uA")]
        Range1uA = KBIO_IRANGE_1uA,
        #[serde(rename = "10uA")]
        Range10uA = KBIO_IRANGE_10uA,
        #[serde(rename = "100uA")]
        Range100uA = KBIO_IRANGE_100uA,
        #[serde(rename = "1mA")]
        Range1mA = KBIO_IRANGE_1mA,
        #[serde(rename = "10mA")]
        Range10mA = KBIO_IRANGE_10mA,
        #[serde(rename = "100mA")]
        Range100mA = KBIO_IRANGE_100mA,
        #[serde(rename = "1A")]
        Range1A = KBIO_IRANGE_1A,
        #[serde(rename = "booster")]
        Booster = KBIO_IRANGE_BOOSTER,
        #[serde(rename = "auto")]
        Auto = KBIO_IRANGE_AUTO,
    }
}

impl IntensityRange {
    /// Full-scale current in amperes, `None` for booster and auto ranging.
    pub fn full_scale_amps(self) -> Option<f64> {
        let exponent = match self {
            Self::Range100pA => -10,
            Self::Range1nA => -9,
            Self::Range10nA => -8,
            Self::Range100nA => -7,
            Self::Range1uA => -6,
            Self::Range10uA => -5,
            Self::Range100uA => -4,
            Self::Range1mA => -3,
            Self::Range10mA => -2,
            Self::Range100mA => -1,
            Self::Range1A => 0,
            Self::Booster | Self::Auto => return None,
        };
        Some(10f64.powi(exponent))
    }
}

raw_enum! {
    /// Potential (voltage) range.
    pub enum VoltageRange {
        #[serde(rename = "2.5V")]
        Range2_5V = KBIO_ERANGE_2_5,
        #[serde(rename = "5V")]
        Range5V = KBIO_ERANGE_5,
        #[serde(rename = "10V")]
        Range10V = KBIO_ERANGE_10,
        #[serde(rename = "auto")]
        Auto = KBIO_ERANGE_AUTO,
    }
}

impl VoltageRange {
    /// Symmetric full-scale potential in volts, `None` for auto ranging.
    pub fn full_scale_volts(self) -> Option<f64> {
        match self {
            Self::Range2_5V => Some(2.5),
            Self::Range5V => Some(5.0),
            Self::Range10V => Some(10.0),
            Self::Auto => None,
        }
    }
}

raw_enum! {
    /// Control-loop bandwidth setting.
    #[serde(rename_all = "snake_case")]
    pub enum Bandwidth {
        Bw1 = KBIO_BW_1,
        Bw2 = KBIO_BW_2,
        Bw3 = KBIO_BW_3,
        Bw4 = KBIO_BW_4,
        Bw5 = KBIO_BW_5,
        Bw6 = KBIO_BW_6,
        Bw7 = KBIO_BW_7,
        Bw8 = KBIO_BW_8,
        Bw9 = KBIO_BW_9,
    }
}

raw_enum! {
    /// Electrode connection mode.
    #[serde(rename_all = "snake_case")]
    pub enum ElectrodeConnection {
        Standard = KBIO_CONN_STD,
        CeToGround = KBIO_CONN_CETOGRND,
    }
}

raw_enum! {
    /// Instrument ground mode.
    #[serde(rename_all = "snake_case")]
    pub enum GroundMode {
        Grounded = KBIO_MODE_GROUNDED,
        Floating = KBIO_MODE_FLOATING,
    }
}

impl Default for ElectrodeConnection {
    fn default() -> Self {
        Self::Standard
    }
}

impl Default for GroundMode {
    fn default() -> Self {
        Self::Grounded
    }
}

raw_enum! {
    /// Technique identifier.
    #[serde(rename_all = "snake_case")]
    pub enum TechniqueId {
        None = KBIO_TECHID_NONE,
        Ocv = KBIO_TECHID_OCV,
        Ca = KBIO_TECHID_CA,
        Cp = KBIO_TECHID_CP,
        Cv = KBIO_TECHID_CV,
        Peis = KBIO_TECHID_PEIS,
        PotPulse = KBIO_TECHID_POTPULSE,
        GalPulse = KBIO_TECHID_GALPULSE,
        Geis = KBIO_TECHID_GEIS,
        StackPeisSlave = KBIO_TECHID_STACKPEIS_SLAVE,
        StackPeis = KBIO_TECHID_STACKPEIS,
        CPower = KBIO_TECHID_CPOWER,
        CLoad = KBIO_TECHID_CLOAD,
        Fct = KBIO_TECHID_FCT,
        Speis = KBIO_TECHID_SPEIS,
        Sgeis = KBIO_TECHID_SGEIS,
        StackPdyn = KBIO_TECHID_STACKPDYN,
        StackPdynSlave = KBIO_TECHID_STACKPDYN_SLAVE,
        StackGdyn = KBIO_TECHID_STACKGDYN,
        StackGeisSlave = KBIO_TECHID_STACKGEIS_SLAVE,
        StackGeis = KBIO_TECHID_STACKGEIS,
        StackGdynSlave = KBIO_TECHID_STACKGDYN_SLAVE,
        Cpo = KBIO_TECHID_CPO,
        Cga = KBIO_TECHID_CGA,
        CoKine = KBIO_TECHID_COKINE,
        Pdyn = KBIO_TECHID_PDYN,
        Gdyn = KBIO_TECHID_GDYN,
        Cva = KBIO_TECHID_CVA,
        Dpv = KBIO_TECHID_DPV,
        Swv = KBIO_TECHID_SWV,
        Npv = KBIO_TECHID_NPV,
        Rnpv = KBIO_TECHID_RNPV,
        Dnpv = KBIO_TECHID_DNPV,
        Dpa = KBIO_TECHID_DPA,
        Evt = KBIO_TECHID_EVT,
        Lp = KBIO_TECHID_LP,
        Gc = KBIO_TECHID_GC,
        Cpp = KBIO_TECHID_CPP,
        Pdp = KBIO_TECHID_PDP,
        Psp = KBIO_TECHID_PSP,
        Zra = KBIO_TECHID_ZRA,
        Mir = KBIO_TECHID_MIR,
        Pzir = KBIO_TECHID_PZIR,
        Gzir = KBIO_TECHID_GZIR,
        Loop = KBIO_TECHID_LOOP,
        TriggerOut = KBIO_TECHID_TO,
        TriggerIn = KBIO_TECHID_TI,
        TriggerSet = KBIO_TECHID_TOS,
        CpLimit = KBIO_TECHID_CPLIMIT,
        GdynLimit = KBIO_TECHID_GDYNLIMIT,
        CaLimit = KBIO_TECHID_CALIMIT,
        PdynLimit = KBIO_TECHID_PDYNLIMIT,
        Lasv = KBIO_TECHID_LASV,
        ModularPulse = KBIO_TECHID_MP,
        Casg = KBIO_TECHID_CASG,
        Casp = KBIO_TECHID_CASP,
    }
}

raw_enum! {
    /// Channel run state.
    #[serde(rename_all = "snake_case")]
    pub enum ChannelState {
        Stop = KBIO_STATE_STOP,
        Run = KBIO_STATE_RUN,
        Pause = KBIO_STATE_PAUSE,
    }
}

raw_enum! {
    /// Storage type of a technique parameter value.
    #[serde(rename_all = "snake_case")]
    pub enum ParamType {
        Int32 = PARAM_INT32,
        Boolean = PARAM_BOOLEAN,
        Single = PARAM_SINGLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_type_values() {
        assert_eq!(DeviceType::Sp300.to_raw(), 16);
        assert_eq!(DeviceType::from_raw(16), Some(DeviceType::Sp300));
        assert_eq!(DeviceType::from_raw(255), Some(DeviceType::Unknown));
        assert_eq!(DeviceType::from_raw(32), None);
        assert_eq!(DeviceType::Sp300.name(), "KBIO_DEV_SP300");
        assert_eq!(DeviceType::ALL.len(), 33);
    }

    #[test]
    fn test_sp300_series() {
        assert!(DeviceType::Vsp300.is_sp300_series());
        assert!(!DeviceType::Vmp3.is_sp300_series());
    }

    #[test]
    fn test_sparse_codes_reject_gaps() {
        assert_eq!(FirmwareCode::from_raw(2), None);
        assert_eq!(FirmwareCode::from_raw(5), Some(FirmwareCode::Kernel));
        assert_eq!(Bandwidth::from_raw(0), None);
        assert_eq!(TechniqueId::from_raw(143), None);
        assert_eq!(TechniqueId::from_raw(154), None);
        assert_eq!(TechniqueId::from_raw(167), Some(TechniqueId::ModularPulse));
    }

    #[test]
    fn test_every_variant_converts_back() {
        macro_rules! check_all {
            ($($ty:ty),+) => {
                $(
                    for v in <$ty>::ALL {
                        assert_eq!(<$ty>::from_raw(v.to_raw()), Some(*v), "{}", v);
                    }
                )+
            };
        }
        check_all!(
            DeviceType,
            FirmwareCode,
            AmplifierType,
            IntensityRange,
            VoltageRange,
            Bandwidth,
            ElectrodeConnection,
            GroundMode,
            TechniqueId,
            ChannelState,
            ParamType
        );
        assert_eq!(TechniqueId::ALL.len(), 56);
        assert_eq!(AmplifierType::ALL.len(), 22);
    }

    #[test]
    fn test_try_from_unknown() {
        let err = ChannelState::try_from(7).unwrap_err();
        assert!(err.to_string().contains("ChannelState"));
        assert!(err.to_string().contains('7'));
    }

    #[test]
    fn test_full_scale() {
        assert_eq!(IntensityRange::Range1A.full_scale_amps(), Some(1.0));
        assert_eq!(IntensityRange::Auto.full_scale_amps(), None);
        let na = IntensityRange::Range1nA.full_scale_amps().unwrap();
        assert!((na - 1e-9).abs() < 1e-20);
        assert_eq!(VoltageRange::Range2_5V.full_scale_volts(), Some(2.5));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&IntensityRange::Range100uA).unwrap();
        assert_eq!(json, "\"100uA\"");
        let range: VoltageRange = serde_json::from_str("\"2.5V\"").unwrap();
        assert_eq!(range, VoltageRange::Range2_5V);
        let json = serde_json::to_string(&IntensityRange::Auto).unwrap();
        assert_eq!(json, "\"auto\"");
        let json = serde_json::to_string(&DeviceType::Sp300).unwrap();
        assert_eq!(json, "\"sp300\"");
        let conn: ElectrodeConnection = serde_json::from_str("\"ce_to_ground\"").unwrap();
        assert_eq!(conn, ElectrodeConnection::CeToGround);
        let tech: TechniqueId = serde_json::from_str("\"peis\"").unwrap();
        assert_eq!(tech, TechniqueId::Peis);
    }
}
