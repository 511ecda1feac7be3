//! Channel electrode configuration.

use eclib_sys::THardwareConf_t;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{ElectrodeConnection, GroundMode};

/// Typed view of [`THardwareConf_t`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HardwareConfig {
    /// Electrode connection mode
    #[serde(default)]
    pub connection: ElectrodeConnection,
    /// Instrument ground mode
    #[serde(default)]
    pub ground: GroundMode,
}

impl HardwareConfig {
    /// Decode the raw record; undocumented codes are errors.
    pub fn from_raw(raw: &THardwareConf_t) -> Result<Self> {
        Ok(Self {
            connection: ElectrodeConnection::try_from(raw.Conn)?,
            ground: GroundMode::try_from(raw.Ground)?,
        })
    }

    /// Encode into the raw record.
    pub fn to_raw(self) -> THardwareConf_t {
        THardwareConf_t {
            Conn: self.connection.to_raw(),
            Ground: self.ground.to_raw(),
        }
    }
}

impl From<HardwareConfig> for THardwareConf_t {
    fn from(config: HardwareConfig) -> Self {
        config.to_raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EcLibError;

    #[test]
    fn test_default_is_standard_grounded() {
        let raw = HardwareConfig::default().to_raw();
        let (conn, ground) = (raw.Conn, raw.Ground);
        assert_eq!(conn, eclib_sys::KBIO_CONN_STD);
        assert_eq!(ground, eclib_sys::KBIO_MODE_GROUNDED);
    }

    #[test]
    fn test_from_raw() {
        let raw = THardwareConf_t {
            Conn: eclib_sys::KBIO_CONN_CETOGRND,
            Ground: eclib_sys::KBIO_MODE_FLOATING,
        };
        let config = HardwareConfig::from_raw(&raw).unwrap();
        assert_eq!(config.connection, ElectrodeConnection::CeToGround);
        assert_eq!(config.ground, GroundMode::Floating);
    }

    #[test]
    fn test_from_raw_rejects_unknown() {
        let raw = THardwareConf_t { Conn: 0, Ground: 5 };
        assert!(matches!(
            HardwareConfig::from_raw(&raw),
            Err(EcLibError::UnknownValue {
                kind: "GroundMode",
                raw: 5
            })
        ));
    }
}
