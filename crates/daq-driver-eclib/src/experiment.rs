//! Experiment metadata.

use eclib_sys::{TExperimentInfos_t, FILENAME_LEN};
use serde::{Deserialize, Serialize};

use crate::error::{EcLibError, Result};

/// Typed view of [`TExperimentInfos_t`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExperimentInfo {
    /// Experiment group
    pub group: i32,
    /// Identifier of the PC that started the experiment
    pub pc_identifier: i32,
    /// Start time, packed as the vendor reports it
    pub time_hms: i32,
    /// Start date, packed as the vendor reports it
    pub time_ymd: i32,
    /// Data file name
    pub filename: String,
}

impl ExperimentInfo {
    /// Decode the raw record. The file name stops at the first NUL.
    pub fn from_raw(raw: &TExperimentInfos_t) -> Self {
        let bytes = raw.Filename;
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(FILENAME_LEN);
        Self {
            group: raw.Group,
            pc_identifier: raw.PCidentifier,
            time_hms: raw.TimeHMS,
            time_ymd: raw.TimeYMD,
            filename: String::from_utf8_lossy(&bytes[..end]).into_owned(),
        }
    }

    /// Encode into the raw record, NUL-terminating the file name.
    pub fn to_raw(&self) -> Result<TExperimentInfos_t> {
        let name = self.filename.as_bytes();
        if name.len() >= FILENAME_LEN {
            return Err(EcLibError::FilenameTooLong {
                len: name.len(),
                max: FILENAME_LEN - 1,
            });
        }
        let mut raw = TExperimentInfos_t {
            Group: self.group,
            PCidentifier: self.pc_identifier,
            TimeHMS: self.time_hms,
            TimeYMD: self.time_ymd,
            ..Default::default()
        };
        raw.Filename[..name.len()].copy_from_slice(name);
        Ok(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode() {
        let info = ExperimentInfo {
            group: 1,
            pc_identifier: 42,
            time_hms: 103000,
            time_ymd: 20240115,
            filename: "C:\\data\\cell_03.mpr".to_string(),
        };
        let raw = info.to_raw().unwrap();
        assert_eq!(raw.Filename[info.filename.len()], 0);
        assert_eq!(ExperimentInfo::from_raw(&raw), info);
    }

    #[test]
    fn test_filename_limit() {
        let mut info = ExperimentInfo {
            filename: "f".repeat(FILENAME_LEN - 1),
            ..Default::default()
        };
        assert!(info.to_raw().is_ok());
        info.filename.push('f');
        assert!(matches!(
            info.to_raw(),
            Err(EcLibError::FilenameTooLong { len: 256, max: 255 })
        ));
    }
}
