//! Technique information records.

use eclib_sys::{TEccParam_t, TTechniqueInfos};
use serde::Serialize;

use crate::device::{decode, Code};
use crate::error::{EcLibError, Result};
use crate::params::EccParam;
use crate::types::TechniqueId;

/// Owned copy of a [`TTechniqueInfos`] record.
#[derive(Debug, Clone, Serialize)]
pub struct TechniqueInfo {
    /// Technique identifier
    pub technique: Code<TechniqueId>,
    /// Index of the technique in a linked sequence
    pub index: i32,
    /// Technique parameters
    pub params: Vec<EccParam>,
    /// Hardware settings applied by the technique
    pub hard_settings: Vec<EccParam>,
}

impl TechniqueInfo {
    /// Copy a raw record and the arrays it points to.
    ///
    /// # Safety
    ///
    /// `Params` and `HardSettings` must each be null or point to at least
    /// `nbParams` / `nbSettings` valid, initialized records.
    pub unsafe fn from_raw(raw: &TTechniqueInfos) -> Result<Self> {
        let (params_ptr, settings_ptr) = (raw.Params, raw.HardSettings);
        let params = read_params("Params", params_ptr, raw.nbParams)?;
        let hard_settings = read_params("HardSettings", settings_ptr, raw.nbSettings)?;

        Ok(Self {
            technique: decode("id", raw.id, TechniqueId::from_raw),
            index: raw.indx,
            params,
            hard_settings,
        })
    }
}

/// # Safety
///
/// `ptr` must be null or valid for `count` reads.
unsafe fn read_params(
    field: &'static str,
    ptr: *const TEccParam_t,
    count: i32,
) -> Result<Vec<EccParam>> {
    if count <= 0 {
        return Ok(Vec::new());
    }
    if ptr.is_null() {
        return Err(EcLibError::NullPointer { field, count });
    }
    // TEccParam_t is 4-byte aligned, matching the vendor's allocation.
    std::slice::from_raw_parts(ptr, count as usize)
        .iter()
        .map(EccParam::from_raw)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_copies_arrays() {
        let mut params = [
            EccParam::single("Rest_time_T", 10.0, 0).unwrap().to_raw().unwrap(),
            EccParam::int32("N_Cycles", 2, 0).unwrap().to_raw().unwrap(),
        ];
        let mut settings = [EccParam::int32("I_Range", 7, 0).unwrap().to_raw().unwrap()];
        let raw = TTechniqueInfos {
            id: eclib_sys::KBIO_TECHID_OCV,
            indx: 1,
            nbParams: 2,
            nbSettings: 1,
            Params: params.as_mut_ptr(),
            HardSettings: settings.as_mut_ptr(),
        };

        let info = unsafe { TechniqueInfo::from_raw(&raw) }.unwrap();
        assert_eq!(info.technique, Code::Known(TechniqueId::Ocv));
        assert_eq!(info.index, 1);
        assert_eq!(info.params.len(), 2);
        assert_eq!(info.params[1].label, "N_Cycles");
        assert_eq!(info.hard_settings[0].label, "I_Range");
    }

    #[test]
    fn test_null_pointer_with_count() {
        let raw = TTechniqueInfos {
            nbParams: 3,
            ..Default::default()
        };
        let err = unsafe { TechniqueInfo::from_raw(&raw) }.unwrap_err();
        assert!(matches!(
            err,
            EcLibError::NullPointer {
                field: "Params",
                count: 3
            }
        ));
    }

    #[test]
    fn test_empty_record() {
        let info = unsafe { TechniqueInfo::from_raw(&TTechniqueInfos::default()) }.unwrap();
        assert!(info.params.is_empty());
        assert!(info.hard_settings.is_empty());
        assert_eq!(info.technique.known(), Some(TechniqueId::None));
    }
}
