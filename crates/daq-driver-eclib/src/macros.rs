//! Helper macro for typed views of ECLib C enums.

/// Declare a `#[repr(i32)]` enum whose discriminants are `eclib-sys` constants.
///
/// Generates `ALL`, `from_raw`, `to_raw`, `name` (the vendor constant name)
/// and a `Display` impl printing that name.
macro_rules! raw_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $raw:ident
            ),+ $(,)?
        }
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        $(#[$meta])*
        #[repr(i32)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[doc = concat!("`", stringify!($raw), "`")]
                $variant = eclib_sys::$raw,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Convert from the raw vendor value. Unknown values yield `None`.
            pub fn from_raw(raw: i32) -> Option<Self> {
                match raw {
                    $(eclib_sys::$raw => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Convert to the raw vendor value.
            pub fn to_raw(self) -> i32 {
                self as i32
            }

            /// Vendor constant name, e.g. `KBIO_DEV_SP300`.
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($raw),)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl TryFrom<i32> for $name {
            type Error = $crate::error::EcLibError;

            fn try_from(raw: i32) -> std::result::Result<Self, Self::Error> {
                Self::from_raw(raw).ok_or($crate::error::EcLibError::UnknownValue {
                    kind: stringify!($name),
                    raw,
                })
            }
        }
    };
}

pub(crate) use raw_enum;
