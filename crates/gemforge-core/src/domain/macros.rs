//! Declarative macros for reducing enumerated-name boilerplate.

/// Generates `ALL`, `as_str`, `Display` and `FromStr` for a field-less enum
/// whose variants have stable lowercase names.
///
/// # Usage
/// ```ignore
/// impl_named_enum!(Category, "category" {
///     Order => "order",
///     Chaos => "chaos",
/// });
/// ```
macro_rules! impl_named_enum {
    ($type:ident, $what:literal { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $type {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$type] = &[$($type::$variant),+];

            /// Returns the stable textual name.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($type::$variant => $name),+
                }
            }
        }

        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $type {
            type Err = $crate::error::GemforgeError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s.trim() {
                    $($name => Ok($type::$variant),)+
                    other => Err($crate::error::GemforgeError::unknown($what, other)),
                }
            }
        }
    };
}

pub(crate) use impl_named_enum;
