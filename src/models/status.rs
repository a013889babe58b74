//! Server status codes with display labels.
//!
//! Every status enum round-trips unknown codes through `Other` so a record
//! with a status this client does not know about still loads.

/// Declares a string-coded status enum with labels and an `Other` fallback.
macro_rules! status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => ($code:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
            /// A code this client does not know.
            Other(String),
        }

        impl $name {
            /// All known variants in display order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire code, e.g. `IN_PROGRESS`.
            pub fn code(&self) -> &str {
                match self {
                    $($name::$variant => $code,)+
                    $name::Other(code) => code,
                }
            }

            /// Human-readable label.
            pub fn label(&self) -> &str {
                match self {
                    $($name::$variant => $label,)+
                    $name::Other(code) => code,
                }
            }

            /// Parse a wire code; unknown codes become `Other`.
            pub fn from_code(code: &str) -> Self {
                match code {
                    $($code => $name::$variant,)+
                    other => $name::Other(other.to_string()),
                }
            }

            /// `(code, label)` pairs for every known variant.
            pub fn options() -> Vec<(&'static str, &'static str)> {
                vec![$(($code, $label)),+]
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::ALL[0].clone()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.code())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let code = String::deserialize(deserializer)?;
                Ok($name::from_code(&code))
            }
        }
    };
}

pub(crate) use status_enum;
