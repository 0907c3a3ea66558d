//! Macro for implementing Display and FromStr for wire-named enums
//!
//! The backend sends enum-like values as capitalised names ("Pending",
//! "QcTrainee"). This macro maps each variant to its wire name and parses
//! case-insensitively.
//!
//! # Example
//!
//! ```rust
//! use caliber_domain::impl_wire_name_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Light {
//!     Red,
//!     Green,
//! }
//!
//! impl_wire_name_conversions!(Light {
//!     Red => "Red",
//!     Green => "Green",
//! });
//!
//! assert_eq!(Light::Red.to_string(), "Red");
//! assert_eq!("green".parse::<Light>(), Ok(Light::Green));
//! ```

/// Implements Display and FromStr for enums with fixed wire names
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their wire names
#[macro_export]
macro_rules! impl_wire_name_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Wire name of this variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                $(
                    if s.trim().eq_ignore_ascii_case($str) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestStatus {
        Pending,
        Completed,
    }

    impl_wire_name_conversions!(TestStatus {
        Pending => "Pending",
        Completed => "Completed",
    });

    #[test]
    fn test_display_uses_wire_name() {
        assert_eq!(TestStatus::Pending.to_string(), "Pending");
        assert_eq!(TestStatus::Completed.as_str(), "Completed");
    }

    #[test]
    fn test_fromstr_ignores_case_and_whitespace() {
        assert_eq!(TestStatus::from_str("pending").unwrap(), TestStatus::Pending);
        assert_eq!(TestStatus::from_str("COMPLETED").unwrap(), TestStatus::Completed);
        assert_eq!(TestStatus::from_str(" Pending ").unwrap(), TestStatus::Pending);
    }

    mod with_result_alias {
        // Domain modules import the one-parameter `Result` alias alongside
        // the macro.
        #[allow(unused_imports)]
        use crate::errors::Result;

        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        enum Shift {
            Day,
            Night,
        }

        impl_wire_name_conversions!(Shift {
            Day => "Day",
            Night => "Night",
        });

        #[test]
        fn test_expands_with_result_alias_in_scope() {
            assert_eq!("night".parse::<Shift>(), Ok(Shift::Night));
            assert_eq!(Shift::Day.to_string(), "Day");
            assert!("dusk".parse::<Shift>().is_err());
        }
    }

    #[test]
    fn test_fromstr_invalid() {
        let result = TestStatus::from_str("invalid");
        assert!(result.unwrap_err().contains("Invalid TestStatus: invalid"));
        assert!(TestStatus::from_str("").is_err());
    }
}
