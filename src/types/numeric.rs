//! Radix-parameterized and range-bounded integer types

use crate::error::{ConfigError, ConfigResult};
use crate::types::ValueType;

const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Render a signed integer in the given radix, Java-style: a minus sign
/// followed by the digits of the absolute value, not two's complement.
fn fmt_radix(value: i64, radix: u32) -> String {
    let mut magnitude = value.unsigned_abs();
    let mut out = Vec::new();
    loop {
        out.push(DIGITS[(magnitude % radix as u64) as usize]);
        magnitude /= radix as u64;
        if magnitude == 0 {
            break;
        }
    }
    if value < 0 {
        out.push(b'-');
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

fn check_radix(radix: u32) -> ConfigResult<u32> {
    if (2..=36).contains(&radix) {
        Ok(radix)
    } else {
        Err(ConfigError::Construction(format!(
            "radix {radix} is not in the supported range [2,36]"
        )))
    }
}

macro_rules! radix_int_types {
    ($int:ty, $plain:ident, $ranged:ident, $what:literal) => {
        #[doc = concat!("A trimming type converting the string to ", $what, ".")]
        ///
        /// Parsing honors the configured radix; malformed digits are a hard
        /// format error, while blank input is absent. Preconfigured
        /// instances cover the common radices.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $plain {
            radix: u32,
        }

        impl $plain {
            /// Base-2 parsing
            pub const BIN: $plain = $plain { radix: 2 };
            /// Base-8 parsing
            pub const OCT: $plain = $plain { radix: 8 };
            /// Base-10 parsing
            pub const DEC: $plain = $plain { radix: 10 };
            /// Base-16 parsing
            pub const HEX: $plain = $plain { radix: 16 };

            /// Create a type for the given radix; radices outside `[2,36]`
            /// are rejected at construction
            pub fn with_radix(radix: u32) -> ConfigResult<Self> {
                Ok(Self {
                    radix: check_radix(radix)?,
                })
            }

            /// The radix used for parsing
            pub fn radix(&self) -> u32 {
                self.radix
            }
        }

        impl Default for $plain {
            fn default() -> Self {
                Self::DEC
            }
        }

        impl ValueType for $plain {
            type Value = $int;

            fn convert(&self, normalized: &str) -> ConfigResult<Option<$int>> {
                <$int>::from_str_radix(normalized, self.radix)
                    .map(Some)
                    .map_err(|_| {
                        ConfigError::format(
                            normalized,
                            format!("a base-{} integer", self.radix),
                        )
                    })
            }

            fn description(&self) -> String {
                format!(
                    "A base-{} integer in the range [{}\u{2025}{}].",
                    self.radix,
                    fmt_radix(<$int>::MIN as i64, self.radix),
                    fmt_radix(<$int>::MAX as i64, self.radix),
                )
            }
        }

        #[doc = concat!("A [`", stringify!($plain), "`] bounded to a closed range.")]
        ///
        /// Both bounds are inclusive. Values outside the range fail the
        /// postcondition with a constraint violation.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $ranged {
            base: $plain,
            lower: $int,
            upper: $int,
        }

        impl $ranged {
            /// Create a base-10 range type; `lower > upper` is rejected at
            /// construction
            pub fn new(lower: $int, upper: $int) -> ConfigResult<Self> {
                Self::with_radix(10, lower, upper)
            }

            /// Create a range type with the given radix
            pub fn with_radix(radix: u32, lower: $int, upper: $int) -> ConfigResult<Self> {
                if lower > upper {
                    return Err(ConfigError::Construction(format!(
                        "lower bound {lower} is greater than upper bound {upper}"
                    )));
                }
                Ok(Self {
                    base: $plain {
                        radix: check_radix(radix)?,
                    },
                    lower,
                    upper,
                })
            }

            /// Const constructor for base-10 ranges whose bounds are known
            /// constants, usable in `const` presets
            ///
            /// # Panics
            ///
            /// Panics if `lower > upper`; use [`Self::new`] for bounds that
            /// are not compile-time constants.
            pub const fn closed(lower: $int, upper: $int) -> Self {
                assert!(lower <= upper, "lower bound is greater than upper bound");
                Self {
                    base: $plain::DEC,
                    lower,
                    upper,
                }
            }

            /// The radix used for parsing
            pub fn radix(&self) -> u32 {
                self.base.radix
            }

            /// The inclusive lower bound
            pub fn lower_bound(&self) -> $int {
                self.lower
            }

            /// The inclusive upper bound
            pub fn upper_bound(&self) -> $int {
                self.upper
            }
        }

        impl ValueType for $ranged {
            type Value = $int;

            fn convert(&self, normalized: &str) -> ConfigResult<Option<$int>> {
                self.base.convert(normalized)
            }

            fn check_postconditions(&self, value: $int) -> ConfigResult<Option<$int>> {
                if value < self.lower || value > self.upper {
                    return Err(ConfigError::constraint(
                        value,
                        format!("not in the range [{},{}]", self.lower, self.upper),
                    ));
                }
                Ok(Some(value))
            }

            fn description(&self) -> String {
                format!(
                    "A base-{} integer in the range [{}\u{2025}{}].",
                    self.base.radix,
                    fmt_radix(self.lower as i64, self.base.radix),
                    fmt_radix(self.upper as i64, self.base.radix),
                )
            }
        }
    };
}

radix_int_types!(i32, IntegerType, IntegerRangeType, "a 32-bit integer");
radix_int_types!(i64, LongType, LongRangeType, "a 64-bit integer");
