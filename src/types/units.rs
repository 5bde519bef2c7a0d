//! Quantities of a unit family: suffix parsing and unit-aware comparison

use std::cmp::Ordering;
use std::fmt;

use crate::error::{ConfigError, ConfigResult};
use crate::types::{find_variant, ValueType, Variants};

/// A member of an ordered, closed family of interconvertible units.
///
/// Declaration order runs from the finest unit to the coarsest; each unit
/// carries its ratio to the family's finest (base) unit. Conversion from a
/// coarse unit to a finer one multiplies and saturates at the `i64` limits;
/// conversion toward a coarser unit divides, truncating toward zero.
pub trait Unit: Variants + Copy + Eq + Ord + fmt::Debug {
    /// How many of the family's base unit make up one of this unit
    fn base_ratio(&self) -> i64;

    /// Convert a magnitude expressed in this unit to the `to` unit
    fn convert(&self, magnitude: i64, to: Self) -> i64 {
        let from_ratio = self.base_ratio();
        let to_ratio = to.base_ratio();
        if from_ratio >= to_ratio {
            magnitude.saturating_mul(from_ratio / to_ratio)
        } else {
            magnitude / (to_ratio / from_ratio)
        }
    }
}

/// Units of time, finest to coarsest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeUnit {
    Nanos,
    Millis,
    Secs,
    Mins,
    Hours,
    Days,
}

impl Variants for TimeUnit {
    const VARIANTS: &'static [TimeUnit] = &[
        TimeUnit::Nanos,
        TimeUnit::Millis,
        TimeUnit::Secs,
        TimeUnit::Mins,
        TimeUnit::Hours,
        TimeUnit::Days,
    ];

    fn name(&self) -> &'static str {
        match self {
            TimeUnit::Nanos => "ns",
            TimeUnit::Millis => "ms",
            TimeUnit::Secs => "s",
            TimeUnit::Mins => "m",
            TimeUnit::Hours => "h",
            TimeUnit::Days => "d",
        }
    }
}

impl Unit for TimeUnit {
    fn base_ratio(&self) -> i64 {
        match self {
            TimeUnit::Nanos => 1,
            TimeUnit::Millis => 1_000_000,
            TimeUnit::Secs => 1_000_000_000,
            TimeUnit::Mins => 60 * 1_000_000_000,
            TimeUnit::Hours => 3_600 * 1_000_000_000,
            TimeUnit::Days => 86_400 * 1_000_000_000,
        }
    }
}

/// An immutable magnitude paired with its unit of measure.
///
/// Equality is exact on the pair: `1000ms` and `1s` are unequal values even
/// though they denote the same amount of time. Cross-unit ordering goes
/// through [`Quantity::compare`], never through raw magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quantity<U: Unit> {
    magnitude: i64,
    unit: U,
}

impl<U: Unit> Quantity<U> {
    /// Create a quantity
    pub const fn new(magnitude: i64, unit: U) -> Self {
        Self { magnitude, unit }
    }

    /// The magnitude, meaningful only together with [`Quantity::unit`]
    pub fn magnitude(&self) -> i64 {
        self.magnitude
    }

    /// The unit the magnitude is expressed in
    pub fn unit(&self) -> U {
        self.unit
    }

    /// Re-express this quantity in another unit of the family.
    ///
    /// Converting to a finer unit saturates at the `i64` limits; converting
    /// to a coarser unit truncates toward zero.
    pub fn convert_to(&self, unit: U) -> Quantity<U> {
        Quantity::new(self.unit.convert(self.magnitude, unit), unit)
    }

    /// Unit-aware total order over true amounts.
    ///
    /// Same-unit quantities compare by magnitude. Across units, a raw
    /// magnitude comparison is used when conversion could not flip it
    /// (re-expressing the coarser quantity in the finer unit scales a
    /// non-negative magnitude up and a non-positive one down). Otherwise
    /// both are compared in the finer of the two units: the fine-ward
    /// direction keeps precision at the cost of saturating on overflow,
    /// so astronomically coarse quantities compare as the `i64` limit.
    ///
    /// This is deliberately not an `Ord` impl: `1000ms` and `1s` compare
    /// as equal amounts here but are unequal under `Eq`.
    pub fn compare(&self, other: &Self) -> Ordering {
        if self.unit == other.unit {
            return self.magnitude.cmp(&other.magnitude);
        }
        let (coarse, fine, flipped) = if self.unit > other.unit {
            (self, other, false)
        } else {
            (other, self, true)
        };
        let ordering = match coarse.magnitude.cmp(&fine.magnitude) {
            Ordering::Greater if coarse.magnitude >= 0 => Ordering::Greater,
            Ordering::Less if coarse.magnitude <= 0 => Ordering::Less,
            _ => coarse.convert_to(fine.unit).magnitude.cmp(&fine.magnitude),
        };
        if flipped {
            ordering.reverse()
        } else {
            ordering
        }
    }
}

impl<U: Unit> fmt::Display for Quantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.magnitude, self.unit.name())
    }
}

/// A type parsing `"<number><optional unit suffix>"` into a [`Quantity`].
///
/// The magnitude is a signed base-10 integer; whitespace between the number
/// and the suffix is allowed. When no suffix is present the configured
/// default unit applies.
#[derive(Debug, Clone, Copy)]
pub struct QuantityType<U: Unit> {
    default_unit: U,
    case_sensitive: bool,
}

impl<U: Unit> QuantityType<U> {
    /// Create a type with case-insensitive suffix matching
    pub const fn new(default_unit: U) -> Self {
        Self {
            default_unit,
            case_sensitive: false,
        }
    }

    /// Create a type requiring exact-case unit suffixes
    pub const fn case_sensitive(default_unit: U) -> Self {
        Self {
            default_unit,
            case_sensitive: true,
        }
    }

    /// The unit assumed when the value carries no suffix
    pub fn default_unit(&self) -> U {
        self.default_unit
    }

    /// Whether suffix matching requires an exact-case name
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    fn suffix_names() -> String {
        U::VARIANTS
            .iter()
            .map(|u| u.name())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Split off the longest trailing run of characters matching a unit
    /// name; the remainder is the numeric part.
    fn split_suffix<'a>(&self, normalized: &'a str) -> ConfigResult<(&'a str, U)> {
        let longest = U::VARIANTS
            .iter()
            .map(|unit| unit.name())
            .filter(|name| self.matches_suffix(normalized, name))
            .map(str::len)
            .max();
        match longest {
            None => Ok((normalized, self.default_unit)),
            Some(len) => {
                let (number, suffix) = normalized.split_at(normalized.len() - len);
                let unit = find_variant::<U>(suffix, self.case_sensitive).ok_or_else(|| {
                    ConfigError::format(
                        suffix,
                        format!("a unit suffix from {{ {} }}", Self::suffix_names()),
                    )
                })?;
                Ok((number, unit))
            }
        }
    }

    fn matches_suffix(&self, normalized: &str, name: &str) -> bool {
        if self.case_sensitive {
            return normalized.ends_with(name);
        }
        normalized.len() >= name.len()
            && normalized.is_char_boundary(normalized.len() - name.len())
            && normalized[normalized.len() - name.len()..].eq_ignore_ascii_case(name)
    }
}

impl<U: Unit> ValueType for QuantityType<U> {
    type Value = Quantity<U>;

    fn convert(&self, normalized: &str) -> ConfigResult<Option<Quantity<U>>> {
        let (number_part, unit) = self.split_suffix(normalized)?;
        let magnitude: i64 = number_part.trim_end().parse().map_err(|_| {
            ConfigError::format(
                normalized,
                format!(
                    "a base-10 integer amount with an optional unit suffix from {{ {} }}",
                    Self::suffix_names(),
                ),
            )
        })?;
        Ok(Some(Quantity::new(magnitude, unit)))
    }

    fn description(&self) -> String {
        format!(
            "A base-10 integer amount with an optional unit suffix from {{ {} }}. \
             If no unit suffix is specified, '{}' is assumed.",
            Self::suffix_names(),
            self.default_unit.name(),
        )
    }
}

/// Canonical unit duration bounds are checked in.
const CANONICAL: TimeUnit = TimeUnit::Millis;

/// A quantity of time constrained to a closed range.
///
/// Parses like a [`QuantityType`] over [`TimeUnit`] with seconds as the
/// default unit and case-insensitive suffixes. The postcondition converts
/// the parsed quantity to milliseconds and checks it against the bounds;
/// quantities finer than the canonical unit truncate toward zero first, so
/// a sub-millisecond negative like `-720ns` rounds to `0ms` and passes a
/// non-negative bound.
#[derive(Debug, Clone, Copy)]
pub struct DurationType {
    quantity: QuantityType<TimeUnit>,
    lower_ms: i64,
    upper_ms: i64,
}

impl DurationType {
    /// Any non-negative duration
    pub const fn non_negative() -> Self {
        Self {
            quantity: QuantityType::new(TimeUnit::Secs),
            lower_ms: 0,
            upper_ms: i64::MAX,
        }
    }

    /// A duration within `[lower, upper]`; bounds out of order (compared as
    /// amounts of time) are rejected at construction
    pub fn bounded(lower: Quantity<TimeUnit>, upper: Quantity<TimeUnit>) -> ConfigResult<Self> {
        if lower.compare(&upper) == Ordering::Greater {
            return Err(ConfigError::Construction(format!(
                "lower bound {lower} is greater than upper bound {upper}"
            )));
        }
        Ok(Self {
            quantity: QuantityType::new(TimeUnit::Secs),
            lower_ms: lower.convert_to(CANONICAL).magnitude(),
            upper_ms: upper.convert_to(CANONICAL).magnitude(),
        })
    }

    /// The unit assumed when the value carries no suffix
    pub fn default_unit(&self) -> TimeUnit {
        self.quantity.default_unit()
    }

    fn is_non_negative_only(&self) -> bool {
        self.lower_ms == 0 && self.upper_ms == i64::MAX
    }
}

impl ValueType for DurationType {
    type Value = Quantity<TimeUnit>;

    fn convert(&self, normalized: &str) -> ConfigResult<Option<Quantity<TimeUnit>>> {
        self.quantity.convert(normalized)
    }

    fn check_postconditions(
        &self,
        value: Quantity<TimeUnit>,
    ) -> ConfigResult<Option<Quantity<TimeUnit>>> {
        let canonical = value.convert_to(CANONICAL).magnitude();
        if canonical < self.lower_ms || canonical > self.upper_ms {
            let constraint = if self.is_non_negative_only() {
                "a duration of time cannot be negative".to_string()
            } else {
                format!(
                    "not in the duration range [{}ms,{}ms]",
                    self.lower_ms, self.upper_ms
                )
            };
            return Err(ConfigError::constraint(value, constraint));
        }
        Ok(Some(value))
    }

    fn description(&self) -> String {
        if self.is_non_negative_only() {
            format!(
                "A non-negative base-10 integer amount of time, with an optional unit \
                 suffix from {{ {} }}. If no unit suffix is specified, the unit of \
                 time is assumed to be seconds.",
                QuantityType::<TimeUnit>::suffix_names(),
            )
        } else {
            format!(
                "A base-10 integer amount of time in [{}ms,{}ms], with an optional \
                 unit suffix from {{ {} }}. If no unit suffix is specified, the unit \
                 of time is assumed to be seconds.",
                self.lower_ms,
                self.upper_ms,
                QuantityType::<TimeUnit>::suffix_names(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_conversion_ratios() {
        assert_eq!(TimeUnit::Secs.convert(1, TimeUnit::Millis), 1000);
        assert_eq!(TimeUnit::Millis.convert(1000, TimeUnit::Secs), 1);
        assert_eq!(TimeUnit::Days.convert(1, TimeUnit::Secs), 86_400);
        assert_eq!(TimeUnit::Mins.convert(90, TimeUnit::Hours), 1);
    }

    #[test]
    fn test_fine_to_coarse_truncates_toward_zero() {
        assert_eq!(TimeUnit::Millis.convert(1500, TimeUnit::Secs), 1);
        assert_eq!(TimeUnit::Millis.convert(-1500, TimeUnit::Secs), -1);
        assert_eq!(TimeUnit::Nanos.convert(-720, TimeUnit::Millis), 0);
    }

    #[test]
    fn test_coarse_to_fine_saturates() {
        assert_eq!(TimeUnit::Days.convert(i64::MAX, TimeUnit::Nanos), i64::MAX);
        assert_eq!(TimeUnit::Days.convert(i64::MIN, TimeUnit::Nanos), i64::MIN);
    }

    #[test]
    fn test_quantity_equality_is_exact_pair() {
        let ms = Quantity::new(1000, TimeUnit::Millis);
        let s = Quantity::new(1, TimeUnit::Secs);
        assert_ne!(ms, s);
        assert_eq!(ms.compare(&s), Ordering::Equal);
        assert_eq!(ms, Quantity::new(1000, TimeUnit::Millis));
    }

    #[test]
    fn test_compare_same_unit() {
        let a = Quantity::new(2, TimeUnit::Secs);
        let b = Quantity::new(3, TimeUnit::Secs);
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(b.compare(&a), Ordering::Greater);
        assert_eq!(a.compare(&a), Ordering::Equal);
    }

    #[test]
    fn test_compare_consistent_with_true_amounts() {
        // 90s vs 1m: fine side is larger as an amount despite units
        let secs = Quantity::new(90, TimeUnit::Secs);
        let min = Quantity::new(1, TimeUnit::Mins);
        assert_eq!(secs.compare(&min), Ordering::Greater);
        assert_eq!(min.compare(&secs), Ordering::Less);

        // 2d vs 1000ms: the raw magnitudes order the other way around
        let days = Quantity::new(2, TimeUnit::Days);
        let millis = Quantity::new(1000, TimeUnit::Millis);
        assert_eq!(millis.compare(&days), Ordering::Less);
        assert_eq!(days.compare(&millis), Ordering::Greater);

        // 3d vs 1ms decided by the raw-magnitude short-circuit,
        // no conversion needed
        let one_ms = Quantity::new(1, TimeUnit::Millis);
        let three_d = Quantity::new(3, TimeUnit::Days);
        assert_eq!(three_d.compare(&one_ms), Ordering::Greater);
        assert_eq!(one_ms.compare(&three_d), Ordering::Less);
    }

    #[test]
    fn test_compare_negative_magnitudes() {
        // -1m is -60s: the coarse magnitude scales down when converted
        let min = Quantity::new(-1, TimeUnit::Mins);
        let secs = Quantity::new(-30, TimeUnit::Secs);
        assert_eq!(min.compare(&secs), Ordering::Less);
        assert_eq!(secs.compare(&min), Ordering::Greater);

        let neg_day = Quantity::new(-1, TimeUnit::Days);
        let pos_ns = Quantity::new(5, TimeUnit::Nanos);
        assert_eq!(neg_day.compare(&pos_ns), Ordering::Less);
    }

    #[test]
    fn test_compare_total_order_over_true_amounts() {
        // two true amounts, 2 minutes < 3 minutes, each expressed three ways
        let smaller = [
            Quantity::new(120_000, TimeUnit::Millis),
            Quantity::new(120, TimeUnit::Secs),
            Quantity::new(2, TimeUnit::Mins),
        ];
        let larger = [
            Quantity::new(180_000, TimeUnit::Millis),
            Quantity::new(180, TimeUnit::Secs),
            Quantity::new(3, TimeUnit::Mins),
        ];
        for a in smaller {
            for b in larger {
                assert_eq!(a.compare(&b), Ordering::Less, "{a} vs {b}");
                assert_eq!(b.compare(&a), Ordering::Greater, "{b} vs {a}");
            }
        }
        for a in smaller {
            for b in smaller {
                assert_eq!(a.compare(&b), Ordering::Equal, "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_compare_zero_across_units() {
        let zero_d = Quantity::new(0, TimeUnit::Days);
        let zero_ns = Quantity::new(0, TimeUnit::Nanos);
        assert_eq!(zero_d.compare(&zero_ns), Ordering::Equal);
    }

    #[test]
    fn test_compare_saturation_edge() {
        // Conversion to nanos saturates, so the order against another huge
        // fine-unit amount collapses to the i64 limit.
        let huge_days = Quantity::new(i64::MAX, TimeUnit::Days);
        let max_ns = Quantity::new(i64::MAX, TimeUnit::Nanos);
        assert_eq!(huge_days.compare(&max_ns), Ordering::Equal);
    }

    const DURATION: DurationType = DurationType::non_negative();

    #[test]
    fn test_duration_with_suffix() {
        let value = DURATION.process(Some("123ms")).unwrap().unwrap();
        assert_eq!(value.magnitude(), 123);
        assert_eq!(value.unit(), TimeUnit::Millis);
    }

    #[test]
    fn test_duration_default_unit_is_seconds() {
        let value = DURATION.process(Some("123")).unwrap().unwrap();
        assert_eq!(value.magnitude(), 123);
        assert_eq!(value.unit(), TimeUnit::Secs);
    }

    #[test]
    fn test_duration_blank_is_absent() {
        assert_eq!(DURATION.process(Some("")).unwrap(), None);
        assert_eq!(DURATION.process(None).unwrap(), None);
    }

    #[test]
    fn test_duration_longest_suffix_wins() {
        // "1000ns" must parse as nanos, not as "1000n" + seconds
        let value = DURATION.process(Some("1000ns")).unwrap().unwrap();
        assert_eq!(value.unit(), TimeUnit::Nanos);
        assert_eq!(value.magnitude(), 1000);
    }

    #[test]
    fn test_duration_whitespace_between_number_and_suffix() {
        let value = DURATION.process(Some("3 d")).unwrap().unwrap();
        assert_eq!(value.magnitude(), 3);
        assert_eq!(value.unit(), TimeUnit::Days);

        let value = DURATION.process(Some(" 0ms ")).unwrap().unwrap();
        assert_eq!(value, Quantity::new(0, TimeUnit::Millis));
    }

    #[test]
    fn test_duration_case_insensitive_suffix() {
        let value = DURATION.process(Some("100MS")).unwrap().unwrap();
        assert_eq!(value.unit(), TimeUnit::Millis);

        let strict = QuantityType::case_sensitive(TimeUnit::Secs);
        assert!(strict.process(Some("100MS")).is_err());
        assert_eq!(
            strict.process(Some("100ms")).unwrap(),
            Some(Quantity::new(100, TimeUnit::Millis))
        );
    }

    #[test]
    fn test_duration_max_magnitude() {
        let raw = format!("{}d", i64::MAX);
        let value = DURATION.process(Some(&raw)).unwrap().unwrap();
        assert_eq!(value.magnitude(), i64::MAX);
        assert_eq!(value.unit(), TimeUnit::Days);
    }

    #[test]
    fn test_duration_malformed_number() {
        assert!(matches!(
            DURATION.process(Some("abc")).unwrap_err(),
            ConfigError::Format { .. }
        ));
        // a bare suffix has an empty numeric part
        assert!(matches!(
            DURATION.process(Some("ms")).unwrap_err(),
            ConfigError::Format { .. }
        ));
    }

    #[test]
    fn test_duration_rejects_negative() {
        assert_eq!(
            DURATION.process(Some("720s")).unwrap(),
            Some(Quantity::new(720, TimeUnit::Secs))
        );
        let err = DURATION.process(Some("-720s")).unwrap_err();
        assert!(matches!(err, ConfigError::Constraint { .. }));
        assert!(err.to_string().contains("cannot be negative"));
    }

    #[test]
    fn test_duration_sub_millisecond_negative_truncates_to_zero() {
        // -720ns is 0ms after the canonical conversion, so the bound passes
        let value = DURATION.process(Some("-720ns")).unwrap().unwrap();
        assert_eq!(value, Quantity::new(-720, TimeUnit::Nanos));
    }

    #[test]
    fn test_bounded_duration() {
        let ty = DurationType::bounded(
            Quantity::new(1, TimeUnit::Secs),
            Quantity::new(1, TimeUnit::Mins),
        )
        .unwrap();
        assert!(ty.process(Some("30s")).is_ok());
        assert!(ty.process(Some("60000ms")).is_ok());
        assert!(matches!(
            ty.process(Some("61s")).unwrap_err(),
            ConfigError::Constraint { .. }
        ));
        assert!(matches!(
            ty.process(Some("999ms")).unwrap_err(),
            ConfigError::Constraint { .. }
        ));
    }

    #[test]
    fn test_bounded_duration_bad_order() {
        assert!(matches!(
            DurationType::bounded(
                Quantity::new(2, TimeUnit::Mins),
                Quantity::new(90, TimeUnit::Secs),
            ),
            Err(ConfigError::Construction(_))
        ));
    }

    #[test]
    fn test_descriptions() {
        assert!(DURATION.description().starts_with("A non-negative"));
        let ty = QuantityType::new(TimeUnit::Secs);
        assert_eq!(
            ty.description(),
            "A base-10 integer amount with an optional unit suffix from \
             { ns, ms, s, m, h, d }. If no unit suffix is specified, 's' is assumed.",
        );
    }
}
