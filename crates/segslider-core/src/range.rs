//! Value range with clamped current value
//!
//! Invariant: `minimum <= value <= maximum` after every mutation. Moving one
//! bound across the other drags the other bound along, collapsing the range
//! to a single point.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    minimum: f64,
    maximum: f64,
    value: f64,
}

impl Default for ValueRange {
    fn default() -> Self {
        Self {
            minimum: 0.0,
            maximum: 1.0,
            value: 0.5,
        }
    }
}

impl ValueRange {
    /// Build a range, normalizing the inputs the same way the setters do
    pub fn new(minimum: f64, maximum: f64, value: f64) -> Self {
        let mut range = Self::default();
        range.set_minimum(minimum);
        range.set_maximum(maximum);
        range.set_value(value);
        range
    }

    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Distance between the bounds; zero for a collapsed range
    pub fn span(&self) -> f64 {
        self.maximum - self.minimum
    }

    pub fn is_degenerate(&self) -> bool {
        self.maximum == self.minimum
    }

    /// Clamp `value` into the range and store it.
    /// Returns true if the stored value changed.
    pub fn set_value(&mut self, value: f64) -> bool {
        if value.is_nan() {
            return false;
        }
        let value = value.clamp(self.minimum, self.maximum);
        if value == self.value {
            return false;
        }
        self.value = value;
        true
    }

    /// Set the lower bound. A minimum above the maximum moves the maximum too.
    /// Returns true if the value had to move.
    pub fn set_minimum(&mut self, minimum: f64) -> bool {
        if !minimum.is_finite() {
            return false;
        }
        self.minimum = minimum;
        if self.maximum < minimum {
            self.maximum = minimum;
        }
        self.reclamp()
    }

    /// Set the upper bound. A maximum below the minimum moves the minimum too.
    /// Returns true if the value had to move.
    pub fn set_maximum(&mut self, maximum: f64) -> bool {
        if !maximum.is_finite() {
            return false;
        }
        self.maximum = maximum;
        if self.minimum > maximum {
            self.minimum = maximum;
        }
        self.reclamp()
    }

    fn reclamp(&mut self) -> bool {
        let clamped = self.value.clamp(self.minimum, self.maximum);
        if clamped == self.value {
            return false;
        }
        self.value = clamped;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_range() {
        let range = ValueRange::default();
        assert_eq!(range.minimum(), 0.0);
        assert_eq!(range.maximum(), 1.0);
        assert_eq!(range.value(), 0.5);
    }

    #[test]
    fn test_value_is_clamped() {
        let mut range = ValueRange::new(0.0, 10.0, 5.0);
        assert!(range.set_value(42.0));
        assert_eq!(range.value(), 10.0);
        assert!(range.set_value(-1.0));
        assert_eq!(range.value(), 0.0);
        assert!(!range.set_value(-3.0));
    }

    #[test]
    fn test_minimum_above_maximum_collapses() {
        let mut range = ValueRange::new(0.0, 10.0, 5.0);
        assert!(range.set_minimum(20.0));
        assert_eq!(range.maximum(), 20.0);
        assert_eq!(range.minimum(), 20.0);
        assert_eq!(range.value(), 20.0);
        assert!(range.is_degenerate());
    }

    #[test]
    fn test_maximum_below_minimum_collapses() {
        let mut range = ValueRange::new(0.0, 10.0, 5.0);
        assert!(range.set_maximum(-4.0));
        assert_eq!(range.minimum(), -4.0);
        assert_eq!(range.value(), -4.0);
    }

    #[test]
    fn test_bound_change_inside_range_keeps_value() {
        let mut range = ValueRange::new(0.0, 10.0, 5.0);
        assert!(!range.set_minimum(2.0));
        assert!(!range.set_maximum(8.0));
        assert_eq!(range.value(), 5.0);
    }

    #[test]
    fn test_non_finite_input_ignored() {
        let mut range = ValueRange::new(0.0, 10.0, 5.0);
        assert!(!range.set_value(f64::NAN));
        assert!(!range.set_minimum(f64::NEG_INFINITY));
        assert!(!range.set_maximum(f64::NAN));
        assert_eq!(range, ValueRange::new(0.0, 10.0, 5.0));
    }

    proptest! {
        #[test]
        fn prop_value_always_clamped(
            min in -1e6f64..1e6,
            span in 0f64..1e6,
            v in -1e7f64..1e7,
        ) {
            let mut range = ValueRange::new(min, min + span, min);
            range.set_value(v);
            prop_assert_eq!(range.value(), v.clamp(range.minimum(), range.maximum()));
        }

        #[test]
        fn prop_bounds_stay_ordered(a in -1e6f64..1e6, b in -1e6f64..1e6, v in -1e6f64..1e6) {
            let mut range = ValueRange::new(0.0, 1.0, v);
            range.set_minimum(a);
            range.set_maximum(b);
            prop_assert!(range.minimum() <= range.maximum());
            prop_assert!(range.value() >= range.minimum() && range.value() <= range.maximum());
        }
    }
}
