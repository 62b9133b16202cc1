const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
// 53 mantissa bits are exhausted after eleven base-36 digits.
const FRACTION_DIGITS: usize = 11;

/// Clock and randomness feeding card identities.
pub trait SeedSource {
    /// Wall-clock milliseconds since the epoch.
    fn now_ms(&self) -> f64;
    /// Uniform value in `[0, 1)`.
    fn random_unit(&mut self) -> f64;
}

/// Builds `<timestamp>-<index>-<fragment>`. Index keeps identities from one
/// batch distinct even when the clock does not advance between cards.
pub fn card_seed<S: SeedSource + ?Sized>(source: &mut S, index: usize) -> String {
    let timestamp = source.now_ms().max(0.0).floor() as u64;
    let fragment = base36_fraction(source.random_unit());
    format!("{timestamp}-{index}-{fragment}")
}

/// Digits after the radix point of `value` written in base 36.
pub fn base36_fraction(value: f64) -> String {
    let mut rest = if value.is_finite() {
        value.fract().abs()
    } else {
        0.0
    };
    let mut out = String::with_capacity(FRACTION_DIGITS);
    while rest > 0.0 && out.len() < FRACTION_DIGITS {
        rest *= 36.0;
        let digit = rest.floor();
        rest -= digit;
        out.push(BASE36_DIGITS[digit as usize % 36] as char);
    }
    if out.is_empty() {
        out.push('0');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed {
        now: f64,
        unit: f64,
    }

    impl SeedSource for Fixed {
        fn now_ms(&self) -> f64 {
            self.now
        }

        fn random_unit(&mut self) -> f64 {
            self.unit
        }
    }

    #[test]
    fn fraction_digits_follow_radix() {
        assert_eq!(base36_fraction(0.5), "i");
        assert_eq!(base36_fraction(0.25), "9");
        assert_eq!(base36_fraction(0.125), "4i");
        assert_eq!(base36_fraction(0.75), "r");
    }

    #[test]
    fn zero_and_non_finite_collapse_to_zero_digit() {
        assert_eq!(base36_fraction(0.0), "0");
        assert_eq!(base36_fraction(f64::NAN), "0");
        assert_eq!(base36_fraction(f64::INFINITY), "0");
    }

    #[test]
    fn fragment_is_bounded() {
        let fragment = base36_fraction(0.123_456_789_012_345);
        assert!(!fragment.is_empty());
        assert!(fragment.len() <= FRACTION_DIGITS);
        assert!(fragment.bytes().all(|b| BASE36_DIGITS.contains(&b)));
    }

    #[test]
    fn seed_layout_is_time_index_fragment() {
        let mut source = Fixed {
            now: 1_700_000_000_123.9,
            unit: 0.5,
        };
        assert_eq!(card_seed(&mut source, 4), "1700000000123-4-i");
    }
}
