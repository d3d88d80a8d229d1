//! Decimal half-up rounding for display.

/// Formats `value` with exactly `places` decimals, rounding half away from
/// zero on the shortest decimal representation of the number.
///
/// Working on the decimal text rather than the binary value means 2.45
/// rounds to "2.5" even though its nearest `f64` is slightly below 2.45.
///
/// # Examples
///
/// ```
/// use ccip_profile::domain::report::round_half_up;
///
/// assert_eq!(round_half_up(2.45, 1), "2.5");
/// assert_eq!(round_half_up(2.449999, 1), "2.4");
/// assert_eq!(round_half_up(3.6, 2), "3.60");
/// ```
pub fn round_half_up(value: f64, places: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let repr = format!("{}", value.abs());
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(places))
        .map(|b| b - b'0')
        .collect();

    let round_up = frac_part
        .as_bytes()
        .get(places)
        .map_or(false, |digit| *digit >= b'5');

    if round_up {
        let mut idx = digits.len();
        loop {
            if idx == 0 {
                digits.insert(0, 1);
                break;
            }
            idx -= 1;
            if digits[idx] == 9 {
                digits[idx] = 0;
            } else {
                digits[idx] += 1;
                break;
            }
        }
    }

    let int_len = digits.len() - places;
    let mut out = String::with_capacity(digits.len() + 2);
    if value.is_sign_negative() && digits.iter().any(|d| *d != 0) {
        out.push('-');
    }
    out.extend(digits[..int_len].iter().map(|d| char::from(b'0' + d)));
    if places > 0 {
        out.push('.');
        out.extend(digits[int_len..].iter().map(|d| char::from(b'0' + d)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_decimal_is_half_up_not_bankers() {
        assert_eq!(round_half_up(2.449999, 1), "2.4");
        assert_eq!(round_half_up(2.45, 1), "2.5");
        assert_eq!(round_half_up(2.55, 1), "2.6");
        assert_eq!(round_half_up(2.25, 1), "2.3");
    }

    #[test]
    fn pads_short_representations() {
        assert_eq!(round_half_up(4.8, 1), "4.8");
        assert_eq!(round_half_up(1.0, 2), "1.00");
        assert_eq!(round_half_up(3.6, 2), "3.60");
        assert_eq!(round_half_up(5.0, 0), "5");
    }

    #[test]
    fn carries_across_digits() {
        assert_eq!(round_half_up(9.96, 1), "10.0");
        assert_eq!(round_half_up(0.995, 2), "1.00");
        assert_eq!(round_half_up(4.5, 0), "5");
    }

    #[test]
    fn two_decimals_for_score_cells() {
        assert_eq!(round_half_up(18.0 / 5.0, 2), "3.60");
        assert_eq!(round_half_up(2.125, 2), "2.13");
        assert_eq!(round_half_up(2.124, 2), "2.12");
    }

    #[test]
    fn negative_values_round_away_from_zero() {
        assert_eq!(round_half_up(-2.45, 1), "-2.5");
        assert_eq!(round_half_up(-0.04, 1), "0.0");
    }
}
