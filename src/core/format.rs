//! Number formatting shared by the display and the history log.

/// Precision used when no configuration overrides it.
pub const DEFAULT_PRECISION: usize = 6;

/// Format a number with the default precision.
///
/// The value is rendered in fixed notation, trailing zeros are stripped and
/// a dangling decimal point is removed, so integral values carry no point.
///
/// # Example
///
/// ```rust
/// use abacus::core::format_number;
///
/// assert_eq!(format_number(5.0), "5");
/// assert_eq!(format_number(1.230000), "1.23");
/// assert_eq!(format_number(0.1 + 0.2), "0.3");
/// ```
pub fn format_number(value: f64) -> String {
    format_with_precision(value, DEFAULT_PRECISION)
}

/// Format a number with an explicit number of fractional digits.
pub fn format_with_precision(value: f64, precision: usize) -> String {
    let mut text = format!("{:.*}", precision, value);
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_have_no_point() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-42.0), "-42");
        assert_eq!(format_number(100.0), "100");
    }

    #[test]
    fn trailing_zeros_are_stripped() {
        assert_eq!(format_number(1.230000), "1.23");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-0.125), "-0.125");
    }

    #[test]
    fn rounds_to_six_digits() {
        assert_eq!(format_number(1.0 / 3.0), "0.333333");
        assert_eq!(format_number(2.0 / 3.0), "0.666667");
        assert_eq!(format_number(0.0000004), "0");
    }

    #[test]
    fn zeros_before_the_point_survive() {
        assert_eq!(format_number(10.5), "10.5");
        assert_eq!(format_number(1000.000001), "1000.000001");
    }

    #[test]
    fn non_finite_values_render_verbatim() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn custom_precision() {
        assert_eq!(format_with_precision(1.23456, 2), "1.23");
        assert_eq!(format_with_precision(2.999, 2), "3");
        assert_eq!(format_with_precision(7.6, 0), "8");
    }
}
