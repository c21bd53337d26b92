const MAX_PLAIN_EXPONENT: i32 = 20;
const MIN_PLAIN_EXPONENT: i32 = -6;

/// Renders a numeric value as base-10 text the way a browser prints numbers.
///
/// Integral values drop the fractional part, `-0` prints as `0`, and
/// non-finite values print as `NaN`, `Infinity` or `-Infinity`. Magnitudes
/// of `1e21` and above or below `1e-6` use exponent form (`1e+21`, `1.5e-7`).
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }

    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    match exponent.parse::<i32>() {
        Ok(exponent) if exponent > MAX_PLAIN_EXPONENT => format!("{mantissa}e+{exponent}"),
        Ok(exponent) if exponent < MIN_PLAIN_EXPONENT => format!("{mantissa}e{exponent}"),
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::format_number;

    #[test]
    fn integral_values_have_no_fraction() {
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(-7.0), "-7");
    }

    #[test]
    fn fractional_values_use_shortest_form() {
        assert_eq!(format_number(0.1), "0.1");
        assert_eq!(format_number(2.5), "2.5");
    }

    #[test]
    fn large_and_tiny_magnitudes_use_exponent_form() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e22), "-2.5e+22");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
    }

    #[test]
    fn exponent_thresholds_stay_plain() {
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(123456.0), "123456");
    }

    #[test]
    fn special_values() {
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }
}
