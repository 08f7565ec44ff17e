/// Round to a fixed number of decimal places using the exact decimal expansion
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{:.*}", places, value).parse().unwrap_or(value)
}

/// Shortest round-trip form of a float, always with a fractional part (`0.0`, `0.1176`).
///
/// Exponents carry an explicit sign and at least two digits (`5e-05`, `1e+16`).
pub fn float_repr(value: f64) -> String {
    let repr = format!("{:?}", value);
    let Some((mantissa, exponent)) = repr.split_once('e') else {
        return repr;
    };

    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{}e{}{:0>2}", mantissa, sign, digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(10.0 / 85.0, 4), 0.1176);
        assert_eq!(round_to(50.0 / 85.0, 8), 0.58823529);
        assert_eq!(round_to(100.0 / 85.0, 8), 1.17647059);
        assert_eq!(round_to(85.0 / 85.0, 4), 1.0);
    }

    #[test]
    fn test_float_repr() {
        assert_eq!(float_repr(0.0), "0.0");
        assert_eq!(float_repr(50.0), "50.0");
        assert_eq!(float_repr(0.58823529), "0.58823529");
    }

    #[test]
    fn test_float_repr_exponents() {
        assert_eq!(float_repr(0.00005), "5e-05");
        assert_eq!(float_repr(0.000015), "1.5e-05");
        assert_eq!(float_repr(1e16), "1e+16");
        assert_eq!(float_repr(1.5e300), "1.5e+300");
        assert_eq!(float_repr(-2.5e-7), "-2.5e-07");
    }
}
