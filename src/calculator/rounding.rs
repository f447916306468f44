//! Fixed-point rounding for monetary amounts
//!
//! Rounding works on the exact decimal expansion of the `f64`, so a value like
//! `1.005` (stored as `1.00499999999999989...`) rounds down while `1.235`
//! (stored as `1.23500000000000009...`) rounds up. Exact ties such as `0.125`
//! round away from zero.

/// Decimal places used for every monetary figure
pub const MONEY_DECIMALS: u32 = 2;

/// Fractional digits needed to print any finite f64 exactly (smallest subnormal is 2^-1074)
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Magnitude from which fixed-point formatting falls back to exponent form
const FIXED_POINT_LIMIT: f64 = 1e21;

/// Round `value` to `decimals` fractional digits
///
/// Equivalent to formatting the number with `decimals` fixed fractional digits
/// and parsing the text back. `NaN` and infinities are returned as-is, as are
/// magnitudes of `1e21` and above.
pub fn round(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() || value.abs() >= FIXED_POINT_LIMIT {
        return value;
    }

    let decimals = decimals as usize;
    if decimals >= EXACT_FRACTION_DIGITS {
        return value;
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(decimals))
        .collect();
    let mut int_len = int_part.len();

    let round_up = frac_part
        .as_bytes()
        .get(decimals)
        .is_some_and(|&d| d >= b'5');

    if round_up && !increment_digits(&mut digits) {
        digits.insert(0, b'1');
        int_len += 1;
    }

    let mut text = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        text.push('-');
    }
    for (i, &d) in digits.iter().enumerate() {
        if i == int_len {
            text.push('.');
        }
        text.push(d as char);
    }

    text.parse::<f64>().unwrap_or(value)
}

/// Round to the standard two monetary decimals
pub fn round2(value: f64) -> f64 {
    round(value, MONEY_DECIMALS)
}

/// Add one unit in the last place of an ASCII digit string.
/// Returns false when the carry runs off the front (e.g. "999").
fn increment_digits(digits: &mut [u8]) -> bool {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return true;
        }
    }
    false
}
