//! `%g`-style float formatting used by the [`Display`][fmt::Display] impls.

use std::fmt;

use crate::Float;

/// Significant digits printed when the formatter does not specify a precision.
const DEFAULT_PRECISION: usize = 6;

/// Displays a [`Float`] in general notation with a fixed number of significant digits.
///
/// Values whose decimal exponent is below -4 or at least the precision use scientific notation
/// with a signed, two-digit exponent (`1e+07`); all others use fixed notation. Trailing zeros are
/// removed in both cases. The precision defaults to 6 and can be overridden with the formatter's
/// precision flag. Width, fill and sign flags are honored like they are for integers.
pub(crate) struct General(pub Float);

impl fmt::Display for General {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = f64::from(self.0);
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION).max(1);
        let digits = if value.is_nan() {
            "nan".to_string()
        } else if value.is_infinite() {
            "inf".to_string()
        } else {
            general(value.abs(), precision)
        };
        f.pad_integral(value.is_nan() || value.is_sign_positive(), "", &digits)
    }
}

fn general(value: f64, precision: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    // Rounding to `precision` digits may bump the exponent, so take it from the rounded value.
    let sci = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return sci;
    };

    if exp < -4 || exp >= precision as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_zeros(mantissa), sign, exp.unsigned_abs())
    } else {
        let decimals = (precision as i32 - 1 - exp) as usize;
        trim_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
