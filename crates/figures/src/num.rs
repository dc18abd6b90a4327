//! `%g`-style rendering of reals (6 significant digits, trailing zeros dropped).
//!
//! This is the number format of the text wire forms: `1`, `0.5`, `0.888889`,
//! `2.37764`, `1e-07`, `1.5e+06`.

use std::fmt;

const SIGNIFICANT: usize = 6;

/// Display adapter for a real in the wire format.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Num(pub f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = self.0;
        if x.is_nan() {
            return f.write_str("nan");
        }
        if x.is_infinite() {
            return f.write_str(if x > 0.0 { "inf" } else { "-inf" });
        }
        if x == 0.0 {
            return f.write_str(if x.is_sign_negative() { "-0" } else { "0" });
        }
        // Exponent after rounding to the significant digits decides the style.
        let sci = format!("{:.*e}", SIGNIFICANT - 1, x);
        let Some((mantissa, exp)) = sci.split_once('e') else {
            return f.write_str(&sci);
        };
        let exp: i32 = exp.parse().unwrap_or(0);
        if exp < -4 || exp >= SIGNIFICANT as i32 {
            let sign = if exp < 0 { '-' } else { '+' };
            write!(f, "{}e{}{:02}", trim_zeros(mantissa), sign, exp.abs())
        } else {
            let decimals = (SIGNIFICANT as i32 - 1 - exp) as usize;
            let fixed = format!("{:.*}", decimals, x);
            f.write_str(trim_zeros(&fixed))
        }
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
