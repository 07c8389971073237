//! Scientific-notation value parser.
//!
//! Turns decorated quantity strings from the catalogue or from user input
//! (`"5.9722×10²⁴ кг"`, `"6.674e-11"`, `"2.5*10^3"`) into positive `f64`
//! magnitudes. The accepted grammar after normalization is strictly
//! `<decimal> [ * <decimal> ^ <integer> ]` — there is no general expression
//! evaluation anywhere in this module.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// A parsed positive magnitude together with the string it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQuantity {
    pub value: f64,
    pub source: String,
}

/// The input did not contain a single positive numeric value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not parse a numeric value out of {input:?}")]
pub struct ParseFailure {
    pub input: String,
}

static NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+-]?\d+(?:\.\d+)?(?:[eE][+-]?\d+)?)(?:\*(\d+(?:\.\d+)?)\^([+-]?\d+))?$")
        .expect("number grammar regex")
});

fn superscript_to_ascii(c: char) -> Option<char> {
    match c {
        '⁰' => Some('0'),
        '¹' => Some('1'),
        '²' => Some('2'),
        '³' => Some('3'),
        '⁴' => Some('4'),
        '⁵' => Some('5'),
        '⁶' => Some('6'),
        '⁷' => Some('7'),
        '⁸' => Some('8'),
        '⁹' => Some('9'),
        '⁻' => Some('-'),
        '⁺' => Some('+'),
        _ => None,
    }
}

/// Normalization pass over the raw string: digits, decimal separators and
/// operators are kept, unit suffixes and other decoration dropped. A run of
/// unicode superscript characters becomes `^` plus the ASCII-mapped run, and
/// normalization stops once that run ends — the exponent is the final grammar
/// component, so trailing decorated text must not leak digits into it.
fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_superscript = false;
    for c in raw.chars() {
        if let Some(mapped) = superscript_to_ascii(c) {
            if !in_superscript {
                out.push('^');
                in_superscript = true;
            }
            out.push(mapped);
            continue;
        }
        if in_superscript {
            break;
        }
        match c {
            '0'..='9' | '.' | 'e' | 'E' | '+' | '-' | '^' => out.push(c),
            ',' => out.push('.'),
            '×' | '*' => out.push('*'),
            _ => {}
        }
    }
    out
}

/// Parses a decorated scientific-notation string into a positive magnitude.
///
/// Accepted shapes: plain decimals (`"5772"`), e-notation (`"5.9722e24"`),
/// and mantissa-times-power-of-ten with either a caret or unicode
/// superscript exponent (`"6.674×10⁻¹¹"`). Commas are tolerated as decimal
/// separators. Anything else is a [`ParseFailure`] carrying the original
/// input.
pub fn parse_scientific(raw: &str) -> Result<ParsedQuantity, ParseFailure> {
    let failure = || ParseFailure {
        input: raw.to_string(),
    };

    let normalized = normalize(raw);
    let caps = NUMBER_RE.captures(&normalized).ok_or_else(failure)?;
    let mantissa_str = caps.get(1).map(|m| m.as_str()).unwrap_or_default();

    let value = match (caps.get(2), caps.get(3)) {
        (Some(base), Some(exp)) => {
            if base.as_str() == "10" && !mantissa_str.contains(['e', 'E']) {
                // ×10ⁿ folds into one float literal so the superscript and
                // plain-exponent spellings of the same quantity agree
                // bit-for-bit.
                format!("{}e{}", mantissa_str, exp.as_str())
                    .parse::<f64>()
                    .map_err(|_| failure())?
            } else {
                let mantissa: f64 = mantissa_str.parse().map_err(|_| failure())?;
                let base: f64 = base.as_str().parse().map_err(|_| failure())?;
                let exponent: i32 = exp.as_str().parse().map_err(|_| failure())?;
                mantissa * base.powi(exponent)
            }
        }
        _ => mantissa_str.parse::<f64>().map_err(|_| failure())?,
    };

    if !value.is_finite() || value <= 0.0 {
        return Err(failure());
    }

    Ok(ParsedQuantity {
        value,
        source: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(raw: &str) -> f64 {
        parse_scientific(raw).unwrap().value
    }

    #[test]
    fn plain_decimals_parse_as_is() {
        assert_eq!(value("5772"), 5772.0);
        assert_eq!(value("25.05"), 25.05);
    }

    #[test]
    fn e_notation_is_accepted() {
        assert_eq!(value("5.9722e24"), 5.9722e24);
        assert_eq!(value("6.674E-11"), 6.674e-11);
    }

    #[test]
    fn unit_suffixes_are_discarded() {
        assert_eq!(value("5.9722×10²⁴ кг"), 5.9722e24);
        assert_eq!(value("6.957×10⁸ м"), 6.957e8);
        assert_eq!(value("365.25 дней"), 365.25);
    }

    #[test]
    fn superscript_exponents_match_plain_literals() {
        for (decorated, plain) in [
            ("1.5×10²", 1.5e2),
            ("9.9×10⁹", 9.9e9),
            ("2.5×10⁻³", 2.5e-3),
            ("7.3×10¹²", 7.3e12),
            ("6.674×10⁻¹¹", 6.674e-11),
        ] {
            assert_eq!(value(decorated), plain);
        }
    }

    #[test]
    fn caret_exponents_are_accepted() {
        assert_eq!(value("2.5*10^3"), 2500.0);
        assert_eq!(value("1.5×10^6"), 1.5e6);
    }

    #[test]
    fn comma_is_a_decimal_separator() {
        assert_eq!(value("5,9722e24"), 5.9722e24);
    }

    #[test]
    fn trailing_text_cannot_extend_the_exponent() {
        assert_eq!(value("3.828×10²⁶ Вт (1 L☉)"), 3.828e26);
    }

    #[test]
    fn empty_and_digit_free_inputs_fail() {
        assert!(parse_scientific("").is_err());
        assert!(parse_scientific("кг").is_err());
        assert!(parse_scientific("Высокая (данные MESSENGER)").is_err());
    }

    #[test]
    fn non_positive_values_fail() {
        assert!(parse_scientific("-5.0").is_err());
        assert!(parse_scientific("0").is_err());
    }

    #[test]
    fn leftover_punctuation_fails_instead_of_guessing() {
        // "1 а.е." keeps the dots of the unit abbreviation and no longer
        // looks like a number.
        assert!(parse_scientific("1 а.е.").is_err());
    }

    #[test]
    fn failure_carries_the_original_input() {
        let err = parse_scientific("нет числа").unwrap_err();
        assert_eq!(err.input, "нет числа");
    }
}
