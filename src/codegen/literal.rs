//! Literal rendering shared by both target conventions.
//!
//! The conventions differ only in their quote character; the escaping rules
//! are otherwise identical and applied uniformly here so the two mapping
//! tables cannot drift apart. Numbers always use invariant, period-decimal
//! formatting.

use crate::models::ParamValue;

/// Escape a string for embedding in a quoted literal of the given convention.
///
/// Backslashes are doubled first, then the quote character is escaped, then
/// newline, carriage-return and tab become their two-character sequences.
pub fn escape_string(value: &str, quote: char) -> String {
    value
        .replace('\\', "\\\\")
        .replace(quote, &format!("\\{}", quote))
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Render a string as a complete quoted literal.
pub fn quote_string(value: &str, quote: char) -> String {
    format!("{}{}{}", quote, escape_string(value, quote), quote)
}

/// Render a number by its natural decimal representation.
///
/// Integral values render without a trailing decimal point; non-integral
/// values keep their fractional digits.
pub fn render_number(value: f64) -> String {
    // i64 keeps integral values exact up to 2^53, well past realistic bounds
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= i64::MAX as f64 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Render a boolean as the conventions' shared lowercase literal token.
pub fn render_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Render any scalar parameter as a literal argument for the convention
/// using the given quote character.
pub fn render_value(value: &ParamValue, quote: char) -> String {
    match value {
        ParamValue::Str(s) => quote_string(s, quote),
        ParamValue::Number(n) => render_number(*n),
        ParamValue::Bool(b) => render_bool(*b).to_string(),
    }
}

/// Escape a regular-expression pattern for embedding in a convention's
/// regex-construction idiom: backslashes doubled, then the quote character
/// escaped. Control characters are left alone; they are part of the pattern.
pub fn escape_pattern(pattern: &str, quote: char) -> String {
    pattern
        .replace('\\', "\\\\")
        .replace(quote, &format!("\\{}", quote))
}

/// The textual form of a pattern parameter, before escaping.
pub fn pattern_text(value: &ParamValue) -> String {
    match value {
        ParamValue::Str(s) => s.clone(),
        ParamValue::Number(n) => render_number(*n),
        ParamValue::Bool(b) => render_bool(*b).to_string(),
    }
}
