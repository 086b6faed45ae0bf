//! Best-effort textual-to-numeric coercions with defined fallbacks.
//!
//! Vendor files mix integer codes, locale decimals, spreadsheet error
//! tokens, and blanks in the same columns. Every coercion here falls back
//! to zero rather than failing the row.

/// Spreadsheet lookup-error token that shows up in `EAN` columns.
pub const NA_TOKEN: &str = "#N/D";

/// Coerces a product code: `#N/D` and blanks become 0, anything else is
/// parsed as an integer (float-looking values truncate), unparseable
/// values become 0.
pub fn coerce_code(value: &str) -> i64 {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == NA_TOKEN {
        return 0;
    }
    parse_integer(trimmed).unwrap_or(0)
}

/// Coerces a count written with a locale decimal comma: commas become
/// dots, the result is parsed as a number and truncated to an integer,
/// unparseable values become 0.
pub fn coerce_count(value: &str) -> i64 {
    let replaced = value.trim().replace(',', ".");
    if replaced.is_empty() {
        return 0;
    }
    parse_integer(&replaced).unwrap_or(0)
}

fn parse_integer(value: &str) -> Option<i64> {
    value
        .parse::<i64>()
        .ok()
        .or_else(|| value.parse::<f64>().ok().map(|v| v.trunc() as i64))
}
