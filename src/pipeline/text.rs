//! Field normalizers applied to every retained export row.
//!
//! All functions here are pure so the row parser can be tested field by field.

/// Lower-case the whole string, then capitalise the first letter of each word.
///
/// A word starts after any whitespace character, so `"o'BRIEN-SMITH"` becomes
/// `"O'brien-smith"`.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut at_word_start = true;
    for ch in value.chars() {
        if at_word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
        at_word_start = ch.is_whitespace();
    }
    out
}

/// Upper-case a postcode and replace hyphens with spaces (`"sw1a-1aa"` -> `"SW1A 1AA"`).
pub fn format_postcode(value: &str) -> String {
    value.replace('-', " ").to_uppercase()
}

/// Lower-case an email address.
pub fn format_email(value: &str) -> String {
    value.to_lowercase()
}

/// Split a full name into `(first_names, last_name)`.
///
/// The name is split on single spaces; the final token is the surname and the
/// rest are joined back with single spaces. A one-word name has no first names.
pub fn split_name(full_name: &str) -> (String, String) {
    let mut tokens: Vec<&str> = full_name.split(' ').collect();
    let last_name = tokens.pop().unwrap_or_default().to_string();
    (tokens.join(" "), last_name)
}

/// Extract the first integer or decimal number from a price field.
///
/// Scans left to right for the first ASCII digit, then takes the longest run of
/// digits optionally followed by a `.` and more digits. Currency symbols, codes
/// and anything after the number are dropped. Returns `None` when the field holds
/// no digit at all.
///
/// ```
/// use ebay2hermes::pipeline::extract_price;
///
/// assert_eq!(extract_price("£12.50").as_deref(), Some("12.50"));
/// assert_eq!(extract_price("GBP 7").as_deref(), Some("7"));
/// assert_eq!(extract_price("abc"), None);
/// ```
pub fn extract_price(value: &str) -> Option<String> {
    let bytes = value.as_bytes();
    let start = bytes.iter().position(u8::is_ascii_digit)?;

    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }

    // Only take the point if at least one digit follows it
    if end + 1 < bytes.len() && bytes[end] == b'.' && bytes[end + 1].is_ascii_digit() {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }

    Some(value[start..end].to_string())
}
