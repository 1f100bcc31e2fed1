//! Display formatting for timestamps and pixel counts.
//!
//! Timestamps arrive as ISO-8601 strings and are formatted with the
//! browser's locale machinery; native builds pass the raw string through.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a backend timestamp for display, e.g. "1/15/2025, 10:30:00 AM".
/// Falls back to the raw string when the value does not parse as a date.
pub fn format_timestamp(iso: &str) -> String {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsValue;

        let date = js_sys::Date::new(&JsValue::from_str(iso));
        if date.get_time().is_nan() {
            return iso.to_owned();
        }
        String::from(date.to_locale_string("en-US", &JsValue::UNDEFINED))
    }
    #[cfg(not(feature = "csr"))]
    {
        iso.to_owned()
    }
}

/// Group a count with thousands separators: 1500000 -> "1,500,000".
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
