//! Value normalizers for the textual encodings used in listing exports.
//!
//! All three are total: any input yields either a value or `None`, never a
//! panic or an error.

/// Keep only digits and decimal points.
fn numeric_part(raw: &str) -> String {
    raw.chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.')
        .collect()
}

/// Normalize a price string to whole rupees.
///
/// Handles the two encodings seen in exports: "₹ 5.5 Lakh" and "₹ 4,50,000".
/// A "Lakh" marker scales the cleaned value by 100,000. Fractional results
/// are truncated, not rounded, to stay byte-compatible with the structured
/// files earlier runs produced.
pub fn clean_price(raw: &str) -> Option<i64> {
    let cleaned = numeric_part(raw);
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    let value: f64 = cleaned.parse().ok()?;
    let rupees = if raw.contains("Lakh") {
        value * 100_000.0
    } else {
        value
    };
    Some(rupees.trunc() as i64)
}

/// Normalize a distance string like "45,000 kms" to kilometers.
pub fn clean_km_driven(raw: &str) -> Option<i64> {
    raw.replace("kms", "")
        .replace(',', "")
        .trim()
        .parse::<i64>()
        .ok()
}

/// Normalize an efficiency string like "19.7 kmpl" or "25.4 km/kg".
pub fn clean_mileage(raw: &str) -> Option<f64> {
    numeric_part(raw).parse::<f64>().ok()
}
