use std::collections::BTreeMap;

/// Map full-width numerals and punctuation to their ASCII equivalents.
/// Everything else passes through unchanged.
pub(crate) fn to_half_width(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '０'..='９' => char::from_u32(c as u32 - '０' as u32 + '0' as u32).unwrap(),
            '，' => ',',
            '．' => '.',
            _ => c,
        })
        .collect()
}

/// Normalize a raw amount field into a non-negative integer yen value.
///
/// Empty input counts as zero. Full-width digits and thousands-separator
/// commas are accepted; a decimal part is truncated, not rounded. More
/// than one decimal point is rejected.
pub(crate) fn normalize_amount(raw: &str) -> Result<u64, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }

    let cleaned = to_half_width(trimmed).replace(',', "");

    let decimal_points = cleaned.matches('.').count();
    let digits = cleaned.replacen('.', "", 1);
    if decimal_points > 1 || digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err("amount must be numeric".to_string());
    }

    let value: f64 = cleaned
        .parse()
        .map_err(|_| "amount must be numeric".to_string())?;
    if value < 0.0 {
        return Err("amount must be zero or greater".to_string());
    }

    Ok(value as u64)
}

/// Per-field validation errors, keyed by a stable field identifier such
/// as `card_15`. Recording a success clears only that field's error;
/// other fields keep theirs.
#[derive(Debug, Default)]
pub(crate) struct FieldErrors {
    errors: BTreeMap<String, String>,
}

impl FieldErrors {
    pub(crate) fn new() -> FieldErrors {
        FieldErrors::default()
    }

    /// Record the outcome of normalizing one field. Returns the amount
    /// to use for the field: the parsed value, or zero on error.
    pub(crate) fn record(&mut self, field_id: &str, result: Result<u64, String>) -> u64 {
        match result {
            Ok(amount) => {
                self.errors.remove(field_id);
                amount
            }
            Err(message) => {
                self.errors.insert(field_id.to_string(), message);
                0
            }
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.errors.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.errors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(normalize_amount(""), Ok(0));
        assert_eq!(normalize_amount("   "), Ok(0));
    }

    #[test]
    fn test_full_width_digits_and_comma() {
        assert_eq!(normalize_amount("１，２００"), Ok(1200));
        assert_eq!(normalize_amount("５２０００"), Ok(52000));
    }

    #[test]
    fn test_comma_stripping() {
        assert_eq!(normalize_amount("34,000"), Ok(34000));
        assert_eq!(normalize_amount("1,234,567"), Ok(1234567));
    }

    #[test]
    fn test_non_numeric() {
        assert_eq!(normalize_amount("abc"), Err("amount must be numeric".to_string()));
        assert_eq!(normalize_amount("12a"), Err("amount must be numeric".to_string()));
    }

    #[test]
    fn test_negative_is_a_format_error() {
        // '-' is not a digit, so this fails the numeric check rather
        // than the zero-or-greater check
        assert_eq!(normalize_amount("-5"), Err("amount must be numeric".to_string()));
    }

    #[test]
    fn test_decimal_truncation() {
        assert_eq!(normalize_amount("12.9"), Ok(12));
        assert_eq!(normalize_amount("0.99"), Ok(0));
    }

    #[test]
    fn test_lone_decimal_point() {
        assert_eq!(normalize_amount("."), Err("amount must be numeric".to_string()));
    }

    #[test]
    fn test_multiple_decimal_points() {
        assert_eq!(normalize_amount("1.2.3"), Err("amount must be numeric".to_string()));
    }

    #[test]
    fn test_field_error_isolation() {
        let mut errors = FieldErrors::new();

        assert_eq!(errors.record("lunch_1", normalize_amount("abc")), 0);
        assert_eq!(errors.record("dinner_1", normalize_amount("xyz")), 0);
        assert_eq!(errors.len(), 2);

        // Fixing one field clears only its own error
        assert_eq!(errors.record("lunch_1", normalize_amount("1200")), 1200);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.iter().next().unwrap().0, "dinner_1");
    }
}
