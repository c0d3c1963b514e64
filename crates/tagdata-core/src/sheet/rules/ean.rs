//! EAN-13 barcode extraction and checksum validation.

use super::patterns::BARCODE;

/// Extract the first standalone 13-digit run from the text.
///
/// The candidate is returned as-is; checksum validation is a separate
/// concern so callers can disable it.
pub fn extract_barcode(text: &str) -> Option<String> {
    BARCODE.captures(text).map(|caps| caps[1].to_string())
}

/// Validate an EAN-13 barcode using the check-digit algorithm.
///
/// The code must be exactly 13 decimal digits. The checksum weights the
/// first 12 digits alternately 1 and 3 (even 0-indexed position -> 1); the
/// expected 13th digit is `(10 - sum % 10) % 10`. Wrong length or non-digit
/// input is simply invalid, never an error.
pub fn validate_ean13(code: &str) -> bool {
    if code.len() != 13 || !code.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    let digits: Vec<u32> = code.chars().filter_map(|c| c.to_digit(10)).collect();

    let sum: u32 = digits
        .iter()
        .take(12)
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { *d } else { 3 * d })
        .sum();

    let check = (10 - (sum % 10)) % 10;
    check == digits[12]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_known_valid_ean13() {
        assert!(validate_ean13("4006381333931"));
        assert!(validate_ean13("5901234123457"));
    }

    #[test]
    fn test_validate_altered_check_digit() {
        assert!(!validate_ean13("4006381333932"));
        assert!(!validate_ean13("4006381333930"));
    }

    #[test]
    fn test_validate_wrong_length() {
        assert!(!validate_ean13(""));
        assert!(!validate_ean13("400638133393"));
        assert!(!validate_ean13("40063813339311"));
    }

    #[test]
    fn test_validate_non_digits() {
        assert!(!validate_ean13("40063813339a1"));
        assert!(!validate_ean13("4006-38133393"));
    }

    #[test]
    fn test_extract_barcode_first_match() {
        let text = "EAN 5901234123457 alt 4006381333931";
        assert_eq!(extract_barcode(text), Some("5901234123457".to_string()));
    }

    #[test]
    fn test_extract_barcode_ignores_longer_runs() {
        // 14 digits is not a standalone 13-digit run
        assert_eq!(extract_barcode("59012341234571"), None);
    }

    #[test]
    fn test_extract_barcode_absent() {
        assert_eq!(extract_barcode("no digits here"), None);
    }
}
