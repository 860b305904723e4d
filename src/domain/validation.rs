//! Field validation for catalog records.
//!
//! Pure functions, called by the service layer before anything reaches the
//! database. ISBN checking covers both the 10- and 13-digit forms with
//! their respective check-digit formulas.

use chrono::Datelike;

/// Strip everything that is not a digit. ISBNs arrive with hyphens and
/// spaces in the wild; the stored identifier is the bare digit string.
pub fn normalize_isbn(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// True iff the normalized ISBN is 10 or 13 digits long and its check
/// digit holds. Never panics; bad input is just `false`.
pub fn is_valid_isbn(raw: &str) -> bool {
    let digits: Vec<u32> = normalize_isbn(raw)
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();

    match digits.len() {
        10 => {
            let sum: u32 = digits[..9]
                .iter()
                .enumerate()
                .map(|(i, d)| d * (10 - i as u32))
                .sum();
            (11 - sum % 11) % 11 == digits[9]
        }
        13 => {
            let sum: u32 = digits[..12]
                .iter()
                .enumerate()
                .map(|(i, d)| if i % 2 == 0 { *d } else { d * 3 })
                .sum();
            (10 - sum % 10) % 10 == digits[12]
        }
        _ => false,
    }
}

/// Non-empty after trimming surrounding whitespace.
pub fn is_valid_text_field(s: &str) -> bool {
    !s.trim().is_empty()
}

/// Publication year must fall between 1000 and the current calendar year.
pub fn is_valid_year(year: i32) -> bool {
    (1000..=chrono::Utc::now().year()).contains(&year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_isbn13_passes() {
        assert!(is_valid_isbn("9780143127550"));
        assert!(is_valid_isbn("9780451524935"));
    }

    #[test]
    fn valid_isbn10_passes() {
        assert!(is_valid_isbn("0306406152"));
    }

    #[test]
    fn checksum_mismatch_fails() {
        // Right length, wrong check digit
        assert!(!is_valid_isbn("1234567890"));
        assert!(!is_valid_isbn("9780143127551"));
    }

    #[test]
    fn wrong_length_fails() {
        assert!(!is_valid_isbn(""));
        assert!(!is_valid_isbn("12345"));
        assert!(!is_valid_isbn("97801431275501"));
    }

    #[test]
    fn hyphens_and_spaces_are_stripped() {
        assert!(is_valid_isbn("978-0-14-312755-0"));
        assert!(is_valid_isbn("0 306 40615 2"));
        assert_eq!(normalize_isbn("978-0-14-312755-0"), "9780143127550");
    }

    #[test]
    fn check_digit_x_is_not_accepted() {
        // Stripping the X leaves 9 digits, which is not a valid length
        assert!(!is_valid_isbn("097522980X"));
    }

    #[test]
    fn text_fields_must_have_content() {
        assert!(is_valid_text_field("Dune"));
        assert!(!is_valid_text_field(""));
        assert!(!is_valid_text_field("   "));
        assert!(!is_valid_text_field("\t\n"));
    }

    #[test]
    fn year_bounds() {
        assert!(!is_valid_year(999));
        assert!(is_valid_year(1000));
        assert!(is_valid_year(1965));
        let current = chrono::Utc::now().year();
        assert!(is_valid_year(current));
        assert!(!is_valid_year(current + 1));
    }
}
