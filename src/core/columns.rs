//! Spreadsheet column addressing.
//!
//! Columns are labelled in bijective base-26: `A..Z`, then `AA..AZ`, `BA..`,
//! and so on. Plain `b'A' + n` arithmetic only works for the first 26 columns.

/// Convert a zero-based column index into its alphabetic label.
///
/// ```rust
/// use ffl_playoffs::core::col_to_label;
///
/// assert_eq!(col_to_label(0), "A");
/// assert_eq!(col_to_label(25), "Z");
/// assert_eq!(col_to_label(26), "AA");
/// assert_eq!(col_to_label(701), "ZZ");
/// ```
pub fn col_to_label(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index as i128;
    while n >= 0 {
        letters.push(char::from(b'A' + (n % 26) as u8));
        n = n / 26 - 1;
    }
    letters.iter().rev().collect()
}

/// Convert an alphabetic column label back into a zero-based index.
///
/// Accepts lowercase letters. Returns `None` for empty input, non-letters, or
/// labels too long to fit in `usize`.
pub fn col_from_label(label: &str) -> Option<usize> {
    if label.is_empty() {
        return None;
    }
    let mut n: usize = 0;
    for c in label.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let digit = (c.to_ascii_uppercase() as u8 - b'A') as usize + 1;
        n = n.checked_mul(26)?.checked_add(digit)?;
    }
    Some(n - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_letter_columns() {
        assert_eq!(col_to_label(0), "A");
        assert_eq!(col_to_label(1), "B");
        assert_eq!(col_to_label(25), "Z");
    }

    #[test]
    fn test_double_letter_columns() {
        assert_eq!(col_to_label(26), "AA");
        assert_eq!(col_to_label(27), "AB");
        assert_eq!(col_to_label(51), "AZ");
        assert_eq!(col_to_label(52), "BA");
        assert_eq!(col_to_label(701), "ZZ");
        assert_eq!(col_to_label(702), "AAA");
    }

    #[test]
    fn test_labels_are_a_bijection_through_zz() {
        let mut seen = std::collections::HashSet::new();
        for index in 0..=701 {
            let label = col_to_label(index);
            assert!(seen.insert(label.clone()), "duplicate label {label}");
            assert_eq!(col_from_label(&label), Some(index));
        }
        assert_eq!(seen.len(), 702);
    }

    #[test]
    fn test_labels_are_ordered_shortlex() {
        for index in 0..701 {
            let a = col_to_label(index);
            let b = col_to_label(index + 1);
            assert!(
                a.len() < b.len() || (a.len() == b.len() && a < b),
                "{a} should precede {b}"
            );
        }
    }

    #[test]
    fn test_naive_ascii_offset_diverges_past_z() {
        // 'A' + 26 is '[', not a column label
        assert_ne!(char::from(b'A' + 26).to_string(), col_to_label(26));
    }

    #[test]
    fn test_col_from_label_rejects_garbage() {
        assert_eq!(col_from_label(""), None);
        assert_eq!(col_from_label("A1"), None);
        assert_eq!(col_from_label("aa"), Some(26));
    }
}
