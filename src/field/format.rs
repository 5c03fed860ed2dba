/// Number of digits a complete phone number carries.
pub const PHONE_DIGITS: usize = 10;

/// Rewrites `input` into the `###-###-####` mask.
///
/// Non-digits are dropped, digits past the tenth are ignored, and a separator
/// is only emitted when a digit follows it.
pub fn phone_mask(input: &str) -> String {
    let mut masked = String::with_capacity(PHONE_DIGITS + 2);
    for (index, digit) in input
        .chars()
        .filter(char::is_ascii_digit)
        .take(PHONE_DIGITS)
        .enumerate()
    {
        if index == 3 || index == 6 {
            masked.push('-');
        }
        masked.push(digit);
    }
    masked
}

pub fn digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_number_is_masked() {
        assert_eq!(phone_mask("1234567890"), "123-456-7890");
    }

    #[test]
    fn partial_numbers_have_no_trailing_separator() {
        assert_eq!(phone_mask(""), "");
        assert_eq!(phone_mask("1"), "1");
        assert_eq!(phone_mask("123"), "123");
        assert_eq!(phone_mask("1234"), "123-4");
        assert_eq!(phone_mask("123456"), "123-456");
        assert_eq!(phone_mask("1234567"), "123-456-7");
    }

    #[test]
    fn non_digits_are_stripped_before_masking() {
        assert_eq!(phone_mask("(123) 456-78x90"), "123-456-7890");
        assert_eq!(phone_mask("abc"), "");
    }

    #[test]
    fn digits_beyond_ten_are_capped() {
        assert_eq!(phone_mask("123456789012345"), "123-456-7890");
    }

    #[test]
    fn masking_is_stable_on_masked_text() {
        let once = phone_mask("5551234567");
        assert_eq!(phone_mask(&once), once);
    }
}
