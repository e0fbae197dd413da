//! Input mask for Chilean mobile numbers (`+56 9 XXXX XXXX`).

const SUBSCRIBER_LEN: usize = 8;

/// Formats arbitrary user input as a Chilean mobile number.
///
/// Keeps digits only, strips the `56` country code, the `09` trunk prefix
/// or a bare leading `9`, and rebuilds the display value progressively as
/// the user types. Returns an empty string when no digits remain.
pub fn format(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    let subscriber = subscriber_digits(&digits);

    match subscriber.len() {
        0 => String::new(),
        1..=4 => format!("+56 9 {subscriber}"),
        _ => format!("+56 9 {} {}", &subscriber[..4], &subscriber[4..]),
    }
}

/// Reduces a digit string to at most 8 subscriber digits.
fn subscriber_digits(digits: &str) -> &str {
    let rest = if let Some(stripped) = digits.strip_prefix("56") {
        // Country code, optionally followed by the mobile prefix.
        stripped.strip_prefix('9').unwrap_or(stripped)
    } else if let Some(stripped) = digits.strip_prefix("09") {
        // National trunk prefix.
        stripped
    } else if digits.len() == 9 && digits.starts_with('9') {
        &digits[1..]
    } else {
        digits
    };

    &rest[..rest.len().min(SUBSCRIBER_LEN)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(format(""), "");
        assert_eq!(format("+ ()-"), "");
        assert_eq!(format("abc"), "");
    }

    #[test]
    fn strips_country_code_and_mobile_prefix() {
        assert_eq!(format("+56 9 1234 5678"), "+56 9 1234 5678");
        assert_eq!(format("56912345678"), "+56 9 1234 5678");
        assert_eq!(format("5612345678"), "+56 9 1234 5678");
    }

    #[test]
    fn strips_trunk_prefix() {
        assert_eq!(format("0912345678"), "+56 9 1234 5678");
    }

    #[test]
    fn strips_bare_mobile_prefix_on_nine_digits() {
        assert_eq!(format("912345678"), "+56 9 1234 5678");
        // Eight digits starting with 9 are already a subscriber number.
        assert_eq!(format("91234567"), "+56 9 9123 4567");
    }

    #[test]
    fn grows_progressively_while_typing() {
        assert_eq!(format("1"), "+56 9 1");
        assert_eq!(format("1234"), "+56 9 1234");
        assert_eq!(format("12345"), "+56 9 1234 5");
        assert_eq!(format("1234567"), "+56 9 1234 567");
    }

    #[test]
    fn truncates_to_subscriber_length() {
        assert_eq!(format("123456789999"), "+56 9 1234 5678");
        assert_eq!(format("+56 9 1234 56789"), "+56 9 1234 5678");
    }

    #[test]
    fn idempotent_on_canonical_output() {
        for raw in ["912345678", "0987654321", "56 9 1111 2222", "4321"] {
            let once = format(raw);
            assert_eq!(format(&once), once);
        }
    }

    #[test]
    fn output_shape_is_canonical() {
        for raw in ["987654321", "56998765432", "099876543", "12345678901234"] {
            let formatted = format(raw);
            let rest = formatted.strip_prefix("+56 9 ").unwrap();
            for block in rest.split(' ') {
                assert!(!block.is_empty() && block.len() <= 4);
                assert!(block.chars().all(|c| c.is_ascii_digit()));
            }
        }
    }
}
