// File: dataguard-core/src/validators.rs
//! Programmatic checks that complement the regex rules.
//!
//! There are two kinds of check here. Shape guards ([`is_valid_ssn_shape`],
//! [`has_ipv6_edges`]) express constraints a regex look-around would normally carry; a
//! guard rejection makes the matcher resume scanning one character later. Validators
//! ([`is_valid_credit_card`]) run after matching and discard the whole span on failure.
//!
//! License: MIT OR APACHE 2.0

/// Validates a number using the Luhn algorithm.
///
/// Digits are read right to left; every second digit (odd index from the right) is
/// doubled, with 9 subtracted when the result exceeds 9. The number is valid when the
/// total is divisible by 10.
///
/// # Returns
///
/// `false` if `num_str` is empty or contains anything other than ASCII digits.
pub fn is_valid_luhn(num_str: &str) -> bool {
    if num_str.is_empty() {
        return false;
    }

    let mut sum = 0;
    for (i, c) in num_str.chars().rev().enumerate() {
        let Some(mut digit) = c.to_digit(10) else { return false; };

        if i % 2 == 1 {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
    }

    sum % 10 == 0
}

/// Validates a credit card candidate as matched in the text.
///
/// Interior spaces and hyphens are stripped first. Any other non-digit character makes
/// the candidate invalid rather than being silently dropped.
pub fn is_valid_credit_card(candidate: &str) -> bool {
    let digits: String = candidate
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    is_valid_luhn(&digits)
}

/// Checks the area/group/serial exclusions of a US SSN.
///
/// Accepts `NNN-NN-NNNN` or nine contiguous digits. The area may not be `000`, `666` or
/// `900`-`999`, the group may not be `00` and the serial may not be `0000`.
pub fn is_valid_ssn_shape(ssn: &str) -> bool {
    let (area, group, serial) = match ssn.len() {
        11 => {
            let mut parts = ssn.split('-');
            let (Some(area), Some(group), Some(serial), None) = (parts.next(), parts.next(), parts.next(), parts.next()) else {
                return false;
            };
            (area, group, serial)
        }
        9 if ssn.is_ascii() => (&ssn[0..3], &ssn[3..5], &ssn[5..9]),
        _ => return false,
    };

    if area.len() != 3 || group.len() != 2 || serial.len() != 4 {
        return false;
    }
    if ![area, group, serial].iter().all(|p| p.bytes().all(|b| b.is_ascii_digit())) {
        return false;
    }

    let Ok(area_num) = area.parse::<u16>() else { return false; };
    let Ok(group_num) = group.parse::<u8>() else { return false; };
    let Ok(serial_num) = serial.parse::<u16>() else { return false; };

    let invalid_area = area_num == 0 || area_num == 666 || area_num >= 900;
    !(invalid_area || group_num == 0 || serial_num == 0)
}

/// `true` for a 1-4 character run of hex digits.
fn is_hextet(run: &str) -> bool {
    (1..=4).contains(&run.len()) && run.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Checks that an IPv6 candidate at `text[start..end]` is a whole address.
///
/// The full eight-hextet form is already bounded by `\b` in the pattern and always passes.
/// A compressed form can begin or end with `::`, where `\b` cannot express the boundary,
/// so it must not touch a word character. A neighbouring colon is allowed unless the
/// address visibly continues past it: a hextet before a leading colon, or a hex digit or
/// another colon after a trailing one. `IPv6:fe80::1` and `fe80::1: down` both pass.
pub fn has_ipv6_edges(text: &str, start: usize, end: usize) -> bool {
    if !text[start..end].contains("::") {
        return true;
    }

    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let before = &text[..start];
    let after = &text[end..];

    let before_ok = match before.chars().next_back() {
        None => true,
        Some(':') => {
            let head = &before[..before.len() - 1];
            let run_start = head
                .char_indices()
                .rev()
                .take_while(|&(_, c)| is_word(c))
                .last()
                .map_or(head.len(), |(i, _)| i);
            !head.ends_with(':') && !is_hextet(&head[run_start..])
        }
        Some(c) => !is_word(c),
    };

    let after_ok = match after.chars().next() {
        None => true,
        Some(':') => !after[1..].starts_with(|c: char| c == ':' || c.is_ascii_hexdigit()),
        Some(c) => !is_word(c),
    };

    before_ok && after_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luhn_known_valid_numbers() {
        for n in ["4532015112830366", "5425233430109903", "4111111111111111", "6011000990139424", "79927398713"] {
            assert!(is_valid_luhn(n), "{} should pass", n);
        }
    }

    #[test]
    fn test_luhn_single_digit_change_fails() {
        assert!(is_valid_luhn("4532015112830366"));
        assert!(!is_valid_luhn("4532015112830367"));
        assert!(!is_valid_luhn("4532148803436468"));
    }

    #[test]
    fn test_luhn_rejects_the_unbalanced_sample() {
        // 4532148803436467 sums to 73 under the algorithm above.
        assert!(!is_valid_luhn("4532148803436467"));
    }

    #[test]
    fn test_luhn_rejects_non_digits_and_empty() {
        assert!(!is_valid_luhn(""));
        assert!(!is_valid_luhn("45a2"));
    }

    #[test]
    fn test_credit_card_strips_separators() {
        assert!(is_valid_credit_card("4532-0151-1283-0366"));
        assert!(is_valid_credit_card("4532 0151 1283 0366"));
        assert!(!is_valid_credit_card("4111-1111-1111-1112"));
    }

    #[test]
    fn test_credit_card_rejects_other_characters() {
        assert!(!is_valid_credit_card("4532.0151.1283.0366"));
        assert!(!is_valid_credit_card("- -"));
    }

    #[test]
    fn test_ssn_shape_accepts_grouped_and_ungrouped() {
        assert!(is_valid_ssn_shape("123-45-6789"));
        assert!(is_valid_ssn_shape("078051120"));
    }

    #[test]
    fn test_ssn_shape_exclusions() {
        for bad in ["000-12-3456", "666-12-3456", "901-12-3456", "999-12-3456", "123-00-4567", "123-45-0000", "000123456", "123004567"] {
            assert!(!is_valid_ssn_shape(bad), "{} should be rejected", bad);
        }
        assert!(is_valid_ssn_shape("899-12-3456"));
    }

    #[test]
    fn test_ssn_shape_rejects_wrong_layout() {
        assert!(!is_valid_ssn_shape("12-345-6789"));
        assert!(!is_valid_ssn_shape("1234567890"));
    }

    #[test]
    fn test_ipv6_edges() {
        let text = "at ::1 and x::1 and fe80:: end";
        assert!(has_ipv6_edges(text, 3, 6));
        assert!(!has_ipv6_edges(text, 12, 15));
        assert!(has_ipv6_edges(text, 20, 26));
        assert!(has_ipv6_edges("::1", 0, 3));
    }

    #[test]
    fn test_ipv6_edges_allow_label_and_trailing_colons() {
        let full = "IPv6:2001:0db8:85a3:0000:0000:8a2e:0370:7334";
        assert!(has_ipv6_edges(full, 5, full.len()));
        assert!(has_ipv6_edges("src:fe80::1 dst", 4, 11));
        assert!(has_ipv6_edges("fe80::1: down", 0, 7));
        assert!(has_ipv6_edges("at fe80::1:", 3, 10));
        assert!(has_ipv6_edges("fe80::1:zz", 0, 7));
    }

    #[test]
    fn test_ipv6_edges_reject_continuing_address() {
        assert!(!has_ipv6_edges("beef:fe80::1", 5, 12));
        assert!(!has_ipv6_edges("1:::1", 2, 5));
        assert!(!has_ipv6_edges("fe80::1:2g", 0, 7));
        assert!(!has_ipv6_edges("fe80:::1", 0, 6));
    }
}
