use unicode_general_category::{GeneralCategory, get_general_category};

/// Characters allowed in the local part besides letters and digits.
/// They may not lead, trail, or appear next to each other.
const SPECIAL_CHARS: [char; 3] = ['.', '-', '_'];

/// Minimum length of the top-level domain (e.g. "cc", "com").
const MIN_TLD_LEN: usize = 2;

/// Structural email validation: `local@domain.tld`.
///
/// This is intentionally narrower than RFC 5322 (no quoted local parts, no
/// IP literals, no comments). The local part is letters and digits plus
/// `.`, `-` and `_`; the domain is a dot-separated list of hostname labels
/// ending in an all-letter TLD of at least two characters.
///
/// A letter is a Basic Multilingual Plane character in a Unicode letter
/// category (Lu, Ll, Lt, Lm, Lo) and a digit one in Nd. Other numerics such
/// as `²`, `½` or `ⅻ` are rejected.
pub fn is_email_valid(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if domain.contains('@') {
        return false;
    }

    is_local_part_valid(local) && is_domain_valid(domain)
}

fn is_letter(c: char) -> bool {
    is_bmp(c)
        && matches!(
            get_general_category(c),
            GeneralCategory::UppercaseLetter
                | GeneralCategory::LowercaseLetter
                | GeneralCategory::TitlecaseLetter
                | GeneralCategory::ModifierLetter
                | GeneralCategory::OtherLetter
        )
}

fn is_letter_or_digit(c: char) -> bool {
    is_letter(c) || (is_bmp(c) && matches!(get_general_category(c), GeneralCategory::DecimalNumber))
}

fn is_bmp(c: char) -> bool {
    u32::from(c) <= 0xFFFF
}

fn is_special(c: char) -> bool {
    SPECIAL_CHARS.contains(&c)
}

fn is_local_part_valid(local: &str) -> bool {
    let (Some(first), Some(last)) = (local.chars().next(), local.chars().last()) else {
        return false;
    };
    if is_special(first) || is_special(last) {
        return false;
    }

    let allowed = local.chars().all(|c| is_letter_or_digit(c) || is_special(c));
    let doubled_special = local
        .chars()
        .zip(local.chars().skip(1))
        .any(|(a, b)| is_special(a) && is_special(b));

    allowed && !doubled_special
}

fn is_domain_valid(domain: &str) -> bool {
    if !domain.contains('.')
        || domain.starts_with('.')
        || domain.ends_with('.')
        || domain.contains("..")
    {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || !labels.iter().all(|label| is_label_valid(label)) {
        return false;
    }

    labels.last().is_some_and(|tld| {
        tld.chars().count() >= MIN_TLD_LEN && tld.chars().all(is_letter)
    })
}

fn is_label_valid(label: &str) -> bool {
    !label.is_empty()
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| is_letter_or_digit(c) || c == '-')
}
