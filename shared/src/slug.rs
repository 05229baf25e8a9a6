//! Latin URL slugs for Persian article titles.

/// Persian letters and the Latin spelling used in URLs.
fn transliterate(c: char) -> Option<&'static str> {
    Some(match c {
        'ا' => "a",
        'ب' => "b",
        'پ' => "p",
        'ت' => "t",
        'ث' => "s",
        'ج' => "j",
        'چ' => "ch",
        'ح' => "h",
        'خ' => "kh",
        'د' => "d",
        'ذ' => "z",
        'ر' => "r",
        'ز' => "z",
        'ژ' => "zh",
        'س' => "s",
        'ش' => "sh",
        'ص' => "s",
        'ض' => "z",
        'ط' => "t",
        'ظ' => "z",
        'ع' => "a",
        'غ' => "gh",
        'ف' => "f",
        'ق' => "gh",
        'ک' => "k",
        'گ' => "g",
        'ل' => "l",
        'م' => "m",
        'ن' => "n",
        'و' => "v",
        'ه' => "h",
        'ی' => "y",
        ' ' => "-",
        _ => return None,
    })
}

/// URL slug for an article title: Persian letters transliterated, spaces
/// turned into dashes, everything outside `[a-z0-9-]` dropped, dash runs
/// collapsed and trimmed.
pub fn generate_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut buf = [0u8; 4];
    for c in title.to_lowercase().chars() {
        let piece = match transliterate(c) {
            Some(latin) => latin,
            None => c.encode_utf8(&mut buf),
        };
        for out in piece.chars() {
            if !(out.is_ascii_lowercase() || out.is_ascii_digit() || out == '-') {
                continue;
            }
            if out == '-' && (slug.is_empty() || slug.ends_with('-')) {
                continue;
            }
            slug.push(out);
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::generate_slug;

    #[test]
    fn transliterates_persian() {
        assert_eq!(generate_slug("سانسور پیامک"), "sansvr-pyamk");
    }

    #[test]
    fn keeps_latin_and_digits() {
        assert_eq!(generate_slug("Rust 2024 Guide"), "rust-2024-guide");
    }

    #[test]
    fn collapses_and_trims_dashes() {
        assert_eq!(generate_slug("  hello -- world!  "), "hello-world");
        assert_eq!(generate_slug("؟!"), "");
    }
}
