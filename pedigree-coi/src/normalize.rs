//! Name and registration-number normalization for identity matching.
//!
//! Pedigree data arrives from document transcription and hand entry, so the
//! same animal shows up with varying casing, punctuation, apostrophe glyphs
//! and cattery-prefix separators. Matching works on normalized forms only.

/// Letters outside ASCII that are kept verbatim: the Scandinavian letters
/// that occur in FIFe cattery prefixes and cat names.
const NORDIC_LETTERS: [char; 5] = ['å', 'ä', 'ö', 'æ', 'ø'];

///
/// Normalize a cat name for comparison
///
/// Lower-cases, unifies apostrophe glyphs to `'`, maps `@` to `*` (both are
/// used as the cattery-prefix separator), replaces every other character that
/// is not alphanumeric, Nordic, an apostrophe or an asterisk with a space,
/// then collapses runs of whitespace and trims.
///
pub fn normalize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_space = false;

    for c in name.to_lowercase().chars() {
        let kept = match c {
            '`' | '´' | '\u{2019}' => Some('\''),
            '\'' | '*' => Some(c),
            '@' => Some('*'),
            c if c.is_ascii_alphanumeric() => Some(c),
            c if NORDIC_LETTERS.contains(&c) => Some(c),
            _ => None,
        };

        match kept {
            Some(c) => {
                if pending_space && !out.is_empty() {
                    out.push(' ');
                }
                pending_space = false;
                out.push(c);
            }
            None => pending_space = true,
        }
    }

    out
}

///
/// Strip a registration number down to its alphanumeric core, lower-cased
///
/// `(N) LO 212345`, `N LO212345` and `n-lo-212345` all clean to the same
/// string.
///
pub fn clean_registration(registration: &str) -> String {
    registration
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("Mons", "mons")]
    #[case("  GIC  Solberg's   Mons  ", "gic solberg's mons")]
    #[case("Solberg`s Mons", "solberg's mons")]
    #[case("Solberg´s Mons", "solberg's mons")]
    #[case("Solberg\u{2019}s Mons", "solberg's mons")]
    #[case("Amor@Katzenhof", "amor*katzenhof")]
    #[case("Amor*Katzenhof", "amor*katzenhof")]
    #[case("Bjørnebo Måne, JW", "bjørnebo måne jw")]
    #[case("Kätzchen (import)", "kätzchen import")]
    #[case("", "")]
    #[case("---", "")]
    fn test_normalize_name(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize_name(raw), expected);
    }

    #[rstest]
    #[case("(N) LO 212345", "nlo212345")]
    #[case("n-lo-212345", "nlo212345")]
    #[case("FIFe LO 12", "fifelo12")]
    #[case("", "")]
    fn test_clean_registration(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(clean_registration(raw), expected);
    }
}
