// Text helpers for user-facing message formatting

/// Title-cases a string the way the inventory and catch messages expect:
/// every letter following a non-letter starts a new word and is uppercased,
/// the rest are lowercased. Underscores are kept as-is, so
/// `tapu_koko` becomes `Tapu_Koko`; replace them with spaces first when a
/// natural display name is wanted.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

/// Display name for a pokemon: underscores become spaces, then title case.
pub fn pokemon_display_name(name: &str) -> String {
    title_case(&name.replace('_', " "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_keeps_underscores() {
        assert_eq!(title_case("tapu_koko"), "Tapu_Koko");
        assert_eq!(title_case("pikachu"), "Pikachu");
        assert_eq!(title_case("MR_MIME"), "Mr_Mime");
    }

    #[test]
    fn test_title_case_digits_end_words() {
        assert_eq!(title_case("porygon2"), "Porygon2");
        assert_eq!(title_case("abc2def"), "Abc2Def");
    }

    #[test]
    fn test_pokemon_display_name() {
        assert_eq!(pokemon_display_name("tapu_koko"), "Tapu Koko");
        assert_eq!(pokemon_display_name("ho_oh"), "Ho Oh");
        assert_eq!(pokemon_display_name("eevee"), "Eevee");
    }
}
