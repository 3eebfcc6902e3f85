use pinyin::ToPinyin;

/// Turns a name into romanized syllables, in reading order.
pub trait Romanizer {
    fn syllables(&self, name: &str) -> Vec<String>;
}

/// Han characters become one toneless pinyin syllable each; every run of
/// other characters becomes a single syllable, transliterated to ASCII.
#[derive(Debug, Default, Clone, Copy)]
pub struct PinyinRomanizer;

impl Romanizer for PinyinRomanizer {
    fn syllables(&self, name: &str) -> Vec<String> {
        let mut syllables = Vec::new();
        let mut run = String::new();

        for c in name.chars() {
            match c.to_pinyin() {
                Some(py) => {
                    flush_run(&mut run, &mut syllables);
                    syllables.push(py.plain().to_string());
                },
                None => run.push(c),
            }
        }
        flush_run(&mut run, &mut syllables);

        syllables
    }
}

fn flush_run(run: &mut String, syllables: &mut Vec<String>) {
    if run.is_empty() {
        return;
    }
    // unknown glyphs are dropped rather than rendered as "[?]"
    let latin = deunicode::deunicode_with_tofu(run.as_str(), "");
    let latin = latin.trim();
    if !latin.is_empty() {
        syllables.push(latin.to_string());
    }
    run.clear();
}

/// Uppercased first character of the first syllable. `None` only when there are no syllables.
pub fn initial(romanizer: &dyn Romanizer, name: &str) -> Option<char> {
    romanizer
        .syllables(name)
        .first()
        .and_then(|s| s.chars().next())
        .and_then(|c| c.to_uppercase().next())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn han_characters_become_one_syllable_each() {
        assert_eq!(PinyinRomanizer.syllables("张学友"), vec!["zhang", "xue", "you"]);
    }

    #[test]
    fn latin_runs_pass_through() {
        assert_eq!(PinyinRomanizer.syllables("Adele"), vec!["Adele"]);
        assert_eq!(PinyinRomanizer.syllables("S.H.E"), vec!["S.H.E"]);
    }

    #[test]
    fn mixed_scripts_split_on_han_boundaries() {
        assert_eq!(PinyinRomanizer.syllables("G.E.M.邓紫棋"), vec!["G.E.M.", "deng", "zi", "qi"]);
    }

    #[test]
    fn other_scripts_are_transliterated() {
        let syllables = PinyinRomanizer.syllables("Земфира");
        assert_eq!(syllables.len(), 1);
        assert!(syllables[0].starts_with('Z'));
    }

    #[test]
    fn empty_and_blank_names_have_no_syllables() {
        assert!(PinyinRomanizer.syllables("").is_empty());
        assert!(PinyinRomanizer.syllables("   ").is_empty());
    }

    #[test]
    fn initial_is_uppercased() {
        assert_eq!(initial(&PinyinRomanizer, "张学友"), Some('Z'));
        assert_eq!(initial(&PinyinRomanizer, "adele"), Some('A'));
        assert_eq!(initial(&PinyinRomanizer, "五月天"), Some('W'));
    }

    #[test]
    fn initial_keeps_leading_punctuation_and_digits() {
        assert_eq!(initial(&PinyinRomanizer, "(乐队)"), Some('('));
        assert_eq!(initial(&PinyinRomanizer, "-Adele"), Some('-'));
        assert_eq!(initial(&PinyinRomanizer, "1987乐队"), Some('1'));
    }

    #[test]
    fn initial_needs_a_syllable() {
        assert_eq!(initial(&PinyinRomanizer, ""), None);
        assert_eq!(initial(&PinyinRomanizer, "  "), None);
    }
}
