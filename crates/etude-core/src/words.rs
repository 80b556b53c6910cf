/// Capitalizes every `n`th word of a space-delimited sentence.
///
/// Words are counted from 1, so `n = 3` touches the 3rd, 6th, 9th, ... word.
/// Only the first character is upper-cased (Unicode-aware, so it may expand
/// to more than one character); everything else, including word order and
/// count, is preserved. A zero stride returns the sentence unchanged.
///
/// # Examples
///
/// ```
/// use etude_core::capitalize_every_nth;
///
/// assert_eq!(
///     capitalize_every_nth(3, "The quick brown fox jumped over the lazy dog."),
///     "The quick Brown fox jumped Over the lazy Dog.",
/// );
/// ```
pub fn capitalize_every_nth(n: usize, sentence: &str) -> String {
    if n == 0 {
        return sentence.to_string();
    }

    sentence
        .split(' ')
        .enumerate()
        .map(|(position, word)| {
            if (position + 1) % n == 0 {
                capitalize(word)
            } else {
                word.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalizes_every_third_word() {
        assert_eq!(
            capitalize_every_nth(3, "The quick brown fox jumped over the lazy dog."),
            "The quick Brown fox jumped Over the lazy Dog.",
        );
    }

    #[test]
    fn test_stride_one_capitalizes_everything() {
        assert_eq!(capitalize_every_nth(1, "a b c"), "A B C");
    }

    #[test]
    fn test_zero_stride_is_identity() {
        let sentence = "left exactly as it was";
        assert_eq!(capitalize_every_nth(0, sentence), sentence);
    }

    #[test]
    fn test_stride_beyond_word_count_is_identity() {
        assert_eq!(capitalize_every_nth(10, "only four words here"), "only four words here");
    }

    #[test]
    fn test_empty_sentence() {
        assert_eq!(capitalize_every_nth(2, ""), "");
    }

    #[test]
    fn test_already_capitalized_words_are_stable() {
        assert_eq!(capitalize_every_nth(1, "Already Up"), "Already Up");
    }

    #[test]
    fn test_word_count_is_preserved() {
        let sentence = "one two three four five six";
        let result = capitalize_every_nth(2, sentence);
        assert_eq!(result.split(' ').count(), sentence.split(' ').count());
        assert_eq!(result, "one Two three Four five Six");
    }

    #[test]
    fn test_unicode_first_character() {
        assert_eq!(capitalize_every_nth(1, "über alles"), "Über Alles");
    }
}
