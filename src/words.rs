//! Word counting.
//!
//! A word is a maximal run of non-whitespace characters, matching
//! [`str::split_whitespace`].

/// Count whitespace-delimited tokens in `text`.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Count whitespace-delimited tokens in a stream of characters.
///
/// Gives the same answer as [`count_words`] without materialising a string,
/// which lets the editor count straight off its rope.
pub fn count_words_chars(chars: impl IntoIterator<Item = char>) -> usize {
    let mut count = 0;
    let mut in_word = false;
    for ch in chars {
        if ch.is_whitespace() {
            in_word = false;
        } else if !in_word {
            in_word = true;
            count += 1;
        }
    }
    count
}

/// Status-bar text for a word count.
pub fn word_count_label(count: usize) -> String {
    format!("Words: {count}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_tokens_separated_by_runs_of_whitespace() {
        assert_eq!(count_words("hello   world\n"), 2);
    }

    #[test]
    fn test_empty_and_blank_text_has_no_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("  "), 0);
        assert_eq!(count_words("\n\t \n"), 0);
    }

    #[test]
    fn test_leading_and_trailing_whitespace_adds_nothing() {
        assert_eq!(count_words("  one two three  "), 3);
    }

    #[test]
    fn test_punctuation_stays_inside_tokens() {
        assert_eq!(count_words("don't stop-believing, ok?"), 3);
    }

    #[test]
    fn test_label() {
        assert_eq!(word_count_label(0), "Words: 0");
        assert_eq!(word_count_label(42), "Words: 42");
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn streaming_count_matches_split_whitespace(text in "[a-z \t\n\u{a0}é]{0,200}") {
                prop_assert_eq!(count_words_chars(text.chars()), count_words(&text));
            }

            #[test]
            fn joining_words_with_spaces_counts_each(words in prop::collection::vec("[a-z]{1,8}", 0..30)) {
                let text = words.join("  ");
                prop_assert_eq!(count_words(&text), words.len());
            }
        }
    }
}
