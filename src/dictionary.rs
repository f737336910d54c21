// Copyright (C) 2020-2026 Andy Kurnia.

use super::error;

// One word per line. Lines are trimmed and uppercased, blank lines are skipped.
// The result is sorted and has no duplicates, so membership is a binary search.
pub fn parse_words(giant_string: &str, min_word_length: usize) -> Box<[String]> {
    let mut words = Vec::new();
    for s in giant_string.lines() {
        let s = s.trim();
        if s.is_empty() {
            continue;
        }
        let word = s.to_uppercase();
        if word.chars().count() < min_word_length {
            continue;
        }
        words.push(word);
    }
    words.sort_unstable();
    words.dedup();
    words.into_boxed_slice()
}

pub fn read_dictionary(path: &str, min_word_length: usize) -> error::Returns<Box<[String]>> {
    match std::fs::read_to_string(path) {
        Ok(giant_string) => Ok(parse_words(&giant_string, min_word_length)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            Err(error::dictionary_not_found(path).into())
        }
        Err(err) => Err(err.into()),
    }
}

#[inline(always)]
pub fn contains(words: &[String], s: &str) -> bool {
    words.binary_search_by(|w| w.as_str().cmp(s)).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_uppercases_and_dedups() {
        let words = parse_words("  cat\nCat\n\n   \nat \nzebra\r\n", 0);
        assert_eq!(&words[..], &["AT", "CAT", "ZEBRA"]);
    }

    #[test]
    fn parse_drops_short_words() {
        let words = parse_words("a\nat\ncat\ncats\n", 3);
        assert_eq!(&words[..], &["CAT", "CATS"]);
    }

    #[test]
    fn contains_uses_sorted_words() {
        let words = parse_words("dog\ncat\nemu\n", 0);
        assert!(contains(&words, "CAT"));
        assert!(contains(&words, "EMU"));
        assert!(!contains(&words, "CA"));
        assert!(!contains(&words, "cat"));
    }

    #[test]
    fn missing_file_is_dictionary_not_found() {
        let err = read_dictionary("/nonexistent/enable1.txt", 3).unwrap_err();
        assert!(error::is_dictionary_not_found(&err));
        assert_eq!(err.to_string(), "/nonexistent/enable1.txt not found");
    }
}
