// Copyright (C) 2020-2026 Andy Kurnia.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PieceConfig {
    // words with fewer chars are dropped on load. 0 keeps everything.
    pub min_word_length: usize,
    // None means a piece may be as long as the word itself.
    pub max_piece_length: Option<usize>,
}

// pieces shorter than this come only from the alphabet.
pub const MIN_MULTI_LETTER_PIECE_LENGTH: usize = 2;

impl PieceConfig {
    // the range of multi-letter piece lengths considered for a word of word_len chars.
    #[inline(always)]
    pub fn piece_lengths(&self, word_len: usize) -> std::ops::RangeInclusive<usize> {
        let max_len = match self.max_piece_length {
            Some(max_len) => max_len.min(word_len),
            None => word_len,
        };
        MIN_MULTI_LETTER_PIECE_LENGTH..=max_len
    }

    pub fn describe_piece_lengths(&self) -> String {
        match self.max_piece_length {
            Some(max_len) => format!("{}-{}", MIN_MULTI_LETTER_PIECE_LENGTH, max_len),
            None => format!(">= {}", MIN_MULTI_LETTER_PIECE_LENGTH),
        }
    }
}

// what the word game ships with.
pub fn make_wordcell_piece_config() -> PieceConfig {
    PieceConfig {
        min_word_length: 3,
        max_piece_length: Some(3),
    }
}

// every word, every substring.
pub fn make_unbounded_piece_config() -> PieceConfig {
    PieceConfig {
        min_word_length: 0,
        max_piece_length: None,
    }
}
