// Copyright (C) 2020-2026 Andy Kurnia.

use super::{dictionary, piece_config};
use std::collections::BTreeMap;

pub const ALPHABET: std::ops::RangeInclusive<char> = 'A'..='Z';

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieceCoverage {
    // number of distinct words containing the piece at least once.
    pub num_words: u32,
    // num_words / total words, 0.0 for an empty dictionary.
    pub frequency: f64,
}

// Both collections are sorted: words by the slice, pieces by the BTreeMap.
pub struct Artifact {
    pub words: Box<[String]>,
    pub pieces: BTreeMap<String, PieceCoverage>,
}

impl Artifact {
    pub fn piece_list(&self) -> impl Iterator<Item = &str> {
        self.pieces.keys().map(|s| s.as_str())
    }

    pub fn frequency(&self, piece: &str) -> Option<f64> {
        self.pieces.get(piece).map(|coverage| coverage.frequency)
    }
}

// Counts, per piece, how many distinct words contain it.
struct PieceTally<'a> {
    words: &'a [String],
    counts: BTreeMap<String, u32>,
    char_starts: Vec<usize>,
    seen_in_word: std::collections::HashSet<&'a str>,
}

impl<'a> PieceTally<'a> {
    fn new(words: &'a [String]) -> Self {
        Self {
            words,
            counts: ALPHABET.map(|c| (c.to_string(), 0)).collect(),
            char_starts: Vec::new(),
            seen_in_word: Default::default(),
        }
    }

    #[inline(always)]
    fn bump(counts: &mut BTreeMap<String, u32>, piece: &str) {
        if let Some(count) = counts.get_mut(piece) {
            *count += 1;
        } else {
            counts.insert(piece.to_owned(), 1);
        }
    }

    fn tally_word(&mut self, word: &'a str, config: &piece_config::PieceConfig) {
        self.seen_in_word.clear();
        self.char_starts.clear();
        self.char_starts.extend(word.char_indices().map(|(i, _)| i));
        let word_len = self.char_starts.len();
        self.char_starts.push(word.len());

        for (i, c) in word.char_indices() {
            if ALPHABET.contains(&c) {
                let letter = &word[i..i + 1];
                if self.seen_in_word.insert(letter) {
                    Self::bump(&mut self.counts, letter);
                }
            }
        }

        for piece_len in config.piece_lengths(word_len) {
            for start in 0..=word_len - piece_len {
                let piece = &word[self.char_starts[start]..self.char_starts[start + piece_len]];
                if dictionary::contains(self.words, piece) {
                    continue;
                }
                if self.seen_in_word.insert(piece) {
                    Self::bump(&mut self.counts, piece);
                }
            }
        }
    }
}

// words must be sorted and deduplicated, as dictionary::parse_words returns them.
pub fn generate(words: Box<[String]>, config: &piece_config::PieceConfig) -> Artifact {
    let counts = {
        let mut tally = PieceTally::new(&words);
        for word in words.iter() {
            tally.tally_word(word, config);
        }
        tally.counts
    };
    let num_words = words.len();
    let pieces = counts
        .into_iter()
        .map(|(piece, count)| {
            let frequency = if num_words == 0 {
                0.0
            } else {
                count as f64 / num_words as f64
            };
            (
                piece,
                PieceCoverage {
                    num_words: count,
                    frequency,
                },
            )
        })
        .collect();
    Artifact { words, pieces }
}
