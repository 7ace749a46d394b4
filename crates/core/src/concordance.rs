// crates/core/src/concordance.rs
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::counter::{FrequencyMap, count_words};

const INITIAL_HISTOGRAM_SLOTS: usize = 64;

/// A word together with its number of occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordTuple {
    pub word: String,
    pub count: usize,
}

impl WordTuple {
    #[must_use]
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

impl fmt::Display for WordTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.word, self.count)
    }
}

/// Word statistics over a whole corpus.
///
/// [`Concordance::build`] and [`Concordance::from_counts`] keep `unique`,
/// `counts` and the histogram consistent. Serialize-only: nothing reads a
/// concordance back in.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Concordance {
    /// Occurrences per distinct word.
    pub counts: FrequencyMap,
    /// Tokens scanned, including those without any letter.
    pub total: usize,
    /// Number of distinct words; always `counts.len()`.
    pub unique: usize,
    /// Words ranked by count, most frequent first.
    pub most_used: Vec<WordTuple>,
    /// Distinct words per length in characters. Slot 0 is always zero.
    pub length_histogram: Vec<usize>,
}

impl Concordance {
    /// Consume a token stream and compute the full concordance.
    ///
    /// `top_words` caps the ranked list; `0` keeps every word.
    ///
    /// # Errors
    ///
    /// Propagates the first error produced by `tokens`.
    pub fn build<I, S, E>(tokens: I, case_sensitive: bool, top_words: usize) -> Result<Self, E>
    where
        I: IntoIterator<Item = Result<S, E>>,
        S: AsRef<str>,
    {
        let (counts, total) = count_words(tokens, case_sensitive)?;
        Ok(Self::from_counts(counts, total, top_words))
    }

    /// Derive the ranking and the length histogram from finished counts.
    #[must_use]
    pub fn from_counts(counts: FrequencyMap, total: usize, top_words: usize) -> Self {
        let unique = counts.len();
        let mut most_used = Vec::with_capacity(unique);
        let mut length_histogram = vec![0; INITIAL_HISTOGRAM_SLOTS];

        for (word, &count) in &counts {
            most_used.push(WordTuple::new(word.as_str(), count));
            record_length(&mut length_histogram, word.chars().count());
        }

        most_used.sort_by(rank_order);
        trim_histogram(&mut length_histogram);

        let mut concordance = Self {
            counts,
            total,
            unique,
            most_used,
            length_histogram,
        };
        concordance.truncate_top_words(top_words);
        concordance
    }

    /// Keep only the `n` most used words.
    ///
    /// `0`, or any `n` not smaller than the current list, leaves it untouched.
    pub fn truncate_top_words(&mut self, n: usize) {
        if n > 0 && self.most_used.len() > n {
            self.most_used.truncate(n);
        }
    }

    /// Number of occurrences of `word`, or 0 when it was never seen.
    #[must_use]
    pub fn count_of(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }
}

/// Count descending, then word ascending so that ties rank the same on every run.
fn rank_order(a: &WordTuple, b: &WordTuple) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word))
}

fn record_length(histogram: &mut Vec<usize>, len: usize) {
    if len >= histogram.len() {
        let mut new_len = histogram.len().max(1) * 2;
        while new_len <= len {
            new_len *= 2;
        }
        histogram.resize(new_len, 0);
    }
    histogram[len] += 1;
}

/// Drop trailing zero slots, keeping at least slot 0.
fn trim_histogram(histogram: &mut Vec<usize>) {
    let last = histogram.iter().rposition(|&n| n > 0).unwrap_or(0);
    histogram.truncate(last + 1);
    if histogram.is_empty() {
        histogram.push(0);
    }
}
