// crates/core/src/counter.rs
use alloc::string::{String, ToString};
use hashbrown::HashMap;

use crate::tokenizer::scrub_word;

/// Occurrence count for every distinct word.
pub type FrequencyMap = HashMap<String, usize>;

const INITIAL_CAPACITY: usize = 4096;

/// Count scrubbed words from a fallible token stream.
///
/// Returns the frequency map and the number of tokens scanned. Every token
/// counts towards the total, including the ones that scrub to nothing; those
/// never enter the map.
///
/// When `case_sensitive` is false each token is lowercased before scrubbing.
///
/// # Errors
///
/// The first `Err` yielded by `tokens` stops the scan and is returned as is.
/// No partial result survives.
pub fn count_words<I, S, E>(tokens: I, case_sensitive: bool) -> Result<(FrequencyMap, usize), E>
where
    I: IntoIterator<Item = Result<S, E>>,
    S: AsRef<str>,
{
    let mut counts = FrequencyMap::with_capacity(INITIAL_CAPACITY);
    let mut total = 0;

    for token in tokens {
        let token = token?;
        total += 1;

        if case_sensitive {
            insert(&mut counts, scrub_word(token.as_ref()));
        } else {
            let folded = token.as_ref().to_lowercase();
            insert(&mut counts, scrub_word(&folded));
        }
    }

    Ok((counts, total))
}

fn insert(counts: &mut FrequencyMap, word: &str) {
    if word.is_empty() {
        return;
    }
    if let Some(count) = counts.get_mut(word) {
        *count += 1;
    } else {
        counts.insert(word.to_string(), 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;
    use core::convert::Infallible;

    fn count(text: &str, case_sensitive: bool) -> (FrequencyMap, usize) {
        let tokens = tokenize(text).map(Ok::<_, Infallible>);
        match count_words(tokens, case_sensitive) {
            Ok(result) => result,
            Err(never) => match never {},
        }
    }

    #[test]
    fn folds_case_by_default() {
        let (counts, total) = count("The the THE.", false);
        assert_eq!(total, 3);
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get("the"), Some(&3));
    }

    #[test]
    fn keeps_case_when_sensitive() {
        let (counts, total) = count("The the THE.", true);
        assert_eq!(total, 3);
        assert_eq!(counts.len(), 3);
        assert_eq!(counts.get("The"), Some(&1));
        assert_eq!(counts.get("the"), Some(&1));
        assert_eq!(counts.get("THE"), Some(&1));
    }

    #[test]
    fn letterless_tokens_count_towards_total_only() {
        let (counts, total) = count("-- 42 word ... word!", false);
        assert_eq!(total, 5);
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get("word"), Some(&2));
        assert!(!counts.contains_key(""));
    }

    #[test]
    fn empty_input() {
        let (counts, total) = count("", false);
        assert_eq!(total, 0);
        assert!(counts.is_empty());
    }

    #[test]
    fn first_error_aborts() {
        let tokens = [Ok("one"), Err("broken pipe"), Ok("two")];
        let result = count_words(tokens, false);
        assert_eq!(result.err(), Some("broken pipe"));
    }
}
