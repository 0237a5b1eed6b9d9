//! Token pool: unigrams plus requested n-grams reduced to occurrence counts.

use std::collections::{BTreeSet, HashMap};

use crate::ngrams::ngrams;

/// Per-term occurrence counts for one input, plus the frequency denominator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenPool {
    counts: HashMap<String, usize>,
    wordcount: usize,
    skipped_orders: Vec<usize>,
}

impl TokenPool {
    /// Build the pool from unigram `tokens` and every order in `orders`.
    ///
    /// Order 1 is ignored since unigrams are always included. `wordcount`
    /// is the unigram count unless `wc_grams` is set, in which case n-gram
    /// spans count too. Orders longer than the input are recorded in
    /// [`TokenPool::skipped_orders`] and contribute nothing.
    ///
    /// Returns `None` when `tokens` is empty.
    #[must_use]
    pub fn build(tokens: &[String], orders: &BTreeSet<usize>, wc_grams: bool) -> Option<Self> {
        if tokens.is_empty() {
            return None;
        }

        let mut pool = Self {
            counts: HashMap::with_capacity(tokens.len()),
            wordcount: tokens.len(),
            skipped_orders: Vec::new(),
        };
        pool.count_all(tokens.iter().map(String::as_str));

        for &n in orders.iter().filter(|&&n| n > 1) {
            match ngrams(tokens, n) {
                Some(spans) => {
                    if wc_grams {
                        pool.wordcount += spans.len();
                    }
                    pool.count_all(spans.iter().map(String::as_str));
                }
                None => pool.skipped_orders.push(n),
            }
        }

        Some(pool)
    }

    fn count_all<'a, I: Iterator<Item = &'a str>>(&mut self, terms: I) {
        for term in terms {
            match self.counts.get_mut(term) {
                Some(count) => *count += 1,
                None => {
                    self.counts.insert(term.to_string(), 1);
                }
            }
        }
    }

    /// Occurrences of `term`, or `None` if it never appeared.
    #[must_use]
    pub fn count(&self, term: &str) -> Option<usize> {
        self.counts.get(term).copied()
    }

    /// Denominator for frequency encoding.
    #[must_use]
    pub fn wordcount(&self) -> usize {
        self.wordcount
    }

    /// Requested orders that were longer than the input.
    #[must_use]
    pub fn skipped_orders(&self) -> &[usize] {
        &self.skipped_orders
    }

    /// Number of distinct terms in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.counts.iter().map(|(t, &c)| (t.as_str(), c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(s: &str) -> Vec<String> {
        s.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn empty_tokens_yield_no_pool() {
        assert!(TokenPool::build(&[], &BTreeSet::from([2, 3]), false).is_none());
    }

    #[test]
    fn counts_are_exact_occurrence_totals() {
        let pool = TokenPool::build(&words("so so good so"), &BTreeSet::new(), false).unwrap();
        assert_eq!(pool.count("so"), Some(3));
        assert_eq!(pool.count("good"), Some(1));
        assert_eq!(pool.count("bad"), None);
        assert_eq!(pool.wordcount(), 4);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn ngrams_are_merged_but_not_counted_in_wordcount() {
        let pool =
            TokenPool::build(&words("very good very good"), &BTreeSet::from([2, 3]), false).unwrap();
        assert_eq!(pool.count("very good"), Some(2));
        assert_eq!(pool.count("good very"), Some(1));
        assert_eq!(pool.count("very good very"), Some(1));
        assert_eq!(pool.wordcount(), 4);
        assert!(pool.skipped_orders().is_empty());
    }

    #[test]
    fn wc_grams_adds_spans_to_wordcount() {
        // 3 unigrams + 2 bigrams + 1 trigram
        let pool = TokenPool::build(&words("a b c"), &BTreeSet::from([2, 3]), true).unwrap();
        assert_eq!(pool.wordcount(), 6);
    }

    #[test]
    fn orders_longer_than_input_are_skipped() {
        let pool = TokenPool::build(&words("one two three"), &BTreeSet::from([2, 5]), false).unwrap();
        assert_eq!(pool.skipped_orders(), &[5]);
        assert_eq!(pool.count("one two"), Some(1));
        assert_eq!(pool.len(), 5);
    }

    #[test]
    fn order_one_does_not_double_count_unigrams() {
        let pool = TokenPool::build(&words("hi hi"), &BTreeSet::from([1]), true).unwrap();
        assert_eq!(pool.count("hi"), Some(2));
        assert_eq!(pool.wordcount(), 2);
    }
}
