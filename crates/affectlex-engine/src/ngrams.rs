//! Contiguous multi-word spans built from the unigram token sequence.

/// All space-joined spans of `n` consecutive tokens, in order.
///
/// Returns `None` when there are fewer than `n` tokens (or `n` is zero), so
/// the caller can report the order as skipped.
#[must_use]
pub fn ngrams<S: AsRef<str>>(tokens: &[S], n: usize) -> Option<Vec<String>> {
    if n == 0 || tokens.len() < n {
        return None;
    }
    Some(
        tokens
            .windows(n)
            .map(|window| {
                window
                    .iter()
                    .map(AsRef::as_ref)
                    .collect::<Vec<&str>>()
                    .join(" ")
            })
            .collect(),
    )
}
