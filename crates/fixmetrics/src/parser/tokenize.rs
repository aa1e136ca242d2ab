//! Line tokenization — the two split regimes of the source log.
//!
//! Space-delimited tokens feed the capture path; SOH-delimited tokens
//! feed the correlation path. Tokenizing never fails; tokens without an
//! `=` are skipped by [`tag_pairs`] and absence of expected content is
//! handled downstream.

use super::SOH;

/// Space-delimited regime (capture path).
pub fn space_tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(' ')
}

/// SOH-delimited regime (correlation path): discrete `tag=value` tokens.
pub fn soh_tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(SOH)
}

/// Pair up `tag=value` tokens on the first `=`; values may themselves
/// contain `=`. Tokens without an `=` are dropped.
pub fn tag_pairs<'a>(
    tokens: impl Iterator<Item = &'a str>,
) -> impl Iterator<Item = (&'a str, &'a str)> {
    tokens.filter_map(|token| token.split_once('='))
}
