use std::collections::HashMap;

use crate::api::TokenCount;

/// Maximum number of tokens shown in the frequency chart.
pub const TOP_TOKEN_LIMIT: usize = 10;

/// Count every token across all token lists.
///
/// The result is in order of first appearance.
pub fn token_frequencies<'a, I>(token_lists: I) -> Vec<TokenCount>
where
    I: IntoIterator<Item = &'a [String]>,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<TokenCount> = Vec::new();

    for token in token_lists.into_iter().flatten() {
        match index.get(token.as_str()) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(token.as_str(), counts.len());
                counts.push(TokenCount {
                    token: token.clone(),
                    count: 1,
                });
            }
        }
    }

    counts
}

/// The `n` most frequent tokens, descending by count.
///
/// Ties keep their incoming order, so with [`token_frequencies`] output the
/// token seen first wins.
pub fn top_tokens(mut counts: Vec<TokenCount>, n: usize) -> Vec<TokenCount> {
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(n);
    counts
}
