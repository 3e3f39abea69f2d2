//! Merging vocabularies from several dictionaries.
//!
//! Items are keyed by `(word, pinyin)`: the same word read two ways stays
//! two items, while repeats of one reading collapse into the one with the
//! highest frequency. The merged list is ordered by pinyin, then word,
//! comparing bytes.

use std::collections::HashMap;

use super::types::models::VocabularyItem;

/// Collapses items with equal `(word, pinyin)`, keeping the highest frequency.
///
/// On equal frequency the earliest item is kept. Output order is unspecified;
/// see [`sort`].
pub fn dedup(items: Vec<VocabularyItem>) -> Vec<VocabularyItem> {
    let mut unique: HashMap<(String, String), VocabularyItem> = HashMap::with_capacity(items.len());
    for item in items {
        let key = (item.word.clone(), item.pinyin.clone());
        match unique.get_mut(&key) {
            Some(existing) => {
                if item.frequency > existing.frequency {
                    *existing = item;
                }
            }
            None => {
                unique.insert(key, item);
            }
        }
    }
    unique.into_values().collect()
}

/// Orders by pinyin, then word (byte-wise).
pub fn sort(items: &mut [VocabularyItem]) {
    items.sort_unstable_by(|a, b| a.pinyin.cmp(&b.pinyin).then_with(|| a.word.cmp(&b.word)));
}

/// [`dedup`] followed by [`sort`].
pub fn merge(items: Vec<VocabularyItem>) -> Vec<VocabularyItem> {
    let mut merged = dedup(items);
    sort(&mut merged);
    merged
}
