use common::{KeyValue, Mapper, Reducer};
use itertools::Itertools;

/// Inverted index: for each word, the inputs it appears in.
#[derive(Debug, Default, Clone, Copy)]
pub struct Indexer;

impl Mapper for Indexer {
    type Value = String;

    fn map(&self, id: &str, line: &str) -> anyhow::Result<Vec<KeyValue>> {
        Ok(line
            .split(|c: char| !c.is_alphabetic())
            .filter(|w| !w.is_empty())
            .unique()
            .map(|w| KeyValue::new(w, id.to_string()))
            .collect())
    }
}

impl Reducer<String> for Indexer {
    type Output = String;

    /// `<count> <id>,<id>,...` with ids sorted, so value order never shows.
    fn reduce(&self, key: &str, values: Vec<String>) -> anyhow::Result<Vec<KeyValue>> {
        let ids = values.into_iter().sorted().dedup().collect_vec();
        Ok(vec![KeyValue::new(
            key,
            format!("{} {}", ids.len(), ids.join(",")),
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_emits_each_word_once_per_line() {
        let kvs = Indexer.map("doc1", "to be, or not to be").unwrap();
        let words = kvs.iter().map(|kv| kv.key.as_str()).collect_vec();
        assert_eq!(words, vec!["to", "be", "or", "not"]);
        assert!(kvs.iter().all(|kv| kv.value == "doc1"));
    }

    #[test]
    fn reduce_is_order_independent() {
        let a = Indexer
            .reduce("w", vec!["b".into(), "a".into(), "b".into()])
            .unwrap();
        let b = Indexer
            .reduce("w", vec!["a".into(), "b".into(), "a".into()])
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(a[0].value, "2 a,b");
    }
}
