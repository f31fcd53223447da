use common::{KeyValue, Mapper, Reducer};

/// Word count: every whitespace-separated word counts once.
#[derive(Debug, Default, Clone, Copy)]
pub struct WordCount;

impl Mapper for WordCount {
    type Value = u64;

    fn map(&self, _id: &str, line: &str) -> anyhow::Result<Vec<KeyValue<u64>>> {
        Ok(line
            .split_whitespace()
            .map(|w| KeyValue::new(w, 1))
            .collect())
    }
}

impl Reducer<u64> for WordCount {
    type Output = u64;

    fn reduce(&self, key: &str, values: Vec<u64>) -> anyhow::Result<Vec<KeyValue<u64>>> {
        Ok(vec![KeyValue::new(key, values.iter().sum())])
    }
}
