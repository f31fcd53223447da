use common::{Group, KeyValue};
use itertools::Itertools;
use tracing::debug;

/// Sorts pairs by key and collects each run of equal keys into one group,
/// groups in ascending key order.
///
/// The sort is stable, so values of one key keep the order the mapper
/// emitted them in.
pub fn sort_and_group<V>(mut pairs: Vec<KeyValue<V>>) -> Vec<Group<V>> {
    pairs.sort_by(|a, b| a.key.cmp(&b.key));

    let groups: Vec<_> = pairs
        .into_iter()
        .group_by(|kv| kv.key.clone())
        .into_iter()
        .map(|(key, kvs)| Group {
            key,
            values: kvs.map(|kv| kv.value).collect(),
        })
        .collect();

    debug!("{} groups", groups.len());
    groups
}
