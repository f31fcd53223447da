use common::{Group, KeyValue, MrError, MrResult, Reducer};
use tracing::debug;

/// Calls `reducer` once per group, in group order, and concatenates what
/// it emits.
pub fn run_reduce<V, R>(groups: Vec<Group<V>>, reducer: &R) -> MrResult<Vec<KeyValue<R::Output>>>
where
    R: Reducer<V>,
{
    let mut result = Vec::with_capacity(groups.len());
    for Group { key, values } in groups {
        let mut kvs = reducer
            .reduce(&key, values)
            .map_err(|source| MrError::Reducer { key, source })?;
        result.append(&mut kvs);
    }
    debug!("{} result pairs", result.len());
    Ok(result)
}
