use crate::input::SourceFile;
use common::{KeyValue, Mapper, MrError, MrResult};
use tracing::debug;

/// Feeds every line of every file to `mapper`, file by file, and
/// concatenates everything it emits.
pub fn run_map<M: Mapper>(files: Vec<SourceFile>, mapper: &M) -> MrResult<Vec<KeyValue<M::Value>>> {
    let mut intermediate = vec![];
    for file in files {
        let before = intermediate.len();
        for (i, line) in file.lines()?.enumerate() {
            let line = line?;
            let mut kvs = mapper.map(&file.id, &line).map_err(|source| MrError::Mapper {
                id: file.id.clone(),
                line: i + 1,
                source,
            })?;
            intermediate.append(&mut kvs);
        }
        debug!("{}: {} pairs", file.id, intermediate.len() - before);
    }
    Ok(intermediate)
}
