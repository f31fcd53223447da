use common::{MrError, MrResult};
use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    mem,
    path::{Path, PathBuf},
};
use tracing::debug;
use walkdir::WalkDir;

const BOM: char = '\u{feff}';

/// A file to feed to the mapper. Lines are only read when asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub id: String,
    pub path: PathBuf,
}

impl SourceFile {
    fn new(path: &Path) -> Self {
        Self {
            id: path.to_string_lossy().into_owned(),
            path: path.to_path_buf(),
        }
    }

    /// Opens the file and returns its lines. Each call starts over from the
    /// first line.
    pub fn lines(&self) -> MrResult<Lines> {
        let file = File::open(&self.path).map_err(|e| MrError::unreadable(&self.path, e))?;
        Ok(Lines {
            path: self.path.clone(),
            inner: BufReader::new(file).lines(),
            first: true,
        })
    }
}

/// Lines of one file without their terminators, leading BOM removed.
pub struct Lines {
    path: PathBuf,
    inner: io::Lines<BufReader<File>>,
    first: bool,
}

impl Iterator for Lines {
    type Item = MrResult<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = match self.inner.next()? {
            Ok(line) => line,
            Err(e) => return Some(Err(MrError::unreadable(&self.path, e))),
        };
        if mem::take(&mut self.first) {
            if let Some(rest) = line.strip_prefix(BOM) {
                return Some(Ok(rest.to_owned()));
            }
        }
        Some(Ok(line))
    }
}

/// Lists the files under `source`: the path itself if it is a file, every
/// file at any depth if it is a directory.
pub fn enumerate(source: &Path) -> MrResult<Vec<SourceFile>> {
    if !source.exists() {
        return Err(MrError::InvalidInput {
            path: source.to_path_buf(),
        });
    }
    if source.is_file() {
        return Ok(vec![SourceFile::new(source)]);
    }
    if source.is_dir() {
        let mut files = vec![];
        for entry in WalkDir::new(source).sort_by_file_name() {
            let entry = entry.map_err(|e| MrError::unreadable(source, e.into()))?;
            if entry.path().is_file() {
                files.push(SourceFile::new(entry.path()));
            }
        }
        debug!("found {} input files under {}", files.len(), source.display());
        return Ok(files);
    }
    Err(MrError::UnreadableInput {
        path: source.to_path_buf(),
        source: None,
    })
}
