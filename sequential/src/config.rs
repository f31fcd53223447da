use std::path::{Path, PathBuf};

/// Settings for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub source: PathBuf,
    pub target: PathBuf,
    /// Seed for the value shuffle. `None` draws one from the OS.
    pub shuffle_seed: Option<u64>,
    /// Start the result file with a UTF-8 byte order mark.
    pub write_bom: bool,
}

impl RunConfig {
    pub fn new(source: impl AsRef<Path>, target: impl AsRef<Path>) -> Self {
        Self {
            source: source.as_ref().to_path_buf(),
            target: target.as_ref().to_path_buf(),
            shuffle_seed: None,
            write_bom: false,
        }
    }

    pub fn shuffle_seed(mut self, seed: impl Into<Option<u64>>) -> Self {
        self.shuffle_seed = seed.into();
        self
    }

    pub fn write_bom(mut self, bom: bool) -> Self {
        self.write_bom = bom;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RunConfig::new("in", "out.txt");
        assert_eq!(config.source, PathBuf::from("in"));
        assert_eq!(config.shuffle_seed, None);
        assert!(!config.write_bom);

        let config = config.shuffle_seed(7).write_bom(true);
        assert_eq!(config.shuffle_seed, Some(7));
        assert!(config.write_bom);
    }
}
