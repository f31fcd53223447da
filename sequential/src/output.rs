use common::{KeyValue, MrError, MrResult};
use std::{
    fmt::Display,
    fs,
    io::{self, BufWriter, ErrorKind, Write},
    path::Path,
};
use tempfile::{Builder, NamedTempFile};

/// Deletes a result left over from an earlier run.
pub fn remove_existing(target: &Path) -> MrResult<()> {
    match fs::remove_file(target) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(MrError::write(target, e)),
    }
}

/// Temp file created with the mode of an ordinary new file (0666 less umask)
/// instead of the private 0600 default.
#[cfg(unix)]
fn create_temp(dir: &Path) -> io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn create_temp(dir: &Path) -> io::Result<NamedTempFile> {
    Builder::new().tempfile_in(dir)
}

/// Writes one `key\tvalue` line per pair, in order.
///
/// The lines go to a temporary file next to `target` that is moved into
/// place once complete, so a failed write leaves no result behind.
pub fn write_result<O: Display>(target: &Path, pairs: &[KeyValue<O>], bom: bool) -> MrResult<()> {
    let dir = match target.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let tmp = create_temp(dir).map_err(|e| MrError::write(target, e))?;

    let mut writer = BufWriter::new(tmp);
    write_lines(&mut writer, pairs, bom).map_err(|e| MrError::write(target, e))?;
    let tmp = writer
        .into_inner()
        .map_err(|e| MrError::write(target, e.into_error()))?;
    tmp.persist(target)
        .map_err(|e| MrError::write(target, e.error))?;
    Ok(())
}

fn write_lines<W: Write, O: Display>(w: &mut W, pairs: &[KeyValue<O>], bom: bool) -> std::io::Result<()> {
    if bom {
        write!(w, "\u{feff}")?;
    }
    for kv in pairs {
        writeln!(w, "{}\t{}", kv.key, kv.value)?;
    }
    w.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn tab_separated_lines() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("out.txt");
        let pairs = vec![KeyValue::new("fox", 2), KeyValue::new("the", 2)];

        write_result(&target, &pairs, false).unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "fox\t2\nthe\t2\n");
    }

    #[test]
    fn empty_result_is_empty_file() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("out.txt");

        write_result::<u8>(&target, &[], false).unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "");
    }

    #[test]
    fn bom_prefix_when_asked() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("out.txt");

        write_result(&target, &[KeyValue::new("a", "b")], true).unwrap();
        assert_eq!(fs::read(&target).unwrap(), b"\xef\xbb\xbfa\tb\n");
    }

    #[test]
    fn overwrites_previous_content() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("out.txt");
        fs::write(&target, "old\t1\nstale\t9\n").unwrap();

        remove_existing(&target).unwrap();
        assert!(!target.exists());
        write_result(&target, &[KeyValue::new("new", 1)], false).unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "new\t1\n");
    }

    #[test]
    fn nothing_to_remove_is_fine() {
        let dir = TempDir::new().unwrap();
        remove_existing(&dir.path().join("never-written.txt")).unwrap();
    }

    #[test]
    fn directory_in_the_way_is_write_error() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("out");
        fs::create_dir(&target).unwrap();

        let err = remove_existing(&target).unwrap_err();
        assert!(matches!(err, MrError::Write { .. }));
        assert!(target.is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn result_has_ordinary_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let target = dir.path().join("out.txt");
        let plain = dir.path().join("plain.txt");
        fs::write(&plain, "").unwrap();

        write_result(&target, &[KeyValue::new("a", 1)], false).unwrap();
        let mode = |p: &Path| fs::metadata(p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&target), mode(&plain));
    }

    #[test]
    fn missing_directory_is_write_error() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("no/such/dir/out.txt");

        let err = write_result(&target, &[KeyValue::new("a", 1)], false).unwrap_err();
        assert!(matches!(err, MrError::Write { .. }));
        assert!(!target.exists());
    }
}
