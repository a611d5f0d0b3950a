use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::error::StoreResult;

/// Durable key-value storage: one JSON file per key inside `dir`.
pub struct SlotStore {
    dir: PathBuf,
}

impl SlotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// `None` when the key has never been written.
    pub fn read(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        match fs::read(self.path(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Replaces the value under `key`. Readers see the old or the new bytes, never a mix.
    pub fn write(&self, key: &str, bytes: &[u8]) -> StoreResult<()> {
        fs::create_dir_all(&self.dir)?;
        let target = self.path(key);
        let tmp = self.dir.join(format!(".{}.json.tmp", key));
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &target)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let slots = SlotStore::new(dir.path());
        assert!(slots.read("nothing").unwrap().is_none());
    }

    #[test]
    fn write_creates_dir_and_replaces_value() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested").join("data");
        let slots = SlotStore::new(&nested);

        slots.write("key", b"first").unwrap();
        slots.write("key", b"second").unwrap();

        assert_eq!(slots.read("key").unwrap().as_deref(), Some(&b"second"[..]));
        let leftovers: Vec<_> = fs::read_dir(&nested)
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
