use crate::error::{StoreError, StoreResult};
use crate::file_type::FileType;
use morphoparse_base::ObjectKind;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// The deterministic on-disk location of one artifact object:
/// `<root>/<type>_<id>/<stem><ext>`.
#[derive(Debug, Clone)]
pub struct ArtifactLayout {
    root: PathBuf,
    kind: ObjectKind,
    id: u64,
    stem: String,
}

impl ArtifactLayout {
    pub fn new(root: impl Into<PathBuf>, kind: ObjectKind, id: u64, stem: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            kind,
            id,
            stem: stem.into(),
        }
    }

    /// `<root>/<type>_<id>`.
    pub fn directory(&self) -> PathBuf {
        self.root.join(format!("{}_{}", self.kind.directory_stem(), self.id))
    }

    /// `<root>/<type>_<id>/<stem><ext>`.
    pub fn path(&self, file_type: FileType) -> PathBuf {
        self.directory().join(format!("{}{}", self.stem, file_type.extension()))
    }

    /// Creates the artifact directory if it doesn't exist. Treats
    /// `AlreadyExists` — including the race where another thread created it
    /// first — as success, mirroring the original implementation's
    /// `except OSError` / `errno.EEXIST` guard.
    pub fn ensure_directory(&self) -> StoreResult<()> {
        let dir = self.directory();
        match fs::create_dir_all(&dir) {
            Ok(()) => Ok(()),
            Err(source) if source.kind() == std::io::ErrorKind::AlreadyExists => Ok(()),
            Err(source) => {
                if dir.is_dir() {
                    Ok(())
                } else {
                    Err(StoreError::CreateDirectory { path: dir, source })
                }
            }
        }
    }

    /// Best-effort recursive removal of the artifact directory. Absence is
    /// success, matching the idempotent-deletion invariant.
    pub fn remove_directory(&self) -> StoreResult<()> {
        let dir = self.directory();
        match fs::remove_dir_all(&dir) {
            Ok(()) => Ok(()),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io { path: dir, source }),
        }
    }

    pub fn write(&self, file_type: FileType, contents: &[u8]) -> StoreResult<()> {
        self.ensure_directory()?;
        let path = self.path(file_type);
        fs::write(&path, contents).map_err(|source| StoreError::Io { path, source })
    }

    pub fn read(&self, file_type: FileType) -> StoreResult<Vec<u8>> {
        let path = self.path(file_type);
        fs::read(&path).map_err(|source| StoreError::Io { path, source })
    }

    pub fn exists(&self, file_type: FileType) -> bool {
        self.path(file_type).is_file()
    }

    pub fn remove_file(&self, file_type: FileType) -> StoreResult<()> {
        let path = self.path(file_type);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }

    /// The modification time of `file_type`, if it exists. Used by the FST
    /// driver to confirm a compiled binary's mtime actually advanced after a
    /// fresh compile, rather than trusting a stale file left by a previous
    /// failed attempt.
    pub fn mtime(&self, file_type: FileType) -> Option<SystemTime> {
        fs::metadata(self.path(file_type)).and_then(|m| m.modified()).ok()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn builds_the_deterministic_path() {
        let layout = ArtifactLayout::new("/artifacts", ObjectKind::Morphology, 7, "morphology_7");
        assert_eq!(
            layout.path(FileType::Binary),
            PathBuf::from("/artifacts/morphology_7/morphology_7.foma")
        );
        assert_eq!(
            layout.path(FileType::Dictionary),
            PathBuf::from("/artifacts/morphology_7/morphology_7_dictionary.pickle")
        );
    }

    #[test]
    fn ensure_directory_is_idempotent() {
        let tmp = tempdir().unwrap();
        let layout = ArtifactLayout::new(tmp.path(), ObjectKind::Phonology, 1, "phonology_1");
        layout.ensure_directory().unwrap();
        layout.ensure_directory().unwrap();
        assert!(layout.directory().is_dir());
    }

    #[test]
    fn write_then_read_round_trips() {
        let tmp = tempdir().unwrap();
        let layout = ArtifactLayout::new(tmp.path(), ObjectKind::Phonology, 1, "phonology_1");
        layout.write(FileType::Script, b"define phonology id;").unwrap();
        assert_eq!(layout.read(FileType::Script).unwrap(), b"define phonology id;");
    }

    #[test]
    fn remove_directory_is_idempotent() {
        let tmp = tempdir().unwrap();
        let layout = ArtifactLayout::new(tmp.path(), ObjectKind::Phonology, 1, "phonology_1");
        layout.remove_directory().unwrap();
        layout.ensure_directory().unwrap();
        layout.remove_directory().unwrap();
        layout.remove_directory().unwrap();
        assert!(!layout.directory().exists());
    }
}
