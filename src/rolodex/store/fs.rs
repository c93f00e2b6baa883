use super::{ensure_unique_ids, ContactSource};
use crate::error::Result;
use crate::model::Contact;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Contacts loaded from a JSON file holding an array of contact objects.
///
/// ```json
/// [{ "id": "1", "name": "Charlie Chaplin", "email": "charlie@leernoca.monster",
///    "phone": "+741 56 7896", "tags": ["Collaborator"], "dateCreated": "13 Jan, 2019" }]
/// ```
///
/// The file is read once; later changes on disk are not picked up.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    contacts: Vec<Contact>,
}

impl FileStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = fs::read_to_string(&path)?;
        let contacts: Vec<Contact> = serde_json::from_str(&content)?;
        ensure_unique_ids(&contacts)?;
        info!(path = %path.display(), count = contacts.len(), "loaded contacts");
        Ok(Self { path, contacts })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContactSource for FileStore {
    fn list(&self) -> Result<Vec<Contact>> {
        Ok(self.contacts.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RolodexError;
    use crate::sample::sample_contacts;
    use tempfile::tempdir;

    #[test]
    fn loads_contacts_from_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        fs::write(&path, serde_json::to_string(&sample_contacts()).unwrap()).unwrap();

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.path(), path.as_path());
        assert_eq!(store.list().unwrap(), sample_contacts());
        assert_eq!(store.filter("angular").unwrap().len(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let err = FileStore::open(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, RolodexError::Io(_)));
    }

    #[test]
    fn malformed_json_is_serialization_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        let err = FileStore::open(&path).unwrap_err();
        assert!(matches!(err, RolodexError::Serialization(_)));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dupes.json");
        fs::write(
            &path,
            r#"[{"id":"1","name":"A","email":"a","phone":"1"},{"id":"1","name":"B","email":"b","phone":"2"}]"#,
        )
        .unwrap();
        let err = FileStore::open(&path).unwrap_err();
        assert!(matches!(err, RolodexError::DuplicateId(_)));
    }
}
