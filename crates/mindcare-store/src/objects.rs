use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use crate::error::StorageError;

const TMP_SUFFIX: &str = ".tmp";
const RETIRED_SUFFIX: &str = ".retired";

/// Resolve `key` to a path under `root`. Keys are relative, `/`-separated,
/// and may not climb out of the root.
pub fn object_path(root: &Path, key: &str) -> Result<PathBuf, StorageError> {
    let relative = Path::new(key);
    let well_formed = !key.is_empty()
        && !key.ends_with('/')
        && relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
    if !well_formed {
        return Err(StorageError::InvalidKey(key.to_string()));
    }
    Ok(root.join(relative))
}

/// Read an object.
pub fn get_object(root: &Path, key: &str) -> Result<Vec<u8>, StorageError> {
    let path = object_path(root, key)?;
    std::fs::read(&path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            StorageError::NotFound {
                key: key.to_string(),
            }
        } else {
            StorageError::Read {
                key: key.to_string(),
                source: e,
            }
        }
    })
}

/// Write an object, replacing any previous body.
///
/// The body goes to a sibling temp file first and is renamed into place,
/// so readers never observe a partial write.
pub fn put_object(root: &Path, key: &str, body: &[u8]) -> Result<(), StorageError> {
    let path = object_path(root, key)?;
    let tmp_path = write_tmp(&path, key, body)?;

    std::fs::rename(&tmp_path, &path).map_err(|e| StorageError::Write {
        key: key.to_string(),
        source: e,
    })?;

    tracing::debug!(key, bytes = body.len(), "object written");
    Ok(())
}

/// Write an object only if no object exists at `key`. Returns
/// `StorageError::AlreadyExists` otherwise.
pub fn put_object_if_absent(root: &Path, key: &str, body: &[u8]) -> Result<(), StorageError> {
    let path = object_path(root, key)?;
    let tmp_path = write_tmp(&path, key, body)?;

    // hard_link refuses to replace an existing file, which makes the
    // existence check and the publish a single step.
    let linked = std::fs::hard_link(&tmp_path, &path);
    let _ = std::fs::remove_file(&tmp_path);
    linked.map_err(|e| {
        if e.kind() == ErrorKind::AlreadyExists {
            StorageError::AlreadyExists {
                key: key.to_string(),
            }
        } else {
            StorageError::Write {
                key: key.to_string(),
                source: e,
            }
        }
    })?;

    tracing::debug!(key, bytes = body.len(), "object created");
    Ok(())
}

fn write_tmp(path: &Path, key: &str, body: &[u8]) -> Result<PathBuf, StorageError> {
    let write_err = |e| StorageError::Write {
        key: key.to_string(),
        source: e,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(TMP_SUFFIX);
    let tmp_path = PathBuf::from(tmp_name);
    std::fs::write(&tmp_path, body).map_err(write_err)?;
    Ok(tmp_path)
}

/// Delete an object. Deleting a missing object is not an error.
pub fn delete_object(root: &Path, key: &str) -> Result<(), StorageError> {
    let path = object_path(root, key)?;
    match std::fs::remove_file(&path) {
        Ok(()) => {
            tracing::debug!(key, "object deleted");
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(StorageError::Delete {
            key: key.to_string(),
            source: e,
        }),
    }
}

/// List the keys directly under a directory-style prefix such as
/// `"clients/"`, sorted. A prefix with no objects yields an empty list.
pub fn list_objects(root: &Path, prefix: &str) -> Result<Vec<String>, StorageError> {
    let dir = object_path(root, prefix.trim_end_matches('/'))?;
    let list_err = |e| StorageError::List {
        prefix: prefix.to_string(),
        source: e,
    };

    let entries = match std::fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(list_err(e)),
    };

    let mut keys = Vec::new();
    for entry in entries {
        let entry = entry.map_err(list_err)?;
        if !entry.file_type().map_err(list_err)?.is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        if name.ends_with(TMP_SUFFIX) {
            continue;
        }
        keys.push(format!("{}/{name}", prefix.trim_end_matches('/')));
    }
    keys.sort();
    Ok(keys)
}

/// Delete all objects under a prefix.
///
/// Lists all keys with the given prefix and deletes each one.
/// Returns the number of objects deleted.
pub fn delete_objects_by_prefix(root: &Path, prefix: &str) -> Result<usize, StorageError> {
    let keys = list_objects(root, prefix)?;
    let count = keys.len();
    for key in &keys {
        delete_object(root, key)?;
    }
    Ok(count)
}

/// Swap the objects under `prefix` in `root` for those staged under the same
/// prefix in `staged_root`. Both roots must be on one filesystem. Nothing
/// staged leaves the prefix empty. The previous objects are moved aside
/// inside `staged_root` for the caller to discard.
pub fn replace_prefix(root: &Path, staged_root: &Path, prefix: &str) -> Result<(), StorageError> {
    let name = prefix.trim_end_matches('/');
    let live = object_path(root, name)?;
    let staged = object_path(staged_root, name)?;
    let retired = object_path(staged_root, &format!("{name}{RETIRED_SUFFIX}"))?;
    let swap_err = |e| StorageError::Write {
        key: prefix.to_string(),
        source: e,
    };

    let had_live = match std::fs::rename(&live, &retired) {
        Ok(()) => true,
        Err(e) if e.kind() == ErrorKind::NotFound && !live.exists() => false,
        Err(e) => return Err(swap_err(e)),
    };
    match std::fs::rename(&staged, &live) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::NotFound && !staged.exists() => {}
        Err(e) => {
            // Put the old objects back rather than leave the prefix empty.
            if had_live {
                let _ = std::fs::rename(&retired, &live);
            }
            return Err(swap_err(e));
        }
    }

    tracing::debug!(prefix, "prefix replaced");
    Ok(())
}
