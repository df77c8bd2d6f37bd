//! Atomic write operations for JSON files.
//!
//! The document is written to a sibling temporary file, flushed, and then
//! renamed over the target. Renames within one filesystem are atomic on POSIX
//! systems, so readers see either the previous file or the complete new one.
//!
//! If anything fails before the rename, the target is left untouched and the
//! temporary file is removed on a best-effort basis.

use crate::{JsonWriter, Result};
use serde::Serialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::fs::File;

/// Atomically writes `value` as indented JSON to `path`.
///
/// # Errors
///
/// Returns an error if:
/// - The temporary file cannot be created
/// - The value fails to serialize
/// - An I/O error occurs during writing
/// - The atomic rename fails (e.g., cross-filesystem move)
///
/// On failure, the original file (if it exists) is left unchanged.
///
/// # Examples
///
/// ```no_run
/// use grw_io::write_json_atomic;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// write_json_atomic("app/data/out.json", &vec!["a", "b"]).await?;
/// # Ok(())
/// # }
/// ```
pub async fn write_json_atomic<T, P>(path: P, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let temp_path = make_temp_path(path);

    if let Err(e) = write_to_temp_file(&temp_path, value).await {
        let _ = tokio::fs::remove_file(&temp_path).await;
        return Err(e);
    }

    if let Err(e) = tokio::fs::rename(&temp_path, path).await {
        let _ = tokio::fs::remove_file(&temp_path).await;
        return Err(e.into());
    }

    tracing::debug!(path = %path.display(), "Atomically replaced file");
    Ok(())
}

/// Creates the temporary path by appending `.tmp` to the file name.
fn make_temp_path(path: &Path) -> PathBuf {
    let mut temp_path = path.to_path_buf();
    let new_extension = match path.extension() {
        Some(ext) => {
            let mut new_ext = ext.to_os_string();
            new_ext.push(".tmp");
            new_ext
        }
        None => OsString::from("tmp"),
    };
    temp_path.set_extension(new_extension);
    temp_path
}

async fn write_to_temp_file<T>(temp_path: &Path, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let file = File::create(temp_path).await?;
    let mut writer = JsonWriter::new(file);
    writer.write_pretty(value).await?;
    writer.flush().await?;
    writer.into_inner().into_inner().sync_all().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::Error as _;
    use serde::Serializer;
    use tempfile::TempDir;

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> std::result::Result<S::Ok, S::Error> {
            Err(S::Error::custom("refusing to serialize"))
        }
    }

    #[test]
    fn make_temp_path_with_extension() {
        let temp = make_temp_path(Path::new("/path/to/grw-papers.json"));
        assert_eq!(temp, Path::new("/path/to/grw-papers.json.tmp"));
    }

    #[test]
    fn make_temp_path_without_extension() {
        let temp = make_temp_path(Path::new("/path/to/file"));
        assert_eq!(temp, Path::new("/path/to/file.tmp"));
    }

    #[tokio::test]
    async fn atomic_write_creates_file() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("out.json");

        write_json_atomic(&target, &vec!["a", "b"]).await.unwrap();

        let contents = tokio::fs::read_to_string(&target).await.unwrap();
        assert_eq!(contents, "[\n  \"a\",\n  \"b\"\n]\n");
        assert!(!make_temp_path(&target).exists());
    }

    #[tokio::test]
    async fn atomic_write_replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("out.json");
        tokio::fs::write(&target, "old").await.unwrap();

        write_json_atomic(&target, &vec!["new"]).await.unwrap();

        let contents = tokio::fs::read_to_string(&target).await.unwrap();
        assert_eq!(contents, "[\n  \"new\"\n]\n");
    }

    #[tokio::test]
    async fn failed_serialization_keeps_original() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("out.json");
        tokio::fs::write(&target, "previous").await.unwrap();

        let result = write_json_atomic(&target, &Unserializable).await;

        assert!(result.is_err());
        let contents = tokio::fs::read_to_string(&target).await.unwrap();
        assert_eq!(contents, "previous");
        assert!(!make_temp_path(&target).exists());
    }

    #[tokio::test]
    async fn missing_parent_directory_fails() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("no-such-dir").join("out.json");

        let result = write_json_atomic(&target, &vec!["a"]).await;

        assert!(matches!(result, Err(crate::Error::Io(_))));
    }
}
