use std::{fs, path::Path};

/// Overwrite the plain-text cache file. Failures are logged and otherwise
/// ignored; the parent directory is not created.
///
/// Returns whether the file was written.
pub fn write_cache(path: &Path, contents: &str) -> bool {
    match fs::write(path, contents) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "weather cache written");
            true
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "could not write weather cache");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrites_existing_content() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(".weather_cache");
        fs::write(&path, "old content that is longer than the new one").expect("seed");

        assert!(write_cache(&path, "new\n"));
        assert_eq!(fs::read_to_string(&path).expect("read back"), "new\n");
    }

    #[test]
    fn missing_directory_is_ignored() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("no-such-dir").join(".weather_cache");

        assert!(!write_cache(&path, "x"));
        assert!(!path.exists());
    }
}
