use serde_json::json;
use url::Url;

use crate::error::{OctoError, Result};
use crate::response::SubmitOutcome;
use crate::rest::{bool_str, OctoClient};

impl OctoClient {
    /// Select a file for printing.
    ///
    /// `location` is the storage location ("local" or "sdcard") and `path`
    /// the file path within it; both are percent-encoded into the request
    /// path here. With `print` set the job starts as soon as the file is
    /// selected.
    pub fn select_file(&self, location: &str, path: &str, print: bool) -> Result<SubmitOutcome> {
        let body = json!({ "command": "select", "print": bool_str(print) });
        self.submit(&encoded_files_path(location, path)?, body)
    }

    /// Deselect the currently selected file
    pub fn unselect_file(&self) -> Result<SubmitOutcome> {
        self.submit("/files", json!({ "command": "unselect" }))
    }
}

/// Percent-encode the `/files/{location}/{path}` endpoint path.
///
/// Each segment is encoded individually, so `/` separators inside `path`
/// survive while reserved characters in file names (spaces, `#`, `?`) do
/// not leak into the URL structure.
fn encoded_files_path(location: &str, path: &str) -> Result<String> {
    let mut url = Url::parse("http://octoprint.local")?;
    url.path_segments_mut()
        .map_err(|()| OctoError::RequestBuild("cannot encode files path".to_string()))?
        .push("files")
        .push(location)
        .extend(path.split('/'));
    Ok(url.path().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_path() {
        let path = encoded_files_path("local", "benchy.gcode").unwrap();
        assert_eq!(path, "/files/local/benchy.gcode");
    }

    #[test]
    fn test_space_is_percent_encoded() {
        let path = encoded_files_path("local", "my file.gcode").unwrap();
        assert_eq!(path, "/files/local/my%20file.gcode");
    }

    #[test]
    fn test_slashes_kept_as_separators() {
        let path = encoded_files_path("local", "folder one/part two.gcode").unwrap();
        assert_eq!(path, "/files/local/folder%20one/part%20two.gcode");
    }

    #[test]
    fn test_reserved_characters_encoded() {
        let path = encoded_files_path("sdcard", "v2#final?.gcode").unwrap();
        assert_eq!(path, "/files/sdcard/v2%23final%3F.gcode");
    }
}
