//! File and conversion result descriptors.

use serde::{Deserialize, Serialize};

/// Metadata for the user-selected input file.
///
/// Created when a file is picked, read-only thereafter, discarded on
/// reset. This is the serializable subset mirrored to localStorage; the
/// live [`web_sys::File`] handle is held separately and never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// MIME type reported by the browser; may be empty.
    #[serde(rename = "type")]
    pub mime_type: String,
    /// Last-modified timestamp in milliseconds since the Unix epoch.
    #[serde(rename = "lastModified")]
    pub last_modified: f64,
}

impl FileDescriptor {
    /// Build a descriptor from a browser file handle.
    pub fn from_file(file: &web_sys::File) -> Self {
        Self {
            name: file.name(),
            size: file.size() as u64,
            mime_type: file.type_(),
            last_modified: file.last_modified(),
        }
    }

    /// Lowercase extension without the leading dot, if the name has one.
    pub fn extension(&self) -> Option<String> {
        extension_of(&self.name)
    }

    /// Whether the browser reported an image MIME type.
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

/// Lowercase extension of a file name, without the leading dot.
pub fn extension_of(name: &str) -> Option<String> {
    let (_, ext) = name.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}

/// Outcome of a (simulated) conversion.
///
/// Only `file_name` and `file_size` survive serialization; the download
/// URL wraps an in-memory object and dies with the page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    #[serde(rename = "fileName")]
    pub file_name: String,
    /// Placeholder output size in bytes.
    #[serde(rename = "fileSize")]
    pub file_size: u64,
    /// Object URL for the mock download. `None` after a reload restored
    /// only the persisted metadata.
    #[serde(skip)]
    pub download_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("photo.png"), Some("png".to_string()));
        assert_eq!(extension_of("archive.tar.gz"), Some("gz".to_string()));
        assert_eq!(extension_of("UPPER.JPG"), Some("jpg".to_string()));
        assert_eq!(extension_of("no-extension"), None);
        assert_eq!(extension_of("trailing-dot."), None);
    }

    #[test]
    fn test_descriptor_extension() {
        let desc = FileDescriptor {
            name: "movie.MKV".to_string(),
            size: 1024,
            mime_type: "video/x-matroska".to_string(),
            last_modified: 0.0,
        };
        assert_eq!(desc.extension(), Some("mkv".to_string()));
        assert!(!desc.is_image());
    }

    #[test]
    fn test_result_serializes_without_download_url() {
        let result = ConversionResult {
            file_name: "photo.webp".to_string(),
            file_size: 900,
            download_url: Some("blob:fake".to_string()),
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("blob:fake"));

        let restored: ConversionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.file_name, "photo.webp");
        assert_eq!(restored.file_size, 900);
        assert_eq!(restored.download_url, None);
    }

    #[test]
    fn test_descriptor_json_field_names() {
        let desc = FileDescriptor {
            name: "a.txt".to_string(),
            size: 5,
            mime_type: "text/plain".to_string(),
            last_modified: 1700000000000.0,
        };
        let json = serde_json::to_string(&desc).unwrap();
        assert!(json.contains("\"type\""));
        assert!(json.contains("\"lastModified\""));
    }
}
