//! Static format catalog.
//!
//! Six fixed file-kind categories, each with display metadata and the
//! set of extensions it recognizes. Declaration order is significant:
//! extension lookup scans categories in this order and the first match
//! wins, so ambiguous extensions resolve to the earliest category.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the six fixed file-kind groupings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Category {
    Images,
    Videos,
    Audio,
    Documents,
    Archives,
    ThreeD,
}

/// Display metadata and recognized extensions for a category.
pub struct CategoryInfo {
    /// Human-readable display name.
    pub name: &'static str,
    /// Emoji glyph used where no themed icon is rendered.
    pub glyph: &'static str,
    /// Recognized extensions, lowercase, no leading dot.
    pub formats: &'static [&'static str],
    /// CSS gradient token for category cards.
    pub color: &'static str,
}

const IMAGES: CategoryInfo = CategoryInfo {
    name: "Images",
    glyph: "🖼️",
    formats: &[
        "jpg", "jpeg", "png", "webp", "bmp", "gif", "svg", "tiff", "heic", "avif", "raw", "cr2",
        "nef", "dng", "ico", "jfif",
    ],
    color: "from-blue-500 to-cyan-500",
};

const VIDEOS: CategoryInfo = CategoryInfo {
    name: "Videos",
    glyph: "🎬",
    formats: &[
        "mp4", "mkv", "mov", "avi", "mpeg", "mpg", "webm", "m4v", "flv", "wmv", "3gp", "ogv", "ts",
    ],
    color: "from-purple-500 to-pink-500",
};

const AUDIO: CategoryInfo = CategoryInfo {
    name: "Audio",
    glyph: "🎵",
    formats: &[
        "mp3", "wav", "aac", "flac", "ogg", "m4a", "opus", "wma", "amr", "aiff", "midi", "pcm",
    ],
    color: "from-green-500 to-emerald-500",
};

const DOCUMENTS: CategoryInfo = CategoryInfo {
    name: "Documents",
    glyph: "📄",
    formats: &[
        "pdf", "doc", "docx", "txt", "rtf", "odt", "ppt", "pptx", "xls", "xlsx", "epub", "mobi",
        "csv", "md",
    ],
    color: "from-orange-500 to-red-500",
};

const ARCHIVES: CategoryInfo = CategoryInfo {
    name: "Archives",
    glyph: "📦",
    formats: &["zip", "rar", "7z", "tar", "gz", "bz2", "iso"],
    color: "from-yellow-500 to-amber-500",
};

const THREE_D: CategoryInfo = CategoryInfo {
    name: "3D / CAD",
    glyph: "🎮",
    formats: &["obj", "stl", "fbx", "gltf", "step", "dwg", "dxf"],
    color: "from-indigo-500 to-violet-500",
};

impl Category {
    /// All categories in declaration (lookup) order.
    pub const ALL: [Category; 6] = [
        Category::Images,
        Category::Videos,
        Category::Audio,
        Category::Documents,
        Category::Archives,
        Category::ThreeD,
    ];

    /// Catalog entry for this category.
    pub fn info(self) -> &'static CategoryInfo {
        match self {
            Category::Images => &IMAGES,
            Category::Videos => &VIDEOS,
            Category::Audio => &AUDIO,
            Category::Documents => &DOCUMENTS,
            Category::Archives => &ARCHIVES,
            Category::ThreeD => &THREE_D,
        }
    }

    /// Stable string key used in routes and storage (`"images"`, .., `"3d"`).
    pub fn key(self) -> &'static str {
        match self {
            Category::Images => "images",
            Category::Videos => "videos",
            Category::Audio => "audio",
            Category::Documents => "documents",
            Category::Archives => "archives",
            Category::ThreeD => "3d",
        }
    }

    /// Parse a string key back into a category.
    pub fn from_key(key: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.key() == key)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info().name)
    }
}

impl TryFrom<String> for Category {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Category::from_key(&value).ok_or_else(|| format!("unknown category key: {value}"))
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.key().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_key(category.key()), Some(category));
        }
        assert_eq!(Category::from_key("unknown"), None);
    }

    #[test]
    fn test_catalog_is_populated() {
        for category in Category::ALL {
            let info = category.info();
            assert!(!info.name.is_empty());
            assert!(!info.formats.is_empty());
            assert!(!info.color.is_empty());
        }
    }

    #[test]
    fn test_extensions_are_normalized() {
        for category in Category::ALL {
            for ext in category.info().formats {
                assert_eq!(*ext, ext.to_lowercase(), "{ext} is not lowercase");
                assert!(!ext.starts_with('.'), "{ext} carries a leading dot");
            }
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Category::Images.to_string(), "Images");
        assert_eq!(Category::ThreeD.to_string(), "3D / CAD");
    }
}
