//! Format compatibility resolver.
//!
//! Pure functions mapping a selected input file to the set of output
//! formats the converter offers. The per-category rule table is
//! hand-authored and must stay stable: group labels and format lists
//! are part of the app's behavioral contract.

use crate::models::Category;

/// Label under which a group of output offers is presented.
///
/// Either a catalog category or an ad hoc pseudo-group such as the OCR
/// "text" offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputGroup {
    Category(Category),
    /// Text extraction (OCR for images, plain text for documents).
    Text,
    /// Dedicated animated-GIF offer for videos.
    Gif,
    /// Archive extraction capability.
    Extract,
    /// In-browser 3D viewer capability.
    Viewer,
}

impl OutputGroup {
    /// Stable string label for display and tests.
    pub fn label(self) -> &'static str {
        match self {
            OutputGroup::Category(category) => category.key(),
            OutputGroup::Text => "text",
            OutputGroup::Gif => "gif",
            OutputGroup::Extract => "extract",
            OutputGroup::Viewer => "viewer",
        }
    }

    /// Catalog metadata when the group corresponds to a category.
    pub fn category(self) -> Option<Category> {
        match self {
            OutputGroup::Category(category) => Some(category),
            _ => None,
        }
    }
}

/// What a group offers: a list of selectable formats or a bare
/// capability flag.
///
/// Consumers rendering selectable formats must skip `Capability`
/// entries; flags describe an action ("extract", "view"), not a target
/// format.
#[derive(Clone, Debug, PartialEq)]
pub enum OutputOffer {
    Formats(Vec<&'static str>),
    Capability(bool),
}

/// Ordered output groups for one input file. Insertion order is the
/// display order.
pub type OutputOptions = Vec<(OutputGroup, OutputOffer)>;

/// Find the category that recognizes an extension.
///
/// The extension is normalized (lowercased, leading dot stripped) and
/// categories are scanned in declaration order; the first match wins.
pub fn category_for_extension(ext: &str) -> Option<Category> {
    let ext = normalize_ext(ext);
    Category::ALL
        .into_iter()
        .find(|c| c.info().formats.contains(&ext.as_str()))
}

/// Output groups offered for a file of `category` with extension
/// `input_ext`.
///
/// The input extension never appears in its own same-category list. An
/// input extension the category does not recognize is a silent no-op:
/// the filter simply matches nothing and the full list is offered.
pub fn output_options_for(category: Category, input_ext: &str) -> OutputOptions {
    let input_ext = normalize_ext(input_ext);
    let same_category = OutputOffer::Formats(formats_minus(category, &input_ext));

    match category {
        Category::Images => vec![
            (OutputGroup::Category(Category::Images), same_category),
            (
                OutputGroup::Category(Category::Documents),
                OutputOffer::Formats(vec!["pdf"]),
            ),
            // OCR option
            (OutputGroup::Text, OutputOffer::Formats(vec!["txt"])),
        ],
        Category::Videos => vec![
            (OutputGroup::Category(Category::Videos), same_category),
            (
                OutputGroup::Category(Category::Audio),
                OutputOffer::Formats(vec!["mp3", "wav", "aac"]),
            ),
            // Frame extraction
            (
                OutputGroup::Category(Category::Images),
                OutputOffer::Formats(vec!["gif", "jpg", "png"]),
            ),
            (OutputGroup::Gif, OutputOffer::Formats(vec!["gif"])),
        ],
        Category::Audio => vec![(OutputGroup::Category(Category::Audio), same_category)],
        Category::Documents => vec![
            (OutputGroup::Category(Category::Documents), same_category),
            // For PDF to image
            (
                OutputGroup::Category(Category::Images),
                OutputOffer::Formats(vec!["pdf", "jpg", "png"]),
            ),
            (OutputGroup::Text, OutputOffer::Formats(vec!["txt"])),
        ],
        Category::Archives => vec![
            (OutputGroup::Category(Category::Archives), same_category),
            (OutputGroup::Extract, OutputOffer::Capability(true)),
        ],
        Category::ThreeD => vec![
            (OutputGroup::Category(Category::ThreeD), same_category),
            (OutputGroup::Viewer, OutputOffer::Capability(true)),
        ],
    }
}

/// A category's formats with the input extension removed.
fn formats_minus(category: Category, input_ext: &str) -> Vec<&'static str> {
    category
        .info()
        .formats
        .iter()
        .copied()
        .filter(|f| *f != input_ext)
        .collect()
}

fn normalize_ext(ext: &str) -> String {
    ext.trim_start_matches('.').to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_catalog_extension_resolves_to_its_category() {
        for category in Category::ALL {
            for ext in category.info().formats {
                assert_eq!(
                    category_for_extension(ext),
                    Some(category),
                    "extension {ext} did not resolve to {category}"
                );
            }
        }
    }

    #[test]
    fn test_extension_normalization() {
        assert_eq!(category_for_extension(".PNG"), Some(Category::Images));
        assert_eq!(category_for_extension("Mkv"), Some(Category::Videos));
        assert_eq!(category_for_extension("xyz"), None);
        assert_eq!(category_for_extension(""), None);
    }

    #[test]
    fn test_input_extension_never_offered_in_same_category() {
        for category in Category::ALL {
            for ext in category.info().formats {
                let options = output_options_for(category, ext);
                let (_, offer) = &options[0];
                match offer {
                    OutputOffer::Formats(formats) => {
                        assert!(
                            !formats.contains(ext),
                            "{ext} offered back to itself in {category}"
                        );
                    }
                    OutputOffer::Capability(_) => panic!("first group must list formats"),
                }
            }
        }
    }

    #[test]
    fn test_resolver_is_deterministic() {
        let a = output_options_for(Category::Videos, "mkv");
        let b = output_options_for(Category::Videos, "mkv");
        assert_eq!(a, b);
    }

    #[test]
    fn test_image_options_include_cross_category_offers() {
        let options = output_options_for(Category::Images, "png");
        let labels: Vec<&str> = options.iter().map(|(g, _)| g.label()).collect();
        assert_eq!(labels, ["images", "documents", "text"]);

        assert_eq!(
            options[1].1,
            OutputOffer::Formats(vec!["pdf"]),
            "documents group must offer exactly pdf"
        );
        assert_eq!(options[2].1, OutputOffer::Formats(vec!["txt"]));
    }

    #[test]
    fn test_photo_png_to_webp_scenario() {
        let options = output_options_for(Category::Images, "png");
        let OutputOffer::Formats(images) = &options[0].1 else {
            panic!("images group must list formats");
        };
        assert!(!images.contains(&"png"));
        assert!(images.contains(&"webp"));
    }

    #[test]
    fn test_movie_mkv_scenario() {
        let options = output_options_for(Category::Videos, "mkv");
        let labels: Vec<&str> = options.iter().map(|(g, _)| g.label()).collect();
        assert_eq!(labels, ["videos", "audio", "images", "gif"]);

        let audio = options
            .iter()
            .find(|(g, _)| *g == OutputGroup::Category(Category::Audio))
            .map(|(_, offer)| offer)
            .unwrap();
        assert_eq!(*audio, OutputOffer::Formats(vec!["mp3", "wav", "aac"]));
    }

    #[test]
    fn test_audio_offers_same_category_only() {
        let options = output_options_for(Category::Audio, "mp3");
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].0, OutputGroup::Category(Category::Audio));
    }

    #[test]
    fn test_capability_flags() {
        let archives = output_options_for(Category::Archives, "zip");
        assert_eq!(archives[1].0, OutputGroup::Extract);
        assert_eq!(archives[1].1, OutputOffer::Capability(true));

        let three_d = output_options_for(Category::ThreeD, "stl");
        assert_eq!(three_d[1].0, OutputGroup::Viewer);
        assert_eq!(three_d[1].1, OutputOffer::Capability(true));
    }

    #[test]
    fn test_unrecognized_extension_is_a_silent_no_op() {
        // "mp3" is not an image format, so nothing is filtered out.
        let options = output_options_for(Category::Images, "mp3");
        let OutputOffer::Formats(images) = &options[0].1 else {
            panic!("images group must list formats");
        };
        assert_eq!(images.len(), Category::Images.info().formats.len());
    }
}
