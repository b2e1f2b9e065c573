//! Hash-based routing.
//!
//! URL format: `#/select`, `#/select/images`, `#/convert`, `#/results`,
//! `#/settings`. The hash is the source of truth for navigation, which
//! keeps the app servable from any static host without rewrite rules.

use crate::models::Category;

/// Application routes for hash-based navigation.
#[derive(Clone, Debug, PartialEq)]
pub enum Route {
    /// Landing page: `#/` or empty hash.
    Home,
    /// Format selection, optionally carrying a pre-selected category:
    /// `#/select` or `#/select/<category-key>`.
    Select { category: Option<Category> },
    /// Conversion progress screen: `#/convert`.
    Convert,
    /// Conversion results screen: `#/results`.
    Results,
    /// Settings side branch: `#/settings`.
    Settings,
}

impl Route {
    /// Parse a URL hash into a route. Unknown paths fall back to Home.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_start_matches('/');
        let path = path.trim_end_matches('/');

        match path.split_once('/') {
            Some(("select", key)) => Self::Select {
                category: Category::from_key(key),
            },
            None => match path {
                "" => Self::Home,
                "select" => Self::Select { category: None },
                "convert" => Self::Convert,
                "results" => Self::Results,
                "settings" => Self::Settings,
                _ => Self::Home,
            },
            Some(_) => Self::Home,
        }
    }

    /// Convert the route back to a URL hash.
    pub fn to_hash(&self) -> String {
        match self {
            Self::Home => "#/".to_string(),
            Self::Select { category: None } => "#/select".to_string(),
            Self::Select {
                category: Some(category),
            } => format!("#/select/{}", category.key()),
            Self::Convert => "#/convert".to_string(),
            Self::Results => "#/results".to_string(),
            Self::Settings => "#/settings".to_string(),
        }
    }

    /// Get the current route from the browser URL.
    pub fn current() -> Self {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Self::from_hash(&hash)
    }

    /// Navigate to this route, adding a history entry.
    pub fn push(&self) {
        crate::utils::dom::set_hash(&self.to_hash());
    }

    /// Navigate to this route without adding a history entry.
    ///
    /// Used by entry guards so an invalid deep link does not leave a
    /// dead entry in back-button history.
    pub fn replace(&self) {
        crate::utils::dom::replace_hash(&self.to_hash());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(Route::from_hash(""), Route::Home);
        assert_eq!(Route::from_hash("#"), Route::Home);
        assert_eq!(Route::from_hash("#/"), Route::Home);
        assert_eq!(Route::from_hash("#/select"), Route::Select { category: None });
        assert_eq!(
            Route::from_hash("#/select/videos"),
            Route::Select {
                category: Some(Category::Videos),
            }
        );
        assert_eq!(
            Route::from_hash("#/select/3d"),
            Route::Select {
                category: Some(Category::ThreeD),
            }
        );
        assert_eq!(Route::from_hash("#/convert"), Route::Convert);
        assert_eq!(Route::from_hash("#/results"), Route::Results);
        assert_eq!(Route::from_hash("#/settings"), Route::Settings);
    }

    #[test]
    fn test_unknown_paths_fall_back_to_home() {
        assert_eq!(Route::from_hash("#/nope"), Route::Home);
        assert_eq!(Route::from_hash("#/convert/extra"), Route::Home);
        // Unknown category key degrades to plain selection.
        assert_eq!(
            Route::from_hash("#/select/spreadsheets"),
            Route::Select { category: None }
        );
    }

    #[test]
    fn test_route_to_hash() {
        assert_eq!(Route::Home.to_hash(), "#/");
        assert_eq!(Route::Select { category: None }.to_hash(), "#/select");
        assert_eq!(
            Route::Select {
                category: Some(Category::Images),
            }
            .to_hash(),
            "#/select/images"
        );
        assert_eq!(Route::Convert.to_hash(), "#/convert");
        assert_eq!(Route::Results.to_hash(), "#/results");
        assert_eq!(Route::Settings.to_hash(), "#/settings");
    }

    #[test]
    fn test_hash_round_trip() {
        let routes = [
            Route::Home,
            Route::Select { category: None },
            Route::Select {
                category: Some(Category::Archives),
            },
            Route::Convert,
            Route::Results,
            Route::Settings,
        ];
        for route in routes {
            assert_eq!(Route::from_hash(&route.to_hash()), route);
        }
    }
}
