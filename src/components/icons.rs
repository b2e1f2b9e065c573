//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::Category;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArchive as Archive, LuArrowLeft as ArrowLeft, LuArrowRight as ArrowRight, LuBox as Box,
        LuCheck as Check, LuDownload as Download, LuFile as File, LuFileText as FileText,
        LuGlobe as Globe, LuHouse as Home, LuImage as Image, LuMoon as Moon, LuMusic as Music,
        LuRefreshCw as Refresh, LuSettings as Settings, LuSlidersHorizontal as Sliders,
        LuSparkles as Sparkles, LuSun as Sun, LuUpload as Upload, LuVideo as Video, LuX as Close,
        LuZap as Zap,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArchive as Archive, BsArrowLeft as ArrowLeft, BsArrowRight as ArrowRight, BsBox as Box,
        BsCheckCircle as Check, BsDownload as Download, BsFileEarmark as File,
        BsFileEarmarkText as FileText, BsFilm as Video, BsGear as Settings, BsGlobe as Globe,
        BsHouseFill as Home, BsImage as Image, BsLightning as Zap, BsMoon as Moon,
        BsMusicNoteBeamed as Music, BsSliders as Sliders, BsStars as Sparkles, BsSun as Sun,
        BsUpload as Upload, BsXLg as Close, BsArrowRepeat as Refresh,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(UPLOAD, Upload);
themed_icon!(CLOSE, Close);
themed_icon!(FILE, File);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(CHECK, Check);
themed_icon!(DOWNLOAD, Download);
themed_icon!(REFRESH, Refresh);
themed_icon!(HOME, Home);
themed_icon!(SPARKLES, Sparkles);
themed_icon!(ARROW_LEFT, ArrowLeft);
themed_icon!(ARROW_RIGHT, ArrowRight);
themed_icon!(ZAP, Zap);
themed_icon!(MOON, Moon);
themed_icon!(SUN, Sun);
themed_icon!(GLOBE, Globe);
themed_icon!(SLIDERS, Sliders);
themed_icon!(SETTINGS, Settings);
themed_icon!(IMAGE, Image);
themed_icon!(VIDEO, Video);
themed_icon!(MUSIC, Music);
themed_icon!(ARCHIVE, Archive);
themed_icon!(BOX, Box);

/// Themed icon for a catalog category.
pub fn category_icon(category: Category) -> Icon {
    match category {
        Category::Images => IMAGE,
        Category::Videos => VIDEO,
        Category::Audio => MUSIC,
        Category::Documents => FILE_TEXT,
        Category::Archives => ARCHIVE,
        Category::ThreeD => BOX,
    }
}
