//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::NavIcon;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuActivity as Activity, LuChevronDown as ChevronDown, LuChevronRight as ChevronRight,
        LuDatabase as Database, LuFolder as Folder, LuHouse as Home, LuMenu as Menu,
        LuSettings as Settings, LuTriangleAlert as Alert, LuUser as User,
    };
}

mod bootstrap {
    pub use icondata::{
        BsActivity as Activity, BsChevronDown as ChevronDown, BsChevronRight as ChevronRight,
        BsDatabase as Database, BsExclamationTriangle as Alert, BsFolderFill as Folder,
        BsGear as Settings, BsHouseFill as Home, BsList as Menu, BsPerson as User,
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

themed_icon!(ALERT, Alert);
themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(MENU, Menu);
themed_icon!(ACTIVITY, Activity);
themed_icon!(DATABASE, Database);
themed_icon!(FOLDER, Folder);
themed_icon!(HOME, Home);
themed_icon!(SETTINGS, Settings);
themed_icon!(USER, User);

/// Resolve a navigation item's named icon.
pub fn nav_icon(icon: NavIcon) -> Icon {
    match icon {
        NavIcon::Activity => ACTIVITY,
        NavIcon::Database => DATABASE,
        NavIcon::Folder => FOLDER,
        NavIcon::Home => HOME,
        NavIcon::Settings => SETTINGS,
        NavIcon::User => USER,
    }
}
