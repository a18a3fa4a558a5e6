//! Navigation module
//!
//! - `registry` - static list of sidebar entries (single source of truth for routes)
//! - `resolver` - path → header title, sidebar active state
//! - `expansion` - expanded/collapsed sidebar groups

pub mod expansion;
pub mod registry;
pub mod resolver;

pub use expansion::SidebarExpansion;
pub use registry::{
    NavigationChild, NavigationEntry, DEFAULT_EXPANDED, HOME_PATH, NAVIGATION, ROOT_PATH,
};
pub use resolver::{is_child_active, is_entry_active, resolve_title, FALLBACK_TITLE};
