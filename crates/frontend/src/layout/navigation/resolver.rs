//! Path → title resolution and sidebar active state.

use super::registry::{NavigationChild, NavigationEntry};

/// Title shown when no registry entry matches
pub const FALLBACK_TITLE: &str = "Dashboard";

/// Resolves the header title for `path`.
///
/// Two passes over the registry:
/// 1. exact match on a top-level path, then on any child path (registry order);
/// 2. `path` under `entry.path + "/"`, first entry in registry order wins.
///
/// The exact/child pass must finish before the prefix pass starts, otherwise a
/// shorter top-level prefix would shadow a more specific child label.
pub fn resolve_title(path: &str, entries: &[NavigationEntry]) -> &'static str {
    if let Some(entry) = entries.iter().find(|e| e.path == path) {
        return entry.label;
    }

    if let Some(child) = entries
        .iter()
        .flat_map(|e| e.children.iter())
        .find(|c| c.path == path)
    {
        return child.label;
    }

    entries
        .iter()
        .find(|e| is_sub_path(path, e.path))
        .map(|e| e.label)
        .unwrap_or(FALLBACK_TITLE)
}

/// `path` lies strictly below `parent` on a segment boundary
fn is_sub_path(path: &str, parent: &str) -> bool {
    path.strip_prefix(parent)
        .map_or(false, |rest| rest.starts_with('/'))
}

/// Entry is highlighted when `path` is its own path or one of its children's
pub fn is_entry_active(path: &str, entry: &NavigationEntry) -> bool {
    entry.path == path || entry.children.iter().any(|c| is_child_active(path, c))
}

pub fn is_child_active(path: &str, child: &NavigationChild) -> bool {
    child.path == path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::navigation::registry::NAVIGATION;

    static REGISTRY: &[NavigationEntry] = &[
        NavigationEntry {
            label: "Orders",
            icon: "orders",
            path: "/dashboard/orders",
            children: &[],
        },
        NavigationEntry {
            label: "Restaurants",
            icon: "store",
            path: "/dashboard/restaurants",
            children: &[NavigationChild {
                label: "Orders",
                path: "/dashboard/restaurants/orders",
            }],
        },
    ];

    #[test]
    fn test_top_level_exact_match() {
        for entry in NAVIGATION {
            assert_eq!(resolve_title(entry.path, NAVIGATION), entry.label);
        }
    }

    #[test]
    fn test_child_exact_match() {
        for entry in NAVIGATION {
            for child in entry.children {
                assert_eq!(resolve_title(child.path, NAVIGATION), child.label);
            }
        }
    }

    #[test]
    fn test_child_wins_over_parent_prefix() {
        assert_eq!(resolve_title("/dashboard/restaurants/orders", REGISTRY), "Orders");
    }

    #[test]
    fn test_prefix_match_on_parent() {
        assert_eq!(resolve_title("/dashboard/restaurants/999", REGISTRY), "Restaurants");
        assert_eq!(resolve_title("/dashboard/orders/123", REGISTRY), "Orders");
        assert_eq!(resolve_title("/dashboard/orders/123", NAVIGATION), "Orders");
    }

    #[test]
    fn test_no_partial_segment_match() {
        assert_eq!(resolve_title("/dashboard/ord", REGISTRY), FALLBACK_TITLE);
        assert_eq!(resolve_title("/dashboard/ordersx", REGISTRY), FALLBACK_TITLE);
    }

    #[test]
    fn test_unknown_path_falls_back() {
        assert_eq!(resolve_title("/unknown", NAVIGATION), FALLBACK_TITLE);
        assert_eq!(resolve_title("", NAVIGATION), FALLBACK_TITLE);
        assert_eq!(resolve_title("/dashboard", NAVIGATION), FALLBACK_TITLE);
    }

    #[test]
    fn test_registry_order_breaks_prefix_ties() {
        static NESTED: &[NavigationEntry] = &[
            NavigationEntry {
                label: "Shop",
                icon: "",
                path: "/dashboard/shop",
                children: &[],
            },
            NavigationEntry {
                label: "Shop items",
                icon: "",
                path: "/dashboard/shop/items",
                children: &[],
            },
        ];
        // first entry wins even though the second is the longer prefix
        assert_eq!(resolve_title("/dashboard/shop/items/5", NESTED), "Shop");
        assert_eq!(resolve_title("/dashboard/shop/items", NESTED), "Shop items");
    }

    #[test]
    fn test_active_state() {
        let restaurants = &REGISTRY[1];
        assert!(is_entry_active("/dashboard/restaurants", restaurants));
        assert!(is_entry_active("/dashboard/restaurants/orders", restaurants));
        assert!(!is_entry_active("/dashboard/restaurants/999", restaurants));
        assert!(!is_entry_active("/dashboard/orders", restaurants));

        let child = &restaurants.children[0];
        assert!(is_child_active("/dashboard/restaurants/orders", child));
        assert!(!is_child_active("/dashboard/restaurants", child));
    }
}
