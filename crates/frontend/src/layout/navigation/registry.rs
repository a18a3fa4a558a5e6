//! Route registry - the single source of truth for sidebar entries and page titles.
//!
//! Entries are a `static` table: defined once, never mutated, shared by reference.
//! Registry order matters: it is the sidebar order and the tie-break of the
//! prefix pass in [`super::resolver::resolve_title`].

/// Nested sidebar destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationChild {
    pub label: &'static str,
    pub path: &'static str,
}

/// Top-level sidebar destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationEntry {
    pub label: &'static str,
    /// Icon name for `shared::icons::icon`
    pub icon: &'static str,
    pub path: &'static str,
    /// Empty slice when the entry has no children
    pub children: &'static [NavigationChild],
}

impl NavigationEntry {
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

pub const ROOT_PATH: &str = "/dashboard";
pub const HOME_PATH: &str = "/dashboard/overview";

pub static NAVIGATION: &[NavigationEntry] = &[
    NavigationEntry {
        label: "Overview",
        icon: "layout-dashboard",
        path: HOME_PATH,
        children: &[],
    },
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
        children: &[
            NavigationChild {
                label: "Directory",
                path: "/dashboard/restaurants/directory",
            },
            NavigationChild {
                label: "Orders",
                path: "/dashboard/restaurants/orders",
            },
        ],
    },
    NavigationEntry {
        label: "Consultations",
        icon: "stethoscope",
        path: "/dashboard/consultations",
        children: &[
            NavigationChild {
                label: "Doctors",
                path: "/dashboard/consultations/doctors",
            },
            NavigationChild {
                label: "Prescriptions",
                path: "/dashboard/consultations/prescriptions",
            },
        ],
    },
    NavigationEntry {
        label: "Users",
        icon: "users",
        path: "/dashboard/users",
        children: &[],
    },
    NavigationEntry {
        label: "Settings",
        icon: "settings",
        path: "/dashboard/settings",
        children: &[],
    },
];

/// Labels expanded in the sidebar on first render
pub static DEFAULT_EXPANDED: &[&str] = &["Restaurants"];

/// Every path declared by the registry, top-level entries first then their children
pub fn all_paths(entries: &[NavigationEntry]) -> Vec<&'static str> {
    entries
        .iter()
        .flat_map(|e| std::iter::once(e.path).chain(e.children.iter().map(|c| c.path)))
        .collect()
}

/// Paths declared more than once. Empty for a well-formed registry.
pub fn duplicate_paths(entries: &[NavigationEntry]) -> Vec<&'static str> {
    let paths = all_paths(entries);
    let mut duplicates = Vec::new();
    for (i, path) in paths.iter().enumerate() {
        if paths[..i].contains(path) && !duplicates.contains(path) {
            duplicates.push(*path);
        }
    }
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_paths_are_unique() {
        assert!(duplicate_paths(NAVIGATION).is_empty());
    }

    #[test]
    fn test_registry_paths_are_rooted() {
        for path in all_paths(NAVIGATION) {
            assert!(
                path.starts_with(&format!("{}/", ROOT_PATH)),
                "path outside root: {}",
                path
            );
            assert!(!path.ends_with('/'), "trailing slash: {}", path);
        }
    }

    #[test]
    fn test_default_expanded_labels_exist() {
        for label in DEFAULT_EXPANDED {
            assert!(NAVIGATION
                .iter()
                .any(|e| e.label == *label && e.has_children()));
        }
    }

    #[test]
    fn test_duplicate_paths_detected() {
        static BROKEN: &[NavigationEntry] = &[
            NavigationEntry {
                label: "A",
                icon: "",
                path: "/dashboard/a",
                children: &[NavigationChild {
                    label: "Again",
                    path: "/dashboard/a",
                }],
            },
            NavigationEntry {
                label: "B",
                icon: "",
                path: "/dashboard/b",
                children: &[],
            },
        ];
        assert_eq!(duplicate_paths(BROKEN), vec!["/dashboard/a"]);
    }
}
