use super::registry::NavigationEntry;
use super::resolver::is_child_active;
use std::collections::BTreeSet;

/// Labels of sidebar entries whose children are currently shown
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarExpansion {
    expanded: BTreeSet<String>,
}

impl SidebarExpansion {
    pub fn new<I, S>(defaults: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            expanded: defaults.into_iter().map(Into::into).collect(),
        }
    }

    /// Flips membership of `label`
    pub fn toggle(&mut self, label: &str) {
        if !self.expanded.remove(label) {
            self.expanded.insert(label.to_string());
        }
    }

    pub fn expand(&mut self, label: &str) {
        self.expanded.insert(label.to_string());
    }

    /// Expands every group holding the child at `path`; other groups keep their state
    pub fn reveal(&mut self, path: &str, entries: &[NavigationEntry]) {
        for entry in entries {
            if entry.children.iter().any(|c| is_child_active(path, c)) {
                self.expand(entry.label);
            }
        }
    }

    pub fn is_expanded(&self, label: &str) -> bool {
        self.expanded.contains(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::navigation::registry::NAVIGATION;

    #[test]
    fn test_toggle_twice_restores_membership() {
        let mut state = SidebarExpansion::new(["Restaurants"]);

        state.toggle("Restaurants");
        assert!(!state.is_expanded("Restaurants"));
        state.toggle("Restaurants");
        assert!(state.is_expanded("Restaurants"));

        state.toggle("Consultations");
        assert!(state.is_expanded("Consultations"));
        state.toggle("Consultations");
        assert!(!state.is_expanded("Consultations"));
        assert_eq!(state, SidebarExpansion::new(["Restaurants"]));
    }

    #[test]
    fn test_expand_is_idempotent() {
        let mut state = SidebarExpansion::default();
        state.expand("Consultations");
        state.expand("Consultations");
        assert_eq!(state, SidebarExpansion::new(["Consultations"]));
        state.toggle("Consultations");
        assert!(!state.is_expanded("Consultations"));
    }

    #[test]
    fn test_reveal_opens_group_of_active_child() {
        let mut state = SidebarExpansion::default();

        state.reveal("/dashboard/consultations/doctors", NAVIGATION);
        assert!(state.is_expanded("Consultations"));
        assert!(!state.is_expanded("Restaurants"));

        // top-level and unknown paths leave groups alone
        let before = state.clone();
        state.reveal("/dashboard/orders", NAVIGATION);
        state.reveal("/dashboard/restaurants/999", NAVIGATION);
        assert_eq!(state, before);
    }
}
