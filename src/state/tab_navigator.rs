//! Selection model of the preference tab container.
//!
//! The `TabNavigator` tracks the registered tab entries and which one is
//! active. It is independent of GTK: the preference widget asks it to change
//! the selection and restyles its buttons only when a change is reported.

use tracing::debug;

/// One entry in the tab list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabEntry {
    /// Label of the entry.
    pub name: String,
    /// Icon shown next to the label.
    pub icon_name: String,
    /// Whether this entry is the selected one.
    pub active: bool,
}

/// Ordered tab entries with at most one active entry.
///
/// Once at least one tab is registered, exactly one entry is active and
/// `current_index` is always in bounds.
#[derive(Debug, Clone, Default)]
pub struct TabNavigator {
    entries: Vec<TabEntry>,
    current: Option<usize>,
}

impl TabNavigator {
    /// Creates an empty navigator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a tab entry and returns its index.
    ///
    /// The first registered tab becomes the active one.
    pub fn register(&mut self, name: &str, icon_name: &str) -> usize {
        let index = self.entries.len();
        self.entries.push(TabEntry {
            name: name.to_string(),
            icon_name: icon_name.to_string(),
            active: false,
        });
        debug!("TabNavigator: registered '{}' at {}", name, index);

        if index == 0 {
            self.select(0);
        }

        index
    }

    /// Makes `index` the active tab.
    ///
    /// # Returns
    ///
    /// `true` if the selection changed. Selecting the active tab or an index
    /// out of range leaves everything untouched and returns `false`.
    pub fn select(&mut self, index: usize) -> bool {
        if self.current == Some(index) || index >= self.entries.len() {
            return false;
        }

        self.current = Some(index);
        for (i, entry) in self.entries.iter_mut().enumerate() {
            entry.active = i == index;
        }
        debug!("TabNavigator: selected tab {}", index);

        true
    }

    /// Selects the following tab, wrapping to the first after the last.
    pub fn select_next(&mut self) -> bool {
        let count = self.entries.len();
        match self.current {
            Some(current) if count > 0 => self.select((current + 1) % count),
            _ => false,
        }
    }

    /// Selects the preceding tab, wrapping to the last before the first.
    pub fn select_previous(&mut self) -> bool {
        let count = self.entries.len();
        match self.current {
            Some(0) if count > 0 => self.select(count - 1),
            Some(current) if count > 0 => self.select(current - 1),
            _ => false,
        }
    }

    /// Index of the active tab, `None` while no tab is registered.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// All entries in registration order.
    #[must_use]
    pub fn entries(&self) -> &[TabEntry] {
        &self.entries
    }

    /// Number of registered tabs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no tab is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::state::tab_navigator::TabNavigator;

    fn navigator_with(count: usize) -> TabNavigator {
        let mut navigator = TabNavigator::new();
        for i in 0..count {
            navigator.register(&format!("Tab {i}"), "preferences-system-symbolic");
        }
        navigator
    }

    fn active_count(navigator: &TabNavigator) -> usize {
        navigator
            .entries()
            .iter()
            .filter(|entry| entry.active)
            .count()
    }

    #[test]
    fn test_first_registration_becomes_active() {
        let mut navigator = TabNavigator::new();
        assert_eq!(navigator.current_index(), None);

        navigator.register("General", "preferences-system-symbolic");
        assert_eq!(navigator.current_index(), Some(0));
        assert!(navigator.entries()[0].active);

        navigator.register("Display", "video-display-symbolic");
        assert_eq!(navigator.current_index(), Some(0));
        assert!(!navigator.entries()[1].active);
    }

    #[test]
    fn test_select_marks_exactly_one_active() {
        let mut navigator = navigator_with(3);

        assert!(navigator.select(2));
        assert_eq!(navigator.current_index(), Some(2));
        assert_eq!(active_count(&navigator), 1);
        assert!(navigator.entries()[2].active);
    }

    #[test]
    fn test_reselect_is_noop() {
        let mut navigator = navigator_with(3);
        navigator.select(1);
        let before = navigator.entries().to_vec();

        assert!(!navigator.select(1));
        assert_eq!(navigator.current_index(), Some(1));
        assert_eq!(navigator.entries(), before.as_slice());
    }

    #[test]
    fn test_out_of_range_select_is_ignored() {
        let mut navigator = navigator_with(2);
        assert!(!navigator.select(2));
        assert_eq!(navigator.current_index(), Some(0));
    }

    #[test]
    fn test_next_cycles_back_to_start() {
        for count in 1..=5 {
            let mut navigator = navigator_with(count);
            for _ in 0..count {
                navigator.select_next();
            }
            assert_eq!(navigator.current_index(), Some(0));
        }
    }

    #[test]
    fn test_wrap_around() {
        let mut navigator = navigator_with(3);

        assert!(navigator.select_previous());
        assert_eq!(navigator.current_index(), Some(2));

        assert!(navigator.select_next());
        assert_eq!(navigator.current_index(), Some(0));
    }

    #[test]
    fn test_single_tab_navigation_is_noop() {
        let mut navigator = navigator_with(1);
        assert!(!navigator.select_next());
        assert!(!navigator.select_previous());
        assert_eq!(navigator.current_index(), Some(0));
    }

    #[test]
    fn test_empty_navigator_is_guarded() {
        let mut navigator = TabNavigator::new();
        assert!(!navigator.select_next());
        assert!(!navigator.select_previous());
        assert!(!navigator.select(0));
        assert!(navigator.is_empty());
        assert_eq!(navigator.current_index(), None);
    }
}
