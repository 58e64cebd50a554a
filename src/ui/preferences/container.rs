//! Tab container of the preference widget.
//!
//! This module implements the `PreferenceWidget`: a vertical list of tab
//! entries beside a stack of tab pages, inside a scrolled window. Selection
//! is delegated to the `TabNavigator`; the widget only mirrors its state.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
    sync::Arc,
};

use {
    libadwaita::{
        glib::Propagation,
        gtk::{
            Align::Start,
            Box as GtkBox, EventControllerKey, Image, Label,
            Orientation::{Horizontal, Vertical},
            PolicyType::Never,
            ScrolledWindow, Separator, Stack, StackTransitionType::Crossfade, ToggleButton,
            gdk::Key,
        },
        prelude::{BoxExt, ButtonExt, ToggleButtonExt, WidgetExt},
    },
    tracing::debug,
};

use crate::{
    config::{LanguageCatalog, SettingsManager},
    state::{TabNavigator, notice_channel},
    ui::preferences::{
        AdvancedPreferencesPage, DisplayPreferencesPage, GeneralPreferencesPage, PreferenceTab,
    },
};

/// Widgets and selection state shared with the signal handlers.
struct Inner {
    navigator: RefCell<TabNavigator>,
    tab_list: GtkBox,
    stack: Stack,
    buttons: RefCell<Vec<ToggleButton>>,
    tabs: RefCell<Vec<PreferenceTab>>,
}

impl Inner {
    /// Selects `index` and restyles the tab entries if the selection changed.
    fn select(&self, index: usize) -> bool {
        let changed = self.navigator.borrow_mut().select(index);
        if changed {
            self.sync();
        }
        changed
    }

    fn select_next(&self) -> bool {
        let changed = self.navigator.borrow_mut().select_next();
        if changed {
            self.sync();
        }
        changed
    }

    fn select_previous(&self) -> bool {
        let changed = self.navigator.borrow_mut().select_previous();
        if changed {
            self.sync();
        }
        changed
    }

    /// Shows the active page and checks exactly its tab entry.
    ///
    /// The active entry ignores pointer input, so clicking it cannot toggle
    /// it off.
    fn sync(&self) {
        let navigator = self.navigator.borrow();
        let Some(current) = navigator.current_index() else {
            return;
        };

        self.stack.set_visible_child_name(&current.to_string());
        for (button, entry) in self.buttons.borrow().iter().zip(navigator.entries()) {
            button.set_active(entry.active);
            button.set_can_target(!entry.active);
        }
        debug!("PreferenceWidget: showing tab {}", current);
    }
}

/// Tab container for the preference panels.
pub struct PreferenceWidget {
    /// The scrolled window holding tab list and page stack.
    pub widget: ScrolledWindow,
    inner: Rc<Inner>,
}

impl PreferenceWidget {
    /// Creates an empty preference widget.
    ///
    /// `Down` selects the next tab and `Up` the previous one.
    pub fn new() -> Self {
        let tab_list = GtkBox::builder()
            .orientation(Vertical)
            .valign(Start)
            .margin_top(60)
            .width_request(180)
            .css_classes(["navigation-sidebar"])
            .build();

        let stack = Stack::builder()
            .hexpand(true)
            .vexpand(true)
            .transition_type(Crossfade)
            .build();

        let content = GtkBox::builder().orientation(Horizontal).build();
        content.append(&tab_list);
        content.append(&Separator::new(Vertical));
        content.append(&stack);

        let widget = ScrolledWindow::builder()
            .hscrollbar_policy(Never)
            .vexpand(true)
            .child(&content)
            .build();

        let inner = Rc::new(Inner {
            navigator: RefCell::new(TabNavigator::new()),
            tab_list,
            stack,
            buttons: RefCell::new(Vec::new()),
            tabs: RefCell::new(Vec::new()),
        });

        let key_controller = EventControllerKey::new();
        let weak_inner = Rc::downgrade(&inner);
        key_controller.connect_key_pressed(move |_, key, _code, _state| {
            let Some(inner) = weak_inner.upgrade() else {
                return Propagation::Proceed;
            };

            if key == Key::Down {
                inner.select_next();
                Propagation::Stop
            } else if key == Key::Up {
                inner.select_previous();
                Propagation::Stop
            } else {
                Propagation::Proceed
            }
        });
        widget.add_controller(key_controller);

        Self { widget, inner }
    }

    /// Creates the widget with the General, Display and Advanced tabs.
    ///
    /// # Arguments
    ///
    /// * `settings_manager` - Settings manager shared by all panels
    /// * `languages` - Languages offered on the General tab
    pub fn with_default_tabs(
        settings_manager: Arc<SettingsManager>,
        languages: LanguageCatalog,
    ) -> Self {
        let preference_widget = Self::new();

        let (general_tx, general_rx) = notice_channel();
        let general = GeneralPreferencesPage::new(settings_manager.clone(), languages, general_tx);
        preference_widget.add_tab(PreferenceTab::new(
            "General",
            "preferences-system-symbolic",
            &general.widget,
            general_rx,
        ));

        let (display_tx, display_rx) = notice_channel();
        let display = DisplayPreferencesPage::new(settings_manager.clone(), display_tx);
        preference_widget.add_tab(PreferenceTab::new(
            "Display",
            "video-display-symbolic",
            &display.widget,
            display_rx,
        ));
        general.connect_settings_reset(move || display.refresh());

        let (_advanced_tx, advanced_rx) = notice_channel();
        let advanced = AdvancedPreferencesPage::new(settings_manager);
        preference_widget.add_tab(PreferenceTab::new(
            "Advanced",
            "applications-engineering-symbolic",
            &advanced.widget,
            advanced_rx,
        ));

        debug!("PreferenceWidget: Created with three tabs");

        preference_widget
    }

    /// Appends a tab; the first tab added becomes the visible one.
    pub fn add_tab(&self, tab: PreferenceTab) {
        let index = self
            .inner
            .navigator
            .borrow_mut()
            .register(tab.name(), tab.icon_name());

        self.inner.stack.add_named(&tab.widget, Some(&index.to_string()));

        let entry_content = GtkBox::builder().orientation(Horizontal).spacing(12).build();
        entry_content.append(&Image::from_icon_name(tab.icon_name()));
        entry_content.append(&Label::new(Some(tab.name())));

        let button = ToggleButton::builder()
            .child(&entry_content)
            .css_classes(["flat"])
            .build();

        let weak_inner: Weak<Inner> = Rc::downgrade(&self.inner);
        button.connect_clicked(move |button| {
            let Some(inner) = weak_inner.upgrade() else {
                return;
            };
            if !inner.select(index) && !button.is_active() {
                // Keyboard activation of the active entry toggled it off.
                button.set_active(true);
            }
        });

        self.inner.tab_list.append(&button);
        self.inner.buttons.borrow_mut().push(button);
        self.inner.tabs.borrow_mut().push(tab);

        if index == 0 {
            self.inner.sync();
        }
    }

    /// Makes `index` the visible tab. Returns `true` if the selection changed.
    pub fn set_current_index(&self, index: usize) -> bool {
        self.inner.select(index)
    }

    /// Shows the next tab, wrapping around.
    pub fn next_tab(&self) -> bool {
        self.inner.select_next()
    }

    /// Shows the previous tab, wrapping around.
    pub fn previous_tab(&self) -> bool {
        self.inner.select_previous()
    }

    /// Index of the visible tab, `None` while no tab has been added.
    pub fn current_index(&self) -> Option<usize> {
        self.inner.navigator.borrow().current_index()
    }

    /// Info message currently shown on the tab at `index`.
    pub fn info_message(&self, index: usize) -> Option<String> {
        self.inner
            .tabs
            .borrow()
            .get(index)
            .map(PreferenceTab::info_message)
    }
}

impl Default for PreferenceWidget {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use libadwaita::{
        PreferencesPage,
        prelude::{ButtonExt, ToggleButtonExt, WidgetExt},
    };

    use crate::{
        state::notice_channel,
        ui::preferences::{PreferenceTab, container::PreferenceWidget},
    };

    #[test]
    #[ignore = "Requires GTK display for UI testing"]
    fn test_only_inactive_entries_take_clicks() {
        libadwaita::init().unwrap();
        let preferences = PreferenceWidget::new();

        for name in ["General", "Display"] {
            let (_sender, receiver) = notice_channel();
            let panel = PreferencesPage::new();
            preferences.add_tab(PreferenceTab::new(
                name,
                "preferences-system-symbolic",
                &panel,
                receiver,
            ));
        }

        let buttons = preferences.inner.buttons.borrow().clone();
        assert!(buttons[0].is_active() && !buttons[0].can_target());
        assert!(!buttons[1].is_active() && buttons[1].can_target());

        // Activating the selected entry keeps it selected.
        buttons[0].emit_clicked();
        assert_eq!(preferences.current_index(), Some(0));
        assert!(buttons[0].is_active());

        buttons[1].emit_clicked();
        assert_eq!(preferences.current_index(), Some(1));
        assert!(!buttons[0].is_active() && buttons[0].can_target());
        assert!(buttons[1].is_active() && !buttons[1].can_target());
    }
}
