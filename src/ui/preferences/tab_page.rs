//! Tab page wrapping one preference panel.

use {
    async_channel::Receiver,
    libadwaita::{
        glib::MainContext,
        gtk::{Align::Start, Box as GtkBox, Label, Orientation::Vertical, Widget},
        prelude::{BoxExt, IsA, WidgetExt},
    },
};

use crate::state::Notice;

/// Title, panel and info label stacked vertically.
///
/// The page drains its panel's notice channel on the main loop and shows the
/// latest notice in the info label.
pub struct PreferenceTab {
    /// The container widget placed in the preference stack.
    pub widget: GtkBox,
    /// Tab name shown as title and in the tab list.
    name: String,
    /// Icon shown in the tab list.
    icon_name: String,
    /// Label showing the latest notice.
    info_label: Label,
}

impl PreferenceTab {
    /// Creates a new tab page around `panel`.
    ///
    /// # Arguments
    ///
    /// * `name` - Tab name
    /// * `icon_name` - Icon shown next to the name in the tab list
    /// * `panel` - Panel widget
    /// * `notices` - Receiving end of the panel's notice channel
    pub fn new(
        name: &str,
        icon_name: &str,
        panel: &impl IsA<Widget>,
        notices: Receiver<Notice>,
    ) -> Self {
        let widget = GtkBox::builder().orientation(Vertical).spacing(12).build();

        let title_label = Label::builder()
            .label(name)
            .halign(Start)
            .margin_top(12)
            .margin_start(12)
            .css_classes(["title-1"])
            .build();
        widget.append(&title_label);

        panel.set_vexpand(true);
        widget.append(panel);

        let info_label = Label::builder()
            .halign(Start)
            .margin_start(12)
            .margin_bottom(12)
            .wrap(true)
            .css_classes(["warning"])
            .build();
        widget.append(&info_label);

        let label = info_label.clone();
        MainContext::default().spawn_local(async move {
            while let Ok(notice) = notices.recv().await {
                label.set_label(notice.message());
            }
        });

        Self {
            widget,
            name: name.to_string(),
            icon_name: icon_name.to_string(),
            info_label,
        }
    }

    /// Tab name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Icon name.
    pub fn icon_name(&self) -> &str {
        &self.icon_name
    }

    /// Text currently shown in the info label.
    pub fn info_message(&self) -> String {
        self.info_label.label().to_string()
    }
}
