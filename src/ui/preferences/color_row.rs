//! Color chooser row with swatch, chooser dialog and reset action.

use std::sync::Arc;

use {
    libadwaita::{
        ActionRow,
        glib::MainContext,
        gtk::{
            Align::Center, Box as GtkBox, Button, ColorDialog, DrawingArea, Orientation::Horizontal,
            Window, gdk::RGBA,
        },
        prelude::{ActionRowExt, BoxExt, ButtonExt, Cast, DrawingAreaExtManual, WidgetExt},
    },
    tracing::debug,
};

use crate::{
    config::{ColorBinding, Rgba, SettingsManager},
    state::NoticeSender,
};

/// Converts a settings color to a GDK color.
#[must_use]
pub fn to_gdk_rgba(color: Rgba) -> RGBA {
    RGBA::new(
        f32::from(color.r) / 255.0,
        f32::from(color.g) / 255.0,
        f32::from(color.b) / 255.0,
        f32::from(color.a) / 255.0,
    )
}

/// Converts a GDK color to a settings color.
#[must_use]
pub fn from_gdk_rgba(rgba: &RGBA) -> Rgba {
    let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
    Rgba::new(
        channel(rgba.red()),
        channel(rgba.green()),
        channel(rgba.blue()),
        channel(rgba.alpha()),
    )
}

/// Row that edits one color setting.
///
/// The swatch always paints the stored color. Picking a color in the dialog
/// accepts it; the reset button restores the row's default color.
pub struct ColorRow {
    /// The underlying Libadwaita action row.
    pub widget: ActionRow,
    /// Swatch showing the stored color.
    swatch: DrawingArea,
}

impl ColorRow {
    /// Creates a new color row.
    ///
    /// # Arguments
    ///
    /// * `title` - Name of the color
    /// * `binding` - Color field and its reset semantics
    /// * `settings_manager` - Settings manager reference
    /// * `notices` - Channel for notices raised by the write
    pub fn new(
        title: &str,
        binding: &'static ColorBinding,
        settings_manager: Arc<SettingsManager>,
        notices: NoticeSender,
    ) -> Self {
        let widget = ActionRow::builder().title(title).build();

        let swatch = DrawingArea::builder()
            .content_width(32)
            .content_height(20)
            .build();
        let settings_for_draw = settings_manager.clone();
        swatch.set_draw_func(move |_, cr, width, height| {
            let color = binding.color.read(&settings_for_draw.get_settings());
            cr.set_source_rgba(
                f64::from(color.r) / 255.0,
                f64::from(color.g) / 255.0,
                f64::from(color.b) / 255.0,
                f64::from(color.a) / 255.0,
            );
            cr.rectangle(0.0, 0.0, f64::from(width), f64::from(height));
            let _ = cr.fill();
        });

        let choose_button = Button::builder()
            .child(&swatch)
            .tooltip_text("Choose color")
            .valign(Center)
            .build();

        let reset_button = Button::builder()
            .icon_name("edit-undo-symbolic")
            .tooltip_text("Reset to default color")
            .valign(Center)
            .css_classes(["flat"])
            .build();

        let controls = GtkBox::builder().orientation(Horizontal).spacing(6).build();
        controls.append(&choose_button);
        controls.append(&reset_button);
        widget.add_suffix(&controls);

        let settings_for_choose = settings_manager.clone();
        let notices_for_choose = notices.clone();
        let swatch_for_choose = swatch.clone();
        let title_for_choose = title.to_string();
        choose_button.connect_clicked(move |button| {
            let parent = button
                .root()
                .and_then(|root| root.downcast::<Window>().ok());
            let initial = binding.color.read(&settings_for_choose.get_settings());

            let settings_manager = settings_for_choose.clone();
            let notices = notices_for_choose.clone();
            let swatch = swatch_for_choose.clone();
            let title = title_for_choose.clone();

            MainContext::default().spawn_local(async move {
                let dialog = ColorDialog::builder()
                    .title(title.as_str())
                    .modal(true)
                    .with_alpha(true)
                    .build();

                match dialog
                    .choose_rgba_future(parent.as_ref(), Some(&to_gdk_rgba(initial)))
                    .await
                {
                    Ok(rgba) => {
                        let outcome =
                            settings_manager.apply_color_accepted(binding, from_gdk_rgba(&rgba));
                        swatch.queue_draw();
                        notices.notify(outcome.notice());
                    }
                    Err(e) => debug!("ColorRow: {} chooser dismissed: {}", binding.key(), e),
                }
            });
        });

        let swatch_for_reset = swatch.clone();
        reset_button.connect_clicked(move |_| {
            let outcome = settings_manager.apply_color_reset(binding);
            swatch_for_reset.queue_draw();
            notices.notify(outcome.notice());
        });

        Self { widget, swatch }
    }

    /// Repaints the swatch from the stored color.
    pub fn refresh(&self) {
        self.swatch.queue_draw();
    }
}
