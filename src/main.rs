//! Pixlume - Image Viewer Preferences
//!
//! Entry point: sets up logging, initializes Libadwaita and runs the
//! preferences application.

use std::error::Error;

use tracing_subscriber::{EnvFilter, fmt};

use pixlume::{UiError, ui::PixlumeApplication};

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    libadwaita::init().map_err(|e| UiError::InitializationError(e.to_string()))?;

    let app = PixlumeApplication::new()?;
    app.run();

    Ok(())
}
