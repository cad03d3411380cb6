//! Loading the optional label font.
//!
//! Button labels use a font read from disk at startup. When it can't be read
//! the buttons still work, they just have no text.

use std::path::Path;

use egui::{Context, FontData, FontDefinitions, FontFamily, FontId};
use thiserror::Error;

use crate::components::LABEL_SIZE;

/// Name the label font is registered under
pub const LABEL_FAMILY: &str = "canvas-label";

#[derive(Debug, Error)]
pub enum FontError {
    #[error("failed to read font {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("font file {0} is empty")]
    Empty(String),

    #[error("font file {path} is not a usable TTF/OTF font: {source}")]
    Parse {
        path: String,
        #[source]
        source: ab_glyph::InvalidFont,
    },
}

/// Read the label font from disk
pub fn load_font_bytes(path: impl AsRef<Path>) -> Result<Vec<u8>, FontError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| FontError::Read {
        path: path.display().to_string(),
        source,
    })?;
    if bytes.is_empty() {
        return Err(FontError::Empty(path.display().to_string()));
    }
    // egui panics on font data it cannot parse, so reject it here.
    ab_glyph::FontVec::try_from_vec(bytes.clone()).map_err(|source| FontError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    Ok(bytes)
}

/// Register `bytes` as the label family on top of egui's default fonts
pub fn label_font_definitions(bytes: Vec<u8>) -> FontDefinitions {
    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(LABEL_FAMILY.to_owned(), FontData::from_owned(bytes).into());
    fonts
        .families
        .insert(FontFamily::Name(LABEL_FAMILY.into()), vec![LABEL_FAMILY.to_owned()]);
    fonts
}

/// Load the label font and install it into `ctx`.
///
/// Returns the font to draw labels with.
pub fn install_label_font(ctx: &Context, path: impl AsRef<Path>) -> Result<FontId, FontError> {
    let bytes = load_font_bytes(path.as_ref())?;
    ctx.set_fonts(label_font_definitions(bytes));
    log::info!("Loaded label font from {}", path.as_ref().display());
    Ok(label_font())
}

pub fn label_font() -> FontId {
    FontId::new(LABEL_SIZE, FontFamily::Name(LABEL_FAMILY.into()))
}
