//! Color scheme lookup service

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::color_scheme::{ColorScheme, SchemeMode},
};

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9A-Fa-f]{6}$").expect("valid regex"));

/// Palette provider supplied by the host (a web API, a local generator, ...)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaletteSource: Send + Sync {
    /// Hex codes (without `#`) for one palette family of `hex`
    async fn palette(&self, hex: &str, mode: SchemeMode) -> AppResult<Vec<String>>;
}

#[derive(Clone)]
pub struct ColorSchemeService {
    source: Arc<dyn PaletteSource>,
}

impl ColorSchemeService {
    pub fn new(source: Arc<dyn PaletteSource>) -> Self {
        Self { source }
    }

    /// Build every palette family for a 6-digit hex color (`#` optional)
    pub async fn scheme(&self, hex_color: &str) -> AppResult<ColorScheme> {
        let hex = hex_color.replace('#', "").trim().to_string();
        if !HEX_COLOR.is_match(&hex) {
            return Err(AppError::Validation(
                "Invalid hex color format. Please use 6-digit hex code (e.g., FF5733).".to_string(),
            ));
        }

        let mut scheme = ColorScheme {
            base: hex.clone(),
            ..Default::default()
        };
        for mode in SchemeMode::ALL {
            let colors = self.source.palette(&hex, mode).await.map_err(|e| {
                tracing::warn!("Palette lookup for {} failed: {}", hex, e);
                AppError::Gateway(format!("Failed to fetch color schemes: {}", e.user_message()))
            })?;
            match mode {
                SchemeMode::Monochromatic => scheme.monochromatic = colors,
                SchemeMode::Analogous => scheme.analogous = colors,
                SchemeMode::Complementary => scheme.complementary = colors,
                SchemeMode::Neutral => scheme.neutral = colors,
            }
        }
        Ok(scheme)
    }
}
