//! Color palette models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Palette families requested from the palette source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SchemeMode {
    Monochromatic,
    Analogous,
    Complementary,
    Neutral,
}

impl SchemeMode {
    pub const ALL: [SchemeMode; 4] = [
        SchemeMode::Monochromatic,
        SchemeMode::Analogous,
        SchemeMode::Complementary,
        SchemeMode::Neutral,
    ];
}

/// Palettes derived from one base color (hex codes without `#`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ColorScheme {
    pub base: String,
    pub monochromatic: Vec<String>,
    pub analogous: Vec<String>,
    pub complementary: Vec<String>,
    pub neutral: Vec<String>,
}
