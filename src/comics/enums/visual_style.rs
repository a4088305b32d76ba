use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VisualStyle {
    #[default]
    Default,
    Cartoonish,
    Realistic,
    Anime,
    Vintage,
}

impl VisualStyle {
    pub const ALL: [VisualStyle; 5] = [
        Self::Default,
        Self::Cartoonish,
        Self::Realistic,
        Self::Anime,
        Self::Vintage,
    ];

    /// Prose handed to the image model to pin down the art style.
    pub fn descriptor(&self) -> &'static str {
        match *self {
            Self::Default => "a clean, modern comic book art style",
            Self::Cartoonish => {
                "a vibrant, slightly cartoonish comic book art style with clean lines and dynamic shading"
            }
            Self::Realistic => {
                "a photorealistic style, with detailed textures, cinematic lighting, and a grounded color palette"
            }
            Self::Anime => {
                "a classic Japanese anime style, with expressive characters, cel-shading, and dynamic action lines"
            }
            Self::Vintage => {
                "a retro, vintage comic book style from the 1960s, using halftone dots, limited color palettes, and bold ink lines"
            }
        }
    }
}
