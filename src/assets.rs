//! Sprite atlas
//!
//! Images are resolved once before the first session. Any failure here is
//! fatal: there is no partial-session recovery.

use std::fmt;

use glam::Vec2;

use crate::consts::{SHATTER_SHEET_COLUMNS, SHATTER_SHEET_ROWS};
use crate::sim::SpriteSizes;

/// Opaque handle to a loaded image, meaningful only to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle(pub u32);

/// A loaded image and its pixel dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub handle: ImageHandle,
    pub width: u32,
    pub height: u32,
}

impl ImageInfo {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    NotFound { name: String },
    /// A sprite sheet too small to cut into its frame grid
    BadSheet { name: String, columns: u32, rows: u32 },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { name } => write!(f, "image not found: {name}"),
            Self::BadSheet {
                name,
                columns,
                rows,
            } => write!(f, "sprite sheet {name} cannot be cut into {columns}x{rows} frames"),
        }
    }
}

impl std::error::Error for AssetError {}

/// Resolves image names to drawable handles
pub trait AssetProvider {
    fn load_image(&mut self, name: &str) -> Result<ImageInfo, AssetError>;
}

/// Every image the game draws
#[derive(Debug, Clone)]
pub struct SpriteAtlas {
    pub sky: ImageInfo,
    pub rocket: ImageInfo,
    /// Sheet of `SHATTER_SHEET_COLUMNS` x `SHATTER_SHEET_ROWS` frames
    pub energy: ImageInfo,
    pub asteroid: ImageInfo,
}

impl SpriteAtlas {
    pub const SKY: &'static str = "sky.jpg";
    pub const ROCKET: &'static str = "rocket.png";
    pub const ENERGY: &'static str = "energy.png";
    pub const ASTEROID: &'static str = "asteroid.png";

    pub fn load(provider: &mut dyn AssetProvider) -> Result<Self, AssetError> {
        let atlas = Self {
            sky: provider.load_image(Self::SKY)?,
            rocket: provider.load_image(Self::ROCKET)?,
            energy: provider.load_image(Self::ENERGY)?,
            asteroid: provider.load_image(Self::ASTEROID)?,
        };

        if atlas.energy.width < SHATTER_SHEET_COLUMNS || atlas.energy.height < SHATTER_SHEET_ROWS {
            return Err(AssetError::BadSheet {
                name: Self::ENERGY.to_string(),
                columns: SHATTER_SHEET_COLUMNS,
                rows: SHATTER_SHEET_ROWS,
            });
        }

        log::info!(
            "Sprites loaded: sky {}x{}, rocket {}x{}, energy frame {}, asteroid {}x{}",
            atlas.sky.width,
            atlas.sky.height,
            atlas.rocket.width,
            atlas.rocket.height,
            atlas.shatter_frame(),
            atlas.asteroid.width,
            atlas.asteroid.height
        );
        Ok(atlas)
    }

    /// Size of one frame of the energy sheet
    pub fn shatter_frame(&self) -> Vec2 {
        Vec2::new(
            (self.energy.width / SHATTER_SHEET_COLUMNS) as f32,
            (self.energy.height / SHATTER_SHEET_ROWS) as f32,
        )
    }

    pub fn sizes(&self) -> SpriteSizes {
        SpriteSizes {
            background: self.sky.size(),
            rocket: self.rocket.size(),
            shatter: self.shatter_frame(),
            asteroid: self.asteroid.size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::FixedAssets;

    #[test]
    fn test_load_default_atlas() {
        let atlas = SpriteAtlas::load(&mut FixedAssets::default()).unwrap();
        let sizes = atlas.sizes();
        assert_eq!(sizes.shatter, Vec2::new(32.0, 32.0));
        assert_eq!(sizes.rocket, Vec2::new(64.0, 64.0));
    }

    #[test]
    fn test_missing_image_is_fatal() {
        let mut assets = FixedAssets::default();
        assets.remove(SpriteAtlas::ROCKET);
        let err = SpriteAtlas::load(&mut assets).unwrap_err();
        assert_eq!(
            err,
            AssetError::NotFound {
                name: "rocket.png".to_string()
            }
        );
        assert_eq!(err.to_string(), "image not found: rocket.png");
    }

    #[test]
    fn test_tiny_sheet_rejected() {
        let mut assets = FixedAssets::default();
        assets.insert(SpriteAtlas::ENERGY, 4, 2);
        assert!(matches!(
            SpriteAtlas::load(&mut assets),
            Err(AssetError::BadSheet { .. })
        ));
    }
}
