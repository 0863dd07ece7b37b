use std::path::{Path, PathBuf};

use eframe::egui;
use image::imageops::FilterType;
use image::RgbaImage;
use thiserror::Error;

pub const TRUE_ICON: &str = "true.png";
pub const FALSE_ICON: &str = "false.png";
pub const BACKGROUND: &str = "deco1.png";

pub const POPUP_SIZE: [u32; 2] = [400, 300];

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("failed to decode asset {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Decoded images, background already scaled for the window and the popup.
pub struct Assets {
    pub true_icon: RgbaImage,
    pub false_icon: RgbaImage,
    pub background: RgbaImage,
    pub popup_background: RgbaImage,
}

impl Assets {
    pub fn load(dir: &Path, window_size: [u32; 2]) -> Result<Self, AssetError> {
        log::info!("Loading assets from {}", dir.display());
        let deco = open(&dir.join(BACKGROUND))?;
        Ok(Self {
            true_icon: open(&dir.join(TRUE_ICON))?,
            false_icon: open(&dir.join(FALSE_ICON))?,
            background: scale(&deco, window_size),
            popup_background: scale(&deco, POPUP_SIZE),
        })
    }

    pub fn into_textures(self, ctx: &egui::Context) -> Textures {
        Textures {
            true_icon: upload(ctx, "true_icon", &self.true_icon),
            false_icon: upload(ctx, "false_icon", &self.false_icon),
            background: upload(ctx, "background", &self.background),
            popup_background: upload(ctx, "popup_background", &self.popup_background),
        }
    }
}

pub struct Textures {
    pub true_icon: egui::TextureHandle,
    pub false_icon: egui::TextureHandle,
    pub background: egui::TextureHandle,
    pub popup_background: egui::TextureHandle,
}

fn open(path: &Path) -> Result<RgbaImage, AssetError> {
    if !path.is_file() {
        return Err(AssetError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let img = image::open(path).map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(img.to_rgba8())
}

fn scale(img: &RgbaImage, [width, height]: [u32; 2]) -> RgbaImage {
    image::imageops::resize(img, width, height, FilterType::Lanczos3)
}

fn upload(ctx: &egui::Context, name: &str, img: &RgbaImage) -> egui::TextureHandle {
    let size = [img.width() as usize, img.height() as usize];
    let color = egui::ColorImage::from_rgba_unmultiplied(size, img.as_raw());
    ctx.load_texture(name, color, egui::TextureOptions::LINEAR)
}
