//! Named HUD sprites ("chrome"), grouped into sprite sheets.
//!
//! Sheets are generated in code and uploaded to egui once at startup; widgets
//! look images up by `(sheet, image)` name every frame.

use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use bevy::utils::HashMap;
use bevy_egui::{egui, EguiContexts};

// =============================================================================
// Sheet definitions
// =============================================================================

pub const SIDEBAR_BITS: &str = "sidebar-bits";
pub const LEFT_INDICATOR: &str = "left-indicator";

/// Pixel size of the `sidebar-bits` sheet.
pub const SIDEBAR_BITS_SIZE: [u32; 2] = [16, 8];

/// `(image, [x, y, width, height])` regions inside the `sidebar-bits` sheet.
pub const SIDEBAR_BITS_LAYOUT: &[(&str, [u32; 4])] = &[(LEFT_INDICATOR, [0, 0, 12, 8])];

const INDICATOR_COLOR: [u8; 4] = [235, 235, 235, 255];

// =============================================================================
// Types
// =============================================================================

/// A sprite inside an egui texture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromeImage {
    pub texture: egui::TextureId,
    /// Normalized texture coordinates of the sprite.
    pub uv: egui::Rect,
    /// Native size in screen points.
    pub size: egui::Vec2,
}

impl ChromeImage {
    /// A sprite covering its whole texture.
    pub fn whole(texture: egui::TextureId, size: egui::Vec2) -> Self {
        Self {
            texture,
            uv: egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            size,
        }
    }

    /// A sprite cut out of a sheet of `sheet_size` pixels.
    pub fn region(texture: egui::TextureId, sheet_size: [u32; 2], region: [u32; 4]) -> Self {
        let [sw, sh] = sheet_size.map(|v| v.max(1) as f32);
        let [x, y, w, h] = region.map(|v| v as f32);
        Self {
            texture,
            uv: egui::Rect::from_min_max(
                egui::pos2(x / sw, y / sh),
                egui::pos2((x + w) / sw, (y + h) / sh),
            ),
            size: egui::vec2(w, h),
        }
    }
}

#[derive(Debug, Default)]
struct Sheet {
    /// Keeps the backing image asset alive.
    handle: Option<Handle<Image>>,
    images: HashMap<String, ChromeImage>,
}

/// Image lookup service: sheets of named sprites.
#[derive(Resource, Debug, Default)]
pub struct ChromeProvider {
    sheets: HashMap<String, Sheet>,
}

impl ChromeProvider {
    pub fn get_image(&self, sheet: &str, name: &str) -> Option<&ChromeImage> {
        self.sheets.get(sheet)?.images.get(name)
    }

    /// Add or replace a single image.
    pub fn insert(&mut self, sheet: &str, name: &str, image: ChromeImage) {
        self.sheets
            .entry(sheet.to_string())
            .or_default()
            .images
            .insert(name.to_string(), image);
    }

    /// Register every region of a sheet that has been uploaded as `texture`.
    pub fn register_sheet(
        &mut self,
        sheet: &str,
        handle: Option<Handle<Image>>,
        texture: egui::TextureId,
        sheet_size: [u32; 2],
        layout: &[(&str, [u32; 4])],
    ) {
        let entry = self.sheets.entry(sheet.to_string()).or_default();
        entry.handle = handle;
        for (name, region) in layout {
            entry.images.insert(
                (*name).to_string(),
                ChromeImage::region(texture, sheet_size, *region),
            );
        }
    }

    pub fn image_count(&self) -> usize {
        self.sheets.values().map(|s| s.images.len()).sum()
    }
}

// =============================================================================
// Sheet generation
// =============================================================================

/// RGBA8 pixels of the `sidebar-bits` sheet.
///
/// `left-indicator` is a marker pointing left: a triangle over its first six
/// columns widening into a full-height tab.
pub fn sidebar_bits_pixels() -> Vec<u8> {
    let [width, height] = SIDEBAR_BITS_SIZE;
    let mut data = vec![0u8; (width * height * 4) as usize];

    let [rx, ry, rw, rh] = SIDEBAR_BITS_LAYOUT[0].1;
    let half = rh as f32 / 2.0;
    for y in 0..rh {
        for x in 0..rw {
            let reach = half * ((x as f32 + 0.5) / 6.0).min(1.0);
            if (y as f32 + 0.5 - half).abs() <= reach {
                let idx = (((ry + y) * width + rx + x) * 4) as usize;
                data[idx..idx + 4].copy_from_slice(&INDICATOR_COLOR);
            }
        }
    }
    data
}

pub fn sidebar_bits_image() -> Image {
    let [width, height] = SIDEBAR_BITS_SIZE;
    let mut image = Image::new(
        Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        sidebar_bits_pixels(),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
    );
    image.sampler = bevy::image::ImageSampler::nearest();
    image
}

/// Upload the `sidebar-bits` sheet to egui and register its images.
pub fn register_sidebar_bits(
    mut images: ResMut<Assets<Image>>,
    mut contexts: EguiContexts,
    mut chrome: ResMut<ChromeProvider>,
) {
    let handle = images.add(sidebar_bits_image());
    let texture = contexts.add_image(handle.clone());
    chrome.register_sheet(
        SIDEBAR_BITS,
        Some(handle),
        texture,
        SIDEBAR_BITS_SIZE,
        SIDEBAR_BITS_LAYOUT,
    );
    info!(
        "Registered chrome sheet '{}' ({} images)",
        SIDEBAR_BITS,
        SIDEBAR_BITS_LAYOUT.len()
    );
}
