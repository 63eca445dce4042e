//! PNG export of tiles and maps
//!
//! Tiles export fully opaque. Maps export as RGBA with empty cells left
//! transparent. Both can be upscaled by an integer factor with
//! nearest-neighbour sampling so pixel edges stay sharp.

use crate::io::configuration::{MAX_EXPORT_SCALE, TILE_SIZE};
use crate::io::error::{Result, WordTileError, invalid_parameter};
use crate::map::editor::MapEditor;
use crate::map::grid::MapGrid;
use crate::raster::tile::Tile;
use image::imageops::FilterType;
use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};
use log::info;
use std::path::Path;

/// Tile as a 16×16 RGB image
pub fn tile_to_image(tile: &Tile) -> RgbImage {
    let side = TILE_SIZE as u32;
    let mut image = RgbImage::new(side, side);
    for (x, y, color) in tile.pixels() {
        image.put_pixel(x as u32, y as u32, Rgb(color.channels()));
    }
    image
}

/// Whole map as an RGBA image, 16 pixels per cell
///
/// Empty cells are fully transparent and placed tiles fully opaque.
pub fn map_to_image(grid: &MapGrid) -> RgbaImage {
    let side = TILE_SIZE as u32;
    let mut image = RgbaImage::new(grid.width() as u32 * side, grid.height() as u32 * side);
    for ((cx, cy), tile) in grid.placed() {
        let (x0, y0) = (cx as u32 * side, cy as u32 * side);
        for (x, y, color) in tile.pixels() {
            let [r, g, b] = color.channels();
            image.put_pixel(x0 + x as u32, y0 + y as u32, Rgba([r, g, b, u8::MAX]));
        }
    }
    image
}

/// Check an upscale factor
///
/// # Errors
///
/// Returns `InvalidParameter` when `scale` is zero or above the maximum
pub fn validate_scale(scale: u32) -> Result<u32> {
    if (1..=MAX_EXPORT_SCALE).contains(&scale) {
        Ok(scale)
    } else {
        Err(invalid_parameter(
            "scale",
            &scale,
            &format!("must be between 1 and {MAX_EXPORT_SCALE}"),
        ))
    }
}

/// Nearest-neighbour upscale by an integer factor
fn upscale(image: DynamicImage, scale: u32) -> DynamicImage {
    if scale == 1 {
        return image;
    }
    let (width, height) = (image.width() * scale, image.height() * scale);
    image.resize_exact(width, height, FilterType::Nearest)
}

fn save(image: &DynamicImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| WordTileError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image.save(path).map_err(|e| WordTileError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write one tile to a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - `scale` is outside the accepted range
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn export_tile(tile: &Tile, path: &Path, scale: u32) -> Result<()> {
    let scale = validate_scale(scale)?;
    save(&upscale(DynamicImage::ImageRgb8(tile_to_image(tile)), scale), path)?;
    info!("tile exported to {}", path.display());
    Ok(())
}

/// Write the whole map to a PNG file with transparent empty cells
///
/// # Errors
///
/// Returns an error if:
/// - `scale` is outside the accepted range
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn export_map(grid: &MapGrid, path: &Path, scale: u32) -> Result<()> {
    let scale = validate_scale(scale)?;
    save(&upscale(DynamicImage::ImageRgba8(map_to_image(grid)), scale), path)?;
    info!(
        "{}x{} map with {} tiles exported to {}",
        grid.width(),
        grid.height(),
        grid.occupied(),
        path.display()
    );
    Ok(())
}

/// Write the tile in the editor's first selected cell
///
/// # Errors
///
/// Returns `EmptySelection` when no cell is selected or the cell is empty,
/// otherwise the same errors as [`export_tile`]
pub fn export_selected_tile(editor: &MapEditor, path: &Path, scale: u32) -> Result<()> {
    let tile = editor.selected_tile()?;
    export_tile(tile, path, scale)
}
