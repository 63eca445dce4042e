//! Tests for PNG export of tiles, maps and selected cells

#[cfg(test)]
mod tests {
    use image::GenericImageView;
    use std::rc::Rc;
    use tempfile::TempDir;
    use wordtile::WordTileError;
    use wordtile::color::Color;
    use wordtile::io::image::{
        export_map, export_selected_tile, export_tile, map_to_image, tile_to_image,
        validate_scale,
    };
    use wordtile::map::{MapEditor, MapGrid};
    use wordtile::raster::Tile;
    use wordtile::session::Tool;

    fn marked_tile() -> Tile {
        let mut tile = Tile::filled(Color::rgb(10, 20, 30));
        tile.plot(15, 0, Color::rgb(200, 0, 0));
        tile
    }

    // Tests tile pixels land at matching image coordinates
    // Verified by transposing x and y
    #[test]
    fn test_tile_to_image_orientation() {
        let image = tile_to_image(&marked_tile());
        assert_eq!(image.dimensions(), (16, 16));
        assert_eq!(image.get_pixel(15, 0).0, [200, 0, 0]);
        assert_eq!(image.get_pixel(0, 15).0, [10, 20, 30]);
    }

    // Tests tile export writes an upscaled opaque PNG
    // Verified by skipping the upscale
    #[test]
    fn test_export_tile_scaled() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("nested").join("tile.png");

        let result = export_tile(&marked_tile(), &path, 4);
        assert!(result.is_ok(), "PNG export should succeed");

        let written = image::open(&path).expect("readable png");
        assert_eq!(written.dimensions(), (64, 64));
        assert_eq!(written.get_pixel(63, 0).0, [200, 0, 0, 255]);
        assert_eq!(written.get_pixel(60, 3).0, [200, 0, 0, 255]);
        assert_eq!(written.get_pixel(60, 4).0, [10, 20, 30, 255]);
    }

    // Tests scale bounds
    // Verified by accepting zero
    #[test]
    fn test_validate_scale() {
        assert!(validate_scale(0).is_err());
        assert_eq!(validate_scale(1).ok(), Some(1));
        assert_eq!(validate_scale(32).ok(), Some(32));
        assert!(validate_scale(33).is_err());
    }

    // Tests empty cells are transparent and placed tiles opaque
    // Verified by filling the canvas with opaque black
    #[test]
    fn test_map_image_transparency() {
        let mut grid = MapGrid::new(4, 5).expect("valid map");
        grid.set(1, 2, Some(Rc::new(marked_tile())));

        let image = map_to_image(&grid);
        assert_eq!(image.dimensions(), (64, 80));
        assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(image.get_pixel(16, 32).0, [10, 20, 30, 255]);
        assert_eq!(image.get_pixel(31, 32).0, [200, 0, 0, 255]);
        assert_eq!(image.get_pixel(32, 32).0[3], 0);
    }

    // Tests map export creates the file
    // Verified by disabling file save operation
    #[test]
    fn test_export_map_creates_file() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("map.png");
        let grid = MapGrid::new(4, 4).expect("valid map");

        assert!(export_map(&grid, &path, 1).is_ok());
        let written = image::open(&path).expect("readable png");
        assert_eq!(written.dimensions(), (64, 64));
    }

    // Tests selected cell export reports missing selection and empty cells
    // Verified by exporting a blank tile when the cell is empty
    #[test]
    fn test_export_selected_tile_errors() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("selected.png");
        let mut editor = MapEditor::new(4, 4).expect("valid map");

        let nothing = export_selected_tile(&editor, &path, 1);
        assert!(matches!(
            nothing,
            Err(WordTileError::EmptySelection {
                reason: "No cell selected."
            })
        ));

        editor.set_tool(Tool::Select);
        editor.press(0, 0);
        editor.release(0, 0);
        let empty = export_selected_tile(&editor, &path, 1);
        assert!(matches!(
            empty,
            Err(WordTileError::EmptySelection {
                reason: "Selected cell has no tile."
            })
        ));
        assert!(!path.exists());
    }

    // Tests selected cell export writes the cell tile
    // Verified by exporting the brush instead of the cell
    #[test]
    fn test_export_selected_tile_writes() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("selected.png");
        let mut editor = MapEditor::new(4, 4).expect("valid map");
        editor.add_recent(Rc::new(marked_tile()));
        assert!(editor.select_recent(0));

        editor.press(2, 2);
        editor.release(2, 2);
        editor.set_tool(Tool::Select);
        editor.press(2, 2);
        editor.release(2, 2);

        assert!(export_selected_tile(&editor, &path, 1).is_ok());
        let written = image::open(&path).expect("readable png");
        assert_eq!(written.get_pixel(15, 0).0, [200, 0, 0, 255]);
    }
}
