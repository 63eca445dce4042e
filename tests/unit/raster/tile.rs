//! Tests for the tile pixel grid

#[cfg(test)]
mod tests {
    use wordtile::color::Color;
    use wordtile::raster::Tile;

    // Tests new tiles are black everywhere
    // Verified by defaulting to white
    #[test]
    fn test_blank_is_black() {
        let tile = Tile::default();
        assert_eq!(tile, Tile::blank());
        assert_eq!(tile.pixels().count(), 256);
        assert!(tile.pixels().all(|(_, _, color)| color == Color::BLACK));
    }

    // Tests out of range writes are clipped without effect
    // Verified by wrapping coordinates
    #[test]
    fn test_plot_clips() {
        let mut tile = Tile::blank();
        assert!(!tile.plot(-1, 0, Color::WHITE));
        assert!(!tile.plot(16, 3, Color::WHITE));
        assert!(!tile.plot(3, 16, Color::WHITE));
        assert_eq!(tile, Tile::blank());

        assert!(tile.plot(15, 15, Color::WHITE));
        assert_eq!(tile.get(15, 15), Some(Color::WHITE));
        assert_eq!(tile.get(16, 15), None);
    }

    // Tests rows are indexed by y and columns by x
    // Verified by storing pixels column-major
    #[test]
    fn test_row_major_layout() {
        let mut tile = Tile::blank();
        tile.plot(5, 2, Color::WHITE);
        assert_eq!(tile.rows()[2][5], Color::WHITE);
        assert_eq!(tile.rows()[5][2], Color::BLACK);
        assert!(tile.pixels().any(|p| p == (5, 2, Color::WHITE)));
    }

    // Tests pixel mapping leaves the source untouched
    // Verified by mapping in place
    #[test]
    fn test_map_pixels() {
        let tile = Tile::filled(Color::rgb(1, 2, 3));
        let mapped = tile.map_pixels(|c| Color::rgb(c.b, c.g, c.r));
        assert_eq!(mapped, Tile::filled(Color::rgb(3, 2, 1)));
        assert_eq!(tile.get(0, 0), Some(Color::rgb(1, 2, 3)));
    }
}
