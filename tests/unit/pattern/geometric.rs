//! Tests for geometric figure patterns

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use wordtile::color::{Color, Palette};
    use wordtile::pattern::geometric::{
        PATTERNS, concentric_circles, diagonal_lines, rings, shaded_circle, squares, wave,
        x_cross, zigzag,
    };
    use wordtile::raster::Tile;

    const A: Color = Color::rgb(10, 0, 0);
    const B: Color = Color::rgb(20, 0, 0);
    const C: Color = Color::rgb(30, 0, 0);
    const D: Color = Color::rgb(40, 0, 0);

    fn palette() -> Palette {
        Palette::from([A, B, C, D])
    }

    fn paint(fill: fn(&mut Tile, &Palette, &mut dyn rand::RngCore)) -> Tile {
        let mut tile = Tile::blank();
        let mut rng = StdRng::seed_from_u64(5);
        fill(&mut tile, &palette(), &mut rng);
        tile
    }

    // Tests geometric patterns only write palette colors over the black background
    // Verified by plotting a fixed debug color
    #[test]
    fn test_only_palette_or_background() {
        let palette = palette();
        for (name, fill) in PATTERNS {
            if *name == "shaded_circle" {
                continue;
            }
            let tile = paint(*fill);
            for (_, _, color) in tile.pixels() {
                assert!(
                    palette.contains(color) || color == Color::BLACK,
                    "{name} wrote {color:?}"
                );
            }
        }
    }

    // Tests diagonal lines cycle colors across diagonals
    // Verified by coloring by row instead of diagonal
    #[test]
    fn test_diagonal_lines() {
        let tile = paint(diagonal_lines);
        assert_eq!(tile.get(0, 15), Some(A));
        assert_eq!(tile.get(0, 14), Some(B));
        assert_eq!(tile.get(3, 3), tile.get(9, 9));
        assert!(tile.pixels().all(|(_, _, c)| c != Color::BLACK));
    }

    // Tests the outermost ring is drawn first and the center stays background
    // Verified by drawing innermost first
    #[test]
    fn test_rings() {
        let tile = paint(rings);
        assert_eq!(tile.get(8, 0), Some(A));
        assert_eq!(tile.get(8, 8), Some(Color::BLACK));
    }

    // Tests concentric squares step inward two pixels at a time
    // Verified by stepping one pixel at a time
    #[test]
    fn test_squares() {
        let tile = paint(squares);
        assert_eq!(tile.get(0, 0), Some(A));
        assert_eq!(tile.get(1, 1), Some(B));
        assert_eq!(tile.get(7, 7), Some(D));
        assert_eq!(tile.get(15, 8), Some(A));
    }

    // Tests every zigzag row is fully painted in its own color
    // Verified by stopping rows early
    #[test]
    fn test_zigzag_rows() {
        let tile = paint(zigzag);
        for (y, row) in tile.rows().iter().enumerate() {
            let expected = palette().cycle(y);
            assert!(row.iter().all(|&c| c == expected));
        }
    }

    // Tests the shaded circle blends from the first color at the center
    // Verified by normalizing linear rather than squared distance
    #[test]
    fn test_shaded_circle() {
        let palette = Palette::new(vec![Color::BLACK, Color::WHITE]).expect("non-empty");
        let mut tile = Tile::filled(Color::rgb(1, 2, 3));
        let mut rng = StdRng::seed_from_u64(0);
        shaded_circle(&mut tile, &palette, &mut rng);

        assert_eq!(tile.get(8, 8), Some(Color::BLACK));
        assert_eq!(tile.get(8, 0), Some(Color::WHITE));
        assert_eq!(tile.get(12, 8), Some(Color::rgb(63, 63, 63)));
        assert_eq!(tile.get(0, 0), Some(Color::rgb(1, 2, 3)));
    }

    // Tests a one-color palette paints the whole disk that color
    // Verified by interpolating toward a second palette entry
    #[test]
    fn test_shaded_circle_single_color() {
        let only = Color::rgb(9, 8, 7);
        let palette = Palette::new(vec![only]).expect("non-empty");
        let mut tile = Tile::blank();
        let mut rng = StdRng::seed_from_u64(0);
        shaded_circle(&mut tile, &palette, &mut rng);

        for (x, y, color) in tile.pixels() {
            let (dx, dy) = (x as i32 - 8, y as i32 - 8);
            if dx * dx + dy * dy <= 64 {
                assert_eq!(color, only, "disk pixel ({x}, {y})");
            } else {
                assert_eq!(color, Color::BLACK, "outside pixel ({x}, {y})");
            }
        }
    }

    // Tests concentric circles start with the first color innermost
    // Verified by reversing the radius order
    #[test]
    fn test_concentric_circles() {
        let tile = paint(concentric_circles);
        assert_eq!(tile.get(9, 8), Some(A));
        assert_eq!(tile.get(15, 8), Some(D));
    }

    // Tests the two diagonals are fully drawn
    // Verified by drawing only one diagonal
    #[test]
    fn test_x_cross() {
        let tile = paint(x_cross);
        for i in 0..16 {
            assert_ne!(tile.get(i, i), Some(Color::BLACK));
            assert_ne!(tile.get(15 - i, i), Some(Color::BLACK));
        }
        assert_eq!(tile.get(1, 0), Some(Color::BLACK));
    }

    // Tests each wave row keeps its column count
    // Verified by dropping the wraparound
    #[test]
    fn test_wave_wraps() {
        let tile = paint(wave);
        let painted = tile.pixels().filter(|&(_, _, c)| c != Color::BLACK).count();
        assert_eq!(painted, 256);
    }
}
