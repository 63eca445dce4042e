//! Tests for scattered and randomized fills

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use wordtile::color::{Color, Palette};
    use wordtile::pattern::stochastic::{
        PATTERNS, barcode, clouds_8bit, grain, maze, plaid, random_specks,
    };
    use wordtile::raster::Tile;

    fn palette() -> Palette {
        Palette::from([
            Color::rgb(200, 10, 10),
            Color::rgb(10, 200, 10),
            Color::rgb(10, 10, 200),
            Color::rgb(90, 90, 90),
        ])
    }

    fn paint(fill: fn(&mut Tile, &Palette, &mut dyn rand::RngCore), seed: u64) -> Tile {
        let mut tile = Tile::blank();
        let mut rng = StdRng::seed_from_u64(seed);
        fill(&mut tile, &palette(), &mut rng);
        tile
    }

    fn column(tile: &Tile, x: i32) -> Vec<Option<Color>> {
        (0..16).map(|y| tile.get(x, y)).collect()
    }

    // Tests every randomized pattern repeats under the same seed
    // Verified by reading from thread_rng inside a pattern
    #[test]
    fn test_seeded_reproducibility() {
        for (name, fill) in PATTERNS {
            assert_eq!(paint(*fill, 3), paint(*fill, 3), "{name} is not reproducible");
        }
    }

    // Tests randomized patterns paint only palette colors over the background
    // Verified by mixing two palette colors
    #[test]
    fn test_only_palette_or_background() {
        let palette = palette();
        for (name, fill) in PATTERNS {
            let tile = paint(*fill, 9);
            for (_, _, color) in tile.pixels() {
                assert!(palette.contains(color) || color == Color::BLACK, "{name}");
            }
        }
    }

    // Tests specks never exceed their count
    // Verified by scattering twice as many specks
    #[test]
    fn test_specks_bounded() {
        let tile = paint(random_specks, 1);
        let painted = tile.pixels().filter(|&(_, _, c)| c != Color::BLACK).count();
        assert!(painted > 0 && painted <= 50);
    }

    // Tests grain and barcode paint whole uniform columns
    // Verified by picking a color per pixel
    #[test]
    fn test_uniform_columns() {
        for fill in [grain as fn(&mut Tile, &Palette, &mut dyn rand::RngCore), barcode] {
            let tile = paint(fill, 4);
            for x in 0..16 {
                let cells = column(&tile, x);
                assert!(cells.iter().all(|&c| c == cells.first().copied().flatten()));
                assert_ne!(cells.first().copied().flatten(), Some(Color::BLACK));
            }
        }
    }

    // Tests plaid keeps the first color between its lines
    // Verified by filling the base with a random color
    #[test]
    fn test_plaid_base() {
        let tile = paint(plaid, 6);
        for (x, y, color) in tile.pixels() {
            if x % 4 != 0 && y % 4 != 0 {
                assert_eq!(color, Color::rgb(200, 10, 10));
            }
        }
    }

    // Tests the maze paints every cell above the last row
    // Verified by skipping vertical segments
    #[test]
    fn test_maze_coverage() {
        let tile = paint(maze, 8);
        for (x, y, color) in tile.pixels() {
            if y < 15 {
                assert_ne!(color, Color::BLACK, "unpainted ({x}, {y})");
            }
        }
    }

    // Tests cloud bands are four uniform rows wrapping across the tile
    // Verified by clipping shifted blocks at the edge
    #[test]
    fn test_clouds_bands() {
        let tile = paint(clouds_8bit, 2);
        for band in 0..4 {
            let expected = tile.get(0, band * 4);
            assert_ne!(expected, Some(Color::BLACK));
            for y in band * 4..band * 4 + 4 {
                for x in 0..16 {
                    assert_eq!(tile.get(x, y), expected);
                }
            }
        }
    }
}
