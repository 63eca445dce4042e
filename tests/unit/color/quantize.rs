//! Tests for Game Boy quantization

#[cfg(test)]
mod tests {
    use wordtile::color::Color;
    use wordtile::color::quantize::{gameboyize_tile, nearest_gameboy, nearest_in};
    use wordtile::io::configuration::{GAMEBOY_PALETTE, GAMEBOY_TRANSPARENT_MARKER};
    use wordtile::raster::Tile;

    // Tests pure black and white become the marker, not their nearest target
    // Verified by removing the special case
    #[test]
    fn test_black_and_white_become_marker() {
        let mut tile = Tile::filled(Color::WHITE);
        tile.plot(3, 4, Color::BLACK);

        let quantized = gameboyize_tile(&tile);
        assert_eq!(quantized.get(3, 4), Some(GAMEBOY_TRANSPARENT_MARKER));
        assert_eq!(quantized.get(0, 0), Some(GAMEBOY_TRANSPARENT_MARKER));
        assert!(
            quantized
                .pixels()
                .all(|(_, _, color)| color == GAMEBOY_TRANSPARENT_MARKER)
        );
    }

    // Tests other colors snap to the nearest target
    // Verified by always returning the first target
    #[test]
    fn test_nearest_target() {
        assert_eq!(nearest_gameboy(Color::rgb(1, 1, 1)), GAMEBOY_PALETTE[0]);
        assert_eq!(nearest_gameboy(Color::rgb(130, 190, 100)), GAMEBOY_PALETTE[1]);
        assert_eq!(nearest_gameboy(Color::rgb(250, 250, 250)), GAMEBOY_PALETTE[2]);
    }

    // Tests every quantized pixel is a target or the marker
    // Verified by passing unmatched colors through
    #[test]
    fn test_output_closed_over_targets() {
        let mut tile = Tile::blank();
        for (i, x) in (0..16).enumerate() {
            let level = (i * 17) as u8;
            tile.plot(x, 0, Color::rgb(level, 255 - level, level / 2));
        }
        let quantized = gameboyize_tile(&tile);
        for (_, _, color) in quantized.pixels() {
            assert!(GAMEBOY_PALETTE.contains(&color) || color == GAMEBOY_TRANSPARENT_MARKER);
        }
    }

    // Tests ties go to the earliest candidate and empty candidates yield nothing
    // Verified by picking the last minimum
    #[test]
    fn test_nearest_in_ties() {
        let candidates = [Color::rgb(0, 0, 10), Color::rgb(0, 0, 30)];
        assert_eq!(nearest_in(Color::rgb(0, 0, 20), &candidates), Some(candidates[0]));
        assert_eq!(nearest_in(Color::BLACK, &[]), None);
    }
}
