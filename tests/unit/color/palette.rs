//! Tests for colors and palette indexing helpers

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use wordtile::color::{Color, Palette};

    fn four() -> Palette {
        Palette::from([
            Color::rgb(1, 0, 0),
            Color::rgb(2, 0, 0),
            Color::rgb(3, 0, 0),
            Color::rgb(4, 0, 0),
        ])
    }

    // Tests empty color lists are rejected
    // Verified by allowing empty palettes
    #[test]
    fn test_palette_rejects_empty() {
        assert!(Palette::new(Vec::new()).is_none());
        assert!(Palette::new(vec![Color::BLACK]).is_some());
    }

    // Tests cyclic and wrapped indexing
    // Verified by clamping instead of wrapping
    #[test]
    fn test_cycle_and_wrap() {
        let palette = four();
        assert_eq!(palette.cycle(5), Color::rgb(2, 0, 0));
        assert_eq!(palette.wrap(-1), Color::rgb(4, 0, 0));
        assert_eq!(palette.wrap(-5), Color::rgb(4, 0, 0));
    }

    // Tests clamped indexing stops at the last color
    // Verified by wrapping instead of clamping
    #[test]
    fn test_clamped_index() {
        let palette = four();
        assert_eq!(palette.clamped(1), Color::rgb(2, 0, 0));
        assert_eq!(palette.clamped(99), Color::rgb(4, 0, 0));
    }

    // Tests random choice stays inside the palette
    // Verified by returning a default color
    #[test]
    fn test_choose_from_palette() {
        let palette = four();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert!(palette.contains(palette.choose(&mut rng)));
        }
    }

    // Tests shuffling keeps the same colors
    // Verified by dropping a color during shuffle
    #[test]
    fn test_shuffled_is_permutation() {
        let palette = four();
        let mut rng = StdRng::seed_from_u64(3);
        let mut shuffled = palette.shuffled(&mut rng).colors().to_vec();
        shuffled.sort();
        assert_eq!(shuffled, palette.colors());
    }

    // Tests per-channel interpolation truncates
    // Verified by rounding instead of truncating
    #[test]
    fn test_lerp_truncates() {
        let mid = Color::BLACK.lerp(Color::WHITE, 0.5);
        assert_eq!(mid, Color::rgb(127, 127, 127));
        assert_eq!(Color::BLACK.lerp(Color::WHITE, 2.0), Color::WHITE);
    }

    // Tests squared distance sums every channel
    // Verified by ignoring the blue channel
    #[test]
    fn test_distance_squared() {
        let a = Color::rgb(0, 0, 0);
        let b = Color::rgb(1, 2, 3);
        assert_eq!(a.distance_squared(b), 14);
        assert_eq!(b.distance_squared(a), 14);
    }
}
