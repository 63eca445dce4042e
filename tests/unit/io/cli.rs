//! Tests for command-line parsing and batch tile generation

#[cfg(test)]
mod tests {
    use clap::Parser;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use wordtile::color::dictionary::PaletteDictionary;
    use wordtile::io::cli::{Cli, TileJob, TileProcessor, init_logging, sheet_dimensions};
    use wordtile::io::configuration::DEFAULT_SEED;

    fn cli_in(dir: &TempDir, extra: &[&str]) -> Cli {
        let output = dir.path().to_string_lossy().to_string();
        let mut args = vec!["wordtile", "--quiet", "--output", output.as_str()];
        args.extend_from_slice(extra);
        Cli::parse_from(args)
    }

    // Tests CLI parsing with no arguments uses the defaults
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["wordtile"]);

        assert!(cli.words.is_empty());
        assert!(cli.patterns.is_empty());
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.output, PathBuf::from("tiles"));
        assert_eq!(cli.scale, 1);
        assert!(cli.sheet.is_none());
        assert!(!cli.quiet);
        assert!(cli.skip_existing());
        assert!(cli.should_show_progress());
    }

    // Tests CLI parsing with all available arguments
    // Verified by dropping the repeated pattern flag
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "wordtile",
            "ocean",
            "lava",
            "-p",
            "rings",
            "--pattern",
            "maze",
            "--hue",
            "-0.25",
            "--saturation",
            "0.5",
            "--value",
            "1.5",
            "--seed",
            "123",
            "--scale",
            "4",
            "--sheet",
            "sheet.png",
            "--gameboy",
            "--quiet",
            "--no-skip",
            "--log",
            "debug",
        ]);

        assert_eq!(cli.words, ["ocean", "lava"]);
        assert_eq!(cli.patterns, ["rings", "maze"]);
        assert!((cli.hue + 0.25).abs() < f64::EPSILON);
        assert!((cli.adjustment().saturation - 0.5).abs() < f64::EPSILON);
        assert!((cli.adjustment().value - 1.5).abs() < f64::EPSILON);
        assert_eq!(cli.seed, 123);
        assert_eq!(cli.scale, 4);
        assert_eq!(cli.sheet, Some(PathBuf::from("sheet.png")));
        assert!(cli.gameboy);
        assert!(!cli.should_show_progress());
        assert!(!cli.skip_existing());
        assert_eq!(cli.log.as_deref(), Some("debug"));
    }

    // Tests jobs default to grass painted solid
    // Verified by returning no jobs without arguments
    #[test]
    fn test_default_job() {
        let processor = TileProcessor::new(Cli::parse_from(["wordtile"]));
        assert_eq!(
            processor.jobs(),
            vec![TileJob {
                word: "grass".to_owned(),
                pattern: "solid".to_owned(),
            }]
        );
    }

    // Tests jobs form the word by pattern product, words outermost
    // Verified by iterating patterns outermost
    #[test]
    fn test_job_product_order() {
        let processor =
            TileProcessor::new(Cli::parse_from(["wordtile", "a", "b", "-p", "x", "-p", "y"]));
        let names: Vec<String> = processor.jobs().iter().map(TileJob::file_name).collect();
        assert_eq!(names, ["a_x.png", "a_y.png", "b_x.png", "b_y.png"]);
    }

    // Tests the all-words and all-patterns switches expand fully
    // Verified by ignoring the all-patterns switch
    #[test]
    fn test_all_words_all_patterns() {
        let processor =
            TileProcessor::new(Cli::parse_from(["wordtile", "--all-words", "--all-patterns"]));
        let expected = PaletteDictionary::global().len() * 37;
        assert_eq!(processor.jobs().len(), expected);
    }

    // Tests output names are lowercased and file-system safe
    // Verified by keeping spaces in names
    #[test]
    fn test_job_file_name_sanitized() {
        let job = TileJob {
            word: " Deep Sea/Blue ".to_owned(),
            pattern: "Rings".to_owned(),
        };
        assert_eq!(job.file_name(), "deep_sea_blue_rings.png");
    }

    // Tests sheet dimensions clamp to the map bounds
    // Verified by removing the minimum height
    #[test]
    fn test_sheet_dimensions() {
        assert_eq!(sheet_dimensions(1), (4, 4));
        assert_eq!(sheet_dimensions(10), (10, 4));
        assert_eq!(sheet_dimensions(16), (16, 4));
        assert_eq!(sheet_dimensions(100), (16, 7));
    }

    // Tests a batch writes every tile and the sheet
    // Verified by skipping the sheet export
    #[test]
    fn test_process_writes_tiles_and_sheet() {
        let dir = TempDir::new().expect("temp dir");
        let sheet = dir.path().join("sheet.png");
        let sheet_arg = sheet.to_string_lossy().to_string();
        let cli = cli_in(
            &dir,
            &["grass", "ocean", "-p", "rings", "-p", "bricks", "--sheet", sheet_arg.as_str()],
        );

        let result = TileProcessor::new(cli).process();
        assert!(result.is_ok());

        for name in ["grass_rings", "grass_bricks", "ocean_rings", "ocean_bricks"] {
            assert!(dir.path().join(format!("{name}.png")).exists());
        }
        let sheet_image = image::open(&sheet).expect("readable sheet");
        assert_eq!((sheet_image.width(), sheet_image.height()), (64, 64));
    }

    // Tests existing outputs are kept unless overwriting is requested
    // Verified by inverting boolean logic in skip_existing method
    #[test]
    fn test_skip_existing_outputs() {
        let dir = TempDir::new().expect("temp dir");
        let existing = dir.path().join("grass_solid.png");
        std::fs::write(&existing, b"placeholder").expect("write placeholder");

        assert!(TileProcessor::new(cli_in(&dir, &[])).process().is_ok());
        assert_eq!(std::fs::read(&existing).expect("read"), b"placeholder");

        assert!(
            TileProcessor::new(cli_in(&dir, &["--no-skip"]))
                .process()
                .is_ok()
        );
        assert!(image::open(&existing).is_ok());
    }

    // Tests an invalid scale aborts before writing
    // Verified by validating scale after generation
    #[test]
    fn test_invalid_scale_rejected() {
        let dir = TempDir::new().expect("temp dir");
        let result = TileProcessor::new(cli_in(&dir, &["--scale", "0"])).process();
        assert!(result.is_err());
        assert!(!dir.path().join("grass_solid.png").exists());
    }

    // Tests logging stays off without a specification
    // Verified by always starting the logger
    #[test]
    fn test_logging_disabled_without_spec() {
        assert!(matches!(init_logging(None), Ok(None)));
    }
}
