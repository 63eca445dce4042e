//! Command-line interface for batch tile generation
//!
//! Every requested word is combined with every requested pattern. Each pair
//! becomes `<output>/<word>_<pattern>.png`; optionally all tiles are also laid
//! out row by row on a sheet map and exported as one image.

use crate::color::adjust::HsvAdjustment;
use crate::color::quantize::gameboyize_tile;
use crate::io::configuration::{
    DEFAULT_OUTPUT_DIR, DEFAULT_PATTERN, DEFAULT_SEED, DEFAULT_WORD, MAX_SHEET_WIDTH,
    MIN_MAP_DIMENSION, OUTPUT_EXTENSION,
};
use crate::io::error::{Result, WordTileError};
use crate::io::image::{export_map, export_tile, validate_scale};
use crate::io::progress::ProgressManager;
use crate::map::grid::MapGrid;
use crate::pattern::generator::TileGenerator;
use clap::Parser;
use flexi_logger::{Logger, LoggerHandle, default_format};
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::rc::Rc;

#[derive(Parser, Debug)]
#[command(name = "wordtile")]
#[command(
    author,
    version,
    about = "Generate 16x16 pixel tiles from words and procedural patterns"
)]
/// Command-line arguments for the tile generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Words whose palettes color the tiles
    #[arg(value_name = "WORDS")]
    pub words: Vec<String>,

    /// Generate tiles for every dictionary word
    #[arg(long)]
    pub all_words: bool,

    /// Pattern to paint (repeatable)
    #[arg(short, long = "pattern", value_name = "NAME")]
    pub patterns: Vec<String>,

    /// Paint every registered pattern
    #[arg(long)]
    pub all_patterns: bool,

    /// Print the registered pattern names and exit
    #[arg(long)]
    pub list_patterns: bool,

    /// Print the dictionary words and exit
    #[arg(long)]
    pub list_words: bool,

    /// Hue shift in turns, wrapped into [0, 1)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub hue: f64,

    /// Saturation multiplier
    #[arg(long, default_value_t = 1.0)]
    pub saturation: f64,

    /// Value (brightness) multiplier
    #[arg(long, default_value_t = 1.0)]
    pub value: f64,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Directory receiving one PNG per tile
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Nearest-neighbour upscale factor for exported images
    #[arg(long, default_value_t = 1)]
    pub scale: u32,

    /// Also lay every tile out on a map and export it to this path
    #[arg(long, value_name = "PATH")]
    pub sheet: Option<PathBuf>,

    /// Quantize tiles and sheet to the Game Boy palette
    #[arg(long)]
    pub gameboy: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Overwrite tiles even if the output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Log filter specification, e.g. "debug" or "wordtile=trace"
    #[arg(long, value_name = "SPEC")]
    pub log: Option<String>,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Palette adjustment requested on the command line
    pub const fn adjustment(&self) -> HsvAdjustment {
        HsvAdjustment::new(self.hue, self.saturation, self.value)
    }
}

/// Start the logger when a filter specification is given
///
/// The handle must be kept alive for as long as logging is wanted.
///
/// # Errors
///
/// Returns `Logging` when the specification cannot be parsed or the logger
/// cannot be installed
pub fn init_logging(spec: Option<&str>) -> Result<Option<LoggerHandle>> {
    spec.map(|spec| {
        Logger::try_with_str(spec)?
            .format(default_format)
            .start()
            .map_err(WordTileError::from)
    })
    .transpose()
}

/// One word and pattern pair to generate
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileJob {
    /// Dictionary word
    pub word: String,
    /// Pattern name
    pub pattern: String,
}

impl TileJob {
    /// Output file name `<word>_<pattern>.png`, with characters unsafe in
    /// file names replaced by underscores
    pub fn file_name(&self) -> String {
        let clean = |s: &str| -> String {
            s.trim()
                .to_lowercase()
                .chars()
                .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
                .collect()
        };
        format!(
            "{}_{}.{OUTPUT_EXTENSION}",
            clean(&self.word),
            clean(&self.pattern)
        )
    }
}

/// Sheet dimensions for `count` tiles: at most 16 wide, at least 4 by 4
pub fn sheet_dimensions(count: usize) -> (usize, usize) {
    let width = count.clamp(MIN_MAP_DIMENSION, MAX_SHEET_WIDTH);
    let height = count.div_ceil(width).max(MIN_MAP_DIMENSION);
    (width, height)
}

/// Orchestrates batch generation with progress tracking
pub struct TileProcessor {
    cli: Cli,
    generator: TileGenerator,
    progress_manager: Option<ProgressManager>,
}

impl TileProcessor {
    /// Create a processor for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let generator = TileGenerator::new(cli.seed);
        Self {
            cli,
            generator,
            progress_manager: None,
        }
    }

    /// Word and pattern pairs in generation order, words outermost
    pub fn jobs(&self) -> Vec<TileJob> {
        let words: Vec<String> = if self.cli.all_words {
            self.generator
                .dictionary()
                .words()
                .iter()
                .copied()
                .map(str::to_owned)
                .collect()
        } else if self.cli.words.is_empty() {
            vec![DEFAULT_WORD.to_owned()]
        } else {
            self.cli.words.clone()
        };

        let patterns: Vec<String> = if self.cli.all_patterns {
            self.generator
                .registry()
                .names()
                .into_iter()
                .map(str::to_owned)
                .collect()
        } else if self.cli.patterns.is_empty() {
            vec![DEFAULT_PATTERN.to_owned()]
        } else {
            self.cli.patterns.clone()
        };

        words
            .iter()
            .flat_map(|word| {
                patterns.iter().map(move |pattern| TileJob {
                    word: word.clone(),
                    pattern: pattern.clone(),
                })
            })
            .collect()
    }

    /// Run the batch described by the CLI arguments
    ///
    /// Every tile is generated even when its file is skipped, so the random
    /// stream and the sheet do not depend on which outputs already exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the scale or sheet size is invalid or an image
    /// cannot be written
    pub fn process(&mut self) -> Result<()> {
        if self.cli.list_patterns || self.cli.list_words {
            self.print_listings();
            return Ok(());
        }

        let scale = validate_scale(self.cli.scale)?;
        let adjustment = self.cli.adjustment();
        let jobs = self.jobs();
        let mut sheet = self
            .cli
            .sheet
            .as_ref()
            .map(|_| {
                let (width, height) = sheet_dimensions(jobs.len());
                MapGrid::new(width, height).map(|grid| (grid, width))
            })
            .transpose()?;

        if self.cli.should_show_progress() {
            self.progress_manager = Some(ProgressManager::new(jobs.len()));
        }

        for (index, job) in jobs.iter().enumerate() {
            let name = job.file_name();
            if let Some(ref pm) = self.progress_manager {
                pm.start_job(&name);
            }

            let mut tile = self
                .generator
                .generate(&job.word, &job.pattern, &adjustment);
            if self.cli.gameboy {
                tile = gameboyize_tile(&tile);
            }

            let path = self.cli.output.join(&name);
            if self.cli.skip_existing() && path.exists() {
                warn!("skipping {} (output exists)", path.display());
                if let Some(ref pm) = self.progress_manager {
                    pm.skip_job(&name);
                }
            } else {
                export_tile(&tile, &path, scale)?;
                if let Some(ref pm) = self.progress_manager {
                    pm.complete_job();
                }
            }

            if let Some((grid, width)) = sheet.as_mut() {
                let (x, y) = (index % *width, index / *width);
                grid.set(x as i32, y as i32, Some(Rc::new(tile)));
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        if let (Some((grid, _)), Some(path)) = (sheet, self.cli.sheet.as_deref()) {
            Self::export_sheet(&grid, path, scale)?;
        }

        Ok(())
    }

    fn export_sheet(grid: &MapGrid, path: &Path, scale: u32) -> Result<()> {
        export_map(grid, path, scale)?;
        info!("sheet of {} tiles written", grid.occupied());
        Ok(())
    }

    // Listings are the program output, so they go to stdout
    #[allow(clippy::print_stdout)]
    fn print_listings(&self) {
        if self.cli.list_words {
            for word in self.generator.dictionary().words() {
                println!("{word}");
            }
        }
        if self.cli.list_patterns {
            for name in self.generator.registry().names() {
                println!("{name}");
            }
        }
    }
}
