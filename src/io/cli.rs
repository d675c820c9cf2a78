//! Command-line interface for batch processing PNG files
//!
//! Each input image becomes a world, runs through the decompose-and-pack
//! pipeline, and the best decomposition and packing are rendered next to
//! the input file.

use crate::io::configuration::{
    DECOMPOSE_OUTPUT_SUFFIX, DEFAULT_BOUNDING_BOX_WEIGHT, DEFAULT_NUM_OF_PARTS_WEIGHT,
    DEFAULT_PART_SIZE_PERCENT, PACK_OUTPUT_SUFFIX,
};
use crate::io::error::Result;
use crate::io::image::export_placements_as_png;
use crate::io::progress::ProgressManager;
use crate::pipeline::{DecomposeAndPack, GraderWeights, PipelineConfig};
use crate::spatial::builder;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "blockpack")]
#[command(
    author,
    version,
    about = "Decompose pixelated objects into rectangular parts and pack them"
)]
/// Command-line arguments for the decompose-and-pack tool
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Largest part edge as a percentage of the world's smaller side
    #[arg(short, long, default_value_t = DEFAULT_PART_SIZE_PERCENT)]
    pub part_size_percent: u32,

    /// Grading weight of the bounding-box criterion
    #[arg(short, long, default_value_t = DEFAULT_BOUNDING_BOX_WEIGHT)]
    pub bounding_box_weight: f64,

    /// Grading weight of the part-count criterion
    #[arg(short, long, default_value_t = DEFAULT_NUM_OF_PARTS_WEIGHT)]
    pub num_of_parts_weight: f64,

    /// Use the 3D part library and box sizing
    #[arg(short, long)]
    pub three_d: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(long)]
    pub no_skip: bool,
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

    /// Pipeline configuration derived from the arguments
    pub const fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            part_size_percent: self.part_size_percent,
            weights: GraderWeights {
                bounding_box: self.bounding_box_weight,
                num_of_parts: self.num_of_parts_weight,
            },
            three_d: self.three_d,
        }
    }
}

/// Orchestrates batch processing of PNG files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, pipeline configuration or
    /// file processing fails.
    pub fn process(&mut self) -> Result<()> {
        self.cli.pipeline_config().validate()?;

        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some("png") {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(crate::io::error::io_error(
                    "Target file must be a PNG image",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some("png")
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(crate::io::error::io_error(
                "Target must be a PNG file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        // Rendered outputs are themselves results; never re-process them.
        if is_output_path(input_path) {
            return false;
        }

        if !self.cli.skip_existing() {
            return true;
        }

        let decompose_path = output_path(input_path, DECOMPOSE_OUTPUT_SUFFIX);
        let pack_path = output_path(input_path, PACK_OUTPUT_SUFFIX);
        if decompose_path.exists() && pack_path.exists() {
            // Allow print for user feedback on skipped files
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let world = builder::from_image(input_path)?;
        let pipeline = DecomposeAndPack::new(&world, self.cli.pipeline_config())?;
        let (decompose_results, pack_results) = pipeline.run();

        if let Some(best) = decompose_results.first() {
            let path = output_path(input_path, DECOMPOSE_OUTPUT_SUFFIX);
            export_placements_as_png(
                best,
                path.to_str()
                    .ok_or_else(|| crate::io::error::io_error("Invalid output path"))?,
            )?;
        }

        // The best packing may be empty when no box held the parts;
        // nothing is rendered in that case.
        if let Some(best) = pack_results.first().filter(|p| !p.is_empty()) {
            let path = output_path(input_path, PACK_OUTPUT_SUFFIX);
            export_placements_as_png(
                best,
                path.to_str()
                    .ok_or_else(|| crate::io::error::io_error("Invalid output path"))?,
            )?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        Ok(())
    }
}

/// Output path for an input file and rendering suffix
pub fn output_path(input_path: &Path, suffix: &str) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let extension = input_path.extension().unwrap_or_default();
    let output_name = format!(
        "{}{}.{}",
        stem.to_string_lossy(),
        suffix,
        extension.to_string_lossy()
    );

    if let Some(parent) = input_path.parent() {
        parent.join(output_name)
    } else {
        PathBuf::from(output_name)
    }
}

fn is_output_path(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| {
            stem.ends_with(DECOMPOSE_OUTPUT_SUFFIX) || stem.ends_with(PACK_OUTPUT_SUFFIX)
        })
}
