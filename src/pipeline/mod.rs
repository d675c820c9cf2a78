//! Decompose, pack and grade pipeline
//!
//! The pipeline turns a world into exact-cover instances: the decomposer
//! covers the world with parts of decreasing size, the packer fits each
//! decomposition into the smallest box it can find, and the grader ranks
//! the results by bounding box and part count.

/// Decomposition of a world into part placements
pub mod decompose;
/// Placement enumeration into DLX rows and back
pub mod encoder;
/// Weighted ranking of results
pub mod grade;
/// Packing of decomposed parts into candidate boxes
pub mod pack;

pub use decompose::{DecomposeSolution, PartCount};
pub use encoder::PlacedPart;
pub use grade::GraderWeights;
pub use pack::PackSolution;

use crate::io::error::{invalid_parameter, Result};
use crate::io::configuration::DEFAULT_PART_SIZE_PERCENT;
use crate::spatial::world::World;

/// Tunable parameters of the pipeline
#[derive(Debug, Clone, Copy)]
pub struct PipelineConfig {
    /// Largest part edge as a percentage of the world's smaller side
    pub part_size_percent: u32,
    /// Grader weights for ranking results
    pub weights: GraderWeights,
    /// Use the 3D part library and box sizing
    pub three_d: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            part_size_percent: DEFAULT_PART_SIZE_PERCENT,
            weights: GraderWeights::default(),
            three_d: false,
        }
    }
}

impl PipelineConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the part size percentage is outside
    /// `[1, 100]` or the grader weights are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.part_size_percent < 1 || self.part_size_percent > 100 {
            return Err(invalid_parameter(
                "part_size_percent",
                &self.part_size_percent,
                &"must be in [1, 100]",
            ));
        }
        self.weights.validate()
    }
}

/// Orchestrates decomposition, packing and grading of one world
#[derive(Debug)]
pub struct DecomposeAndPack<'a> {
    world: &'a World,
    config: PipelineConfig,
}

/// Ranked placement lists for the decompositions and their packings,
/// best first, index-aligned
pub type DecomposeAndPackResult = (Vec<Vec<PlacedPart>>, Vec<Vec<PlacedPart>>);

impl<'a> DecomposeAndPack<'a> {
    /// Create a pipeline over a world after validating the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(world: &'a World, config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { world, config })
    }

    /// Run the full pipeline and return both result lists ranked by grade
    pub fn run(&self) -> DecomposeAndPackResult {
        let decompositions = decompose::decompose(
            self.world,
            self.config.part_size_percent,
            self.config.three_d,
        );
        let packings = pack::pack(self.world, &decompositions, self.config.three_d);

        let bounding_boxes: Vec<u64> = packings.iter().map(|p| p.bounding_box).collect();
        let part_counts: Vec<usize> = decompositions
            .iter()
            .map(DecomposeSolution::num_parts)
            .collect();
        let ranking = grade::rank(&bounding_boxes, &part_counts, &self.config.weights);

        let decompose_results = ranking
            .iter()
            .filter_map(|&i| decompositions.get(i))
            .map(|s| s.placements.clone())
            .collect();
        let pack_results = ranking
            .iter()
            .filter_map(|&i| packings.get(i))
            .map(|s| s.placements.clone())
            .collect();

        (decompose_results, pack_results)
    }
}
