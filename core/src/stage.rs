//! Generation stage trait.
//!
//! RULE: Every table family is produced by exactly one stage.
//! The generator runs stages in the fixed order documented in
//! generator.rs, handing each its own RNG stream.

use crate::{dataset::Dataset, error::GenResult, rng::{StageRng, StageSlot}};

/// The contract every generation stage must fulfill.
pub trait GenerationStage {
    /// Unique stable name, used in logs and precondition errors.
    fn name(&self) -> &'static str;

    /// The RNG slot this stage draws from. Never shared between stages.
    fn slot(&self) -> StageSlot;

    /// Read whatever earlier tables the stage depends on from `dataset`
    /// and attach this stage's table(s) to it.
    ///
    /// On error the stage must not have touched `dataset`: its own table
    /// stays absent and every earlier table stays in place.
    fn run(&self, dataset: &mut Dataset, rng: &mut StageRng) -> GenResult<()>;
}
