use crate::errors::HorizonResult;
use crate::models::{IndexInputs, IndexReport};

/// Builds the consensus index from the five input series.
pub trait IIndexEngine: Send + Sync {
    fn build(&self, inputs: &IndexInputs) -> HorizonResult<IndexReport>;
}
