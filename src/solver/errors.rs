use thiserror::Error;

use crate::utils::UtilsError;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Utils error: {0}")]
    UtilsError(#[from] UtilsError),
}
