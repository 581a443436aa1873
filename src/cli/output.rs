//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::AppError;

/// Map domain errors to the line printed on stderr before exiting.
pub fn map_error(e: &AppError) -> String {
    format!("Error: {}", e)
}
