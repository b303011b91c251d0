//! User interface module - operator-facing output.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Reporting helpers built on them

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_boundary_warning, display_error, display_previous_version, display_status,
};

use crate::boundary::BoundaryWarning;

/// Report every boundary warning collected during a run.
pub fn display_boundary_warnings(warnings: &[BoundaryWarning]) {
    for warning in warnings {
        display_boundary_warning(warning);
    }
}
