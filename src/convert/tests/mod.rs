//! Test utilities shared across conversion test modules.

use crate::column::{ColumnSpec, TargetKind};

mod datetime_tests;

/// Helper to create a spec for the given target kind with default settings
pub fn spec(kind: TargetKind) -> ColumnSpec {
    ColumnSpec::new("field").with_target(kind)
}
