//! sheetcut-test - Regression test framework for sheetcut
//!
//! Provides a small regression harness modelled on a classic
//! `regutils`-style workflow, plus builders for synthetic product sheets so
//! tests never depend on binary fixtures.
//!
//! - **Compare** (default): value and raster checks fail the test
//! - **Display**: checks still run, and rasters are also written to
//!   `tests/regout` for visual inspection
//!
//! # Usage
//!
//! ```ignore
//! use sheetcut_test::{RegParams, SheetBuilder};
//!
//! let mut rp = RegParams::new("split");
//! rp.compare_values(3.0, segments.len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
mod params;
mod sheet;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};
pub use sheet::{SheetBuilder, solid};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // sheetcut-test is at crates/sheetcut-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
