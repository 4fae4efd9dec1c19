//! Output Tree
//!
//! Models the documentation output root as nested namespace directories:
//! path handling, the recursive scan of what already exists, and planning of
//! what a run must add.

pub mod path;
pub mod planner;
pub mod walker;

pub use path::DirPath;
pub use planner::plan_new_directories;
pub use walker::{Walker, WalkerConfig, CATEGORY_FILE_NAME};
