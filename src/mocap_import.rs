pub mod bvh_file;
mod types;

// Re-exports
pub use types::{BindingWarning, FormatError, ImportOptions, MocapLoaded};
