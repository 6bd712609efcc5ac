//! Container backends
//!
//! - `TreeBackend`: balanced ordered tree, full navigation
//! - `SortedArrayBackend`: dense sorted array, positional access
//! - `ConfiguredBackend`: either of the two, picked from configuration

pub mod configured_backend;
pub mod sorted_array_backend;
pub mod tree_backend;

pub use configured_backend::ConfiguredBackend;
pub use sorted_array_backend::SortedArrayBackend;
pub use tree_backend::TreeBackend;
