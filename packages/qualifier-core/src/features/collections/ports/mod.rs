pub mod backend;

pub use backend::{Entry, OrderedBackend};
