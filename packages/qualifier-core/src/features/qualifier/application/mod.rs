pub mod context;

pub use context::QualifierContext;
