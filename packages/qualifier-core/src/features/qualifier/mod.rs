//! Qualifier value model
//!
//! ## Architecture
//! ```text
//! application/     QualifierContext (oracle + caches + config for one run)
//!   ↓
//! infrastructure/  QualifierBuilder, equivalence, caches, DeclarationRegistry
//!   ↓
//! ports/           TypeOracle (host compiler boundary)
//!   ↓
//! domain/          QualifierKey, ValueDescriptor, HostValue, declarations
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::QualifierContext;
pub use domain::{
    DeclaredElementSignature, HostValue, QualifierDeclaration, QualifierKey, ValueDescriptor,
    ValueVisitor,
};
pub use infrastructure::{
    CanonicalCache, DeclarationRegistry, QualifierBuilder, TypeNameCache,
};
pub use ports::TypeOracle;
