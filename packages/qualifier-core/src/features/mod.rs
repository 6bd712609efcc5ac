//! Feature modules - Each feature follows Hexagonal Architecture
//!
//! Each feature contains:
//! - domain/     - Pure business logic (no external dependencies)
//! - ports/      - Interface definitions (traits)
//! - application/ - Use cases
//! - infrastructure/ - Implementations of the ports and domain services

/// Qualifier values: model, builder, equivalence, caches
pub mod qualifier;

/// Equivalence-based Set / Map over two backends
pub mod collections;
