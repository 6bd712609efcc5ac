pub mod declaration;
pub mod host_value;
pub mod key;
pub mod value;

pub use declaration::{DeclaredElementSignature, QualifierDeclaration};
pub use host_value::HostValue;
pub use key::QualifierKey;
pub use value::{ValueDescriptor, ValueVisitor};
