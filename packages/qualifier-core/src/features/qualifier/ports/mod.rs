pub mod type_oracle;

pub use type_oracle::TypeOracle;
