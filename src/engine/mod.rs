pub mod convert;
pub mod entity;
pub mod errors;
pub mod kv;
pub mod point;
pub mod reduce;
pub mod types;
