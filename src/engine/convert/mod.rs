pub mod batch;
pub mod converter;

pub use batch::RollupBatch;
pub use converter::PointConverter;
