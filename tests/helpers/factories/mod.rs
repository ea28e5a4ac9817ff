pub mod partial_row_factory;
pub mod point_factory;
pub mod rollup_row_factory;

pub use partial_row_factory::PartialRowFactory;
pub use point_factory::PointFactory;
pub use rollup_row_factory::RollupRowFactory;

#[cfg(test)]
mod partial_row_factory_test;
