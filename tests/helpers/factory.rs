pub use super::factories::{PartialRowFactory, PointFactory, RollupRowFactory};

pub struct Factory;

impl Factory {
    pub fn partial_row() -> PartialRowFactory {
        PartialRowFactory::new()
    }

    pub fn point() -> PointFactory {
        PointFactory::new()
    }

    pub fn rollup_row() -> RollupRowFactory {
        RollupRowFactory::new()
    }
}
