use crate::engine::reduce::PartialAggregateRow;

pub struct PartialRowFactory {
    row: PartialAggregateRow,
}

impl PartialRowFactory {
    pub fn new() -> Self {
        Self {
            row: PartialAggregateRow::default(),
        }
    }

    pub fn with_bool(mut self, v: bool) -> Self {
        self.row.bool_v = Some(v);
        self
    }

    pub fn with_str(mut self, v: &str) -> Self {
        self.row.str_v = Some(v.to_string());
        self
    }

    pub fn with_long(mut self, v: i64) -> Self {
        self.row.long_v = Some(v);
        self
    }

    pub fn with_double(mut self, v: f64) -> Self {
        self.row.dbl_v = Some(v);
        self
    }

    pub fn with_long_sum(mut self, v: i64) -> Self {
        self.row.long_sum = Some(v);
        self
    }

    pub fn with_double_sum(mut self, v: f64) -> Self {
        self.row.double_sum = Some(v);
        self
    }

    /// Sets boolean, string, long and double counters in that order.
    pub fn with_counts(mut self, bool_c: i64, str_c: i64, long_c: i64, double_c: i64) -> Self {
        self.row.bool_count = Some(bool_c);
        self.row.str_count = Some(str_c);
        self.row.long_count = Some(long_c);
        self.row.double_count = Some(double_c);
        self
    }

    pub fn create(self) -> PartialAggregateRow {
        self.row
    }
}
