pub mod aggregator;
pub mod comparator;
