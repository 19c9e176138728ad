pub mod dataset;
pub mod stats;

pub use dataset::{load_activity, load_market};
pub use stats::{correlation_matrix, pearson};
