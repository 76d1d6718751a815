pub mod panels;

pub use panels::{demo_accounts, feature_grid, stat_counters};
