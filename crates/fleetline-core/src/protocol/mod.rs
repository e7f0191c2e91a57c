//! TSDB line protocol: one ASCII message per line.
//!
//! `<command> <metric-name> <timestamp> <value> [<key>=<val> ...]`

pub mod line;
pub mod series;

pub use line::{parse_line, Labels, Sample};
pub use series::Series;
