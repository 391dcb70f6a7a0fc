pub mod analytical;

pub use analytical::{extract_metric, read_metric, try_get, NO_THERMAL_DATA};
