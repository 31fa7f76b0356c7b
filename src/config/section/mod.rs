//! Configuration section definitions.

mod table;

pub use table::{PageConfig, PairConfig, TableConfig};
