/*
 * This module reads the tab-separated pairs file into an edge table.
 * It also decides which knowledge sources are hidden from the figure.
 */

pub mod edge;
pub mod filter;
pub mod parser;

pub use edge::EdgeKey;
pub use filter::ExclusionFilter;
pub use parser::PairTable;
