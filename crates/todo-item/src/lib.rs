//! Immutable to-do item record with two serialization codecs: a
//! structured JSON document format and a flat semicolon-delimited line
//! format. Both decoders are total functions returning `Option`; see
//! the `json` and `csv` modules for the exact field contracts.

pub mod csv;
pub mod errors;
pub mod importance;
pub mod item;
pub mod json;

pub use errors::*;
pub use importance::*;
pub use item::*;
