pub mod api;
pub mod cache;
pub mod config;
pub mod corpus;
pub mod error;
pub mod geometry;
pub mod layouts;
pub mod scorer;

pub use crate::error::{KeResult, KeyErgoError};
pub use crate::layouts::LayoutMapping;
pub use crate::scorer::{analyze, classify_keys, Analysis, AnalysisResult, Analyzer};
