//! Word frequency statistics for text files.
//!
//! Text flows through [`tokenizer`] into a [`table::FrequencyTable`], then
//! [`select::select_top`] picks the most frequent words and [`report`] prints
//! them.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod select;
pub mod table;
pub mod tokenizer;

pub use config::CountConfig;
pub use error::{Result, WordFreqError};
pub use pipeline::{count_file, count_reader, run, Summary};
pub use select::select_top;
pub use table::{FrequencyTable, WordRecord};
