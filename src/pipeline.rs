use crate::config::CountConfig;
use crate::error::{Result, WordFreqError};
use crate::report;
use crate::select::select_top;
use crate::table::{FrequencyTable, WordRecord};
use crate::tokenizer::tokenize;
use anyhow::Context;
use log::{debug, info};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// Outcome of one counting run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total_words: usize,
    pub unique_words: usize,
    pub top: Vec<WordRecord>,
}

/// Builds a frequency table from line-oriented text.
pub fn count_reader<R: BufRead>(mut reader: R, config: &CountConfig) -> Result<FrequencyTable> {
    let mut table = FrequencyTable::with_config(config);
    let mut buf = Vec::new();
    let mut lines = 0usize;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| WordFreqError::Read { source })?;
        if read == 0 {
            break;
        }
        lines += 1;

        let line = String::from_utf8_lossy(&buf);
        let mut tokens = tokenize(&line, config.max_word_len);
        for word in tokens.by_ref() {
            table.insert(&word)?;
        }
        table.note_dropped(tokens.dropped());
    }

    debug!(
        "read {} lines: {} words, {} unique, {} dropped as too long",
        lines,
        table.total_words(),
        table.unique_words(),
        table.dropped_words()
    );
    Ok(table)
}

pub fn count_file(path: &Path, config: &CountConfig) -> Result<FrequencyTable> {
    let file = File::open(path).map_err(|source| WordFreqError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    count_reader(BufReader::new(file), config)
}

/// Counts `path`, selects the top `top_n` words and writes the report to `out`.
pub fn run<W: Write>(
    path: &Path,
    top_n: usize,
    config: &CountConfig,
    out: &mut W,
) -> anyhow::Result<Summary> {
    let table = match count_file(path, config) {
        Ok(table) => table,
        Err(err @ WordFreqError::Read { .. }) => {
            let context = format!("while reading {}", path.display());
            return Err(anyhow::Error::new(err).context(context));
        }
        Err(err) => return Err(err.into()),
    };
    let top = select_top(&table, top_n);

    report::render(
        out,
        &path.display().to_string(),
        table.total_words(),
        table.unique_words(),
        &top,
    )
    .context("failed to write report")?;

    info!(
        "{}: {} words, {} unique, top {}",
        path.display(),
        table.total_words(),
        table.unique_words(),
        top.len()
    );

    Ok(Summary {
        total_words: table.total_words(),
        unique_words: table.unique_words(),
        top: top.into_iter().cloned().collect(),
    })
}
