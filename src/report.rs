use crate::table::WordRecord;
use std::io::{self, Write};

/// Width of the column the word is left-justified in.
pub const WORD_COLUMN: usize = 32;

/// Writes the summary block followed by one line per selected word.
pub fn render<W: Write>(
    out: &mut W,
    file_name: &str,
    total_words: usize,
    unique_words: usize,
    top: &[&WordRecord],
) -> io::Result<()> {
    writeln!(out, "{}", file_name)?;
    writeln!(out, "SUMMARY:")?;
    writeln!(out, "\t{} words", total_words)?;
    writeln!(out, "\t{} unique words", unique_words)?;
    writeln!(out)?;
    writeln!(out, "WORD FREQUENCIES (TOP {}):", top.len())?;
    for record in top {
        writeln!(out, "{:<width$}{}", record.text, record.count, width = WORD_COLUMN)?;
    }
    Ok(())
}
