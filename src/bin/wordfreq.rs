use clap::Parser;
use log::LevelFilter;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use wordfreq::config::{DEFAULT_MAX_WORD_LEN, DEFAULT_TOP_N};
use wordfreq::{CountConfig, Summary};

/// Word count summary for a text file
#[derive(Parser, Debug)]
#[command(name = "wordfreq", about, long_about = None, disable_version_flag = true)]
struct Args {
    /// Text file to analyze
    file_name: PathBuf,

    /// Number of most frequent words to list
    #[arg(default_value_t = DEFAULT_TOP_N)]
    top_n: usize,

    /// Ignore words longer than N characters
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_WORD_LEN)]
    max_word_len: usize,

    /// Fail once more than N distinct words are seen
    #[arg(long, value_name = "N")]
    max_unique: Option<usize>,

    /// More log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Parses the command line, or returns the exit status to stop with.
///
/// Usage errors exit with 1; `--help` prints and exits with 0.
fn parse_args<I, T>(argv: I) -> Result<Args, u8>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Args::try_parse_from(argv).map_err(|err| {
        let _ = err.print();
        if err.use_stderr() {
            1
        } else {
            0
        }
    })
}

/// Flushes the report and turns the run outcome into an exit status.
fn finish<W: Write>(result: anyhow::Result<Summary>, out: &mut W) -> u8 {
    let flushed = out.flush();
    match (result, flushed) {
        (Ok(_), Ok(())) => 0,
        (Ok(_), Err(err)) => {
            eprintln!("Error: failed to write report: {}", err);
            1
        }
        (Err(err), _) => {
            eprintln!("Error: {:#}", err);
            1
        }
    }
}

fn main() -> ExitCode {
    let args = match parse_args(std::env::args_os()) {
        Ok(args) => args,
        Err(code) => return ExitCode::from(code),
    };
    init_logging(args.verbose);

    let config = CountConfig {
        max_word_len: args.max_word_len,
        max_unique: args.max_unique,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = wordfreq::run(&args.file_name, args.top_n, &config, &mut out);
    ExitCode::from(finish(result, &mut out))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    fn summary() -> Summary {
        Summary {
            total_words: 0,
            unique_words: 0,
            top: Vec::new(),
        }
    }

    #[test]
    fn missing_file_name_exits_with_one() {
        assert_eq!(parse_args(["wordfreq"]).unwrap_err(), 1);
    }

    #[test]
    fn non_numeric_count_exits_with_one() {
        assert_eq!(parse_args(["wordfreq", "f", "abc"]).unwrap_err(), 1);
        assert_eq!(parse_args(["wordfreq", "f", "-5"]).unwrap_err(), 1);
    }

    #[test]
    fn help_exits_with_zero() {
        assert_eq!(parse_args(["wordfreq", "--help"]).unwrap_err(), 0);
    }

    #[test]
    fn defaults_apply_when_options_are_omitted() {
        let args = parse_args(["wordfreq", "book.txt"]).unwrap();
        assert_eq!(args.file_name, PathBuf::from("book.txt"));
        assert_eq!(args.top_n, 10);
        assert_eq!(args.max_word_len, 31);
        assert_eq!(args.max_unique, None);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn explicit_options_are_parsed() {
        let args =
            parse_args(["wordfreq", "-vv", "book.txt", "3", "--max-unique", "100"]).unwrap();
        assert_eq!(args.top_n, 3);
        assert_eq!(args.max_unique, Some(100));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn successful_run_exits_with_zero() {
        assert_eq!(finish(Ok(summary()), &mut io::sink()), 0);
    }

    #[test]
    fn failed_run_exits_with_one() {
        assert_eq!(finish(Err(anyhow::anyhow!("boom")), &mut io::sink()), 1);
    }

    #[test]
    fn failed_flush_exits_with_one() {
        assert_eq!(finish(Ok(summary()), &mut BrokenPipe), 1);
    }
}
