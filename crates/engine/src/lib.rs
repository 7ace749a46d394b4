// crates/engine/src/lib.rs
use concordance_core::Concordance;
use log::{debug, info};
use std::io::BufRead;

pub mod config;
pub mod error;
pub mod input;
pub mod options;
pub mod tokens;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::tokens::TokenStream;

/// Read every configured input and build its concordance.
///
/// # Errors
///
/// Returns an error if an input cannot be opened or fails mid-read. Nothing
/// partial is returned in either case.
pub fn run(config: &Config) -> Result<Concordance> {
    if config.reads_stdin() {
        debug!("no input files given, using stdin");
    } else {
        debug!("reading {} input(s)", config.inputs.len());
    }
    let reader = input::open_inputs(&config.inputs)?;
    run_reader(reader, config)
}

/// Build a concordance from an already opened reader.
///
/// # Errors
///
/// Returns `EngineError::InputRead` if the reader fails before end of input.
pub fn run_reader<R: BufRead>(reader: R, config: &Config) -> Result<Concordance> {
    let concordance = Concordance::build(
        TokenStream::new(reader),
        config.case_sensitive,
        config.top_words,
    )
    .map_err(EngineError::InputRead)?;

    info!(
        "scanned {} tokens, {} unique words",
        concordance.total, concordance.unique
    );
    Ok(concordance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigBuilder;
    use concordance_core::WordTuple;
    use std::io::{self, BufReader, Cursor, Read, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn run_reader_end_to_end() {
        let config = ConfigBuilder::default().top_words(2usize).build().unwrap();
        let c = run_reader(Cursor::new("a bb bb ccc ccc ccc"), &config).unwrap();

        assert_eq!(c.total, 6);
        assert_eq!(c.unique, 3);
        assert_eq!(
            c.most_used,
            vec![WordTuple::new("ccc", 3), WordTuple::new("bb", 2)]
        );
        assert_eq!(c.length_histogram, vec![0, 1, 1, 1]);
    }

    #[test]
    fn run_reads_files_as_one_corpus() {
        let mut first = NamedTempFile::new().unwrap();
        writeln!(first, "The cat sat.").unwrap();
        let mut second = NamedTempFile::new().unwrap();
        write!(second, "the CAT").unwrap();

        let config = ConfigBuilder::default()
            .inputs(vec![first.path().to_path_buf(), second.path().to_path_buf()])
            .top_words(0usize)
            .build()
            .unwrap();
        let c = run(&config).unwrap();

        assert_eq!(c.total, 5);
        assert_eq!(c.count_of("the"), 2);
        assert_eq!(c.count_of("cat"), 2);
        assert_eq!(c.count_of("sat"), 1);
    }

    #[test]
    fn case_sensitive_run_keeps_variants() {
        let config = ConfigBuilder::default()
            .case_sensitive(true)
            .build()
            .unwrap();
        let c = run_reader(Cursor::new("The the THE."), &config).unwrap();
        assert_eq!(c.unique, 3);
        assert_eq!(c.total, 3);
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("device gone"))
        }
    }

    #[test]
    fn read_failure_surfaces_as_input_read() {
        let err = run_reader(BufReader::new(Broken), &Config::default()).unwrap_err();
        assert!(matches!(err, EngineError::InputRead(_)));
        assert!(err.to_string().starts_with("Failed to read input"));
    }
}
