use crate::error::{EngineError, Result};
use log::debug;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Open every input and chain them, in order, into a single reader.
///
/// An empty list reads stdin. `-` stands for stdin and may appear at most
/// once, since stdin can only be consumed once.
///
/// # Errors
///
/// Returns `EngineError::FileOpen` for the first file that cannot be opened
/// and `EngineError::Config` when stdin is requested more than once.
pub fn open_inputs(paths: &[PathBuf]) -> Result<Box<dyn BufRead>> {
    if paths.is_empty() {
        debug!("reading from stdin");
        return Ok(Box::new(io::stdin().lock()));
    }

    chain_inputs(paths, io::stdin())
}

/// Chain `paths` in order, reading `stdin` wherever `-` appears.
fn chain_inputs<S: Read + 'static>(paths: &[PathBuf], stdin: S) -> Result<Box<dyn BufRead>> {
    if paths.iter().filter(|p| is_stdin(p)).count() > 1 {
        return Err(EngineError::Config(
            "stdin ('-') can only be read once".to_string(),
        ));
    }

    let mut stdin = Some(stdin);
    let mut chained: Box<dyn Read> = Box::new(io::empty());
    for path in paths {
        let next: Box<dyn Read> = if is_stdin(path) {
            debug!("reading from stdin");
            match stdin.take() {
                Some(source) => Box::new(SeparatedInput::new(source)),
                None => Box::new(io::empty()),
            }
        } else {
            let file = File::open(path).map_err(|e| EngineError::FileOpen {
                path: path.clone(),
                source: e,
            })?;
            debug!("opened {}", path.display());
            Box::new(SeparatedInput::new(file))
        };
        chained = Box::new(chained.chain(next));
    }

    Ok(Box::new(BufReader::new(chained)))
}

/// Appends a newline after the wrapped reader so that the last word of one
/// input never merges with the first word of the next.
struct SeparatedInput<R> {
    inner: R,
    separator_sent: bool,
}

impl<R> SeparatedInput<R> {
    const fn new(inner: R) -> Self {
        Self {
            inner,
            separator_sent: false,
        }
    }
}

impl<R: Read> Read for SeparatedInput<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        match self.inner.read(buf)? {
            0 if !self.separator_sent => {
                self.separator_sent = true;
                buf[0] = b'\n';
                Ok(1)
            }
            n => Ok(n),
        }
    }
}
