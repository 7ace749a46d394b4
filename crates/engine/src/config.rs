use crate::options::OutputFormat;
use derive_builder::Builder;
use std::path::PathBuf;

/// Number of ranked words reported when nothing else is requested.
pub const DEFAULT_TOP_WORDS: usize = 10;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Files read in order as one stream. Empty or `-` means stdin.
    #[builder(default)]
    pub inputs: Vec<PathBuf>,
    #[builder(default)]
    pub case_sensitive: bool,
    /// Length of the ranked list; `0` keeps every word.
    #[builder(default = "DEFAULT_TOP_WORDS")]
    pub top_words: usize,

    #[builder(default = "OutputFormat::Table")]
    pub format: OutputFormat,
    #[builder(default)]
    pub output_path: Option<PathBuf>,
    #[builder(default = "true")]
    pub show_histogram: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inputs: vec![],
            case_sensitive: false,
            top_words: DEFAULT_TOP_WORDS,
            format: OutputFormat::Table,
            output_path: None,
            show_histogram: true,
        }
    }
}

impl Config {
    /// Whether input comes from stdin rather than named files.
    #[must_use]
    pub fn reads_stdin(&self) -> bool {
        self.inputs.is_empty() || self.inputs.iter().all(|p| p.as_os_str() == "-")
    }
}
