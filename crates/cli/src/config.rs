// crates/cli/src/config.rs
use crate::args::Args;
use crate::options;
pub use concordance_engine::config::{Config, ConfigBuilder};
use concordance_engine::options as engine_options;

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let format: engine_options::OutputFormat = args.output.format.into();

        ConfigBuilder::default()
            .inputs(args.paths)
            .case_sensitive(args.count.case_sensitive)
            .top_words(args.count.top)
            .format(format)
            .output_path(args.output.output)
            .show_histogram(!args.output.no_histogram)
            .build()
            .expect("every Config field has a default")
    }
}

// From trait implementations for CLI -> Engine enum conversion

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(
    options::OutputFormat,
    engine_options::OutputFormat,
    Table,
    Csv,
    Tsv,
    Json,
    Yaml,
    Md,
    Jsonl
);
