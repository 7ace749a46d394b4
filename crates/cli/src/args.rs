// crates/cli/src/args.rs
use crate::options::OutputFormat;
use crate::parsers;
use clap::{Args as ClapArgs, Parser, ValueHint};
use concordance_engine::config::DEFAULT_TOP_WORDS;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "concordance",
    version,
    about = "単語の出現頻度・上位ランキング・語長ヒストグラムを集計するツール"
)]
pub struct Args {
    #[command(flatten)]
    pub count: CountOptions,

    #[command(flatten)]
    pub output: OutputOptions,

    /// 入力ファイル（省略時または `-` は標準入力）
    #[arg(value_hint = ValueHint::FilePath, help_heading = "入力")]
    pub paths: Vec<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct CountOptions {
    /// 大文字・小文字を区別して集計する
    #[arg(short = 'c', long, help_heading = "集計")]
    pub case_sensitive: bool,

    /// 上位N語のみ表示（0 で全件）
    #[arg(
        short = 'n',
        long,
        default_value_t = DEFAULT_TOP_WORDS,
        value_parser = parsers::parse_top_words,
        help_heading = "集計"
    )]
    pub top: usize,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table", help_heading = "出力")]
    pub format: OutputFormat,

    /// 出力先ファイル（省略時は標準出力）
    #[arg(short = 'o', long, value_hint = ValueHint::FilePath, help_heading = "出力")]
    pub output: Option<PathBuf>,

    /// 語長ヒストグラムを出力しない
    #[arg(long, help_heading = "出力")]
    pub no_histogram: bool,
}
