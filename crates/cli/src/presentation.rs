// crates/cli/src/presentation.rs
use crate::config::Config;
use crate::error::Result;
use concordance_core::{Concordance, WordTuple};
use concordance_engine::options::OutputFormat;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Serializable view of a concordance with counts in word order.
#[derive(Debug, Serialize)]
struct Report<'a> {
    total: usize,
    unique: usize,
    most_used: &'a [WordTuple],
    length_histogram: &'a [usize],
    counts: BTreeMap<&'a str, usize>,
}

impl<'a> From<&'a Concordance> for Report<'a> {
    fn from(c: &'a Concordance) -> Self {
        Self {
            total: c.total,
            unique: c.unique,
            most_used: &c.most_used,
            length_histogram: &c.length_histogram,
            counts: c.counts.iter().map(|(w, n)| (w.as_str(), *n)).collect(),
        }
    }
}

/// Write the report to the configured destination (stdout by default).
///
/// # Errors
/// Returns an error if the output file cannot be created or written.
pub fn emit(concordance: &Concordance, config: &Config) -> Result<()> {
    if let Some(path) = &config.output_path {
        let mut out = BufWriter::new(File::create(path)?);
        write_report(&mut out, concordance, config)?;
        out.flush()?;
    } else {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        write_report(&mut out, concordance, config)?;
        out.flush()?;
    }
    Ok(())
}

/// Render the concordance in the configured format.
///
/// # Errors
/// Returns an error if writing fails or serialization fails.
pub fn write_report<W: Write>(out: &mut W, c: &Concordance, config: &Config) -> Result<()> {
    match config.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &Report::from(c))?;
            writeln!(out)?;
        }
        OutputFormat::Yaml => serde_yaml::to_writer(&mut *out, &Report::from(c))?,
        OutputFormat::Jsonl => write_jsonl(out, c, config)?,
        OutputFormat::Md => write_markdown(out, c, config)?,
        OutputFormat::Csv => write_sv(out, c, ',')?,
        OutputFormat::Tsv => write_sv(out, c, '\t')?,
        OutputFormat::Table => write_table(out, c, config)?,
    }
    Ok(())
}

/// Histogram slots worth printing: index 0 is never a word length.
fn histogram_rows(c: &Concordance) -> impl Iterator<Item = (usize, usize)> + '_ {
    c.length_histogram.iter().copied().enumerate().skip(1)
}

fn write_table<W: Write>(out: &mut W, c: &Concordance, config: &Config) -> io::Result<()> {
    writeln!(out, "concordance v{}", crate::VERSION)?;
    writeln!(out)?;

    writeln!(out, "    TOTAL        UNIQUE")?;
    writeln!(out, "{:>9}{:>14}", c.total, c.unique)?;
    writeln!(out)?;

    writeln!(out, "     RANK        COUNT      WORD")?;
    writeln!(out, "----------------------------------------------")?;
    for (i, t) in c.most_used.iter().enumerate() {
        writeln!(out, "{:>9}{:>13}      {}", i + 1, t.count, t.word)?;
    }

    if config.show_histogram {
        writeln!(out)?;
        writeln!(out, "   LENGTH        WORDS")?;
        writeln!(out, "----------------------------------------------")?;
        for (len, n) in histogram_rows(c) {
            writeln!(out, "{len:>9}{n:>13}")?;
        }
    }

    writeln!(out)?;
    writeln!(
        out,
        "[concordance] Completed: {} words scanned, {} unique.",
        c.total, c.unique
    )
}

fn write_jsonl<W: Write>(out: &mut W, c: &Concordance, config: &Config) -> Result<()> {
    for (i, t) in c.most_used.iter().enumerate() {
        let record = serde_json::json!({
            "type": "word",
            "rank": i + 1,
            "word": t.word,
            "count": t.count,
        });
        writeln!(out, "{record}")?;
    }

    if config.show_histogram {
        for (len, n) in histogram_rows(c) {
            let record = serde_json::json!({
                "type": "length",
                "length": len,
                "words": n,
            });
            writeln!(out, "{record}")?;
        }
    }

    let total_obj = serde_json::json!({
        "type": "total",
        "version": crate::VERSION,
        "total": c.total,
        "unique": c.unique,
    });
    writeln!(out, "{total_obj}")?;
    Ok(())
}

fn write_markdown<W: Write>(out: &mut W, c: &Concordance, config: &Config) -> io::Result<()> {
    writeln!(out, "### Summary")?;
    writeln!(out)?;
    writeln!(out, "| Total | Unique |")?;
    writeln!(out, "|:---:|:---:|")?;
    writeln!(out, "| {} | {} |", c.total, c.unique)?;
    writeln!(out)?;

    writeln!(out, "### Most Used")?;
    writeln!(out)?;
    writeln!(out, "| Rank | Count | Word |")?;
    writeln!(out, "|:---:|:---:|:---|")?;
    for (i, t) in c.most_used.iter().enumerate() {
        let word = t.word.replace('|', "\\|");
        writeln!(out, "| {} | {} | {word} |", i + 1, t.count)?;
    }
    writeln!(out)?;

    if config.show_histogram {
        writeln!(out, "### Length Histogram")?;
        writeln!(out)?;
        writeln!(out, "| Length | Words |")?;
        writeln!(out, "|:---:|:---:|")?;
        for (len, n) in histogram_rows(c) {
            writeln!(out, "| {len} | {n} |")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_sv<W: Write>(out: &mut W, c: &Concordance, delimiter: char) -> io::Result<()> {
    writeln!(out, "rank{delimiter}word{delimiter}count")?;
    for (i, t) in c.most_used.iter().enumerate() {
        let word = if delimiter == ','
            && (t.word.contains(',') || t.word.contains('"'))
        {
            format!("\"{}\"", t.word.replace('"', "\"\""))
        } else {
            t.word.clone()
        };
        writeln!(out, "{}{delimiter}{word}{delimiter}{}", i + 1, t.count)?;
    }
    Ok(())
}
