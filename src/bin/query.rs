use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use structopt::StructOpt;
use text_index::SuffixTree;

/// Answers substring queries over a text file with a suffix tree.
///
/// `topk` expects the file to start with a query count Q, then Q lines
/// of `l k`, then one separator newline, then the text. `repeat` treats
/// the whole file as the text.
#[derive(StructOpt)]
struct Options {
    /// Query mode: `topk` or `repeat`
    #[structopt(name = "MODE")]
    mode: String,
    /// Input file
    #[structopt(name = "FILE", parse(from_os_str))]
    file: PathBuf,
}

fn main() -> Result<()> {
    let options = Options::from_args();
    let raw = fs::read(&options.file)
        .with_context(|| format!("cannot read {}", options.file.display()))?;

    match options.mode.as_str() {
        "topk" => run_topk(&raw, &options.file),
        "repeat" => run_repeat(&raw, &options.file),
        other => bail!("unknown mode `{}`, expected `topk` or `repeat`", other),
    }
}

fn run_topk(raw: &[u8], file: &Path) -> Result<()> {
    let (queries, text) = parse_topk_input(raw)?;
    let sentinel = choose_sentinel(text)?;

    let construction = Instant::now();
    let tree = SuffixTree::build(text, sentinel)?;
    let construction_time = construction.elapsed();

    let clock = Instant::now();
    let mut solutions = Vec::with_capacity(queries.len());
    for &(l, k) in &queries {
        let start = tree
            .top_k(l, k)
            .with_context(|| format!("query l={} k={}", l, k))?;
        solutions.push(start.to_string());
    }
    let query_time = clock.elapsed();

    println!(
        "algo=topk construction_time={} query_time={} solutions={} file={}",
        construction_time.as_millis(),
        query_time.as_millis(),
        solutions.join(";"),
        file.display()
    );
    Ok(())
}

fn run_repeat(raw: &[u8], file: &Path) -> Result<()> {
    let sentinel = choose_sentinel(raw)?;

    let construction = Instant::now();
    let tree = SuffixTree::build(raw, sentinel)?;
    let construction_time = construction.elapsed();

    let clock = Instant::now();
    let (start, length) = tree.longest_tandem_repeat();
    let query_time = clock.elapsed();

    println!(
        "algo=repeat construction_time={} query_time={} solution={},{} file={}",
        construction_time.as_millis(),
        query_time.as_millis(),
        start,
        length,
        file.display()
    );
    Ok(())
}

/// Splits the query block off the raw file: a count line, that many
/// `l k` lines, and one separator newline. Everything after the
/// separator is the text, verbatim.
fn parse_topk_input(raw: &[u8]) -> Result<(Vec<(usize, usize)>, &[u8])> {
    let (header, mut rest) = split_line(raw).context("missing query count line")?;
    let count: usize = header
        .trim()
        .parse()
        .with_context(|| format!("malformed query count `{}`", header))?;

    let mut queries = Vec::with_capacity(count);
    for index in 0..count {
        let (line, tail) =
            split_line(rest).with_context(|| format!("missing query line {}", index + 1))?;
        let mut fields = line.split_whitespace();
        let l = fields
            .next()
            .with_context(|| format!("query line {} has no length", index + 1))?
            .parse()
            .with_context(|| format!("malformed length in query line {}", index + 1))?;
        let k = fields
            .next()
            .with_context(|| format!("query line {} has no rank", index + 1))?
            .parse()
            .with_context(|| format!("malformed rank in query line {}", index + 1))?;
        queries.push((l, k));
        rest = tail;
    }

    Ok((queries, rest))
}

fn split_line(raw: &[u8]) -> Option<(&str, &[u8])> {
    let position = raw.iter().position(|&b| b == b'\n')?;
    let line = std::str::from_utf8(&raw[..position]).ok()?;
    Some((line.trim_end_matches('\r'), &raw[position + 1..]))
}

/// Picks a sentinel byte that does not occur in the text.
fn choose_sentinel(text: &[u8]) -> Result<u8> {
    let mut seen = [false; 256];
    for &byte in text {
        seen[byte as usize] = true;
    }
    (0..=255u8)
        .find(|&byte| !seen[byte as usize])
        .context("text uses all 256 byte values, no sentinel is available")
}
