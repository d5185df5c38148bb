//! Word Cliques CLI
//!
//! Loads a word list, builds the letter-disjointness compatibility graph
//! and reports every group of N mutually letter-disjoint words.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use word_cliques::report::{format_duration, write_groups, ConsoleReporter};
use word_cliques::{
    normalize_words, Candidates, CliqueSearch, CompatibilityGraph, NullObserver,
    DEFAULT_GROUP_SIZE, DEFAULT_WORD_LENGTH,
};

const USAGE_TEXT: &str = include_str!("text/usage.txt");

struct Options {
    wordlist: PathBuf,
    word_length: usize,
    group_size: usize,
    output: PathBuf,
    parallel: bool,
    quiet: bool,
}

fn parse_options(args: &[String]) -> Result<Options> {
    let mut wordlist = None;
    let mut word_length = DEFAULT_WORD_LENGTH;
    let mut group_size = DEFAULT_GROUP_SIZE;
    let mut output = PathBuf::from("result.txt");
    let mut parallel = false;
    let mut quiet = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-l" | "--length" => {
                let value = iter.next().context("--length requires a value")?;
                word_length = value.parse().context("--length must be a number")?;
            }
            "-n" | "--group-size" => {
                let value = iter.next().context("--group-size requires a value")?;
                group_size = value.parse().context("--group-size must be a number")?;
            }
            "-o" | "--output" => {
                let value = iter.next().context("--output requires a value")?;
                output = PathBuf::from(value);
            }
            "-p" | "--parallel" => parallel = true,
            "-q" | "--quiet" => quiet = true,
            other if other.starts_with('-') => bail!("unknown option: {other}"),
            path => {
                if wordlist.is_some() {
                    bail!("unexpected argument: {path}");
                }
                wordlist = Some(PathBuf::from(path));
            }
        }
    }

    let wordlist = wordlist.context("missing word list path (use --help for usage)")?;
    if word_length == 0 {
        bail!("--length must be at least 1");
    }
    if group_size == 0 {
        bail!("--group-size must be at least 1");
    }

    Ok(Options {
        wordlist,
        word_length,
        group_size,
        output,
        parallel,
        quiet,
    })
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{}", USAGE_TEXT);
        return Ok(());
    }

    let options = parse_options(&args)?;
    let start = Instant::now();
    let stamp = |start: &Instant| format!("[{}]", format_duration(start.elapsed().as_millis()));

    let input = fs::read_to_string(&options.wordlist)
        .with_context(|| format!("failed to read {}", options.wordlist.display()))?;

    println!("{} Normalizing words", stamp(&start));
    let words = normalize_words(&input, options.word_length);
    let candidates = Candidates::new(words, options.word_length)?;
    println!(
        "{} {} candidate words of length {}",
        stamp(&start),
        candidates.len(),
        options.word_length,
    );

    println!("{} Building compatibility graph", stamp(&start));
    let graph = CompatibilityGraph::build(&candidates);
    println!(
        "{} {} compatible pairs",
        stamp(&start),
        graph.edge_count()
    );

    println!("{} Searching", stamp(&start));
    let search = CliqueSearch::new(&graph, options.group_size);
    let outcome = if options.parallel {
        search.run_parallel()
    } else if options.quiet {
        search.run(&mut NullObserver)
    } else {
        let mut reporter = ConsoleReporter::new(&candidates);
        let outcome = search.run(&mut reporter);
        println!();
        outcome
    };

    println!(
        "{} A total of {} groups found ({} search nodes visited)",
        stamp(&start),
        outcome.groups.len(),
        outcome.stats.nodes_visited,
    );

    write_groups(&options.output, &outcome.groups, &candidates)?;
    println!(
        "{} Results written to {}",
        stamp(&start),
        options.output.display()
    );

    Ok(())
}
