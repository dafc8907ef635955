extern crate bksearch;

use std::error::Error;
use std::io;
use std::io::Write as IOWrite;
use std::io::{BufWriter, Stdout};
use std::path::PathBuf;
use std::time::Instant;

use serde_derive::Serialize;
use structopt::StructOpt;
use tracing::{debug, info, Level};

use bksearch::input::{read_keys_from_path, KeyFormat};
use bksearch::{BkTree, LevenshteinMetric, Match, Metric, StrLenMetric};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "bkfind",
    about = "Build an in-ram bktree from a key file and find keys near each query"
)]
struct CommandLineArgs {
    /// Keys to index, one per line
    #[structopt(parse(from_os_str))]
    keys_filename: PathBuf,

    /// Queries to run against the tree
    queries: Vec<String>,

    /// Read the key file as a JSON array of strings
    #[structopt(long)]
    json: bool,

    /// Distance function between keys
    #[structopt(short, long, default_value = "levenshtein", possible_values = &["levenshtein", "strlen"])]
    metric: String,

    /// Largest distance from a query at which keys still match
    #[structopt(short, long, default_value = "1", allow_hyphen_values = true)]
    distance: i64,

    /// Print the tree in pre-order before searching
    #[structopt(long)]
    dump: bool,

    /// Log more (-v for info, -vv for debug)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u64,
}

#[derive(Serialize)]
struct QueryResult<'a, 't> {
    query: &'a str,
    matches: Vec<Match<'t, String>>,
}

fn run<M: Metric<String>>(
    opts: &CommandLineArgs,
    keys: Vec<String>,
    metric: M,
) -> Result<(), Box<dyn Error + 'static>> {
    let started = Instant::now();
    let mut tree = BkTree::new(metric);
    let added = tree.insert_all(keys)?;
    info!(
        nodes = added,
        max_depth = tree.max_depth(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "built tree"
    );

    let mut out: BufWriter<Stdout> = BufWriter::new(io::stdout());
    if opts.dump {
        for entry in tree.preorder() {
            let dist = entry.dist.map(|d| d.to_string()).unwrap_or_default();
            writeln!(
                out,
                "{}{:>4} {}",
                "  ".repeat(entry.depth),
                dist,
                entry.element
            )?;
        }
    }

    let searcher = tree.searcher();
    for query in &opts.queries {
        let mut matches = searcher.search(query, opts.distance)?;
        matches.sort_by(|a, b| {
            a.distance()
                .cmp(&b.distance())
                .then_with(|| a.element().cmp(b.element()))
        });
        debug!(query = %query, matches = matches.len(), "searched");
        serde_json::to_writer(
            &mut out,
            &QueryResult {
                query: query.as_str(),
                matches,
            },
        )?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error + 'static>> {
    let opts = CommandLineArgs::from_args();

    let level = match opts.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let format = if opts.json {
        KeyFormat::Json
    } else {
        KeyFormat::Lines
    };
    let keys = read_keys_from_path(&opts.keys_filename, format)?;
    info!(keys = keys.len(), file = ?opts.keys_filename, "loaded keys");

    match opts.metric.as_str() {
        "strlen" => run(&opts, keys, StrLenMetric),
        _ => run(&opts, keys, LevenshteinMetric),
    }
}
