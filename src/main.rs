#![allow(nonstandard_style)]

use clap::Parser;
use linecalc::evaluating::DEFAULT_MAX_DEPTH;
use linecalc::validating::DEFAULT_MAX_OPERATORS;
use linecalc::*;
use tracing_subscriber::EnvFilter;

/// Reads arithmetic expressions line by line and prints their values.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Language of the prompts and of the exit keyword.
    #[arg(short, long, value_enum, env = "LINECALC_LANGUAGE", default_value_t = Language::english)]
    language: Language,

    /// Lines with more operators than this are rejected.
    #[arg(long, env = "LINECALC_MAX_OPERATORS", default_value_t = DEFAULT_MAX_OPERATORS)]
    max_operators: usize,

    /// How deeply factors may nest before evaluation gives up.
    #[arg(long, env = "LINECALC_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    tracing::debug!(?args, "starting");

    let session = Session::new(
        Evaluator::new(args.max_depth),
        Validator::new(args.max_operators),
        args.language,
    );

    if let Err(e) = session.run(std::io::stdin().lock(), std::io::stdout()) {
        eprintln!("Error, {e}");
        std::process::exit(1);
    }
}
