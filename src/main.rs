use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use clap::{Parser, Subcommand};
use bir::ircore::{self, DocId};
use bir::ircore::cfg::Cfg;
use bir::ircore::engine::Engine;

#[derive(Parser)]
#[derive(Debug)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
/// Boolean and proximity retrieval over a folder of text documents
struct Cli {
    #[clap(long, value_parser)]
    /// YAML configuration file
    config: Option<PathBuf>,
    #[clap(short, long, value_parser)]
    /// Corpus directory of <doc_id>.txt files [default: Abstracts]
    corpus_dir: Option<PathBuf>,
    #[clap(short, long, value_parser)]
    /// Stopword list, one word per line [default: Stopword-List.txt]
    stopword_file: Option<PathBuf>,
    #[clap(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
#[derive(Debug)]
enum Commands {
    /// Run one query, e.g. "deep and not image" or "deep learning /2"
    Query {
        #[clap(value_parser)]
        /// boolean expression or proximity query
        query: String,
        #[clap(long, action)]
        /// print the matching ids as a JSON array
        json: bool,
    },
    /// Index statistics
    Stats {
        #[clap(short, long, value_parser, default_value_t = 10)]
        /// number of most frequent terms to list
        top: usize,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let engine = match load_cfg(&cli).and_then(|cfg| Engine::new(&cfg)) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    match &cli.command {
        Some(Commands::Query { query, json }) => {
            if !command_query(&engine, query, *json) {
                process::exit(2);
            }
        },
        Some(Commands::Stats { top }) => command_stats(&engine, *top),
        None => {
            if let Err(e) = command_interactive(&engine) {
                eprintln!("{}", e);
                process::exit(1);
            }
        }
    }
}

fn load_cfg(cli: &Cli) -> ircore::Result<Cfg> {
    let mut cfg = match &cli.config {
        Some(path) => Cfg::load(path)?,
        None => Cfg::new(),
    };
    if let Some(dir) = &cli.corpus_dir {
        cfg = cfg.with_corpus_dir(dir);
    }
    if let Some(file) = &cli.stopword_file {
        cfg = cfg.with_stopword_file(file);
    }
    Ok(cfg)
}

fn command_query(engine: &Engine, query: &str, json: bool) -> bool {
    match engine.search(query.trim()) {
        Ok(result) => {
            if json {
                match serde_json::to_string(&result) {
                    Ok(s) => println!("{}", s),
                    Err(e) => {
                        eprintln!("{}", e);
                        return false;
                    }
                }
            }else{
                print_result(&result);
            }
            true
        },
        Err(e) => {
            eprintln!("{}", e);
            false
        }
    }
}

fn command_stats(engine: &Engine, top: usize) {
    let stats = engine.stats();
    println!("documents: {}", stats.index.document_count);
    println!("terms: {}", stats.index.term_count);
    println!("tokens: {}", stats.index.total_document_length);
    println!("stopwords: {}", stats.analyzer.stopword_count);
    if let (Some(first), Some(last)) = (stats.index.universe_first, stats.index.universe_last) {
        println!("universe: {} ids in [{}, {}]", stats.index.universe_size, first, last);
    }
    for (i, (term, freq)) in stats.index.term_freq.iter().take(top).enumerate() {
        println!("{}:{} {}", i + 1, term, freq);
    }
}

fn command_interactive(engine: &Engine) -> io::Result<()> {
    println!("\nBoolean IR Model. Type 'exit' to quit.");
    println!("-----------------------------------------------");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("\nEnter your query: ");
        io::stdout().flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let query = line.trim();
        if query.eq_ignore_ascii_case("exit") {
            println!("Exiting. Goodbye!");
            break;
        }
        if query.is_empty() {
            println!("Please enter a valid query.");
            continue;
        }
        match engine.search(query) {
            Ok(result) => print_result(&result),
            Err(e) => eprintln!("\n{}", e),
        }
    }
    Ok(())
}

fn print_result(result: &[DocId]) {
    if result.is_empty() {
        println!("\nNo matching documents found.");
    }else{
        println!("\nMatching Document IDs:");
        print!("{}", format_doc_ids(result));
    }
}

// ten ids per row, left aligned in five columns each
fn format_doc_ids(doc_ids: &[DocId]) -> String {
    let mut out = String::new();
    for row in doc_ids.chunks(10) {
        for doc_id in row {
            out.push_str(&format!("{:<5}", doc_id));
        }
        out.push('\n');
    }
    out
}
