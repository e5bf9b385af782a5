use clap::Parser;
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use glossdex::runtime::stream::{DebouncedSearch, SearchBatch};
use glossdex::{
    build::load_index, query, Field, GlossaryEntry, GlossaryIndex, QueryOutcome, Result,
    SearchConfig, SearchState,
};

mod cli;
use cli::display::{self, themed, BOLD, CYAN, GRAY};
use cli::{Cli, Commands};

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if let Ok(env) = std::env::var("GLOSSDEX_LOG") {
        EnvFilter::new(env)
    } else if quiet {
        EnvFilter::new("warn")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => SearchConfig::load(path)?,
        None => SearchConfig::default(),
    };

    match cli.command {
        Commands::Search {
            file,
            query,
            limit,
            json,
        } => {
            let config = limit.map_or(config, |l| config.with_limit(l));
            run_search(&file, &query, &config, json)
        }
        Commands::Inspect { file } => run_inspect(&file, &config),
        Commands::Repl {
            file,
            debounce_ms,
            limit,
        } => {
            let config = limit.map_or(config, |l| config.with_limit(l));
            let config = debounce_ms.map_or(config, |ms| config.with_debounce_ms(ms));
            config.validate()?;
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()?;
            runtime.block_on(run_repl(&file, &config))
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonHit<'a> {
    field: Field,
    #[serde(flatten)]
    entry: &'a GlossaryEntry,
}

fn run_search(file: &Path, text: &str, config: &SearchConfig, json: bool) -> Result<()> {
    let index = load_index(file, config.fields)?;
    let outcome = query(&index, text, config.limit);

    if json {
        let hits: Vec<JsonHit> = match &outcome {
            QueryOutcome::EmptyQuery => Vec::new(),
            QueryOutcome::Hits(hits) => hits
                .iter()
                .filter_map(|hit| {
                    index.get(&hit.id).map(|entry| JsonHit {
                        field: hit.field,
                        entry,
                    })
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    print_outcome(&index, text, &outcome);
    Ok(())
}

fn print_outcome(index: &GlossaryIndex, text: &str, outcome: &QueryOutcome) {
    match outcome {
        QueryOutcome::EmptyQuery => {}
        QueryOutcome::Hits(hits) if hits.is_empty() => {
            println!("No terms found matching \"{}\"", text);
        }
        QueryOutcome::Hits(hits) => {
            for hit in hits {
                if let Some(entry) = index.get(&hit.id) {
                    display::print_entry(entry, Some(hit.field));
                }
            }
        }
    }
}

fn run_inspect(file: &Path, config: &SearchConfig) -> Result<()> {
    let index = load_index(file, config.fields)?;
    let duplicates = index.duplicate_ids();
    let fields: Vec<&str> = Field::ALL
        .into_iter()
        .filter(|f| index.fields().includes(*f))
        .map(Field::as_str)
        .collect();

    display::section_top(&file.display().to_string());
    display::row(&format!(" {:<16}{}", "entries", index.len()));
    display::row(&format!(" {:<16}{}", "tokens", index.token_count()));
    display::row(&format!(" {:<16}{}", "postings", index.posting_count()));
    display::row(&format!(" {:<16}{}", "indexed fields", fields.join(", ")));
    display::row(&format!(" {:<16}{}", "result limit", config.limit));
    display::row(&format!(" {:<16}{} ms", "debounce", config.debounce_ms));
    if duplicates.is_empty() {
        display::row(&format!(" {:<16}{}", "duplicate ids", themed(GRAY, &[], "none")));
    } else {
        let ids: Vec<String> = duplicates.iter().map(ToString::to_string).collect();
        display::row(&format!(
            " {:<16}{}",
            "duplicate ids",
            themed(display::YELLOW, &[BOLD], &ids.join(", "))
        ));
    }
    display::section_bot();
    Ok(())
}

async fn run_repl(file: &Path, config: &SearchConfig) -> Result<()> {
    let index = Arc::new(load_index(file, config.fields)?);
    let mut search = DebouncedSearch::spawn(Arc::clone(&index), config);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut awaiting = false;

    eprintln!(
        "{} {} entries, {} ms debounce. One query per line, Ctrl-D to quit.",
        themed(CYAN, &[BOLD], "glossdex"),
        index.len(),
        config.debounce_ms
    );

    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => {
                    search.input(&line);
                    awaiting = true;
                }
                None => break,
            },
            Some(batch) = search.next() => {
                awaiting = false;
                print_batch(&index, &batch);
            }
        }
    }

    // Let the last burst settle before shutting down.
    if awaiting {
        if let Some(batch) = search.next().await {
            print_batch(&index, &batch);
        }
    }
    search.close().await;
    Ok(())
}

fn print_batch(index: &GlossaryIndex, batch: &SearchBatch) {
    let state = match &batch.outcome {
        QueryOutcome::EmptyQuery => SearchState::Idle,
        QueryOutcome::Hits(hits) => SearchState::Resolved { count: hits.len() },
    };
    println!(
        "{} {}",
        themed(CYAN, &[BOLD], &format!("» {}", batch.query.trim())),
        display::state_label(state)
    );
    print_outcome(index, &batch.query, &batch.outcome);
}
