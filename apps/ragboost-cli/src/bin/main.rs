use std::env;

use indicatif::ProgressBar;
use ragboost_booster::{RagBooster, DEFAULT_TOP_K};
use ragboost_core::config::{expand_path, Config};
use ragboost_core::documents::{list_txt_files, read_document};
use ragboost_core::types::CorpusStats;
use ragboost_memory::store::{ChunkStore, DEFAULT_CHUNK_SIZE, DEFAULT_COMPRESSION_LEVEL};
use ragboost_provider::HttpCompletionProvider;

fn parse_args() -> (String, Vec<String>) {
    let mut args: Vec<String> = env::args().collect();
    let prog = args.remove(0);
    if args.is_empty() {
        eprintln!("Usage: {} <load|ask|stats> [args...]", prog);
        std::process::exit(1);
    }
    let cmd = args.remove(0);
    (cmd, args)
}

fn build_booster(config: &Config) -> anyhow::Result<RagBooster> {
    let api_url: String = config
        .get("llm.api_url")
        .unwrap_or_else(|_| "http://localhost:11434/v1/chat/completions".to_string());
    let api_key: String = config.get("llm.api_key").unwrap_or_default();
    let model: String = config
        .get("llm.model")
        .unwrap_or_else(|_| "llama3.1".to_string());
    let level: u32 = config
        .get("memory.compression_level")
        .unwrap_or(DEFAULT_COMPRESSION_LEVEL);

    let provider = HttpCompletionProvider::new(api_url, api_key, model)?;
    let store = ChunkStore::with_compression_level(level)?;
    Ok(RagBooster::with_store(store, Box::new(provider)))
}

fn load_corpus(booster: &mut RagBooster, path_arg: &str, chunk_size: usize) -> anyhow::Result<()> {
    let root = expand_path(path_arg);
    let files = list_txt_files(&root);
    if files.is_empty() {
        anyhow::bail!("no documents found under {}", root.display());
    }
    let bar = ProgressBar::new(files.len() as u64);
    for file in &files {
        let text = read_document(file)?;
        let report = booster.load_document_with_chunk_size(&text, chunk_size)?;
        bar.println(format!(
            "  {} -> {} chunks, ratio {:.2}x, integrity {}",
            file.display(),
            report.chunks,
            report.compression_ratio,
            report.integrity
        ));
        bar.inc(1);
    }
    bar.finish_and_clear();
    Ok(())
}

fn print_stats(stats: &CorpusStats) {
    println!("📊 Memory stats:");
    println!("  chunks: {}", stats.chunks);
    println!("  bits: {}", stats.bits);
    println!("  indexed keywords: {}", stats.indexed_keywords);
    println!("  compression level: {}", stats.compression_level);
    println!("  states per bit: {}", stats.states_per_bit);
    println!("  integrity: {}", stats.integrity);
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::load().map_err(|e| {
        eprintln!("Error loading config: {}", e);
        e
    })?;
    let chunk_size: usize = config.get("memory.chunk_size").unwrap_or(DEFAULT_CHUNK_SIZE);
    let top_k: usize = config.get("memory.top_k").unwrap_or(DEFAULT_TOP_K);

    let (cmd, args) = parse_args();
    match cmd.as_str() {
        "load" => {
            let path = args.first().cloned().unwrap_or_else(|| {
                eprintln!("Usage: ragboost load <file-or-dir>");
                std::process::exit(1)
            });
            println!("Loading from {}", path);
            let mut booster = build_booster(&config)?;
            load_corpus(&mut booster, &path, chunk_size)?;
            println!("✅ Load complete ({} chunks)", booster.store().len());
            print_stats(&booster.get_stats());
        }
        "ask" => {
            let path = args.first().cloned().unwrap_or_else(|| {
                eprintln!("Usage: ragboost ask <file-or-dir> \"<question>\"");
                std::process::exit(1)
            });
            let question = args.get(1).cloned().unwrap_or_else(|| {
                eprintln!("Usage: ragboost ask <file-or-dir> \"<question>\"");
                std::process::exit(1)
            });
            let mut booster = build_booster(&config)?;
            load_corpus(&mut booster, &path, chunk_size)?;
            println!("🔍 Asking over {} chunks (top_k={})", booster.store().len(), top_k);
            let answer = tokio::runtime::Runtime::new()?
                .block_on(async { booster.ask_with(&question, true, top_k).await })?;
            println!("\n{}", answer);
        }
        "stats" => {
            let path = args.first().cloned().unwrap_or_else(|| {
                eprintln!("Usage: ragboost stats <file-or-dir>");
                std::process::exit(1)
            });
            let mut booster = build_booster(&config)?;
            load_corpus(&mut booster, &path, chunk_size)?;
            print_stats(&booster.get_stats());
        }
        _ => {
            eprintln!("Unknown command: {}", cmd);
            std::process::exit(1);
        }
    }
    Ok(())
}
