use anyhow::{Context, Result};
use clap::Parser;
use docsearch::{
    DocumentCatalog, EventTarget, HeadlessSurface, Key, LazyIndex, QueryProcessor, SearchConfig,
    SearchResult, SearchWidget, TextIndex,
};
use std::fs;
use std::path::Path;
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display::{
    pad_right, rank_label, row, score_value, section_bot, section_top, themed, truncate,
    url_value, BOLD, CYAN, GRAY,
};
use cli::{Cli, Commands};

/// Key code handed to key-up for typed text: any non-navigation key works.
const TYPED_KEY: u32 = 13;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("docsearch=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SearchConfig::default(),
    };
    let catalog = match &cli.catalog {
        Some(path) => load_catalog(path)?,
        None => DocumentCatalog::builtin(),
    };

    match cli.command {
        Commands::Catalog => run_catalog(&catalog),
        Commands::Query { text, limit } => {
            warn_if_invalid(&catalog);
            run_query(&catalog, &config, &text.join(" "), limit)
        }
        Commands::Render { text, json } => {
            warn_if_invalid(&catalog);
            run_render(catalog, &config, &text.join(" "), json)
        }
    }
}

fn load_config(path: &Path) -> Result<SearchConfig> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    SearchConfig::from_json(&json).with_context(|| format!("Invalid config {}", path.display()))
}

fn load_catalog(path: &Path) -> Result<DocumentCatalog> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;
    DocumentCatalog::from_json(&json).with_context(|| format!("Invalid catalog {}", path.display()))
}

fn warn_if_invalid(catalog: &DocumentCatalog) {
    if let Err(e) = catalog.validate() {
        warn!("{}", e);
    }
}

fn run_catalog(catalog: &DocumentCatalog) -> Result<()> {
    section_top(&format!("CATALOG ({} documents)", catalog.len()));
    for doc in catalog.entries() {
        let title = pad_right(&themed(CYAN, &[BOLD], &truncate(&doc.title, 30)), 32);
        row(&format!(" {}{}", title, url_value(Some(&doc.url))));
    }
    section_bot();
    catalog.validate().context("Catalog validation failed")
}

fn run_query(catalog: &DocumentCatalog, config: &SearchConfig, text: &str, limit: usize) -> Result<()> {
    let processor = QueryProcessor::new(config.query.clone());
    let Some(query) = processor.normalize_query(text) else {
        println!("{}", themed(GRAY, &[], "Empty query, nothing searched."));
        return Ok(());
    };

    let mut index = LazyIndex::new(docsearch::Bm25Engine::new(config.engine.clone()));
    let built = index.ensure_index(catalog);
    let hits = built.index.search(&query);

    section_top(&format!("QUERY \"{}\" ({} hits)", truncate(&query, 40), hits.len()));
    for (rank, hit) in hits.iter().take(limit).enumerate() {
        let title = pad_right(&truncate(&hit.reference, 30), 32);
        row(&format!(
            " {} {}  {}{}",
            rank_label(rank),
            score_value(hit.score),
            title,
            url_value(built.urls.resolve(&hit.reference))
        ));
    }
    section_bot();
    Ok(())
}

fn run_render(catalog: DocumentCatalog, config: &SearchConfig, text: &str, json: bool) -> Result<()> {
    let surface = HeadlessSurface::new(config.widget.clone());
    let mut widget = SearchWidget::with_config(surface, catalog, config);
    widget.toggle(EventTarget::SearchBar);
    widget.key_up(Key::Other(TYPED_KEY), EventTarget::SearchBar, text);

    if json {
        let results: Vec<SearchResult> = widget
            .surface()
            .items()
            .iter()
            .map(|item| SearchResult {
                name: item.name.clone(),
                url: item.url.clone(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        println!("{}", widget.surface().to_html());
    }
    Ok(())
}
