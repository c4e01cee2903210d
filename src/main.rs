use std::num::NonZeroU32;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Context};
use clap::{Parser, ValueEnum};

use artgrid::config::Config;
use artgrid::logging::init_tracing;
use artgrid::source::{ArtworksClient, THUMBNAIL_WIDTH};
use artgrid::ui::results::ResultState;
use artgrid::ui::table::{Field, LazyState, SortOrder};
use artgrid::Gallery;

/// Browse the Art Institute of Chicago collection one page at a time.
#[derive(Debug, Parser)]
#[command(name = "artgrid", version)]
struct Cli {
    /// Config file (default: ~/.config/artgrid/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// 1-based page to show
    #[arg(long, default_value_t = 1)]
    page: u64,

    /// Rows per page (default: from config)
    #[arg(long)]
    page_size: Option<NonZeroU32>,

    /// Column to sort by: id, title, artist_display
    #[arg(long)]
    sort: Option<Field>,

    /// Sort direction
    #[arg(long, value_enum, default_value_t = Order::Asc)]
    order: Order,

    /// Column filter as FIELD=TEXT, repeatable
    #[arg(long = "filter", value_parser = parse_filter)]
    filters: Vec<(Field, String)>,

    /// Artwork id to select on the shown page, repeatable
    #[arg(long = "select")]
    select: Vec<u64>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Order {
    Asc,
    Desc,
}

impl From<Order> for SortOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Asc => SortOrder::Ascending,
            Order::Desc => SortOrder::Descending,
        }
    }
}

fn parse_filter(raw: &str) -> Result<(Field, String), String> {
    let (field, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=TEXT, got '{raw}'"))?;
    let field = field.parse::<Field>().map_err(|e| e.to_string())?;
    Ok((field, value.to_string()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    let client = Arc::new(ArtworksClient::new(&config.api)?);
    tracing::debug!(base_url = client.base_url(), "Artworks client ready");

    let mut gallery = Gallery::mount(client, &config.table);

    // Filters reset the offset, so they go before pagination
    for (field, value) in &cli.filters {
        gallery.set_filter(*field, value.clone());
    }
    if let Some(field) = cli.sort {
        gallery.on_sort_change(Some(field), cli.order.into());
    }
    let page_size = cli.page_size.unwrap_or_else(|| config.table.page_size());
    gallery.on_page_change(LazyState::offset_for(cli.page, page_size), page_size);

    let deadline = config.table.debounce()
        + Duration::from_secs(u64::from(config.api.timeout_seconds))
        + Duration::from_secs(1);
    let results = wait_for_results(&gallery, deadline).await?;

    if let Some(message) = &results.error_message {
        gallery.unmount();
        return Err(anyhow!("{message}"));
    }

    for row in results.rows.iter().filter(|row| cli.select.contains(&row.id)) {
        gallery.toggle_row(row.clone());
    }

    print_page(&gallery, &results, &config.api.iiif_base_url);
    gallery.unmount();
    Ok(())
}

async fn wait_for_results(
    gallery: &Gallery<ArtworksClient>,
    deadline: Duration,
) -> anyhow::Result<ResultState> {
    let mut results = gallery.subscribe_results();
    let state = tokio::time::timeout(deadline, results.wait_for(|state| !state.loading))
        .await
        .context("Timed out waiting for artworks")?
        .context("Gallery closed before results arrived")?;
    Ok(state.clone())
}

fn print_page(gallery: &Gallery<ArtworksClient>, results: &ResultState, iiif_base_url: &str) {
    let lazy = gallery.lazy_state();
    let selection = gallery.selection();

    println!(
        "{:>3} {:>8}  {:<40}  {}",
        "",
        Field::Id.header(),
        Field::Title.header(),
        Field::ArtistDisplay.header()
    );
    for row in &results.rows {
        let marker = if selection.is_selected(row.id) { "[x]" } else { "[ ]" };
        let artist = row.artist_display.lines().next().unwrap_or_default();
        println!("{marker} {:>8}  {:<40}  {}", row.id, row.title, artist);
        match row.thumbnail_url(iiif_base_url, THUMBNAIL_WIDTH) {
            Some(url) => println!("{:>13}{url}", ""),
            None => println!("{:>13}No Image", ""),
        }
    }

    let total_pages = results
        .total_count
        .div_ceil(u64::from(lazy.page_size.get()))
        .max(1);
    println!();
    println!(
        "Page {} of {} ({} artworks), {} selected",
        lazy.page,
        total_pages,
        results.total_count,
        selection.len()
    );
    let active: Vec<String> = lazy
        .filters
        .active()
        .map(|(field, meta)| format!("{field} contains '{}'", meta.value))
        .collect();
    if !active.is_empty() {
        println!("Filters: {}", active.join(", "));
    }
    if let Some(field) = lazy.sort_field {
        println!("Sort: {field} {:?}", lazy.sort_order);
    }
}
