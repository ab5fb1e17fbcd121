//! Catalog CLI - list, look up, add and browse catalog items

use catalog_client::{CatalogApi, HttpCatalogApi, DEFAULT_API_BASE};
use clap::{Parser, Subcommand, ValueEnum};
use core_config::tracing::{init_cli_tracing, install_color_eyre};
use domain_catalog::{CreateItem, ListQuery, SortOrder, DEFAULT_LIMIT};
use eyre::Result;
use tracing::debug;

mod browse;
mod quick_add;
mod render;

#[derive(Parser)]
#[command(name = "catalog")]
#[command(about = "Search, page through and add catalog items")]
struct Cli {
    /// Base URL of the catalog API
    #[arg(long, global = true, env = "CATALOG_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    Asc,
    Desc,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Asc => SortOrder::Asc,
            SortArg::Desc => SortOrder::Desc,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print one page of items
    List {
        /// Search text
        #[arg(short, long, default_value = "")]
        query: String,

        #[arg(short, long, default_value_t = 0)]
        offset: usize,

        #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,

        /// Order by price
        #[arg(short, long, value_enum)]
        sort: Option<SortArg>,

        /// Print the raw JSON page
        #[arg(long)]
        json: bool,
    },

    /// Show a single item
    Get { id: String },

    /// Create an item
    Add {
        /// Generate a demo item instead of passing fields
        #[arg(long, conflicts_with_all = ["name", "description", "price", "image"])]
        quick: bool,

        #[arg(long, required_unless_present = "quick")]
        name: Option<String>,

        #[arg(long, required_unless_present = "quick")]
        description: Option<String>,

        #[arg(long, required_unless_present = "quick")]
        price: Option<f64>,

        #[arg(long, required_unless_present = "quick")]
        image: Option<String>,

        #[arg(long)]
        image_alt: Option<String>,

        /// Image tag, repeatable
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Interactive search with infinite scroll
    Browse,
}

#[tokio::main]
async fn main() -> Result<()> {
    install_color_eyre();
    init_cli_tracing("warn");

    let cli = Cli::parse();
    let api = HttpCatalogApi::new(&cli.api_base)?;
    debug!(base = %api.base_url(), "Using catalog API");

    match cli.command {
        Commands::List {
            query,
            offset,
            limit,
            sort,
            json,
        } => {
            let sort = sort.map(SortOrder::from).unwrap_or_default();
            let page = api
                .fetch_page(&ListQuery::new(query, offset, limit, sort))
                .await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&page)?);
            } else {
                println!("{}", render::page(&page));
            }
        }

        Commands::Get { id } => {
            let item = api.get_item(&id).await?;
            println!("{}", render::item_card(&item));
        }

        Commands::Add {
            quick,
            name,
            description,
            price,
            image,
            image_alt,
            tags,
        } => {
            let input = if quick {
                quick_add::random_quick_item()
            } else {
                CreateItem {
                    name: name.unwrap_or_default(),
                    description: description.unwrap_or_default(),
                    price: price.unwrap_or_default(),
                    image: image.unwrap_or_default(),
                    image_alt,
                    image_tags: (!tags.is_empty()).then_some(tags),
                }
            };

            let item = api.create_item(&input).await?;
            println!("Created\n{}", render::item_card(&item));
        }

        Commands::Browse => browse::run(api).await?,
    }

    Ok(())
}
