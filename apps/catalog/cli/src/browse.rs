//! Interactive infinite-scroll browser on stdin/stdout

use catalog_client::{Browser, BrowserConfig, BrowserHandle, CatalogApi, Viewport};
use domain_catalog::SortOrder;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::quick_add::random_quick_item;
use crate::render::FeedRenderer;

/// Rows assumed visible in the terminal when paging with `/more`.
const TERMINAL_ROWS: f64 = 24.0;

const HELP: &str = "\
Type to search name, description, price or image text.
Commands: /sort asc|desc|none  /more  /add  /help  /quit";

#[derive(Debug, PartialEq, Eq)]
enum Input {
    Query(String),
    Sort(SortOrder),
    More,
    Add,
    Help,
    Quit,
    Unknown(String),
}

fn parse_input(line: &str) -> Input {
    let trimmed = line.trim();
    let Some(command) = trimmed.strip_prefix('/') else {
        return Input::Query(line.trim_end_matches(['\r', '\n']).to_string());
    };

    let mut parts = command.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("sort"), Some("asc")) => Input::Sort(SortOrder::Asc),
        (Some("sort"), Some("desc")) => Input::Sort(SortOrder::Desc),
        (Some("sort"), Some("none")) | (Some("sort"), None) => Input::Sort(SortOrder::None),
        (Some("more"), _) => Input::More,
        (Some("add"), _) => Input::Add,
        (Some("help"), _) => Input::Help,
        (Some("quit") | Some("q") | Some("exit"), _) => Input::Quit,
        _ => Input::Unknown(trimmed.to_string()),
    }
}

async fn handle_input(
    handle: &BrowserHandle,
    renderer: &FeedRenderer,
    input: Input,
) -> eyre::Result<bool> {
    match input {
        Input::Query(text) => handle.type_query(text).await?,
        Input::Sort(sort) => handle.set_sort(sort).await?,
        Input::More => {
            let viewport = Viewport::at_bottom(TERMINAL_ROWS, renderer.rows() as f64);
            handle.scrolled(viewport).await?;
        }
        Input::Add => match handle.create(random_quick_item()).await {
            Ok(item) => println!("Created #{} {} (${:.2})", item.id, item.name, item.price),
            Err(e) => eprintln!("Failed to create item: {e}"),
        },
        Input::Help => println!("{HELP}"),
        Input::Quit => return Ok(false),
        Input::Unknown(cmd) => eprintln!("Unknown command {cmd}. Try /help"),
    }
    Ok(true)
}

pub async fn run<A: CatalogApi + 'static>(api: A) -> eyre::Result<()> {
    let (handle, task) = Browser::new(api, BrowserConfig::default()).spawn();
    let mut updates = handle.subscribe();
    let mut renderer = FeedRenderer::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("Simple Search\n{HELP}");

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("stdin closed");
                    break;
                };
                if !handle_input(&handle, &renderer, parse_input(&line)).await? {
                    break;
                }
            }

            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let feed = updates.borrow_and_update().clone();
                for row in renderer.update(&feed) {
                    println!("{row}");
                }
            }
        }
    }

    // the task may already be gone if the channel closed
    let _ = handle.shutdown().await;
    task.await?;
    Ok(())
}
