use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use souschef::api::HttpRecipeSource;
use souschef::config::AppConfig;
use souschef::controller::App;
use souschef::recipe::Direction;
use souschef::storage::JsonFileStore;
use souschef::terminal::TerminalView;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting souschef");

    let config = AppConfig::from_env();
    info!(api = %config.api_base_url, data_dir = %config.data_dir, "Configuration loaded");

    // Assemble the application around its collaborators
    let source = HttpRecipeSource::new(&config.api_base_url);
    let store = JsonFileStore::new(config.data_dir.clone());
    let app = App::new(source, TerminalView::new(), Box::new(store), config.page_size);

    // Restore persisted favorites before taking commands
    app.startup();
    print_help();

    run(&app).await
}

async fn run(app: &App<HttpRecipeSource, TerminalView>) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush().context("failed to flush prompt")?;

        let line = match lines.next() {
            Some(line) => line.context("failed to read command")?,
            None => break,
        };
        let line = line.trim();
        let (command, rest) = match line.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "search" => {
                if rest.is_empty() {
                    println!("usage: search <query>");
                } else {
                    app.view().set_query(rest);
                    app.control_search().await;
                }
            }
            "page" => match rest.parse::<usize>() {
                Ok(page) => app.control_page(page),
                Err(_) => println!("usage: page <number>"),
            },
            "open" => {
                if rest.is_empty() {
                    println!("usage: open <recipe-id>");
                } else {
                    app.view().set_location(rest);
                    app.control_recipe().await;
                }
            }
            "inc" => app.control_servings(Direction::Increase),
            "dec" => app.control_servings(Direction::Decrease),
            "add" => app.control_add_to_list(),
            "like" => app.control_like(),
            "del" => {
                if rest.is_empty() {
                    println!("usage: del <item-id>");
                } else {
                    app.control_delete_item(rest);
                }
            }
            "count" => match rest.split_once(' ') {
                Some((id, raw)) => match raw.trim().parse::<f64>() {
                    Ok(count) => app.control_update_count(id, count),
                    Err(_) => println!("usage: count <item-id> <number>"),
                },
                None => println!("usage: count <item-id> <number>"),
            },
            "help" => print_help(),
            "quit" | "exit" => break,
            _ => {
                println!("Unknown command: {command}");
                print_help();
            }
        }
    }

    info!("Leaving souschef");
    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  search <query>        find recipes");
    println!("  page <n>              show another page of results");
    println!("  open <id>             show a recipe");
    println!("  inc / dec             adjust servings");
    println!("  add                   put the shown ingredients on the shopping list");
    println!("  like                  toggle the shown recipe as a favorite");
    println!("  del <item-id>         remove a shopping list item");
    println!("  count <item-id> <n>   change a shopping list item's quantity");
    println!("  help                  show this help");
    println!("  quit                  leave");
}
