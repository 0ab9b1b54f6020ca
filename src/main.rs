use clap::{Parser, Subcommand};
use log::{debug, error};
use std::error::Error;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

use recipe_browser::browser::{Pending, HELP};
use recipe_browser::{Browser, BrowserConfig, Command, LoadState, RecipeClient, RecipeSource, Route};

#[derive(Parser)]
#[command(name = "recipe-browser")]
#[command(version, about = "Browse the dummyjson recipe catalogue")]
struct Cli {
    /// Override the API base URL from config.toml / RECIPE_BROWSER__API__BASE_URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one page of the recipe list
    List {
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// Print a single recipe
    Show { id: u32 },
    /// Print the page behind a client URL such as "/?page=3" or "/recipe/7"
    Open { url: String },
    /// Browse interactively (the default)
    Browse {
        #[arg(short, long, default_value = "/")]
        start: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = BrowserConfig::load()?;
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }
    let client = RecipeClient::new(&config.api)?;
    debug!("Using API at {}", client.base_url());
    let browser = Browser::new(client);

    match cli.command {
        Some(Commands::List { page }) => print_once(browser, Route::list(page)).await,
        Some(Commands::Show { id }) => print_once(browser, Route::detail(id)).await,
        Some(Commands::Open { url }) => print_once(browser, Route::parse(&url)?).await,
        Some(Commands::Browse { start }) => browse(browser, Route::parse(&start)?).await,
        None => browse(browser, Route::default()).await,
    }
}

/// Render a single route and exit, failing if its data could not be loaded.
async fn print_once<S: RecipeSource>(
    mut browser: Browser<S>,
    route: Route,
) -> Result<(), Box<dyn Error>> {
    browser.navigate(route).await;
    println!("{}", browser.render());

    let failure = match route {
        Route::List { .. } => browser.list().error().map(str::to_string),
        Route::Detail { .. } => match browser.detail().state() {
            LoadState::Failed(message) => Some(message.clone()),
            _ => None,
        },
    };
    match failure {
        Some(message) => {
            error!("{}", message);
            Err(message.into())
        }
        None => Ok(()),
    }
}

async fn browse<S: RecipeSource>(mut browser: Browser<S>, start: Route) -> Result<(), Box<dyn Error>> {
    let pending = browser.go(start);
    draw(&mut browser, pending).await;
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => println!("{}", HELP),
            Ok(command) => {
                let pending = browser.apply(&command);
                draw(&mut browser, pending).await;
            }
            Err(e) => println!("{}", e),
        }
    }
    Ok(())
}

/// Print the screen, showing the detail page's loading placeholder while
/// its recipe is being fetched.
async fn draw<S: RecipeSource>(browser: &mut Browser<S>, pending: Option<Pending>) {
    if let Some(pending) = pending {
        if matches!(pending, Pending::Detail(_)) {
            println!("{}", browser.render());
        }
        browser.complete(pending).await;
    }
    println!("{}", browser.render());
}
