//! Online Store CLI - Database migrations and catalog management tools.
//!
//! # Usage
//!
//! ```bash
//! # Create or upgrade the products table
//! store-cli migrate
//!
//! # Insert the demo catalog into an empty store
//! store-cli seed
//!
//! # Insert the demo catalog even if products already exist
//! store-cli seed --force
//!
//! # Add a product
//! store-cli product add -n "Desk Lamp" -p 89.5 -c Home -s 12
//!
//! # List the catalog
//! store-cli product list
//! ```
//!
//! All commands read `STORE_DATABASE_URL` (falling back to `DATABASE_URL`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "store-cli")]
#[command(author, version, about = "Online store CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Seed the catalog with demo products
    Seed {
        /// Insert the demo products even if the catalog is not empty
        #[arg(long)]
        force: bool,
    },
    /// Manage catalog products
    Product {
        #[command(subcommand)]
        action: ProductAction,
    },
}

#[derive(Subcommand)]
enum ProductAction {
    /// Add a product to the catalog
    Add {
        /// Product name
        #[arg(short, long)]
        name: String,

        /// Unit price, e.g. 12.50
        #[arg(short, long)]
        price: String,

        /// Product description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Image path or URL
        #[arg(short, long, default_value = "")]
        image: String,

        /// Category label
        #[arg(short, long, default_value = "")]
        category: String,

        /// Units in stock
        #[arg(short, long, default_value_t = 0)]
        stock: i64,
    },
    /// List all products
    List,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed { force } => commands::seed::run(force).await?,
        Commands::Product { action } => match action {
            ProductAction::Add {
                name,
                price,
                description,
                image,
                category,
                stock,
            } => {
                let args = commands::product::AddArgs {
                    name,
                    price,
                    description,
                    image,
                    category,
                    stock,
                };
                commands::product::add(args).await?;
            }
            ProductAction::List => commands::product::list().await?,
        },
    }
    Ok(())
}
