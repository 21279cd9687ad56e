//! `customers` CLI entry-point.
//!
//! Available sub-commands:
//! - `init`  — create the `customers` table.
//! - `add`   — insert one customer.
//! - `list`  — print every customer.
//! - `find`  — print the customer with a given email.
//! - `clear` — delete all customers.
//!
//! Connection settings come from `DB_HOST`, `DB_PORT`, `DB_USERNAME`,
//! `DB_PASSWORD` and `DB_NAME`, optionally loaded from a `.env` file.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use db::repository::customers;
use db::{ConnectionProvider, DbConfig};

#[derive(Parser)]
#[command(name = "customers", about = "Customer records on Postgres", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create the customers table.
    Init,
    /// Insert a customer.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// List every customer.
    List {
        /// Print a JSON array instead of one line per customer.
        #[arg(long)]
        json: bool,
    },
    /// Look up a customer by email.
    Find {
        email: String,
    },
    /// Delete all customers.
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    let config = DbConfig::from_env().context("invalid database configuration")?;
    let db = ConnectionProvider::new(&config);

    match cli.command {
        Command::Init => {
            customers::create_table(&db)
                .await
                .context("failed to create customers table")?;
        }
        Command::Add { name, email } => {
            customers::create_customer(&db, &name, &email)
                .await
                .with_context(|| format!("failed to add customer {email}"))?;
            info!("Added customer {email}");
        }
        Command::List { json } => {
            let all = customers::get_all_customers(&db)
                .await
                .context("failed to list customers")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&all)?);
            } else {
                for customer in &all {
                    println!("{customer}");
                }
            }
        }
        Command::Find { email } => {
            let customer = customers::get_customer_by_email(&db, &email)
                .await
                .with_context(|| format!("failed to look up customer {email}"))?;
            println!("{customer}");
        }
        Command::Clear => {
            customers::delete_all_customers(&db)
                .await
                .context("failed to delete customers")?;
        }
    }

    Ok(())
}
