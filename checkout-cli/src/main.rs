//! Checkout CLI
//!
//! Command-line driver for the checkout core: fetches payment intents and
//! saved payment methods through the HTTP data source and prints the mapped
//! outcome as JSON.

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;

use checkout_client::{CheckoutClient, DEFAULT_API_VERSION};
use checkout_hex::{PaymentIntentRepository, PaymentMethodsRepository};
use currency_codes::CurrencyCode;

#[derive(Parser)]
#[command(name = "checkout")]
#[command(author, version, about = "Checkout core CLI", long_about = None)]
struct Cli {
    /// Base URL of the checkout backend
    #[arg(long, env = "CHECKOUT_API_URL", default_value = "https://api.dojo.tech")]
    api_url: String,

    /// API version sent in the `version` header
    #[arg(long, env = "CHECKOUT_API_VERSION", default_value = DEFAULT_API_VERSION)]
    api_version: String,

    /// Request timeout in seconds
    #[arg(long, env = "CHECKOUT_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and validate a payment intent
    Intent {
        /// Payment intent ID
        id: String,
    },
    /// Saved payment method operations
    Methods {
        #[command(subcommand)]
        action: MethodsCommands,
    },
    /// List the currencies accepted in payment intents
    Currencies,
}

#[derive(Subcommand)]
enum MethodsCommands {
    /// List the saved payment methods of a customer
    List {
        #[arg(long)]
        customer: String,
        #[arg(long, env = "CHECKOUT_CUSTOMER_SECRET")]
        secret: String,
    },
    /// Delete a saved payment method
    Delete {
        #[arg(long)]
        customer: String,
        #[arg(long, env = "CHECKOUT_CUSTOMER_SECRET")]
        secret: String,
        /// Payment method ID
        id: String,
    },
}

#[derive(Debug, Serialize)]
struct CurrencyRow {
    code: &'static str,
    numeric: u16,
    exponent: u8,
}

fn currency_table() -> Vec<CurrencyRow> {
    CurrencyCode::all()
        .iter()
        .map(|c| CurrencyRow {
            code: c.code(),
            numeric: c.numeric(),
            exponent: c.exponent(),
        })
        .collect()
}

fn print_outcome<T: Serialize>(outcome: &T, success: bool) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(outcome)?);
    if !success {
        std::process::exit(1);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(cli.timeout_secs))
        .build()?;
    let client = CheckoutClient::new(&cli.api_url)
        .with_api_version(cli.api_version)
        .with_http_client(http);
    tracing::debug!(api_url = %cli.api_url, "Using checkout backend");

    match cli.command {
        Commands::Intent { id } => {
            let repo = PaymentIntentRepository::new(client);
            let result = repo.fetch(&id).await;
            print_outcome(&result, result.is_success())?;
        }

        Commands::Methods { action } => {
            let repo = PaymentMethodsRepository::new(client);
            match action {
                MethodsCommands::List { customer, secret } => {
                    let result = repo.fetch(&customer, &secret).await;
                    print_outcome(&result, result.is_success())?;
                }
                MethodsCommands::Delete {
                    customer,
                    secret,
                    id,
                } => {
                    let result = repo.delete(&customer, &secret, &id).await;
                    print_outcome(&result, result.is_success())?;
                }
            }
        }

        Commands::Currencies => {
            println!("{}", serde_json::to_string_pretty(&currency_table())?);
        }
    }

    Ok(())
}
