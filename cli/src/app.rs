use clap::{Parser, Subcommand};
use tracing::info;

use std::path::PathBuf;

use geo_client::{haversine, GeocodingClient};
use market_client::MarketClient;
use units::{currency::CryptoCurrency, fiat::FiatConverter};

use super::config::*;

#[derive(Parser)]
#[clap(version, long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[clap(short, long, env = "PAKET_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Google geocoding api key
    #[clap(long, env = "PAKET_GOOGLE_API_KEY", hide_env_values = true)]
    google_api_key: Option<String>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Converts divisible units into base units (BTC -> satoshi, ETH -> wei, XLM/BUL -> stroops)
    ToBase {
        currency: CryptoCurrency,
        amount: String,
    },
    /// Converts base units into divisible units
    FromBase {
        currency: CryptoCurrency,
        amount: String,
        /// Print a native float instead of the exact decimal
        #[clap(long)]
        float: bool,
    },
    /// Converts base units of a currency into euro cents at the current market price
    ToEuroCents {
        currency: CryptoCurrency,
        amount: u128,
    },
    /// Converts euro cents into stroops of XLM or BUL
    FromEuroCents {
        currency: CryptoCurrency,
        euro_cents: u128,
    },
    /// Looks up the country code of "latitude,longitude"
    CountryCode { latlng: String },
    /// Great-circle distance in kilometers between two "latitude,longitude" points
    Distance { from: String, to: String },
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_path(
        cli.config,
        EnvOverride {
            google_api_key: cli.google_api_key,
        },
    )?;
    crate::tracing::init_tracer(&config.tracing)?;

    match cli.command {
        Command::ToBase { currency, amount } => {
            println!("{}", currency.to_base_units(amount)?);
        }
        Command::FromBase {
            currency,
            amount,
            float,
        } => {
            if float {
                println!(
                    "{}",
                    units::scale_down_f64(amount, currency.decimals())?
                );
            } else {
                println!("{}", currency.from_base_units(amount)?);
            }
        }
        Command::ToEuroCents { currency, amount } => {
            let converter = fiat_converter(&config)?;
            let euro_cents = converter
                .crypto_amount_to_euro_cents(currency, amount)
                .await?;
            println!("{euro_cents}");
        }
        Command::FromEuroCents {
            currency,
            euro_cents,
        } => {
            let converter = fiat_converter(&config)?;
            let stroops = converter.euro_cents_to_stroops(currency, euro_cents).await?;
            println!("{stroops}");
        }
        Command::CountryCode { latlng } => {
            let client = GeocodingClient::new(config.geocoding)?;
            let country_code = client.country_code(&latlng).await?;
            if country_code.is_empty() {
                info!(%latlng, "no country at location");
            }
            println!("{country_code}");
        }
        Command::Distance { from, to } => {
            println!("{}", haversine(&from, &to)?);
        }
    }
    Ok(())
}

fn fiat_converter(config: &Config) -> anyhow::Result<FiatConverter<MarketClient>> {
    let client = MarketClient::new(config.market.clone())?;
    Ok(FiatConverter::new(client, config.bul_stroops_price))
}
