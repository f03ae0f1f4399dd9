use market_client::*;
use serial_test::serial;
use tracing::debug;
use units::{currency::CryptoCurrency, fiat::*};

fn configured_client() -> anyhow::Result<MarketClient> {
    let config: MarketClientConfig = serde_yaml::from_str("timeout: 20")?;
    Ok(MarketClient::new(config)?)
}

#[test]
fn config_defaults() -> anyhow::Result<()> {
    let config: MarketClientConfig = serde_yaml::from_str("{}")?;
    assert_eq!(config.url, "https://api.coinmarketcap.com/v2");
    assert_eq!(config.timeout, std::time::Duration::from_secs(10));
    Ok(())
}

#[tokio::test]
#[serial]
#[ignore = "queries the live market data API"]
async fn eur_price_quotes() -> anyhow::Result<()> {
    let client = configured_client()?;

    for currency in [CryptoCurrency::Btc, CryptoCurrency::Eth, CryptoCurrency::Xlm] {
        let quote = client.price_quote(currency, EUR).await?;
        debug!("{} EUR quote is: {}", currency, quote);
        assert!(!quote.is_zero());
    }

    Ok(())
}

#[tokio::test]
#[serial]
#[ignore = "queries the live market data API"]
async fn fiat_converter_with_live_quotes() -> anyhow::Result<()> {
    let converter = FiatConverter::new(configured_client()?, 10);

    let cents = converter
        .crypto_amount_to_euro_cents(CryptoCurrency::Btc, 100_000_000)
        .await?;
    assert!(cents > 0);

    let stroops = converter.euro_cents_to_xlm_stroops(100).await?;
    assert!(stroops > 0);

    Ok(())
}
