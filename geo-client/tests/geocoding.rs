use geo_client::*;
use serial_test::serial;

fn configured_client() -> anyhow::Result<GeocodingClient> {
    let api_key = std::env::var("PAKET_GOOGLE_API_KEY").expect("PAKET_GOOGLE_API_KEY not set");
    Ok(GeocodingClient::new(GeocodingConfig {
        api_key: Some(ApiKey::from(api_key)),
        ..Default::default()
    })?)
}

#[test]
fn config_from_yaml() -> anyhow::Result<()> {
    let config: GeocodingConfig = serde_yaml::from_str("api_key: abc\nlanguage: de")?;
    assert_eq!(config.language, "de");
    assert_eq!(config.api_key.as_ref().map(ApiKey::expose), Some("abc"));
    assert_eq!(config.url, GeocodingConfig::default().url);
    assert!(!format!("{config:?}").contains("abc"));
    Ok(())
}

#[tokio::test]
#[serial]
#[ignore = "queries the live geocoding API"]
async fn country_code() -> anyhow::Result<()> {
    let client = configured_client()?;
    let countries = [
        ("47.8376698,35.1217301", "UA"),
        ("31.7481223,35.2149544", "IL"),
        ("-1.3149347,36.8237364", "KE"),
        ("-51.638731,-69.2187305", "AR"),
        ("34.9580867,138.0272817", "JP"),
    ];
    for (coords, expected) in countries {
        assert_eq!(client.country_code(coords).await?, expected, "{coords}");
    }
    Ok(())
}

#[tokio::test]
#[serial]
#[ignore = "queries the live geocoding API"]
async fn invalid_gps() -> anyhow::Result<()> {
    let client = configured_client()?;
    for coords in ["-1235.4568,1873.78977", "-0001.44,986.8", "onetwo,three,four"] {
        let res = client.country_code(coords).await;
        assert!(matches!(res, Err(GeodecodingError::Provider(_))), "{coords}");
    }
    Ok(())
}

#[tokio::test]
#[serial]
#[ignore = "queries the live geocoding API"]
async fn non_country() -> anyhow::Result<()> {
    let client = configured_client()?;
    for coords in ["19.1352379,169.9914628", "-64.9219625,-59.6789551", "88.8398092,-178.5668534"] {
        assert_eq!(client.country_code(coords).await?, "", "{coords}");
    }
    Ok(())
}
