use paket_units::{currency::*, fiat::*, *};
use serde_json::json;

use std::fmt::Debug;

fn check<I: Copy + Debug, O: PartialEq<E> + Debug, E: Debug>(
    data_set: &[(I, E)],
    conversion: impl Fn(I) -> Result<O, ConversionError>,
) {
    for (input, expected) in data_set {
        let output = conversion(*input).unwrap();
        assert!(
            output == *expected,
            "{input:?}: expected {expected:?}, got {output:?}"
        );
    }
}

#[test]
fn btc_to_satoshi_conversion() {
    check(
        &[
            ("10.0", 1000000000u128),
            ("19.76516789", 1976516789),
            ("7067.00079404", 706700079404),
            ("10.00000001", 1000000001),
            ("0.00000001", 1),
        ],
        btc_to_satoshi,
    );
    check(&[(123u64, 12300000000u128), (1, 100000000), (0, 0)], btc_to_satoshi);
}

#[test]
fn satoshi_to_btc_conversion() {
    check(
        &[
            ("1000000000", "10.0"),
            ("1000000001", "10.00000001"),
            ("12300000000", "123.0"),
            ("100000000", "1.0"),
            ("1", "0.00000001"),
            ("0", "0.0"),
            ("1403", "0.00001403"),
            ("8500", "0.000085"),
            ("10295000000", "102.95"),
        ],
        satoshi_to_btc,
    );
}

#[test]
fn eth_to_wei_conversion() {
    check(
        &[
            ("10.0", 10000000000000000000u128),
            ("19.76516789", 19765167890000000000),
            ("7067.00079404", 7067000794040000000000),
            ("10.00000004", 10000000040000000000),
            ("0.00000001", 10000000000),
            ("0.000000000000000009", 9),
        ],
        eth_to_wei,
    );
    check(
        &[(123u64, 123000000000000000000u128), (1, 1000000000000000000), (0, 0)],
        eth_to_wei,
    );
}

#[test]
fn wei_to_eth_conversion() {
    check(
        &[
            ("10000000000000000000", "10.0"),
            ("10000000010000000000", "10.00000001"),
            ("123000000000000000000", "123.0"),
            ("100000000", "0.0000000001"),
            ("1", "0.000000000000000001"),
            ("0", "0.0"),
            ("1403", "0.000000000000001403"),
            ("8500", "0.0000000000000085"),
            ("10295000000", "0.000000010295"),
        ],
        wei_to_eth,
    );
}

#[test]
fn units_to_stroops_conversion() {
    check(
        &[
            ("0.0000001", 1u128),
            ("0.000001", 10),
            ("0.1234567", 1234567),
            ("0.0005600", 5600),
            ("45", 450000000),
            ("174.5127942", 1745127942),
            ("1792.0045", 17920045000),
            ("187398743124.8795178", 1873987431248795178),
            ("1792.0045126789125479", 17920045126),
        ],
        units_to_stroops,
    );
}

#[test]
fn stroops_to_units_conversion() {
    let data_set: &[(u64, &str)] = &[
        (1, "0.0000001"),
        (10, "0.000001"),
        (1234567, "0.1234567"),
        (5600, "0.00056"),
        (50000000, "5.0"),
        (1745127942, "174.5127942"),
        (1873987431248795178, "187398743124.8795178"),
    ];
    for (stroops, units) in data_set {
        assert_eq!(stroops_to_units(*stroops).unwrap(), *units);
        assert_eq!(stroops_to_units(stroops.to_string()).unwrap(), *units);
    }
}

#[test]
fn invalid_types_are_rejected() {
    let data_set = [json!(78.45), json!(true), json!([2789]), json!({ "value": 17 })];
    let conversions: [fn(&serde_json::Value) -> Result<(), ConversionError>; 6] = [
        |v| btc_to_satoshi(v).map(|_| ()),
        |v| satoshi_to_btc(v).map(|_| ()),
        |v| eth_to_wei(v).map(|_| ()),
        |v| wei_to_eth(v).map(|_| ()),
        |v| units_to_stroops(v).map(|_| ()),
        |v| stroops_to_units(v).map(|_| ()),
    ];
    for value in &data_set {
        for conversion in &conversions {
            assert!(
                matches!(conversion(value), Err(ConversionError::InvalidType(_))),
                "{value} should be rejected"
            );
        }
    }
}

#[test]
fn json_values_convert_like_native_ones() {
    assert_eq!(btc_to_satoshi(&json!("10.00000001")).unwrap(), 1000000001);
    assert_eq!(btc_to_satoshi(&json!(123)).unwrap(), 12300000000);
    assert_eq!(stroops_to_units(&json!(1745127942)).unwrap(), "174.5127942");
}

#[test]
fn euro_cents_to_bul() {
    assert_eq!(euro_cents_to_bul_stroops(1000, 10).unwrap(), 10000);
}

#[test]
fn unsupported_currency() {
    assert!(matches!(
        "USDT".parse::<CryptoCurrency>(),
        Err(ConversionError::UnsupportedCurrency(_))
    ));
}
