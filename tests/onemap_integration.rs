//! Live OneMap checks. Needs network access and `ONEMAP_EMAIL` /
//! `ONEMAP_PASSWORD`; run with `cargo test -- --ignored`.

use vrp_fixtures::onemap::{OneMapClient, OneMapConfig};
use vrp_fixtures::traits::AddressResolver;

fn client() -> OneMapClient {
    OneMapClient::connect(OneMapConfig::from_env()).expect("authenticate against OneMap")
}

#[test]
#[ignore]
fn onemap_resolves_known_postal_code() {
    let address = client().resolve("238801").expect("ION Orchard resolves");
    assert!(address.contains("238801"), "unexpected address {}", address);
}

#[test]
#[ignore]
fn onemap_misses_unknown_postal_code() {
    assert!(client().resolve("000000").is_none());
}
