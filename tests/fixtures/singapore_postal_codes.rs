//! Real Singapore postal codes for realistic pools.

use vrp_fixtures::postal::PostalCodePool;

pub const POSTAL_CODES: &[&str] = &[
    "018956", // Marina Bay Sands
    "018989", // Gardens by the Bay
    "038983", // Suntec City
    "039594", // Esplanade
    "049483", // Raffles Place
    "058357", // Chinatown Point
    "079903", // Tanjong Pagar Centre
    "098585", // Sentosa Resorts World
    "117543", // NUS Kent Ridge
    "138588", // Fusionopolis
    "179103", // Raffles City
    "188064", // Bugis Junction
    "238801", // ION Orchard
    "238859", // Paragon
    "247696", // Tanglin Mall
    "259569", // Singapore Botanic Gardens
    "310190", // Toa Payoh HDB Hub
    "449269", // Parkway Parade
    "529510", // Tampines Mall
    "608549", // Jurong East JEM
    "639798", // Nanyang Technological University
    "729826", // Causeway Point
    "768794", // Northpoint City
    "819663", // Changi Airport Terminal 3
];

/// Postal table in the on-disk YAML layout, including the junk keys the
/// loader is expected to skip.
pub const POSTAL_TABLE_YAML: &str = r#"
"018956":
  address: 10 BAYFRONT AVENUE
  lat: 1.2834
  lng: 103.8607
"238801":
  address: 2 ORCHARD TURN
  lat: 1.3040
  lng: 103.8318
529510:
  address: 4 TAMPINES CENTRAL 5
  lat: 1.3525
  lng: 103.9447
~:
  address: unknown
"#;

pub fn sample_pool() -> PostalCodePool {
    PostalCodePool::from_codes(POSTAL_CODES.iter().copied())
}
