//! Bulk-load hook for the flat car catalog.
//!
//! The catalog is two parallel files: one whitespace-separated car name per
//! entry (`Toyota_Camry`) and one whole-number price per entry. Entries are
//! paired up until either file runs out.

use crate::error::DealershipError;
use rand::Rng;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Brand used when a catalog name has no underscore.
pub const UNKNOWN_BRAND: &str = "Unknown";

/// Highest popularity handed out to catalog cars.
pub const MAX_SEEDED_POPULARITY: u32 = 9;

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub brand: String,
    pub model: String,
    pub price: f64,
}

/// Splits `Brand_Model` on the first underscore.
///
/// ```
/// use dealership::catalog::split_name;
///
/// assert_eq!(split_name("Mercedes_C_Class"), ("Mercedes".into(), "C_Class".into()));
/// assert_eq!(split_name("Vios"), ("Unknown".into(), "Vios".into()));
/// ```
pub fn split_name(name: &str) -> (String, String) {
    match name.split_once('_') {
        Some((brand, model)) => (brand.to_string(), model.to_string()),
        None => (UNKNOWN_BRAND.to_string(), name.to_string()),
    }
}

/// Pairs names with prices.
///
/// # Errors
/// [`DealershipError::Catalog`] for a price token that is not a number, and
/// [`DealershipError::Io`] if either source cannot be read.
pub fn read_catalog(mut names: impl Read, mut prices: impl Read) -> Result<Vec<CatalogEntry>, DealershipError> {
    let mut names_text = String::new();
    let mut prices_text = String::new();
    names.read_to_string(&mut names_text)?;
    prices.read_to_string(&mut prices_text)?;

    names_text
        .split_whitespace()
        .zip(prices_text.split_whitespace())
        .enumerate()
        .map(|(i, (name, token))| -> Result<CatalogEntry, DealershipError> {
            let price = token
                .parse::<u64>()
                .map_err(|_| DealershipError::Catalog {
                    position: i + 1,
                    token: token.to_string(),
                })?;
            let (brand, model) = split_name(name);
            Ok(CatalogEntry {
                brand,
                model,
                price: price as f64,
            })
        })
        .collect()
}

/// Reads the catalog from the two files on disk.
pub fn read_catalog_files(
    names_path: impl AsRef<Path>,
    prices_path: impl AsRef<Path>,
) -> Result<Vec<CatalogEntry>, DealershipError> {
    let names = BufReader::new(File::open(names_path)?);
    let prices = BufReader::new(File::open(prices_path)?);
    read_catalog(names, prices)
}

/// Popularity for a catalog car, uniform in `0..=9`.
pub fn random_popularity<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(0..=MAX_SEEDED_POPULARITY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pairs_until_shorter_file_ends() {
        let names = "Toyota_Camry\nHonda_Civic\nVios\n";
        let prices = "25000\n22000\n";
        let entries = read_catalog(names.as_bytes(), prices.as_bytes()).unwrap();

        assert_eq!(
            entries,
            vec![
                CatalogEntry { brand: "Toyota".into(), model: "Camry".into(), price: 25000.0 },
                CatalogEntry { brand: "Honda".into(), model: "Civic".into(), price: 22000.0 },
            ]
        );
    }

    #[test]
    fn test_name_without_underscore() {
        let entries = read_catalog("Vios".as_bytes(), "700000".as_bytes()).unwrap();
        assert_eq!(entries[0].brand, UNKNOWN_BRAND);
        assert_eq!(entries[0].model, "Vios");
    }

    #[test]
    fn test_bad_price_names_position() {
        let err = read_catalog("A_B C_D".as_bytes(), "100 lots".as_bytes()).unwrap_err();
        assert_eq!(
            err,
            DealershipError::Catalog {
                position: 2,
                token: "lots".into()
            }
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_catalog_files("/nonexistent/names.txt", "/nonexistent/prices.txt").unwrap_err();
        assert!(matches!(err, DealershipError::Io(_)));
    }

    #[test]
    fn test_random_popularity_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            assert!(random_popularity(&mut rng) <= MAX_SEEDED_POPULARITY);
        }
    }
}
