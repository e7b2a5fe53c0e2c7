//! Export hook for the append-only order log.
//!
//! One sale per line, tab separated:
//!
//! ```text
//! Mar/14/2024	16:05:09	Toyota_Camry	Red	25000
//! ```
//!
//! The ledger keys sales by identifier while the log keys them by display
//! name; [`OrderLogEntry::for_sale`] builds the log view of a ledger record so
//! both describe the same event.

use crate::dealership::STAMP_FORMAT;
use crate::error::DealershipError;
use crate::model::{CarRecord, SaleRecord};
use chrono::NaiveDateTime;
use std::io::{BufRead, Write};

const TIMESTAMP_FORMAT: &str = "%b/%d/%Y\t%H:%M:%S";

#[derive(Debug, Clone, PartialEq)]
pub struct OrderLogEntry {
    pub timestamp: NaiveDateTime,
    pub car_name: String,
    pub color: String,
    pub price: f64,
}

impl OrderLogEntry {
    /// Log view of a ledger record, stamped with the sale's own `sold_at`.
    ///
    /// # Errors
    /// [`DealershipError::OrderLog`] if `sold_at` is not a `ctime` stamp.
    pub fn for_sale(
        sale: &SaleRecord,
        car: &CarRecord,
        color: impl Into<String>,
    ) -> Result<Self, DealershipError> {
        let timestamp = NaiveDateTime::parse_from_str(sale.sold_at.trim(), STAMP_FORMAT)
            .map_err(|_| DealershipError::OrderLog(sale.sold_at.clone()))?;
        Ok(Self {
            timestamp,
            car_name: car.catalog_name(),
            color: color.into(),
            price: sale.amount,
        })
    }

    pub fn to_line(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.car_name,
            self.color,
            self.price
        )
    }

    /// Parses one log line.
    ///
    /// # Errors
    /// [`DealershipError::OrderLog`] if the line does not have five fields or
    /// a field does not parse.
    pub fn parse_line(line: &str) -> Result<Self, DealershipError> {
        let malformed = || DealershipError::OrderLog(line.to_string());

        let fields: Vec<&str> = line.trim_end().split('\t').collect();
        let [date, time, car_name, color, price] = fields.as_slice() else {
            return Err(malformed());
        };
        let timestamp = NaiveDateTime::parse_from_str(&format!("{date}\t{time}"), TIMESTAMP_FORMAT)
            .map_err(|_| malformed())?;
        let price = price.parse::<f64>().map_err(|_| malformed())?;

        Ok(Self {
            timestamp,
            car_name: car_name.to_string(),
            color: color.to_string(),
            price,
        })
    }
}

/// Appends one entry as a full line.
pub fn append_entry(writer: &mut impl Write, entry: &OrderLogEntry) -> Result<(), DealershipError> {
    writeln!(writer, "{}", entry.to_line())?;
    Ok(())
}

/// Reads every non-blank line of a log.
pub fn read_entries(reader: impl BufRead) -> Result<Vec<OrderLogEntry>, DealershipError> {
    let mut entries = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        entries.push(OrderLogEntry::parse_line(&line)?);
    }
    Ok(entries)
}
