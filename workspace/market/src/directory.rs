use common::TickerDto;

use crate::error::{MarketError, Result};

/// The NIFTY 50 universe. Hand-curated and closed: adding an entry is a
/// data edit, not a code change. Display names and symbols are unique.
const NIFTY_50: &[(&str, &str)] = &[
    ("Reliance Industries", "RELIANCE.NS"),
    ("Tata Consultancy Services", "TCS.NS"),
    ("Infosys", "INFY.NS"),
    ("HDFC Bank", "HDFCBANK.NS"),
    ("ICICI Bank", "ICICIBANK.NS"),
    ("Hindustan Unilever", "HINDUNILVR.NS"),
    ("State Bank of India", "SBIN.NS"),
    ("Bharti Airtel", "BHARTIARTL.NS"),
    ("Kotak Mahindra Bank", "KOTAKBANK.NS"),
    ("Bajaj Finance", "BAJFINANCE.NS"),
    ("HDFC", "HDFC.NS"),
    ("Larsen & Toubro", "LT.NS"),
    ("Axis Bank", "AXISBANK.NS"),
    ("ITC", "ITC.NS"),
    ("Asian Paints", "ASIANPAINT.NS"),
    ("Maruti Suzuki", "MARUTI.NS"),
    ("Wipro", "WIPRO.NS"),
    ("Mahindra & Mahindra", "M&M.NS"),
    ("Nestle India", "NESTLEIND.NS"),
    ("Sun Pharmaceutical Industries", "SUNPHARMA.NS"),
    ("UltraTech Cement", "ULTRACEMCO.NS"),
    ("Tata Steel", "TATASTEEL.NS"),
    ("Tech Mahindra", "TECHM.NS"),
    ("HCL Technologies", "HCLTECH.NS"),
    ("Adani Enterprises", "ADANIENT.NS"),
    ("Bajaj Auto", "BAJAJ-AUTO.NS"),
    ("Titan Company", "TITAN.NS"),
    ("Tata Motors", "TATAMOTORS.NS"),
    ("Divis Laboratories", "DIVISLAB.NS"),
    ("Power Grid Corporation of India", "POWERGRID.NS"),
    ("Cipla", "CIPLA.NS"),
    ("Grasim Industries", "GRASIM.NS"),
    ("JSW Steel", "JSWSTEEL.NS"),
    ("Hero MotoCorp", "HEROMOTOCO.NS"),
    ("IndusInd Bank", "INDUSINDBK.NS"),
    ("Dr. Reddys Laboratories", "DRREDDY.NS"),
    ("Bharat Petroleum Corporation", "BPCL.NS"),
    ("Hindalco Industries", "HINDALCO.NS"),
    ("Britannia Industries", "BRITANNIA.NS"),
    ("Apollo Hospitals", "APOLLOHOSP.NS"),
    ("Eicher Motors", "EICHERMOT.NS"),
    ("Adani Ports and SEZ", "ADANIPORTS.NS"),
    ("Oil and Natural Gas Corporation", "ONGC.NS"),
    ("SBI Life Insurance", "SBILIFE.NS"),
    ("Tata Consumer Products", "TATACONSUM.NS"),
    ("Bajaj Finserv", "BAJAJFINSV.NS"),
    ("UPL", "UPL.NS"),
    ("Coal India", "COALINDIA.NS"),
    ("NTPC", "NTPC.NS"),
    ("HDFC Life Insurance", "HDFCLIFE.NS"),
];

/// Read-only view over the fixed index list.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickerDirectory;

impl TickerDirectory {
    pub fn new() -> Self {
        Self
    }

    /// Resolve a display name to its exchange symbol.
    pub fn lookup(&self, display_name: &str) -> Result<&'static str> {
        NIFTY_50
            .iter()
            .find(|(name, _)| *name == display_name)
            .map(|(_, symbol)| *symbol)
            .ok_or_else(|| MarketError::TickerNotFound(display_name.to_string()))
    }

    /// Whether a symbol belongs to the directory. Handlers gate on this
    /// before any provider call is made.
    pub fn contains_symbol(&self, symbol: &str) -> bool {
        NIFTY_50.iter().any(|(_, s)| *s == symbol)
    }

    pub fn entries(&self) -> Vec<TickerDto> {
        NIFTY_50
            .iter()
            .map(|(name, symbol)| TickerDto {
                display_name: (*name).to_string(),
                symbol: (*symbol).to_string(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        NIFTY_50.len()
    }

    pub fn is_empty(&self) -> bool {
        NIFTY_50.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn lookup_returns_exactly_the_mapped_symbol() {
        let directory = TickerDirectory::new();
        for entry in directory.entries() {
            let symbol = directory.lookup(&entry.display_name).unwrap();
            assert_eq!(symbol, entry.symbol);
        }
    }

    #[test]
    fn lookup_unknown_name_is_not_found() {
        let directory = TickerDirectory::new();
        let err = directory.lookup("Not A Company").unwrap_err();
        assert!(matches!(err, MarketError::TickerNotFound(_)));
    }

    #[test]
    fn symbols_and_names_are_unique_and_non_empty() {
        let directory = TickerDirectory::new();
        let entries = directory.entries();
        assert_eq!(entries.len(), 50);

        let names: HashSet<_> = entries.iter().map(|e| e.display_name.clone()).collect();
        let symbols: HashSet<_> = entries.iter().map(|e| e.symbol.clone()).collect();
        assert_eq!(names.len(), entries.len());
        assert_eq!(symbols.len(), entries.len());
        assert!(entries
            .iter()
            .all(|e| !e.display_name.is_empty() && !e.symbol.is_empty()));
    }

    #[test]
    fn contains_symbol_rejects_strangers() {
        let directory = TickerDirectory::new();
        assert!(directory.contains_symbol("RELIANCE.NS"));
        assert!(!directory.contains_symbol("ZZZZZ.NS"));
    }
}
