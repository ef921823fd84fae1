//! Search filter criteria and their query-string serialization

use chrono::NaiveDate;

/// Date format accepted by the EUVD API for `fromDate`/`toDate`.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Optional filter criteria for a vulnerability search.
///
/// Every field is off by default and only fields the caller explicitly set
/// are serialized. An unset field and a field set to zero mean different
/// things: `from_score: Some(0)` filters by score, `from_score: None` does
/// not filter at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    /// Filter by assigning organization
    pub assigner: Option<String>,

    /// Filter by vendor name
    pub vendor: Option<String>,

    /// Filter by product name
    pub product: Option<String>,

    /// Full-text search query
    pub text: Option<String>,

    /// Publication date lower bound
    pub from_date: Option<NaiveDate>,

    /// Publication date upper bound
    pub to_date: Option<NaiveDate>,

    /// CVSS base score lower bound (0-10)
    pub from_score: Option<u8>,

    /// CVSS base score upper bound (0-10)
    pub to_score: Option<u8>,

    /// EPSS score lower bound (0-100)
    pub from_epss: Option<u8>,

    /// EPSS score upper bound (0-100)
    pub to_epss: Option<u8>,

    /// Filter by known-exploited status
    pub exploited: Option<bool>,

    /// Pagination page number; 0 means the server default
    pub page: u32,

    /// Page size; 0 means the server default
    pub size: u32,
}

impl SearchFilters {
    /// Serialize the set fields into query parameter pairs.
    ///
    /// Bounds are passed through verbatim without clamping or cross-field
    /// range checks; the server decides what an out-of-order range means.
    /// Pair order is not part of the contract.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(assigner) = &self.assigner {
            params.push(("assigner", assigner.clone()));
        }
        if let Some(vendor) = &self.vendor {
            params.push(("vendor", vendor.clone()));
        }
        if let Some(product) = &self.product {
            params.push(("product", product.clone()));
        }
        if let Some(text) = &self.text {
            params.push(("text", text.clone()));
        }
        if let Some(from_date) = self.from_date {
            params.push(("fromDate", from_date.format(DATE_FORMAT).to_string()));
        }
        if let Some(to_date) = self.to_date {
            params.push(("toDate", to_date.format(DATE_FORMAT).to_string()));
        }
        if let Some(from_score) = self.from_score {
            params.push(("fromScore", from_score.to_string()));
        }
        if let Some(to_score) = self.to_score {
            params.push(("toScore", to_score.to_string()));
        }
        if let Some(from_epss) = self.from_epss {
            params.push(("fromEpss", from_epss.to_string()));
        }
        if let Some(to_epss) = self.to_epss {
            params.push(("toEpss", to_epss.to_string()));
        }
        if let Some(exploited) = self.exploited {
            params.push(("exploited", exploited.to_string()));
        }
        if self.page > 0 {
            params.push(("page", self.page.to_string()));
        }
        if self.size > 0 {
            params.push(("size", self.size.to_string()));
        }

        params
    }
}
