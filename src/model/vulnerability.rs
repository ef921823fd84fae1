//! EUVD API response models
//!
//! Field names mirror the EUVD JSON payload and are case-sensitive. Records
//! are tolerant of missing fields (everything except `id` decodes to its
//! default), since the API omits fields it has no data for.

use serde::{Deserialize, Serialize};

/// One vulnerability record from the EUVD
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vulnerability {
    /// The EUVD identifier (e.g., "EUVD-2025-0001")
    pub id: String,

    /// Free-text description of the vulnerability
    #[serde(default)]
    pub description: String,

    /// Publication date, kept as the API's date-formatted string
    #[serde(default, rename = "datePublished")]
    pub date_published: String,

    /// Last-update date, kept as the API's date-formatted string
    #[serde(default, rename = "dateUpdated")]
    pub date_updated: String,

    /// CVSS base score
    #[serde(default, rename = "baseScore")]
    pub base_score: f64,

    /// CVSS scheme version the score was computed under (e.g., "3.1")
    #[serde(default, rename = "baseScoreVersion")]
    pub base_score_version: String,

    /// CVSS vector string
    #[serde(default, rename = "baseScoreVector")]
    pub base_score_vector: String,

    /// Newline-separated reference URLs
    #[serde(default)]
    pub references: String,

    /// Newline-separated alias identifiers (e.g., CVE IDs)
    #[serde(default)]
    pub aliases: String,

    /// Assigning organization
    #[serde(default)]
    pub assigner: String,

    /// Exploit-prediction (EPSS) score
    #[serde(default)]
    pub epss: f64,

    /// Affected products
    #[serde(default, rename = "enisaIdProduct")]
    pub enisa_id_product: Vec<EnisaIdProduct>,

    /// Affected vendors
    #[serde(default, rename = "enisaIdVendor")]
    pub enisa_id_vendor: Vec<EnisaIdVendor>,
}

/// Product association on a vulnerability record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnisaIdProduct {
    /// Association identifier
    #[serde(default)]
    pub id: String,

    /// The affected product
    #[serde(default)]
    pub product: Product,

    /// Affected version range, when the record carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_version: Option<String>,
}

/// Vendor association on a vulnerability record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnisaIdVendor {
    /// Association identifier
    #[serde(default)]
    pub id: String,

    /// The affected vendor
    #[serde(default)]
    pub vendor: Vendor,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Product {
    /// Product name
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vendor {
    /// Vendor name
    #[serde(default)]
    pub name: String,
}

/// One page of search results plus the server's total match count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Records in this page
    #[serde(default)]
    pub items: Vec<Vulnerability>,

    /// Total matches on the server, which may exceed `items.len()`
    #[serde(default)]
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_record() {
        let json = r#"{
            "id": "EUVD-2025-4893",
            "description": "A heap buffer overflow in the parser allows remote code execution.",
            "datePublished": "2025-02-11",
            "dateUpdated": "2025-03-02",
            "baseScore": 9.8,
            "baseScoreVersion": "3.1",
            "baseScoreVector": "CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H",
            "references": "https://example.com/advisory\nhttps://example.com/patch",
            "aliases": "CVE-2025-11111\nGHSA-aaaa-bbbb-cccc",
            "assigner": "mitre",
            "epss": 87.4,
            "enisaIdProduct": [
                {
                    "id": "EUVD-2025-4893-p1",
                    "product": {"name": "Acme Gateway"},
                    "product_version": "<2.4.1"
                }
            ],
            "enisaIdVendor": [
                {
                    "id": "EUVD-2025-4893-v1",
                    "vendor": {"name": "Acme"}
                }
            ]
        }"#;

        let record: Vulnerability = serde_json::from_str(json).unwrap();

        assert_eq!(record.id, "EUVD-2025-4893");
        assert_eq!(record.date_published, "2025-02-11");
        assert_eq!(record.base_score, 9.8);
        assert_eq!(record.base_score_version, "3.1");
        assert_eq!(record.epss, 87.4);
        assert_eq!(record.enisa_id_product.len(), 1);
        assert_eq!(record.enisa_id_product[0].product.name, "Acme Gateway");
        assert_eq!(
            record.enisa_id_product[0].product_version.as_deref(),
            Some("<2.4.1")
        );
        assert_eq!(record.enisa_id_vendor[0].vendor.name, "Acme");
    }

    #[test]
    fn missing_optional_fields_decode_to_defaults() {
        let record: Vulnerability = serde_json::from_str(r#"{"id": "EUVD-2025-1"}"#).unwrap();

        assert_eq!(record.id, "EUVD-2025-1");
        assert!(record.description.is_empty());
        assert_eq!(record.base_score, 0.0);
        assert!(record.enisa_id_product.is_empty());
        assert!(record.enisa_id_vendor.is_empty());
    }

    #[test]
    fn missing_id_is_a_decode_error() {
        let result: Result<Vulnerability, _> = serde_json::from_str(r#"{"baseScore": 5.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn parse_search_response() {
        let json = r#"{
            "items": [
                {"id": "EUVD-2025-1"},
                {"id": "EUVD-2025-2"}
            ],
            "total": 1371
        }"#;

        let response: SearchResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.items.len(), 2);
        assert_eq!(response.total, 1371);
        assert_eq!(response.items[1].id, "EUVD-2025-2");
    }
}
