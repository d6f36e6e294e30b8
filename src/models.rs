//! Result-tree data model.
//!
//! One invocation produces exactly one [`LookupReport`]: an ordered tree of
//! domains → nameservers → record types → values. The tree is built append-only
//! by the aggregation engine and is read-only afterwards; renderers never
//! mutate it.
//!
//! The serialized field names (`Domains`, `DomainName`, `Result`, `Nameserver`,
//! `Records`, `Type`, `Record`) are fixed for compatibility with existing
//! consumers of the JSON output and must not be changed.

use serde::Serialize;

/// The full aggregation result for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupReport {
    /// One entry per requested domain, in input order (duplicates preserved).
    #[serde(rename = "Domains")]
    pub domains: Vec<DomainRecords>,
}

/// All results for a single requested domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainRecords {
    /// The domain name exactly as given on input.
    #[serde(rename = "DomainName")]
    pub domain_name: String,
    /// One entry per configured nameserver, in configuration order.
    #[serde(rename = "Result")]
    pub results: Vec<NameserverRecords>,
}

/// All record sets returned by a single nameserver for one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameserverRecords {
    /// Nameserver label, always `"@" + address` with no normalization.
    #[serde(rename = "Nameserver")]
    pub nameserver: String,
    /// One entry per requested record type, in request order.
    #[serde(rename = "Records")]
    pub records: Vec<RecordSet>,
}

/// The values looked up for one (domain, nameserver, record type) triple.
///
/// On lookup failure `values` holds a single per-type sentinel string (e.g.
/// `"LookupMX error"`); an unsupported record type yields an empty `values`.
/// Consumers cannot distinguish "no records" from an empty answer by shape
/// alone; that conflation is part of the compatibility contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordSet {
    /// Record type tag as requested, uppercase (e.g. "A", "MX").
    #[serde(rename = "Type")]
    pub record_type: String,
    /// One string per resolved record, in resolver order.
    #[serde(rename = "Record")]
    pub values: Vec<String>,
}
