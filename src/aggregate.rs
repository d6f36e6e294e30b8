//! Aggregation engine: domains × nameservers × record types.
//!
//! Drives the resolver adapter and record lookup over every requested triple
//! and assembles the nested [`LookupReport`]. Iteration order is fixed and
//! caller-supplied: domains outermost, then nameservers, then record types.
//! Nothing is deduplicated, reordered, or run in parallel, and a failed triple
//! never aborts the rest of the run.

use std::str::FromStr;

use async_trait::async_trait;

use crate::lookup::{lookup_record, RecordType};
use crate::models::{DomainRecords, LookupReport, NameserverRecords, RecordSet};
use crate::resolver::NameserverResolver;

/// Seam between the aggregation loop and the actual DNS machinery.
///
/// A backend hands out one handle per (domain, nameserver) pair and answers
/// individual queries through it. Tests substitute canned implementations;
/// production uses [`DnsBackend`].
#[async_trait]
pub trait QueryBackend: Send + Sync {
    /// Per-(domain, nameserver) query handle.
    type Handle: Send + Sync;

    /// Creates a fresh handle for one nameserver. Must not fail; unusable
    /// nameservers surface as failing queries instead.
    async fn connect(&self, nameserver: &str) -> Self::Handle;

    /// Answers a single (domain, record type) question through `handle`.
    /// Must not fail; lookup errors are encoded as sentinel values.
    async fn query(&self, handle: &Self::Handle, domain: &str, qtype: &RecordType) -> Vec<String>;
}

/// Production backend: real DNS queries through [`NameserverResolver`].
#[derive(Debug, Default)]
pub struct DnsBackend;

impl DnsBackend {
    /// Creates the production backend.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl QueryBackend for DnsBackend {
    type Handle = NameserverResolver;

    async fn connect(&self, nameserver: &str) -> NameserverResolver {
        NameserverResolver::new(nameserver).await
    }

    async fn query(
        &self,
        handle: &NameserverResolver,
        domain: &str,
        qtype: &RecordType,
    ) -> Vec<String> {
        lookup_record(handle, domain, qtype).await
    }
}

/// Resolves the effective record-type list for one invocation.
///
/// A non-empty override (comma-separated, any case) replaces the configured
/// list outright; it is never merged. Without an override the configured list
/// is used verbatim, which the settings loader has already uppercased.
pub fn resolve_qtypes(override_tags: Option<&str>, configured: &[String]) -> Vec<String> {
    match override_tags {
        Some(tags) if !tags.is_empty() => tags
            .to_uppercase()
            .split(',')
            .map(str::to_string)
            .collect(),
        _ => configured.to_vec(),
    }
}

/// Performs every lookup for the given inputs and returns the assembled tree.
///
/// The report contains exactly one [`DomainRecords`] per requested domain
/// (duplicates included), each with one [`NameserverRecords`] per configured
/// nameserver, each with one [`RecordSet`] per requested type, all in input
/// order. Queries run strictly sequentially; a fresh handle is connected for
/// every (domain, nameserver) pair.
pub async fn aggregate<B: QueryBackend>(
    backend: &B,
    domains: &[String],
    nameservers: &[String],
    qtypes: &[String],
) -> LookupReport {
    let parsed_qtypes: Vec<(String, RecordType)> = qtypes
        .iter()
        .map(|tag| {
            let qtype = RecordType::from_str(tag)
                .unwrap_or_else(|_| RecordType::Other(tag.clone()));
            (tag.clone(), qtype)
        })
        .collect();

    let mut report = LookupReport {
        domains: Vec::with_capacity(domains.len()),
    };

    for domain in domains {
        let mut results = Vec::with_capacity(nameservers.len());
        for nameserver in nameservers {
            let handle = backend.connect(nameserver).await;
            let mut records = Vec::with_capacity(parsed_qtypes.len());
            for (tag, qtype) in &parsed_qtypes {
                let values = backend.query(&handle, domain, qtype).await;
                records.push(RecordSet {
                    record_type: tag.clone(),
                    values,
                });
            }
            results.push(NameserverRecords {
                nameserver: format!("@{nameserver}"),
                records,
            });
        }
        report.domains.push(DomainRecords {
            domain_name: domain.clone(),
            results,
        });
    }

    report
}
