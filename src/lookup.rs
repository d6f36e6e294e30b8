//! Record lookup: one DNS question per call.
//!
//! [`lookup_record`] performs exactly one query for a (domain, record type)
//! pair against a [`NameserverResolver`] and returns the answer as strings.
//! Failures are swallowed and replaced by a fixed per-type sentinel string so
//! the result tree always keeps its full shape; the underlying error detail is
//! logged at debug level and otherwise discarded.

use std::fmt;

use hickory_resolver::{ResolveError, TokioResolver};
use log::{debug, trace};
use strum_macros::EnumString;

use crate::resolver::NameserverResolver;

/// Supported record type tags.
///
/// Parsed from uppercase tags; anything unrecognized lands in
/// [`RecordType::Other`], which is a silent no-op on lookup rather than an
/// error.
#[derive(Debug, Clone, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RecordType {
    /// Host addresses (IPv4 and/or IPv6, per resolver behavior).
    A,
    /// Name server host names.
    Ns,
    /// Mail exchanger host names (preference values discarded).
    Mx,
    /// Text records, verbatim.
    Txt,
    /// Any unrecognized tag; queries for it return no values and no error.
    #[strum(default)]
    Other(String),
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordType::A => f.write_str("A"),
            RecordType::Ns => f.write_str("NS"),
            RecordType::Mx => f.write_str("MX"),
            RecordType::Txt => f.write_str("TXT"),
            RecordType::Other(tag) => f.write_str(tag),
        }
    }
}

impl RecordType {
    /// The fixed sentinel substituted for a failed lookup of this type, or
    /// `None` for unsupported types (which never query and never fail).
    ///
    /// The exact strings, including the `A` / `"LookupHost error"` mismatch,
    /// are a compatibility contract with existing consumers.
    pub fn sentinel(&self) -> Option<&'static str> {
        match self {
            RecordType::A => Some("LookupHost error"),
            RecordType::Ns => Some("LookupNS error"),
            RecordType::Mx => Some("LookupMX error"),
            RecordType::Txt => Some("LookupTXT error"),
            RecordType::Other(_) => None,
        }
    }
}

/// Performs a single query and returns the answer values.
///
/// Never fails: transport or protocol errors for supported types yield the
/// one-element sentinel sequence for that type, and unsupported types yield an
/// empty sequence without querying at all.
pub async fn lookup_record(
    resolver: &NameserverResolver,
    domain: &str,
    qtype: &RecordType,
) -> Vec<String> {
    let Some(sentinel) = qtype.sentinel() else {
        trace!("Skipping unsupported record type {qtype} for {domain}");
        return Vec::new();
    };

    // An unusable nameserver address behaves like a failing query.
    let Some(r) = resolver.inner() else {
        return vec![sentinel.to_string()];
    };

    let looked_up = match qtype {
        RecordType::Ns => lookup_ns(r, domain).await,
        RecordType::A => lookup_a(r, domain).await,
        RecordType::Mx => lookup_mx(r, domain).await,
        RecordType::Txt => lookup_txt(r, domain).await,
        RecordType::Other(_) => return Vec::new(),
    };

    match looked_up {
        Ok(values) => values,
        Err(e) => {
            debug!("{qtype} lookup for {domain} failed: {e}");
            vec![sentinel.to_string()]
        }
    }
}

async fn lookup_ns(resolver: &TokioResolver, domain: &str) -> Result<Vec<String>, ResolveError> {
    let response = resolver.ns_lookup(domain).await?;
    Ok(response.iter().map(|ns| ns.to_string()).collect())
}

async fn lookup_a(resolver: &TokioResolver, domain: &str) -> Result<Vec<String>, ResolveError> {
    let response = resolver.lookup_ip(domain).await?;
    Ok(response.iter().map(|ip| ip.to_string()).collect())
}

async fn lookup_mx(resolver: &TokioResolver, domain: &str) -> Result<Vec<String>, ResolveError> {
    let response = resolver.mx_lookup(domain).await?;
    let mut exchangers: Vec<(u16, String)> = response
        .iter()
        .map(|mx| (mx.preference(), mx.exchange().to_string()))
        .collect();
    // Stable sort: response order is kept within equal preferences.
    exchangers.sort_by_key(|(preference, _)| *preference);
    Ok(exchangers.into_iter().map(|(_, host)| host).collect())
}

async fn lookup_txt(resolver: &TokioResolver, domain: &str) -> Result<Vec<String>, ResolveError> {
    let response = resolver.txt_lookup(domain).await?;
    Ok(response
        .iter()
        .map(|txt| {
            // A TXT record may be split into multiple character-string
            // chunks; join them into one value.
            txt.iter()
                .map(|chunk| String::from_utf8_lossy(chunk).to_string())
                .collect::<String>()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_supported_tags() {
        assert_eq!(RecordType::from_str("A").unwrap(), RecordType::A);
        assert_eq!(RecordType::from_str("NS").unwrap(), RecordType::Ns);
        assert_eq!(RecordType::from_str("MX").unwrap(), RecordType::Mx);
        assert_eq!(RecordType::from_str("TXT").unwrap(), RecordType::Txt);
    }

    #[test]
    fn unknown_tags_parse_to_other() {
        assert_eq!(
            RecordType::from_str("CNAME").unwrap(),
            RecordType::Other("CNAME".to_string())
        );
        assert_eq!(
            RecordType::from_str("SOA").unwrap(),
            RecordType::Other("SOA".to_string())
        );
    }

    #[test]
    fn displays_uppercase_tags() {
        assert_eq!(RecordType::A.to_string(), "A");
        assert_eq!(RecordType::Ns.to_string(), "NS");
        assert_eq!(RecordType::Mx.to_string(), "MX");
        assert_eq!(RecordType::Txt.to_string(), "TXT");
        assert_eq!(RecordType::Other("CAA".to_string()).to_string(), "CAA");
    }

    #[test]
    fn sentinel_strings_are_exact() {
        assert_eq!(RecordType::A.sentinel(), Some("LookupHost error"));
        assert_eq!(RecordType::Ns.sentinel(), Some("LookupNS error"));
        assert_eq!(RecordType::Mx.sentinel(), Some("LookupMX error"));
        assert_eq!(RecordType::Txt.sentinel(), Some("LookupTXT error"));
        assert_eq!(RecordType::Other("CNAME".to_string()).sentinel(), None);
    }

    #[tokio::test]
    async fn unsupported_type_is_a_silent_noop() {
        // No query is performed for unsupported types, so even a resolver
        // with an unusable address returns an empty sequence, not a sentinel.
        let resolver = NameserverResolver::new("not a nameserver").await;
        let qtype = RecordType::from_str("CNAME").unwrap();

        let values = lookup_record(&resolver, "example.com", &qtype).await;
        assert!(values.is_empty());
    }

    #[tokio::test]
    async fn unusable_nameserver_yields_per_type_sentinels() {
        let resolver = NameserverResolver::new("not a nameserver").await;

        for (qtype, sentinel) in [
            (RecordType::A, "LookupHost error"),
            (RecordType::Ns, "LookupNS error"),
            (RecordType::Mx, "LookupMX error"),
            (RecordType::Txt, "LookupTXT error"),
        ] {
            let values = lookup_record(&resolver, "example.com", &qtype).await;
            assert_eq!(values, vec![sentinel.to_string()]);
        }
    }
}
