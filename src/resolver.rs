//! Resolver adapter for a single nameserver.
//!
//! Wraps one nameserver address into a query-capable handle that sends every
//! query to `address:53`. Construction never fails: an address that cannot be
//! parsed or resolved produces a handle whose queries all fail, and those
//! failures surface per-query as sentinel values rather than as an error here.

use std::net::IpAddr;
use std::time::Duration;

use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::TokioResolver;
use log::warn;

use crate::config::{DNS_PORT, QUERY_TIMEOUT_SECS};

/// A DNS resolver pinned to a single nameserver.
///
/// Each handle is intended for one (domain, nameserver) pair; handles are not
/// cached or shared across domains.
pub struct NameserverResolver {
    resolver: Option<TokioResolver>,
}

impl NameserverResolver {
    /// Builds a resolver targeting `address:53`.
    ///
    /// `address` may be an IPv4/IPv6 literal or a hostname; hostnames are
    /// resolved once via the system resolver. If the address is unusable the
    /// returned handle yields a lookup failure for every query instead of
    /// erroring here.
    pub async fn new(address: &str) -> Self {
        let resolver = match Self::target_ip(address).await {
            Some(ip) => Some(Self::build(ip)),
            None => {
                warn!("Unusable nameserver address: {address}");
                None
            }
        };
        Self { resolver }
    }

    /// The underlying resolver, or `None` when the nameserver address was
    /// unusable.
    pub(crate) fn inner(&self) -> Option<&TokioResolver> {
        self.resolver.as_ref()
    }

    async fn target_ip(address: &str) -> Option<IpAddr> {
        if let Ok(ip) = address.parse::<IpAddr>() {
            return Some(ip);
        }
        // Hostname nameserver: resolve it once with the system resolver.
        tokio::net::lookup_host((address, DNS_PORT))
            .await
            .ok()?
            .next()
            .map(|addr| addr.ip())
    }

    fn build(ip: IpAddr) -> TokioResolver {
        let config = ResolverConfig::from_parts(
            None,
            vec![],
            NameServerConfigGroup::from_ips_clear(&[ip], DNS_PORT, true),
        );

        let mut opts = ResolverOpts::default();
        opts.timeout = Duration::from_secs(QUERY_TIMEOUT_SECS);
        // Single-shot queries: no retries, no cache.
        opts.attempts = 0;
        opts.cache_size = 0;
        // Query names as given, never append search domains.
        opts.ndots = 0;

        TokioResolver::builder_with_config(config, TokioConnectionProvider::default())
            .with_options(opts)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ipv4_literal_builds_a_usable_handle() {
        let resolver = NameserverResolver::new("8.8.8.8").await;
        assert!(resolver.inner().is_some());
    }

    #[tokio::test]
    async fn ipv6_literal_builds_a_usable_handle() {
        let resolver = NameserverResolver::new("2001:4860:4860::8888").await;
        assert!(resolver.inner().is_some());
    }

    #[tokio::test]
    async fn garbage_address_does_not_fail_construction() {
        // Spaces are invalid in hostnames, so this can neither parse nor
        // resolve. Construction must still succeed.
        let resolver = NameserverResolver::new("not a nameserver").await;
        assert!(resolver.inner().is_none());
    }
}
