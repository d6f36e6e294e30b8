//! Configuration constants.

/// Per-query timeout, in seconds. Also the only bound on worst-case latency:
/// total runtime scales with domains × nameservers × types × this value.
pub const QUERY_TIMEOUT_SECS: u64 = 10;

/// Port every nameserver is queried on.
pub const DNS_PORT: u16 = 53;

/// Settings file looked up in the home directory when `--config` is not given.
pub const DEFAULT_SETTINGS_FILE: &str = ".domain_records.toml";
