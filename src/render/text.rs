//! Plain-text renderer.

use crate::models::LookupReport;

/// Renders the report as human-readable plain text.
///
/// Per domain: the domain name on its own line; per nameserver: the `@address`
/// label line, one `<TYPE>\t<value>` line per value, then a blank line closing
/// the nameserver block. Record types with no values emit no lines, but the
/// closing blank line is still emitted exactly once per nameserver.
pub fn render_text(report: &LookupReport) -> String {
    let mut out = String::new();
    for domain in &report.domains {
        out.push_str(&domain.domain_name);
        out.push('\n');
        for result in &domain.results {
            out.push_str(&result.nameserver);
            out.push('\n');
            for record in &result.records {
                for value in &record.values {
                    out.push_str(&format!("{}\t{}\n", record.record_type, value));
                }
            }
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DomainRecords, NameserverRecords, RecordSet};

    fn record(record_type: &str, values: &[&str]) -> RecordSet {
        RecordSet {
            record_type: record_type.to_string(),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    #[test]
    fn single_value_block() {
        let report = LookupReport {
            domains: vec![DomainRecords {
                domain_name: "example.com".to_string(),
                results: vec![NameserverRecords {
                    nameserver: "@8.8.8.8".to_string(),
                    records: vec![record("A", &["93.184.216.34"])],
                }],
            }],
        };

        assert_eq!(
            render_text(&report),
            "example.com\n@8.8.8.8\nA\t93.184.216.34\n\n"
        );
    }

    #[test]
    fn empty_record_sets_emit_no_lines_but_block_still_terminates() {
        let report = LookupReport {
            domains: vec![DomainRecords {
                domain_name: "example.com".to_string(),
                results: vec![NameserverRecords {
                    nameserver: "@8.8.8.8".to_string(),
                    records: vec![record("CNAME", &[]), record("TXT", &[])],
                }],
            }],
        };

        // One blank line terminator, regardless of how many empty sets.
        assert_eq!(render_text(&report), "example.com\n@8.8.8.8\n\n");
    }

    #[test]
    fn multiple_nameservers_each_get_their_own_block() {
        let report = LookupReport {
            domains: vec![DomainRecords {
                domain_name: "example.com".to_string(),
                results: vec![
                    NameserverRecords {
                        nameserver: "@8.8.8.8".to_string(),
                        records: vec![record("NS", &["ns1.example.com.", "ns2.example.com."])],
                    },
                    NameserverRecords {
                        nameserver: "@1.1.1.1".to_string(),
                        records: vec![record("MX", &["LookupMX error"])],
                    },
                ],
            }],
        };

        assert_eq!(
            render_text(&report),
            "example.com\n\
             @8.8.8.8\n\
             NS\tns1.example.com.\n\
             NS\tns2.example.com.\n\
             \n\
             @1.1.1.1\n\
             MX\tLookupMX error\n\
             \n"
        );
    }

    #[test]
    fn empty_report_renders_to_nothing() {
        let report = LookupReport { domains: vec![] };
        assert_eq!(render_text(&report), "");
    }
}
