//! DNS record operations.
//!
//! Records live under a domain; all paths are scoped by the domain name.
//! Like the domain write operations, record writes are status-only: the
//! provider returns no meaningful body.

use crate::client::DnsClient;
use crate::error::Result;
use crate::types::{DnsRecord, NewDnsRecord};

impl DnsClient {
    /// List all DNS records of `domain`.
    pub async fn list_records(&self, domain: &str) -> Result<Vec<DnsRecord>> {
        self.get(&format!("/v1/dns/domains/{domain}/records")).await
    }

    /// Create a DNS record in `domain`.
    pub async fn create_record(&self, domain: &str, record: &NewDnsRecord) -> Result<()> {
        self.post(&format!("/v1/dns/domains/{domain}/records"), record)
            .await
    }

    /// Replace the fields of the record identified by `record_id`.
    pub async fn update_record(
        &self,
        domain: &str,
        record_id: u64,
        record: &NewDnsRecord,
    ) -> Result<()> {
        self.put(
            &format!("/v1/dns/domains/{domain}/records/{record_id}"),
            record,
        )
        .await
    }

    /// Delete the record identified by `record_id` from `domain`.
    pub async fn delete_record(&self, domain: &str, record_id: u64) -> Result<()> {
        self.delete(&format!("/v1/dns/domains/{domain}/records/{record_id}"))
            .await
    }
}
