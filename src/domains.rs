//! Domain operations.

use serde::Serialize;

use crate::client::DnsClient;
use crate::error::Result;
use crate::types::DnsDomain;

impl DnsClient {
    /// List all registered DNS domains.
    ///
    /// An empty collection on the provider side yields an empty `Vec`, not
    /// an error. Ordering is whatever the provider returns.
    pub async fn list_domains(&self) -> Result<Vec<DnsDomain>> {
        self.get("/v1/dns/domains").await
    }

    /// Register a new DNS domain pointing at `ip`.
    ///
    /// The provider does not return the created domain; success is
    /// determined purely by HTTP status.
    pub async fn create_domain(&self, domain: &str, ip: &str) -> Result<()> {
        #[derive(Serialize)]
        struct CreateDomainBody<'a> {
            domain: &'a str,
            ip: &'a str,
        }

        let body = CreateDomainBody { domain, ip };
        self.post("/v1/dns/domains", &body).await
    }

    /// Delete the domain identified by `id`.
    pub async fn delete_domain(&self, id: &str) -> Result<()> {
        self.delete(&format!("/v1/dns/domains/{id}")).await
    }
}
