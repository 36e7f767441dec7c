//! # dns-domain-client
//!
//! Async client library for a DNS domain management REST API.
//!
//! The provider exposes a small JSON-over-HTTP surface: a domains collection
//! (list, create, delete) and a per-domain records collection (list, create,
//! update, delete). This crate wraps it with typed methods on [`DnsClient`].
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ClientError>`](ClientError). The
//! provider signals failure purely through HTTP status: any non-2xx response
//! becomes [`ClientError::Api`], whose `Display` output is the raw response
//! body, unmodified. Transport failures surface as
//! [`ClientError::Network`] / [`ClientError::Timeout`]. Nothing is retried.
//!
//! ## TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dns_domain_client::DnsClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DnsClient::new("https://api.example-dns.com", "your-api-key");
//!
//!     client.create_domain("example.com", "192.0.2.1").await?;
//!
//!     for domain in client.list_domains().await? {
//!         println!("{} (created {})", domain.domain, domain.created);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod domains;
mod error;
mod http;
mod records;
mod types;
mod utils;

pub use client::DnsClient;
pub use error::{ClientError, Result};
pub use types::{DnsDomain, DnsRecord, NewDnsRecord};
