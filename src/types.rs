use serde::{Deserialize, Serialize};

/// A registered DNS domain as returned by the domains collection endpoint.
///
/// Both fields are carried verbatim from the wire: `created` is whatever
/// timestamp string the provider emits (`date_created` on the wire) and is
/// not parsed into a date type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsDomain {
    /// The registered domain name.
    pub domain: String,
    /// Creation timestamp, provider-defined format.
    #[serde(rename = "date_created")]
    pub created: String,
}

/// A DNS record within a domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    /// Provider-assigned record id.
    #[serde(rename = "RECORDID")]
    pub id: u64,
    /// Record type string as the provider reports it ("A", "MX", ...).
    #[serde(rename = "type")]
    pub record_type: String,
    /// Record name, relative to the domain.
    pub name: String,
    /// Record value.
    pub data: String,
    /// Record priority. The provider reports `-1` for types without one.
    pub priority: i32,
    /// Time to live in seconds.
    pub ttl: i32,
}

/// Fields for creating or updating a DNS record.
///
/// `priority` and `ttl` are omitted from the request body when `None`,
/// leaving them to the provider's defaults.
#[derive(Debug, Clone, Serialize)]
pub struct NewDnsRecord {
    /// Record name, relative to the domain.
    pub name: String,
    /// Record type string ("A", "CNAME", "MX", ...).
    #[serde(rename = "type")]
    pub record_type: String,
    /// Record value.
    pub data: String,
    /// Record priority, for types that use one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    /// Time to live in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_deserializes_date_created() {
        let json = r#"{"domain": "example.com", "date_created": "2012-11-23 13:37:33"}"#;
        let d: DnsDomain = serde_json::from_str(json).unwrap();
        assert_eq!(d.domain, "example.com");
        assert_eq!(d.created, "2012-11-23 13:37:33");
    }

    #[test]
    fn domain_round_trip_preserves_fields() {
        let original = DnsDomain {
            domain: "example2.com".to_string(),
            created: "2010-11-23 13:37:44".to_string(),
        };
        let json = serde_json::to_string(&original).unwrap();
        assert!(json.contains("\"date_created\":\"2010-11-23 13:37:44\""));
        let back: DnsDomain = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn record_deserializes_wire_names() {
        let json = r#"{
            "RECORDID": 1265277,
            "type": "A",
            "name": "www",
            "data": "127.0.0.1",
            "priority": -1,
            "ttl": 300
        }"#;
        let r: DnsRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.id, 1_265_277);
        assert_eq!(r.record_type, "A");
        assert_eq!(r.name, "www");
        assert_eq!(r.data, "127.0.0.1");
        assert_eq!(r.priority, -1);
        assert_eq!(r.ttl, 300);
    }

    #[test]
    fn new_record_skips_absent_optionals() {
        let r = NewDnsRecord {
            name: "www".to_string(),
            record_type: "A".to_string(),
            data: "1.2.3.4".to_string(),
            priority: None,
            ttl: None,
        };
        let json = serde_json::to_string(&r).unwrap();
        assert!(!json.contains("priority"));
        assert!(!json.contains("ttl"));
        assert!(json.contains("\"type\":\"A\""));
    }

    #[test]
    fn new_record_serializes_optionals_when_set() {
        let r = NewDnsRecord {
            name: "mail".to_string(),
            record_type: "MX".to_string(),
            data: "mx.example.com".to_string(),
            priority: Some(10),
            ttl: Some(600),
        };
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"priority\":10"));
        assert!(json.contains("\"ttl\":600"));
    }
}
