use serde::{Deserialize, Serialize};

/// Structured wire form of a customer resource.
///
/// Serializes as JSON like:
///
/// ```json
/// {
///   "serialnumber": 1,
///   "uuid": 12734634,
///   "time-sent": 1639502608151,
///   "customer-id": "1",
///   "customer-name": "Meyer, Eric",
///   "customer-contacts": "eric98@yahoo.com; (030) 7000-640000"
/// }
/// ```
///
/// Outbound values are derived from the entity when the representation is
/// built and carry no authority; the entity in the repository remains the
/// source of truth. Inbound values are untrusted and pass the acceptance
/// rules (see [`rules`](crate::resource::rules)) before an entity is
/// constructed from them, which is why every field is optional here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerRepresentation {
    /// Serial number, incremented process-wide for each representation built.
    /// Not persisted and not part of identity.
    #[serde(rename = "serialnumber", default, skip_serializing_if = "Option::is_none")]
    pub serial: Option<i64>,

    /// Random correlation number used to trace a representation, not for
    /// uniqueness.
    #[serde(rename = "uuid", default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<i64>,

    /// Construction instant in epoch milliseconds.
    #[serde(rename = "time-sent", default, skip_serializing_if = "Option::is_none")]
    pub time_sent: Option<i64>,

    /// Entity id externalized as a string (internally a u64).
    #[serde(rename = "customer-id", default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,

    /// Full name as externalized by the entity: `"last, first"`.
    #[serde(rename = "customer-name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Contacts flattened to a `"; "`-separated string.
    #[serde(rename = "customer-contacts", default, skip_serializing_if = "Option::is_none")]
    pub contacts: Option<String>,
}
