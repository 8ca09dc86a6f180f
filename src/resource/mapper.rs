//! Conversion between customer entities and their external forms.
//!
//! Two inbound paths exist and deliberately stay separate: the structured
//! path accepts the wire representation after the full rule chain (ids >= 0
//! are fine there), while the loose key/value path is stricter about
//! explicit ids (> 0, violations are fatal) and can assign the next free id
//! itself. Their contracts differ, so neither is expressed in terms of the
//! other.

use chrono::Utc;
use serde_json::{Map, Value};
use std::sync::atomic::{AtomicI64, Ordering};
use tracing::{debug, warn};

use super::dto::CustomerRepresentation;
use super::rules;
use crate::model::Customer;
use crate::repository::{CrudRepository, RepositoryError};

/// Untyped key/value form of an inbound customer, as decoded from a loose
/// JSON object.
pub type LooseRecord = Map<String, Value>;

/// Outcome of ingesting a [`LooseRecord`].
///
/// A missing required key is a rejection the caller reports as bad input.
/// Argument violations abort processing instead; see [`IngestError`].
#[derive(Debug, Clone, PartialEq)]
pub enum LooseIngest {
    /// The record produced a customer.
    Accepted(Customer),
    /// The named required key was absent.
    MissingField(&'static str),
}

/// Errors that abort loose ingestion rather than rejecting the record.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum IngestError {
    /// An explicit id key must be strictly positive.
    #[error("id must be > 0, got {0}")]
    NonPositiveId(i64),

    /// The id key holds something that is not a number.
    #[error("id key does not hold a number")]
    MalformedId,

    /// The free-id scan found no unassigned id in `1..=bound`.
    #[error("no unassigned id in 1..={0}")]
    IdSpaceExhausted(u64),

    /// The underlying repository failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Builds outbound representations and turns validated inbound ones back
/// into entities.
///
/// The serial counter and the correlation source are owned by the mapper
/// rather than hidden in statics, so tests can start from a known serial or
/// stub the randomness. One mapper instance is meant to serve the whole
/// process; the counter is atomic and increments exactly once per
/// representation built, under concurrent callers included.
pub struct CustomerMapper {
    serial: AtomicI64,
    correlation_source: Box<dyn Fn() -> i64 + Send + Sync>,
}

impl CustomerMapper {
    /// Mapper with the default sources: serial starting at 0 and correlation
    /// ids drawn uniformly from `[10_000_000, 100_000_000)`.
    pub fn new() -> Self {
        Self::with_sources(0, || rand::random_range(10_000_000..100_000_000))
    }

    /// Mapper with an explicit serial start and correlation source.
    pub fn with_sources(
        serial_start: i64,
        correlation_source: impl Fn() -> i64 + Send + Sync + 'static,
    ) -> Self {
        Self {
            serial: AtomicI64::new(serial_start),
            correlation_source: Box::new(correlation_source),
        }
    }

    /// Builds the outbound representation of a customer.
    ///
    /// Serial, correlation id and timestamp are drawn fresh on every call;
    /// two representations of the same entity differ in those fields.
    pub fn to_representation(&self, customer: &Customer) -> CustomerRepresentation {
        CustomerRepresentation {
            serial: Some(self.serial.fetch_add(1, Ordering::SeqCst)),
            correlation_id: Some((self.correlation_source)()),
            time_sent: Some(Utc::now().timestamp_millis()),
            customer_id: Some(customer.id().to_string()),
            name: Some(customer.display_name()),
            contacts: Some(customer.contacts().join("; ")),
        }
    }

    /// Runs the acceptance rules and constructs the entity on a full pass.
    ///
    /// Any rule violation, or an absent contacts field, yields `None`;
    /// rejection handling stays with the caller. Contacts are split on
    /// `';'`, trimmed, empty segments dropped, order preserved.
    pub fn from_representation(&self, rep: &CustomerRepresentation) -> Option<Customer> {
        if !rules::check(rep).is_empty() {
            return None;
        }
        let id: u64 = rep.customer_id.as_deref()?.parse().ok()?;
        let mut customer = Customer::new(id, "", "");
        customer.set_display_name(rep.name.as_deref()?);
        for segment in rep.contacts.as_deref()?.split(';') {
            let contact = segment.trim();
            if !contact.is_empty() {
                customer.add_contact(contact);
            }
        }
        Some(customer)
    }

    /// Ingests one untyped key/value record.
    ///
    /// Requires a `"first"` and a `"name"` key (given name and surname). An
    /// explicit `"id"` must hold a strictly positive number; without one,
    /// ids `1..=count+1` are scanned for the first unassigned value.
    /// Contacts, if present, are split on `';'` when one occurs (otherwise
    /// taken as a single contact), trimmed, empty segments dropped.
    pub fn from_loose_record<R>(
        &self,
        record: &LooseRecord,
        repository: &R,
    ) -> Result<LooseIngest, IngestError>
    where
        R: CrudRepository<Customer>,
    {
        for key in ["name", "first"] {
            if !record.contains_key(key) {
                debug!(key, "loose record lacks required key");
                return Ok(LooseIngest::MissingField(key));
            }
        }

        let id = match record.get("id") {
            Some(value) => {
                let id = integer_value(value).ok_or(IngestError::MalformedId)?;
                if id <= 0 {
                    warn!(id, "loose record carries a non-positive id");
                    return Err(IngestError::NonPositiveId(id));
                }
                id as u64
            }
            None => self.next_free_id(repository)?,
        };

        let mut customer = Customer::new(id, text_value(&record["first"]), text_value(&record["name"]));
        if let Some(value) = record.get("contacts") {
            let raw = text_value(value);
            let raw = raw.trim();
            if raw.contains(';') {
                for segment in raw.split(';') {
                    let contact = segment.trim();
                    if !contact.is_empty() {
                        customer.add_contact(contact);
                    }
                }
            } else if !raw.is_empty() {
                customer.add_contact(raw);
            }
        }
        Ok(LooseIngest::Accepted(customer))
    }

    // First unassigned id in 1..=count+1. At most `count` ids can occupy the
    // range, so an exhausted scan means the store mutated mid-scan; that
    // case surfaces as an error instead of a guessed id.
    fn next_free_id<R>(&self, repository: &R) -> Result<u64, IngestError>
    where
        R: CrudRepository<Customer>,
    {
        let bound = repository.count()? as u64 + 1;
        for candidate in 1..=bound {
            if repository.find_by_id(&candidate)?.is_none() {
                debug!(id = candidate, "assigned next free id");
                return Ok(candidate);
            }
        }
        Err(IngestError::IdSpaceExhausted(bound))
    }
}

impl Default for CustomerMapper {
    fn default() -> Self {
        Self::new()
    }
}

fn integer_value(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|float| float as i64))
}

fn text_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
