//! Acceptance rules for inbound customer representations.
//!
//! The chain is fixed and ordered. Every rule runs even after an earlier
//! failure, so a bad representation reports each of its problems exactly
//! once. Rules are pure predicates over the current field values and never
//! mutate the representation.

use chrono::Utc;
use std::fmt;
use tracing::warn;

use super::dto::CustomerRepresentation;

/// Lower bound for acceptable timestamps: 2021-01-01T00:00:00Z in epoch
/// milliseconds. The upper bound is the wall clock at check time.
pub const TIME_SENT_FLOOR_MS: i64 = 1_609_459_200_000;

/// The individual checks of the acceptance chain, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `customer-id` must be present and parse as an integer >= 0.
    Id,
    /// `serialnumber`, if present, must be >= 0.
    Serial,
    /// `uuid`, if present, must be >= 0.
    CorrelationId,
    /// `time-sent` must be present and within the acceptance window.
    TimeSent,
    /// `customer-name` must be present and non-empty.
    Name,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rule::Id => "id",
            Rule::Serial => "serial",
            Rule::CorrelationId => "correlation id",
            Rule::TimeSent => "time-sent",
            Rule::Name => "name",
        };
        f.write_str(name)
    }
}

/// A single failed rule together with a human-readable reason naming the
/// offending value.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub rule: Rule,
    pub reason: String,
}

impl Violation {
    fn new(rule: Rule, reason: impl Into<String>) -> Self {
        Self {
            rule,
            reason: reason.into(),
        }
    }
}

/// Runs the full chain and returns every violation, in rule order.
///
/// An empty result means acceptance. Each failing rule also emits a `warn!`
/// diagnostic so rejections are visible without inspecting the return value.
pub fn check(rep: &CustomerRepresentation) -> Vec<Violation> {
    let checks: [fn(&CustomerRepresentation) -> Option<Violation>; 5] = [
        check_id,
        check_serial,
        check_correlation_id,
        check_time_sent,
        check_name,
    ];
    let mut violations = Vec::new();
    for rule_check in checks {
        if let Some(violation) = rule_check(rep) {
            warn!(rule = %violation.rule, reason = %violation.reason, "invalid representation rejected");
            violations.push(violation);
        }
    }
    violations
}

fn check_id(rep: &CustomerRepresentation) -> Option<Violation> {
    let raw = match rep.customer_id.as_deref() {
        Some(raw) => raw,
        None => return Some(Violation::new(Rule::Id, "id missing")),
    };
    match raw.parse::<i64>() {
        Ok(id) if id >= 0 => None,
        Ok(id) => Some(Violation::new(
            Rule::Id,
            format!("value out of range: 0 <= {id} <= {}", i64::MAX),
        )),
        Err(_) => Some(Violation::new(
            Rule::Id,
            format!("\"{raw}\" does not parse as an integer"),
        )),
    }
}

fn check_serial(rep: &CustomerRepresentation) -> Option<Violation> {
    match rep.serial {
        Some(serial) if serial < 0 => Some(Violation::new(
            Rule::Serial,
            format!("value out of range: 0 <= {serial} <= {}", i64::MAX),
        )),
        _ => None,
    }
}

fn check_correlation_id(rep: &CustomerRepresentation) -> Option<Violation> {
    match rep.correlation_id {
        Some(correlation_id) if correlation_id < 0 => Some(Violation::new(
            Rule::CorrelationId,
            format!("value out of range: 0 <= {correlation_id} <= {}", i64::MAX),
        )),
        _ => None,
    }
}

fn check_time_sent(rep: &CustomerRepresentation) -> Option<Violation> {
    let now = Utc::now().timestamp_millis();
    match rep.time_sent {
        None => Some(Violation::new(Rule::TimeSent, "timestamp missing")),
        Some(time_sent) if time_sent < TIME_SENT_FLOOR_MS || time_sent > now => {
            Some(Violation::new(
                Rule::TimeSent,
                format!("value out of range: {TIME_SENT_FLOOR_MS} <= {time_sent} <= {now}"),
            ))
        }
        Some(_) => None,
    }
}

fn check_name(rep: &CustomerRepresentation) -> Option<Violation> {
    match rep.name.as_deref() {
        Some(name) if !name.is_empty() => None,
        _ => Some(Violation::new(Rule::Name, "name missing or empty")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> CustomerRepresentation {
        CustomerRepresentation {
            customer_id: Some("1".into()),
            name: Some("Meyer, Eric".into()),
            contacts: Some("eric98@yahoo.com".into()),
            time_sent: Some(Utc::now().timestamp_millis()),
            ..CustomerRepresentation::default()
        }
    }

    fn failed_rules(rep: &CustomerRepresentation) -> Vec<Rule> {
        check(rep).into_iter().map(|v| v.rule).collect()
    }

    #[test]
    fn a_valid_representation_passes_every_rule() {
        assert!(check(&valid()).is_empty());
    }

    #[test]
    fn id_zero_is_accepted() {
        let mut rep = valid();
        rep.customer_id = Some("0".into());
        assert!(check(&rep).is_empty());
    }

    #[test]
    fn negative_id_fails_the_id_rule() {
        let mut rep = valid();
        rep.customer_id = Some("-1".into());
        assert_eq!(failed_rules(&rep), [Rule::Id]);
    }

    #[test]
    fn unparseable_id_fails_the_id_rule() {
        let mut rep = valid();
        rep.customer_id = Some("seven".into());
        assert_eq!(failed_rules(&rep), [Rule::Id]);
    }

    #[test]
    fn missing_id_fails_the_id_rule() {
        let mut rep = valid();
        rep.customer_id = None;
        assert_eq!(failed_rules(&rep), [Rule::Id]);
    }

    #[test]
    fn absent_serial_and_correlation_id_are_valid() {
        let rep = valid();
        assert_eq!(rep.serial, None);
        assert_eq!(rep.correlation_id, None);
        assert!(check(&rep).is_empty());
    }

    #[test]
    fn negative_serial_and_correlation_id_fail_their_rules() {
        let mut rep = valid();
        rep.serial = Some(-1);
        rep.correlation_id = Some(-42);
        assert_eq!(failed_rules(&rep), [Rule::Serial, Rule::CorrelationId]);
    }

    #[test]
    fn timestamp_before_the_floor_fails() {
        let mut rep = valid();
        rep.time_sent = Some(TIME_SENT_FLOOR_MS - 1);
        assert_eq!(failed_rules(&rep), [Rule::TimeSent]);
    }

    #[test]
    fn timestamp_in_the_future_fails() {
        let mut rep = valid();
        rep.time_sent = Some(Utc::now().timestamp_millis() + 60_000);
        assert_eq!(failed_rules(&rep), [Rule::TimeSent]);
    }

    #[test]
    fn timestamp_at_the_floor_is_accepted() {
        let mut rep = valid();
        rep.time_sent = Some(TIME_SENT_FLOOR_MS);
        assert!(check(&rep).is_empty());
    }

    #[test]
    fn empty_name_fails_the_name_rule() {
        let mut rep = valid();
        rep.name = Some(String::new());
        assert_eq!(failed_rules(&rep), [Rule::Name]);
    }

    #[test]
    fn every_violation_is_collected_in_rule_order() {
        let rep = CustomerRepresentation {
            customer_id: Some("-3".into()),
            serial: Some(-1),
            time_sent: Some(0),
            name: None,
            ..CustomerRepresentation::default()
        };
        assert_eq!(
            failed_rules(&rep),
            [Rule::Id, Rule::Serial, Rule::TimeSent, Rule::Name]
        );
    }
}
