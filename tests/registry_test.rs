use chrono::Utc;
use customer_registry::lifecycle::{AdmissionError, BatchStatus, CustomerRegistry};
use customer_registry::repository::CrudRepository;
use customer_registry::resource::{CustomerRepresentation, LooseRecord};
use serde_json::json;

fn representation(id: &str, name: &str, contacts: &str) -> CustomerRepresentation {
    CustomerRepresentation {
        customer_id: Some(id.into()),
        name: Some(name.into()),
        contacts: Some(contacts.into()),
        time_sent: Some(Utc::now().timestamp_millis()),
        ..CustomerRepresentation::default()
    }
}

fn record(value: serde_json::Value) -> LooseRecord {
    value.as_object().expect("not a JSON object").clone()
}

/// Full end-to-end run over the seeded registry: listing, both admission
/// paths and removal working against the same shared store.
#[test]
fn test_full_registry_integration() {
    let registry = CustomerRegistry::in_memory();
    registry.seed().expect("seeding failed");

    // The bootstrap fixture is exactly three customers with ids 1..=3.
    assert_eq!(registry.repository().count().expect("count failed"), 3);
    let eric = registry
        .fetch(1)
        .expect("fetch failed")
        .expect("customer 1 missing");
    assert_eq!(eric.name.as_deref(), Some("Meyer, Eric"));
    assert_eq!(
        eric.contacts.as_deref(),
        Some("eric98@yahoo.com; (030) 7000-640000")
    );

    // Every listed representation externalizes its entity id as a string.
    let mut listed_ids: Vec<String> = registry
        .list()
        .expect("list failed")
        .into_iter()
        .map(|rep| rep.customer_id.expect("id missing"))
        .collect();
    listed_ids.sort();
    assert_eq!(listed_ids, ["1", "2", "3"]);

    // A loose record without an id takes the first free one: 4.
    let report = registry
        .admit_records(&[record(json!({
            "first": "Marie",
            "name": "Curie",
            "contacts": "marie@curie.fr; (030) 1234-5678"
        }))])
        .expect("loose admission failed");
    assert_eq!(report.status, BatchStatus::Created);
    let marie = registry
        .repository()
        .find_by_id(&4)
        .expect("find failed")
        .expect("customer 4 missing");
    assert_eq!(marie.display_name(), "Curie, Marie");
    assert_eq!(marie.contacts(), ["marie@curie.fr", "(030) 1234-5678"]);

    // A structured batch with one taken id reports a conflict and admits
    // the rest.
    let colliding = representation("2", "Impostor, Anne", "impostor@example.org");
    let report = registry
        .admit_representations(&[
            representation("5", "Noether, Emmy", "emmy@example.org"),
            colliding.clone(),
        ])
        .expect("structured admission failed");
    assert_eq!(report.status, BatchStatus::Conflict);
    assert_eq!(report.unaccepted, vec![colliding]);
    assert_eq!(registry.repository().count().expect("count failed"), 5);

    // Removing a seeded customer leaves the rest in place.
    assert!(registry.remove(2).expect("removal failed"));
    assert_eq!(registry.repository().count().expect("count failed"), 4);
    assert!(registry.fetch(2).expect("fetch failed").is_none());
    assert!(registry.fetch(1).expect("fetch failed").is_some());
    assert!(registry.fetch(3).expect("fetch failed").is_some());
}

#[test]
fn test_batch_of_three_fresh_items_is_created() {
    let registry = CustomerRegistry::in_memory();

    let report = registry
        .admit_representations(&[
            representation("1", "Meyer, Eric", "eric98@yahoo.com"),
            representation("2", "Bayer, Anne", "anne24@yahoo.de"),
            representation("3", "Schulz-Mueller, Tim", "tim2346@gmx.de"),
        ])
        .expect("admission failed");

    assert_eq!(report.status, BatchStatus::Created);
    assert!(report.unaccepted.is_empty());
    assert_eq!(registry.repository().count().expect("count failed"), 3);
}

#[test]
fn test_invalid_item_turns_the_batch_into_bad_input() {
    let registry = CustomerRegistry::in_memory();

    let result = registry.admit_representations(&[
        representation("1", "Meyer, Eric", "eric98@yahoo.com"),
        representation("nonsense", "Broken, Item", ""),
    ]);

    assert_eq!(result.unwrap_err(), AdmissionError::Rejected { index: 1 });
}

#[test]
fn test_round_trip_through_the_wire_format() {
    let registry = CustomerRegistry::in_memory();
    registry.seed().expect("seeding failed");

    // Serialize the representation of customer 3 and admit it into a second,
    // empty registry: the entity comes back with the same id, name and
    // contacts.
    let rep = registry
        .fetch(3)
        .expect("fetch failed")
        .expect("customer 3 missing");
    let json = serde_json::to_string(&rep).expect("serialization failed");

    let other = CustomerRegistry::in_memory();
    let decoded: CustomerRepresentation =
        serde_json::from_str(&json).expect("deserialization failed");
    let report = other
        .admit_representations(&[decoded])
        .expect("admission failed");
    assert_eq!(report.status, BatchStatus::Created);

    let tim = other
        .repository()
        .find_by_id(&3)
        .expect("find failed")
        .expect("customer 3 missing");
    assert_eq!(tim.display_name(), "Schulz-Mueller, Tim");
    assert_eq!(tim.contacts(), ["tim2346@gmx.de"]);
}
