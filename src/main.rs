//! Demo run of the customer registry.
//!
//! Seeds the bootstrap fixture, lists the stored customers as wire
//! representations, admits a mixed batch (one fresh item, one id collision)
//! and removes a customer, narrating each step through `tracing`.

use chrono::Utc;
use customer_registry::lifecycle::tracing::setup_tracing;
use customer_registry::lifecycle::{BatchStatus, CustomerRegistry};
use customer_registry::repository::CrudRepository;
use customer_registry::resource::CustomerRepresentation;
use tracing::{info, warn};

fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting customer registry demo");

    let registry = CustomerRegistry::in_memory();
    registry.seed().map_err(|e| e.to_string())?;

    for rep in registry.list().map_err(|e| e.to_string())? {
        let json = serde_json::to_string(&rep).map_err(|e| e.to_string())?;
        info!(%json, "customer");
    }

    // One fresh customer and one colliding with the seeded id 2.
    let batch = [
        inbound("4", "Curie, Marie", "marie@curie.fr; (030) 1234-5678"),
        inbound("2", "Impostor, Anne", "impostor@example.org"),
    ];
    let report = registry
        .admit_representations(&batch)
        .map_err(|e| e.to_string())?;
    match report.status {
        BatchStatus::Created => info!("batch admitted in full"),
        BatchStatus::Conflict => warn!(
            unaccepted = report.unaccepted.len(),
            "batch admitted with conflicts"
        ),
    }

    let removed = registry.remove(2).map_err(|e| e.to_string())?;
    info!(removed, "delete requested for customer 2");

    let remaining = registry
        .repository()
        .count()
        .map_err(|e| e.to_string())?;
    info!(remaining, "demo finished");
    Ok(())
}

fn inbound(id: &str, name: &str, contacts: &str) -> CustomerRepresentation {
    CustomerRepresentation {
        customer_id: Some(id.into()),
        name: Some(name.into()),
        contacts: Some(contacts.into()),
        time_sent: Some(Utc::now().timestamp_millis()),
        ..CustomerRepresentation::default()
    }
}
