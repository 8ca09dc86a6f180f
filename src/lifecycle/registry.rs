use tracing::{info, warn};

use super::error::AdmissionError;
use crate::model::Customer;
use crate::repository::{CrudRepository, InMemoryRepository, RepositoryError};
use crate::resource::{CustomerMapper, CustomerRepresentation, LooseIngest, LooseRecord};

/// Outcome class of a batch admission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchStatus {
    /// Every item was admitted.
    Created,
    /// At least one item was turned away because its id was already taken.
    Conflict,
}

/// Result of admitting a batch: the overall status plus the original form
/// of every item that was turned away as a conflict.
#[derive(Debug, PartialEq)]
pub struct BatchReport<I> {
    pub status: BatchStatus,
    pub unaccepted: Vec<I>,
}

/// The customer system: one shared repository and one mapper, wired
/// together with the admission policy the transport layer relies on.
///
/// # Architecture
///
/// `CustomerRegistry` is responsible for:
/// - **Bootstrap seeding**: inserting the fixture customers at process start
/// - **Listing and lookup**: entities out, fresh representations back
/// - **Batch admission**: both inbound paths, with conflict collection
/// - **Removal**: delete-if-present with an existence report
///
/// It is generic over the repository so a persistent store can slot in
/// without touching the admission policy.
pub struct CustomerRegistry<R: CrudRepository<Customer>> {
    repository: R,
    mapper: CustomerMapper,
}

impl CustomerRegistry<InMemoryRepository<Customer>> {
    /// Registry over a fresh in-memory store with default mapper sources.
    pub fn in_memory() -> Self {
        Self::new(InMemoryRepository::new(), CustomerMapper::new())
    }
}

impl<R: CrudRepository<Customer>> CustomerRegistry<R> {
    pub fn new(repository: R, mapper: CustomerMapper) -> Self {
        Self { repository, mapper }
    }

    /// Direct access to the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Inserts the bootstrap customers (ids 1 through 3).
    pub fn seed(&self) -> Result<(), RepositoryError> {
        self.repository.save(
            Customer::new(1, "Eric", "Meyer")
                .with_contact("eric98@yahoo.com")
                .with_contact("(030) 7000-640000"),
        )?;
        self.repository.save(
            Customer::new(2, "Anne", "Bayer")
                .with_contact("anne24@yahoo.de")
                .with_contact("(030) 3481-23352"),
        )?;
        self.repository
            .save(Customer::new(3, "Tim", "Schulz-Mueller").with_contact("tim2346@gmx.de"))?;
        info!(count = self.repository.count()?, "customer registry seeded");
        Ok(())
    }

    /// One representation per stored customer. Order is unspecified; serial,
    /// correlation id and timestamp are fresh on every call.
    pub fn list(&self) -> Result<Vec<CustomerRepresentation>, RepositoryError> {
        Ok(self
            .repository
            .find_all()?
            .iter()
            .map(|customer| self.mapper.to_representation(customer))
            .collect())
    }

    /// The representation of one customer, if present.
    pub fn fetch(&self, id: u64) -> Result<Option<CustomerRepresentation>, RepositoryError> {
        Ok(self
            .repository
            .find_by_id(&id)?
            .map(|customer| self.mapper.to_representation(&customer)))
    }

    /// Admits a batch of structured representations, in order.
    ///
    /// A representation that fails the acceptance rules aborts the batch;
    /// items admitted before the failing one stay admitted. An item whose id
    /// is already taken is collected as unaccepted instead of inserted.
    pub fn admit_representations(
        &self,
        reps: &[CustomerRepresentation],
    ) -> Result<BatchReport<CustomerRepresentation>, AdmissionError> {
        let mut unaccepted = Vec::new();
        for (index, rep) in reps.iter().enumerate() {
            let Some(customer) = self.mapper.from_representation(rep) else {
                warn!(index, "batch aborted by invalid representation");
                return Err(AdmissionError::Rejected { index });
            };
            self.admit(customer, || rep.clone(), &mut unaccepted)?;
        }
        Ok(Self::report(unaccepted))
    }

    /// Admits a batch of loose key/value records, in order.
    ///
    /// Same policy as [`admit_representations`](Self::admit_representations);
    /// a record lacking a required key aborts the batch, and fatal ingestion
    /// errors propagate.
    pub fn admit_records(
        &self,
        records: &[LooseRecord],
    ) -> Result<BatchReport<LooseRecord>, AdmissionError> {
        let mut unaccepted = Vec::new();
        for (index, record) in records.iter().enumerate() {
            match self.mapper.from_loose_record(record, &self.repository)? {
                LooseIngest::Accepted(customer) => {
                    self.admit(customer, || record.clone(), &mut unaccepted)?;
                }
                LooseIngest::MissingField(field) => {
                    warn!(index, field, "batch aborted by incomplete record");
                    return Err(AdmissionError::MissingField { index, field });
                }
            }
        }
        Ok(Self::report(unaccepted))
    }

    /// Deletes the customer if present, reporting whether it existed.
    pub fn remove(&self, id: u64) -> Result<bool, RepositoryError> {
        if self.repository.find_by_id(&id)?.is_some() {
            self.repository.delete_by_id(&id)?;
            info!(id, "customer deleted");
            Ok(true)
        } else {
            warn!(id, "no customer with this id");
            Ok(false)
        }
    }

    fn admit<I>(
        &self,
        customer: Customer,
        original: impl FnOnce() -> I,
        unaccepted: &mut Vec<I>,
    ) -> Result<(), RepositoryError> {
        let id = customer.id();
        if self.repository.find_by_id(&id)?.is_some() {
            warn!(id, "id already taken, item not accepted");
            unaccepted.push(original());
        } else {
            self.repository.save(customer)?;
        }
        Ok(())
    }

    fn report<I>(unaccepted: Vec<I>) -> BatchReport<I> {
        let status = if unaccepted.is_empty() {
            BatchStatus::Created
        } else {
            BatchStatus::Conflict
        };
        BatchReport { status, unaccepted }
    }
}
