use std::hash::{Hash, Hasher};

/// Represents a customer record held by the registry.
///
/// # Identity
/// Identity is carried entirely by `id`: two customers are equal (and hash
/// alike) iff their ids are equal, regardless of name or contacts. The id is
/// fixed at construction and cannot change afterwards.
///
/// # Mutation
/// Name and contacts change only through the explicit setters below, before
/// the record is handed to a repository. No state is shared between records.
#[derive(Debug, Clone)]
pub struct Customer {
    id: u64,
    first_name: String,
    last_name: String,
    contacts: Vec<String>,
}

impl Customer {
    /// Creates a new customer with no contacts.
    pub fn new(id: u64, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            contacts: Vec::new(),
        }
    }

    /// Chainable variant of [`add_contact`](Self::add_contact), handy for
    /// fixtures and seeds.
    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.add_contact(contact);
        self
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Contact strings in insertion order. Duplicates are permitted.
    pub fn contacts(&self) -> &[String] {
        &self.contacts
    }

    /// Full name as externalized on the wire: `"last, first"`.
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }

    pub fn set_name(&mut self, first_name: impl Into<String>, last_name: impl Into<String>) {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
    }

    /// Sets both name parts from a `"last, first"` display form.
    ///
    /// A value without a comma is taken as the last name with an empty first
    /// name.
    pub fn set_display_name(&mut self, name: &str) {
        match name.split_once(',') {
            Some((last, first)) => self.set_name(first.trim(), last.trim()),
            None => self.set_name("", name.trim()),
        }
    }

    /// Appends a contact string (free-form phone or email).
    pub fn add_contact(&mut self, contact: impl Into<String>) {
        self.contacts.push(contact.into());
    }
}

impl crate::repository::StoredEntity for Customer {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }
}

impl PartialEq for Customer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Customer {}

impl Hash for Customer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_considers_only_the_id() {
        let a = Customer::new(7, "Eric", "Meyer").with_contact("eric98@yahoo.com");
        let b = Customer::new(7, "Anne", "Bayer");
        let c = Customer::new(8, "Eric", "Meyer");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn display_name_is_last_comma_first() {
        let customer = Customer::new(1, "Eric", "Meyer");
        assert_eq!(customer.display_name(), "Meyer, Eric");
    }

    #[test]
    fn display_name_round_trips_through_the_setter() {
        let mut customer = Customer::new(1, "", "");
        customer.set_display_name("Schulz-Mueller, Tim");

        assert_eq!(customer.first_name(), "Tim");
        assert_eq!(customer.last_name(), "Schulz-Mueller");
        assert_eq!(customer.display_name(), "Schulz-Mueller, Tim");
    }

    #[test]
    fn display_name_without_comma_becomes_the_last_name() {
        let mut customer = Customer::new(1, "", "");
        customer.set_display_name("Meyer");

        assert_eq!(customer.first_name(), "");
        assert_eq!(customer.last_name(), "Meyer");
    }

    #[test]
    fn contacts_keep_insertion_order_and_duplicates() {
        let mut customer = Customer::new(1, "Eric", "Meyer");
        customer.add_contact("eric98@yahoo.com");
        customer.add_contact("(030) 7000-640000");
        customer.add_contact("eric98@yahoo.com");

        assert_eq!(
            customer.contacts(),
            [
                "eric98@yahoo.com",
                "(030) 7000-640000",
                "eric98@yahoo.com"
            ]
        );
    }
}
