//! Repository Layer - Core Traits
//!
//! Abstract interface over the remote contact store. Each call is a single
//! request/response round trip; nothing is retried.

use async_trait::async_trait;

use crate::error::ContactResult;
use crate::models::{Contact, ContactPatch, NewContact, OrderBy, PhoneNumber};

/// Remote contact operations
///
/// Futures are `?Send`: the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait ContactRepository {
    /// List contacts in backend order (`None` = backend default)
    async fn list_contacts(&self, order_by: Option<OrderBy>) -> ContactResult<Vec<Contact>>;

    /// Fetch a single contact, `NotFound` when absent
    async fn get_contact(&self, id: u32) -> ContactResult<Contact>;

    /// Insert a contact together with its phones
    async fn create_contact(&self, contact: &NewContact) -> ContactResult<Contact>;

    /// Update names of an existing contact
    async fn update_contact(&self, id: u32, patch: &ContactPatch) -> ContactResult<Contact>;

    /// Replace one phone number, addressed by (contact, old number)
    async fn update_phone_number(
        &self,
        contact_id: u32,
        old_number: &str,
        new_number: &str,
    ) -> ContactResult<PhoneNumber>;

    async fn delete_contact(&self, id: u32) -> ContactResult<()>;
}
