//! In-memory repository for view-model tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use tokio::sync::oneshot;

use super::traits::ContactRepository;
use crate::error::{ContactError, ContactResult};
use crate::models::{Contact, ContactPatch, NewContact, OrderBy, PhoneNumber};

pub fn make_contact(id: u32, first_name: &str, last_name: &str, phones: &[&str]) -> Contact {
    Contact {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        phones: phones.iter().map(|p| PhoneNumber::new(*p)).collect(),
        is_favorite: false,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(id as i64),
    }
}

#[derive(Default)]
pub struct FakeRepository {
    pub contacts: RefCell<Vec<Contact>>,
    pub list_calls: Cell<usize>,
    pub create_calls: Cell<usize>,
    pub phone_updates: RefCell<Vec<(u32, String, String)>>,
    /// When set, every call fails with this network error
    pub offline: Cell<bool>,
    /// Phone updates to these new numbers are rejected by the backend
    pub rejected_numbers: RefCell<Vec<String>>,
    /// Pending list responses, consumed in call order before `contacts`
    gates: RefCell<VecDeque<oneshot::Receiver<Vec<Contact>>>>,
    next_id: Cell<u32>,
}

impl FakeRepository {
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        let next_id = contacts.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let repo = Self::default();
        *repo.contacts.borrow_mut() = contacts;
        repo.next_id.set(next_id);
        repo
    }

    /// Hold the next `list_contacts` call until the sender fires
    pub fn gate_next_list(&self) -> oneshot::Sender<Vec<Contact>> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().push_back(rx);
        tx
    }

    fn check_online(&self) -> ContactResult<()> {
        if self.offline.get() {
            Err(ContactError::Network("connection refused".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait(?Send)]
impl ContactRepository for FakeRepository {
    async fn list_contacts(&self, order_by: Option<OrderBy>) -> ContactResult<Vec<Contact>> {
        self.list_calls.set(self.list_calls.get() + 1);
        let gate = self.gates.borrow_mut().pop_front();
        if let Some(gate) = gate {
            return gate
                .await
                .map_err(|_| ContactError::Network("request dropped".into()));
        }
        self.check_online()?;

        let mut contacts = self.contacts.borrow().clone();
        if order_by == Some(OrderBy::CreatedAtDesc) {
            contacts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
        Ok(contacts)
    }

    async fn get_contact(&self, id: u32) -> ContactResult<Contact> {
        self.check_online()?;
        self.contacts
            .borrow()
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(ContactError::NotFound(id))
    }

    async fn create_contact(&self, contact: &NewContact) -> ContactResult<Contact> {
        self.check_online()?;
        self.create_calls.set(self.create_calls.get() + 1);
        let id = self.next_id.get().max(1);
        self.next_id.set(id + 1);

        let created = Contact {
            id,
            first_name: contact.first_name.clone(),
            last_name: contact.last_name.clone(),
            phones: contact.phones.clone(),
            is_favorite: false,
            created_at: Utc::now(),
        };
        self.contacts.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update_contact(&self, id: u32, patch: &ContactPatch) -> ContactResult<Contact> {
        self.check_online()?;
        let mut contacts = self.contacts.borrow_mut();
        let contact = contacts
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(ContactError::NotFound(id))?;
        contact.first_name = patch.first_name.clone();
        contact.last_name = patch.last_name.clone();
        Ok(contact.clone())
    }

    async fn update_phone_number(
        &self,
        contact_id: u32,
        old_number: &str,
        new_number: &str,
    ) -> ContactResult<PhoneNumber> {
        self.check_online()?;
        if self.rejected_numbers.borrow().iter().any(|n| n == new_number) {
            return Err(ContactError::Backend(format!("phone {} rejected", new_number)));
        }
        let mut contacts = self.contacts.borrow_mut();
        let phone = contacts
            .iter_mut()
            .find(|c| c.id == contact_id)
            .and_then(|c| c.phones.iter_mut().find(|p| p.number == old_number))
            .ok_or(ContactError::NotFound(contact_id))?;
        phone.number = new_number.to_string();
        self.phone_updates
            .borrow_mut()
            .push((contact_id, old_number.to_string(), new_number.to_string()));
        Ok(phone.clone())
    }

    async fn delete_contact(&self, id: u32) -> ContactResult<()> {
        self.check_online()?;
        let mut contacts = self.contacts.borrow_mut();
        let before = contacts.len();
        contacts.retain(|c| c.id != id);
        if contacts.len() == before {
            Err(ContactError::NotFound(id))
        } else {
            Ok(())
        }
    }
}
