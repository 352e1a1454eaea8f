//! Contact List View-Model
//!
//! Owns the contact list state behind the UI: loads it from the cache or
//! the backend, derives the filtered/paginated/favorite-annotated views,
//! and runs the mutations (favorite, delete, create, edit).
//!
//! State lives in a `RefCell`; borrows are never held across an `.await`.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashSet};

use crate::cache::CacheStore;
use crate::error::{ContactError, ContactResult};
use crate::models::{Contact, OrderBy};
use crate::repository::ContactRepository;
use crate::validation::ContactDraft;

/// Where `initialize`/`refresh` got their data from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Cache,
    Network,
    /// A newer fetch was issued before this one completed; result dropped
    Superseded,
}

// ========================
// Pure Helpers
// ========================

/// Whether a contact matches a lowercased search needle
fn matches_query(contact: &Contact, needle: &str) -> bool {
    contact.first_name.to_lowercase().contains(needle)
        || contact.last_name.to_lowercase().contains(needle)
        || contact.phones.iter().any(|p| p.number.contains(needle))
}

/// Contacts matching `query` by name (case-insensitive) or phone number.
/// A blank query matches everything. Order is preserved.
pub fn filter_contacts<'a>(contacts: &'a [Contact], query: &str) -> Vec<&'a Contact> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return contacts.iter().collect();
    }
    contacts.iter().filter(|c| matches_query(c, &needle)).collect()
}

/// Slice `[(page-1)*page_size, page*page_size)`; empty when out of range
pub fn paginate<T>(list: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= list.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(list.len());
    &list[start..end]
}

/// Number of pages needed for `len` items
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        len.div_ceil(page_size)
    }
}

// ========================
// State
// ========================

/// Local change made while a list fetch was in flight
#[derive(Debug, Clone)]
enum LocalEdit {
    Created(Contact),
    Updated(Contact),
    Removed(u32),
}

/// Replay local edits onto a freshly fetched list that predates them
fn apply_edits(mut contacts: Vec<Contact>, edits: Vec<LocalEdit>) -> Vec<Contact> {
    for edit in edits {
        match edit {
            LocalEdit::Created(contact) => {
                if !contacts.iter().any(|c| c.id == contact.id) {
                    contacts.insert(0, contact);
                }
            }
            LocalEdit::Updated(contact) => {
                if let Some(slot) = contacts.iter_mut().find(|c| c.id == contact.id) {
                    *slot = contact;
                }
            }
            LocalEdit::Removed(id) => contacts.retain(|c| c.id != id),
        }
    }
    contacts
}

#[derive(Debug)]
struct ListState {
    /// Contacts in backend order; `is_favorite` is always false here
    contacts: Vec<Contact>,
    favorites: BTreeSet<u32>,
    search_query: String,
    page: usize,
    favorite_page: usize,
    pending_delete: Option<u32>,
    latest_request: u64,
    fetching: bool,
    edits_during_fetch: Vec<LocalEdit>,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            contacts: Vec::new(),
            favorites: BTreeSet::new(),
            search_query: String::new(),
            page: 1,
            favorite_page: 1,
            pending_delete: None,
            latest_request: 0,
            fetching: false,
            edits_during_fetch: Vec::new(),
        }
    }
}

impl ListState {
    /// Edits made before this point are already visible to the backend
    fn begin_request(&mut self) -> u64 {
        self.latest_request += 1;
        self.fetching = true;
        self.edits_during_fetch.clear();
        self.latest_request
    }

    /// Called once the latest fetch settled; hands back the edits to replay
    fn finish_request(&mut self) -> Vec<LocalEdit> {
        self.fetching = false;
        std::mem::take(&mut self.edits_during_fetch)
    }

    fn record_edit(&mut self, edit: LocalEdit) {
        if self.fetching {
            self.edits_during_fetch.push(edit);
        }
    }

    fn is_latest(&self, ticket: u64) -> bool {
        ticket == self.latest_request
    }

    /// Install a new list. Embedded favorite flags (older snapshots) are
    /// folded into the favorites set, then orphaned favorites are dropped.
    fn replace_contacts(&mut self, mut contacts: Vec<Contact>) {
        for contact in contacts.iter_mut() {
            if contact.is_favorite {
                self.favorites.insert(contact.id);
                contact.is_favorite = false;
            }
        }
        self.contacts = contacts;
        self.prune_favorites();
    }

    fn prune_favorites(&mut self) {
        let known: HashSet<u32> = self.contacts.iter().map(|c| c.id).collect();
        let before = self.favorites.len();
        self.favorites.retain(|id| known.contains(id));
        if self.favorites.len() != before {
            log::debug!("[VM] Dropped {} orphaned favorites", before - self.favorites.len());
        }
    }

    fn contains(&self, id: u32) -> bool {
        self.contacts.iter().any(|c| c.id == id)
    }

    fn annotate(&self, contact: &Contact) -> Contact {
        let mut contact = contact.clone();
        contact.is_favorite = self.favorites.contains(&contact.id);
        contact
    }

    fn filtered(&self) -> Vec<Contact> {
        filter_contacts(&self.contacts, &self.search_query)
            .into_iter()
            .map(|c| self.annotate(c))
            .collect()
    }

    fn filtered_favorites(&self) -> Vec<Contact> {
        self.filtered().into_iter().filter(|c| c.is_favorite).collect()
    }

    /// Pull pages back inside the list after it shrank
    fn clamp_pages(&mut self, page_size: usize) {
        let pages = page_count(self.filtered().len(), page_size).max(1);
        let favorite_pages = page_count(self.filtered_favorites().len(), page_size).max(1);
        self.page = self.page.min(pages);
        self.favorite_page = self.favorite_page.min(favorite_pages);
    }
}

// ========================
// View-Model
// ========================

pub struct ContactListViewModel<R, C> {
    repo: R,
    cache: C,
    page_size: usize,
    state: RefCell<ListState>,
}

impl<R: ContactRepository, C: CacheStore> ContactListViewModel<R, C> {
    pub fn new(repo: R, cache: C, page_size: usize) -> Self {
        Self {
            repo,
            cache,
            page_size: page_size.max(1),
            state: RefCell::new(ListState::default()),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    // ---------- loading ----------

    /// Load from the cache, falling back to the backend when it is empty
    pub async fn initialize(&self) -> ContactResult<LoadSource> {
        let favorites = self.cache.load_favorite_ids();
        let snapshot = self.cache.load_snapshot();

        if snapshot.is_empty() {
            log::info!("[VM] Cache empty, fetching contacts");
            self.state.borrow_mut().favorites = favorites;
            return self.fetch(false).await;
        }

        let had_embedded_flags = snapshot.iter().any(|c| c.is_favorite);
        let mut state = self.state.borrow_mut();
        let before = favorites.clone();
        state.favorites = favorites;
        state.replace_contacts(snapshot);
        if state.favorites != before {
            self.cache.save_favorite_ids(&state.favorites);
        }
        if had_embedded_flags {
            self.cache.save_snapshot(&state.contacts);
        }
        log::info!("[VM] Loaded {} contacts from cache", state.contacts.len());
        Ok(LoadSource::Cache)
    }

    /// Re-fetch from the backend, then rebuild the cache from the result
    pub async fn refresh(&self) -> ContactResult<LoadSource> {
        log::info!("[VM] Refreshing contacts");
        self.fetch(true).await
    }

    async fn fetch(&self, clear_cache: bool) -> ContactResult<LoadSource> {
        let ticket = self.state.borrow_mut().begin_request();
        let result = self.repo.list_contacts(Some(OrderBy::CreatedAtDesc)).await;

        let mut state = self.state.borrow_mut();
        if !state.is_latest(ticket) {
            log::debug!(
                "[VM] Discarding response #{} (latest is #{})",
                ticket,
                state.latest_request
            );
            return Ok(LoadSource::Superseded);
        }
        let edits = state.finish_request();
        let contacts = result?;
        if !edits.is_empty() {
            log::debug!("[VM] Replaying {} local edits onto fetched list", edits.len());
        }
        state.replace_contacts(apply_edits(contacts, edits));
        state.clamp_pages(self.page_size);

        if clear_cache {
            self.cache.clear();
        }
        self.cache.save_snapshot(&state.contacts);
        self.cache.save_favorite_ids(&state.favorites);
        log::info!("[VM] Fetched {} contacts", state.contacts.len());
        Ok(LoadSource::Network)
    }

    // ---------- reads ----------

    /// All contacts, favorite flags applied
    pub fn contacts(&self) -> Vec<Contact> {
        let state = self.state.borrow();
        state.contacts.iter().map(|c| state.annotate(c)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().contacts.is_empty()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn search_query(&self) -> String {
        self.state.borrow().search_query.clone()
    }

    /// Update the query and jump back to the first page of both lists
    pub fn set_search_query(&self, query: impl Into<String>) {
        let mut state = self.state.borrow_mut();
        state.search_query = query.into();
        state.page = 1;
        state.favorite_page = 1;
    }

    pub fn filtered_contacts(&self) -> Vec<Contact> {
        self.state.borrow().filtered()
    }

    /// Favorites among the filtered contacts
    pub fn favorite_contacts(&self) -> Vec<Contact> {
        self.state.borrow().filtered_favorites()
    }

    pub fn page(&self) -> usize {
        self.state.borrow().page
    }

    pub fn favorite_page(&self) -> usize {
        self.state.borrow().favorite_page
    }

    pub fn set_page(&self, page: usize) {
        self.state.borrow_mut().page = page.max(1);
    }

    pub fn set_favorite_page(&self, page: usize) {
        self.state.borrow_mut().favorite_page = page.max(1);
    }

    pub fn page_of_contacts(&self) -> Vec<Contact> {
        let filtered = self.filtered_contacts();
        paginate(&filtered, self.page(), self.page_size).to_vec()
    }

    pub fn favorite_page_of_contacts(&self) -> Vec<Contact> {
        let favorites = self.favorite_contacts();
        paginate(&favorites, self.favorite_page(), self.page_size).to_vec()
    }

    pub fn total_pages(&self) -> usize {
        page_count(self.filtered_contacts().len(), self.page_size)
    }

    pub fn favorite_total_pages(&self) -> usize {
        page_count(self.favorite_contacts().len(), self.page_size)
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        self.state.borrow().favorites.contains(&id)
    }

    // ---------- favorites ----------

    /// Flip the favorite flag. Returns the new flag, or `None` for an
    /// unknown id.
    pub fn toggle_favorite(&self, id: u32) -> Option<bool> {
        let mut state = self.state.borrow_mut();
        if !state.contains(id) {
            log::debug!("[VM] toggle_favorite: unknown contact #{}", id);
            return None;
        }
        let now_favorite = if state.favorites.remove(&id) {
            false
        } else {
            state.favorites.insert(id);
            true
        };
        state.clamp_pages(self.page_size);
        self.cache.save_favorite_ids(&state.favorites);
        Some(now_favorite)
    }

    // ---------- deletion ----------

    /// Mark a contact for deletion. Returns false for an unknown id.
    pub fn request_delete(&self, id: u32) -> bool {
        let mut state = self.state.borrow_mut();
        if !state.contains(id) {
            return false;
        }
        state.pending_delete = Some(id);
        true
    }

    pub fn cancel_delete(&self) {
        self.state.borrow_mut().pending_delete = None;
    }

    pub fn pending_delete(&self) -> Option<u32> {
        self.state.borrow().pending_delete
    }

    pub fn pending_delete_contact(&self) -> Option<Contact> {
        let state = self.state.borrow();
        let id = state.pending_delete?;
        state.contacts.iter().find(|c| c.id == id).map(|c| state.annotate(c))
    }

    /// Delete the pending contact on the backend, then drop it locally.
    /// On failure the request stays pending so it can be retried.
    pub async fn confirm_delete(&self, id: u32) -> ContactResult<()> {
        if self.pending_delete() != Some(id) {
            return Err(ContactError::NoPendingDelete(id));
        }

        match self.repo.delete_contact(id).await {
            Ok(()) => {
                self.remove_local(id);
                log::info!("[VM] Deleted contact #{}", id);
                Ok(())
            }
            Err(ContactError::NotFound(missing)) => {
                // Already gone on the backend
                self.remove_local(id);
                Err(ContactError::NotFound(missing))
            }
            Err(e) => {
                log::warn!("[VM] Delete of #{} failed: {}", id, e);
                Err(e)
            }
        }
    }

    fn remove_local(&self, id: u32) {
        let mut state = self.state.borrow_mut();
        state.contacts.retain(|c| c.id != id);
        state.record_edit(LocalEdit::Removed(id));
        state.favorites.remove(&id);
        if state.pending_delete == Some(id) {
            state.pending_delete = None;
        }
        state.clamp_pages(self.page_size);
        self.cache.save_snapshot(&state.contacts);
        self.cache.save_favorite_ids(&state.favorites);
    }

    // ---------- detail / create / edit ----------

    /// Fetch one contact straight from the backend
    pub async fn load_contact(&self, id: u32) -> ContactResult<Contact> {
        let contact = self.repo.get_contact(id).await?;
        Ok(self.state.borrow().annotate(&contact))
    }

    /// Validate, check for a duplicate first name, create, and prepend.
    ///
    /// The duplicate check is a separate read before the insert, so two
    /// clients racing can still both succeed.
    pub async fn create_contact(&self, draft: &ContactDraft) -> ContactResult<Contact> {
        draft.validate()?;

        let existing = self.repo.list_contacts(None).await?;
        if existing
            .iter()
            .any(|c| c.first_name.eq_ignore_ascii_case(&draft.first_name))
        {
            return Err(ContactError::DuplicateName(draft.first_name.clone()));
        }

        let created = self.repo.create_contact(&draft.to_new_contact()).await?;
        log::info!("[VM] Created contact #{}", created.id);

        let mut state = self.state.borrow_mut();
        state.contacts.retain(|c| c.id != created.id);
        let local = Contact { is_favorite: false, ..created.clone() };
        state.contacts.insert(0, local.clone());
        state.record_edit(LocalEdit::Created(local));
        self.cache.save_snapshot(&state.contacts);
        Ok(created)
    }

    /// Save names, then each changed phone number (matched by position).
    /// Whatever succeeded is applied locally even if a later step fails.
    pub async fn update_contact(&self, original: &Contact, draft: &ContactDraft) -> ContactResult<Contact> {
        draft.validate()?;
        let id = original.id;

        let mut updated = self.repo.update_contact(id, &draft.to_patch()).await?;

        let mut phones = original.phones.clone();
        let mut failure = None;
        for (index, new_number) in draft.phones.iter().enumerate().take(phones.len()) {
            if phones[index].number == *new_number {
                continue;
            }
            let result = self.repo.update_phone_number(id, &phones[index].number, new_number).await;
            match result {
                Ok(phone) => phones[index] = phone,
                Err(e) => {
                    failure = Some(e);
                    break;
                }
            }
        }
        updated.phones = phones;
        updated.is_favorite = false;

        let mut state = self.state.borrow_mut();
        if let Some(slot) = state.contacts.iter_mut().find(|c| c.id == id) {
            *slot = updated.clone();
            self.cache.save_snapshot(&state.contacts);
        }
        state.record_edit(LocalEdit::Updated(updated.clone()));
        match failure {
            Some(e) => Err(e),
            None => {
                log::info!("[VM] Updated contact #{}", id);
                Ok(state.annotate(&updated))
            }
        }
    }
}
