//! GraphQL Contact Repository
//!
//! `ContactRepository` over GraphQL-on-HTTP using reqwest (browser fetch
//! when compiled to wasm32).

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::queries;
use super::traits::ContactRepository;
use crate::config::AppConfig;
use crate::error::{ContactError, ContactResult};
use crate::models::{Contact, ContactPatch, NewContact, OrderBy, PhoneNumber};

const ADMIN_SECRET_HEADER: &str = "x-hasura-admin-secret";

// ========================
// Wire Types
// ========================

#[derive(Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: Value,
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct GraphqlErrorEntry {
    message: String,
}

impl<T> GraphqlResponse<T> {
    fn into_data(self) -> ContactResult<T> {
        if !self.errors.is_empty() {
            let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
            return Err(ContactError::Backend(messages.join("; ")));
        }
        self.data
            .ok_or_else(|| ContactError::Decode("response has neither data nor errors".into()))
    }
}

/// Parse a response body into its `data` payload
fn decode_response<T: DeserializeOwned>(body: &str) -> ContactResult<T> {
    let envelope: GraphqlResponse<T> = serde_json::from_str(body)?;
    envelope.into_data()
}

#[derive(Deserialize)]
struct ListData {
    contact: Vec<Contact>,
}

#[derive(Deserialize)]
struct GetData {
    contact_by_pk: Option<Contact>,
}

#[derive(Deserialize)]
struct InsertData {
    insert_contact: Returning,
}

#[derive(Deserialize)]
struct Returning {
    returning: Vec<Contact>,
}

#[derive(Deserialize)]
struct UpdateData {
    update_contact_by_pk: Option<Contact>,
}

#[derive(Deserialize)]
struct UpdatePhoneData {
    update_phone_by_pk: Option<PhoneNumber>,
}

#[derive(Deserialize)]
struct DeleteData {
    delete_contact_by_pk: Option<Value>,
}

// ========================
// Repository
// ========================

pub struct GraphqlContactRepository {
    client: reqwest::Client,
    endpoint: String,
    admin_secret: Option<String>,
}

impl GraphqlContactRepository {
    pub fn new(endpoint: impl Into<String>, admin_secret: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            admin_secret,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.graphql_endpoint.clone(), config.admin_secret.clone())
    }

    async fn execute<T: DeserializeOwned>(&self, operation: &str, query: &str, variables: Value) -> ContactResult<T> {
        log::debug!("[GQL] {} -> {}", operation, self.endpoint);

        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&GraphqlRequest { query, variables });
        if let Some(secret) = &self.admin_secret {
            request = request.header(ADMIN_SECRET_HEADER, secret);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("[GQL] {} failed with HTTP {}", operation, status);
            return Err(ContactError::Network(format!("HTTP {}", status)));
        }
        let body = response.text().await?;
        decode_response(&body).inspect_err(|e| log::warn!("[GQL] {}: {}", operation, e))
    }
}

#[async_trait(?Send)]
impl ContactRepository for GraphqlContactRepository {
    async fn list_contacts(&self, order_by: Option<OrderBy>) -> ContactResult<Vec<Contact>> {
        let variables = match order_by {
            Some(order) => json!({ "order_by": order.to_variable() }),
            None => json!({}),
        };
        let data: ListData = self.execute("GetContactList", queries::LIST_CONTACTS, variables).await?;
        Ok(data.contact)
    }

    async fn get_contact(&self, id: u32) -> ContactResult<Contact> {
        let data: GetData = self
            .execute("GetContactDetail", queries::GET_CONTACT, json!({ "id": id }))
            .await?;
        data.contact_by_pk.ok_or(ContactError::NotFound(id))
    }

    async fn create_contact(&self, contact: &NewContact) -> ContactResult<Contact> {
        let variables = serde_json::to_value(contact)?;
        let data: InsertData = self
            .execute("AddContactWithPhones", queries::CREATE_CONTACT, variables)
            .await?;
        data.insert_contact
            .returning
            .into_iter()
            .next()
            .ok_or_else(|| ContactError::Decode("insert returned no rows".into()))
    }

    async fn update_contact(&self, id: u32, patch: &ContactPatch) -> ContactResult<Contact> {
        let variables = json!({ "id": id, "_set": patch });
        let data: UpdateData = self
            .execute("EditContactById", queries::UPDATE_CONTACT, variables)
            .await?;
        data.update_contact_by_pk.ok_or(ContactError::NotFound(id))
    }

    async fn update_phone_number(
        &self,
        contact_id: u32,
        old_number: &str,
        new_number: &str,
    ) -> ContactResult<PhoneNumber> {
        let variables = json!({
            "pk_columns": { "contact_id": contact_id, "number": old_number },
            "new_phone_number": new_number,
        });
        let data: UpdatePhoneData = self
            .execute("EditPhoneNumber", queries::UPDATE_PHONE_NUMBER, variables)
            .await?;
        data.update_phone_by_pk.ok_or(ContactError::NotFound(contact_id))
    }

    async fn delete_contact(&self, id: u32) -> ContactResult<()> {
        let data: DeleteData = self
            .execute("DeleteContact", queries::DELETE_CONTACT, json!({ "id": id }))
            .await?;
        match data.delete_contact_by_pk {
            Some(_) => Ok(()),
            None => Err(ContactError::NotFound(id)),
        }
    }
}
