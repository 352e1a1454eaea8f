//! GraphQL Documents
//!
//! Operations against the Hasura-style phonebook schema.

pub const LIST_CONTACTS: &str = r#"
query GetContactList($order_by: [contact_order_by!]) {
  contact(order_by: $order_by) {
    id
    first_name
    last_name
    created_at
    phones {
      number
    }
  }
}"#;

pub const GET_CONTACT: &str = r#"
query GetContactDetail($id: Int!) {
  contact_by_pk(id: $id) {
    id
    first_name
    last_name
    created_at
    phones {
      number
    }
  }
}"#;

pub const CREATE_CONTACT: &str = r#"
mutation AddContactWithPhones($first_name: String!, $last_name: String!, $phones: [phone_insert_input!]!) {
  insert_contact(objects: {first_name: $first_name, last_name: $last_name, phones: {data: $phones}}) {
    returning {
      id
      first_name
      last_name
      created_at
      phones {
        number
      }
    }
  }
}"#;

pub const UPDATE_CONTACT: &str = r#"
mutation EditContactById($id: Int!, $_set: contact_set_input) {
  update_contact_by_pk(pk_columns: {id: $id}, _set: $_set) {
    id
    first_name
    last_name
    created_at
    phones {
      number
    }
  }
}"#;

pub const UPDATE_PHONE_NUMBER: &str = r#"
mutation EditPhoneNumber($pk_columns: phone_pk_columns_input!, $new_phone_number: String!) {
  update_phone_by_pk(pk_columns: $pk_columns, _set: {number: $new_phone_number}) {
    number
  }
}"#;

pub const DELETE_CONTACT: &str = r#"
mutation DeleteContact($id: Int!) {
  delete_contact_by_pk(id: $id) {
    id
  }
}"#;
