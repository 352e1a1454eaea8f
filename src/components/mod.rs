//! UI Components
//!
//! Leptos components for the list, add and edit pages.

mod toast_stack;
mod search_bar;
mod refresh_button;
mod pagination;
mod contact_row;
mod contact_table;
mod contact_delete_dialog;
mod contact_form;
mod contact_list;
mod add_contact;
mod edit_contact;

pub use toast_stack::ToastStack;
pub use search_bar::SearchBar;
pub use refresh_button::RefreshButton;
pub use pagination::Pagination;
pub use contact_row::ContactRow;
pub use contact_table::ContactTable;
pub use contact_delete_dialog::ContactDeleteDialog;
pub use contact_form::ContactForm;
pub use contact_list::ContactList;
pub use add_contact::AddContact;
pub use edit_contact::EditContact;
