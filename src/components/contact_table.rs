//! Contact Table Component

use leptos::prelude::*;

use crate::components::ContactRow;
use crate::models::Contact;

/// Everything a `ContactRow` renders
fn row_key(contact: &Contact) -> (u32, bool, String, String, Vec<String>) {
    (
        contact.id,
        contact.is_favorite,
        contact.first_name.clone(),
        contact.last_name.clone(),
        contact.phones.iter().map(|p| p.number.clone()).collect(),
    )
}

#[component]
pub fn ContactTable(#[prop(into)] contacts: Signal<Vec<Contact>>) -> impl IntoView {
    view! {
        <table class="contact-table">
            <thead>
                <tr>
                    <th class="avatar-col"></th>
                    <th>"Name"</th>
                    <th>"Phone"</th>
                    <th class="actions-col">"Actions"</th>
                </tr>
            </thead>
            <tbody>
                // Rows are not reactive; any rendered change must change the key
                <For
                    each=move || contacts.get()
                    key=row_key
                    children=|contact| view! { <ContactRow contact=contact /> }
                />
            </tbody>
        </table>
    }
}
