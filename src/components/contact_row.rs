//! Contact Row Component

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Contact;
use crate::routes::Route;

/// One table row: avatar, name, first phone and the row actions.
///
/// Extra numbers are summarised as a `+N` badge.
#[component]
pub fn ContactRow(contact: Contact) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = contact.id;
    let is_favorite = contact.is_favorite;
    let full_name = contact.full_name();
    let avatar = contact.avatar_url();
    let extra_phones = contact.phones.len().saturating_sub(1);
    let first_phone = contact.phones.into_iter().next().map(|p| p.number);

    let (favorite_class, favorite_title, favorite_icon) = if is_favorite {
        ("icon-btn favorite-btn active", "Remove from favorites", "★")
    } else {
        ("icon-btn favorite-btn", "Add to favorites", "☆")
    };

    let toggle_favorite = move |_| {
        if ctx.update_vm(|vm| vm.toggle_favorite(id)).is_none() {
            log::warn!("[APP] Cannot favorite unknown contact #{}", id);
        }
    };

    view! {
        <tr class="contact-row">
            <td class="avatar-cell">
                <img class="avatar" src=avatar alt=full_name.clone() />
            </td>
            <td class="name-cell">{full_name}</td>
            <td class="phone-cell">
                {match first_phone {
                    Some(number) => view! {
                        <span class="phone-number">{number}</span>
                        {(extra_phones > 0).then(|| view! {
                            <span class="phone-badge">{format!("+{}", extra_phones)}</span>
                        })}
                    }.into_any(),
                    None => view! { <span class="muted">"No phone number"</span> }.into_any(),
                }}
            </td>
            <td class="actions-cell">
                <button
                    class=favorite_class
                    title=favorite_title
                    on:click=toggle_favorite
                >
                    {favorite_icon}
                </button>
                <button
                    class="icon-btn edit-btn"
                    title="Edit"
                    on:click=move |_| ctx.navigate(Route::EditContact(id))
                >
                    "✎"
                </button>
                <button
                    class="icon-btn delete-btn"
                    title="Delete"
                    on:click=move |_| {
                        ctx.update_vm(|vm| vm.request_delete(id));
                    }
                >
                    "×"
                </button>
            </td>
        </tr>
    }
}
