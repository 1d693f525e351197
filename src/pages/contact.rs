//! Contact form. Submissions are acknowledged and cleared, never sent.

use leptos::prelude::*;

use crate::components::page_section::PageSection;
use crate::config::CONTACT_ACKNOWLEDGEMENT;
use crate::state::contact::{ContactDraft, ContactField};
use crate::state::router::PageId;
use crate::util::notice::notify;

#[component]
fn ContactInput(field: ContactField, name: &'static str, kind: &'static str, placeholder: &'static str) -> impl IntoView {
    let contact = expect_context::<RwSignal<ContactDraft>>();

    view! {
        <input
            type=kind
            name=name
            placeholder=placeholder
            prop:value=move || contact.with(|d| d.get(field).to_owned())
            on:input=move |ev| contact.update(|d| d.set(field, event_target_value(&ev)))
        />
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let contact = expect_context::<RwSignal<ContactDraft>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let ack = contact.try_update(ContactDraft::submit).unwrap_or(CONTACT_ACKNOWLEDGEMENT);
        notify(ack);
    };

    view! {
        <PageSection page=PageId::Contact>
            <h2 class="section-title">"Contact"</h2>
            <div class="contact-wrapper glass-card">
                <form class="contact-form" novalidate=true on:submit=on_submit>
                    <ContactInput field=ContactField::Name name="name" kind="text" placeholder="Your Name"/>
                    <ContactInput field=ContactField::Email name="email" kind="email" placeholder="Your Email"/>
                    <ContactInput field=ContactField::Subject name="subject" kind="text" placeholder="Subject"/>
                    <textarea
                        name="message"
                        rows="5"
                        placeholder="Your Message"
                        prop:value=move || contact.with(|d| d.message.clone())
                        on:input=move |ev| contact.update(|d| d.set(ContactField::Message, event_target_value(&ev)))
                    ></textarea>
                    <button type="submit" class="btn btn-primary">
                        "Send Message"
                    </button>
                </form>
            </div>
        </PageSection>
    }
}
