//! Contact form section.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validates locally with `ContactForm::validate`, posts through
//! `net::api::submit_contact`, and shows a status banner that clears itself
//! after a few seconds. The server re-validates and owns rate limiting.

use leptos::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::card::Card;
use crate::components::field::{Input, Textarea};
use crate::components::rating_modal::RatingModal;
use crate::components::reveal::Reveal;
use crate::net::api::submit_contact;
use crate::util::contact_form::{ContactField, ContactForm, FieldErrors, MAX_RATING, MESSAGE_LEN};

#[cfg(feature = "hydrate")]
const STATUS_CLEAR_MS: u32 = 5_000;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent(String),
    Failed(String),
}

impl SubmitStatus {
    #[must_use]
    pub fn is_sending(&self) -> bool {
        matches!(self, Self::Sending)
    }

    /// `(css modifier, text)` for the banner, if one should show.
    #[must_use]
    pub fn banner(&self) -> Option<(&'static str, String)> {
        match self {
            Self::Idle | Self::Sending => None,
            Self::Sent(msg) => Some(("status-banner--success", format!("✅ {msg}"))),
            Self::Failed(msg) => Some(("status-banner--error", format!("❌ {msg}"))),
        }
    }
}

#[must_use]
pub fn rating_summary(rating: u8) -> String {
    match rating.min(MAX_RATING) {
        0 => "Not rated yet".to_owned(),
        n => format!("{} ({n}/{MAX_RATING})", "⭐".repeat(usize::from(n))),
    }
}

#[must_use]
pub fn message_counter(message: &str) -> String {
    format!("{}/{}", message.chars().count(), MESSAGE_LEN.1)
}

struct FieldBinding {
    value: Signal<String>,
    on_input: Callback<String>,
    error: Signal<Option<String>>,
}

fn bind_field(form: RwSignal<ContactForm>, errors: RwSignal<FieldErrors>, field: ContactField) -> FieldBinding {
    FieldBinding {
        value: Signal::derive(move || form.with(|f| f.get(field).to_owned())),
        on_input: Callback::new(move |value: String| {
            form.update(|f| f.set(field, value));
            errors.update(|e| {
                e.remove(&field);
            });
        }),
        error: Signal::derive(move || errors.with(|e| e.get(&field).cloned())),
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let status = RwSignal::new(SubmitStatus::Idle);

    let name = bind_field(form, errors, ContactField::Name);
    let email = bind_field(form, errors, ContactField::Email);
    let subject = bind_field(form, errors, ContactField::Subject);
    let message = bind_field(form, errors, ContactField::Message);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.with_untracked(SubmitStatus::is_sending) {
            return;
        }
        let draft = form.get_untracked();
        if let Err(field_errors) = draft.validate() {
            errors.set(field_errors);
            return;
        }
        status.set(SubmitStatus::Sending);
        leptos::task::spawn_local(async move {
            match submit_contact(&draft).await {
                Ok(receipt) => {
                    log::info!("contact submitted: {:?}", receipt.request_id);
                    form.set(ContactForm::default());
                    status.set(SubmitStatus::Sent(receipt.message));
                }
                Err(message) => {
                    log::warn!("contact submission failed: {message}");
                    status.set(SubmitStatus::Failed(message));
                }
            }
            #[cfg(feature = "hydrate")]
            {
                gloo_timers::future::TimeoutFuture::new(STATUS_CLEAR_MS).await;
                let _ = status.try_update(|s| {
                    if !s.is_sending() {
                        *s = SubmitStatus::Idle;
                    }
                });
            }
        });
    };

    let sending = Signal::derive(move || status.with(SubmitStatus::is_sending));

    let rating_open = RwSignal::new(false);
    let open_rating = Callback::new(move |_: leptos::ev::MouseEvent| rating_open.set(true));
    let close_rating = Callback::new(move |()| rating_open.set(false));
    let on_rate = Callback::new(move |rating: u8| form.update(|f| f.rating = rating.min(MAX_RATING)));

    view! {
        <section id="contact" class="section">
            <div class="container">
                <Reveal class="section__header">
                    <h2 class="section__title">"<CONTACT_ME/>"</h2>
                    <p class="muted">"Have a quest in mind? Let's team up and build something awesome!"</p>
                </Reveal>
                <Reveal>
                    <Card class="contact__card">
                        <h3 class="contact__heading">"> SEND_MESSAGE"</h3>
                        <form class="contact__form" on:submit=on_submit novalidate=true>
                            <Input
                                name="name"
                                label="Name *"
                                placeholder="Enter your name"
                                value=name.value
                                on_input=name.on_input
                                error=name.error
                            />
                            <Input
                                name="email"
                                label="Email *"
                                input_type="email"
                                placeholder="your.email@example.com"
                                value=email.value
                                on_input=email.on_input
                                error=email.error
                            />
                            <Input
                                name="subject"
                                label="Subject *"
                                placeholder="What's this about?"
                                value=subject.value
                                on_input=subject.on_input
                                error=subject.error
                            />
                            <Textarea
                                name="message"
                                label="Message *"
                                placeholder="Tell me about your project or idea..."
                                value=message.value
                                on_input=message.on_input
                                error=message.error
                            />
                            <p class="contact__counter muted">
                                {move || form.with(|f| message_counter(&f.message))}
                            </p>
                            <div class="contact__rating">
                                <span class="contact__rating-value">{move || form.with(|f| rating_summary(f.rating))}</span>
                                <Button variant=ButtonVariant::Secondary size=ButtonSize::Sm on_click=open_rating>
                                    "⭐ RATE PORTFOLIO"
                                </Button>
                            </div>
                            <Button button_type="submit" size=ButtonSize::Lg class="contact__submit" disabled=sending>
                                {move || if sending.get() { "⏳ SENDING..." } else { "📨 SEND MESSAGE" }}
                            </Button>
                        </form>
                        {move || {
                            status
                                .with(SubmitStatus::banner)
                                .map(|(modifier, text)| {
                                    view! { <p class=format!("status-banner {modifier}")>{text}</p> }
                                })
                        }}
                    </Card>
                </Reveal>
            </div>
            <Show when=move || rating_open.get()>
                <RatingModal on_close=close_rating on_rate=on_rate/>
            </Show>
        </section>
    }
}
