use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;

use crate::application::{ApplicationFlow, DraftField, FlowEffect, FlowEvent, FlowTiming, Phase};
use crate::core::{platform, timing};
use crate::site::{use_site, SiteContext};
use crate::t;

type SenderSlot = Rc<RefCell<Option<UnboundedSender<FlowEvent>>>>;

/// Owns the application flow and the coroutine that carries out its effects.
///
/// Call once near the root; any descendant can open the modal with
/// `use_coroutine_handle::<FlowEvent>().send(FlowEvent::Open)`.
pub fn use_application_flow() -> Signal<ApplicationFlow> {
    let site = use_site();
    let flow = use_signal(|| ApplicationFlow::new(FlowTiming::default()));
    let sender_slot: SenderSlot = use_hook(|| Rc::new(RefCell::new(None)));
    let sender_slot_for_loop = sender_slot.clone();

    let coroutine = use_coroutine(move |mut rx: UnboundedReceiver<FlowEvent>| {
        let sender_slot = sender_slot_for_loop.clone();
        let site = site.clone();
        let mut flow_signal = flow;

        async move {
            while let Some(event) = rx.next().await {
                let effects = flow_signal.with_mut(|flow| flow.handle(event));
                for effect in effects {
                    run_effect(&site, sender_slot.clone(), effect);
                }
            }
        }
    });

    sender_slot.borrow_mut().replace(coroutine.tx());

    flow
}

fn run_effect(site: &SiteContext, sender_slot: SenderSlot, effect: FlowEffect) {
    match effect {
        FlowEffect::Transmit { run_id, request } => {
            let client = site.client.clone();
            let locale = site.locale_untracked();
            if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
                platform::spawn_future(async move {
                    let event = match client.submit_contact(&request, locale).await {
                        Ok(()) => {
                            tracing::info!("[application] run {run_id} delivered");
                            FlowEvent::Delivered { run_id }
                        }
                        Err(err) => {
                            tracing::error!("[application] run {run_id} failed: {err}");
                            FlowEvent::Rejected {
                                run_id,
                                detail: err.to_string(),
                            }
                        }
                    };
                    let _ = sender.unbounded_send(event);
                });
            }
        }
        FlowEffect::Schedule { delay_ms, event } => queue_event(sender_slot, delay_ms, event),
        FlowEffect::ReportFailure { detail } => {
            tracing::debug!("[application] reporting failure: {detail}");
            platform::alert(&t!(site.locale_untracked(), "application-error"));
        }
    }
}

fn queue_event(sender_slot: SenderSlot, delay_ms: u64, event: FlowEvent) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        platform::spawn_future(async move {
            timing::sleep_ms(delay_ms).await;
            let _ = sender.unbounded_send(event);
        });
    }
}

#[component]
pub fn ApplicationModal(flow: Signal<ApplicationFlow>) -> Element {
    let locale = use_site().locale();
    let coroutine = use_coroutine_handle::<FlowEvent>();

    let snapshot = flow();
    if !snapshot.is_open() {
        return rsx! {};
    }

    let submitting = snapshot.is_submitting();
    let draft = snapshot.draft().clone();
    let can_submit = snapshot.can_submit();
    let show_error = snapshot.last_error().is_some();

    let edit = move |field: DraftField| {
        move |evt: FormEvent| coroutine.send(FlowEvent::Edit(field, evt.value()))
    };

    let body = match snapshot.phase() {
        Phase::Typing(reveal) => {
            let typed = reveal.visible().to_string();
            rsx! {
                pre { class: "transcript", aria_live: "polite",
                    "{typed}"
                    span { class: "transcript__cursor", "▌" }
                }
            }
        }
        Phase::Success => rsx! {
            div { class: "success", role: "status",
                div { class: "success__mark", "✓" }
                h3 { {t!(locale, "application-success-title")} }
                p { {t!(locale, "application-success-message")} }
            }
        },
        Phase::Idle | Phase::Sending => rsx! {
            p { {t!(locale, "application-instructions")} }
            form {
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    coroutine.send(FlowEvent::Submit);
                },
                div { class: "form__field",
                    label { r#for: "application-full-name", {t!(locale, "application-full-name")} }
                    input {
                        id: "application-full-name",
                        r#type: "text",
                        required: true,
                        disabled: submitting,
                        placeholder: t!(locale, "application-full-name-placeholder"),
                        value: "{draft.full_name}",
                        oninput: edit(DraftField::FullName),
                    }
                }
                div { class: "form__field",
                    label { r#for: "application-phone", {t!(locale, "application-phone")} }
                    input {
                        id: "application-phone",
                        r#type: "tel",
                        required: true,
                        disabled: submitting,
                        placeholder: t!(locale, "application-phone-placeholder"),
                        value: "{draft.phone}",
                        oninput: edit(DraftField::Phone),
                    }
                }
                div { class: "form__field",
                    label { r#for: "application-question", {t!(locale, "application-question")} }
                    textarea {
                        id: "application-question",
                        rows: 4,
                        required: true,
                        disabled: submitting,
                        placeholder: t!(locale, "application-question-placeholder"),
                        value: "{draft.question}",
                        oninput: edit(DraftField::Question),
                    }
                }
                if show_error {
                    p { class: "form__error", role: "alert", {t!(locale, "application-error")} }
                }
                div { class: "form__actions",
                    button {
                        class: "button button--ghost",
                        r#type: "button",
                        disabled: submitting,
                        onclick: move |_| coroutine.send(FlowEvent::Close),
                        {t!(locale, "application-cancel")}
                    }
                    button {
                        class: "button",
                        r#type: "submit",
                        disabled: !can_submit,
                        if submitting {
                            {t!(locale, "application-submitting")}
                        } else {
                            {t!(locale, "application-submit")}
                        }
                    }
                }
            }
        },
    };

    rsx! {
        div {
            class: "dialog-backdrop",
            onclick: move |_| coroutine.send(FlowEvent::Close),
            div {
                class: "dialog",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "application-title",
                onclick: move |evt| evt.stop_propagation(),
                button {
                    class: "button button--ghost dialog__close",
                    r#type: "button",
                    aria_label: t!(locale, "common-close"),
                    onclick: move |_| coroutine.send(FlowEvent::Close),
                    "×"
                }
                h2 { id: "application-title", {t!(locale, "application-title")} }
                {body}
            }
        }
    }
}
