use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;
use crate::state::contact_form::{
    ContactAction, ContactForm, ContactRequest, Field, NotificationKind, SubmitGuard,
};
use crate::utils::api::{error_reason, Api};

const NOTICE_MS: u32 = 6_000;

async fn send_contact(request: &ContactRequest) -> Result<(), String> {
    let wrapper = Api::post("/api/contact")
        .json(request)
        .map_err(|e| e.to_string())?;
    match wrapper.send().await {
        Ok(response) if response.ok() => Ok(()),
        Ok(response) => Err(error_reason(response).await),
        Err(e) => {
            gloo_console::log!(format!("Contact request failed: {}", e));
            Err("network error".to_string())
        }
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_reducer(ContactForm::default);
    let guard = use_mut_ref(SubmitGuard::default);

    // Hide the notice after a while; dropping the timeout cancels it.
    {
        let has_notice = form.notification.is_some();
        let form = form.clone();
        use_effect_with_deps(
            move |has_notice| {
                let timeout = has_notice.then(|| {
                    Timeout::new(NOTICE_MS, move || form.dispatch(ContactAction::Dismiss))
                });
                move || drop(timeout)
            },
            has_notice,
        );
    }

    let on_input = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(ContactAction::Edit(field, input.value()));
        })
    };
    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(ContactAction::Edit(Field::Message, input.value()));
        })
    };

    let on_submit = {
        let form = form.clone();
        let guard = guard.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = match form.request() {
                Ok(request) => request,
                Err(reason) => {
                    gloo_console::log!(format!("Contact form not sent: {:?}", reason));
                    return;
                }
            };
            let Some(ticket) = guard.borrow().try_begin() else {
                gloo_console::log!("Contact form not sent: a message is already on its way");
                return;
            };
            form.dispatch(ContactAction::Begin);
            let form = form.clone();
            spawn_local(async move {
                let outcome = send_contact(&request).await;
                form.dispatch(ContactAction::Finish(outcome));
                drop(ticket);
            });
        })
    };

    let sending = form.is_in_flight();

    html! {
        <Reveal id="contact" class="section contact">
            <h2 class="section-title">{"Contact"}</h2>
            <p class="section-sub">{"Let's discuss your idea"}</p>

            <div class="contact-row">
                <form class="contact-form" onsubmit={on_submit}>
                    <label>
                        {"Name"}
                        <input
                            type="text"
                            name="name"
                            required=true
                            placeholder="Your name"
                            value={form.name.clone()}
                            oninput={on_input(Field::Name)}
                        />
                    </label>

                    <label>
                        {"Email"}
                        <input
                            type="email"
                            name="email"
                            required=true
                            placeholder="your@email.com"
                            value={form.email.clone()}
                            oninput={on_input(Field::Email)}
                        />
                    </label>

                    <label>
                        {"Message"}
                        <textarea
                            name="message"
                            rows="5"
                            required=true
                            placeholder="Tell us about your project..."
                            value={form.message.clone()}
                            oninput={on_message}
                        />
                    </label>

                    <div class="form-actions">
                        <button type="submit" class="cta-primary" disabled={sending}>
                            { if sending { "Sending..." } else { "Send" } }
                        </button>
                        <a class="whatsapp-btn" href={config::WHATSAPP_LINK} target="_blank" rel="noreferrer">
                            {"WhatsApp"}
                        </a>
                    </div>

                    if let Some(notice) = &form.notification {
                        <div
                            class={classes!(
                                "form-notice",
                                match notice.kind {
                                    NotificationKind::Success => "notice-success",
                                    NotificationKind::Failure => "notice-failure",
                                }
                            )}
                            role="status"
                        >
                            {notice.text.clone()}
                        </div>
                    }
                </form>

                <div class="contact-aside">
                    <h4>{"Quick Info"}</h4>
                    <p>{"Available for remote & on-site projects."}</p>
                    <p>{format!("Email: {}", config::CONTACT_EMAIL)}</p>
                    <p>{format!("WhatsApp: {}", config::WHATSAPP_DISPLAY)}</p>
                </div>
            </div>
        </Reveal>
    }
}
