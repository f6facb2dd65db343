use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::prelude::*;
use web_sys::{HtmlInputElement, MouseEvent};
use wasm_bindgen_futures::spawn_local;
use log::{info, warn};
use crate::Route;
use crate::api;
use crate::components::invalid_assessment::InvalidAssessment;
use crate::components::phone_input::PhoneInput;
use crate::content::Offering;
use crate::models::{ContactForm, CountryCode, FormAction, SubmissionTracker, SubmitStatus, COUNTRY_CODES};

const SUCCESS_MESSAGE_MS: u32 = 3_000;

#[derive(Properties, PartialEq)]
pub struct PreCallProps {
    pub id: String,
}

#[function_component(PreCall)]
pub fn pre_call(props: &PreCallProps) -> Html {
    let navigator = use_navigator();
    let form = use_reducer(ContactForm::default);
    let status = use_state(SubmitStatus::default);
    // Guards against a second submit landing before the disabled button renders.
    let tracker = use_mut_ref(SubmissionTracker::default);
    let is_mounted = use_is_mounted();

    let Some(offering) = Offering::from_id(&props.id) else {
        warn!("Unknown assessment type: {}", props.id);
        return html! { <InvalidAssessment /> };
    };
    let content = offering.content();

    let on_back = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Intro { id: offering.id().to_string() });
        }
    });

    let on_name_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::Name(input.value()));
        })
    };

    let on_email_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::Email(input.value()));
        })
    };

    let on_phone_number_change = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::PhoneNumber(input.value()));
        })
    };

    let on_country_code_change = {
        let form = form.clone();
        Callback::from(move |country_code: CountryCode| {
            form.dispatch(FormAction::CountryCode(country_code));
        })
    };

    let on_submit = {
        let form = form.clone();
        let status = status.clone();
        let tracker = tracker.clone();
        let is_mounted = is_mounted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !tracker.borrow_mut().try_begin() {
                info!("Call request already in flight, ignoring submit");
                return;
            }
            status.set(SubmitStatus::Submitting);

            let request = form.to_request(content.call_type);
            let status = status.clone();
            let tracker = tracker.clone();
            let is_mounted = is_mounted.clone();
            spawn_local(async move {
                let result = api::start_call(&request).await;

                if !tracker.borrow_mut().settle(is_mounted()) {
                    info!("Pre-call page closed before the call request settled, dropping result");
                    return;
                }

                match &result {
                    Ok(()) => {
                        info!("{} call initiated", request.call_type);
                    }
                    Err(e) => {
                        gloo_console::error!("Failed to initiate call:", e.to_string());
                    }
                }
                let succeeded = result.is_ok();
                status.set(SubmitStatus::settle(&result));

                if succeeded {
                    clear_success_later(status, tracker, is_mounted);
                }
            });
        })
    };

    let is_submitting = status.is_submitting();

    html! {
        <div class="assessment-page">
            <button class="back-button" onclick={on_back}>
                {"← Back to introduction"}
            </button>

            <h1>{content.title}</h1>

            <div class="assessment-panel">
                <p class="intro-text">
                    {"Hana will act as your AI healthcare agent, conducting a thorough assessment using validated clinical tools."}
                </p>

                <h2>{"What you'll experience:"}</h2>
                <ul class="experience-list">
                    { for content.experience.iter().map(|item| html! {
                        <li><span class="check-icon">{"✓"}</span>{*item}</li>
                    }) }
                </ul>

                <form class="call-form" onsubmit={on_submit}>
                    <div class="form-field">
                        <label>{"Call Type"}</label>
                        <div class="call-type-display">
                            <span>{"Phone"}</span>
                        </div>
                    </div>

                    <div class="form-field">
                        <label for="name">{"Name"}</label>
                        <input
                            type="text"
                            id="name"
                            name="name"
                            value={form.name.clone()}
                            oninput={on_name_input}
                            placeholder="Jane Doe"
                            required=true
                        />
                    </div>

                    <div class="form-field">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            value={form.email.clone()}
                            oninput={on_email_input}
                            placeholder="jane@example.com"
                            required=true
                        />
                    </div>

                    <div class="form-field">
                        <label for="phoneNumber">{"Phone Number"}</label>
                        <PhoneInput
                            phone_number={form.phone_number.clone()}
                            country_code={form.country_code}
                            on_phone_number_change={on_phone_number_change}
                            on_country_code_change={on_country_code_change}
                            country_codes={COUNTRY_CODES}
                        />
                        <p class="field-help">
                            {"We need your phone number so the AI can call you for the demo. Don't worry, we won't save your information."}
                        </p>
                    </div>

                    <button type="submit" class="primary-button" disabled={is_submitting}>
                        if is_submitting {
                            <span class="loading-spinner"></span>{" Initiating call..."}
                        } else {
                            {"📞 Call me!"}
                        }
                    </button>

                    {
                        match &*status {
                            SubmitStatus::Succeeded => html! {
                                <div class="success-message">{"Call initiated successfully! Your phone will ring shortly."}</div>
                            },
                            SubmitStatus::Failed(message) => html! {
                                <div class="error-message">{message}</div>
                            },
                            SubmitStatus::Idle | SubmitStatus::Submitting => html! {},
                        }
                    }
                </form>
            </div>

            <p class="privacy-note">
                {"This is a demo call. No personal health information will be stored or shared. Your privacy is protected."}
            </p>
        </div>
    }
}

/// Hides the success banner after a while unless a newer submission has
/// replaced it.
fn clear_success_later(
    status: UseStateHandle<SubmitStatus>,
    tracker: Rc<RefCell<SubmissionTracker>>,
    is_mounted: Rc<dyn Fn() -> bool>,
) {
    let settled = tracker.borrow().generation();
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(SUCCESS_MESSAGE_MS).await;
        if is_mounted() && tracker.borrow().is_latest(settled) {
            status.set(SubmitStatus::Idle);
        }
    });
}
