use std::cell::RefCell;
use std::rc::Rc;

use gloo_console::log;
use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;

/// Where a submission attempt currently stands. `Error` is only produced by
/// a real backend; the simulated pipeline below always settles on `Success`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SendStatus {
    Idle,
    Submitting,
    Success,
    Error,
}

impl SendStatus {
    /// The submit control is locked out only while a submission is in flight.
    fn is_busy(self) -> bool {
        matches!(self, SendStatus::Submitting)
    }

    fn button_label(self) -> &'static str {
        match self {
            SendStatus::Idle => "Send Message",
            SendStatus::Submitting => "Sending...",
            SendStatus::Success => "Sent Successfully ✓",
            SendStatus::Error => "Something Went Wrong",
        }
    }
}

/// Contact form with a simulated submission: submitting flips the status to
/// `Submitting`, settles on `Success` after a fixed delay, then resets to
/// `Idle` and clears the drafts after a second delay. Whichever leg of the
/// chain is pending is parked in one holder so unmounting cancels it instead
/// of letting it fire into a disposed component.
#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let status = use_state(|| SendStatus::Idle);
    let pending = use_state(|| Rc::new(RefCell::new(None::<Timeout>)));

    {
        let pending = (*pending).clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    if let Some(timer) = pending.borrow_mut().take() {
                        drop(timer);
                    }
                }
            },
            (),
        );
    }

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let status = status.clone();
        let pending = (*pending).clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if (*status).is_busy() {
                return;
            }
            log!("Contact form submitted by:", (*name).clone());
            status.set(SendStatus::Submitting);

            let name = name.clone();
            let email = email.clone();
            let message = message.clone();
            let status = status.clone();
            let reset_slot = pending.clone();

            let settle = Timeout::new(config::SUBMIT_DELAY_MS, move || {
                status.set(SendStatus::Success);
                let reset = Timeout::new(config::SUBMIT_RESET_MS, move || {
                    status.set(SendStatus::Idle);
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                });
                *reset_slot.borrow_mut() = Some(reset);
            });
            *pending.borrow_mut() = Some(settle);
        })
    };

    html! {
        <form class="contact-form" {onsubmit}>
            <style>
                {r#"
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .contact-form label {
                        display: block;
                        color: #999;
                        font-size: 0.9rem;
                        margin-bottom: 0.5rem;
                    }
                    .contact-form input,
                    .contact-form textarea {
                        width: 100%;
                        background: rgba(0, 0, 0, 0.5);
                        border: 1px solid rgba(30, 144, 255, 0.1);
                        border-radius: 8px;
                        padding: 0.75rem 1rem;
                        color: #fff;
                        font-size: 1rem;
                        font-family: inherit;
                        transition: border-color 0.3s ease, box-shadow 0.3s ease;
                    }
                    .contact-form input:focus,
                    .contact-form textarea:focus {
                        outline: none;
                        border-color: #7EB2FF;
                        box-shadow: 0 0 0 2px rgba(126, 178, 255, 0.2);
                    }
                    .contact-submit {
                        width: 100%;
                        background: linear-gradient(45deg, #1E90FF, #7E5FFF);
                        color: #fff;
                        border: none;
                        border-radius: 8px;
                        padding: 1rem 2rem;
                        font-size: 1.1rem;
                        font-weight: 600;
                        cursor: pointer;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        transition: transform 0.3s ease, opacity 0.3s ease;
                    }
                    .contact-submit:hover:not(:disabled) {
                        transform: scale(1.02);
                    }
                    .contact-submit:disabled {
                        opacity: 0.7;
                        cursor: not-allowed;
                    }
                    .sending-spinner {
                        display: inline-block;
                        width: 20px;
                        height: 20px;
                        border: 3px solid rgba(255, 255, 255, 0.3);
                        border-radius: 50%;
                        border-top-color: #fff;
                        animation: contact-spin 1s ease-in-out infinite;
                    }
                    @keyframes contact-spin {
                        to { transform: rotate(360deg); }
                    }
                "#}
            </style>
            <div>
                <label for="contact-name">{"Your Name"}</label>
                <input
                    id="contact-name"
                    type="text"
                    placeholder="John Doe"
                    required={true}
                    value={(*name).clone()}
                    oninput={let name = name.clone(); move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        name.set(input.value());
                    }}
                />
            </div>
            <div>
                <label for="contact-email">{"Your Email"}</label>
                <input
                    id="contact-email"
                    type="email"
                    placeholder="john@example.com"
                    required={true}
                    value={(*email).clone()}
                    oninput={let email = email.clone(); move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        email.set(input.value());
                    }}
                />
            </div>
            <div>
                <label for="contact-message">{"Your Message"}</label>
                <textarea
                    id="contact-message"
                    rows="4"
                    placeholder="Tell us about your project..."
                    required={true}
                    value={(*message).clone()}
                    oninput={let message = message.clone(); move |e: InputEvent| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        message.set(input.value());
                    }}
                />
            </div>
            <button class="contact-submit" type="submit" disabled={(*status).is_busy()}>
                {
                    if (*status).is_busy() {
                        html! { <><span class="sending-spinner"></span>{" "}{SendStatus::Submitting.button_label()}</> }
                    } else {
                        html! { <>{(*status).button_label()}</> }
                    }
                }
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_an_in_flight_submission_locks_the_button() {
        assert!(!SendStatus::Idle.is_busy());
        assert!(SendStatus::Submitting.is_busy());
        assert!(!SendStatus::Success.is_busy());
        assert!(!SendStatus::Error.is_busy());
    }

    #[test]
    fn every_status_has_a_distinct_button_label() {
        let labels = [
            SendStatus::Idle.button_label(),
            SendStatus::Submitting.button_label(),
            SendStatus::Success.button_label(),
            SendStatus::Error.button_label(),
        ];
        for (i, a) in labels.iter().enumerate() {
            assert!(!a.is_empty());
            for b in &labels[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn idle_shows_the_default_call_to_action() {
        assert_eq!(SendStatus::Idle.button_label(), "Send Message");
    }
}
