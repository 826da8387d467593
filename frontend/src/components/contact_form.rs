use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::config;
use crate::utils::relay::{was_sent, ContactDraft, RelayForm};

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub id: &'static str,
    pub heading: &'static str,
    pub intro: &'static str,
    pub relay: RelayForm,
    pub submit_label: &'static str,
    #[prop_or("Tell us where you are and what you are ready to release.")]
    pub message_placeholder: &'static str,
    /// Options for an optional "which path" select.
    #[prop_or_default]
    pub paths: &'static [&'static str],
}

/// Call-to-action form posted straight to the mail relay. The relay answers
/// with a redirect back here carrying `?sent=1`.
#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let draft = use_state(ContactDraft::default);
    let sent = use_state(was_sent);

    let on_name = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(ContactDraft {
                name: input.value(),
                ..(*draft).clone()
            });
        })
    };
    let on_email = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(ContactDraft {
                email: input.value(),
                ..(*draft).clone()
            });
        })
    };
    let on_message = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            draft.set(ContactDraft {
                message: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let form_css = r#"
        .contact-section {
            padding: 6rem 2rem;
            background: radial-gradient(ellipse at bottom, rgba(255, 106, 26, 0.15), transparent 60%), #0d0806;
        }
        .contact-inner {
            max-width: 640px;
            margin: 0 auto;
            text-align: center;
        }
        .contact-inner h2 {
            font-family: 'Cinzel', serif;
            font-size: 2.5rem;
            color: #fff3d6;
            margin-bottom: 1rem;
        }
        .contact-intro {
            color: #b89f86;
            margin-bottom: 2.5rem;
        }
        .contact-form {
            display: flex;
            flex-direction: column;
            gap: 1rem;
            text-align: left;
        }
        .contact-form label {
            color: #e8d9c7;
            font-size: 0.9rem;
        }
        .contact-form input, .contact-form textarea, .contact-form select {
            width: 100%;
            padding: 0.9rem 1rem;
            border-radius: 10px;
            border: 1px solid rgba(245, 192, 107, 0.2);
            background: rgba(30, 18, 12, 0.8);
            color: #fff3d6;
            font-size: 1rem;
            box-sizing: border-box;
        }
        .contact-form input:focus, .contact-form textarea:focus, .contact-form select:focus {
            outline: none;
            border-color: #ff6a1a;
        }
        .contact-form textarea {
            min-height: 140px;
            resize: vertical;
        }
        .honey {
            display: none;
        }
        .contact-submit {
            margin-top: 1rem;
            padding: 1rem 2rem;
            border: none;
            border-radius: 999px;
            background: linear-gradient(45deg, #ff6a1a, #f5c06b);
            color: #1a0d06;
            font-size: 1rem;
            font-weight: 700;
            cursor: pointer;
            transition: opacity 0.3s ease;
        }
        .contact-submit:disabled {
            opacity: 0.45;
            cursor: not-allowed;
        }
        .contact-thanks {
            padding: 2.5rem;
            border-radius: 20px;
            border: 1px solid rgba(255, 106, 26, 0.4);
            background: rgba(30, 18, 12, 0.8);
            color: #fff3d6;
        }
    "#;

    let body = if *sent {
        let on_again = {
            let sent = sent.clone();
            Callback::from(move |_: MouseEvent| sent.set(false))
        };
        html! {
            <div class="contact-thanks">
                <h3>{"Your message is on its way."}</h3>
                <p>{"We read every word and will answer within three days."}</p>
                <button class="contact-submit" onclick={on_again}>{"Send another"}</button>
            </div>
        }
    } else {
        let origin = config::site_origin();
        html! {
            <form class="contact-form" action={props.relay.action_url()} method="POST">
                { for props.relay.hidden_fields(&origin).into_iter().map(|(name, value)| html! {
                    <input type="hidden" name={name} value={value} />
                }) }
                <input class="honey" type="text" name="_honey" tabindex="-1" autocomplete="off" />
                <label for="contact-name">{"Name"}</label>
                <input id="contact-name" type="text" name="name" required=true
                    value={draft.name.clone()} oninput={on_name} />
                <label for="contact-email">{"Email"}</label>
                <input id="contact-email" type="email" name="email" required=true
                    value={draft.email.clone()} oninput={on_email} />
                if !props.paths.is_empty() {
                    <label for="contact-path">{"Which path calls you?"}</label>
                    <select id="contact-path" name="path">
                        { for props.paths.iter().map(|path| html! {
                            <option value={*path}>{*path}</option>
                        }) }
                    </select>
                }
                <label for="contact-message">{"Message"}</label>
                <textarea id="contact-message" name="message" required=true
                    placeholder={props.message_placeholder}
                    value={draft.message.clone()} oninput={on_message} />
                <button class="contact-submit" type="submit" disabled={!draft.is_ready()}>
                    {props.submit_label}
                </button>
            </form>
        }
    };

    html! {
        <section class="contact-section" id={props.id}>
            <style>{form_css}</style>
            <div class="contact-inner">
                <h2>{props.heading}</h2>
                <p class="contact-intro">{props.intro}</p>
                <FadeIn>{body}</FadeIn>
            </div>
        </section>
    }
}
