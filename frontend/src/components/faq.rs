use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::utils::scroll::{listen_window, location_hash};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaqEntry {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    entry: FaqEntry,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state_eq(|| false);
    let id = props.entry.id;

    // Open when the URL hash points at this entry, now or after a hash change
    {
        let is_open = is_open.clone();
        use_effect_with_deps(
            move |_| {
                let check_hash = move || {
                    if location_hash().as_deref() == Some(id) {
                        is_open.set(true);
                        // Let the answer expand before scrolling to it
                        Timeout::new(100, move || {
                            if let Some(element) = web_sys::window()
                                .and_then(|w| w.document())
                                .and_then(|doc| doc.get_element_by_id(id))
                            {
                                element.scroll_into_view_with_bool(true);
                            }
                        })
                        .forget();
                    }
                };
                check_hash();
                listen_window("hashchange", move |_| check_hash())
            },
            (),
        );
    }

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };
    html! {
        <div id={id} class={classes!("faq-item", (*is_open).then(|| "open"))}>
            <button class="faq-question" aria-expanded={(*is_open).to_string()} onclick={toggle}>
                <span class="question-text">{props.entry.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{props.entry.answer}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqSectionProps {
    pub id: &'static str,
    pub heading: &'static str,
    pub entries: &'static [FaqEntry],
}

#[function_component(FaqSection)]
pub fn faq_section(props: &FaqSectionProps) -> Html {
    let faq_css = r#"
        .faq-section {
            padding: 6rem 2rem;
            max-width: 820px;
            margin: 0 auto;
        }
        .faq-section h2 {
            font-family: 'Cinzel', serif;
            font-size: 2.5rem;
            text-align: center;
            color: #fff3d6;
            margin-bottom: 2.5rem;
        }
        .faq-item {
            border-bottom: 1px solid rgba(245, 192, 107, 0.15);
        }
        .faq-question {
            width: 100%;
            display: flex;
            justify-content: space-between;
            align-items: center;
            gap: 1rem;
            padding: 1.4rem 0;
            background: none;
            border: none;
            color: #e8d9c7;
            font-size: 1.1rem;
            text-align: left;
            cursor: pointer;
        }
        .toggle-icon {
            color: #ff6a1a;
            font-size: 1.4rem;
        }
        .faq-answer {
            max-height: 0;
            overflow: hidden;
            transition: max-height 0.4s ease;
            color: #b89f86;
            line-height: 1.7;
        }
        .faq-item.open .faq-answer {
            max-height: 600px;
            padding-bottom: 1.4rem;
        }
    "#;
    html! {
        <section class="faq-section" id={props.id}>
            <style>{faq_css}</style>
            <h2>{props.heading}</h2>
            { for props.entries.iter().map(|entry| html! {
                <FaqItem key={entry.id} entry={*entry} />
            }) }
        </section>
    }
}
