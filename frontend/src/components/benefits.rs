use yew::prelude::*;

use crate::config;
use crate::utils::reveal::{use_in_view, use_staged_reveal};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Benefit {
    /// Font Awesome class, e.g. `fas fa-fire`.
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct BenefitListProps {
    pub id: &'static str,
    pub heading: &'static str,
    #[prop_or_default]
    pub intro: Option<&'static str>,
    pub benefits: &'static [Benefit],
}

/// Benefit cards that appear one after another once the list scrolls into view.
#[function_component(BenefitList)]
pub fn benefit_list(props: &BenefitListProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), true);
    let shown = use_staged_reveal(props.benefits.len(), config::REVEAL_STEP_MS, in_view);

    let benefits_css = r#"
        .benefits {
            padding: 6rem 2rem;
            max-width: 1200px;
            margin: 0 auto;
        }
        .benefits h2 {
            font-family: 'Cinzel', serif;
            font-size: 2.5rem;
            text-align: center;
            margin-bottom: 1rem;
            background: linear-gradient(45deg, #fff3d6, #f5c06b);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }
        .benefits-intro {
            text-align: center;
            color: #b89f86;
            max-width: 680px;
            margin: 0 auto 3rem;
        }
        .benefit-grid {
            list-style: none;
            padding: 0;
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
            gap: 1.5rem;
        }
        .benefit-card {
            padding: 2rem;
            border-radius: 16px;
            background: rgba(30, 18, 12, 0.7);
            border: 1px solid rgba(255, 106, 26, 0.12);
            opacity: 0;
            transform: translateY(16px);
            transition: opacity 0.5s ease, transform 0.5s ease, border-color 0.3s ease;
        }
        .benefit-card.shown {
            opacity: 1;
            transform: translateY(0);
        }
        .benefit-card:hover {
            border-color: rgba(255, 106, 26, 0.45);
        }
        .benefit-card i {
            color: #ff6a1a;
            font-size: 1.6rem;
            margin-bottom: 1rem;
        }
        .benefit-card h3 {
            color: #fff3d6;
            margin-bottom: 0.5rem;
        }
        .benefit-card p {
            color: #cbb8a3;
            line-height: 1.6;
        }
        @media (max-width: 768px) {
            .benefits h2 {
                font-size: 2rem;
            }
        }
    "#;
    html! {
        <section class="benefits" id={props.id}>
            <style>{benefits_css}</style>
            <h2>{props.heading}</h2>
            if let Some(intro) = props.intro {
                <p class="benefits-intro">{intro}</p>
            }
            <ul class="benefit-grid" ref={node}>
                { for props.benefits.iter().enumerate().map(|(i, benefit)| html! {
                    <li class={classes!("benefit-card", (i < shown).then(|| "shown"))}>
                        <i class={benefit.icon}></i>
                        <h3>{benefit.title}</h3>
                        <p>{benefit.description}</p>
                    </li>
                }) }
            </ul>
        </section>
    }
}
