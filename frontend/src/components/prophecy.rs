use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::config;
use crate::utils::rotation::use_rotation;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Prophecy {
    pub quote: &'static str,
    pub attribution: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BannerVariant {
    Ember,
    Dawn,
}

impl BannerVariant {
    fn class(self) -> &'static str {
        match self {
            BannerVariant::Ember => "prophecy-ember",
            BannerVariant::Dawn => "prophecy-dawn",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ProphecyBannerProps {
    /// One quote stays put; several rotate.
    pub prophecies: &'static [Prophecy],
    #[prop_or(BannerVariant::Ember)]
    pub variant: BannerVariant,
}

#[function_component(ProphecyBanner)]
pub fn prophecy_banner(props: &ProphecyBannerProps) -> Html {
    let rotation = use_rotation(props.prophecies.len(), config::PROPHECY_ROTATION_MS);
    let Some(current) = props.prophecies.get(rotation.index) else {
        return html! {};
    };
    let banner_css = r#"
        .prophecy {
            padding: 5rem 2rem;
            text-align: center;
            position: relative;
            overflow: hidden;
        }
        .prophecy-ember {
            background: radial-gradient(ellipse at center, rgba(255, 106, 26, 0.18), transparent 70%), #0d0806;
        }
        .prophecy-dawn {
            background: radial-gradient(ellipse at center, rgba(245, 192, 107, 0.22), transparent 70%), #140d08;
        }
        .prophecy blockquote {
            max-width: 820px;
            margin: 0 auto;
            font-family: 'Cormorant Garamond', serif;
            font-size: 2rem;
            line-height: 1.4;
            font-style: italic;
            color: #fff3d6;
        }
        .prophecy cite {
            display: block;
            margin-top: 1.5rem;
            color: #f5c06b;
            font-style: normal;
            letter-spacing: 0.2em;
            text-transform: uppercase;
            font-size: 0.8rem;
        }
        .prophecy-quote {
            animation: prophecy-in 0.8s ease;
        }
        @keyframes prophecy-in {
            from { opacity: 0; transform: translateY(8px); }
            to { opacity: 1; transform: translateY(0); }
        }
        @media (max-width: 768px) {
            .prophecy blockquote {
                font-size: 1.4rem;
            }
        }
    "#;
    html! {
        <section class={classes!("prophecy", props.variant.class())}>
            <style>{banner_css}</style>
            <FadeIn>
                // keyed so the entrance animation replays on rotation
                <div class="prophecy-quote" key={rotation.index}>
                    <blockquote>{current.quote}</blockquote>
                    <cite>{"— "}{current.attribution}</cite>
                </div>
            </FadeIn>
        </section>
    }
}
