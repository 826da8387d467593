use yew::prelude::*;

use crate::utils::scroll::{overlay_opacity, scroll_to_section, use_scroll_y};

#[derive(Clone, Debug, PartialEq)]
pub enum HeroMedia {
    Image(&'static str),
    /// Looping, muted background video with a poster image.
    Video {
        src: &'static str,
        poster: &'static str,
    },
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    #[prop_or_default]
    pub eyebrow: Option<&'static str>,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub media: HeroMedia,
    pub cta_label: &'static str,
    /// Section id the primary button scrolls to.
    pub cta_target: &'static str,
    #[prop_or_default]
    pub secondary: Option<(&'static str, &'static str)>,
}

fn scroll_button(label: &'static str, target: &'static str, class: &'static str) -> Html {
    let onclick = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_section(target);
    });
    html! {
        <a href={format!("#{}", target)} class={class} {onclick}>{label}</a>
    }
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    hero_markup(props, overlay_opacity(use_scroll_y()))
}

fn hero_markup(props: &HeroProps, dim_opacity: f64) -> Html {
    let hero_css = r#"
        .hero {
            position: relative;
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
            text-align: center;
            overflow: hidden;
            padding: 8rem 2rem 4rem;
        }
        .hero-media {
            position: absolute;
            inset: 0;
            width: 100%;
            height: 100%;
            object-fit: cover;
            z-index: 0;
        }
        .hero-overlay {
            position: absolute;
            inset: 0;
            background: #000;
            z-index: 1;
            pointer-events: none;
        }
        .hero-gradient {
            position: absolute;
            inset: 0;
            background: linear-gradient(180deg, rgba(13, 8, 6, 0.2) 0%, rgba(13, 8, 6, 0.85) 100%);
            z-index: 1;
        }
        .hero-content {
            position: relative;
            z-index: 2;
            max-width: 860px;
        }
        .hero-eyebrow {
            color: #f5c06b;
            letter-spacing: 0.3em;
            text-transform: uppercase;
            font-size: 0.8rem;
            margin-bottom: 1.5rem;
        }
        .hero-title {
            font-family: 'Cinzel', serif;
            font-size: 4rem;
            line-height: 1.1;
            margin-bottom: 1.5rem;
            background: linear-gradient(45deg, #fff3d6, #ff6a1a);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }
        .hero-subtitle {
            font-size: 1.3rem;
            color: #e8d9c7;
            margin-bottom: 2.5rem;
        }
        .hero-cta-group {
            display: flex;
            gap: 1rem;
            justify-content: center;
            flex-wrap: wrap;
        }
        .hero-cta {
            padding: 1rem 2.5rem;
            border-radius: 999px;
            background: linear-gradient(45deg, #ff6a1a, #f5c06b);
            color: #1a0d06;
            font-weight: 700;
            text-decoration: none;
            transition: transform 0.3s ease, box-shadow 0.3s ease;
        }
        .hero-cta:hover {
            transform: translateY(-2px);
            box-shadow: 0 6px 30px rgba(255, 106, 26, 0.4);
        }
        .hero-secondary {
            padding: 1rem 2.5rem;
            border-radius: 999px;
            border: 1px solid rgba(245, 192, 107, 0.5);
            color: #f5c06b;
            text-decoration: none;
        }
        @media (max-width: 768px) {
            .hero-title {
                font-size: 2.5rem;
            }
            .hero-subtitle {
                font-size: 1.1rem;
            }
        }
    "#;
    let media = match &props.media {
        HeroMedia::Image(src) => html! {
            <img class="hero-media" src={*src} alt="" />
        },
        HeroMedia::Video { src, poster } => html! {
            <video class="hero-media" src={*src} poster={*poster}
                autoplay=true loop=true muted=true playsinline=true></video>
        },
    };
    html! {
        <section class="hero" id="top">
            <style>{hero_css}</style>
            {media}
            <div class="hero-gradient"></div>
            <div class="hero-overlay" style={format!("opacity: {};", dim_opacity)}></div>
            <div class="hero-content">
                if let Some(eyebrow) = props.eyebrow {
                    <p class="hero-eyebrow">{eyebrow}</p>
                }
                <h1 class="hero-title">{props.title}</h1>
                <p class="hero-subtitle">{props.subtitle}</p>
                <div class="hero-cta-group">
                    { scroll_button(props.cta_label, props.cta_target, "hero-cta") }
                    if let Some((label, target)) = props.secondary {
                        { scroll_button(label, target, "hero-secondary") }
                    }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::virtual_dom::VNode;

    fn props() -> HeroProps {
        HeroProps {
            eyebrow: None,
            title: "LAVA",
            subtitle: "Become the fire.",
            media: HeroMedia::Image("/assets/lava-hero.webp"),
            cta_label: "Apply",
            cta_target: "apply",
            secondary: None,
        }
    }

    #[test]
    fn hero_is_a_section_anchored_at_top() {
        match hero_markup(&props(), 0.0) {
            VNode::VTag(tag) => {
                assert_eq!(tag.tag(), "section");
                let id = tag.attributes.iter().find(|(name, _)| *name == "id");
                assert_eq!(id.map(|(_, value)| value), Some("top"));
            }
            _ => panic!("hero root is not an element"),
        }
    }
}
