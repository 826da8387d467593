use yew::prelude::*;

use crate::components::benefits::{Benefit, BenefitList};
use crate::components::contact_form::ContactForm;
use crate::components::faq::{FaqEntry, FaqSection};
use crate::components::fade_in::FadeIn;
use crate::components::footer::SiteFooter;
use crate::components::header::{NavLink, SiteHeader};
use crate::components::hero::{Hero, HeroMedia};
use crate::components::pricing::{PricingSection, PricingTier};
use crate::components::prophecy::{BannerVariant, Prophecy, ProphecyBanner};
use crate::components::testimonials::{Testimonial, TestimonialCarousel};
use crate::config;
use crate::utils::relay::RelayForm;
use crate::utils::reveal::{use_in_view, use_staged_reveal};
use crate::utils::scroll::{use_scroll_to_hash, use_scroll_to_top};
use crate::Route;

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "The Fire", target: "story" },
    NavLink { label: "What Burns", target: "benefits" },
    NavLink { label: "Journey", target: "journey" },
    NavLink { label: "Voices", target: "testimonials" },
    NavLink { label: "Investment", target: "pricing" },
];

const APPLY: NavLink = NavLink { label: "Apply", target: "apply" };

pub const OPENING_PROPHECY: &[Prophecy] = &[Prophecy {
    quote: "What is molten cannot be broken. It can only be poured into a new shape.",
    attribution: "The Keeper of the Flame",
}];

pub const CLOSING_PROPHECIES: &[Prophecy] = &[
    Prophecy {
        quote: "You were never meant to survive the fire. You were meant to become it.",
        attribution: "The Keeper of the Flame",
    },
    Prophecy {
        quote: "The mountain does not apologise for the lava. Neither will you.",
        attribution: "Words spoken at the first gathering",
    },
    Prophecy {
        quote: "Every ending you fear is a door the flame already walked through.",
        attribution: "The Keeper of the Flame",
    },
];

pub const BENEFITS: &[Benefit] = &[
    Benefit {
        icon: "fas fa-fire",
        title: "Release the old skin",
        description: "Name and dissolve the patterns, stories and loyalties that keep you small, in a held container rather than alone at 3am.",
    },
    Benefit {
        icon: "fas fa-heart-pulse",
        title: "Live in your body again",
        description: "Breath, movement and stillness practices that bring you out of the loop of thinking and back into sensation and power.",
    },
    Benefit {
        icon: "fas fa-eye",
        title: "See clearly",
        description: "Weekly mirror sessions that show you where you leak energy and where your true yes has been waiting.",
    },
    Benefit {
        icon: "fas fa-people-group",
        title: "Burn together",
        description: "A small circle of initiates who witness your transformation and refuse to let you shrink back.",
    },
    Benefit {
        icon: "fas fa-mountain-sun",
        title: "Rise with direction",
        description: "Leave with a living vision and a grounded plan for the next twelve months, not a fading retreat high.",
    },
    Benefit {
        icon: "fas fa-infinity",
        title: "Carry the flame",
        description: "Lifetime access to the recordings and practices, plus a seat in the Room of Light for your first month.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JourneyStep {
    pub phase: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const JOURNEY: &[JourneyStep] = &[
    JourneyStep {
        phase: "Weeks 1-2",
        title: "Ignition",
        description: "We map the terrain: what you carry, what you want, and what stands between the two.",
    },
    JourneyStep {
        phase: "Weeks 3-5",
        title: "Eruption",
        description: "Deep process work. The old structures crack open and what is real starts to move.",
    },
    JourneyStep {
        phase: "Weeks 6-8",
        title: "Flow",
        description: "You learn to channel the released energy into choices, relationships and work.",
    },
    JourneyStep {
        phase: "Weeks 9-12",
        title: "New Land",
        description: "What was molten cools into new ground. We build the rituals that keep it solid.",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "I came in numb and left on fire. Three months later I have quit the job that was killing me and started the work I was born for.",
        author: "Maja K.",
        role: Some("LAVA initiate, spring circle"),
        photo: Some("/assets/testimonials/maja.webp"),
    },
    Testimonial {
        quote: "Nothing I had tried before touched the place this did. The circle held me while I finally let it all burn.",
        author: "Daniel R.",
        role: Some("Entrepreneur"),
        photo: None,
    },
    Testimonial {
        quote: "I thought I needed more discipline. I needed to stop abandoning myself. LAVA showed me the difference.",
        author: "Sofia L.",
        role: Some("Therapist"),
        photo: Some("/assets/testimonials/sofia.webp"),
    },
    Testimonial {
        quote: "Twelve weeks, and my family says I am a different person. I say I am finally the same person inside and out.",
        author: "Jonas P.",
        role: None,
        photo: None,
    },
];

pub const PRICING: &[PricingTier] = &[
    PricingTier {
        name: "Full Initiation",
        tagline: "Commit in one move and receive a private integration session.",
        price: 1111.0,
        currency: "€",
        period: "one time",
        features: &[
            "12 weeks of live circle sessions",
            "4 private mirror sessions",
            "1 bonus integration session",
            "Lifetime access to recordings",
            "First month in the Room of Light",
        ],
        checkout_url: config::checkout::LAVA_FULL,
        highlighted: true,
        badge: Some("Most chosen"),
    },
    PricingTier {
        name: "Three Flames",
        tagline: "The same initiation, paid across three months.",
        price: 399.0,
        currency: "€",
        period: "× 3 months",
        features: &[
            "12 weeks of live circle sessions",
            "4 private mirror sessions",
            "Lifetime access to recordings",
            "First month in the Room of Light",
        ],
        checkout_url: config::checkout::LAVA_INSTALLMENTS,
        highlighted: false,
        badge: None,
    },
];

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        id: "faq-who",
        question: "Who is LAVA for?",
        answer: "For people who sense that something in their life is finished but have not yet let it end. You do not need prior experience with coaching, breathwork or ceremony.",
    },
    FaqEntry {
        id: "faq-time",
        question: "How much time does it take each week?",
        answer: "Plan for one 2-hour live circle and around 30 minutes a day of practice. Every session is recorded if you miss one.",
    },
    FaqEntry {
        id: "faq-online",
        question: "Is it online?",
        answer: "Yes. Circles meet live on video, and the practices fit into your own home and rhythm.",
    },
    FaqEntry {
        id: "faq-apply",
        question: "Why do I have to apply?",
        answer: "Circles are small and the work is deep. A short application lets us make sure this is the right fire for you right now.",
    },
    FaqEntry {
        id: "faq-refund",
        question: "What if it is not right for me?",
        answer: "If after the first two weeks you feel LAVA is not for you, write to us and we will refund you in full.",
    },
];

pub const PATHS: &[&str] = &["Full Initiation", "Three Flames", "Not sure yet"];

const APPLICATION: RelayForm = RelayForm {
    recipient: config::LAVA_RECIPIENT,
    subject: "New LAVA application",
    redirect_path: "/lava#apply",
    captcha: false,
};

#[function_component(StorySection)]
fn story_section() -> Html {
    html! {
        <section class="story-section" id="story">
            <div class="story-content">
                <FadeIn class="story-text">
                    <h2>{"Some things only fire can teach."}</h2>
                    <p>{"You have read the books. You have done the courses. You know, in your head, who you could be. And still the same weight sits on your chest every morning."}</p>
                    <p>{"LAVA is a twelve-week initiation for people done with managing their lives from the surface. We go down to where the heat is, and we let it do its work."}</p>
                </FadeIn>
                <FadeIn class="story-image" delay_ms={200}>
                    <img src="/assets/lava-flow.webp" alt="Lava meeting the sea at dusk" loading="lazy" />
                </FadeIn>
            </div>
        </section>
    }
}

#[function_component(JourneySection)]
fn journey_section() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), true);
    let shown = use_staged_reveal(JOURNEY.len(), config::REVEAL_STEP_MS * 3, in_view);
    html! {
        <section class="journey-section" id="journey">
            <h2>{"The Twelve-Week Descent"}</h2>
            <ol class="journey" ref={node}>
                { for JOURNEY.iter().enumerate().map(|(i, step)| html! {
                    <li class={classes!("journey-step", (i < shown).then(|| "shown"))}>
                        <span class="journey-phase">{step.phase}</span>
                        <h3>{step.title}</h3>
                        <p>{step.description}</p>
                    </li>
                }) }
            </ol>
        </section>
    }
}

#[function_component(Lava)]
pub fn lava() -> Html {
    use_scroll_to_top();
    use_scroll_to_hash();

    let page_css = r#"
        .story-section {
            padding: 6rem 2rem;
        }
        .story-content {
            max-width: 1200px;
            margin: 0 auto;
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 4rem;
            align-items: center;
        }
        .story-text h2 {
            font-family: 'Cinzel', serif;
            font-size: 2.4rem;
            color: #fff3d6;
            margin-bottom: 1.5rem;
        }
        .story-text p {
            color: #cbb8a3;
            font-size: 1.15rem;
            line-height: 1.8;
            margin-bottom: 1rem;
        }
        .story-image img {
            width: 100%;
            border-radius: 20px;
            box-shadow: 0 20px 60px rgba(255, 106, 26, 0.2);
        }
        .journey-section {
            padding: 6rem 2rem;
            max-width: 900px;
            margin: 0 auto;
        }
        .journey-section h2 {
            font-family: 'Cinzel', serif;
            font-size: 2.5rem;
            text-align: center;
            color: #fff3d6;
            margin-bottom: 3rem;
        }
        .journey {
            list-style: none;
            padding: 0 0 0 2rem;
            border-left: 2px solid rgba(255, 106, 26, 0.35);
        }
        .journey-step {
            position: relative;
            padding: 0 0 2.5rem 1.5rem;
            opacity: 0;
            transform: translateX(-12px);
            transition: opacity 0.6s ease, transform 0.6s ease;
        }
        .journey-step.shown {
            opacity: 1;
            transform: translateX(0);
        }
        .journey-step::before {
            content: '';
            position: absolute;
            left: -2.55rem;
            top: 0.3rem;
            width: 14px;
            height: 14px;
            border-radius: 50%;
            background: #ff6a1a;
            box-shadow: 0 0 16px rgba(255, 106, 26, 0.8);
        }
        .journey-phase {
            color: #f5c06b;
            font-size: 0.8rem;
            letter-spacing: 0.2em;
            text-transform: uppercase;
        }
        .journey-step h3 {
            color: #fff3d6;
            font-size: 1.5rem;
            margin: 0.4rem 0;
        }
        .journey-step p {
            color: #cbb8a3;
            line-height: 1.7;
        }
        @media (max-width: 768px) {
            .story-content {
                grid-template-columns: 1fr;
                gap: 2rem;
            }
        }
    "#;

    html! {
        <div class="landing-page lava-page">
            <style>{page_css}</style>
            <SiteHeader
                links={NAV_LINKS}
                cta={APPLY}
                sibling={Route::ImmortalRoom}
                sibling_label={config::ROOM_BRAND}
            />
            <Hero
                eyebrow={Some("A twelve-week initiation")}
                title="LAVA"
                subtitle="Let the old shape melt. Step out of the fire as the one you have been waiting to become."
                media={HeroMedia::Video { src: "/assets/lava-hero.mp4", poster: "/assets/lava-hero.webp" }}
                cta_label="Apply for the next circle"
                cta_target="apply"
                secondary={Some(("Feel the fire first", "story"))}
            />
            <ProphecyBanner prophecies={OPENING_PROPHECY} />
            <StorySection />
            <BenefitList
                id="benefits"
                heading="What the fire burns away"
                intro={Some("Twelve weeks. Six transformations. One life that finally fits.")}
                benefits={BENEFITS}
            />
            <JourneySection />
            <ProphecyBanner prophecies={CLOSING_PROPHECIES} variant={BannerVariant::Dawn} />
            <TestimonialCarousel id="testimonials" heading="Voices from the fire" testimonials={TESTIMONIALS} />
            <PricingSection
                id="pricing"
                heading="Your investment"
                subheading={Some(AttrValue::Static("Places open by application only. Next circle begins at the new moon."))}
                tiers={PRICING}
                footnote={Some("Full refund within the first two weeks if LAVA is not for you.")}
            />
            <FaqSection id="faq" heading="Questions before the leap" entries={FAQ} />
            <ContactForm
                id="apply"
                heading="Apply for LAVA"
                intro="Tell us a little about yourself. Every application is read personally and answered within three days."
                relay={APPLICATION}
                submit_label="Send my application"
                paths={PATHS}
            />
            <SiteFooter />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_rotating_and_listed_section_has_content() {
        assert!(!OPENING_PROPHECY.is_empty());
        assert!(!CLOSING_PROPHECIES.is_empty());
        assert!(!BENEFITS.is_empty());
        assert!(!JOURNEY.is_empty());
        assert!(!TESTIMONIALS.is_empty());
        assert!(!PRICING.is_empty());
        assert!(!FAQ.is_empty());
    }

    #[test]
    fn exactly_one_tier_is_highlighted() {
        assert_eq!(PRICING.iter().filter(|t| t.highlighted).count(), 1);
    }

    #[test]
    fn nav_targets_are_unique() {
        let mut targets: Vec<_> = NAV_LINKS.iter().map(|l| l.target).collect();
        targets.push(APPLY.target);
        let total = targets.len();
        targets.sort_unstable();
        targets.dedup();
        assert_eq!(targets.len(), total);
    }

    #[test]
    fn application_returns_to_the_form() {
        assert_eq!(
            APPLICATION.redirect_url("https://immortalflame.com"),
            "https://immortalflame.com/lava?sent=1#apply"
        );
    }
}
