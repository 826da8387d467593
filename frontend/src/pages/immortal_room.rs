use yew::prelude::*;

use crate::components::benefits::{Benefit, BenefitList};
use crate::components::contact_form::ContactForm;
use crate::components::faq::{FaqEntry, FaqSection};
use crate::components::footer::SiteFooter;
use crate::components::header::{NavLink, SiteHeader};
use crate::components::hero::{Hero, HeroMedia};
use crate::components::pricing::{
    savings_percent, Availability, ComparisonRow, PricingSection, PricingTier,
};
use crate::components::prophecy::{BannerVariant, Prophecy, ProphecyBanner};
use crate::components::testimonials::{Testimonial, TestimonialCarousel};
use crate::config;
use crate::utils::relay::RelayForm;
use crate::utils::scroll::{use_scroll_to_hash, use_scroll_to_top};
use crate::Route;

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Inside", target: "inside" },
    NavLink { label: "Members", target: "testimonials" },
    NavLink { label: "Membership", target: "pricing" },
    NavLink { label: "FAQ", target: "faq" },
];

const CONTACT: NavLink = NavLink { label: "Ask us", target: "contact" };

pub const OPENING_PROPHECY: &[Prophecy] = &[Prophecy {
    quote: "There is a room inside you where the light has never gone out. We only keep the door open.",
    attribution: "The Keeper of the Flame",
}];

pub const CLOSING_PROPHECY: &[Prophecy] = &[Prophecy {
    quote: "Those who tend the flame together are never again alone in the dark.",
    attribution: "Inscription above the Room",
}];

pub const INSIDE: &[Benefit] = &[
    Benefit {
        icon: "fas fa-sun",
        title: "Monthly light transmissions",
        description: "A live gathering each new moon with teaching, guided practice and open questions.",
    },
    Benefit {
        icon: "fas fa-wind",
        title: "Weekly breath rooms",
        description: "Drop in to a 45-minute guided breath journey to clear what the week left behind.",
    },
    Benefit {
        icon: "fas fa-book-open",
        title: "The flame library",
        description: "Every practice, meditation and teaching recorded and organised by what you need today.",
    },
    Benefit {
        icon: "fas fa-comments",
        title: "A circle that stays",
        description: "A private members' space to share, ask and be met by people walking the same path.",
    },
    Benefit {
        icon: "fas fa-hand-holding-heart",
        title: "Member pricing",
        description: "Priority places and reduced prices on LAVA circles and in-person gatherings.",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "The Room is where I come home to myself every week. It is the one appointment I never cancel.",
        author: "Elina V.",
        role: Some("Member since the first season"),
        photo: Some("/assets/testimonials/elina.webp"),
    },
    Testimonial {
        quote: "After LAVA I was afraid of losing the fire. The Room keeps it burning without me having to do it alone.",
        author: "Marco T.",
        role: Some("LAVA initiate and member"),
        photo: None,
    },
    Testimonial {
        quote: "Gentle, deep and real. I did not know an online space could feel this warm.",
        author: "Hanna S.",
        role: None,
        photo: Some("/assets/testimonials/hanna.webp"),
    },
];

const MONTHLY_PRICE: f64 = 44.0;
const YEARLY_PRICE: f64 = MONTHLY_PRICE * 10.0;

pub const PRICING: &[PricingTier] = &[
    PricingTier {
        name: "Spark",
        tagline: "Step in and feel the warmth.",
        price: MONTHLY_PRICE,
        currency: "€",
        period: "/ month",
        features: &[
            "Monthly light transmissions",
            "Weekly breath rooms",
            "Members' circle",
        ],
        checkout_url: config::checkout::ROOM_MONTHLY,
        highlighted: false,
        badge: None,
    },
    PricingTier {
        name: "Flame",
        tagline: "A full year of tending the fire.",
        price: YEARLY_PRICE,
        currency: "€",
        period: "/ year",
        features: &[
            "Everything in Spark",
            "The complete flame library",
            "Member pricing on LAVA",
            "Two months free",
        ],
        checkout_url: config::checkout::ROOM_YEARLY,
        highlighted: true,
        badge: Some("Best value"),
    },
    PricingTier {
        name: "Immortal",
        tagline: "One offering. The Room is yours for life.",
        price: 1444.0,
        currency: "€",
        period: "lifetime",
        features: &[
            "Everything in Flame, forever",
            "Annual private session",
            "Seat at every in-person gathering",
        ],
        checkout_url: config::checkout::ROOM_LIFETIME,
        highlighted: false,
        badge: None,
    },
];

pub const COMPARISON: &[ComparisonRow] = &[
    ComparisonRow {
        label: "Monthly light transmissions",
        cells: &[Availability::Included, Availability::Included, Availability::Included],
    },
    ComparisonRow {
        label: "Weekly breath rooms",
        cells: &[Availability::Included, Availability::Included, Availability::Included],
    },
    ComparisonRow {
        label: "Members' circle",
        cells: &[Availability::Included, Availability::Included, Availability::Included],
    },
    ComparisonRow {
        label: "Flame library",
        cells: &[Availability::Text("Last 3 months"), Availability::Included, Availability::Included],
    },
    ComparisonRow {
        label: "LAVA member pricing",
        cells: &[Availability::Excluded, Availability::Text("15% off"), Availability::Text("25% off")],
    },
    ComparisonRow {
        label: "Private session",
        cells: &[Availability::Excluded, Availability::Excluded, Availability::Text("Yearly")],
    },
    ComparisonRow {
        label: "In-person gatherings",
        cells: &[Availability::Excluded, Availability::Excluded, Availability::Included],
    },
];

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        id: "faq-room-what",
        question: "What exactly is the Room of Light?",
        answer: "An ongoing online membership: live gatherings, guided practices and a circle of people committed to living awake. It is the home for everything we teach between initiations.",
    },
    FaqEntry {
        id: "faq-room-lava",
        question: "Do I need to have done LAVA first?",
        answer: "No. The Room is open to anyone. Many members join first and step into LAVA later.",
    },
    FaqEntry {
        id: "faq-room-cancel",
        question: "Can I cancel?",
        answer: "Monthly memberships can be cancelled at any time from the payment receipt link. Yearly memberships run to the end of the paid year.",
    },
    FaqEntry {
        id: "faq-room-live",
        question: "What if I cannot join live?",
        answer: "Every transmission and breath room is recorded and added to the library within a day.",
    },
];

const QUESTIONS: RelayForm = RelayForm {
    recipient: config::ROOM_RECIPIENT,
    subject: "Room of Light question",
    redirect_path: "/immortal-room#contact",
    captcha: true,
};

#[function_component(ImmortalRoom)]
pub fn immortal_room() -> Html {
    use_scroll_to_top();
    use_scroll_to_hash();

    let saving = savings_percent(MONTHLY_PRICE, YEARLY_PRICE);
    let subheading = format!(
        "Choose how you want to tend the flame. Yearly members save {}%.",
        saving
    );

    html! {
        <div class="landing-page room-page">
            <SiteHeader
                links={NAV_LINKS}
                cta={CONTACT}
                sibling={Route::Lava}
                sibling_label="LAVA Initiation"
            />
            <Hero
                eyebrow={Some("The Immortal Flame membership")}
                title={config::ROOM_BRAND}
                subtitle="A living sanctuary to keep your fire burning, together, every week of the year."
                media={HeroMedia::Image("/assets/room-of-light.webp")}
                cta_label="Enter the Room"
                cta_target="pricing"
                secondary={Some(("See what is inside", "inside"))}
            />
            <ProphecyBanner prophecies={OPENING_PROPHECY} variant={BannerVariant::Dawn} />
            <BenefitList
                id="inside"
                heading="Inside the Room"
                intro={Some("Everything you need to keep the flame alive after the initiation ends.")}
                benefits={INSIDE}
            />
            <TestimonialCarousel id="testimonials" heading="From the members" testimonials={TESTIMONIALS} />
            <PricingSection
                id="pricing"
                heading="Membership"
                subheading={Some(AttrValue::from(subheading))}
                tiers={PRICING}
                comparison={COMPARISON}
            />
            <ProphecyBanner prophecies={CLOSING_PROPHECY} />
            <FaqSection id="faq" heading="Questions about the Room" entries={FAQ} />
            <ContactForm
                id="contact"
                heading="Still wondering?"
                intro="Ask anything. A real person from the Immortal Flame team answers every message."
                relay={QUESTIONS}
                submit_label="Send my question"
                message_placeholder="What would you like to know about the Room of Light?"
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
        assert!(!CLOSING_PROPHECY.is_empty());
        assert!(!INSIDE.is_empty());
        assert!(!TESTIMONIALS.is_empty());
        assert!(!PRICING.is_empty());
        assert!(!FAQ.is_empty());
    }

    #[test]
    fn comparison_rows_have_one_cell_per_tier() {
        for row in COMPARISON {
            assert_eq!(row.cells.len(), PRICING.len(), "row {}", row.label);
        }
    }

    #[test]
    fn yearly_membership_is_cheaper_than_twelve_months() {
        assert_eq!(savings_percent(MONTHLY_PRICE, YEARLY_PRICE), 17);
    }

    #[test]
    fn yearly_copy_matches_the_price() {
        let free_months = 12.0 - YEARLY_PRICE / MONTHLY_PRICE;
        assert_eq!(free_months, 2.0);
        assert!(PRICING[1].features.contains(&"Two months free"));
    }

    #[test]
    fn questions_form_uses_captcha() {
        let fields = QUESTIONS.hidden_fields("https://immortalflame.com");
        assert!(fields.contains(&("_captcha", "true".to_string())));
        assert_eq!(
            QUESTIONS.action_url(),
            "https://formsubmit.co/room@immortalflame.com"
        );
    }
}
