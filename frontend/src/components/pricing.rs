use yew::prelude::*;

use crate::components::fade_in::FadeIn;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PricingTier {
    pub name: &'static str,
    pub tagline: &'static str,
    pub price: f64,
    pub currency: &'static str,
    /// Shown after the price, e.g. `/ month` or `one time`.
    pub period: &'static str,
    pub features: &'static [&'static str],
    pub checkout_url: &'static str,
    pub highlighted: bool,
    pub badge: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Availability {
    Included,
    Excluded,
    Text(&'static str),
}

/// A comparison-table row: one cell per tier, in tier order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComparisonRow {
    pub label: &'static str,
    pub cells: &'static [Availability],
}

/// Whole amounts print without decimals, everything else with two.
pub fn format_price(amount: f64, currency: &str) -> String {
    if amount.fract() == 0.0 {
        format!("{}{}", currency, amount as i64)
    } else {
        format!("{}{:.2}", currency, amount)
    }
}

/// Rounded percentage saved by paying `yearly` instead of twelve `monthly`
/// payments. Zero when the yearly price is not cheaper.
pub fn savings_percent(monthly: f64, yearly: f64) -> u32 {
    let full_year = monthly * 12.0;
    if full_year <= 0.0 || yearly >= full_year {
        return 0;
    }
    ((full_year - yearly) / full_year * 100.0).round() as u32
}

#[derive(Properties, PartialEq)]
pub struct PricingCardProps {
    pub tier: PricingTier,
}

#[function_component(PricingCard)]
pub fn pricing_card(props: &PricingCardProps) -> Html {
    let tier = &props.tier;
    html! {
        <div class={classes!("pricing-card", tier.highlighted.then(|| "popular"))}>
            if let Some(badge) = tier.badge {
                <div class="popular-tag">{badge}</div>
            }
            <h3>{tier.name}</h3>
            <p class="best-for">{tier.tagline}</p>
            <div class="price">
                <span class="amount">{format_price(tier.price, tier.currency)}</span>
                <span class="period">{tier.period}</span>
            </div>
            <ul class="tier-features">
                { for tier.features.iter().map(|feature| html! {
                    <li><i class="fas fa-fire"></i>{*feature}</li>
                }) }
            </ul>
            <a class="checkout-button" href={tier.checkout_url} rel="noopener">
                <b>{"Choose "}{tier.name}</b>
            </a>
        </div>
    }
}

fn availability_cell(cell: &Availability) -> Html {
    match cell {
        Availability::Included => html! { <td class="included" aria-label="Included">{"✓"}</td> },
        Availability::Excluded => html! { <td class="excluded" aria-label="Not included">{"—"}</td> },
        Availability::Text(text) => html! { <td class="text-cell">{*text}</td> },
    }
}

#[derive(Properties, PartialEq)]
pub struct PricingSectionProps {
    pub id: &'static str,
    pub heading: &'static str,
    #[prop_or_default]
    pub subheading: Option<AttrValue>,
    pub tiers: &'static [PricingTier],
    #[prop_or_default]
    pub comparison: &'static [ComparisonRow],
    #[prop_or_default]
    pub footnote: Option<&'static str>,
}

#[function_component(PricingSection)]
pub fn pricing_section(props: &PricingSectionProps) -> Html {
    let pricing_css = r#"
        .pricing-section {
            padding: 6rem 2rem;
            max-width: 1200px;
            margin: 0 auto;
            text-align: center;
        }
        .pricing-section h2 {
            font-family: 'Cinzel', serif;
            font-size: 2.5rem;
            color: #fff3d6;
            margin-bottom: 1rem;
        }
        .pricing-subheading {
            color: #b89f86;
            margin-bottom: 3rem;
        }
        .pricing-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
            gap: 2rem;
            align-items: stretch;
        }
        .pricing-card {
            position: relative;
            padding: 2.5rem 2rem;
            border-radius: 20px;
            background: rgba(30, 18, 12, 0.8);
            border: 1px solid rgba(255, 255, 255, 0.08);
            display: flex;
            flex-direction: column;
            text-align: left;
            transition: transform 0.3s ease;
        }
        .pricing-card:hover {
            transform: translateY(-4px);
        }
        .pricing-card.popular {
            border-color: rgba(255, 106, 26, 0.6);
            box-shadow: 0 0 40px rgba(255, 106, 26, 0.15);
        }
        .popular-tag {
            position: absolute;
            top: -14px;
            left: 50%;
            transform: translateX(-50%);
            background: linear-gradient(45deg, #ff6a1a, #f5c06b);
            color: #1a0d06;
            padding: 0.3rem 1rem;
            border-radius: 999px;
            font-size: 0.8rem;
            font-weight: 700;
            white-space: nowrap;
        }
        .pricing-card h3 {
            color: #f5c06b;
            font-size: 1.5rem;
            margin-bottom: 0.25rem;
        }
        .best-for {
            color: #b89f86;
            margin-bottom: 1.5rem;
        }
        .price .amount {
            font-size: 2.6rem;
            color: #fff3d6;
            font-weight: 700;
        }
        .price .period {
            color: #b89f86;
            margin-left: 0.4rem;
        }
        .tier-features {
            list-style: none;
            padding: 0;
            margin: 1.5rem 0;
            flex: 1;
        }
        .tier-features li {
            color: #e8d9c7;
            margin-bottom: 0.75rem;
            display: flex;
            gap: 0.75rem;
            align-items: baseline;
        }
        .tier-features i {
            color: #ff6a1a;
        }
        .checkout-button {
            display: block;
            text-align: center;
            padding: 1rem 2rem;
            border-radius: 10px;
            background: linear-gradient(45deg, #ff6a1a, #f5c06b);
            color: #1a0d06;
            text-decoration: none;
            transition: box-shadow 0.3s ease;
        }
        .checkout-button:hover {
            box-shadow: 0 4px 20px rgba(255, 106, 26, 0.35);
        }
        .comparison-wrapper {
            margin-top: 4rem;
            overflow-x: auto;
        }
        .comparison-table {
            width: 100%;
            border-collapse: collapse;
            color: #e8d9c7;
        }
        .comparison-table th, .comparison-table td {
            padding: 1rem;
            border-bottom: 1px solid rgba(255, 255, 255, 0.06);
        }
        .comparison-table th {
            color: #f5c06b;
        }
        .comparison-table td:first-child {
            text-align: left;
        }
        .comparison-table .included {
            color: #ff6a1a;
            font-weight: 700;
        }
        .comparison-table .excluded {
            color: #5c4a3d;
        }
        .pricing-footnote {
            margin-top: 2rem;
            color: #8c7765;
            font-size: 0.9rem;
        }
    "#;
    html! {
        <section class="pricing-section" id={props.id}>
            <style>{pricing_css}</style>
            <h2>{props.heading}</h2>
            if let Some(subheading) = props.subheading.clone() {
                <p class="pricing-subheading">{subheading}</p>
            }
            <FadeIn>
                <div class="pricing-grid">
                    { for props.tiers.iter().map(|tier| html! { <PricingCard tier={*tier} /> }) }
                </div>
            </FadeIn>
            if !props.comparison.is_empty() {
                <FadeIn class="comparison-wrapper">
                    <table class="comparison-table">
                        <thead>
                            <tr>
                                <th></th>
                                { for props.tiers.iter().map(|tier| html! { <th>{tier.name}</th> }) }
                            </tr>
                        </thead>
                        <tbody>
                            { for props.comparison.iter().map(|row| html! {
                                <tr>
                                    <td>{row.label}</td>
                                    { for row.cells.iter().map(availability_cell) }
                                </tr>
                            }) }
                        </tbody>
                    </table>
                </FadeIn>
            }
            if let Some(footnote) = props.footnote {
                <p class="pricing-footnote">{footnote}</p>
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_prices_drop_the_decimals() {
        assert_eq!(format_price(1111.0, "$"), "$1111");
        assert_eq!(format_price(44.5, "€"), "€44.50");
        assert_eq!(format_price(33.333, "$"), "$33.33");
    }

    #[test]
    fn yearly_saving_against_twelve_months() {
        assert_eq!(savings_percent(44.0, 444.0), 16);
        assert_eq!(savings_percent(50.0, 300.0), 50);
    }

    #[test]
    fn no_saving_when_yearly_is_not_cheaper() {
        assert_eq!(savings_percent(10.0, 120.0), 0);
        assert_eq!(savings_percent(10.0, 200.0), 0);
        assert_eq!(savings_percent(0.0, 0.0), 0);
    }
}
