use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::config;
use crate::Route;

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, config::BRAND)
}

#[function_component(SiteFooter)]
pub fn site_footer() -> Html {
    let year = chrono::Utc::now().year();
    let footer_css = r#"
        .site-footer {
            padding: 4rem 2rem 2rem;
            background: #0a0604;
            border-top: 1px solid rgba(255, 106, 26, 0.15);
            color: #b89f86;
        }
        .footer-inner {
            max-width: 1200px;
            margin: 0 auto;
            display: grid;
            grid-template-columns: 2fr 1fr 1fr;
            gap: 2rem;
        }
        .footer-brand h3 {
            font-family: 'Cinzel', serif;
            color: #f5c06b;
            letter-spacing: 0.1em;
            margin-bottom: 0.5rem;
        }
        .site-footer h4 {
            color: #fff3d6;
            margin-bottom: 0.75rem;
        }
        .site-footer ul {
            list-style: none;
            padding: 0;
            margin: 0;
        }
        .site-footer li {
            margin-bottom: 0.5rem;
        }
        .site-footer a {
            color: #e8d9c7;
            text-decoration: none;
        }
        .site-footer a:hover {
            color: #ff6a1a;
        }
        .footer-bottom {
            max-width: 1200px;
            margin: 3rem auto 0;
            padding-top: 1.5rem;
            border-top: 1px solid rgba(255, 255, 255, 0.05);
            font-size: 0.85rem;
            text-align: center;
        }
        @media (max-width: 768px) {
            .footer-inner {
                grid-template-columns: 1fr;
            }
        }
    "#;
    html! {
        <footer class="site-footer">
            <style>{footer_css}</style>
            <div class="footer-inner">
                <div class="footer-brand">
                    <h3>{config::BRAND}</h3>
                    <p>{config::TAGLINE}</p>
                </div>
                <div>
                    <h4>{"Paths"}</h4>
                    <ul>
                        <li><Link<Route> to={Route::Lava}>{"LAVA Initiation"}</Link<Route>></li>
                        <li><Link<Route> to={Route::ImmortalRoom}>{config::ROOM_BRAND}</Link<Route>></li>
                    </ul>
                </div>
                <div>
                    <h4>{"Contact"}</h4>
                    <ul>
                        <li>
                            <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                        </li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">{copyright_line(year)}</div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_year_and_brand() {
        assert_eq!(
            copyright_line(2026),
            "© 2026 Immortal Flame. All rights reserved."
        );
    }
}
