use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::config;
use crate::utils::scroll::{listen_window, scroll_to_section, use_active_section, use_scroll_progress, use_scroll_y};
use crate::Route;

/// In-page navigation entry pointing at a section id.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: &'static str,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MenuState {
    pub open: bool,
}

pub enum MenuAction {
    Toggle,
    Close,
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let open = match action {
            MenuAction::Toggle => !self.open,
            MenuAction::Close => false,
        };
        if open == self.open {
            self
        } else {
            Rc::new(MenuState { open })
        }
    }
}

pub fn progress_style(percent: f64) -> String {
    format!("width: {:.2}%;", percent.clamp(0.0, 100.0))
}

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    pub links: &'static [NavLink],
    pub cta: NavLink,
    /// The other landing flow, linked from the brand bar.
    pub sibling: Route,
    pub sibling_label: &'static str,
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    let menu = use_reducer_eq(MenuState::default);
    let progress = use_scroll_progress();
    let scrolled = use_scroll_y() > config::HEADER_SCROLLED_AT;
    let ids: Vec<&'static str> = props.links.iter().map(|l| l.target).collect();
    let active = use_active_section(ids, config::ACTIVE_SECTION_MARGIN);

    // Escape closes the mobile menu
    {
        let dispatcher = menu.dispatcher();
        use_effect_with_deps(
            move |_| {
                listen_window("keydown", move |e| {
                    if let Some(key) = e.dyn_ref::<KeyboardEvent>() {
                        if key.key() == "Escape" {
                            dispatcher.dispatch(MenuAction::Close);
                        }
                    }
                })
            },
            (),
        );
    }

    let toggle = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.dispatch(MenuAction::Toggle))
    };

    let nav_link = |link: &NavLink, extra: &'static str| {
        let target = link.target;
        let menu = menu.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section(target);
            menu.dispatch(MenuAction::Close);
        });
        let is_active = active == Some(target);
        html! {
            <a
                href={format!("#{}", target)}
                class={classes!("nav-link", extra, is_active.then(|| "active"))}
                {onclick}
            >
                {link.label}
            </a>
        }
    };

    let header_css = r#"
        .site-header {
            position: fixed;
            top: 0;
            left: 0;
            right: 0;
            z-index: 50;
            transition: background 0.3s ease, padding 0.3s ease;
            padding: 1.25rem 2rem;
            background: transparent;
        }
        .site-header.scrolled {
            background: rgba(13, 8, 6, 0.92);
            backdrop-filter: blur(8px);
            padding: 0.75rem 2rem;
            border-bottom: 1px solid rgba(255, 106, 26, 0.15);
        }
        .header-inner {
            max-width: 1200px;
            margin: 0 auto;
            display: flex;
            align-items: center;
            justify-content: space-between;
            gap: 1.5rem;
        }
        .brand {
            font-family: 'Cinzel', serif;
            font-size: 1.3rem;
            letter-spacing: 0.12em;
            color: #f5c06b;
            text-decoration: none;
            text-transform: uppercase;
        }
        .site-nav {
            display: flex;
            align-items: center;
            gap: 1.5rem;
        }
        .nav-link {
            color: #e8d9c7;
            text-decoration: none;
            font-size: 0.95rem;
            position: relative;
            transition: color 0.2s ease;
        }
        .nav-link::after {
            content: '';
            position: absolute;
            left: 0;
            bottom: -4px;
            width: 0;
            height: 2px;
            background: #ff6a1a;
            transition: width 0.3s ease;
        }
        .nav-link:hover, .nav-link.active {
            color: #fff3d6;
        }
        .nav-link.active::after {
            width: 100%;
        }
        .nav-cta {
            padding: 0.55rem 1.2rem;
            border-radius: 999px;
            background: linear-gradient(45deg, #ff6a1a, #f5c06b);
            color: #1a0d06;
            font-weight: 600;
        }
        .nav-cta::after {
            display: none;
        }
        .sibling-link {
            color: #b89f86;
            font-size: 0.85rem;
            text-decoration: none;
        }
        .menu-toggle {
            display: none;
            background: none;
            border: none;
            color: #f5c06b;
            font-size: 1.6rem;
            cursor: pointer;
        }
        .progress-track {
            position: absolute;
            left: 0;
            right: 0;
            bottom: 0;
            height: 3px;
        }
        .progress-bar {
            height: 100%;
            background: linear-gradient(90deg, #ff6a1a, #f5c06b);
            transition: width 0.1s linear;
        }
        @media (max-width: 860px) {
            .menu-toggle {
                display: block;
            }
            .site-nav {
                position: fixed;
                top: 0;
                right: 0;
                height: 100vh;
                width: min(80vw, 320px);
                flex-direction: column;
                align-items: flex-start;
                padding: 5rem 2rem 2rem;
                background: rgba(13, 8, 6, 0.98);
                transform: translateX(100%);
                transition: transform 0.3s ease;
            }
            .site-nav.open {
                transform: translateX(0);
            }
        }
    "#;

    html! {
        <header class={classes!("site-header", scrolled.then(|| "scrolled"))}>
            <style>{header_css}</style>
            <div class="header-inner">
                <a class="brand" href="#top">{config::BRAND}</a>
                <button
                    class="menu-toggle"
                    aria-label="Toggle menu"
                    aria-expanded={menu.open.to_string()}
                    onclick={toggle}
                >
                    { if menu.open { "✕" } else { "☰" } }
                </button>
                <nav class={classes!("site-nav", menu.open.then(|| "open"))}>
                    { for props.links.iter().map(|link| nav_link(link, "")) }
                    { nav_link(&props.cta, "nav-cta") }
                    <Link<Route> to={props.sibling.clone()} classes="sibling-link">
                        {props.sibling_label}
                    </Link<Route>>
                </nav>
            </div>
            <div class="progress-track">
                <div class="progress-bar" style={progress_style(progress)}></div>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_opens_and_closes_the_menu() {
        let menu = Rc::new(MenuState::default());
        let menu = menu.reduce(MenuAction::Toggle);
        assert!(menu.open);
        let menu = menu.reduce(MenuAction::Toggle);
        assert!(!menu.open);
    }

    #[test]
    fn close_is_idempotent() {
        let closed = Rc::new(MenuState::default());
        let still_closed = closed.clone().reduce(MenuAction::Close);
        assert!(Rc::ptr_eq(&closed, &still_closed));

        let open = Rc::new(MenuState { open: true });
        assert!(!open.reduce(MenuAction::Close).open);
    }

    #[test]
    fn progress_bar_width_tracks_percentage() {
        assert_eq!(progress_style(0.0), "width: 0.00%;");
        assert_eq!(progress_style(37.5), "width: 37.50%;");
        assert_eq!(progress_style(140.0), "width: 100.00%;");
    }
}
