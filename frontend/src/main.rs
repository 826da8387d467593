use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod components {
    pub mod benefits;
    pub mod contact_form;
    pub mod fade_in;
    pub mod faq;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod pricing;
    pub mod prophecy;
    pub mod testimonials;
}
mod pages {
    pub mod immortal_room;
    pub mod lava;
    pub mod not_found;
}
mod utils {
    pub mod relay;
    pub mod reveal;
    pub mod rotation;
    pub mod scroll;
}

use pages::{immortal_room::ImmortalRoom, lava::Lava, not_found::NotFound};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/lava")]
    Lava,
    #[at("/immortal-room")]
    ImmortalRoom,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("rendering route {:?}", routes);
    match routes {
        Route::Root => html! { <Redirect<Route> to={Route::Lava} /> },
        Route::Lava => html! { <Lava /> },
        Route::ImmortalRoom => html! { <ImmortalRoom /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }));
    yew::Renderer::<App>::new().render();
}
