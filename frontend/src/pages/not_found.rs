use yew::prelude::*;
use yew_router::prelude::Link;

use crate::config;
use crate::utils::scroll::use_scroll_to_top;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_scroll_to_top();
    html! {
        <div class="not-found">
            <style>
                {r#"
    .not-found {
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        text-align: center;
        padding: 2rem;
    }
    .not-found h1 {
        font-family: 'Cinzel', serif;
        font-size: 3rem;
        color: #fff3d6;
        margin-bottom: 1rem;
    }
    .not-found p {
        color: #b89f86;
        margin-bottom: 2rem;
    }
    .not-found-links {
        display: flex;
        gap: 1rem;
        flex-wrap: wrap;
        justify-content: center;
    }
    .not-found-links a {
        padding: 0.9rem 2rem;
        border-radius: 999px;
        border: 1px solid rgba(245, 192, 107, 0.5);
        color: #f5c06b;
        text-decoration: none;
    }
                "#}
            </style>
            <h1>{"This path has gone dark."}</h1>
            <p>{"The page you were looking for is not here. Two fires are still burning:"}</p>
            <div class="not-found-links">
                <Link<Route> to={Route::Lava}>{"LAVA Initiation"}</Link<Route>>
                <Link<Route> to={Route::ImmortalRoom}>{config::ROOM_BRAND}</Link<Route>>
            </div>
        </div>
    }
}
