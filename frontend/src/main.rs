use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod carousel;
mod config;
mod pointer;
mod storage;
mod timers;
mod welcome_gate;

mod components {
    pub mod background;
    pub mod buttons;
    pub mod illustration;
    pub mod text_effects;
}

mod pages {
    pub mod entry;
    pub mod landing;
}

use pages::{entry::EntryPage, landing::LandingPage};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <LandingPage /> }
        },
        Route::Login => {
            info!("Rendering Login page");
            html! {
                <EntryPage heading="Sign In" blurb="Welcome back! Pick up your learning journey where you left off." />
            }
        },
        Route::Register => {
            info!("Rendering Register page");
            html! {
                <EntryPage heading="Register" blurb="Choose your role and unlock a world of learning." />
            }
        },
        Route::NotFound => {
            info!("Unknown route, falling back to Landing page");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
