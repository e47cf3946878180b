use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct EntryProps {
    pub heading: AttrValue,
    pub blurb: AttrValue,
}

/// Landing spot for the sign-in and registration links. The real forms live
/// in the application this page onboards into.
#[function_component(EntryPage)]
pub fn entry_page(props: &EntryProps) -> Html {
    html! {
        <div class="entry-page">
            <h1>{ props.heading.clone() }</h1>
            <p>{ props.blurb.clone() }</p>
            <Link<Route> to={Route::Home} classes="entry-back-link">
                {"← Back to the tour"}
            </Link<Route>>
            <style>
                {r#"
                    .entry-page {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        padding: 2rem;
                        text-align: center;
                        background: #1f2937;
                        color: white;
                    }

                    .entry-back-link {
                        color: #93c5fd;
                        text-decoration: none;
                    }
                "#}
            </style>
        </div>
    }
}
