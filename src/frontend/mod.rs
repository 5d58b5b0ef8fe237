pub mod components;
pub mod pages;

use leptos::prelude::*;
use leptos_meta::*;

use crate::config::AppConfig;
use pages::ListingPage;

/// Root component of the booking client
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(AppConfig::from_build_env());

    view! {
        <Title text="RentWheel - Car rental"/>
        <Meta name="description" content="Browse available cars and reserve one in a few clicks"/>
        <main>
            <ListingPage/>
        </main>
    }
}
