use leptos::prelude::*;

use crate::web::templates::NavView;

/// Header links plus the mobile drawer. Both show the same session state.
#[component]
pub fn Nav(
    nav: Signal<NavView>,
    drawer_open: RwSignal<bool>,
    #[prop(into)] login_href: String,
    on_sign_out: Callback<()>,
) -> impl IntoView {
    let greeting = move || nav.with(|n| n.greeting.clone().unwrap_or_default());
    let hide_greeting = move || nav.with(|n| n.greeting.is_none());
    let hide_sign_in = move || !nav.with(|n| n.show_sign_in);
    let hide_sign_out = move || !nav.with(|n| n.show_sign_out);
    let drawer_login_href = login_href.clone();

    view! {
        <header class="nav">
            <div class="nav__inner">
                <a href="/" class="nav__brand">"RentWheel"</a>
                <nav class="nav__links">
                    <a href="#cars">"Cars"</a>
                    <span id="navGreeting" class="nav__greeting" hidden=hide_greeting>{greeting}</span>
                    <a id="navSignIn" href=login_href class="btn btn--ghost small" hidden=hide_sign_in>
                        "Sign in"
                    </a>
                    <button
                        id="navSignOut"
                        type="button"
                        class="btn btn--ghost small"
                        hidden=hide_sign_out
                        on:click=move |_| on_sign_out.run(())
                    >
                        "Sign out"
                    </button>
                </nav>
                <button
                    id="menu"
                    type="button"
                    class="nav__menu"
                    aria-label="Menu"
                    on:click=move |_| drawer_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>
            </div>
        </header>
        <aside
            id="drawer"
            class="drawer"
            class:open=move || drawer_open.get()
            on:click=move |_| drawer_open.set(false)
        >
            <a href="#cars">"Cars"</a>
            <a id="drawerSignIn" href=drawer_login_href hidden=hide_sign_in>"Sign in"</a>
            <button
                id="drawerSignOut"
                type="button"
                hidden=hide_sign_out
                on:click=move |_| on_sign_out.run(())
            >
                "Sign out"
            </button>
        </aside>
    }
}
