use leptos::prelude::*;

#[component]
pub fn Footer(year: i32) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__content">
                <p class="footer__brand">"RentWheel"</p>
                <p class="footer__copy">"© "<span id="year">{year}</span>" RentWheel. All rights reserved."</p>
            </div>
        </footer>
    }
}
