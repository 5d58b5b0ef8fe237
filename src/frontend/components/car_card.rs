use leptos::prelude::*;

use crate::web::templates::{CardView, ListingView};

#[component]
pub fn CarCard(card: CardView, on_reserve: Callback<String>) -> impl IntoView {
    let CardView {
        photo_url,
        photo_alt,
        title,
        badges,
        price_text,
        price_unit,
        reserve,
        ..
    } = card;
    let data_id = reserve.car_id.clone();
    let car_id = reserve.car_id;

    view! {
        <li class="card">
            <img class="card__img" src=photo_url alt=photo_alt loading="lazy"/>
            <div class="card__body">
                <h3>{title}</h3>
                <div class="card__meta">
                    {badges
                        .into_iter()
                        .map(|badge| view! { <span class="badge">{badge}</span> })
                        .collect_view()}
                </div>
            </div>
            <div class="card__foot">
                <div>
                    <strong class="price">{price_text}</strong>
                    " "
                    {price_unit}
                </div>
                <button
                    type="button"
                    class="btn btn--primary small"
                    data-id=data_id
                    data-title=reserve.title
                    on:click=move |_| on_reserve.run(car_id.clone())
                >
                    "Reserve"
                </button>
            </div>
        </li>
    }
}

#[component]
pub fn SkeletonCard() -> impl IntoView {
    view! {
        <li class="card" aria-busy="true">
            <div class="card__img card__img--skeleton"></div>
            <div class="card__body">
                <div class="card__meta">"Loading…"</div>
            </div>
            <div class="card__foot">
                <span>"—"</span>
                <span></span>
            </div>
        </li>
    }
}

/// Skeletons while a request is in flight, otherwise one card per car.
#[component]
pub fn CarGrid(listing: Signal<ListingView>, on_reserve: Callback<String>) -> impl IntoView {
    view! {
        <ul id="grid" class="grid">
            {move || {
                let listing = listing.get();
                if listing.skeletons > 0 {
                    (0..listing.skeletons)
                        .map(|_| view! { <SkeletonCard/> })
                        .collect_view()
                        .into_any()
                } else {
                    listing
                        .cards
                        .into_iter()
                        .map(|card| view! { <CarCard card on_reserve/> })
                        .collect_view()
                        .into_any()
                }
            }}
        </ul>
    }
}
