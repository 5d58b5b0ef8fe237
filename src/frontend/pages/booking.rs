//! The car listing and reservation page

use std::rc::Rc;

use chrono::Datelike;
use gloo::timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::AppConfig;
use crate::frontend::components::{
    Button, ButtonVariant, CarGrid, FilterBar, Footer, Nav, ReserveModal, SearchBar, ToastHost,
};
use crate::services::dates::{self, DatePair};
use crate::services::{BrowserNavigator, BrowserStorage, HttpCarApi};
use crate::web::forms::FilterForm;
use crate::web::{BookingPage, PageEvent};

pub type BrowserBookingPage = BookingPage<BrowserStorage, HttpCarApi, BrowserNavigator>;

fn scroll_to(section: &web_sys::Element) {
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    section.scroll_into_view_with_scroll_into_view_options(&options);
}

#[component]
pub fn ListingPage() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_else(AppConfig::from_build_env);
    let toast_millis = config.toast_millis();
    let login_href = config.login_path.clone();
    let today = dates::today();

    let booking: Rc<BrowserBookingPage> = Rc::new(BookingPage::new(
        config.clone(),
        BrowserStorage,
        HttpCarApi::new(config),
        BrowserNavigator,
    ));

    let view_state = RwSignal::new(booking.snapshot());
    let page = StoredValue::new_local(booking.clone());

    booking.set_observer(move |event| {
        if let PageEvent::ToastShown(id) = event {
            Timeout::new(toast_millis, move || {
                if let Some(page) = page.try_get_value() {
                    page.dismiss_toast(id);
                }
            })
            .forget();
        }
        if let Some(page) = page.try_get_value() {
            view_state.set(page.snapshot());
        }
    });

    let filters = RwSignal::new(FilterForm::default());
    let search_dates = RwSignal::new(DatePair::new(today));
    let modal_dates = RwSignal::new(DatePair::new(today));
    let drawer_open = RwSignal::new(false);
    let cars_ref = NodeRef::<html::Section>::new();

    let load = move || {
        let filter = filters.with_untracked(FilterForm::to_filter);
        if let Some(page) = page.try_get_value() {
            spawn_local(async move {
                page.load(filter).await;
            });
        }
    };

    let on_apply = Callback::new(move |_: ()| load());
    let on_reset = Callback::new(move |_: ()| {
        filters.update(FilterForm::reset);
        load();
    });
    let on_search = Callback::new(move |_: ()| {
        let search = search_dates.get_untracked();
        modal_dates.update(|m| m.copy_from(&search, dates::today()));
        if let Some(section) = cars_ref.get_untracked() {
            scroll_to(&section);
        }
        load();
    });
    let on_reserve = Callback::new(move |car_id: String| {
        if let Some(page) = page.try_get_value() {
            page.reserve(&car_id);
        }
    });
    let on_confirm = Callback::new(move |_: ()| {
        let pair = modal_dates.get_untracked();
        if let Some(page) = page.try_get_value() {
            spawn_local(async move {
                if let Err(err) = page.confirm(pair.start, pair.end).await {
                    log::debug!("Reservation not completed: {err}");
                }
            });
        }
    });
    let on_cancel = Callback::new(move |_: ()| {
        if let Some(page) = page.try_get_value() {
            page.cancel();
        }
    });
    let on_sign_out = Callback::new(move |_: ()| {
        if let Some(page) = page.try_get_value() {
            page.sign_out();
        }
    });

    let nav = Signal::derive(move || view_state.with(|v| v.nav.clone()));
    let listing = Signal::derive(move || view_state.with(|v| v.listing.clone()));
    let modal = Signal::derive(move || view_state.with(|v| v.modal.clone()));
    let toasts = Signal::derive(move || view_state.with(|v| v.toasts.clone()));

    load();

    view! {
        <Nav nav drawer_open login_href=login_href.clone() on_sign_out/>

        <section class="hero">
            <h1 class="hero__title">"Find the right car for your trip"</h1>
            <SearchBar pair=search_dates on_search/>
        </section>

        <section id="cars" class="cars" node_ref=cars_ref>
            <div class="cars__head">
                <h2>"Available cars"</h2>
                <p id="count" class="count">
                    {move || listing.with(|l| l.count_text.clone().unwrap_or_default())}
                </p>
            </div>
            <FilterBar form=filters on_apply on_reset/>
            <CarGrid listing on_reserve/>
            <div id="empty" class="empty" hidden=move || !listing.with(|l| l.empty_visible)>
                <p>"No cars match your filters."</p>
                <Button id="clear" variant=ButtonVariant::Ghost on_click=on_reset>
                    "Clear filters"
                </Button>
            </div>
            <div class="load-error" hidden=move || listing.with(|l| l.error.is_none())>
                <p>"We couldn't load cars right now."</p>
                <Button variant=ButtonVariant::Ghost on_click=on_apply>"Try again"</Button>
            </div>
        </section>

        <ReserveModal modal pair=modal_dates login_href on_confirm on_cancel/>
        <ToastHost toasts/>
        <Footer year=today.year()/>
    }
}
