use chrono::NaiveDate;
use leptos::prelude::*;

use crate::services::dates::{self, format_date, parse_date, DatePair};

#[component]
pub fn DateInput(
    #[prop(into)] label: String,
    id: &'static str,
    value: Signal<Option<NaiveDate>>,
    min: Signal<NaiveDate>,
    on_change: Callback<Option<NaiveDate>>,
) -> impl IntoView {
    view! {
        <label for=id class="field">
            <span class="field__label">{label}</span>
            <input
                type="date"
                id=id
                name=id
                min=move || format_date(min.get())
                prop:value=move || value.get().map(format_date).unwrap_or_default()
                on:change=move |ev| on_change.run(parse_date(&event_target_value(&ev)))
            />
        </label>
    }
}

/// Start/end inputs bound to one [`DatePair`]. Changing the start pulls the
/// end forward when needed.
#[component]
pub fn DateRangeInputs(
    pair: RwSignal<DatePair>,
    start_id: &'static str,
    end_id: &'static str,
) -> impl IntoView {
    let on_start = Callback::new(move |start: Option<NaiveDate>| {
        pair.update(|p| p.set_start(start, dates::today()));
    });
    let on_end = Callback::new(move |end: Option<NaiveDate>| {
        pair.update(|p| p.set_end(end));
    });

    view! {
        <DateInput
            label="Pick-up date"
            id=start_id
            value=Signal::derive(move || pair.with(|p| p.start))
            min=Signal::derive(move || pair.with(|p| p.start_min))
            on_change=on_start
        />
        <DateInput
            label="Return date"
            id=end_id
            value=Signal::derive(move || pair.with(|p| p.end))
            min=Signal::derive(move || pair.with(|p| p.end_min))
            on_change=on_end
        />
    }
}
