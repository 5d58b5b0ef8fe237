use leptos::prelude::*;

use crate::web::forms::{FilterForm, CATEGORY_OPTIONS, SEAT_OPTIONS, TRANSMISSION_OPTIONS};

use super::button::{Button, ButtonVariant};

fn options(values: &'static [&'static str]) -> impl IntoView {
    values
        .iter()
        .map(|value| view! { <option value=*value>{*value}</option> })
        .collect_view()
}

#[component]
pub fn FilterBar(
    form: RwSignal<FilterForm>,
    on_apply: Callback<()>,
    on_reset: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filters">
            <select
                id="category"
                prop:value=move || form.with(|f| f.category.clone())
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.category = value);
                }
            >
                <option value="">"Any category"</option>
                {options(CATEGORY_OPTIONS)}
            </select>
            <select
                id="seats"
                prop:value=move || form.with(|f| f.seats.clone())
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.seats = value);
                }
            >
                <option value="">"Any seats"</option>
                {options(SEAT_OPTIONS)}
            </select>
            <select
                id="transmission"
                prop:value=move || form.with(|f| f.transmission.clone())
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.transmission = value);
                }
            >
                <option value="">"Any transmission"</option>
                {options(TRANSMISSION_OPTIONS)}
            </select>
            <input
                id="maxPrice"
                type="number"
                min="0"
                placeholder="Max price / day"
                prop:value=move || form.with(|f| f.max_price.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.max_price = value);
                }
            />
            <Button id="apply" on_click=on_apply>"Apply"</Button>
            <Button id="reset" variant=ButtonVariant::Ghost on_click=on_reset>"Reset"</Button>
        </div>
    }
}
