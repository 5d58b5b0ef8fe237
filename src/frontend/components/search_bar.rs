use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::services::dates::DatePair;

use super::button::Button;
use super::input::DateRangeInputs;

#[component]
pub fn SearchBar(pair: RwSignal<DatePair>, on_search: Callback<()>) -> impl IntoView {
    view! {
        <form
            id="searchBar"
            class="search"
            on:submit=move |ev: SubmitEvent| {
                ev.prevent_default();
                on_search.run(());
            }
        >
            <DateRangeInputs pair start_id="startDate" end_id="endDate"/>
            <Button button_type="submit">"Search cars"</Button>
        </form>
    }
}
