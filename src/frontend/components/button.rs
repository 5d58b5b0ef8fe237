use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
}

#[component]
pub fn Button(
    children: Children,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] id: Option<&'static str>,
    #[prop(optional)] loading: Option<Signal<bool>>,
    #[prop(optional, into)] loading_text: String,
    #[prop(optional, into)] button_type: String,
    #[prop(optional)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let classes = match variant {
        ButtonVariant::Primary => "btn btn--primary",
        ButtonVariant::Ghost => "btn btn--ghost",
    };

    let is_loading = move || loading.map(|l| l.get()).unwrap_or(false);

    let loading_text_display = if loading_text.is_empty() {
        "Loading...".to_string()
    } else {
        loading_text
    };

    let button_type_val = if button_type.is_empty() {
        "button".to_string()
    } else {
        button_type
    };

    view! {
        <button
            type=button_type_val
            id=id
            class=classes
            disabled=is_loading
            aria-busy=move || is_loading().to_string()
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(());
                }
            }
        >
            <span class="btn__loading" hidden=move || !is_loading()>
                <span class="btn__spinner"></span>
                {loading_text_display}
            </span>
            <span hidden=is_loading>{children()}</span>
        </button>
    }
}
