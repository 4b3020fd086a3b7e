use leptos::prelude::*;

/// Submit control that disables itself while a request is in flight, so a
/// double click cannot fire overlapping creates.
#[component]
pub fn SubmitButton(
    #[prop(into)] label: String,
    #[prop(optional, into)] busy_label: String,
    #[prop(into)] busy: Signal<bool>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let busy_label = if busy_label.is_empty() {
        "Please wait...".to_string()
    } else {
        busy_label
    };
    let class = if class.is_empty() {
        "submit-btn".to_string()
    } else {
        class
    };

    view! {
        <button type="submit" class=class disabled=move || busy.get()>
            {move || if busy.get() { busy_label.clone() } else { label.clone() }}
        </button>
    }
}
