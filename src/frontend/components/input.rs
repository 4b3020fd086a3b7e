use leptos::prelude::*;

/// Required text input bound to a signal.
///
/// With a `label` it renders as an admin form group; without one it renders
/// as a bare placeholder-labelled field, as used in the landing page forms.
#[component]
pub fn TextInput(
    #[prop(optional, into)] label: String,
    #[prop(into)] name: String,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] input_type: String,
    value: RwSignal<String>,
) -> impl IntoView {
    let input_type = if input_type.is_empty() {
        "text".to_string()
    } else {
        input_type
    };
    // Only labelled inputs get an id; the landing forms repeat field names
    // between the hero form and the contact modal.
    let id = (!label.is_empty()).then(|| name.clone());

    let input = view! {
        <input
            type=input_type
            id=id
            name=name.clone()
            placeholder=placeholder
            required=true
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    };

    if label.is_empty() {
        input.into_any()
    } else {
        view! {
            <div class="form-group">
                <label for=name>{label}</label>
                {input}
            </div>
        }
        .into_any()
    }
}
