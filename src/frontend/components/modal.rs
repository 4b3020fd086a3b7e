use leptos::prelude::*;

/// Overlay dialog gated by an external visibility flag.
///
/// The flag is owned by the page so links elsewhere on it can open the
/// dialog; the close button here only ever clears it.
#[component]
pub fn Modal(
    open: RwSignal<bool>,
    #[prop(into)] overlay_class: String,
    #[prop(into)] content_class: String,
    #[prop(optional, into)] close_class: String,
    children: ChildrenFn,
) -> impl IntoView {
    let close_class = if close_class.is_empty() {
        "close-btn".to_string()
    } else {
        close_class
    };

    view! {
        <Show when=move || open.get()>
            <div class=overlay_class.clone() role="dialog" aria-modal="true">
                <div class=content_class.clone()>
                    <button class=close_class.clone() on:click=move |_| open.set(false)>
                        "✕"
                    </button>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
