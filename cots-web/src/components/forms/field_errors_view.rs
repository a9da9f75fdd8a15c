use leptos::*;

/// Inline list of error messages for a single field.
#[component]
pub fn FieldErrorsView(messages: Signal<Vec<String>>) -> impl IntoView {
    view! {
        <For
            each=move || messages.get().into_iter().enumerate()
            key=|(index, _)| *index
            children=move |(_, message)| {
                view! {
                    <div class="alert alert-danger">
                        {message}
                    </div>
                }
            }
        />
    }
}
