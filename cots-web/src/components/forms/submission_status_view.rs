use leptos::*;

/// Error left behind by the last submission attempt, if any.
#[component]
pub fn SubmissionStatusView(submit_error: Signal<Option<String>>) -> impl IntoView {
    view! {
       { move || if let Some(error) = submit_error.get() {
           view! {
               <div class="alert mt-2 alert-danger">
                   {error}
               </div>
           }.into_view()
       } else {
           view! { }.into_view()
       }}
    }
}
