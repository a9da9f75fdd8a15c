use leptos::*;

const BUTTON_CLASS: &str = "btn btn-default";
const BUTTON_CLASS_DISABLED: &str = "btn btn-default disabled";

#[derive(Clone)]
pub struct FormButton {
    text: String,
    enabled: bool,
}

impl FormButton {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            enabled: true, // default
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn text(&self) -> String {
        self.text.clone()
    }

    pub fn button_class(&self) -> &'static str {
        if self.is_enabled() {
            BUTTON_CLASS
        } else {
            BUTTON_CLASS_DISABLED
        }
    }

    /// Submit button that follows `enabled`.
    pub fn into_view(self, enabled: Signal<bool>) -> impl IntoView {
        let text = self.text();
        view! {
            <button
                type="submit"
                class=move || self.clone().set_enabled(enabled.get()).button_class()
                disabled=move || !enabled.get()
            >
                {text}
            </button>
        }
    }
}
