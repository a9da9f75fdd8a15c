use std::rc::Rc;

use cots::{FormState, PlayerApi, PlayerProfile, Status, WELCOME_MESSAGE};
use leptos::ev::SubmitEvent;
use leptos::*;

use crate::components::buttons::FormButton;
use crate::components::forms::{FieldErrorsView, SubmissionStatusView};

const INPUT_CLASS: &str = "form-control mt-2";
const INPUT_CLASS_ERROR: &str = "form-control mt-2 error";

#[component]
pub fn RegistrationForm(api: Rc<dyn PlayerApi>) -> impl IntoView {
    let state = create_rw_signal(FormState::new());
    let api = store_value(api);

    // typing only touches the nickname, so the view swap keys on status
    let status = create_memo(move |_| state.with(|state| state.status()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let mut payload = None;
        state.update(|state| payload = state.begin_submission());
        let Some(payload) = payload else {
            return;
        };

        let api = api.get_value();
        spawn_local(async move {
            let outcome = api.create_player(&payload).await;
            state.update(|state| state.complete_submission(outcome));
        });
    };

    view! {
        { move || match status.get() {
            Status::Loading => view! {
                <i class="fa fa-loading fa-2x"></i>
            }.into_view(),
            Status::Success => {
                let player = state.with_untracked(|state| state.player().cloned());
                view! { <WelcomeView player /> }.into_view()
            }
            Status::New => view! {
                <NicknameForm state on_submit />
            }.into_view(),
        }}
    }
}

#[component]
fn NicknameForm<F>(state: RwSignal<FormState>, on_submit: F) -> impl IntoView
where
    F: Fn(SubmitEvent) + 'static,
{
    let nickname_errors = Signal::derive(move || {
        state.with(|state| {
            state
                .nickname_errors()
                .into_iter()
                .map(|error| error.message().to_string())
                .collect::<Vec<_>>()
        })
    });
    let server_error = Signal::derive(move || {
        state.with(|state| {
            state.server_error().map(|error| error.message().to_string())
        })
    });
    let can_submit =
        Signal::derive(move || state.with(|state| !state.is_loading()));

    view! {
        <form on:submit=on_submit class="container">
            <div class="row">
                <div class="col-lg-12">
                    <input
                        type="text"
                        placeholder="Nickname"
                        required=true
                        class=move || {
                            if nickname_errors.with(|errors| errors.is_empty()) {
                                INPUT_CLASS
                            } else {
                                INPUT_CLASS_ERROR
                            }
                        }
                        prop:value=move || {
                            state.with(|state| state.nickname().to_string())
                        }
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|state| state.set_nickname(value));
                        }
                    />
                    <FieldErrorsView messages=nickname_errors />
                </div>
                <div class="col-lg-12 mt-2 text-center">
                    { FormButton::new("Submit").into_view(can_submit) }
                    <SubmissionStatusView submit_error=server_error />
                </div>
            </div>
        </form>
    }
}

#[component]
fn WelcomeView(player: Option<PlayerProfile>) -> impl IntoView {
    let details = player.map(|player| player.details()).unwrap_or_default();

    view! {
        <div>{WELCOME_MESSAGE}</div>
        <dl class="mt-2">
            { details
                .into_iter()
                .map(|(label, value)| view! {
                    <dt>{label}</dt>
                    <dd>{value}</dd>
                })
                .collect_view() }
        </dl>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::cell::RefCell;

    use async_trait::async_trait;
    use cots::{RegistrationError, SubmissionPayload};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use wasm_bindgen_test::*;
    use web_sys::{Event, EventInit, HtmlElement, HtmlInputElement};

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    /// Records every payload it receives and answers with a canned outcome.
    struct RecordingApi {
        outcome: Result<Option<PlayerProfile>, RegistrationError>,
        calls: RefCell<Vec<SubmissionPayload>>,
    }

    impl RecordingApi {
        fn succeeding(player: Option<PlayerProfile>) -> Rc<Self> {
            Rc::new(Self {
                outcome: Ok(player),
                calls: RefCell::new(Vec::new()),
            })
        }

        fn failing(err: RegistrationError) -> Rc<Self> {
            Rc::new(Self {
                outcome: Err(err),
                calls: RefCell::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<SubmissionPayload> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl PlayerApi for RecordingApi {
        async fn create_player(
            &self,
            payload: &SubmissionPayload,
        ) -> Result<Option<PlayerProfile>, RegistrationError> {
            self.calls.borrow_mut().push(payload.clone());
            self.outcome.clone()
        }
    }

    fn document() -> web_sys::Document {
        web_sys::window().unwrap().document().unwrap()
    }

    /// Mount the form into its own container so tests sharing the page do
    /// not see each other's markup.
    fn mount_form(api: Rc<dyn PlayerApi>) -> HtmlElement {
        let container: HtmlElement =
            document().create_element("div").unwrap().dyn_into().unwrap();
        document()
            .body()
            .unwrap()
            .append_child(&container)
            .unwrap();
        mount_to(container.clone(), move || view! { <RegistrationForm api /> });
        container
    }

    fn nickname_input(container: &HtmlElement) -> HtmlInputElement {
        container
            .query_selector("input[placeholder='Nickname']")
            .unwrap()
            .expect("nickname input rendered")
            .dyn_into()
            .unwrap()
    }

    fn type_nickname(container: &HtmlElement, nickname: &str) {
        let input = nickname_input(container);
        input.set_value(nickname);
        dispatch(&input, "input");
    }

    /// Fire a bubbling, cancelable event. Returns `false` when a handler
    /// called `prevent_default`.
    fn dispatch(target: &web_sys::EventTarget, name: &str) -> bool {
        let init = EventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        let event = Event::new_with_event_init_dict(name, &init).unwrap();
        target.dispatch_event(&event).unwrap()
    }

    /// Submit through the event rather than `requestSubmit`, which the
    /// browser blocks on a `required` input left empty.
    fn submit_form(container: &HtmlElement) {
        let form = container
            .query_selector("form")
            .unwrap()
            .expect("form rendered");
        let not_prevented = dispatch(&form, "submit");
        assert!(!not_prevented, "submit must not reload the page");
    }

    /// Let the spawned request future and the re-render run.
    async fn settle() {
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            web_sys::window()
                .unwrap()
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    &resolve, 10,
                )
                .unwrap();
        });
        JsFuture::from(promise).await.unwrap();
    }

    fn alert_texts(container: &HtmlElement, selector: &str) -> Vec<String> {
        let alerts = container.query_selector_all(selector).unwrap();
        (0..alerts.length())
            .filter_map(|index| alerts.item(index))
            .filter_map(|node| node.text_content())
            .map(|text| text.trim().to_string())
            .collect()
    }

    #[wasm_bindgen_test]
    fn test_renders_empty_form() {
        let container = mount_form(RecordingApi::succeeding(None));

        let input = nickname_input(&container);
        assert!(input.required());
        assert_eq!(input.value(), "");

        let button = container
            .query_selector("button[type='submit']")
            .unwrap()
            .expect("submit button rendered");
        assert_eq!(button.text_content().as_deref(), Some("Submit"));
        assert!(alert_texts(&container, ".alert-danger").is_empty());
    }

    #[wasm_bindgen_test]
    async fn test_empty_submit_marks_input() {
        let api = RecordingApi::succeeding(None);
        let container = mount_form(api.clone());

        submit_form(&container);
        settle().await;

        assert_eq!(
            alert_texts(&container, ".alert-danger"),
            vec!["Nickname cannot be null".to_string()]
        );
        let input = nickname_input(&container);
        assert!(input.class_name().split_whitespace().any(|c| c == "error"));
        assert!(api.calls().is_empty());
    }

    #[wasm_bindgen_test]
    async fn test_failed_registration_keeps_form() {
        let api = RecordingApi::failing(RegistrationError::Rejected {
            status: 500,
            detail: "boom".to_string(),
        });
        let container = mount_form(api.clone());

        type_nickname(&container, "Ripley");
        submit_form(&container);
        settle().await;

        assert!(container.query_selector("form").unwrap().is_some());
        assert_eq!(
            alert_texts(&container, "button[type='submit'] ~ .alert-danger"),
            vec!["Registration failed.".to_string()]
        );
        assert_eq!(alert_texts(&container, ".alert-danger").len(), 1);
        let input = nickname_input(&container);
        assert_eq!(input.value(), "Ripley");
        assert!(!input.class_name().split_whitespace().any(|c| c == "error"));
        assert_eq!(api.calls().len(), 1);
    }

    #[wasm_bindgen_test]
    async fn test_successful_registration_shows_welcome() {
        let api = RecordingApi::succeeding(Some(PlayerProfile {
            nickname: Some("Ripley".to_string()),
            ..Default::default()
        }));
        let container = mount_form(api.clone());

        type_nickname(&container, "Ripley");
        submit_form(&container);
        settle().await;

        assert!(container.query_selector("form").unwrap().is_none());
        let text = container.text_content().unwrap_or_default();
        assert!(text.contains(WELCOME_MESSAGE));
        assert!(text.contains("Ripley"));

        let calls = api.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].to_json().unwrap(), r#"{"nickname":"Ripley"}"#);
    }
}
