use std::rc::Rc;

use cots::{EnvironmentConfig, HttpPlayerApi, PlayerApi};
use leptos::*;
use leptos_meta::*;

use crate::components::RegistrationForm;
use crate::vars::{API_URL, APP_TITLE};

fn web_config() -> EnvironmentConfig {
    match API_URL {
        Some(url) => EnvironmentConfig::with_setting("api_url", url),
        None => EnvironmentConfig::default(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let form = match HttpPlayerApi::from_config(&web_config()) {
        Ok(api) => {
            log::debug!("Players endpoint: {}", api.url());
            let api: Rc<dyn PlayerApi> = Rc::new(api);
            view! { <RegistrationForm api /> }.into_view()
        }
        Err(err) => {
            log::error!("{}", err);
            view! {
                <div class="alert alert-danger">
                    {format!("Configuration error: {}", err)}
                </div>
            }
            .into_view()
        }
    };

    view! {
        <Title text=APP_TITLE />
        <main class="my-0 mx-auto px-8 max-w-7xl text-left">
            {form}
        </main>
    }
}
