use clap::{Arg, ArgMatches, Command};
use cots::{
    submit, EnvironmentConfig, FormState, FormView, HttpPlayerApi,
};

pub fn register_subcommand() -> Command {
    Command::new("register")
        .about("Register a new player")
        .arg(
            Arg::new("nickname")
                .index(1)
                .required(true)
                .help("Nickname of the player"),
        )
}

pub async fn handle_register(
    matches: &ArgMatches,
    config: &EnvironmentConfig,
) -> i32 {
    let nickname = matches
        .get_one::<String>("nickname")
        .cloned()
        .unwrap_or_default();

    let api = match HttpPlayerApi::from_config(config) {
        Ok(api) => api,
        Err(err) => {
            eprintln!("{}", err);
            return 1;
        }
    };
    log::debug!("Registering against {}", api.url());

    let mut state = FormState::new();
    state.set_nickname(nickname);
    submit(&mut state, &api).await;

    match report(&state) {
        Ok(text) => {
            println!("{}", text);
            0
        }
        Err(text) => {
            eprintln!("{}", text);
            1
        }
    }
}

/// Text for the settled form: the welcome on success, the visible errors
/// otherwise.
pub(crate) fn report(state: &FormState) -> Result<String, String> {
    match state.view() {
        FormView::Welcome { message, player } => {
            let mut lines = vec![message.to_string()];
            if let Some(player) = player {
                for (label, value) in player.details() {
                    lines.push(format!("  {}: {}", label, value));
                }
            }
            Ok(lines.join("\n"))
        }
        FormView::Form {
            nickname_errors,
            server_error,
            ..
        } => {
            let lines: Vec<String> = nickname_errors
                .into_iter()
                .chain(server_error)
                .map(|error| error.to_string())
                .collect();
            Err(lines.join("\n"))
        }
        FormView::Loading => Err("Registration still in progress".to_string()),
    }
}
