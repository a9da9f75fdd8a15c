use std::env;

use cots_cli::run_cli;

#[tokio::main]
async fn main() {
    let args: Vec<String> = env::args().collect();
    let code = run_cli(args).await;
    std::process::exit(code);
}
