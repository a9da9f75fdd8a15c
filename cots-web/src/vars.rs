// players endpoint baked in at build time, e.g.
// COTS_API_URL=http://localhost:3000/v1/players trunk build
pub const API_URL: Option<&str> = option_env!("COTS_API_URL");

pub const APP_TITLE: &str = "COTS - Player Registration";
