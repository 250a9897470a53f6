use clap::Parser;

#[derive(Parser, Clone, Debug)]
#[command(name = "place-detail", about = "Show a single place and book it")]
pub struct Config {
    #[clap(env, long, default_value = "development")]
    pub environment: String,

    /// Root of the places backend, e.g. https://<project>.firebaseio.com
    #[clap(env, long)]
    pub api_base_url: String,

    /// Identity of the signed-in user.
    #[clap(env, long)]
    pub user_id: Option<String>,

    /// Place to open; without one the page redirects to the listing.
    #[clap(env, long)]
    pub place_id: Option<String>,

    #[clap(env, long, default_value_t = 10)]
    pub request_timeout_secs: u64,
}
