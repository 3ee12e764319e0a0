mod app;
mod logging;

use app::{App, AppProps};
use beta_frontend_common::{ApiConfig, LoginContext};

fn main() {
    console_error_panic_hook::set_once();
    logging::init_logging(logging::default_level());

    let api = match ApiConfig::from_build_env() {
        Ok(api) => api,
        Err(err) => {
            tracing::error!(error = %err, "Invalid frontend configuration; not mounting the app");
            return;
        }
    };
    tracing::info!(api = api.base_url(), "Starting beta frontend");

    let context = LoginContext::browser(api);
    tracing::debug!(environment = ?context.environment, "Detected environment");
    yew::Renderer::<App>::with_props(AppProps { context }).render();
}
