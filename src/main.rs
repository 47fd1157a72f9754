use dioxus::prelude::*;
use portfolio::storage::default_backend;
use portfolio::utils::{ dom, UiState };
use portfolio::views::PortfolioPage;
use portfolio::{ AppConfig, ThemeStore };

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
    }

    let (config, config_error) = AppConfig::load();

    #[cfg(not(target_arch = "wasm32"))]
    {
        env_logger::Builder::new()
            .filter_level(config.log_level.to_level_filter())
            .parse_default_env()
            .init();
        if std::env::var(portfolio::configs::SETTINGS_PATH_KEY).is_err() {
            log::warn!(
                "{} not set, using {}",
                portfolio::configs::SETTINGS_PATH_KEY,
                config.settings_path.display()
            );
        }
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(err) = console_log::init_with_level(config.log_level) {
            web_sys::console::error_1(&format!("Logger setup failed: {}", err).into());
        }
    }

    if let Some(err) = config_error {
        log::warn!("{}; using defaults", err);
    }
    log::info!("Starting portfolio (log level {})", config.log_level);

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context::<AppConfig>();
    let store = use_hook(|| ThemeStore::new(default_backend(&config)));
    let mut ui = use_signal(|| UiState::mount(&store));

    // the <html> marker has to match the persisted theme before the first toggle
    use_hook(|| dom::apply_marker(ui.peek().marker()));

    let on_toggle_nav = move |_| {
        ui.write().toggle_nav();
    };

    let on_toggle_theme = move |_| {
        let state = {
            let mut state = ui.write();
            state.toggle_theme(&store);
            *state
        };
        dom::apply_marker(state.marker());
    };

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        document::Title { "Zeeshan Ahmad · Backend Developer" }
        PortfolioPage {
            state: ui(),
            on_toggle_nav: on_toggle_nav,
            on_toggle_theme: on_toggle_theme,
        }
    }
}
