use dioxus::prelude::*;
use sleep_front::utils::{ BodyClassScope, LocalStorage, PageThemeController, ThemeControls, UploadState };
use sleep_front::Route;

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("logger init failed: {}", e).into());
        }
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Restored before the first render so the stored theme shows without a flash.
    let theme = use_signal(|| {
        BodyClassScope::mark_page();
        let mut controller = PageThemeController::new(
            ThemeControls::default(),
            LocalStorage,
            BodyClassScope
        );
        controller.restore_on_load();
        controller
    });
    let upload = use_signal(UploadState::default);
    use_context_provider(|| theme);
    use_context_provider(|| upload);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
