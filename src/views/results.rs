use dioxus::prelude::*;
use crate::routes::Route;
use crate::utils::UploadState;

#[component]
pub fn Results() -> Element {
    let upload = use_context::<Signal<UploadState>>();
    let receipt = upload.read().receipt().cloned();

    rsx! {
        main {
            class: "content",
            {match receipt {
                Some(receipt) => rsx! {
                    h1 { class: "content__title", "Recording received" }
                    if let Some(redirect) = &receipt.redirect {
                        a { class: "link", href: "{redirect}", "Continue" }
                    }
                    if !receipt.body.is_null() {
                        pre {
                            class: "result",
                            {serde_json::to_string_pretty(&receipt.body).unwrap_or_default()}
                        }
                    }
                },
                None => rsx! {
                    p { class: "message message_vis", "No upload yet." }
                    Link { class: "link", to: Route::Home, "Back to upload" }
                },
            }}
        }
    }
}
