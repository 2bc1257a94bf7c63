use std::sync::Arc;
use dioxus::html::FileEngine;
use dioxus::prelude::*;
use crate::api::post_file;
use crate::configs::get_upload_endpoint;
use crate::error::UploadError;
use crate::routes::Route;
use crate::utils::UploadState;

async fn read_and_post(
    endpoint: String,
    engine: Option<Arc<dyn FileEngine>>,
    file_name: Option<String>
) -> Result<crate::api::UploadReceipt, UploadError> {
    let (Some(engine), Some(name)) = (engine, file_name) else {
        return Err(UploadError::MissingFile);
    };
    let bytes = engine.read_file(&name).await.ok_or_else(|| UploadError::Read(name.clone()))?;
    post_file(&endpoint, bytes).await
}

#[component]
pub fn Home() -> Element {
    let mut upload = use_context::<Signal<UploadState>>();
    let mut files = use_signal(|| None::<Arc<dyn FileEngine>>);
    let endpoint = use_hook(get_upload_endpoint);
    let navigator = use_navigator();

    let submit = move |_| {
        let engine = files.read().clone();
        let file_name = engine.as_ref().and_then(|f| f.files().into_iter().next());
        if !upload.write().begin(file_name.as_deref()) {
            return;
        }

        let endpoint = endpoint.clone();
        spawn(async move {
            let result = read_and_post(endpoint, engine, file_name).await;
            let succeeded = result.is_ok();
            upload.write().finish(result);
            if succeeded {
                navigator.push(Route::Results);
            }
        });
    };

    let state = upload.read().clone();

    rsx! {
        main {
            class: "content",
            h1 {
                class: "content__title",
                "Upload a sleep recording"
            }
            form {
                class: "form",
                onsubmit: move |evt: FormEvent| evt.prevent_default(),
                input {
                    class: "form__input",
                    r#type: "file",
                    name: "file_inpute",
                    disabled: state.is_uploading(),
                    onchange: move |evt: FormEvent| {
                        files.set(evt.files());
                        if !upload.read().is_uploading() {
                            upload.write().reset();
                        }
                    },
                }
                button {
                    class: "button",
                    r#type: "button",
                    disabled: state.is_uploading(),
                    onclick: submit,
                    "Upload"
                }
            }
            div {
                class: if state.preloader_visible() { "preloader preloader_visible" } else { "preloader" },
                if let UploadState::Uploading { file_name } = &state {
                    span { "Uploading {file_name}..." }
                }
            }
            p {
                class: if state.message_visible() { "message message_vis" } else { "message" },
                {state.message().unwrap_or_default()}
            }
        }
    }
}
