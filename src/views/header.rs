use dioxus::prelude::*;
use crate::routes::Route;
use crate::utils::PageThemeController;

#[component]
pub fn Header() -> Element {
    let theme = use_context::<Signal<PageThemeController>>();
    let controls: Vec<_> = theme.read().controls().iter().cloned().collect();

    rsx! {
        header {
            class: "header",
            Link {
                class: "header__logo",
                to: Route::Home,
                "Sleep"
            }
            nav {
                class: "header__theme-menu",
                {controls.into_iter().map(|control| {
                    let id = control.id;
                    let mut theme = theme;
                    rsx! {
                        button {
                            key: "{id.0}",
                            r#type: "button",
                            class: control.class_name(),
                            disabled: control.disabled,
                            onclick: move |_| theme.write().select_control(id),
                            {control.theme.label()}
                        }
                    }
                })}
            }
        }
        Outlet::<Route> {}
    }
}
