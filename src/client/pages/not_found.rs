use dioxus::prelude::*;

use crate::client::router::use_navigator;

pub fn NotFoundPage(cx: Scope) -> Element {
    let navigator = use_navigator(&cx);
    cx.render(rsx!(
        div {
            h2 { "Page not found" }
            p { "This address does not match any page of the app." }
            button {
                onclick: move |_| {
                    if let Err(err) = navigator.write().navigate("home") {
                        log::warn!("{err}");
                    }
                },
                "Back to start"
            }
        }
    ))
}
