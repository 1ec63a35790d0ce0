use dioxus::prelude::*;

use crate::client::router::use_navigator;

#[inline_props]
fn Paragraph<'a>(cx: Scope<'a>, children: Element<'a>) -> Element {
    cx.render(rsx!(p { children }))
}

pub fn Home(cx: Scope) -> Element {
    let navigator = use_navigator(&cx);
    cx.render(rsx!(
        div {
            h2 { "Welcome" }
            Paragraph {
                "Keep track of what has to be done and who is working on it. "
                "Todos live on their own page, the people they can be assigned "
                "to on another."
            }
            Paragraph {
                "The lists come straight from the backend API; nothing is "
                "stored in the browser."
            }
            div {
                button {
                    onclick: move |_| {
                        if let Err(err) = navigator.write().navigate("todos") {
                            log::warn!("{err}");
                        }
                    },
                    "Browse todos"
                }
                button {
                    onclick: move |_| {
                        if let Err(err) = navigator.write().navigate("assignees") {
                            log::warn!("{err}");
                        }
                    },
                    "Browse assignees"
                }
            }
        }
    ))
}
