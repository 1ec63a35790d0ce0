use dioxus::prelude::*;

use crate::client::router::use_navigator;

#[inline_props]
pub fn Layout<'a>(cx: Scope<'a>, children: Element<'a>) -> Element {
    let navigator = use_navigator(&cx);
    let entries: Vec<&'static str> = navigator
        .read()
        .routes()
        .iter()
        .map(|route| route.name)
        .collect();
    cx.render(rsx!(
        header {
            h1 { "Taskboard" }
            nav {
                entries.iter().map(|name| {
                    let target = *name;
                    rsx!(
                        button {
                            key: "{target}",
                            onclick: move |_| {
                                if let Err(err) = navigator.write().navigate(target) {
                                    log::warn!("{err}");
                                }
                            },
                            "{target}"
                        }
                    )
                })
            }
        }
        main {
            children
        }
    ))
}
