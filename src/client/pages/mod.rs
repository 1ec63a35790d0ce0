#![allow(non_snake_case)]
use dioxus::prelude::*;

mod assignees;
mod home;
mod layout;
mod not_found;
mod todos;

use crate::client::router::{on_hash_change, BrowserFragment, Navigator, Route, RouteTable};

pub fn app(cx: Scope) -> Element {
    let navigator = use_ref(&cx, || {
        let table = RouteTable::register(routes()).expect("route table is misconfigured");
        let mut navigator = Navigator::new(table, BrowserFragment);
        if let Err(err) = navigator.sync() {
            log::warn!("{err}");
        }
        navigator
    });
    cx.use_hook(|_| {
        cx.provide_context(navigator.clone());
        let navigator = navigator.clone();
        on_hash_change(move || {
            if let Err(err) = navigator.write().sync() {
                log::warn!("{err}");
            }
        });
    });
    let current = navigator.read();
    let body = match current.active() {
        Some(route) => {
            let View = route.view;
            rsx!(View {})
        }
        None => rsx!(not_found::NotFoundPage {}),
    };
    cx.render(rsx!(layout::Layout { body }))
}

fn routes() -> Vec<Route> {
    vec![
        Route {
            path: "/",
            name: "home",
            view: home::Home,
        },
        Route {
            path: "/todos",
            name: "todos",
            view: todos::Todos,
        },
        Route {
            path: "/assignees",
            name: "assignees",
            view: assignees::Assignees,
        },
    ]
}
