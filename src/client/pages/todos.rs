use dioxus::prelude::*;

use crate::{
    client::{components::TodoCard, API_BASE_URL},
    data::Todo,
};

pub fn Todos(cx: Scope) -> Element {
    let todos = use_future(&cx, (), |_| async move {
        reqwest::get(format!("{API_BASE_URL}/todos"))
            .await
            .unwrap()
            .json::<Vec<Todo>>()
            .await
            .unwrap()
    });
    let Some(todos) = todos.value() else {
        return cx.render(rsx!(div { "Loading..." }));
    };
    if todos.is_empty() {
        return cx.render(rsx!(div { "No todos yet." }));
    }
    cx.render(rsx!(
        div {
            h2 { "Todos" }
            todos.iter().map(|todo| rsx!(
                TodoCard {
                    key: "{todo.id}",
                    todo: todo,
                }
            ))
        }
    ))
}
