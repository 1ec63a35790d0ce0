use dioxus::prelude::*;

use crate::{client::components::Due, data::Todo};

#[inline_props]
pub fn TodoCard<'a>(cx: Scope<'a>, todo: &'a Todo) -> Element {
    let state = if todo.finished { "done" } else { "open" };
    let priority = todo.priority.label();
    let description = (!todo.description.is_empty()).then(|| {
        rsx!(
            p { "{todo.description}" }
        )
    });
    let category = (!todo.category.is_empty()).then(|| {
        rsx!(
            span { "filed under {todo.category} " }
        )
    });
    let due = todo.due_date.map(|date| {
        rsx!(
            Due {
                date: date,
            }
        )
    });
    let names = todo
        .assignee_list
        .iter()
        .map(|assignee| assignee.full_name())
        .collect::<Vec<_>>()
        .join(", ");
    let assignees = (!names.is_empty()).then(|| {
        rsx!(
            p { "assigned to {names}" }
        )
    });
    cx.render(rsx!(
        div {
            class: "todo-card",
            h3 { "{todo.title}" }
            span { "[{state}] " }
            span { "priority: {priority}" }
            description
            category
            due
            assignees
        }
    ))
}
