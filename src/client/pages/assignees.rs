use dioxus::prelude::*;

use crate::{
    client::{components::AssigneeCard, API_BASE_URL},
    data::Assignee,
};

pub fn Assignees(cx: Scope) -> Element {
    let assignees = use_future(&cx, (), |_| async move {
        reqwest::get(format!("{API_BASE_URL}/assignees"))
            .await
            .unwrap()
            .json::<Vec<Assignee>>()
            .await
            .unwrap()
    });
    let Some(assignees) = assignees.value() else {
        return cx.render(rsx!(div { "Loading..." }));
    };
    if assignees.is_empty() {
        return cx.render(rsx!(div { "No assignees yet." }));
    }
    cx.render(rsx!(
        div {
            h2 { "Assignees" }
            assignees.iter().map(|assignee| rsx!(
                AssigneeCard {
                    key: "{assignee.id}",
                    assignee: assignee,
                }
            ))
        }
    ))
}
