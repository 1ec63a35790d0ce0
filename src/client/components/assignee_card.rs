use dioxus::prelude::*;

use crate::data::Assignee;

#[inline_props]
pub fn AssigneeCard<'a>(cx: Scope<'a>, assignee: &'a Assignee) -> Element {
    let full_name = assignee.full_name();
    cx.render(rsx!(
        div {
            class: "assignee-card",
            h3 { "{full_name}" }
            a {
                href: "mailto:{assignee.email}",
                "{assignee.email}"
            }
        }
    ))
}
