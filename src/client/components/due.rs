use chrono::NaiveDate;
use chrono_humanize::HumanTime;
use dioxus::prelude::*;

#[inline_props]
pub fn Due(cx: Scope, date: NaiveDate) -> Element {
    let today = chrono::Local::now().date_naive();
    let relative = HumanTime::from(date.signed_duration_since(today));
    let full_date = date.format("%Y-%m-%d").to_string();
    cx.render(rsx!(
        span {
            title: "{full_date}",
            "due {relative}"
        }
    ))
}
