//! Empty-state component

use dioxus::prelude::*;

/// Placeholder shown when a list has nothing to display
#[component]
pub fn Empty() -> Element {
    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-12 text-center",
            p { class: "text-4xl mb-2", "\u{1F4ED}" }
            p { class: "text-gray-500", "Nothing to show here" }
        }
    }
}
