use dioxus::prelude::*;
use dioxus_primitives::switch::{Switch, SwitchThumb};

/// Settings row: a label with an on/off switch at the end.
///
/// The switch is controlled; `checked` is the source of truth and
/// `on_change` receives the requested state.
#[component]
pub fn SwitchField(
    label: String,
    checked: bool,
    on_change: EventHandler<bool>,
    #[props(default = false)] disabled: bool,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "switch-field", "data-disabled": disabled,
            span { class: "switch-field-label", "{label}" }
            Switch {
                class: "switch",
                checked: Some(checked),
                disabled: disabled,
                on_checked_change: move |value: bool| on_change.call(value),
                SwitchThumb { class: "switch-thumb" }
            }
        }
    }
}
