use dioxus::prelude::*;

/// Labelled single-line text field with an optional inline error.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = "text".to_string())] input_type: String,
    /// Field error shown below the input; `None` when valid.
    #[props(default)]
    error: Option<String>,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", "input", None, false),
        Attribute::new(
            "aria-invalid",
            if error.is_some() { "true" } else { "false" },
            None,
            false,
        ),
    ];
    let attrs = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "input-wrapper",
            if !label.is_empty() {
                span { class: "input-label", "{label}" }
            }
            input {
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                oninput: move |evt| on_input.call(evt),
                ..attrs,
            }
            if let Some(message) = error {
                span { class: "input-error", role: "alert", "{message}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn Harness(error: Option<String>) -> Element {
        rsx! {
            Input { label: "Hostname", value: "olt-01", error: error }
        }
    }

    fn render(error: Option<String>) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { error });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn error_is_rendered_and_flagged() {
        let html = render(Some("Hostname is required".into()));
        assert!(html.contains("Hostname is required"));
        assert!(html.contains(r#"aria-invalid="true""#));
    }

    #[test]
    fn valid_input_has_no_error() {
        let html = render(None);
        assert!(!html.contains("input-error"));
        assert!(html.contains(r#"aria-invalid="false""#));
    }
}
