use dioxus::prelude::*;

/// Emphasis of a button, rendered as `data-variant`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Destructive,
    Ghost,
}

/// Height and padding, rendered as `data-size`. `Small` fits table rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    #[default]
    Regular,
    Small,
}

impl ButtonVariant {
    fn as_str(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Destructive => "destructive",
            ButtonVariant::Ghost => "ghost",
        }
    }
}

impl ButtonSize {
    fn as_str(self) -> &'static str {
        match self {
            ButtonSize::Regular => "regular",
            ButtonSize::Small => "small",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(default = false)] disabled: bool,
    // "button" unless the button submits a form
    #[props(default = "button".to_string())]
    button_type: String,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "button", None, false),
        Attribute::new("data-variant", variant.as_str(), None, false),
        Attribute::new("data-size", size.as_str(), None, false),
    ];
    let attrs = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: "{button_type}",
            disabled: disabled,
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            ..attrs,
            {children}
        }
    }
}
