use dioxus::prelude::*;

// ─── Context ───────────────────────────────────────────────────────────

/// Whether the sidebar is expanded. On narrow viewports an open sidebar
/// overlays the content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarState {
    pub open: bool,
}

impl SidebarState {
    fn data_state(&self) -> &'static str {
        if self.open {
            "open"
        } else {
            "closed"
        }
    }
}

/// Provides sidebar state context to children.
#[component]
pub fn SidebarProvider(#[props(default = true)] default_open: bool, children: Element) -> Element {
    let state = use_signal(|| SidebarState { open: default_open });
    use_context_provider(|| state);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sidebar-provider",
            "data-sidebar-open": if state().open { "true" } else { "false" },
            {children}
        }
    }
}

fn use_sidebar() -> Signal<SidebarState> {
    use_context::<Signal<SidebarState>>()
}

fn merged(class: &'static str, attributes: Vec<Attribute>) -> Vec<Attribute> {
    let base = vec![Attribute::new("class", class, None, false)];
    dioxus_primitives::merge_attributes(vec![base, attributes])
}

// ─── Layout ────────────────────────────────────────────────────────────

/// The navigation rail. Tapping the backdrop closes it.
#[component]
pub fn Sidebar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();
    let current = state();

    let base = vec![
        Attribute::new("class", "sidebar", None, false),
        Attribute::new("data-state", current.data_state(), None, false),
    ];
    let attrs = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        if current.open {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| state.set(SidebarState { open: false }),
            }
        }
        aside {
            ..attrs,
            {children}
        }
    }
}

#[component]
pub fn SidebarHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = merged("sidebar-header", attributes);
    rsx! {
        div { ..attrs, {children} }
    }
}

/// Scrollable middle section.
#[component]
pub fn SidebarContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = merged("sidebar-content", attributes);
    rsx! {
        nav { ..attrs, {children} }
    }
}

#[component]
pub fn SidebarFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = merged("sidebar-footer", attributes);
    rsx! {
        div { ..attrs, {children} }
    }
}

/// A labelled block of menu items.
#[component]
pub fn SidebarGroup(
    #[props(default)] label: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = merged("sidebar-group", attributes);
    rsx! {
        div { ..attrs,
            if !label.is_empty() {
                div { class: "sidebar-group-label", "{label}" }
            }
            {children}
        }
    }
}

// ─── Menu ──────────────────────────────────────────────────────────────

#[component]
pub fn SidebarMenu(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = merged("sidebar-menu", attributes);
    rsx! {
        ul { ..attrs, {children} }
    }
}

#[component]
pub fn SidebarMenuItem(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = merged("sidebar-menu-item", attributes);
    rsx! {
        li { ..attrs, {children} }
    }
}

/// A menu entry. Selecting it collapses the overlay on narrow viewports.
/// The active entry carries `data-active="true"` and `aria-current="page"`.
#[component]
pub fn SidebarMenuButton(
    #[props(default = false)] active: bool,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();

    let mut base = vec![
        Attribute::new("class", "sidebar-menu-button", None, false),
        Attribute::new("data-active", if active { "true" } else { "false" }, None, false),
    ];
    if active {
        base.push(Attribute::new("aria-current", "page", None, false));
    }
    let attrs = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        button {
            r#type: "button",
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
                state.set(SidebarState { open: false });
            },
            ..attrs,
            {children}
        }
    }
}

// ─── Utility ───────────────────────────────────────────────────────────

/// Button that flips the sidebar open or closed.
#[component]
pub fn SidebarTrigger(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();
    let attrs = merged("sidebar-trigger", attributes);

    rsx! {
        button {
            r#type: "button",
            "aria-label": "Toggle sidebar",
            onclick: move |_| {
                let open = state().open;
                state.set(SidebarState { open: !open });
            },
            ..attrs,
            {children}
        }
    }
}

#[component]
pub fn SidebarSeparator() -> Element {
    rsx! {
        hr { class: "sidebar-separator" }
    }
}

/// Main content column next to the sidebar.
#[component]
pub fn SidebarInset(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = merged("sidebar-inset", attributes);
    rsx! {
        main { ..attrs, {children} }
    }
}
