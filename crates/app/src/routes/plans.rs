use dioxus::prelude::*;
use shared_types::{AppError, PlanForm, ServicePlan};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader,
    CardTitle, DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableEmpty,
    DataTableHeader, DataTableRow, Input, PageHeader, ToastOptions,
};

use crate::format_helpers::format_peso;
use crate::i18n::use_translator;
use crate::mock;
use crate::validation::{check, field_error};

/// Speed text to Mbps. Unparseable input becomes 0 so the range rule rejects it.
fn parse_speed(text: &str) -> u32 {
    text.trim().parse().unwrap_or(0)
}

#[component]
fn PlanTable(plans: Vec<ServicePlan>, #[props(default = true)] show_speed: bool) -> Element {
    let t = use_translator();
    let columns = if show_speed { 3 } else { 2 };

    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { {t.translate("Name")} }
                if show_speed {
                    DataTableColumn { {t.translate("Speed")} }
                }
                DataTableColumn { {t.translate("Price")} }
            }
            DataTableBody {
                if plans.is_empty() {
                    DataTableEmpty { columns: columns, {t.translate("No records")} }
                }
                for plan in plans {
                    DataTableRow { key: "{plan.name}",
                        DataTableCell { "{plan.name}" }
                        if show_speed {
                            DataTableCell { "{plan.speed_mbps} Mbps" }
                        }
                        DataTableCell { {format_peso(plan.monthly_price)} }
                    }
                }
            }
        }
    }
}

/// Platform tiers sold to tenants.
#[component]
pub fn SubscriptionPlans() -> Element {
    let t = use_translator();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/pages.css") }
        PageHeader { title: t.translate("Plans").to_string() }
        Card {
            CardContent {
                PlanTable { plans: mock::subscription_plans(), show_speed: false }
            }
        }
    }
}

/// The tenant's subscriber plans, with a form to add one.
#[component]
pub fn ServicePlans() -> Element {
    let t = use_translator();
    let toast = use_toast();
    let mut plans = use_signal(mock::service_plans);

    let mut name = use_signal(String::new);
    let mut price = use_signal(String::new);
    let mut speed = use_signal(String::new);
    let mut errors = use_signal(|| None::<AppError>);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let form = PlanForm {
            name: name.read().trim().to_string(),
            monthly_price: price.read().clone(),
            speed_mbps: parse_speed(&speed.read()),
        };
        let validated = check(&form).and_then(|()| {
            form.price_value()
                .ok_or_else(|| AppError::internal("price passed validation but did not parse"))
        });
        match validated {
            Ok(monthly_price) => {
                tracing::info!(plan = %form.name, "Plan saved");
                toast.success(
                    t.translate_with("Plan {name} saved", &[("name", form.name.as_str())]),
                    ToastOptions::new(),
                );
                plans.write().push(ServicePlan {
                    name: form.name,
                    speed_mbps: form.speed_mbps,
                    monthly_price,
                });
                errors.set(None);
                name.set(String::new());
                price.set(String::new());
                speed.set(String::new());
            }
            Err(e) => {
                toast.error(t.translate(&e.toast_message()).to_string(), ToastOptions::new());
                errors.set(Some(e));
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/pages.css") }
        PageHeader { title: t.translate("Plans").to_string() }
        Card {
            form { onsubmit: submit,
                CardHeader {
                    CardTitle { {t.translate("Save Plan")} }
                }
                CardContent {
                    div { class: "form-grid",
                        Input {
                            label: t.translate("Plan name").to_string(),
                            value: name(),
                            on_input: move |e: FormEvent| name.set(e.value()),
                            error: field_error(&errors.read(), t, "name"),
                        }
                        Input {
                            label: t.translate("Monthly price").to_string(),
                            placeholder: "1499.00",
                            value: price(),
                            on_input: move |e: FormEvent| price.set(e.value()),
                            error: field_error(&errors.read(), t, "monthly_price"),
                        }
                        Input {
                            label: t.translate("Speed (Mbps)").to_string(),
                            input_type: "number",
                            value: speed(),
                            on_input: move |e: FormEvent| speed.set(e.value()),
                            error: field_error(&errors.read(), t, "speed_mbps"),
                        }
                    }
                }
                CardFooter {
                    Button { button_type: "submit", {t.translate("Save Plan")} }
                }
            }
        }
        Card {
            CardContent {
                PlanTable { plans: plans() }
            }
        }
    }
}

/// Plans a customer can move to.
#[component]
pub fn AvailablePlans() -> Element {
    let t = use_translator();
    let toast = use_toast();
    let current = mock::customers()
        .into_iter()
        .find(|c| c.name == mock::CURRENT_CUSTOMER)
        .map(|c| c.plan)
        .unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/pages.css") }
        PageHeader { title: t.translate("Plans").to_string() }
        div { class: "plan-grid",
            for plan in mock::service_plans() {
                Card { key: "{plan.name}",
                    CardHeader {
                        CardTitle { "{plan.name}" }
                        CardDescription { "{plan.speed_mbps} Mbps" }
                    }
                    CardContent {
                        strong { class: "plan-price", {format_peso(plan.monthly_price)} }
                    }
                    CardFooter {
                        if plan.name == current {
                            Button { variant: ButtonVariant::Secondary, disabled: true,
                                {t.translate("Current Plan")}
                            }
                        } else {
                            Button {
                                onclick: {
                                    let name = plan.name.clone();
                                    move |_| {
                                        tracing::info!(plan = %name, "Plan subscribed");
                                        toast.success(
                                            t.translate_with("Subscribed to {plan}", &[("plan", name.as_str())]),
                                            ToastOptions::new(),
                                        );
                                    }
                                },
                                {t.translate("Subscribe")}
                            }
                        }
                    }
                }
            }
        }
    }
}
