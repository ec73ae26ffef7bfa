use dioxus::prelude::*;
use shared_types::{AppError, Device, DeviceForm, DeviceStatus};
use shared_ui::{
    use_toast, Badge, BadgeTone, Button, Card, CardContent, CardFooter, CardHeader, CardTitle,
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader,
    DataTableRow, Input, PageHeader, ToastOptions,
};

use crate::i18n::use_translator;
use crate::mock;
use crate::validation::{check, field_error};

/// Hostname prefix of customer-premises terminals.
const CPE_PREFIX: &str = "ont-";

fn status_tone(status: DeviceStatus) -> BadgeTone {
    match status {
        DeviceStatus::Online => BadgeTone::Success,
        DeviceStatus::Degraded => BadgeTone::Warning,
        DeviceStatus::Offline => BadgeTone::Danger,
    }
}

#[component]
pub fn DeviceTable(devices: Vec<Device>) -> Element {
    let t = use_translator();

    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { {t.translate("Hostname")} }
                DataTableColumn { {t.translate("IP address")} }
                DataTableColumn { {t.translate("Location")} }
                DataTableColumn { {t.translate("Status")} }
            }
            DataTableBody {
                if devices.is_empty() {
                    DataTableEmpty { columns: 4, {t.translate("No records")} }
                }
                for device in devices {
                    DataTableRow { key: "{device.hostname}",
                        DataTableCell { "{device.hostname}" }
                        DataTableCell { code { "{device.ip_address}" } }
                        DataTableCell { "{device.location}" }
                        DataTableCell {
                            Badge { tone: status_tone(device.status), {t.translate(device.status.label())} }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RegisterDeviceCard(on_registered: EventHandler<Device>) -> Element {
    let t = use_translator();
    let toast = use_toast();

    let mut hostname = use_signal(String::new);
    let mut ip_address = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut errors = use_signal(|| None::<AppError>);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let form = DeviceForm {
            hostname: hostname.read().trim().to_string(),
            ip_address: ip_address.read().trim().to_string(),
            location: location.read().trim().to_string(),
        };
        if let Err(e) = check(&form) {
            toast.error(t.translate(&e.toast_message()).to_string(), ToastOptions::new());
            errors.set(Some(e));
            return;
        }
        tracing::info!(hostname = %form.hostname, "Device registered");
        toast.success(
            t.translate_with("Device {name} registered", &[("name", form.hostname.as_str())]),
            ToastOptions::new(),
        );
        errors.set(None);
        hostname.set(String::new());
        ip_address.set(String::new());
        location.set(String::new());
        on_registered.call(Device {
            hostname: form.hostname,
            ip_address: form.ip_address,
            location: form.location,
            status: DeviceStatus::Offline,
        });
    };

    rsx! {
        Card {
            form { onsubmit: submit,
                CardHeader {
                    CardTitle { {t.translate("Register Device")} }
                }
                CardContent {
                    div { class: "form-grid",
                        Input {
                            label: t.translate("Hostname").to_string(),
                            value: hostname(),
                            on_input: move |e: FormEvent| hostname.set(e.value()),
                            error: field_error(&errors.read(), t, "hostname"),
                        }
                        Input {
                            label: t.translate("IP address").to_string(),
                            placeholder: "10.20.0.10",
                            value: ip_address(),
                            on_input: move |e: FormEvent| ip_address.set(e.value()),
                            error: field_error(&errors.read(), t, "ip_address"),
                        }
                        Input {
                            label: t.translate("Location").to_string(),
                            value: location(),
                            on_input: move |e: FormEvent| location.set(e.value()),
                        }
                    }
                }
                CardFooter {
                    Button { button_type: "submit", {t.translate("Register Device")} }
                }
            }
        }
    }
}

/// Full network inventory with device registration.
#[component]
pub fn DeviceInventory() -> Element {
    let t = use_translator();
    let mut devices = use_signal(mock::devices);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/pages.css") }
        PageHeader { title: t.translate("Devices").to_string() }
        RegisterDeviceCard { on_registered: move |device: Device| devices.write().push(device) }
        Card {
            CardContent {
                DeviceTable { devices: devices() }
            }
        }
    }
}

/// Customer-premises equipment a technician installs and swaps.
#[component]
pub fn FieldEquipment() -> Element {
    let t = use_translator();
    let equipment: Vec<_> = mock::devices()
        .into_iter()
        .filter(|d| d.hostname.starts_with(CPE_PREFIX))
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/pages.css") }
        PageHeader { title: t.translate("Field Equipment").to_string() }
        Card {
            CardHeader {
                CardTitle { {t.translate("Equipment")} }
            }
            CardContent {
                DeviceTable { devices: equipment }
            }
        }
    }
}
