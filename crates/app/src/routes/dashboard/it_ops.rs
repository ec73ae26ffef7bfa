use dioxus::prelude::*;
use shared_types::DeviceStatus;
use shared_ui::{Card, CardContent, CardHeader, CardTitle, StatCard, StatGrid};

use super::DashboardHeader;
use crate::i18n::use_translator;
use crate::mock;
use crate::routes::devices::DeviceTable;

/// Network health: device availability and the offline list.
#[component]
pub fn ItOperationsDashboard() -> Element {
    let t = use_translator();
    let devices = mock::devices();
    let online = devices.iter().filter(|d| d.status == DeviceStatus::Online).count();
    let uptime = online as f64 / devices.len().max(1) as f64 * 100.0;
    let unhealthy: Vec<_> = devices
        .into_iter()
        .filter(|d| d.status != DeviceStatus::Online)
        .collect();

    rsx! {
        DashboardHeader {}
        StatGrid {
            StatCard { label: t.translate("Network Uptime").to_string(), value: format!("{uptime:.1}%") }
            StatCard {
                label: t.translate("Devices Offline").to_string(),
                value: unhealthy.len().to_string(),
            }
        }
        Card {
            CardHeader {
                CardTitle { {t.translate("Devices Offline")} }
            }
            CardContent {
                DeviceTable { devices: unhealthy }
            }
        }
    }
}
