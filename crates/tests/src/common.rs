use netdesk_core::{FileStore, Preferences};
use shared_types::{Language, ViewId};
use std::path::PathBuf;
use tempfile::TempDir;

/// A scratch directory holding one preference file. Keep the `TempDir`
/// alive for as long as the path is used.
pub fn preference_dir() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("netdesk").join("preferences.json");
    (dir, path)
}

/// Open preferences at `path` the way the desktop shell does on startup.
pub fn open_prefs(path: &PathBuf) -> Preferences<FileStore> {
    Preferences::load(FileStore::open(path), Language::English)
}

/// Every view the router can mount.
pub const ALL_VIEWS: &[ViewId] = &[
    ViewId::SuperAdminDashboard,
    ViewId::SystemAdminDashboard,
    ViewId::CustomerSupportDashboard,
    ViewId::TechnicianMapView,
    ViewId::ItOperationsDashboard,
    ViewId::CustomerPortalDashboard,
    ViewId::TenantManagement,
    ViewId::CustomerManagement,
    ViewId::CustomerLookup,
    ViewId::CustomerProfile,
    ViewId::TicketQueue,
    ViewId::AssignedJobs,
    ViewId::IncidentTickets,
    ViewId::MyTickets,
    ViewId::TicketDetail,
    ViewId::ServiceMap,
    ViewId::DeviceInventory,
    ViewId::FieldEquipment,
    ViewId::SubscriptionPlans,
    ViewId::ServicePlans,
    ViewId::AvailablePlans,
    ViewId::PlatformBilling,
    ViewId::TenantBilling,
    ViewId::MyBilling,
    ViewId::Reports,
    ViewId::GlobalAuditLogs,
    ViewId::TenantAuditLog,
    ViewId::GlobalSettings,
    ViewId::TenantSettings,
    ViewId::AccountSettings,
];
