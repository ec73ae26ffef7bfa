use serde::{Deserialize, Serialize};

use crate::Role;

/// Icon tag attached to a navigation entry. The UI maps each tag to a
/// concrete icon component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavIcon {
    Dashboard,
    Tenants,
    Customers,
    Tickets,
    Map,
    Devices,
    Plans,
    Billing,
    Reports,
    Audit,
    GlobalSettings,
    Settings,
    Account,
}

/// Identifier of every page component the router can mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewId {
    // Dashboard variants, one per role
    SuperAdminDashboard,
    SystemAdminDashboard,
    CustomerSupportDashboard,
    TechnicianMapView,
    ItOperationsDashboard,
    CustomerPortalDashboard,

    TenantManagement,
    CustomerManagement,
    CustomerLookup,
    CustomerProfile,
    TicketQueue,
    AssignedJobs,
    IncidentTickets,
    MyTickets,
    TicketDetail,
    ServiceMap,
    DeviceInventory,
    FieldEquipment,
    SubscriptionPlans,
    ServicePlans,
    AvailablePlans,
    PlatformBilling,
    TenantBilling,
    MyBilling,
    Reports,
    GlobalAuditLogs,
    TenantAuditLog,
    GlobalSettings,
    TenantSettings,
    AccountSettings,
}

impl ViewId {
    /// Translation key of the page title.
    pub fn title_key(&self) -> &'static str {
        match self {
            ViewId::SuperAdminDashboard
            | ViewId::SystemAdminDashboard
            | ViewId::CustomerSupportDashboard
            | ViewId::ItOperationsDashboard
            | ViewId::CustomerPortalDashboard => "Dashboard",
            ViewId::TechnicianMapView | ViewId::ServiceMap => "Service Map",
            ViewId::TenantManagement => "Tenants",
            ViewId::CustomerManagement | ViewId::CustomerLookup => "Customers",
            ViewId::CustomerProfile => "Customer Profile",
            ViewId::TicketQueue | ViewId::IncidentTickets => "Tickets",
            ViewId::AssignedJobs => "Assigned Jobs",
            ViewId::MyTickets => "My Tickets",
            ViewId::TicketDetail => "Ticket Details",
            ViewId::DeviceInventory => "Devices",
            ViewId::FieldEquipment => "Field Equipment",
            ViewId::SubscriptionPlans | ViewId::ServicePlans | ViewId::AvailablePlans => "Plans",
            ViewId::PlatformBilling | ViewId::TenantBilling => "Billing",
            ViewId::MyBilling => "My Bills",
            ViewId::Reports => "Reports",
            ViewId::GlobalAuditLogs | ViewId::TenantAuditLog => "Audit Logs",
            ViewId::GlobalSettings => "Global Settings",
            ViewId::TenantSettings => "Settings",
            ViewId::AccountSettings => "Account Settings",
        }
    }

    pub fn is_dashboard(&self) -> bool {
        matches!(
            self,
            ViewId::SuperAdminDashboard
                | ViewId::SystemAdminDashboard
                | ViewId::CustomerSupportDashboard
                | ViewId::TechnicianMapView
                | ViewId::ItOperationsDashboard
                | ViewId::CustomerPortalDashboard
        )
    }
}

/// A resolved route: the view to mount and its `:id` segment, if the
/// pattern had one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteMatch {
    pub view: ViewId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Result of resolving a path for a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteOutcome {
    View(RouteMatch),
    /// The path exists but has no variant for this role.
    Forbidden { path: String, role: Role },
    NotFound { path: String },
}

impl RouteOutcome {
    /// The mounted view, if any.
    pub fn view(&self) -> Option<ViewId> {
        match self {
            RouteOutcome::View(m) => Some(m.view),
            _ => None,
        }
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self, RouteOutcome::Forbidden { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RouteOutcome::NotFound { .. })
    }
}
