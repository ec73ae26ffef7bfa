//! Fixed demo records. Pages copy what they need into local signals.

use shared_types::{
    AuditEntry, Customer, Device, DeviceStatus, Invoice, ServicePlan, Tenant, Ticket,
    TicketPriority, TicketStatus,
};

/// Tenant the System Admin and support views are scoped to.
pub const CURRENT_TENANT: &str = "Metro Fiber";
/// Assignee name of the signed-in technician.
pub const CURRENT_TECHNICIAN: &str = "R. Santos";
/// Customer account shown in the customer portal.
pub const CURRENT_CUSTOMER: &str = "Ana Reyes";
pub const CURRENT_CUSTOMER_EMAIL: &str = "ana.reyes@example.ph";

pub fn tickets() -> Vec<Ticket> {
    use TicketPriority::*;
    use TicketStatus::*;

    [
        ("TCK-1001", "No internet since morning", "Ana Reyes", High, Open, Some("R. Santos")),
        ("TCK-1002", "Slow speeds at night", "Jose Cruz", Medium, InProgress, Some("L. Garcia")),
        ("TCK-1003", "Router keeps rebooting", "Maria Lim", High, Open, Some("R. Santos")),
        ("TCK-1004", "Billing address change", "Ana Reyes", Low, Resolved, None),
        ("TCK-1005", "Fiber cut on Ortigas Ave", "Metro Fiber NOC", Critical, InProgress, Some("R. Santos")),
        ("TCK-1006", "Request for static IP", "Paolo Tan", Low, Open, None),
    ]
    .into_iter()
    .map(|(id, subject, customer, priority, status, assignee)| Ticket {
        id: id.to_string(),
        subject: subject.to_string(),
        customer: customer.to_string(),
        priority,
        status,
        assignee: assignee.map(str::to_string),
    })
    .collect()
}

pub fn customers() -> Vec<Customer> {
    [
        ("CUS-2001", "Ana Reyes", "ana.reyes@example.ph", "Fiber 100", true),
        ("CUS-2002", "Jose Cruz", "jose.cruz@example.ph", "Fiber 300", true),
        ("CUS-2003", "Maria Lim", "maria.lim@example.ph", "Fiber 50", true),
        ("CUS-2004", "Paolo Tan", "paolo.tan@example.ph", "Fiber 1000", false),
    ]
    .into_iter()
    .map(|(id, name, email, plan, active)| Customer {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        plan: plan.to_string(),
        active,
    })
    .collect()
}

pub fn devices() -> Vec<Device> {
    [
        ("olt-pasig-01", "10.20.0.1", "Pasig POP", DeviceStatus::Online),
        ("olt-ortigas-02", "10.20.0.2", "Ortigas POP", DeviceStatus::Degraded),
        ("core-rtr-01", "10.0.0.1", "Makati DC", DeviceStatus::Online),
        ("ont-2003", "100.64.3.17", "Maria Lim, Cainta", DeviceStatus::Offline),
    ]
    .into_iter()
    .map(|(hostname, ip, location, status)| Device {
        hostname: hostname.to_string(),
        ip_address: ip.to_string(),
        location: location.to_string(),
        status,
    })
    .collect()
}

pub fn audit_entries() -> Vec<AuditEntry> {
    [
        ("2026-03-04T14:05:00Z", "root@netdesk", None, "Created tenant Bayan Wireless"),
        ("2026-03-04T13:40:00Z", "admin@metrofiber", Some(CURRENT_TENANT), "Changed plan Fiber 300 price"),
        ("2026-03-04T11:12:00Z", "support@metrofiber", Some(CURRENT_TENANT), "Approved refund INV-3002"),
        ("2026-03-03T09:00:00Z", "admin@bayan", Some("Bayan Wireless"), "Registered device olt-qc-01"),
        ("2026-03-02T17:25:00Z", "root@netdesk", None, "Suspended tenant Island Link"),
    ]
    .into_iter()
    .map(|(timestamp, actor, tenant, action)| AuditEntry {
        timestamp: timestamp.to_string(),
        actor: actor.to_string(),
        tenant: tenant.map(str::to_string),
        action: action.to_string(),
    })
    .collect()
}

pub fn tenants() -> Vec<Tenant> {
    [
        ("TEN-01", "Metro Fiber", 18_420, false),
        ("TEN-02", "Bayan Wireless", 6_105, false),
        ("TEN-03", "Island Link", 1_230, true),
    ]
    .into_iter()
    .map(|(id, name, subscribers, suspended)| Tenant {
        id: id.to_string(),
        name: name.to_string(),
        subscribers,
        suspended,
    })
    .collect()
}

/// Subscriber plans sold by the current tenant.
pub fn service_plans() -> Vec<ServicePlan> {
    plans(&[
        ("Fiber 50", 50, 1299.0),
        ("Fiber 100", 100, 1699.0),
        ("Fiber 300", 300, 2499.0),
        ("Fiber 1000", 1000, 4999.0),
    ])
}

/// Platform subscription tiers sold to tenants.
pub fn subscription_plans() -> Vec<ServicePlan> {
    plans(&[("Starter", 0, 9_900.0), ("Growth", 0, 24_900.0), ("Carrier", 0, 79_900.0)])
}

fn plans(rows: &[(&str, u32, f64)]) -> Vec<ServicePlan> {
    rows.iter()
        .map(|(name, speed_mbps, monthly_price)| ServicePlan {
            name: name.to_string(),
            speed_mbps: *speed_mbps,
            monthly_price: *monthly_price,
        })
        .collect()
}

/// Subscriber invoices of the current tenant.
pub fn invoices() -> Vec<Invoice> {
    [
        ("INV-3001", "Ana Reyes", 1699.0, true),
        ("INV-3002", "Jose Cruz", 2499.0, false),
        ("INV-3003", "Maria Lim", 1299.0, false),
        ("INV-3004", "Ana Reyes", 1699.0, false),
    ]
    .into_iter()
    .map(|(number, account, amount, paid)| Invoice {
        number: number.to_string(),
        account: account.to_string(),
        amount,
        paid,
    })
    .collect()
}

/// Platform invoices billed to tenants.
pub fn tenant_invoices() -> Vec<Invoice> {
    [
        ("PLT-0101", "Metro Fiber", 79_900.0, true),
        ("PLT-0102", "Bayan Wireless", 24_900.0, true),
        ("PLT-0103", "Island Link", 9_900.0, false),
    ]
    .into_iter()
    .map(|(number, account, amount, paid)| Invoice {
        number: number.to_string(),
        account: account.to_string(),
        amount,
        paid,
    })
    .collect()
}
