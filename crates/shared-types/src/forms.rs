use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::{Validate, ValidationError};

/// Form state for opening a support ticket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct NewTicketForm {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 3, max = 120, message = "Subject must be 3 to 120 characters"))
    )]
    pub subject: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Enter a valid e-mail address"))
    )]
    pub customer_email: String,
    pub description: String,
}

/// Form state for registering network equipment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct DeviceForm {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Hostname is required"))
    )]
    pub hostname: String,
    #[cfg_attr(
        feature = "validation",
        validate(ip(message = "Enter a valid IPv4 or IPv6 address"))
    )]
    pub ip_address: String,
    pub location: String,
}

/// Form state for a service plan. Price is kept as the raw input text so
/// the field can show exactly what was typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct PlanForm {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Plan name is required"))
    )]
    pub name: String,
    #[cfg_attr(feature = "validation", validate(custom(function = "validate_price")))]
    pub monthly_price: String,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 1, max = 10000, message = "Speed must be between 1 and 10000 Mbps"))
    )]
    pub speed_mbps: u32,
}

impl PlanForm {
    /// Parsed price, if the text is a valid price.
    pub fn price_value(&self) -> Option<f64> {
        if is_valid_price(&self.monthly_price) {
            self.monthly_price.trim().parse().ok()
        } else {
            None
        }
    }
}

/// Non-negative decimal with at most two fractional digits, e.g. `1499`,
/// `1499.5`, `1499.00`.
pub fn is_valid_price(text: &str) -> bool {
    let text = text.trim();
    let (whole, fraction) = match text.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (text, None),
    };
    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    match fraction {
        None => true,
        Some(f) => (1..=2).contains(&f.len()) && f.bytes().all(|b| b.is_ascii_digit()),
    }
}

#[cfg(feature = "validation")]
fn validate_price(value: &str) -> Result<(), ValidationError> {
    if is_valid_price(value) {
        Ok(())
    } else {
        Err(ValidationError::new("price")
            .with_message("Price must be a non-negative amount like 1499.00".into()))
    }
}
