use netdesk_core::Translator;
use shared_types::AppError;
use validator::Validate;

/// Run the form's validation rules.
pub fn check<T: Validate>(form: &T) -> Result<(), AppError> {
    form.validate().map_err(AppError::from)
}

/// Translated error for one field of the last failed submit.
pub fn field_error(errors: &Option<AppError>, t: Translator, field: &str) -> Option<String> {
    errors
        .as_ref()
        .and_then(|e| e.field(field))
        .map(|message| t.translate(message).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{DeviceForm, Language, NewTicketForm};

    #[test]
    fn invalid_form_reports_fields() {
        let form = DeviceForm {
            hostname: String::new(),
            ip_address: "10.0.0.300".into(),
            location: String::new(),
        };
        let errors = check(&form).err();
        let t = Translator::new(Language::English);
        assert_eq!(
            field_error(&errors, t, "hostname").as_deref(),
            Some("Hostname is required")
        );
        assert!(field_error(&errors, t, "ip_address").is_some());
        assert_eq!(field_error(&errors, t, "location"), None);
    }

    #[test]
    fn field_errors_are_translated() {
        let form = NewTicketForm {
            subject: "Slow connection in Pasig".into(),
            customer_email: "not-an-email".into(),
            description: String::new(),
        };
        let errors = check(&form).err();
        let t = Translator::new(Language::Filipino);
        assert_eq!(
            field_error(&errors, t, "customer_email").as_deref(),
            Some("Maglagay ng wastong e-mail address")
        );
    }

    #[test]
    fn valid_form_passes() {
        let form = NewTicketForm {
            subject: "No internet".into(),
            customer_email: "ana.reyes@example.ph".into(),
            description: String::new(),
        };
        assert!(check(&form).is_ok());
    }
}
