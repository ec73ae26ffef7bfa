use netdesk_core::i18n::lookup;
use netdesk_core::Translator;
use shared_types::{AppError, AppErrorKind, DeviceForm, Language, NewTicketForm, PlanForm};
use validator::Validate;

/// Field messages of a form that fails every rule it has.
fn all_messages() -> Vec<String> {
    let ticket = NewTicketForm {
        subject: "x".into(),
        customer_email: "nope".into(),
        description: String::new(),
    };
    let device = DeviceForm {
        hostname: String::new(),
        ip_address: "999.1.1.1".into(),
        location: String::new(),
    };
    let plan = PlanForm {
        name: String::new(),
        monthly_price: "1,499".into(),
        speed_mbps: 0,
    };
    let errors: Vec<AppError> = vec![
        ticket.validate().unwrap_err().into(),
        device.validate().unwrap_err().into(),
        plan.validate().unwrap_err().into(),
    ];
    errors
        .into_iter()
        .flat_map(|e| e.field_errors.into_values())
        .collect()
}

#[test]
fn test_every_validation_message_is_translated() {
    let messages = all_messages();
    assert_eq!(messages.len(), 7);
    for message in &messages {
        assert!(
            lookup(message, Language::Filipino).is_some(),
            "untranslated: {message}"
        );
    }
}

#[test]
fn test_toast_shows_first_field_message() {
    let form = DeviceForm {
        hostname: "olt-qc-01".into(),
        ip_address: "not-an-ip".into(),
        location: String::new(),
    };
    let err: AppError = form.validate().unwrap_err().into();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(err.toast_message(), "Enter a valid IPv4 or IPv6 address");

    let t = Translator::new(Language::Filipino);
    assert_ne!(t.translate(&err.toast_message()), err.toast_message());
}
