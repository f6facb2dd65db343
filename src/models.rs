use std::rc::Rc;
use serde::{Deserialize, Serialize};
use yew::functional::Reducible;
use crate::error::CallError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountryCode {
    pub code: &'static str,
    pub country: &'static str,
    pub flag: &'static str,
}

pub const COUNTRY_CODES: &[CountryCode] = &[
    CountryCode { code: "+1", country: "US", flag: "🇺🇸" },
    CountryCode { code: "+44", country: "GB", flag: "🇬🇧" },
    CountryCode { code: "+61", country: "AU", flag: "🇦🇺" },
    CountryCode { code: "+33", country: "FR", flag: "🇫🇷" },
    CountryCode { code: "+49", country: "DE", flag: "🇩🇪" },
];

/// Body of `POST /v1/start_call`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CallRequest {
    pub call_type: String,
    pub phone_number: String,
    pub name: String,
    pub email: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Pre-call form contents, updated on every keystroke.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub country_code: CountryCode,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone_number: String::new(),
            country_code: COUNTRY_CODES[0],
        }
    }
}

impl ContactForm {
    /// Calling code and typed digits are joined as-is; the call service does
    /// any normalisation.
    pub fn full_phone_number(&self) -> String {
        format!("{}{}", self.country_code.code, self.phone_number)
    }

    pub fn to_request(&self, call_type: &str) -> CallRequest {
        CallRequest {
            call_type: call_type.to_string(),
            phone_number: self.full_phone_number(),
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

pub enum FormAction {
    Name(String),
    Email(String),
    PhoneNumber(String),
    CountryCode(CountryCode),
}

impl Reducible for ContactForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut form = (*self).clone();
        match action {
            FormAction::Name(name) => form.name = name,
            FormAction::Email(email) => form.email = email,
            FormAction::PhoneNumber(phone_number) => form.phone_number = phone_number,
            FormAction::CountryCode(country_code) => form.country_code = country_code,
        }
        Rc::new(form)
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl SubmitStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitStatus::Submitting)
    }

    pub fn settle(result: &Result<(), CallError>) -> Self {
        match result {
            Ok(()) => SubmitStatus::Succeeded,
            Err(e) => SubmitStatus::Failed(e.to_string()),
        }
    }
}

/// In-flight bookkeeping for the pre-call form. Each accepted submit gets a
/// new generation so a late timer can tell it has been superseded.
#[derive(Debug, Default)]
pub struct SubmissionTracker {
    in_flight: bool,
    generation: u32,
}

impl SubmissionTracker {
    /// False while a request is still pending.
    pub fn try_begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        self.generation += 1;
        true
    }

    /// Ends the pending request. The result should only be applied while the
    /// page is still mounted.
    pub fn settle(&mut self, still_mounted: bool) -> bool {
        self.in_flight = false;
        still_mounted
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn is_latest(&self, generation: u32) -> bool {
        !self.in_flight && self.generation == generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn jane(code: CountryCode) -> ContactForm {
        ContactForm {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone_number: "7911123456".to_string(),
            country_code: code,
        }
    }

    #[test]
    fn default_form_uses_first_country_code() {
        let form = ContactForm::default();
        assert_eq!(form.country_code.code, "+1");
        assert_eq!(form.country_code.country, "US");
        assert!(form.name.is_empty() && form.email.is_empty() && form.phone_number.is_empty());
    }

    #[test]
    fn country_codes_are_unique() {
        for (i, a) in COUNTRY_CODES.iter().enumerate() {
            for b in &COUNTRY_CODES[i + 1..] {
                assert_ne!(a.code, b.code);
            }
        }
    }

    #[test]
    fn request_body_matches_wire_format() {
        let form = jane(COUNTRY_CODES[1]);
        let body = serde_json::to_string(&form.to_request("phq_9")).unwrap();
        assert_eq!(
            body,
            r#"{"call_type":"phq_9","phone_number":"+447911123456","name":"Jane Doe","email":"jane@example.com"}"#
        );
    }

    #[test]
    fn selected_country_code_prefixes_phone_number() {
        let mut form = jane(COUNTRY_CODES[0]);
        assert_eq!(form.to_request("phq_9").phone_number, "+17911123456");

        form.country_code = COUNTRY_CODES[4];
        assert_eq!(form.to_request("phq_9").phone_number, "+497911123456");
    }

    #[test]
    fn typed_values_are_sent_verbatim() {
        let form = ContactForm {
            name: "  Jane  O'Doe ".to_string(),
            email: " JANE@Example.com".to_string(),
            phone_number: "0 (791) 112-3456".to_string(),
            country_code: COUNTRY_CODES[2],
        };
        let value = serde_json::to_value(form.to_request("treatment_response")).unwrap();
        assert_eq!(
            value,
            json!({
                "call_type": "treatment_response",
                "phone_number": "+610 (791) 112-3456",
                "name": "  Jane  O'Doe ",
                "email": " JANE@Example.com",
            })
        );
    }

    #[test]
    fn repeated_submissions_build_equal_independent_payloads() {
        let form = jane(COUNTRY_CODES[1]);
        let first = form.to_request("medication_adherence");
        let mut second = form.to_request("medication_adherence");
        assert_eq!(first, second);

        second.name.push('!');
        assert_eq!(first.name, "Jane Doe");
    }

    #[test]
    fn actions_update_one_field_each() {
        let form = Rc::new(ContactForm::default())
            .reduce(FormAction::Name("Jane Doe".to_string()))
            .reduce(FormAction::Email("jane@example.com".to_string()))
            .reduce(FormAction::PhoneNumber("7911123456".to_string()))
            .reduce(FormAction::CountryCode(COUNTRY_CODES[1]));
        assert_eq!(*form, jane(COUNTRY_CODES[1]));

        let edited = form.clone().reduce(FormAction::PhoneNumber("79111234".to_string()));
        assert_eq!(edited.phone_number, "79111234");
        assert_eq!(edited.name, form.name);
        assert_eq!(edited.country_code, form.country_code);
    }

    #[test]
    fn error_body_message_is_optional() {
        let with: ErrorResponse = serde_json::from_str(r#"{"message":"busy"}"#).unwrap();
        assert_eq!(with.message.as_deref(), Some("busy"));

        let without: ErrorResponse = serde_json::from_str(r#"{"detail":"x"}"#).unwrap();
        assert!(without.message.is_none());
    }

    #[test]
    fn only_submitting_disables_the_form() {
        assert!(!SubmitStatus::Idle.is_submitting());
        assert!(SubmitStatus::Submitting.is_submitting());
        assert!(!SubmitStatus::Succeeded.is_submitting());
        assert!(!SubmitStatus::Failed("x".to_string()).is_submitting());
    }

    #[test]
    fn settling_leaves_submitting_either_way() {
        assert_eq!(SubmitStatus::settle(&Ok(())), SubmitStatus::Succeeded);

        let failed = SubmitStatus::settle(&Err(CallError::Rejected { status: 500, message: None }));
        assert_eq!(failed, SubmitStatus::Failed("Failed to initiate call (status 500)".to_string()));
        assert!(!failed.is_submitting());
    }

    #[test]
    fn second_submit_is_rejected_while_in_flight() {
        let mut tracker = SubmissionTracker::default();
        assert!(tracker.try_begin());
        assert!(!tracker.try_begin());
        assert_eq!(tracker.generation(), 1);

        assert!(tracker.settle(true));
        assert!(tracker.try_begin());
        assert_eq!(tracker.generation(), 2);
    }

    #[test]
    fn result_after_unmount_is_discarded_but_frees_the_form() {
        let mut tracker = SubmissionTracker::default();
        assert!(tracker.try_begin());
        assert!(!tracker.settle(false));
        assert!(tracker.try_begin());
    }

    #[test]
    fn success_timer_only_clears_the_latest_submission() {
        let mut tracker = SubmissionTracker::default();
        tracker.try_begin();
        tracker.settle(true);
        let first = tracker.generation();
        assert!(tracker.is_latest(first));

        tracker.try_begin();
        assert!(!tracker.is_latest(first));
        let second = tracker.generation();
        assert!(!tracker.is_latest(second));

        tracker.settle(true);
        assert!(!tracker.is_latest(first));
        assert!(tracker.is_latest(second));
    }
}
