//! Form Payloads and Persisted Records
//!
//! Serde names match the HTML form field names exactly, so the stored JSON
//! keeps the `field-name → value` shape plus a `createdAt` timestamp.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validation::{require_all, require_email};

/// Service code → display label
pub const SERVICES: &[(&str, &str)] = &[
    ("consulta", "Consulta Geral"),
    ("vacina", "Vacinação"),
    ("banho-tosa", "Banho e Tosa"),
    ("cirurgia", "Cirurgia"),
    ("exames", "Exames Laboratoriais"),
    ("odontologia", "Odontologia"),
    ("emergencia", "Emergência"),
];

/// Pet type code → display label
pub const PET_TYPES: &[(&str, &str)] = &[
    ("dog", "Cachorro"),
    ("cat", "Gato"),
    ("bird", "Pássaro"),
    ("rodent", "Roedor"),
    ("other", "Outro"),
];

/// Label for a service code, or the code itself when unknown
pub fn service_label(code: &str) -> &str {
    SERVICES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
        .unwrap_or(code)
}

/// `YYYY-MM-DD` as `DD/MM/YYYY`, or the raw value if it does not parse
pub fn localized_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

fn timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Appointment form as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentForm {
    #[serde(rename = "pet-name")]
    pub pet_name: String,
    #[serde(rename = "pet-type")]
    pub pet_type: String,
    #[serde(rename = "owner-name")]
    pub owner_name: String,
    pub phone: String,
    pub email: String,
    #[serde(rename = "appointment-date")]
    pub date: String,
    #[serde(rename = "appointment-time")]
    pub time: String,
    pub service: String,
}

impl AppointmentForm {
    /// Required fields with their labels, in form order
    pub fn required_fields(&self) -> [(&'static str, &str); 8] {
        [
            ("Nome do pet", self.pet_name.as_str()),
            ("Tipo de pet", self.pet_type.as_str()),
            ("Nome do tutor", self.owner_name.as_str()),
            ("Telefone", self.phone.as_str()),
            ("E-mail", self.email.as_str()),
            ("Data", self.date.as_str()),
            ("Horário", self.time.as_str()),
            ("Serviço", self.service.as_str()),
        ]
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_all(self.required_fields())?;
        require_email(&self.email)
    }

    /// Freeze the submitted values into a record
    pub fn into_record(self, now: DateTime<Utc>) -> AppointmentRecord {
        AppointmentRecord {
            form: self,
            created_at: timestamp(now),
        }
    }
}

/// Persisted appointment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentRecord {
    #[serde(flatten)]
    pub form: AppointmentForm,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Contact form as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(rename = "nomesobrenome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    #[serde(rename = "assunto", default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(rename = "mensagem")]
    pub message: String,
}

impl ContactForm {
    pub fn required_fields(&self) -> [(&'static str, &str); 4] {
        [
            ("Nome e sobrenome", self.name.as_str()),
            ("E-mail", self.email.as_str()),
            ("Telefone", self.phone.as_str()),
            ("Mensagem", self.message.as_str()),
        ]
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_all(self.required_fields())?;
        require_email(&self.email)
    }

    /// Blank subjects are stored as absent
    pub fn into_record(mut self, now: DateTime<Utc>) -> ContactRecord {
        self.subject = self.subject.filter(|s| !s.trim().is_empty());
        ContactRecord {
            form: self,
            created_at: timestamp(now),
        }
    }
}

/// Persisted contact message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    #[serde(flatten)]
    pub form: ContactForm,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_appointment() -> AppointmentForm {
        AppointmentForm {
            pet_name: "Rex".to_string(),
            pet_type: "dog".to_string(),
            owner_name: "Ana".to_string(),
            phone: "(11) 99999-8888".to_string(),
            email: "ana@x.com".to_string(),
            date: "2030-05-20".to_string(),
            time: "10:00".to_string(),
            service: "vacina".to_string(),
        }
    }

    #[test]
    fn test_service_label_lookup() {
        assert_eq!(service_label("vacina"), "Vacinação");
        assert_eq!(service_label("banho-tosa"), "Banho e Tosa");
        assert_eq!(service_label("acupuntura"), "acupuntura");
    }

    #[test]
    fn test_localized_date() {
        assert_eq!(localized_date("2030-05-20"), "20/05/2030");
        assert_eq!(localized_date("amanhã"), "amanhã");
    }

    #[test]
    fn test_appointment_validation() {
        assert!(sample_appointment().validate().is_ok());

        let mut form = sample_appointment();
        form.owner_name = "  ".to_string();
        assert_eq!(form.validate(), Err(ValidationError::MissingField("Nome do tutor")));

        let mut form = sample_appointment();
        form.email = "ana@x".to_string();
        assert_eq!(form.validate(), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_appointment_record_uses_form_field_names() {
        let now = Utc.with_ymd_and_hms(2030, 1, 2, 3, 4, 5).unwrap();
        let record = sample_appointment().into_record(now);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["pet-name"], "Rex");
        assert_eq!(json["appointment-time"], "10:00");
        assert_eq!(json["createdAt"], "2030-01-02T03:04:05.000Z");

        let back: AppointmentRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_contact_subject_is_optional() {
        let form = ContactForm {
            name: "Ana Souza".to_string(),
            email: "ana@x.com".to_string(),
            phone: "11999998888".to_string(),
            subject: Some("  ".to_string()),
            message: "Olá".to_string(),
        };
        assert!(form.validate().is_ok());

        let record = form.into_record(Utc::now());
        assert_eq!(record.form.subject, None);
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("assunto").is_none());
        assert_eq!(json["nomesobrenome"], "Ana Souza");
    }

    #[test]
    fn test_contact_requires_message() {
        let form = ContactForm {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            phone: "11999998888".to_string(),
            subject: None,
            message: String::new(),
        };
        assert_eq!(form.validate(), Err(ValidationError::MissingField("Mensagem")));
    }
}
