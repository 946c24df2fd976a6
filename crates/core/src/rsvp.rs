use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An RSVP submission as entered by a guest.
///
/// Every field is optional: the form is driven by an external content
/// document, and historical clients have sent partial bodies. Anything the
/// guest did not fill in becomes an empty string in the forwarded record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RsvpSubmission {
    pub nombre: Option<String>,
    pub email: Option<String>,
    pub asistencia: Option<String>,
    /// Companion count arrives as a number from the form but older clients
    /// sent it as a string, so it is accepted as any JSON value.
    pub acompanantes: Option<Value>,
    pub notas: Option<String>,
}

impl RsvpSubmission {
    /// Extracts a submission from an arbitrary JSON document, one field at
    /// a time.
    ///
    /// Each field stands alone: a mistyped or missing field degrades to
    /// absent without touching its siblings, and a non-object document
    /// yields an all-absent submission. Total by construction.
    pub fn from_value(document: &Value) -> Self {
        Self {
            nombre: string_field(document, "nombre"),
            email: string_field(document, "email"),
            asistencia: string_field(document, "asistencia"),
            acompanantes: document.get("acompanantes").cloned(),
            notas: string_field(document, "notas"),
        }
    }
}

fn string_field(document: &Value, key: &str) -> Option<String> {
    document.get(key).and_then(Value::as_str).map(str::to_string)
}

/// The record forwarded to the spreadsheet processor.
///
/// The serialized field names are the external schema. They are fixed:
/// renaming anything here breaks the spreadsheet's column mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForwardedRecord {
    pub nombre: String,
    pub email: String,
    pub vas_a_poder_venir: String,
    pub cantidad_acompanantes: String,
    pub comentarios: String,
}

impl ForwardedRecord {
    /// Remaps a submission into the external schema.
    ///
    /// All five fields are always present and always strings. A numeric or
    /// string companion count is stringified; anything else (absent, null,
    /// an object) becomes the empty string.
    pub fn from_submission(submission: &RsvpSubmission) -> Self {
        Self {
            nombre: submission.nombre.clone().unwrap_or_default(),
            email: submission.email.clone().unwrap_or_default(),
            vas_a_poder_venir: submission.asistencia.clone().unwrap_or_default(),
            cantidad_acompanantes: companion_count_text(submission.acompanantes.as_ref()),
            comentarios: submission.notas.clone().unwrap_or_default(),
        }
    }
}

fn companion_count_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}
