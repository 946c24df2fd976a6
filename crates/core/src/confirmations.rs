use serde::Serialize;
use serde_json::{Map, Value};

/// A normalized, display-ready confirmation as read back from the
/// spreadsheet. All fields are strings; missing or null source cells map to
/// the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfirmationRow {
    pub timestamp: String,
    pub nombre: String,
    pub email: String,
    pub vas_a_poder_venir: String,
    pub cantidad_acompanantes: String,
    pub comentarios: String,
}

// Candidate source keys per canonical field, evaluated first-match-wins.
// The spreadsheet has gone through several header spellings; new spellings
// get appended here, never inserted before an existing one.
const TIMESTAMP_KEYS: &[&str] = &["timestamp", "Timestamp", "fecha", "Fecha"];
const NOMBRE_KEYS: &[&str] = &["nombre", "Nombre", "Nombre y apellido"];
const EMAIL_KEYS: &[&str] = &["email", "Email"];
const ASISTENCIA_KEYS: &[&str] = &["vasAPoderVenir", "Asistencia", "asistencia"];
const ACOMPANANTES_KEYS: &[&str] = &[
    "cantidadAcompanantes",
    "Cantidad de acompañantes",
    "acompanantes",
];
const COMENTARIOS_KEYS: &[&str] = &["comentarios", "Comentarios", "notas"];

impl ConfirmationRow {
    /// Builds a row from a raw source object with heterogeneous keys.
    ///
    /// Identity-ish fields (timestamp, name, email, attendance) skip empty
    /// candidate values and keep looking; the free-form fields (companion
    /// count, comments) accept a present-but-empty value as final.
    pub fn from_raw(raw: &Map<String, Value>) -> Self {
        Self {
            timestamp: first_non_empty(raw, TIMESTAMP_KEYS),
            nombre: first_non_empty(raw, NOMBRE_KEYS),
            email: first_non_empty(raw, EMAIL_KEYS),
            vas_a_poder_venir: first_non_empty(raw, ASISTENCIA_KEYS),
            cantidad_acompanantes: first_present(raw, ACOMPANANTES_KEYS),
            comentarios: first_present(raw, COMENTARIOS_KEYS),
        }
    }
}

/// Returns the first candidate whose value is present and non-empty.
fn first_non_empty(raw: &Map<String, Value>, keys: &[&str]) -> String {
    keys.iter()
        .filter_map(|key| raw.get(*key))
        .map(cell_text)
        .find(|text| !text.is_empty())
        .unwrap_or_default()
}

/// Returns the first candidate whose value is present at all (null excluded),
/// even if it renders as the empty string.
fn first_present(raw: &Map<String, Value>, keys: &[&str]) -> String {
    keys.iter()
        .filter_map(|key| raw.get(*key))
        .find(|value| !value.is_null())
        .map(cell_text)
        .unwrap_or_default()
}

/// Renders a source cell as display text.
fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_canonical_keys_pass_through() {
        let row = ConfirmationRow::from_raw(&raw(json!({
            "timestamp": "2026-03-07T21:00:00Z",
            "nombre": "Ana",
            "email": "ana@x.com",
            "vasAPoderVenir": "Sí",
            "cantidadAcompanantes": 2,
            "comentarios": "Sin gluten",
        })));

        assert_eq!(
            row,
            ConfirmationRow {
                timestamp: "2026-03-07T21:00:00Z".to_string(),
                nombre: "Ana".to_string(),
                email: "ana@x.com".to_string(),
                vas_a_poder_venir: "Sí".to_string(),
                cantidad_acompanantes: "2".to_string(),
                comentarios: "Sin gluten".to_string(),
            }
        );
    }

    #[test]
    fn test_historical_spreadsheet_headers_are_recognized() {
        let row = ConfirmationRow::from_raw(&raw(json!({
            "Fecha": "07/03/2026",
            "Nombre y apellido": "Beto Paz",
            "Email": "beto@x.com",
            "Asistencia": "No",
            "Cantidad de acompañantes": "0",
            "Comentarios": "",
        })));

        assert_eq!(row.timestamp, "07/03/2026");
        assert_eq!(row.nombre, "Beto Paz");
        assert_eq!(row.email, "beto@x.com");
        assert_eq!(row.vas_a_poder_venir, "No");
        assert_eq!(row.cantidad_acompanantes, "0");
        assert_eq!(row.comentarios, "");
    }

    #[test]
    fn test_first_match_wins_over_later_candidates() {
        let row = ConfirmationRow::from_raw(&raw(json!({
            "nombre": "canónico",
            "Nombre": "histórico",
        })));

        assert_eq!(row.nombre, "canónico");
    }

    #[test]
    fn test_empty_identity_value_falls_through_to_next_candidate() {
        let row = ConfirmationRow::from_raw(&raw(json!({
            "nombre": "",
            "Nombre": "histórico",
        })));

        assert_eq!(row.nombre, "histórico");
    }

    #[test]
    fn test_present_empty_comment_does_not_fall_through() {
        let row = ConfirmationRow::from_raw(&raw(json!({
            "comentarios": "",
            "notas": "viejo",
        })));

        assert_eq!(row.comentarios, "");
    }

    #[test]
    fn test_missing_everything_yields_empty_row() {
        let row = ConfirmationRow::from_raw(&Map::new());
        assert_eq!(row, ConfirmationRow::default());
    }

    #[test]
    fn test_null_cells_map_to_empty_string() {
        let row = ConfirmationRow::from_raw(&raw(json!({
            "nombre": null,
            "comentarios": null,
        })));

        assert_eq!(row.nombre, "");
        assert_eq!(row.comentarios, "");
    }
}
