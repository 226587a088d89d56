//! Wire-level data models for the resource API.
//!
//! These records mirror the JSON bodies exchanged with the REST backend.
//! The server owns their schema; the console only passes them through as
//! dialog payloads and re-fetches them after a mutation. Identifiers are
//! server-issued strings and are treated as opaque.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A missionary group. The root entity everything else hangs off.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grupo {
    pub id: String,
    pub name: String,
}

/// A missionary, always attached to a group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Misionero {
    pub id: String,
    pub name: String,
    pub grupo_id: String,
}

/// A field trip ("salida") of a group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Salida {
    pub id: String,
    pub name: String,
    pub fecha: NaiveDate,
    pub grupo_id: String,
}

/// An activity report ("informe") describing how an outing went.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Informe {
    pub id: String,
    pub name: String,
    pub descripcion: String,
    pub fecha: NaiveDate,
    pub grupo_id: String,
}

/// Request body for creating or updating a grupo.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrupoInput {
    pub name: String,
}

/// Request body for creating or updating a misionero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MisioneroInput {
    pub name: String,
    pub grupo_id: String,
}

/// Request body for creating or updating a salida.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalidaInput {
    pub name: String,
    pub fecha: NaiveDate,
    pub grupo_id: String,
}

/// Request body for creating or updating an informe.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InformeInput {
    pub name: String,
    pub descripcion: String,
    pub fecha: NaiveDate,
    pub grupo_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn informe_input_uses_camel_case_wire_names() {
        let input = InformeInput {
            name: "Visita barrio".to_string(),
            descripcion: "Fue bien".to_string(),
            fecha: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            grupo_id: "G1".to_string(),
        };

        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["grupoId"], "G1");
        assert_eq!(json["fecha"], "2024-05-01");
        assert_eq!(json["descripcion"], "Fue bien");
    }

    #[test]
    fn misionero_round_trips() {
        let raw = r#"{"id":"M1","name":"Ana","grupoId":"G1"}"#;
        let m: Misionero = serde_json::from_str(raw).unwrap();
        assert_eq!(m.grupo_id, "G1");
        let back = serde_json::to_string(&m).unwrap();
        assert!(back.contains("grupoId"));
    }
}
