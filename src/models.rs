//! Frontend Models
//!
//! Data structures matching the SSD REST backend.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a registered system
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SystemStatus {
    #[default]
    Ativo,
    Cancelado,
}

impl SystemStatus {
    pub const ALL: [SystemStatus; 2] = [SystemStatus::Ativo, SystemStatus::Cancelado];

    pub fn as_str(self) -> &'static str {
        match self {
            SystemStatus::Ativo => "ATIVO",
            SystemStatus::Cancelado => "CANCELADO",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value.trim())
    }
}

/// System record as returned by `GET /SSD` and `GET /SSD/{id}`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemRecord {
    pub id: u32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub descricao: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sigla: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email_atendimento: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(default)]
    pub status: Option<SystemStatus>,
    #[serde(default, alias = "usuarioUltimaAlteração")]
    pub usuario_ultima_alteracao: Option<String>,
    #[serde(default)]
    pub data_ultima_alteracao: Option<String>,
    #[serde(default)]
    pub justificativa_ultima_alteracao: Option<String>,
}

impl SystemRecord {
    /// Status with the server's omission mapped to ATIVO
    pub fn effective_status(&self) -> SystemStatus {
        self.status.unwrap_or_default()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Query parameters for `GET /SSD`; empty strings mean "no constraint"
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SystemFilter {
    pub descricao: String,
    pub sigla: String,
    pub email_atendimento: String,
}

/// Body of `POST /SSD`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSystem {
    pub descricao: String,
    pub sigla: String,
    pub email_atendimento: String,
    pub url: String,
}

/// Body of `PUT /SSD/{id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemUpdate {
    pub id: u32,
    pub descricao: String,
    pub sigla: String,
    pub email_atendimento: String,
    pub url: String,
    pub nova_justificativa_alteracao: String,
    pub status: SystemStatus,
}

/// Body of `POST /auth/login`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/nova-conta`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Login / registration response; only the token is consumed
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
}

/// Identity error entry in a registration 400 body
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IdentityError {
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deserializes_with_missing_and_null_fields() {
        let json = r#"{"id":7,"descricao":"Portal","sigla":"PTL","emailAtendimento":null}"#;
        let record: SystemRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.sigla, "PTL");
        assert_eq!(record.email_atendimento, "");
        assert_eq!(record.url, "");
        assert_eq!(record.status, None);
        assert_eq!(record.effective_status(), SystemStatus::Ativo);
    }

    #[test]
    fn test_record_accepts_accented_last_change_user() {
        let json = r#"{"id":1,"status":"CANCELADO","usuarioUltimaAlteração":"ana@x.com","dataUltimaAlteracao":"2021-03-01"}"#;
        let record: SystemRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.usuario_ultima_alteracao.as_deref(), Some("ana@x.com"));
        assert_eq!(record.data_ultima_alteracao.as_deref(), Some("2021-03-01"));
        assert_eq!(record.effective_status(), SystemStatus::Cancelado);
    }

    #[test]
    fn test_update_serializes_camel_case() {
        let update = SystemUpdate {
            id: 3,
            descricao: "d".into(),
            sigla: "s".into(),
            email_atendimento: "".into(),
            url: "".into(),
            nova_justificativa_alteracao: "why".into(),
            status: SystemStatus::Cancelado,
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value["emailAtendimento"], "");
        assert_eq!(value["novaJustificativaAlteracao"], "why");
        assert_eq!(value["status"], "CANCELADO");
        assert_eq!(value["id"], 3);
    }

    #[test]
    fn test_registration_uses_confirm_password_key() {
        let reg = Registration {
            email: "a@b.com".into(),
            password: "p".into(),
            confirm_password: "p".into(),
        };
        let value = serde_json::to_value(&reg).unwrap();
        assert_eq!(value["confirmPassword"], "p");
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(SystemStatus::parse("ATIVO"), Some(SystemStatus::Ativo));
        assert_eq!(SystemStatus::parse(" CANCELADO "), Some(SystemStatus::Cancelado));
        assert_eq!(SystemStatus::parse("ativo"), None);
        assert_eq!(SystemStatus::parse(""), None);
    }
}
