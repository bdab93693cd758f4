//! System Form State
//!
//! Field-level reactive state for the create and edit forms, plus the
//! conversion of a validated draft into a request body.

use reactive_stores::Store;

use crate::models::{NewSystem, SystemRecord, SystemStatus, SystemUpdate};
use crate::validation::{self, DESCRICAO, EMAIL_ATENDIMENTO, NOVA_JUSTIFICATIVA, SIGLA, STATUS, URL};

/// Editable fields of a system record
#[derive(Clone, Debug, Store)]
pub struct SystemDraft {
    pub descricao: String,
    pub sigla: String,
    pub email_atendimento: String,
    pub url: String,
    /// Raw `<select>` value; checked against the status rule
    pub status: String,
    pub nova_justificativa: String,
}

impl Default for SystemDraft {
    fn default() -> Self {
        Self {
            descricao: String::new(),
            sigla: String::new(),
            email_atendimento: String::new(),
            url: String::new(),
            status: SystemStatus::default().as_str().to_string(),
            nova_justificativa: String::new(),
        }
    }
}

/// Type alias for the form store
pub type SystemDraftStore = Store<SystemDraft>;

impl SystemDraft {
    /// Editable fields of a fetched record; a fresh justification is required
    pub fn from_record(record: &SystemRecord) -> Self {
        Self {
            descricao: record.descricao.clone(),
            sigla: record.sigla.clone(),
            email_atendimento: record.email_atendimento.clone(),
            url: record.url.clone(),
            status: record.effective_status().as_str().to_string(),
            nova_justificativa: String::new(),
        }
    }

    fn record_fields(&self) -> [(&'static validation::FieldRules, &str); 4] {
        [
            (&DESCRICAO, self.descricao.as_str()),
            (&SIGLA, self.sigla.as_str()),
            (&EMAIL_ATENDIMENTO, self.email_atendimento.as_str()),
            (&URL, self.url.as_str()),
        ]
    }

    /// Validate for `POST /SSD`
    pub fn to_new_system(&self) -> Result<NewSystem, Vec<String>> {
        validation::validate(&self.record_fields())?;
        Ok(NewSystem {
            descricao: self.descricao.trim().to_string(),
            sigla: self.sigla.trim().to_string(),
            email_atendimento: self.email_atendimento.trim().to_string(),
            url: self.url.trim().to_string(),
        })
    }

    /// Validate for `PUT /SSD/{id}`; adds status and justification rules
    pub fn to_update(&self, id: u32) -> Result<SystemUpdate, Vec<String>> {
        let mut fields = self.record_fields().to_vec();
        fields.push((&STATUS, self.status.as_str()));
        fields.push((&NOVA_JUSTIFICATIVA, self.nova_justificativa.as_str()));
        validation::validate(&fields)?;

        let status = SystemStatus::parse(&self.status).unwrap_or_default();
        Ok(SystemUpdate {
            id,
            descricao: self.descricao.trim().to_string(),
            sigla: self.sigla.trim().to_string(),
            email_atendimento: self.email_atendimento.trim().to_string(),
            url: self.url.trim().to_string(),
            nova_justificativa_alteracao: self.nova_justificativa.trim().to_string(),
            status,
        })
    }
}
