//! System Endpoints
//!
//! Bindings for the `/SSD` resource.

use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::{decode, endpoint, send};
use crate::context::AuthContext;
use crate::error::ApiError;
use crate::models::{NewSystem, SystemFilter, SystemRecord, SystemUpdate};

/// Characters left as-is in query values (RFC 3986 unreserved)
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Query string for `GET /SSD`. Blank filters are sent as empty values.
pub fn list_query(filter: &SystemFilter) -> String {
    [
        ("descricao", filter.descricao.as_str()),
        ("sigla", filter.sigla.as_str()),
        ("emailAtendimento", filter.email_atendimento.as_str()),
    ]
    .iter()
    .map(|(key, value)| format!("{}={}", key, utf8_percent_encode(value, QUERY_VALUE)))
    .collect::<Vec<_>>()
    .join("&")
}

pub async fn list_systems(auth: AuthContext, filter: &SystemFilter) -> Result<Vec<SystemRecord>, ApiError> {
    let url = format!("{}?{}", endpoint("/SSD"), list_query(filter));
    let response = send(auth, Request::get(&url), None::<&()>).await?;
    decode(response).await
}

pub async fn get_system(auth: AuthContext, id: u32) -> Result<SystemRecord, ApiError> {
    let url = endpoint(&format!("/SSD/{}", id));
    let response = send(auth, Request::get(&url), None::<&()>).await?;
    decode(response).await
}

/// Create a record. The echoed record is returned when the body parses.
pub async fn create_system(auth: AuthContext, system: &NewSystem) -> Result<Option<SystemRecord>, ApiError> {
    let response = send(auth, Request::post(&endpoint("/SSD")), Some(system)).await?;
    Ok(decode(response).await.ok())
}

pub async fn update_system(auth: AuthContext, update: &SystemUpdate) -> Result<Option<SystemRecord>, ApiError> {
    let url = endpoint(&format!("/SSD/{}", update.id));
    let response = send(auth, Request::put(&url), Some(update)).await?;
    Ok(decode(response).await.ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_keeps_blank_filters() {
        let query = list_query(&SystemFilter::default());
        assert_eq!(query, "descricao=&sigla=&emailAtendimento=");
    }

    #[test]
    fn test_list_query_encodes_values() {
        let filter = SystemFilter {
            descricao: "gestão de contratos".into(),
            sigla: "GC&T".into(),
            email_atendimento: "suporte@gc.gov.br".into(),
        };
        assert_eq!(
            list_query(&filter),
            "descricao=gest%C3%A3o%20de%20contratos&sigla=GC%26T&emailAtendimento=suporte%40gc.gov.br"
        );
    }
}
