//! User Notices
//!
//! Messages shown after a request fails or succeeds, and the mapping from
//! `ApiError` to the message each form shows.

use crate::error::ApiError;

pub const BAD_DATA: &str = "Algum dado foi informado errado!";
pub const CONNECTIVITY: &str = "Verifique sua conexão, se o problema persistir tente novamente mais tarde.";
pub const SERVER_ERROR: &str = "Erro no servidor, tente mais tarde";
pub const WRONG_CREDENTIALS: &str = "Email ou senha incorretos!";
pub const LOGIN_INCOMPLETE: &str = "Todos os campos devem ser preenchidos";
pub const DUPLICATE_ACCOUNT: &str = "Email informado já está sendo usado por outro usuário!";
pub const SESSION_EXPIRED: &str = "Sua sessão expirou, faça login novamente.";
pub const NO_RESULTS: &str = "Nenhum Sistema foi encontrado. Favor revisar os critérios da sua pesquisa!";
pub const CREATED: &str = "Operação realizada com sucesso.";
pub const UPDATED: &str = "Sistema editado com sucesso!";
pub const REGISTERED: &str = "Cadastro efetuado com sucesso!";

/// Create form: 400 is bad data, everything else is connectivity
pub fn create_failure(err: &ApiError) -> &'static str {
    match err {
        ApiError::BadRequest { .. } => BAD_DATA,
        ApiError::SessionExpired => SESSION_EXPIRED,
        _ => CONNECTIVITY,
    }
}

/// Edit form: like create, plus a dedicated message for 500
pub fn edit_failure(err: &ApiError) -> &'static str {
    match err {
        ApiError::Server { status: 500 } => SERVER_ERROR,
        _ => create_failure(err),
    }
}

/// Loading a record to edit: every failure reads as connectivity
pub fn load_failure(_err: &ApiError) -> &'static str {
    CONNECTIVITY
}

pub fn login_failure(err: &ApiError) -> &'static str {
    match err {
        ApiError::BadRequest { .. } => WRONG_CREDENTIALS,
        _ => CONNECTIVITY,
    }
}

pub fn register_failure(err: &ApiError) -> &'static str {
    if err.is_duplicate_account() {
        return DUPLICATE_ACCOUNT;
    }
    match err {
        ApiError::BadRequest { .. } => BAD_DATA,
        _ => CONNECTIVITY,
    }
}

/// Characters left out of `max`, shown beside a bounded textarea
pub fn remaining_chars(text: &str, max: usize) -> usize {
    max.saturating_sub(text.chars().count())
}
