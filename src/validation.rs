//! Form Validation
//!
//! One table-driven rule set shared by every form. Each field carries its
//! own rules; `validate` runs all of them and collects every violation.

use std::sync::OnceLock;

use regex::Regex;

use crate::config::JUSTIFICATION_MAX_LEN;
use crate::models::SystemStatus;

/// Syntactic format a non-empty value must match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Email,
    Url,
    /// 8+ chars, upper, lower, digit, symbol, no whitespace
    StrongPassword,
    Status,
}

/// Rules for one form field
#[derive(Debug, Clone, Copy)]
pub struct FieldRules {
    /// Strip surrounding whitespace before checking. Off for passwords,
    /// which are submitted exactly as typed.
    pub trim: bool,
    pub required: Option<&'static str>,
    pub max_len: Option<(usize, &'static str)>,
    pub format: Option<(Format, &'static str)>,
}

impl FieldRules {
    const fn optional() -> Self {
        Self { trim: true, required: None, max_len: None, format: None }
    }

    /// Violations of these rules for `raw`, in check order
    pub fn check(&self, raw: &str, errors: &mut Vec<String>) {
        let value = if self.trim { raw.trim() } else { raw };
        if value.is_empty() {
            if let Some(msg) = self.required {
                errors.push(msg.to_string());
            }
            return;
        }
        if let Some((format, msg)) = self.format {
            if !format.matches(value) {
                errors.push(msg.to_string());
            }
        }
        if let Some((max, msg)) = self.max_len {
            if value.chars().count() > max {
                errors.push(msg.to_string());
            }
        }
    }
}

// ========================
// Field Tables
// ========================

pub const DESCRICAO: FieldRules = FieldRules {
    required: Some("A descrição é obrigatória"),
    max_len: Some((100, "O máximo de caracteres na descrição é 100")),
    ..FieldRules::optional()
};

pub const SIGLA: FieldRules = FieldRules {
    required: Some("A sigla é obrigatória"),
    max_len: Some((10, "O máximo de caracteres da sigla é 10")),
    ..FieldRules::optional()
};

pub const EMAIL_ATENDIMENTO: FieldRules = FieldRules {
    max_len: Some((100, "O email de atendimento pode ter no máximo 100 caracteres")),
    format: Some((Format::Email, "Insira um email de atendimento válido")),
    ..FieldRules::optional()
};

pub const URL: FieldRules = FieldRules {
    max_len: Some((50, "O tamanho da url deve ser no máximo 50 caracteres")),
    format: Some((Format::Url, "Insira uma url válida")),
    ..FieldRules::optional()
};

pub const STATUS: FieldRules = FieldRules {
    required: Some("O status é obrigatório"),
    format: Some((Format::Status, "O Status deve ser ATIVO ou CANCELADO")),
    ..FieldRules::optional()
};

pub const NOVA_JUSTIFICATIVA: FieldRules = FieldRules {
    required: Some("A nova Justificativa é obrigatória"),
    max_len: Some((
        JUSTIFICATION_MAX_LEN,
        "O tamanho da nova justificativa deve ser de no máximo 500 caracteres",
    )),
    ..FieldRules::optional()
};

pub const LOGIN_EMAIL: FieldRules = FieldRules {
    required: Some("Email é obrigatório"),
    format: Some((Format::Email, "Email inválido")),
    ..FieldRules::optional()
};

pub const LOGIN_PASSWORD: FieldRules = FieldRules {
    trim: false,
    required: Some("Senha obrigatória"),
    ..FieldRules::optional()
};

pub const REGISTER_EMAIL: FieldRules = FieldRules {
    required: Some("O email é obrigatório"),
    format: Some((Format::Email, "informe um email válido")),
    ..FieldRules::optional()
};

pub const REGISTER_PASSWORD: FieldRules = FieldRules {
    trim: false,
    required: Some("A senha é obrigatória"),
    format: Some((
        Format::StrongPassword,
        "A senha deve conter no mínimo 8 caracteres, uma letra maiúscula, uma minúscula, um número e um caractere especial",
    )),
    ..FieldRules::optional()
};

pub const CONFIRM_PASSWORD: FieldRules = FieldRules {
    trim: false,
    required: Some("A confirmação de senha é obrigatória"),
    ..FieldRules::optional()
};

pub const PASSWORD_MISMATCH: &str = "As senhas devem ser iguais";

/// Run every rule against its value; Err holds all messages in field order
pub fn validate(fields: &[(&FieldRules, &str)]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    for (rules, value) in fields {
        rules.check(value, &mut errors);
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

// ========================
// Format Checks
// ========================

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(
            r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
        )
        .expect("email pattern is valid")
    })
}

impl Format {
    pub fn matches(self, value: &str) -> bool {
        match self {
            Format::Email => is_email(value),
            Format::Url => is_url(value),
            Format::StrongPassword => is_strong_password(value),
            Format::Status => SystemStatus::parse(value).is_some(),
        }
    }
}

pub fn is_email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// Absolute http(s)/ftp URL with a host
pub fn is_url(value: &str) -> bool {
    match url::Url::parse(value) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https" | "ftp")
                && parsed.host_str().is_some_and(|h| !h.is_empty())
        }
        Err(_) => false,
    }
}

/// ASCII classes only: `Á` is not an uppercase letter here, `é` is a symbol
pub fn is_strong_password(value: &str) -> bool {
    let is_word = |c: char| c.is_ascii_alphanumeric() || c == '_';
    value.chars().count() >= 8
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| !is_word(c) && !c.is_whitespace())
        && !value.chars().any(char::is_whitespace)
}

// ========================
// Form Validators
// ========================

/// Login form: both fields required, email well formed
pub fn validate_login(email: &str, password: &str) -> Result<(), Vec<String>> {
    validate(&[(&LOGIN_EMAIL, email), (&LOGIN_PASSWORD, password)])
}

/// Registration form, including the confirmation match
pub fn validate_registration(
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), Vec<String>> {
    let mut errors = validate(&[
        (&REGISTER_EMAIL, email),
        (&REGISTER_PASSWORD, password),
        (&CONFIRM_PASSWORD, confirm_password),
    ])
    .err()
    .unwrap_or_default();

    if !confirm_password.is_empty() && confirm_password != password {
        errors.push(PASSWORD_MISMATCH.to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_is_checked_after_trim() {
        let errors = validate(&[(&DESCRICAO, "   "), (&SIGLA, "\t")]).unwrap_err();
        assert_eq!(errors, vec!["A descrição é obrigatória", "A sigla é obrigatória"]);
    }

    #[test]
    fn test_descricao_max_length() {
        let long = "a".repeat(101);
        let errors = validate(&[(&DESCRICAO, long.as_str())]).unwrap_err();
        assert_eq!(errors, vec!["O máximo de caracteres na descrição é 100"]);

        let exact = "a".repeat(100);
        assert!(validate(&[(&DESCRICAO, exact.as_str())]).is_ok());

        let padded = format!("  {}  ", "a".repeat(100));
        assert!(validate(&[(&DESCRICAO, padded.as_str())]).is_ok());
    }

    #[test]
    fn test_sigla_ten_chars_passes() {
        assert!(validate(&[(&SIGLA, "ABCDEFGHIJ")]).is_ok());
        assert!(validate(&[(&SIGLA, "ABCDEFGHIJK")]).is_err());
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        assert!(validate(&[(&SIGLA, "ÇÇÇÇÇÇÇÇÇÇ")]).is_ok());
    }

    #[test]
    fn test_optional_fields_skip_when_blank() {
        assert!(validate(&[(&EMAIL_ATENDIMENTO, ""), (&URL, "  ")]).is_ok());
    }

    #[test]
    fn test_all_violations_collected() {
        let errors = validate(&[
            (&DESCRICAO, ""),
            (&SIGLA, "TOO-LONG-SIGLA"),
            (&EMAIL_ATENDIMENTO, "not-an-email"),
            (&URL, "nope"),
        ])
        .unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[2], "Insira um email de atendimento válido");
        assert_eq!(errors[3], "Insira uma url válida");
    }

    #[test]
    fn test_email_format() {
        assert!(is_email("suporte@empresa.gov.br"));
        assert!(is_email("a.b+c@x.io"));
        assert!(!is_email("plain"));
        assert!(!is_email("a@b"));
        assert!(!is_email("a b@c.com"));
        assert!(!is_email("@c.com"));
    }

    #[test]
    fn test_url_format() {
        assert!(is_url("https://sistema.gov.br"));
        assert!(is_url("http://localhost:8080/app"));
        assert!(is_url("ftp://files.example.com"));
        assert!(!is_url("www.example.com"));
        assert!(!is_url("mailto:a@b.com"));
        assert!(!is_url("javascript:alert(1)"));
    }

    #[test]
    fn test_url_too_long() {
        let long = format!("https://example.com/{}", "a".repeat(40));
        let errors = validate(&[(&URL, long.as_str())]).unwrap_err();
        assert_eq!(errors, vec!["O tamanho da url deve ser no máximo 50 caracteres"]);
    }

    #[test]
    fn test_status_rule() {
        assert!(validate(&[(&STATUS, "ATIVO")]).is_ok());
        assert!(validate(&[(&STATUS, "CANCELADO")]).is_ok());
        assert_eq!(
            validate(&[(&STATUS, "PAUSADO")]).unwrap_err(),
            vec!["O Status deve ser ATIVO ou CANCELADO"]
        );
        assert_eq!(validate(&[(&STATUS, "")]).unwrap_err(), vec!["O status é obrigatório"]);
    }

    #[test]
    fn test_password_policy() {
        assert!(!is_strong_password("abc12345"));
        assert!(is_strong_password("Abc123!@"));
        assert!(!is_strong_password("Abc12!"));
        assert!(!is_strong_password("Abc 123!@"));
        assert!(!is_strong_password("ABC123!@"));
        assert!(!is_strong_password("Abcdefg!"));
        assert!(!is_strong_password("Abc1234_"));
    }

    #[test]
    fn test_password_classes_are_ascii() {
        assert!(!is_strong_password("Ább123!@"));
        assert!(is_strong_password("Abc123é4"));
    }

    #[test]
    fn test_registration_rejects_padded_password() {
        for password in [" Abc123!@", "Abc123!@ ", "\tAbc123!@"] {
            let errors = validate_registration("a@b.com", password, password).unwrap_err();
            assert_eq!(errors.len(), 1, "{:?}", password);
            assert!(errors[0].starts_with("A senha deve conter"));
        }
    }

    #[test]
    fn test_registration_reports_every_field_for_malformed_email() {
        let errors = validate_registration("abc", "", "").unwrap_err();
        assert_eq!(
            errors,
            vec![
                "informe um email válido",
                "A senha é obrigatória",
                "A confirmação de senha é obrigatória",
            ]
        );
    }

    #[test]
    fn test_login_password_is_not_trimmed() {
        assert!(validate_login("user@site.com", " ").is_ok());
        assert_eq!(validate_login("user@site.com", "").unwrap_err(), vec!["Senha obrigatória"]);
    }

    #[test]
    fn test_registration_rejects_weak_password() {
        let errors = validate_registration("a@b.com", "abc12345", "abc12345").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("A senha deve conter"));
    }

    #[test]
    fn test_registration_requires_matching_confirmation() {
        assert!(validate_registration("a@b.com", "Abc123!@", "Abc123!@").is_ok());
        let errors = validate_registration("a@b.com", "Abc123!@", "Abc123!#").unwrap_err();
        assert_eq!(errors, vec![PASSWORD_MISMATCH]);
    }

    #[test]
    fn test_registration_missing_confirmation() {
        let errors = validate_registration("a@b.com", "Abc123!@", "").unwrap_err();
        assert_eq!(errors, vec!["A confirmação de senha é obrigatória"]);
    }

    #[test]
    fn test_login_validation() {
        assert!(validate_login("user@site.com", "x").is_ok());
        assert!(validate_login("user", "x").is_err());
        assert_eq!(validate_login("", "").unwrap_err().len(), 2);
    }
}
