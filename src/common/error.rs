use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::models::profile::RouteTarget;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("E-mail já existe")]
    EmailAlreadyExists,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token inválido")]
    InvalidToken,

    // Sessão válida mas sem perfil no banco: provisionamento inconsistente.
    // Tratado igual a não-autenticado (volta pro login).
    #[error("Perfil do principal não encontrado")]
    ProfileMissing,

    // Papel errado para a área pedida. Não é um erro visível ao usuário:
    // carrega o destino correto e o frontend apenas redireciona.
    #[error("Acesso negado para este perfil")]
    WrongArea(RouteTarget),

    // Gestor ainda não aprovado pelo admin.
    #[error("Cadastro aguardando aprovação")]
    PendingApproval,

    #[error("Papel não permitido no cadastro")]
    SignupRoleNotAllowed,

    #[error("Perfil não encontrado")]
    ProfileNotFound,

    #[error("Imóvel não encontrado")]
    PropertyNotFound,

    #[error("Faxina não encontrada")]
    CleaningNotFound,

    #[error("Tipo de faxina não encontrado")]
    CleaningTypeNotFound,

    #[error("Checklist não encontrado")]
    ChecklistNotFound,

    #[error("Item de catálogo não encontrado")]
    CatalogItemNotFound,

    #[error("Relato de item esquecido não encontrado")]
    LostItemNotFound,

    #[error("Configuração de calendário não encontrada")]
    SyncConfigNotFound,

    // Gestor tentando agir sobre imóvel que não é do portfólio dele.
    #[error("Imóvel fora do seu portfólio")]
    OutsidePortfolio,

    #[error("Faxina não atribuída a você")]
    NotAssignedToCleaning,

    #[error("O perfil indicado não é de um faxineiro")]
    NotACleaner,

    #[error("Transição de status inválida")]
    InvalidStatusTransition,

    // A linha mudou por baixo de nós (update guardado afetou 0 linhas).
    #[error("Registro alterado por outra requisição")]
    StaleUpdate,

    #[error("Violação de chave única: {0}")]
    UniqueConstraintViolation(String),

    // Variante para erros de banco de dados
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }

            // Correções de rota: o corpo carrega o destino certo.
            AppError::WrongArea(target) => {
                let body = Json(json!({
                    "error": "Esta área não corresponde ao seu perfil.",
                    "redirectTo": target,
                }));
                return (StatusCode::FORBIDDEN, body).into_response();
            }
            AppError::PendingApproval => {
                let body = Json(json!({
                    "error": "Seu cadastro ainda aguarda aprovação.",
                    "redirectTo": RouteTarget::PendingApproval,
                }));
                return (StatusCode::FORBIDDEN, body).into_response();
            }

            AppError::EmailAlreadyExists => (StatusCode::CONFLICT, "Este e-mail já está em uso."),
            AppError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "E-mail ou senha inválidos."),
            AppError::InvalidToken | AppError::ProfileMissing => {
                (StatusCode::UNAUTHORIZED, "Token de autenticação inválido ou ausente.")
            }
            AppError::SignupRoleNotAllowed => {
                (StatusCode::BAD_REQUEST, "Este papel não pode se registrar sozinho.")
            }

            AppError::ProfileNotFound => (StatusCode::NOT_FOUND, "Perfil não encontrado."),
            AppError::PropertyNotFound => (StatusCode::NOT_FOUND, "Imóvel não encontrado."),
            AppError::CleaningNotFound => (StatusCode::NOT_FOUND, "Faxina não encontrada."),
            AppError::CleaningTypeNotFound => {
                (StatusCode::NOT_FOUND, "Tipo de faxina não encontrado.")
            }
            AppError::ChecklistNotFound => (StatusCode::NOT_FOUND, "Checklist não encontrado."),
            AppError::CatalogItemNotFound => {
                (StatusCode::NOT_FOUND, "Item de catálogo não encontrado.")
            }
            AppError::LostItemNotFound => {
                (StatusCode::NOT_FOUND, "Relato de item esquecido não encontrado.")
            }
            AppError::SyncConfigNotFound => {
                (StatusCode::NOT_FOUND, "Configuração de calendário não encontrada.")
            }

            AppError::OutsidePortfolio => {
                (StatusCode::FORBIDDEN, "Este imóvel não pertence ao seu portfólio.")
            }
            AppError::NotAssignedToCleaning => {
                (StatusCode::FORBIDDEN, "Esta faxina não está atribuída a você.")
            }
            AppError::NotACleaner => {
                (StatusCode::BAD_REQUEST, "O perfil indicado não é de um faxineiro.")
            }
            AppError::InvalidStatusTransition => {
                (StatusCode::BAD_REQUEST, "Transição de status não permitida.")
            }
            AppError::StaleUpdate => (
                StatusCode::CONFLICT,
                "O registro foi alterado por outra requisição. Recarregue e tente de novo.",
            ),
            AppError::UniqueConstraintViolation(_) => {
                (StatusCode::CONFLICT, "Registro duplicado.")
            }

            // Todos os outros erros (DatabaseError, InternalServerError) viram 500.
            // O `tracing` vai logar a mensagem detalhada que `thiserror` nos deu.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Ocorreu um erro inesperado.")
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
