//! Loan model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::{Labels, Payload, Resource};
use crate::repository::PgQueryAs;

/// Loan row (`emprestimo`)
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
pub struct Loan {
    pub id: i32,
    /// References `livro.id`
    #[serde(rename = "fk_livro_id")]
    #[sqlx(rename = "fk_livro_id")]
    pub book_id: Option<i32>,
    /// References `aluno.id`
    #[serde(rename = "fk_aluno_id")]
    #[sqlx(rename = "fk_aluno_id")]
    pub student_id: Option<i32>,
    #[serde(rename = "data_emprestimo")]
    #[sqlx(rename = "data_emprestimo")]
    pub loan_date: Option<NaiveDate>,
    #[serde(rename = "data_devolucao")]
    #[sqlx(rename = "data_devolucao")]
    pub return_date: Option<NaiveDate>,
}

/// Create / replace loan request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct LoanPayload {
    #[serde(rename = "fk_livro_id")]
    pub book_id: Option<i32>,
    #[serde(rename = "fk_aluno_id")]
    pub student_id: Option<i32>,
    /// ISO 8601 date (`YYYY-MM-DD`)
    #[serde(rename = "data_emprestimo")]
    pub loan_date: Option<NaiveDate>,
    /// ISO 8601 date (`YYYY-MM-DD`)
    #[serde(rename = "data_devolucao")]
    pub return_date: Option<NaiveDate>,
}

impl Payload for LoanPayload {
    fn bind<'q, O>(&'q self, query: PgQueryAs<'q, O>) -> PgQueryAs<'q, O> {
        query
            .bind(self.book_id)
            .bind(self.student_id)
            .bind(self.loan_date)
            .bind(self.return_date)
    }
}

impl Resource for Loan {
    type Payload = LoanPayload;

    const TABLE: &'static str = "emprestimo";
    const PATH: &'static str = "emprestimos";
    const COLUMNS: &'static [&'static str] =
        &["fk_livro_id", "fk_aluno_id", "data_emprestimo", "data_devolucao"];
    const LABELS: Labels = Labels {
        singular: "empréstimo",
        plural: "empréstimos",
        not_found: "Empréstimo não encontrado",
        deleted: "Empréstimo deletado com sucesso",
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_iso_dates() {
        let payload: LoanPayload = serde_json::from_value(json!({
            "fk_livro_id": 3,
            "fk_aluno_id": 7,
            "data_emprestimo": "2024-03-01"
        }))
        .unwrap();
        assert_eq!(payload.loan_date, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(payload.return_date, None);
    }

    #[test]
    fn test_rejects_malformed_date() {
        let result = serde_json::from_value::<LoanPayload>(json!({"data_emprestimo": "01/03/2024"}));
        assert!(result.is_err());
    }
}
