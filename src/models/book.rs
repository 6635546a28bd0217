//! Book model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::{Labels, Payload, Resource};
use crate::repository::PgQueryAs;

/// Book row (`livro`)
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    #[serde(rename = "titulo")]
    #[sqlx(rename = "titulo")]
    pub title: Option<String>,
    #[serde(rename = "ano_publicacao")]
    #[sqlx(rename = "ano_publicacao")]
    pub publication_year: Option<i32>,
    /// References `autor.id`
    #[serde(rename = "fk_autor_id")]
    #[sqlx(rename = "fk_autor_id")]
    pub author_id: Option<i32>,
    /// References `categoria.id`
    #[serde(rename = "fk_categoria_id")]
    #[sqlx(rename = "fk_categoria_id")]
    pub category_id: Option<i32>,
    #[serde(rename = "disponivel")]
    #[sqlx(rename = "disponivel")]
    pub available: Option<bool>,
}

/// Create / replace book request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct BookPayload {
    #[serde(rename = "titulo")]
    pub title: Option<String>,
    #[serde(rename = "ano_publicacao")]
    pub publication_year: Option<i32>,
    #[serde(rename = "fk_autor_id")]
    pub author_id: Option<i32>,
    #[serde(rename = "fk_categoria_id")]
    pub category_id: Option<i32>,
    /// Defaults to true on creation
    #[serde(rename = "disponivel")]
    pub available: Option<bool>,
}

impl Payload for BookPayload {
    fn bind<'q, O>(&'q self, query: PgQueryAs<'q, O>) -> PgQueryAs<'q, O> {
        query
            .bind(&self.title)
            .bind(self.publication_year)
            .bind(self.author_id)
            .bind(self.category_id)
            .bind(self.available)
    }

    fn with_insert_defaults(mut self) -> Self {
        self.available.get_or_insert(true);
        self
    }
}

impl Resource for Book {
    type Payload = BookPayload;

    const TABLE: &'static str = "livro";
    const PATH: &'static str = "livros";
    const COLUMNS: &'static [&'static str] = &[
        "titulo",
        "ano_publicacao",
        "fk_autor_id",
        "fk_categoria_id",
        "disponivel",
    ];
    const LABELS: Labels = Labels {
        singular: "livro",
        plural: "livros",
        not_found: "Livro não encontrado",
        deleted: "Livro deletado com sucesso",
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_defaults_availability() {
        let payload: BookPayload = serde_json::from_value(json!({
            "titulo": "Dom Casmurro",
            "ano_publicacao": 1899,
            "fk_autor_id": 1,
            "fk_categoria_id": 1
        }))
        .unwrap();
        assert_eq!(payload.available, None);
        assert_eq!(payload.with_insert_defaults().available, Some(true));
    }

    #[test]
    fn test_insert_keeps_explicit_availability() {
        let payload = BookPayload {
            available: Some(false),
            ..Default::default()
        };
        assert_eq!(payload.with_insert_defaults().available, Some(false));
    }

    #[test]
    fn test_payload_rejects_wrong_types() {
        let result = serde_json::from_value::<BookPayload>(json!({"ano_publicacao": "1899"}));
        assert!(result.is_err());
    }
}
