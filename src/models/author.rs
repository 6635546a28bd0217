//! Author model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::{Labels, Payload, Resource};
use crate::repository::PgQueryAs;

/// Author row (`autor`)
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
pub struct Author {
    pub id: i32,
    #[serde(rename = "nome")]
    #[sqlx(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "nacionalidade")]
    #[sqlx(rename = "nacionalidade")]
    pub nationality: Option<String>,
}

/// Create / replace author request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct AuthorPayload {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "nacionalidade")]
    pub nationality: Option<String>,
}

impl Payload for AuthorPayload {
    fn bind<'q, O>(&'q self, query: PgQueryAs<'q, O>) -> PgQueryAs<'q, O> {
        query.bind(&self.name).bind(&self.nationality)
    }
}

impl Resource for Author {
    type Payload = AuthorPayload;

    const TABLE: &'static str = "autor";
    const PATH: &'static str = "autores";
    const COLUMNS: &'static [&'static str] = &["nome", "nacionalidade"];
    const LABELS: Labels = Labels {
        singular: "autor",
        plural: "autores",
        not_found: "Autor não encontrado",
        deleted: "Autor deletado com sucesso",
    };
}
