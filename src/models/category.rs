//! Category model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::{Labels, Payload, Resource};
use crate::repository::PgQueryAs;

/// Category row (`categoria`)
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
pub struct Category {
    pub id: i32,
    #[serde(rename = "nome")]
    #[sqlx(rename = "nome")]
    pub name: Option<String>,
}

/// Create / replace category request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CategoryPayload {
    #[serde(rename = "nome")]
    pub name: Option<String>,
}

impl Payload for CategoryPayload {
    fn bind<'q, O>(&'q self, query: PgQueryAs<'q, O>) -> PgQueryAs<'q, O> {
        query.bind(&self.name)
    }
}

impl Resource for Category {
    type Payload = CategoryPayload;

    const TABLE: &'static str = "categoria";
    const PATH: &'static str = "categorias";
    const COLUMNS: &'static [&'static str] = &["nome"];
    const LABELS: Labels = Labels {
        singular: "categoria",
        plural: "categorias",
        not_found: "Categoria não encontrada",
        deleted: "Categoria deletada com sucesso",
    };
}
