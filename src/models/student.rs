//! Student model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::{Labels, Payload, Resource};
use crate::repository::PgQueryAs;

/// Student row (`aluno`)
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
pub struct Student {
    pub id: i32,
    #[serde(rename = "nome")]
    #[sqlx(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "turma")]
    #[sqlx(rename = "turma")]
    pub class: Option<String>,
    #[serde(rename = "idade")]
    #[sqlx(rename = "idade")]
    pub age: Option<i32>,
}

/// Create / replace student request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct StudentPayload {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "turma")]
    pub class: Option<String>,
    #[serde(rename = "idade")]
    pub age: Option<i32>,
}

impl Payload for StudentPayload {
    fn bind<'q, O>(&'q self, query: PgQueryAs<'q, O>) -> PgQueryAs<'q, O> {
        query.bind(&self.name).bind(&self.class).bind(self.age)
    }
}

impl Resource for Student {
    type Payload = StudentPayload;

    const TABLE: &'static str = "aluno";
    const PATH: &'static str = "alunos";
    const COLUMNS: &'static [&'static str] = &["nome", "turma", "idade"];
    const LABELS: Labels = Labels {
        singular: "aluno",
        plural: "alunos",
        not_found: "Aluno não encontrado",
        deleted: "Aluno deletado com sucesso",
    };
}
