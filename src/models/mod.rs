//! Data models for the library API
//!
//! Each entity is described by a row type implementing [`Resource`] and a
//! write payload implementing [`Payload`]. The generic repository, service and
//! API layers are instantiated from these descriptions.

pub mod author;
pub mod book;
pub mod category;
pub mod loan;
pub mod student;

use serde::{de::DeserializeOwned, Serialize};
use sqlx::{postgres::PgRow, FromRow};
use utoipa::ToSchema;

use crate::repository::PgQueryAs;

// Re-export commonly used types
pub use author::{Author, AuthorPayload};
pub use book::{Book, BookPayload};
pub use category::{Category, CategoryPayload};
pub use loan::{Loan, LoanPayload};
pub use student::{Student, StudentPayload};

/// Human-readable names used in responses and logs
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    /// Singular noun, lowercase ("categoria")
    pub singular: &'static str,
    /// Plural noun, lowercase ("categorias")
    pub plural: &'static str,
    /// Body of the 404 response
    pub not_found: &'static str,
    /// Body of a successful delete
    pub deleted: &'static str,
}

/// A persisted entity exposed through the uniform CRUD routes
pub trait Resource:
    for<'r> FromRow<'r, PgRow> + Serialize + for<'a> ToSchema<'a> + Send + Sync + Unpin + 'static
{
    /// Body accepted by create and update
    type Payload: Payload;

    /// Table name in the store
    const TABLE: &'static str;
    /// Route segment (`/{PATH}` and `/{PATH}/:id`)
    const PATH: &'static str;
    /// Writable columns, in the order [`Payload::bind`] binds them
    const COLUMNS: &'static [&'static str];
    const LABELS: Labels;
}

/// Request body for create and full-replace update
pub trait Payload: DeserializeOwned + for<'a> ToSchema<'a> + Send + Sync + 'static {
    /// Bind every writable column, in `Resource::COLUMNS` order
    fn bind<'q, O>(&'q self, query: PgQueryAs<'q, O>) -> PgQueryAs<'q, O>;

    /// Fill column defaults that apply on insert only
    fn with_insert_defaults(self) -> Self {
        self
    }
}
