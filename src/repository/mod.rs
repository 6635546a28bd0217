//! Repository layer for database operations

pub mod crud;

use sqlx::{
    postgres::{PgArguments, Postgres},
    query::QueryAs,
    Pool,
};

use crate::models::{Author, Book, Category, Loan, Student};

pub use crud::{CrudRepository, Statements, Table};

/// Typed query with positional Postgres arguments
pub type PgQueryAs<'q, O> = QueryAs<'q, Postgres, O, PgArguments>;

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub categories: CrudRepository<Category>,
    pub authors: CrudRepository<Author>,
    pub books: CrudRepository<Book>,
    pub students: CrudRepository<Student>,
    pub loans: CrudRepository<Loan>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            categories: CrudRepository::new(pool.clone()),
            authors: CrudRepository::new(pool.clone()),
            books: CrudRepository::new(pool.clone()),
            students: CrudRepository::new(pool.clone()),
            loans: CrudRepository::new(pool.clone()),
            pool,
        }
    }

    /// Round-trip a trivial statement to check connectivity
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
