//! Generic CRUD statements over a single table
//!
//! SQL text is assembled once per resource from its compile-time table and
//! column names. Values are only ever passed as `$n` arguments.

use std::{marker::PhantomData, sync::Arc};

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::models::{Payload, Resource};

/// The five statements backing the uniform CRUD routes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statements {
    pub list: String,
    pub get: String,
    pub insert: String,
    pub update: String,
    pub delete: String,
}

impl Statements {
    pub fn for_resource<R: Resource>() -> Self {
        Self::build(R::TABLE, R::COLUMNS)
    }

    fn build(table: &str, columns: &[&str]) -> Self {
        let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("${}", i)).collect();
        let assignments: Vec<String> = columns
            .iter()
            .zip(&placeholders)
            .map(|(column, placeholder)| format!("{} = {}", column, placeholder))
            .collect();
        let id_param = columns.len() + 1;

        Self {
            list: format!("SELECT * FROM {}", table),
            get: format!("SELECT * FROM {} WHERE id = $1", table),
            insert: format!(
                "INSERT INTO {} ({}) VALUES ({}) RETURNING *",
                table,
                columns.join(", "),
                placeholders.join(", ")
            ),
            update: format!(
                "UPDATE {} SET {} WHERE id = ${} RETURNING *",
                table,
                assignments.join(", "),
                id_param
            ),
            delete: format!("DELETE FROM {} WHERE id = $1 RETURNING *", table),
        }
    }
}

/// Table access for one resource type
pub struct CrudRepository<R> {
    pool: Pool<Postgres>,
    statements: Arc<Statements>,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for CrudRepository<R> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            statements: Arc::clone(&self.statements),
            _resource: PhantomData,
        }
    }
}

/// Row access the CRUD service depends on
#[async_trait]
pub trait Table<R: Resource>: Send + Sync {
    /// List every row in storage order
    async fn list(&self) -> Result<Vec<R>, sqlx::Error>;

    /// Get a row by primary key
    async fn get_by_id(&self, id: i32) -> Result<Option<R>, sqlx::Error>;

    /// Insert a row and return it with its generated id
    async fn create(&self, data: &R::Payload) -> Result<R, sqlx::Error>;

    /// Overwrite every writable column of a row
    async fn update(&self, id: i32, data: &R::Payload) -> Result<Option<R>, sqlx::Error>;

    /// Delete a row, returning it if it existed
    async fn delete(&self, id: i32) -> Result<Option<R>, sqlx::Error>;
}

impl<R: Resource> CrudRepository<R> {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            pool,
            statements: Arc::new(Statements::for_resource::<R>()),
            _resource: PhantomData,
        }
    }

    pub fn statements(&self) -> &Statements {
        &self.statements
    }
}

#[async_trait]
impl<R: Resource> Table<R> for CrudRepository<R> {
    async fn list(&self) -> Result<Vec<R>, sqlx::Error> {
        sqlx::query_as::<_, R>(&self.statements.list)
            .fetch_all(&self.pool)
            .await
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<R>, sqlx::Error> {
        sqlx::query_as::<_, R>(&self.statements.get)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn create(&self, data: &R::Payload) -> Result<R, sqlx::Error> {
        data.bind(sqlx::query_as::<_, R>(&self.statements.insert))
            .fetch_one(&self.pool)
            .await
    }

    async fn update(&self, id: i32, data: &R::Payload) -> Result<Option<R>, sqlx::Error> {
        data.bind(sqlx::query_as::<_, R>(&self.statements.update))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn delete(&self, id: i32) -> Result<Option<R>, sqlx::Error> {
        sqlx::query_as::<_, R>(&self.statements.delete)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }
}
