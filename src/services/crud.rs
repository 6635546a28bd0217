//! Uniform CRUD contract shared by every resource

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{Payload, Resource},
    repository::Table,
};

/// Converts zero-row results into NotFound and store failures into
/// operation-specific errors
pub struct CrudService<R> {
    table: Arc<dyn Table<R>>,
}

impl<R> Clone for CrudService<R> {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
        }
    }
}

impl<R: Resource> CrudService<R> {
    pub fn new(table: impl Table<R> + 'static) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<R>> {
        self.table
            .list()
            .await
            .map_err(|e| AppError::store(format!("Erro ao buscar {}", R::LABELS.plural), e))
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<R> {
        self.table
            .get_by_id(id)
            .await
            .map_err(|e| failure::<R>("buscar", e))?
            .ok_or_else(not_found::<R>)
    }

    pub async fn create(&self, data: R::Payload) -> AppResult<R> {
        let data = data.with_insert_defaults();
        let row = self
            .table
            .create(&data)
            .await
            .map_err(|e| failure::<R>("criar", e))?;
        tracing::debug!(table = R::TABLE, "Row created");
        Ok(row)
    }

    /// Full replace: columns absent from `data` are written as NULL
    pub async fn update(&self, id: i32, data: R::Payload) -> AppResult<R> {
        self.table
            .update(id, &data)
            .await
            .map_err(|e| failure::<R>("atualizar", e))?
            .ok_or_else(not_found::<R>)
    }

    /// Delete a row and return the success message for the resource
    pub async fn delete(&self, id: i32) -> AppResult<&'static str> {
        self.table
            .delete(id)
            .await
            .map_err(|e| failure::<R>("deletar", e))?
            .map(|_| R::LABELS.deleted)
            .ok_or_else(not_found::<R>)
    }
}

fn failure<R: Resource>(verb: &str, source: sqlx::Error) -> AppError {
    AppError::store(format!("Erro ao {} {}", verb, R::LABELS.singular), source)
}

fn not_found<R: Resource>() -> AppError {
    AppError::NotFound(R::LABELS.not_found.to_string())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::models::{Book, BookPayload, Category, CategoryPayload, Loan};

    /// In-memory table keyed by a generated id
    struct MemoryTable<R: Resource> {
        rows: Mutex<Vec<(i32, R)>>,
        next_id: Mutex<i32>,
        build: fn(i32, &R::Payload) -> R,
    }

    impl<R: Resource> MemoryTable<R> {
        fn new(build: fn(i32, &R::Payload) -> R) -> Self {
            Self {
                rows: Mutex::new(Vec::new()),
                next_id: Mutex::new(1),
                build,
            }
        }
    }

    #[async_trait]
    impl<R: Resource + Clone> Table<R> for MemoryTable<R> {
        async fn list(&self) -> Result<Vec<R>, sqlx::Error> {
            Ok(self.rows.lock().unwrap().iter().map(|(_, row)| row.clone()).collect())
        }

        async fn get_by_id(&self, id: i32) -> Result<Option<R>, sqlx::Error> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.iter().find(|(key, _)| *key == id).map(|(_, row)| row.clone()))
        }

        async fn create(&self, data: &R::Payload) -> Result<R, sqlx::Error> {
            let mut next_id = self.next_id.lock().unwrap();
            let row = (self.build)(*next_id, data);
            self.rows.lock().unwrap().push((*next_id, row.clone()));
            *next_id += 1;
            Ok(row)
        }

        async fn update(&self, id: i32, data: &R::Payload) -> Result<Option<R>, sqlx::Error> {
            let mut rows = self.rows.lock().unwrap();
            Ok(rows.iter_mut().find(|(key, _)| *key == id).map(|(_, row)| {
                *row = (self.build)(id, data);
                row.clone()
            }))
        }

        async fn delete(&self, id: i32) -> Result<Option<R>, sqlx::Error> {
            let mut rows = self.rows.lock().unwrap();
            let position = rows.iter().position(|(key, _)| *key == id);
            Ok(position.map(|index| rows.remove(index).1))
        }
    }

    fn categories() -> CrudService<Category> {
        CrudService::new(MemoryTable::new(|id, data: &CategoryPayload| Category {
            id,
            name: data.name.clone(),
        }))
    }

    fn books() -> CrudService<Book> {
        CrudService::new(MemoryTable::new(|id, data: &BookPayload| Book {
            id,
            title: data.title.clone(),
            publication_year: data.publication_year,
            author_id: data.author_id,
            category_id: data.category_id,
            available: data.available,
        }))
    }

    fn named(name: &str) -> CategoryPayload {
        CategoryPayload {
            name: Some(name.to_string()),
        }
    }

    fn assert_not_found<T: std::fmt::Debug>(result: AppResult<T>, message: &str) {
        match result {
            Err(AppError::NotFound(msg)) => assert_eq!(msg, message),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_failure_message_names_operation() {
        let error = failure::<Category>("criar", sqlx::Error::PoolTimedOut);
        match error {
            AppError::Store { message, .. } => assert_eq!(message, "Erro ao criar categoria"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(not_found::<Loan>().to_string(), "Empréstimo não encontrado");
    }

    #[tokio::test]
    async fn test_empty_table_lists_nothing() {
        assert!(categories().list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_created_row_reads_back() {
        let service = categories();
        let created = service.create(named("Ficção")).await.unwrap();
        assert_eq!(created.id, 1);

        let fetched = service.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(service.list().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_update_replaces_row() {
        let service = categories();
        let created = service.create(named("Ficção")).await.unwrap();

        let updated = service
            .update(created.id, named("Ficção Científica"))
            .await
            .unwrap();
        assert_eq!(updated.name.as_deref(), Some("Ficção Científica"));

        let cleared = service
            .update(created.id, CategoryPayload::default())
            .await
            .unwrap();
        assert_eq!(cleared.name, None);
    }

    #[tokio::test]
    async fn test_missing_id_is_not_found() {
        let service = categories();
        service.create(named("Ficção")).await.unwrap();

        assert_not_found(service.get_by_id(42).await, "Categoria não encontrada");
        assert_not_found(service.update(42, named("Outra")).await, "Categoria não encontrada");
        assert_not_found(service.delete(42).await, "Categoria não encontrada");
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let service = categories();
        let created = service.create(named("Ficção")).await.unwrap();

        assert_eq!(
            service.delete(created.id).await.unwrap(),
            "Categoria deletada com sucesso"
        );
        assert_not_found(service.get_by_id(created.id).await, "Categoria não encontrada");
        assert_not_found(service.delete(created.id).await, "Categoria não encontrada");
    }

    #[tokio::test]
    async fn test_book_created_available_by_default() {
        let service = books();
        let created = service
            .create(BookPayload {
                title: Some("Dom Casmurro".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(created.available, Some(true));

        let replaced = service
            .update(created.id, BookPayload::default())
            .await
            .unwrap();
        assert_eq!(replaced.available, None);
    }
}
