//! Business logic services

pub mod crud;

use crate::{
    models::{Author, Book, Category, Loan, Resource, Student},
    repository::Repository,
};

pub use crud::CrudService;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub repository: Repository,
    pub categories: CrudService<Category>,
    pub authors: CrudService<Author>,
    pub books: CrudService<Book>,
    pub students: CrudService<Student>,
    pub loans: CrudService<Loan>,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            categories: CrudService::new(repository.categories.clone()),
            authors: CrudService::new(repository.authors.clone()),
            books: CrudService::new(repository.books.clone()),
            students: CrudService::new(repository.students.clone()),
            loans: CrudService::new(repository.loans.clone()),
            repository,
        }
    }

    /// Service backing the routes of resource `R`
    pub fn crud<R>(&self) -> &CrudService<R>
    where
        R: Resource,
        Self: ServiceFor<R>,
    {
        ServiceFor::<R>::service(self)
    }
}

/// Selects the CRUD service for a resource type
pub trait ServiceFor<R: Resource> {
    fn service(&self) -> &CrudService<R>;
}

macro_rules! service_for {
    ($($resource:ty => $field:ident),* $(,)?) => {
        $(
            impl ServiceFor<$resource> for Services {
                fn service(&self) -> &CrudService<$resource> {
                    &self.$field
                }
            }
        )*
    };
}

service_for! {
    Category => categories,
    Author => authors,
    Book => books,
    Student => students,
    Loan => loans,
}
