//! OpenAPI documentation
//!
//! CRUD paths are generated from the same [`Resource`] descriptions that
//! build the router.

use axum::Router;
use utoipa::{
    openapi::{
        path::{OperationBuilder, ParameterBuilder, ParameterIn, PathItemBuilder, PathItemType},
        request_body::RequestBodyBuilder,
        schema::{ArrayBuilder, ObjectBuilder, SchemaType},
        Components, Content, OpenApi as OpenApiDoc, Ref, RefOr, Required, Response,
        ResponseBuilder, Schema,
    },
    Modify, OpenApi, ToSchema,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    api::health,
    models::{Author, Book, Category, Loan, Resource, Student},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Biblioteca API",
        version = "1.0.0",
        description = "Library REST API over PostgreSQL"
    ),
    paths(
        health::root,
        health::health_check,
        health::readiness_check,
    ),
    components(schemas(health::HealthResponse)),
    modifiers(&CrudPaths),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "categorias", description = "Book categories"),
        (name = "autores", description = "Authors"),
        (name = "livros", description = "Books"),
        (name = "alunos", description = "Students"),
        (name = "emprestimos", description = "Loans")
    )
)]
pub struct ApiDoc;

/// Adds the five CRUD operations of every resource
struct CrudPaths;

impl Modify for CrudPaths {
    fn modify(&self, openapi: &mut OpenApiDoc) {
        document::<Category>(openapi);
        document::<Author>(openapi);
        document::<Book>(openapi);
        document::<Student>(openapi);
        document::<Loan>(openapi);
    }
}

fn document<R: Resource>(openapi: &mut OpenApiDoc) {
    let (row_name, row_schema) = <R as ToSchema>::schema();
    let (payload_name, payload_schema) = <R::Payload as ToSchema>::schema();

    let components = openapi.components.get_or_insert_with(Components::default);
    components.schemas.insert(row_name.to_string(), row_schema);
    components
        .schemas
        .insert(payload_name.to_string(), payload_schema);

    let labels = R::LABELS;
    let row = || RefOr::Ref(Ref::from_schema_name(row_name));
    let body = || {
        RequestBodyBuilder::new()
            .content(
                "application/json",
                Content::new(Ref::from_schema_name(payload_name)),
            )
            .required(Some(Required::True))
            .build()
    };
    let id = || {
        ParameterBuilder::new()
            .name("id")
            .parameter_in(ParameterIn::Path)
            .required(Required::True)
            .description(Some(format!("ID of the {}", labels.singular)))
            .schema(Some(RefOr::T(Schema::Object(
                ObjectBuilder::new().schema_type(SchemaType::Integer).build(),
            ))))
            .build()
    };
    let not_found = || text(labels.not_found);
    let failure = || text("Store failure");

    let collection = PathItemBuilder::new()
        .operation(
            PathItemType::Get,
            OperationBuilder::new()
                .tag(R::PATH)
                .summary(Some(format!("List {}", labels.plural)))
                .response(
                    "200",
                    json(
                        "All rows",
                        RefOr::T(Schema::Array(ArrayBuilder::new().items(row()).build())),
                    ),
                )
                .response("500", failure())
                .build(),
        )
        .operation(
            PathItemType::Post,
            OperationBuilder::new()
                .tag(R::PATH)
                .summary(Some(format!("Create {}", labels.singular)))
                .request_body(Some(body()))
                .response("201", json("Created row", row()))
                .response("500", failure())
                .build(),
        )
        .build();

    let item = PathItemBuilder::new()
        .operation(
            PathItemType::Get,
            OperationBuilder::new()
                .tag(R::PATH)
                .summary(Some(format!("Get {} by ID", labels.singular)))
                .parameter(id())
                .response("200", json("Row", row()))
                .response("404", not_found())
                .response("500", failure())
                .build(),
        )
        .operation(
            PathItemType::Put,
            OperationBuilder::new()
                .tag(R::PATH)
                .summary(Some(format!("Replace {}", labels.singular)))
                .parameter(id())
                .request_body(Some(body()))
                .response("200", json("Updated row", row()))
                .response("404", not_found())
                .response("500", failure())
                .build(),
        )
        .operation(
            PathItemType::Delete,
            OperationBuilder::new()
                .tag(R::PATH)
                .summary(Some(format!("Delete {}", labels.singular)))
                .parameter(id())
                .response("200", text(labels.deleted))
                .response("404", not_found())
                .response("500", failure())
                .build(),
        )
        .build();

    let paths = &mut openapi.paths.paths;
    paths.insert(format!("/{}", R::PATH), collection);
    paths.insert(format!("/{}/{{id}}", R::PATH), item);
}

fn json(description: &str, schema: RefOr<Schema>) -> RefOr<Response> {
    RefOr::T(
        ResponseBuilder::new()
            .description(description)
            .content("application/json", Content::new(schema))
            .build(),
    )
}

fn text(description: &str) -> RefOr<Response> {
    RefOr::T(
        ResponseBuilder::new()
            .description(description)
            .content(
                "text/plain",
                Content::new(RefOr::T(Schema::Object(
                    ObjectBuilder::new().schema_type(SchemaType::String).build(),
                ))),
            )
            .build(),
    )
}

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_every_crud_path() {
        let doc = ApiDoc::openapi();
        for path in ["categorias", "autores", "livros", "alunos", "emprestimos"] {
            assert!(doc.paths.paths.contains_key(&format!("/{}", path)));
            assert!(doc.paths.paths.contains_key(&format!("/{}/{{id}}", path)));
        }
    }

    #[test]
    fn test_registers_row_and_payload_schemas() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.expect("components").schemas;
        assert!(schemas.contains_key("Book"));
        assert!(schemas.contains_key("BookPayload"));
    }
}
