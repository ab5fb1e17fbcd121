//! OpenAPI documentation configuration

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "Searchable, sortable, paginated product catalog",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:4000", description = "Local development server")
    )
)]
struct ServiceDoc;

/// Combined OpenAPI documentation for the Catalog API.
///
/// Catalog routes live at the root, so the domain document is merged rather
/// than nested under a prefix.
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = ServiceDoc::openapi();
        doc.merge(domain_catalog::ApiDoc::openapi());
        doc
    }
}
