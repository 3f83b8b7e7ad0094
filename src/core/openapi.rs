use utoipa::{Modify, OpenApi};

use crate::core::config::SwaggerConfig;
use crate::features::iss::handlers as iss_handlers;
use crate::shared::types::{Status, StatusResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // ISS collection
        iss_handlers::collect_iss_data,
    ),
    components(schemas(Status, StatusResponse)),
    tags(
        (name = "iss", description = "ISS position and timezone collection"),
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl From<&SwaggerConfig> for SwaggerInfoModifier {
    fn from(config: &SwaggerConfig) -> Self {
        Self {
            title: config.title.clone(),
            version: config.version.clone(),
            description: config.description.clone(),
        }
    }
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
