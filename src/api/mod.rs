// src/api/mod.rs
use actix_web::{web, App, HttpServer};
use actix_cors::Cors;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};

use crate::core::config::Config;

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Generator endpoints
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::generator::analyze_password,
    ),
    components(
        schemas(
            crate::api::types::PasswordGenerationRequest,
            crate::api::types::PasswordGenerationResponse,
            crate::api::types::PasswordAnalysisRequest,
            crate::api::types::PasswordAnalysisResponse,
            crate::models::StrengthResult,
            crate::models::StrengthLabel,
            crate::models::Tip,
        )
    ),
    tags(
        (name = "Generator", description = "Password generation and strength checking endpoints")
    ),
    info(
        title = "Password Checker API",
        version = "0.1.0",
        description = "Random password generation and heuristic strength scoring",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

pub async fn start_server(config: Config, port: u16) -> std::io::Result<()> {
    let address = config.web_address.clone();
    log::info!("Starting password checker API on {}:{}", address, port);

    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        // Configure CORS
        let cors = Cors::default()
            .allow_any_origin() // Browser front-ends on any local port
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(config_data.clone())
            // Add Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            // Add Redoc
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            .configure(routes::configure_routes)
    })
    .bind((address.as_str(), port))?
    .run()
    .await
}

pub mod types;
pub mod routes;
pub mod handlers;
