//! AWS Lambda handler for the estimator endpoints
//!
//! Serves `POST /loan-estimate`, `POST /insurance-estimate`, `GET /search`
//! and `GET /plans` through a Lambda Function URL.
//!
//! Set CATALOG_PATH to a directory holding jobs.csv and documents.csv to
//! replace the built-in catalogue.

use flightish::{Catalog, EstimateService, ServiceResponse};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use std::path::Path;
use std::sync::Arc;

fn to_http(response: ServiceResponse) -> Result<Response<Body>, Error> {
    let body = if response.body.is_null() {
        Body::Empty
    } else {
        Body::Text(serde_json::to_string(&response.body)?)
    };

    let http = Response::builder()
        .status(response.status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "GET, POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(body)?;
    Ok(http)
}

/// Lambda handler function
async fn handler(service: &EstimateService, event: Request) -> Result<Response<Body>, Error> {
    let body: &[u8] = match event.body() {
        Body::Text(s) => s.as_bytes(),
        Body::Binary(b) => b.as_slice(),
        Body::Empty => &[],
    };

    let response = service.handle(
        event.method().as_str(),
        event.uri().path(),
        event.uri().query(),
        body,
    );
    to_http(response)
}

fn load_catalog() -> Result<Catalog, Error> {
    match std::env::var("CATALOG_PATH") {
        Ok(dir) => Ok(Catalog::from_csv_path(Path::new(&dir))?),
        Err(_) => {
            log::info!("CATALOG_PATH not set, using built-in catalogue");
            Ok(Catalog::builtin())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let service = Arc::new(EstimateService::new(load_catalog()?));
    run(service_fn(move |event: Request| {
        let service = Arc::clone(&service);
        async move { handler(&service, event).await }
    }))
    .await
}
