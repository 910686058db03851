include!("../../lib.rs");
use std::env;
use std::net::SocketAddr;
use lambda_http::{run, Error};
use tracing::info;
use crate::core::domain::Configuration;
use crate::server::{build_router, build_state};
use crate::utils::logging::setup_tracing;

// See https://docs.aws.amazon.com/lambda/latest/dg/lambda-rust.html
// https://docs.aws.amazon.com/lambda/latest/dg/rust-http-events.html

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    let config = Configuration::from_env();
    let state = build_state(&config).await?;

    if env::var("AWS_LAMBDA_RUNTIME_API").is_ok() {
        info!("serving bookstore branch {} through lambda runtime", config.branch_id);
        return run(build_router::<lambda_http::Body>(state)).await;
    }

    let addr: SocketAddr = config.listen_addr.parse()?;
    info!("bookstore branch {} listening on {}", config.branch_id, addr);
    axum::Server::bind(&addr)
        .serve(build_router::<axum::body::Body>(state).into_make_service())
        .await?;
    Ok(())
}
