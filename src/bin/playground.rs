use axum::{
    Json, Router,
    response::Html,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::net::TcpListener;

use lambda_systemf::checker::type_check;
use lambda_systemf::context::Context;
use lambda_systemf::parser::parse_term;

#[derive(Deserialize)]
struct Req {
    context: String,
    term: String,
}
#[derive(Serialize)]
struct Resp {
    result: String,
}

static INDEX_HTML: &str = include_str!("../../index.html");

#[tokio::main]
async fn main() {
    let app = Router::new()
        .route("/", get(|| async { Html(INDEX_HTML) }))
        .route("/run", post(run));

    let addr = SocketAddr::from(([127, 0, 0, 1], 8080));
    println!("→ open http://{}", addr);
    axum::serve(TcpListener::bind(addr).await.unwrap(), app)
        .await
        .unwrap();
}

async fn run(Json(Req { context, term }): Json<Req>) -> Json<Resp> {
    let context = match Context::parse(&context) {
        Ok(ok) => ok,
        Err(err) => {
            let result = format!("Context error\n{}", err);
            return Json(Resp { result });
        }
    };
    let term = match parse_term(&term) {
        Ok(ok) => ok,
        Err(err) => {
            let result = format!("Parse error\n{}", err);
            return Json(Resp { result });
        }
    };
    let result = match type_check(&term, &context) {
        Ok(ty) => format!("Term's type: {}", ty),
        Err(err) => format!("Type error\n{}", err),
    };
    Json(Resp { result })
}
