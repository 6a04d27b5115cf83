use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::engine;

#[derive(Deserialize)]
pub struct QueryRequest {
    pub question: String,
}

#[derive(Serialize)]
pub struct QueryResponse {
    pub reply: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// POST /query: answer a free-text question about rooms and bookings.
///
/// Every recognized or unrecognized question gets a 200 with a reply; only a
/// store failure surfaces as a 500, and it is scoped to this request.
pub async fn ask(pool: web::Data<SqlitePool>, body: web::Json<QueryRequest>) -> impl Responder {
    match engine::answer(pool.get_ref(), &body.question).await {
        Ok(reply) => HttpResponse::Ok().json(QueryResponse { reply }),
        Err(e) => {
            log::error!("query failed: {e}");
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "The assistant is temporarily unavailable".to_string(),
            })
        }
    }
}
