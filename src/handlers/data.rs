use actix_web::{web, HttpResponse, Responder};
use sqlx::SqlitePool;

use crate::db;

/// GET /rooms: the seeded room inventory.
pub async fn get_rooms(pool: web::Data<SqlitePool>) -> impl Responder {
    match db::room_classes(pool.get_ref()).await {
        Ok(rooms) => HttpResponse::Ok().json(rooms),
        Err(e) => {
            log::error!("failed to read rooms: {e}");
            HttpResponse::InternalServerError().json("Error fetching rooms")
        }
    }
}

/// GET /bookings: every booking, regardless of status.
pub async fn get_bookings(pool: web::Data<SqlitePool>) -> impl Responder {
    match db::all_bookings(pool.get_ref()).await {
        Ok(bookings) => HttpResponse::Ok().json(bookings),
        Err(e) => {
            log::error!("failed to read bookings: {e}");
            HttpResponse::InternalServerError().json("Error fetching bookings")
        }
    }
}
