use crate::models::*;
use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use sqlx::MySqlPool;
use tracing::error;

pub struct AppState {
    pub pool: MySqlPool,
}

const GENERIC_DB_ERROR: &str = "Internal Server Error";

// ============ Health Check ============

pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    // Check database connection
    let db_ok = sqlx::query("SELECT 1").fetch_one(&state.pool).await.is_ok();

    if db_ok {
        HttpResponse::Ok().json(serde_json::json!({
            "status": "healthy",
            "database": "connected",
            "timestamp": Utc::now().to_rfc3339()
        }))
    } else {
        HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "status": "unhealthy",
            "database": "disconnected"
        }))
    }
}

// ============ Patient Handlers ============

pub async fn list_patients(state: web::Data<AppState>) -> impl Responder {
    let rows: Result<Vec<Patient>, _> = sqlx::query_as(
        "SELECT patient_id, first_name, last_name, date_of_birth FROM patients",
    )
    .fetch_all(&state.pool)
    .await;

    match rows {
        Ok(patients) => HttpResponse::Ok().json(patients),
        Err(e) => {
            error!("Error retrieving patients: {}", e);
            HttpResponse::InternalServerError().body(GENERIC_DB_ERROR)
        }
    }
}

pub async fn filter_patients(
    state: web::Data<AppState>,
    query: web::Query<PatientFilter>,
) -> impl Responder {
    // The 400 is produced here, before any pool acquisition
    let first_name = match query.first_name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => return HttpResponse::BadRequest().body("First name is required"),
    };

    let rows: Result<Vec<Patient>, _> = sqlx::query_as(
        "SELECT patient_id, first_name, last_name, date_of_birth FROM patients \
         WHERE first_name = ?",
    )
    .bind(first_name)
    .fetch_all(&state.pool)
    .await;

    match rows {
        Ok(patients) => HttpResponse::Ok().json(patients),
        Err(e) => {
            error!("Error filtering patients: {}", e);
            HttpResponse::InternalServerError().body(GENERIC_DB_ERROR)
        }
    }
}

// ============ Provider Handlers ============

pub async fn list_providers(state: web::Data<AppState>) -> impl Responder {
    let rows: Result<Vec<Provider>, _> = sqlx::query_as(
        "SELECT first_name, last_name, provider_specialty FROM providers",
    )
    .fetch_all(&state.pool)
    .await;

    match rows {
        Ok(providers) => HttpResponse::Ok().json(providers),
        Err(e) => {
            error!("Error retrieving providers: {}", e);
            HttpResponse::InternalServerError().body(GENERIC_DB_ERROR)
        }
    }
}

pub async fn providers_by_specialty(
    state: web::Data<AppState>,
    query: web::Query<SpecialtyFilter>,
) -> impl Responder {
    let specialty = match query.specialty.as_deref() {
        Some(s) if !s.is_empty() => s,
        _ => return HttpResponse::BadRequest().body("Specialty is required"),
    };

    let rows: Result<Vec<Provider>, _> = sqlx::query_as(
        "SELECT first_name, last_name, provider_specialty FROM providers \
         WHERE provider_specialty = ?",
    )
    .bind(specialty)
    .fetch_all(&state.pool)
    .await;

    match rows {
        Ok(providers) => HttpResponse::Ok().json(providers),
        Err(e) => {
            error!("Error retrieving providers by specialty: {}", e);
            HttpResponse::InternalServerError().body(GENERIC_DB_ERROR)
        }
    }
}
