use actix_web::{get, http::Method, post, web, HttpResponse, Responder};

use crate::{
    api::state::AppState,
    models::bed::GardenBed,
    models::request::{
        link, ApiResponse, BedApiResponse, BedListResponse, BedResponse, BedSummary,
        ErrorResponse, PaginatedResponse, Pagination, PlaceBedRequest, PlacedBedApiResponse,
        PlacedBedResponse,
    },
    models::BedId,
};

fn no_garden() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "No garden has been created yet."
    }))
}

/// POST /api/garden/beds
/// Constructs a bed and asks the garden to place it at `(x, y)`.
#[utoipa::path(
    post,
    context_path = "/api",
    path = "/garden/beds",
    tag = "beds",
    request_body = PlaceBedRequest,
    responses(
        (status = 201, description = "Bed placed, id assigned", body = PlacedBedApiResponse),
        (status = 400, description = "Non-positive dimensions", body = ErrorResponse),
        (status = 404, description = "No garden created yet", body = ErrorResponse),
        (status = 409, description = "Placement rejected", body = ErrorResponse),
    )
)]
#[post("/garden/beds")]
pub async fn place_bed(
    state: web::Data<AppState>,
    body: web::Json<PlaceBedRequest>,
) -> impl Responder {
    let request = body.into_inner();
    if request.length == 0 || request.width == 0 {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Bed dimensions (length, width) must be strictly positive."
        }));
    }

    let mut guard = state.garden();
    let Some(garden) = guard.as_mut() else {
        return no_garden();
    };

    let bed = GardenBed::new(
        request.length,
        request.width,
        request.ph,
        request.soil_type,
        request.sun_amount,
    );
    match garden.add_bed(bed, request.x, request.y) {
        Ok(id) => {
            log::info!(
                "placed bed {id} ({}x{}) at ({}, {})",
                request.length,
                request.width,
                request.x,
                request.y
            );
            let mut links = std::collections::HashMap::new();
            links.insert("self".into(), link(format!("/api/garden/beds/{id}"), Method::GET));
            links.insert(
                "addPlant".into(),
                link(format!("/api/garden/beds/{id}/plants"), Method::POST),
            );
            links.insert("garden".into(), link("/api/garden", Method::GET));
            HttpResponse::Created().json(ApiResponse::new(PlacedBedResponse { id }, links))
        }
        Err(_) => {
            log::warn!(
                "rejected bed placement ({}x{}) at ({}, {})",
                request.length,
                request.width,
                request.x,
                request.y
            );
            HttpResponse::Conflict().json(serde_json::json!({
                "error": "The garden bed could not be placed (out of bounds, overlapping another bed, or the garden is full)."
            }))
        }
    }
}

/// GET /api/garden/beds
/// Lists the placed beds in placement order.
#[utoipa::path(
    get,
    context_path = "/api",
    path = "/garden/beds",
    tag = "beds",
    responses(
        (status = 200, description = "Placed beds", body = BedListResponse),
        (status = 404, description = "No garden created yet", body = ErrorResponse),
    )
)]
#[get("/garden/beds")]
pub async fn list_beds(state: web::Data<AppState>) -> impl Responder {
    let guard = state.garden();
    let Some(garden) = guard.as_ref() else {
        return no_garden();
    };

    let items: Vec<BedSummary> = garden.beds().iter().map(BedSummary::from).collect();
    let total = items.len();
    let mut links = std::collections::HashMap::new();
    links.insert("self".into(), link("/api/garden/beds", Method::GET));
    links.insert("garden".into(), link("/api/garden", Method::GET));
    HttpResponse::Ok().json(PaginatedResponse::new(
        items,
        links,
        Pagination {
            page: 1,
            per_page: total,
            total,
            total_pages: 1,
        },
    ))
}

/// GET /api/garden/beds/{id}
/// Returns one bed's environment, rows, plants and ASCII rendering.
#[utoipa::path(
    get,
    context_path = "/api",
    path = "/garden/beds/{id}",
    tag = "beds",
    params(("id" = usize, Path, description = "Bed id assigned at placement")),
    responses(
        (status = 200, description = "Bed detail", body = BedApiResponse),
        (status = 404, description = "Unknown bed or no garden", body = ErrorResponse),
    )
)]
#[get("/garden/beds/{id}")]
pub async fn get_bed(state: web::Data<AppState>, path: web::Path<BedId>) -> impl Responder {
    let id = path.into_inner();
    let guard = state.garden();
    let Some(garden) = guard.as_ref() else {
        return no_garden();
    };

    match garden.bed(id) {
        None => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Garden bed '{id}' not found.")
        })),
        Some(bed) => {
            let mut links = std::collections::HashMap::new();
            links.insert("self".into(), link(format!("/api/garden/beds/{id}"), Method::GET));
            links.insert(
                "addPlant".into(),
                link(format!("/api/garden/beds/{id}/plants"), Method::POST),
            );
            links.insert("collection".into(), link("/api/garden/beds", Method::GET));
            HttpResponse::Ok().json(ApiResponse::new(BedResponse::from(bed), links))
        }
    }
}
