use actix_web::{get, http::Method, post, web, HttpResponse, Responder};

use crate::{
    api::state::AppState,
    models::garden::Garden,
    models::request::{
        link, ApiResponse, CreateGardenRequest, ErrorResponse, GardenApiResponse, GardenResponse,
        Links,
    },
};

fn garden_links() -> Links {
    let mut links = Links::new();
    links.insert("self".into(), link("/api/garden", Method::GET));
    links.insert("beds".into(), link("/api/garden/beds", Method::GET));
    links.insert("placeBed".into(), link("/api/garden/beds", Method::POST));
    links
}

/// POST /api/garden
/// Creates the garden, replacing any existing one (all beds are lost).
#[utoipa::path(
    post,
    context_path = "/api",
    path = "/garden",
    tag = "garden",
    request_body = CreateGardenRequest,
    responses(
        (status = 201, description = "Garden created", body = GardenApiResponse),
        (status = 400, description = "Non-positive dimensions", body = ErrorResponse),
    )
)]
#[post("/garden")]
pub async fn create_garden(
    state: web::Data<AppState>,
    body: web::Json<CreateGardenRequest>,
) -> impl Responder {
    let request = body.into_inner();
    if request.length == 0 || request.width == 0 {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Garden dimensions (length, width) must be strictly positive."
        }));
    }

    let garden = Garden::new(request.length, request.width);
    let response = GardenResponse::from(&garden);
    *state.garden() = Some(garden);
    log::info!(
        "created a {}x{} garden",
        request.length,
        request.width
    );
    HttpResponse::Created().json(ApiResponse::new(response, garden_links()))
}

/// GET /api/garden
/// Returns the garden's dimensions, placed beds and ASCII map.
#[utoipa::path(
    get,
    context_path = "/api",
    path = "/garden",
    tag = "garden",
    responses(
        (status = 200, description = "Current garden", body = GardenApiResponse),
        (status = 404, description = "No garden created yet", body = ErrorResponse),
    )
)]
#[get("/garden")]
pub async fn get_garden(state: web::Data<AppState>) -> impl Responder {
    match state.garden().as_ref() {
        None => HttpResponse::NotFound().json(serde_json::json!({
            "error": "No garden has been created yet."
        })),
        Some(garden) => HttpResponse::Ok().json(ApiResponse::new(
            GardenResponse::from(garden),
            garden_links(),
        )),
    }
}
