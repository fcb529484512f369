use actix_web::{http::Method, post, web, HttpResponse, Responder};

use crate::{
    api::state::AppState,
    models::plant::Plant,
    models::request::{link, AddPlantRequest, ApiResponse, ErrorResponse, PlantApiResponse, PlantResponse},
    models::BedId,
};

/// POST /api/garden/beds/{id}/plants
/// Constructs a plant and asks the bed to pack it into its rows.
#[utoipa::path(
    post,
    context_path = "/api",
    path = "/garden/beds/{id}/plants",
    tag = "plants",
    params(("id" = usize, Path, description = "Bed id assigned at placement")),
    request_body = AddPlantRequest,
    responses(
        (status = 201, description = "Plant placed", body = PlantApiResponse),
        (status = 400, description = "Invalid symbol", body = ErrorResponse),
        (status = 404, description = "Unknown bed or no garden", body = ErrorResponse),
        (status = 409, description = "Incompatible environment or no room", body = ErrorResponse),
    )
)]
#[post("/garden/beds/{id}/plants")]
pub async fn add_plant(
    state: web::Data<AppState>,
    path: web::Path<BedId>,
    body: web::Json<AddPlantRequest>,
) -> impl Responder {
    let id = path.into_inner();
    let request = body.into_inner();

    let mut symbols = request.symbol.chars();
    let symbol = match (symbols.next(), symbols.next()) {
        (Some(c), None) => c,
        _ => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "error": "The plant symbol must be exactly one character."
            }))
        }
    };

    let mut guard = state.garden();
    let Some(garden) = guard.as_mut() else {
        return HttpResponse::NotFound().json(serde_json::json!({
            "error": "No garden has been created yet."
        }));
    };
    let Some(bed) = garden.bed_mut(id) else {
        return HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Garden bed '{id}' not found.")
        }));
    };

    let plant = Plant::new(
        request.name,
        symbol,
        request.size,
        request.preferred_ph,
        request.preferred_soil,
        request.sun_requirement,
    );
    let response = PlantResponse::from(&plant);
    match bed.add_plant(plant) {
        Ok(()) => {
            log::info!("placed plant '{}' (size {}) in bed {id}", response.name, response.size);
            let mut links = std::collections::HashMap::new();
            links.insert("bed".into(), link(format!("/api/garden/beds/{id}"), Method::GET));
            links.insert(
                "self".into(),
                link(format!("/api/garden/beds/{id}/plants"), Method::POST),
            );
            HttpResponse::Created().json(ApiResponse::new(response, links))
        }
        Err(plant) => {
            log::warn!("bed {id} rejected plant '{}' (size {})", plant.name, plant.size);
            HttpResponse::Conflict().json(serde_json::json!({
                "error": "The plant could not be added (incompatible environment or not enough room)."
            }))
        }
    }
}
