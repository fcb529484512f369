use utoipa::OpenApi;

use crate::models::request::{
    AddPlantRequest, BedApiResponse, BedListResponse, BedResponse, BedSummary,
    CreateGardenRequest, ErrorResponse, GardenApiResponse, GardenResponse, Link, Pagination,
    PlaceBedRequest, PlacedBedApiResponse, PlacedBedResponse, PlantApiResponse, PlantResponse,
    RowResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Garden Layout API",
        description = "Garden layout engine: place rectangular beds on a fixed grid without overlap, then shelf-pack plants into each bed subject to sun, soil and pH compatibility.",
        version = "1.0.0",
        license(name = "MIT"),
    ),
    paths(
        crate::api::handlers::garden::create_garden,
        crate::api::handlers::garden::get_garden,
        crate::api::handlers::beds::place_bed,
        crate::api::handlers::beds::list_beds,
        crate::api::handlers::beds::get_bed,
        crate::api::handlers::plants::add_plant,
    ),
    components(
        schemas(
            // Requests
            CreateGardenRequest, PlaceBedRequest, AddPlantRequest,
            // Responses
            GardenResponse, BedSummary, BedResponse, RowResponse, PlantResponse,
            PlacedBedResponse,
            // Shared
            Link, Pagination, ErrorResponse,
            // Concrete response envelopes (via #[aliases])
            GardenApiResponse,
            BedApiResponse,
            PlacedBedApiResponse,
            PlantApiResponse,
            BedListResponse,
        )
    ),
    tags(
        (name = "garden", description = "The occupancy grid — create and inspect"),
        (name = "beds",   description = "Bed placement — non-overlapping rectangles with ids"),
        (name = "plants", description = "Plant placement — greedy shelf packing per bed"),
    )
)]
pub struct ApiDoc;
