use std::collections::{BTreeSet, HashMap};

use actix_web::http::Method;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;

use crate::models::bed::GardenBed;
use crate::models::garden::Garden;
use crate::models::plant::Plant;
use crate::models::row::GardenRow;
use crate::models::BedId;

/// Serde adapter for `actix_web::http::Method` (serialises as its uppercase string).
mod method_serde {
    use actix_web::http::Method;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(method: &Method, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(method.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Method, D::Error> {
        let s = String::deserialize(d)?;
        Method::from_bytes(s.as_bytes()).map_err(serde::de::Error::custom)
    }
}

/// A single HAL-style hyperlink.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Link {
    pub href: String,
    #[serde(with = "method_serde")]
    #[schema(value_type = String)]
    pub method: Method,
}

/// Map of relation name → link, serialised as the `_links` field in responses.
pub type Links = HashMap<String, Link>;

/// Helper to build a `Link` from an href and an HTTP method.
pub fn link(href: impl Into<String>, method: Method) -> Link {
    Link {
        href: href.into(),
        method,
    }
}

/// Pagination metadata included in responses that return lists.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// Generic single-item response envelope.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[aliases(
    GardenApiResponse = ApiResponse<GardenResponse>,
    BedApiResponse = ApiResponse<BedResponse>,
    PlacedBedApiResponse = ApiResponse<PlacedBedResponse>,
    PlantApiResponse = ApiResponse<PlantResponse>
)]
pub struct ApiResponse<T> {
    pub payload: T,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl<T> ApiResponse<T> {
    pub fn new(payload: T, links: Links) -> Self {
        Self {
            payload,
            errors: vec![],
            links,
        }
    }
}

/// Generic paginated list response envelope.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[aliases(BedListResponse = PaginatedResponse<BedSummary>)]
pub struct PaginatedResponse<T> {
    pub payload: Vec<T>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(rename = "_links")]
    pub links: Links,
    pub pagination: Pagination,
}

impl<T> PaginatedResponse<T> {
    pub fn new(payload: Vec<T>, links: Links, pagination: Pagination) -> Self {
        Self {
            payload,
            errors: vec![],
            links,
            pagination,
        }
    }
}

/// Error body returned for every rejected request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGardenRequest {
    pub length: usize,
    pub width: usize,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceBedRequest {
    pub length: usize,
    pub width: usize,
    pub ph: f64,
    pub soil_type: BTreeSet<String>,
    pub sun_amount: String,
    /// Column of the bed's top-left corner. Signed so that negative input
    /// reaches the engine's own rejection path instead of failing to parse.
    pub x: i64,
    /// Row of the bed's top-left corner.
    pub y: i64,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddPlantRequest {
    pub name: String,
    /// Single display glyph; longer strings are rejected at the boundary.
    pub symbol: String,
    pub size: usize,
    pub preferred_ph: f64,
    pub preferred_soil: BTreeSet<String>,
    pub sun_requirement: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GardenResponse {
    pub length: usize,
    pub width: usize,
    pub beds: Vec<BedSummary>,
    /// ASCII rendering of the occupancy grid.
    pub map: String,
}

impl From<&Garden> for GardenResponse {
    fn from(garden: &Garden) -> Self {
        Self {
            length: garden.length(),
            width: garden.width(),
            beds: garden.beds().iter().map(BedSummary::from).collect(),
            map: garden.to_string(),
        }
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BedSummary {
    pub id: Option<BedId>,
    pub length: usize,
    pub width: usize,
    pub sun_amount: String,
    pub plant_count: usize,
}

impl From<&GardenBed> for BedSummary {
    fn from(bed: &GardenBed) -> Self {
        Self {
            id: bed.id(),
            length: bed.length(),
            width: bed.width(),
            sun_amount: bed.sun_amount().to_string(),
            plant_count: bed
                .rows_of_plants()
                .iter()
                .map(|r| r.plants().len())
                .sum(),
        }
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BedResponse {
    pub id: Option<BedId>,
    pub length: usize,
    pub width: usize,
    pub ph: f64,
    pub soil_type: BTreeSet<String>,
    pub sun_amount: String,
    pub rows: Vec<RowResponse>,
    /// ASCII rendering of the bed's shelves.
    pub map: String,
}

impl From<&GardenBed> for BedResponse {
    fn from(bed: &GardenBed) -> Self {
        Self {
            id: bed.id(),
            length: bed.length(),
            width: bed.width(),
            ph: bed.ph(),
            soil_type: bed.soil_type().clone(),
            sun_amount: bed.sun_amount().to_string(),
            rows: bed.rows_of_plants().iter().map(RowResponse::from).collect(),
            map: bed.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RowResponse {
    pub max_length: usize,
    pub max_width: usize,
    pub current_length: usize,
    pub current_width: usize,
    pub finalized: bool,
    pub plants: Vec<PlantResponse>,
}

impl From<&GardenRow> for RowResponse {
    fn from(row: &GardenRow) -> Self {
        Self {
            max_length: row.max_length(),
            max_width: row.max_width(),
            current_length: row.current_length(),
            current_width: row.current_width(),
            finalized: row.is_finalized(),
            plants: row.plants().iter().map(PlantResponse::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlantResponse {
    pub name: String,
    pub symbol: String,
    pub size: usize,
    pub preferred_ph: f64,
    pub preferred_soil: BTreeSet<String>,
    pub sun_requirement: String,
    /// Display form, e.g. `t (3x3)`.
    pub display: String,
}

impl From<&Plant> for PlantResponse {
    fn from(plant: &Plant) -> Self {
        Self {
            name: plant.name.clone(),
            symbol: plant.symbol.to_string(),
            size: plant.size,
            preferred_ph: plant.preferred_ph,
            preferred_soil: plant.preferred_soil.clone(),
            sun_requirement: plant.sun_requirement.clone(),
            display: plant.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlacedBedResponse {
    pub id: BedId,
}
