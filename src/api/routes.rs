use actix_web::web;

use crate::api::handlers::{
    beds::{get_bed, list_beds, place_bed},
    garden::{create_garden, get_garden},
    plants::add_plant,
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(create_garden)
            .service(get_garden)
            .service(place_bed)
            .service(list_beds)
            .service(get_bed)
            .service(add_plant),
    );
}
