#[macro_use]
extern crate rocket;
#[macro_use]
extern crate validator_derive;

use dotenv::dotenv;
use rocket::figment::Figment;
use rocket::serde::json::{json, Value};
use rocket::{Build, Rocket};
use rocket_cors::Cors;

pub mod config;
pub mod context;
pub mod database;
pub mod errors;
pub mod graphql;
pub mod models;
pub mod resolvers;
mod routes;
pub mod schema;
mod seed;
pub mod transforms;

pub use database::Db;

#[catch(404)]
fn not_found() -> Value {
    json!({
        "status": "error",
        "reason": "Resource was not found."
    })
}

fn cors_fairing() -> Cors {
    Cors::from_options(&Default::default()).expect("Cors fairing cannot be created")
}

/// Rocket configured from `.env` and the process environment.
pub fn rocket() -> Rocket<Build> {
    dotenv().ok();
    rocket_from(config::from_env())
}

/// Rocket configured from `figment`, which must carry `db_path`.
pub fn rocket_from(figment: Figment) -> Rocket<Build> {
    rocket::custom(figment)
        .attach(config::AppConfig::manage())
        .attach(Db::fairing())
        .attach(cors_fairing())
        .manage(graphql::build_schema())
        .mount(
            "/",
            routes![routes::graphql::graphiql, routes::graphql::graphql_request],
        )
        .register("/", catchers![not_found])
}
