use async_graphql::http::GraphiQLSource;
use rocket::response::content::RawHtml;
use rocket::serde::json::Json;
use rocket::State;
use tracing::debug;

use crate::context::ResolverContext;
use crate::database::Db;
use crate::graphql::TwitterSchema;

const ENDPOINT: &str = "/graphql";

/// GraphiQL IDE pointed at this server.
#[get("/graphql")]
pub fn graphiql() -> RawHtml<String> {
    RawHtml(GraphiQLSource::build().endpoint(ENDPOINT).finish())
}

/// Executes one GraphQL request with a resolver context of its own.
#[post("/graphql", format = "json", data = "<request>")]
pub async fn graphql_request(
    schema: &State<TwitterSchema>,
    db: &State<Db>,
    request: Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    let context = ResolverContext::new(db.inner().clone());
    let response = schema.execute(request.into_inner().data(context)).await;
    if response.is_err() {
        debug!(errors = ?response.errors, "graphql request finished with errors");
    }
    Json(response)
}
