//! Hello resolver - smoke-test query.

use async_graphql::Object;

#[derive(Default)]
pub struct HelloQuery;

#[Object]
impl HelloQuery {
    async fn hello(&self) -> &'static str {
        "hello world"
    }
}
