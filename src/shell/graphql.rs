use async_graphql::{EmptySubscription, MergedObject, Schema, http::GraphiQLSource};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, Router, response::Html, routing::get};

pub use crate::modules::loyalty_history::use_cases::fetch_combined_history::inbound::graphql::QueryRoot;
use crate::modules::loyalty_history::use_cases::delete_record::inbound::graphql::DeleteRecordMutation;
use crate::modules::loyalty_history::use_cases::record_point_event::inbound::graphql::RecordPointEventMutation;
use crate::modules::loyalty_history::use_cases::record_transaction::inbound::graphql::RecordTransactionMutation;
use crate::modules::loyalty_history::use_cases::update_record::inbound::graphql::UpdateRecordMutation;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    RecordPointEventMutation,
    RecordTransactionMutation,
    UpdateRecordMutation,
    DeleteRecordMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

const ENDPOINT: &str = "/graphql";

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub fn router<S>(schema: AppSchema) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route(ENDPOINT, get(graphiql).post(graphql))
        .layer(Extension(schema))
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(ENDPOINT).finish())
}
