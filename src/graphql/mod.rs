//! Binds the resolver traits into an async-graphql schema.
//!
//! The objects here hold no logic of their own: each field pulls the
//! registered [`ResolverSet`] and the request's [`ResolverContext`] out of the
//! async-graphql context and delegates.

mod mutation;
mod query;
mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

use async_graphql::{Context, EmptySubscription, Schema};

use crate::context::ResolverContext;
use crate::resolvers::ResolverSet;

pub type TwitterSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Schema with the default resolvers registered.
pub fn build_schema() -> TwitterSchema {
    build_schema_with(ResolverSet::default())
}

pub fn build_schema_with(resolvers: ResolverSet) -> TwitterSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(resolvers)
        .finish()
}

/// The registered resolvers and this request's context.
fn bound<'a>(
    ctx: &Context<'a>,
) -> async_graphql::Result<(&'a ResolverSet, &'a ResolverContext)> {
    Ok((ctx.data::<ResolverSet>()?, ctx.data::<ResolverContext>()?))
}
