use async_graphql::MergedObject;

use crate::gql::domains::authors::AuthorQuery;
use crate::gql::domains::games::GameQuery;
use crate::gql::domains::reviews::ReviewQuery;

#[derive(MergedObject, Default)]
pub struct QueryRoot(GameQuery, ReviewQuery, AuthorQuery);
