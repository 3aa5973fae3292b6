use async_graphql::MergedObject;

use crate::gql::domains::games::GameMutation;

#[derive(MergedObject, Default)]
pub struct MutationRoot(GameMutation);
