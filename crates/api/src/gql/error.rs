/// Unified error type for GraphQL resolvers.
///
/// async-graphql has a blanket `impl<T: Display + Send + Sync + 'static> From<T> for Error`,
/// so any variant converts via `?` or `.into()`.
#[derive(Debug)]
pub enum GqlError {
    /// A review points at a record that no longer exists, typically a game
    /// deleted after the review was written.
    DanglingReference { entity: &'static str, id: String },
    Custom(String),
}

impl GqlError {
    pub fn new(msg: impl Into<String>) -> Self {
        GqlError::Custom(msg.into())
    }

    pub fn dangling(entity: &'static str, id: impl Into<String>) -> Self {
        GqlError::DanglingReference {
            entity,
            id: id.into(),
        }
    }
}

impl std::fmt::Display for GqlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GqlError::DanglingReference { entity, id } => {
                tracing::warn!(entity = *entity, id = %id, "Dangling reference");
                write!(f, "{entity} {id} not found")
            }
            GqlError::Custom(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for GqlError {}

/// Extension trait that converts any `Result<T, E>` where `E: Display`
/// into `async_graphql::Result<T>` with a contextual message prefix.
///
/// Usage: `loader.load_one(id).await.gql_err("Failed to load game")?`
pub trait ResultExt<T> {
    fn gql_err(self, context: &str) -> std::result::Result<T, async_graphql::Error>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for std::result::Result<T, E> {
    fn gql_err(self, context: &str) -> std::result::Result<T, async_graphql::Error> {
        self.map_err(|e| async_graphql::Error::new(format!("{context}: {e}")))
    }
}
