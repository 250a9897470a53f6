use async_trait::async_trait;

/// Source of the current user's identity.
///
/// Every call is a fresh query that delivers the identity exactly once.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn user_id(&self) -> anyhow::Result<Option<String>>;
}

/// Session whose identity is fixed at construction, e.g. from config.
#[derive(Clone, Debug, Default)]
pub struct StaticSession {
    user_id: Option<String>,
}

impl StaticSession {
    pub fn new(user_id: Option<String>) -> Self {
        Self { user_id }
    }
}

#[async_trait]
impl SessionProvider for StaticSession {
    async fn user_id(&self) -> anyhow::Result<Option<String>> {
        Ok(self.user_id.clone())
    }
}
