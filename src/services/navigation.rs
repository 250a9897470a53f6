use async_trait::async_trait;

/// The listing view every redirect out of the detail screen lands on.
pub const DISCOVER_ROUTE: &str = "/places/tabs/discover";

#[async_trait]
pub trait Navigator: Send + Sync {
    /// Navigate to `route`, animating as a backwards transition.
    async fn navigate_back(&self, route: &str) -> anyhow::Result<()>;

    async fn navigate(&self, route: &str) -> anyhow::Result<()>;
}
