use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionDecision {
    Granted,
    Denied,
}

#[async_trait]
pub trait CameraPermissionPrompt: Send + Sync {
    fn is_granted(&self) -> bool;

    /// Asks the user once. No retry happens after a denial.
    async fn request(&self) -> PermissionDecision;
}
