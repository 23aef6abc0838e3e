//! External generation service abstraction.

use std::sync::Arc;

use async_trait::async_trait;
use reelquote_types::ServiceError;

use crate::GenerationRequest;

/// A generative model that answers estimate requests.
///
/// Implementors send the prompt, system instruction and schema to a model and
/// return the generated JSON text untouched. Parsing happens in the flow.
#[async_trait]
pub trait EstimationService: Send + Sync {
    /// Generates JSON text for the request.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] if the call fails or yields no text.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, ServiceError>;

    /// Model identifier string.
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<T: EstimationService + ?Sized> EstimationService for Arc<T> {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, ServiceError> {
        (**self).generate(request).await
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

#[async_trait]
impl<T: EstimationService + ?Sized> EstimationService for Box<T> {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, ServiceError> {
        (**self).generate(request).await
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
