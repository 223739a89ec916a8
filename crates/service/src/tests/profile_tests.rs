use std::sync::Arc;

use tandem_llm::LlmClient;

use crate::{ProfileService, ServiceError};

fn service_with_unreachable_api() -> ProfileService {
    // Port 1 refuses connections immediately; nothing listens there.
    let llm = LlmClient::new("test-key".to_owned(), "http://127.0.0.1:1".to_owned()).unwrap();
    ProfileService::new(Arc::new(llm))
}

#[tokio::test]
async fn empty_text_is_rejected_before_the_remote_call() {
    let service = service_with_unreachable_api();
    let err = service.extract("   ").await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(_)));
}

#[tokio::test]
async fn remote_failure_surfaces_as_external_service_error() {
    let service = service_with_unreachable_api();
    let err = service.extract("Sarah is a senior engineer").await.unwrap_err();
    assert!(matches!(err, ServiceError::ExternalService(_)));
}
