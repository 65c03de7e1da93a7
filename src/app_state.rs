use std::{sync::Arc, time::Duration};

use crate::{
    config::Config,
    repositories::{InMemoryReviewerRepository, ReviewerRepository},
    services::{
        completion_client::{CompletionClient, OpenAiCompletionClient},
        generation_service::GenerationService,
        id_source::{AtomicIdSource, IdSource},
        reviewer_service::ReviewerService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub reviewer_service: Arc<ReviewerService>,
    pub generation_service: Arc<GenerationService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let completion: Arc<dyn CompletionClient> = Arc::new(OpenAiCompletionClient::new(&config));
        let repository: Arc<dyn ReviewerRepository> = Arc::new(InMemoryReviewerRepository::new());
        Self::with_parts(config, completion, repository)
    }

    /// Wires the services around caller-supplied collaborators.
    pub fn with_parts(
        config: Config,
        completion: Arc<dyn CompletionClient>,
        repository: Arc<dyn ReviewerRepository>,
    ) -> Self {
        let ids: Arc<dyn IdSource> = Arc::new(AtomicIdSource::new());

        let generation_service = Arc::new(GenerationService::new(
            completion,
            Arc::clone(&ids),
            config.heuristics(),
            Duration::from_secs(config.completion_timeout_secs),
        ));

        let reviewer_service = Arc::new(ReviewerService::new(
            repository,
            Arc::clone(&generation_service),
            ids,
        ));

        Self {
            reviewer_service,
            generation_service,
            config: Arc::new(config),
        }
    }
}
