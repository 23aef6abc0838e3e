//! Async estimate session.

use reelquote_types::{Quote, RequestState, ServiceError, SubmitError};
use tokio::sync::Mutex;
use tracing::{Instrument, debug, info_span};

use crate::{EstimateFlow, EstimationService, EstimatorProfile, GenerationRequest, parse_quote};

/// Drives an [`EstimateFlow`] against an [`EstimationService`].
///
/// The flow lock is taken only around state transitions, never across the
/// service call, so state can be read while a request is pending.
#[derive(Debug)]
pub struct EstimateSession<S> {
    service: S,
    profile: EstimatorProfile,
    flow: Mutex<EstimateFlow>,
}

impl<S: EstimationService> EstimateSession<S> {
    /// Creates a session with the default estimator profile.
    #[must_use]
    pub fn new(service: S) -> Self {
        Self {
            service,
            profile: EstimatorProfile::default(),
            flow: Mutex::new(EstimateFlow::new()),
        }
    }

    /// Sets the estimator profile used for the system instruction.
    #[must_use]
    pub fn with_profile(mut self, profile: EstimatorProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Returns the estimator profile.
    #[must_use]
    pub const fn profile(&self) -> &EstimatorProfile {
        &self.profile
    }

    /// Returns the underlying service.
    #[must_use]
    pub const fn service(&self) -> &S {
        &self.service
    }

    /// Returns a snapshot of the current request state.
    pub async fn state(&self) -> RequestState {
        self.flow.lock().await.state().clone()
    }

    /// Returns the validation notice from the last rejected submission.
    pub async fn notice(&self) -> Option<&'static str> {
        self.flow.lock().await.notice()
    }

    /// Submits a description and waits for the outcome.
    ///
    /// Service failures do not surface as errors: they end in
    /// [`RequestState::Failed`] with the generic message, and the cause is
    /// logged. Returns the state after the request settles.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmitError`] if the description is blank or a request is
    /// already in flight. No call is made in either case. Returns
    /// [`SubmitError::Abandoned`] if the request was abandoned while pending.
    pub async fn submit(&self, input: &str) -> Result<RequestState, SubmitError> {
        let submission = self.flow.lock().await.submit(input)?;
        let request = GenerationRequest::for_description(&submission.description, &self.profile);

        let span = info_span!(
            "estimate",
            ticket = %submission.ticket,
            model = self.service.model_name()
        );
        let outcome: Result<Quote, ServiceError> = async {
            debug!(prompt_chars = request.prompt.len(), "requesting estimate");
            let text = self.service.generate(&request).await?;
            parse_quote(&text)
        }
        .instrument(span)
        .await;

        let mut flow = self.flow.lock().await;
        if !flow.resolve(submission.ticket, outcome) {
            return Err(SubmitError::Abandoned);
        }
        Ok(flow.state().clone())
    }

    /// Abandons the in-flight request, if any.
    pub async fn abandon(&self) {
        self.flow.lock().await.abandon();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{EXPLAINER_JSON, ScriptedService};
    use reelquote_types::{BreakdownItem, FAILURE_MESSAGE, VALIDATION_MESSAGE, ValidationError};

    #[tokio::test]
    async fn test_explainer_scenario() {
        let session = EstimateSession::new(ScriptedService::new().respond_json(EXPLAINER_JSON));

        let state = session.submit("A 30-second explainer video").await.unwrap();

        assert_eq!(
            state,
            RequestState::Succeeded(Quote::new(
                "$500-$750",
                "1 week",
                vec![BreakdownItem::new("Animation", "$400")],
                "Single revision round",
            ))
        );
        assert_eq!(session.service().calls(), 1);

        let request = session.service().last_request().unwrap();
        assert_eq!(
            request.prompt,
            "Generate a quote for this project: A 30-second explainer video"
        );
        assert_eq!(request.schema, Quote::response_schema());
        assert_eq!(
            request.system_instruction,
            EstimatorProfile::default().system_instruction()
        );
    }

    #[tokio::test]
    async fn test_empty_submission_makes_no_call() {
        let session = EstimateSession::new(ScriptedService::new());

        for input in ["", "    ", "\n"] {
            let result = session.submit(input).await;
            assert_eq!(
                result,
                Err(SubmitError::Invalid(ValidationError::EmptyDescription))
            );
        }

        assert_eq!(session.state().await, RequestState::Idle);
        assert_eq!(session.notice().await, Some(VALIDATION_MESSAGE));
        assert_eq!(session.service().calls(), 0);
    }

    #[tokio::test]
    async fn test_failure_then_resubmission() {
        let service = ScriptedService::gated()
            .respond(Err(ServiceError::Unavailable("connection reset".to_string())))
            .respond_json(EXPLAINER_JSON);
        let session = EstimateSession::new(service);

        session.service().release();
        let state = session.submit("Product launch teaser").await.unwrap();
        assert_eq!(state, RequestState::Failed(FAILURE_MESSAGE.to_string()));

        let resubmit = session.submit("Product launch teaser");
        let observe = async {
            while !session.state().await.is_pending() {
                tokio::task::yield_now().await;
            }
            let pending = session.state().await;
            session.service().release();
            pending
        };
        let (settled, pending) = futures::join!(resubmit, observe);

        assert_eq!(pending, RequestState::Pending);
        assert!(settled.unwrap().quote().is_some());
        assert_eq!(session.service().calls(), 2);
    }

    #[tokio::test]
    async fn test_malformed_payload_fails() {
        let session = EstimateSession::new(ScriptedService::new().respond_json(
            r#"{"estimatedCostRange":"$500","timelineEstimate":"1 week","assumptions":"None"}"#,
        ));

        let state = session.submit("Lyric video").await.unwrap();
        assert_eq!(state, RequestState::Failed(FAILURE_MESSAGE.to_string()));
    }

    #[tokio::test]
    async fn test_no_call_while_pending() {
        let session = EstimateSession::new(ScriptedService::gated().respond_json(EXPLAINER_JSON));

        let first = session.submit("First idea");
        let second = async {
            while !session.state().await.is_pending() {
                tokio::task::yield_now().await;
            }
            let result = session.submit("Second idea").await;
            session.service().release();
            result
        };
        let (first, second) = futures::join!(first, second);

        assert_eq!(second, Err(SubmitError::Busy));
        assert!(first.unwrap().quote().is_some());
        assert_eq!(session.service().calls(), 1);
    }

    #[tokio::test]
    async fn test_abandoned_response_is_discarded() {
        let session = EstimateSession::new(ScriptedService::gated().respond_json(EXPLAINER_JSON));

        let submit = session.submit("Animated logo");
        let navigate_away = async {
            while !session.state().await.is_pending() {
                tokio::task::yield_now().await;
            }
            session.abandon().await;
            session.service().release();
        };
        let (late, ()) = futures::join!(submit, navigate_away);

        assert_eq!(late, Err(SubmitError::Abandoned));
        assert_eq!(session.state().await, RequestState::Idle);
    }

    #[tokio::test]
    async fn test_abandoned_response_does_not_report_next_request() {
        let service = ScriptedService::gated()
            .respond(Err(ServiceError::Unavailable("late".to_string())))
            .respond_json(EXPLAINER_JSON);
        let session = EstimateSession::new(service);

        let first = session.submit("First idea");
        let second = async {
            while !session.state().await.is_pending() {
                tokio::task::yield_now().await;
            }
            session.abandon().await;
            session.submit("Second idea").await
        };
        let release = async {
            while session.service().calls() < 2 {
                tokio::task::yield_now().await;
            }
            // First waiter is woken first
            session.service().release();
            session.service().release();
        };
        let (first, second, ()) = futures::join!(first, second, release);

        assert_eq!(first, Err(SubmitError::Abandoned));
        assert!(second.unwrap().quote().is_some());
        assert!(session.state().await.quote().is_some());
        assert_eq!(session.service().calls(), 2);
    }

    #[tokio::test]
    async fn test_custom_profile_reaches_service() {
        let session = EstimateSession::new(ScriptedService::new().respond_json(EXPLAINER_JSON))
            .with_profile(EstimatorProfile::default().with_hourly_rate(90));

        session.submit("Title sequence").await.unwrap();
        let request = session.service().last_request().unwrap();
        assert!(request.system_instruction.contains("$90/hour"));
        assert_eq!(session.profile().hourly_rate_usd, 90);
    }
}
