//! Estimate request state machine.
//!
//! ```text
//! Idle ──submit(valid)──▶ Pending ──success──▶ Succeeded
//!                           │  ╰────failure──▶ Failed
//!                           ╰──abandon──▶ Idle
//! Succeeded | Failed ──submit(valid)──▶ Pending
//! any ──submit(invalid)──▶ unchanged, notice set
//! ```

use derive_more::Display;
use reelquote_types::{
    FAILURE_MESSAGE, ProjectDescription, Quote, RequestState, ServiceError, SubmitError,
};
use tracing::{debug, error, info};

/// Identity of one accepted submission.
///
/// Tickets increase monotonically within a flow. Only the ticket of the
/// in-flight submission can resolve it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display("#{_0}")]
pub struct Ticket(u64);

impl Ticket {
    /// Returns the raw sequence number.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// An accepted submission, ready to be sent to the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Identity to resolve the submission with.
    pub ticket: Ticket,
    /// The validated description.
    pub description: ProjectDescription,
}

/// Lifecycle of estimate requests for one input form.
#[derive(Debug, Default)]
pub struct EstimateFlow {
    state: RequestState,
    notice: Option<&'static str>,
    last_ticket: u64,
    in_flight: Option<Ticket>,
}

impl EstimateFlow {
    /// Creates an idle flow.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current request state.
    #[must_use]
    pub const fn state(&self) -> &RequestState {
        &self.state
    }

    /// Returns the validation notice from the last rejected submission.
    ///
    /// Cleared by the next accepted submission.
    #[must_use]
    pub const fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    /// Returns true if a submission would be accepted (nothing in flight).
    #[must_use]
    pub const fn can_submit(&self) -> bool {
        self.in_flight.is_none()
    }

    /// Returns the ticket of the in-flight submission.
    #[must_use]
    pub const fn in_flight(&self) -> Option<Ticket> {
        self.in_flight
    }

    /// Accepts a description and moves to [`RequestState::Pending`].
    ///
    /// Any previous outcome is cleared immediately.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Busy`] while a request is in flight, or
    /// [`SubmitError::Invalid`] for a blank description. Neither changes
    /// the state; a blank description sets the notice.
    pub fn submit(&mut self, input: &str) -> Result<Submission, SubmitError> {
        if let Some(ticket) = self.in_flight {
            debug!(%ticket, "submission refused, request in flight");
            return Err(SubmitError::Busy);
        }

        let description = match ProjectDescription::parse(input) {
            Ok(description) => description,
            Err(err) => {
                self.notice = Some(err.user_message());
                return Err(err.into());
            }
        };

        self.last_ticket += 1;
        let ticket = Ticket(self.last_ticket);
        self.notice = None;
        self.in_flight = Some(ticket);
        self.state = RequestState::Pending;
        debug!(%ticket, chars = description.char_count(), "submission accepted");

        Ok(Submission {
            ticket,
            description,
        })
    }

    /// Applies the outcome of a submission.
    ///
    /// Returns false and leaves the state untouched if `ticket` is not the
    /// in-flight submission (abandoned or already resolved).
    pub fn resolve(&mut self, ticket: Ticket, outcome: Result<Quote, ServiceError>) -> bool {
        if self.in_flight != Some(ticket) {
            debug!(%ticket, "discarding stale response");
            return false;
        }
        self.in_flight = None;

        self.state = match outcome {
            Ok(quote) => {
                info!(%ticket, items = quote.breakdown.len(), "estimate ready");
                RequestState::Succeeded(quote)
            }
            Err(err) => {
                error!(%ticket, error = %err, "Error generating quote");
                RequestState::Failed(FAILURE_MESSAGE.to_string())
            }
        };
        true
    }

    /// Drops the in-flight submission and returns to [`RequestState::Idle`].
    ///
    /// Its response, if it ever arrives, is discarded. Does nothing when no
    /// request is in flight.
    pub fn abandon(&mut self) {
        if let Some(ticket) = self.in_flight.take() {
            debug!(%ticket, "submission abandoned");
            self.state = RequestState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelquote_types::{BreakdownItem, VALIDATION_MESSAGE, ValidationError};

    fn sample_quote(cost: &str) -> Quote {
        Quote::new(
            cost,
            "1 week",
            vec![BreakdownItem::new("Animation", "$400")],
            "Single revision round",
        )
    }

    #[test]
    fn test_new_flow_is_idle() {
        let flow = EstimateFlow::new();
        assert_eq!(flow.state(), &RequestState::Idle);
        assert!(flow.notice().is_none());
        assert!(flow.can_submit());
    }

    #[test]
    fn test_blank_submission_stays_idle() {
        let mut flow = EstimateFlow::new();
        for input in ["", "   ", "\n\t"] {
            let result = flow.submit(input);
            assert_eq!(
                result,
                Err(SubmitError::Invalid(ValidationError::EmptyDescription))
            );
            assert_eq!(flow.state(), &RequestState::Idle);
            assert_eq!(flow.notice(), Some(VALIDATION_MESSAGE));
            assert!(flow.in_flight().is_none());
        }
    }

    #[test]
    fn test_success_path() {
        let mut flow = EstimateFlow::new();
        let submission = flow.submit("A 30-second explainer video").unwrap();
        assert_eq!(flow.state(), &RequestState::Pending);
        assert!(!flow.can_submit());
        assert_eq!(submission.description.as_str(), "A 30-second explainer video");

        assert!(flow.resolve(submission.ticket, Ok(sample_quote("$500-$750"))));
        assert_eq!(
            flow.state(),
            &RequestState::Succeeded(sample_quote("$500-$750"))
        );
        assert!(flow.can_submit());
    }

    #[test]
    fn test_failure_uses_generic_message() {
        let mut flow = EstimateFlow::new();
        let submission = flow.submit("Wedding highlight reel").unwrap();
        let err = ServiceError::Unavailable("dns error: secret-host.internal".to_string());

        assert!(flow.resolve(submission.ticket, Err(err)));
        assert_eq!(
            flow.state(),
            &RequestState::Failed(FAILURE_MESSAGE.to_string())
        );
        assert!(!flow.state().error_message().unwrap().contains("secret-host"));
    }

    #[test]
    fn test_submit_while_pending_is_busy() {
        let mut flow = EstimateFlow::new();
        let first = flow.submit("First").unwrap();

        assert_eq!(flow.submit("Second"), Err(SubmitError::Busy));
        assert_eq!(flow.submit(""), Err(SubmitError::Busy));
        assert_eq!(flow.in_flight(), Some(first.ticket));
        assert_eq!(flow.state(), &RequestState::Pending);
    }

    #[test]
    fn test_resubmission_clears_previous_outcome() {
        let mut flow = EstimateFlow::new();
        let first = flow.submit("First").unwrap();
        flow.resolve(first.ticket, Err(ServiceError::EmptyResponse));
        assert!(flow.state().error_message().is_some());

        let second = flow.submit("Second").unwrap();
        assert_eq!(flow.state(), &RequestState::Pending);
        assert!(second.ticket > first.ticket);

        flow.resolve(second.ticket, Ok(sample_quote("$200")));
        flow.submit("Third").unwrap();
        assert_eq!(flow.state(), &RequestState::Pending);
        assert!(flow.state().quote().is_none());
    }

    #[test]
    fn test_invalid_submission_keeps_outcome() {
        let mut flow = EstimateFlow::new();
        let submission = flow.submit("Logo sting").unwrap();
        flow.resolve(submission.ticket, Ok(sample_quote("$150")));

        assert!(flow.submit(" ").is_err());
        assert_eq!(flow.state().quote(), Some(&sample_quote("$150")));
        assert_eq!(flow.notice(), Some(VALIDATION_MESSAGE));

        flow.submit("Logo sting v2").unwrap();
        assert!(flow.notice().is_none());
    }

    #[test]
    fn test_stale_ticket_is_discarded() {
        let mut flow = EstimateFlow::new();
        let first = flow.submit("First").unwrap();
        flow.abandon();
        assert_eq!(flow.state(), &RequestState::Idle);

        let second = flow.submit("Second").unwrap();
        assert!(!flow.resolve(first.ticket, Ok(sample_quote("$1"))));
        assert_eq!(flow.state(), &RequestState::Pending);

        assert!(flow.resolve(second.ticket, Ok(sample_quote("$2"))));
        assert_eq!(flow.state().quote(), Some(&sample_quote("$2")));
    }

    #[test]
    fn test_resolve_twice_is_ignored() {
        let mut flow = EstimateFlow::new();
        let submission = flow.submit("Reel").unwrap();
        assert!(flow.resolve(submission.ticket, Ok(sample_quote("$1"))));
        assert!(!flow.resolve(submission.ticket, Err(ServiceError::EmptyResponse)));
        assert!(flow.state().quote().is_some());
    }

    #[test]
    fn test_abandon_when_idle_is_noop() {
        let mut flow = EstimateFlow::new();
        let submission = flow.submit("Reel").unwrap();
        flow.resolve(submission.ticket, Ok(sample_quote("$1")));

        flow.abandon();
        assert!(flow.state().quote().is_some());
    }

    #[test]
    fn test_ticket_display() {
        let mut flow = EstimateFlow::new();
        let submission = flow.submit("Reel").unwrap();
        assert_eq!(submission.ticket.to_string(), "#1");
        assert_eq!(submission.ticket.get(), 1);
    }
}
