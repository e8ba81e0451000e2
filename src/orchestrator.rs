use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, error, info, info_span, Instrument};

use crate::backend::ReportBackend;
use crate::form::FormSource;
use crate::presenter::Presenter;
use crate::timezone::{tz_hours, OffsetClock};
use crate::types::{RequestPayload, ResponseOutcome, Trigger, UiState};

// Result of one submit call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub generation: u64,
    /// False when a newer submission was issued before this one resolved.
    pub applied: bool,
}

/// Turns a user action into one backend request and drives the presenter
/// through `Scanning` to `ResultShown`.
///
/// Submissions may overlap. Each takes a new generation number and only the
/// latest generation is allowed to render its outcome, so a slow earlier
/// response can never overwrite a newer one.
pub struct RequestOrchestrator {
    form: Arc<dyn FormSource>,
    clock: Arc<dyn OffsetClock>,
    backend: Arc<dyn ReportBackend>,
    presenter: Arc<dyn Presenter>,
    latest: Mutex<u64>,
}

impl RequestOrchestrator {
    pub fn new(
        form: Arc<dyn FormSource>,
        clock: Arc<dyn OffsetClock>,
        backend: Arc<dyn ReportBackend>,
        presenter: Arc<dyn Presenter>,
    ) -> Self {
        Self {
            form,
            clock,
            backend,
            presenter,
            latest: Mutex::new(0),
        }
    }

    pub fn latest_generation(&self) -> u64 {
        *self.latest.lock()
    }

    pub async fn submit(&self, trigger: Trigger) -> Submission {
        let generation = {
            let mut latest = self.latest.lock();
            *latest += 1;
            self.presenter.render(&UiState::scanning());
            *latest
        };

        let span = info_span!("submit", generation, trigger = trigger.as_str());
        self.run(generation).instrument(span).await
    }

    async fn run(&self, generation: u64) -> Submission {
        // fields are read as they are now; nothing is validated
        let form = self.form.read();
        let tz = tz_hours(self.clock.offset_minutes());
        let payload = RequestPayload::assemble(form, tz);
        debug!(tz, struggle = %payload.struggle, "dispatching report request");

        let outcome = self.backend.calculate(&payload).await;
        if let ResponseOutcome::TransportFailure { cause } = &outcome {
            error!(error = %cause, "report request failed");
        }

        let latest = self.latest.lock();
        if *latest != generation {
            debug!(latest = *latest, outcome = outcome.kind(), "discarding stale outcome");
            return Submission {
                generation,
                applied: false,
            };
        }
        info!(outcome = outcome.kind(), "report request finished");
        self.presenter.render(&UiState::from_outcome(&outcome));

        Submission {
            generation,
            applied: true,
        }
    }
}
