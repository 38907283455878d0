//! Generation controller: form input in, [`ResultsView`] out.
//!
//! Adapters (terminal, browser) own the presentation; the controller owns the
//! busy flag, the cosmetic pause and the failure policy. The pause goes through
//! a [`Scheduler`] so tests never wait on a real timer.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::Result;
use crate::format::format_value;
use crate::generator::generate_for;
use crate::prng::BitSource;
use crate::request::{FormInput, GenerationRequest};
use crate::stats::{summarize, StatisticsSummary};

/// The only failure text users ever see.
pub const DECOHERENCE_MESSAGE: &str = "Quantum decoherence detected! Please try again.";

/// Pause before results appear, for effect.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

pub trait Scheduler {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Resolves immediately. Used by tests and `--delay-ms 0` style runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Immediate;

impl Scheduler for Immediate {
    fn sleep(&self, _duration: Duration) -> impl Future<Output = ()> {
        std::future::ready(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Generating,
}

/// Everything the results area and statistics panel need to draw.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResultsView {
    pub values: Vec<u32>,
    pub entries: Vec<String>,
    /// `None` keeps the statistics panel hidden.
    pub statistics: Option<StatisticsSummary>,
    /// Replaces the results area when set.
    pub error: Option<String>,
}

impl ResultsView {
    pub fn render(request: &GenerationRequest, values: Vec<u32>) -> Self {
        let entries = values
            .iter()
            .map(|&v| format_value(v, request.format(), request.bit_width()))
            .collect();
        let statistics = summarize(&values);
        Self {
            values,
            entries,
            statistics,
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn stats_visible(&self) -> bool {
        self.statistics.is_some()
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

// Resets the phase even if the generation future is dropped mid-pause.
struct PhaseGuard<'a>(&'a Cell<Phase>);

impl Drop for PhaseGuard<'_> {
    fn drop(&mut self) {
        self.0.set(Phase::Idle);
    }
}

pub struct Controller<S, B> {
    scheduler: S,
    source: RefCell<B>,
    delay: Duration,
    phase: Cell<Phase>,
}

impl<S: Scheduler, B: BitSource> Controller<S, B> {
    pub fn new(scheduler: S, source: B) -> Self {
        Self {
            scheduler,
            source: RefCell::new(source),
            delay: DEFAULT_DELAY,
            phase: Cell::new(Phase::Idle),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn phase(&self) -> Phase {
        self.phase.get()
    }

    pub fn is_busy(&self) -> bool {
        self.phase.get() == Phase::Generating
    }

    /// Run one generation from raw form text.
    ///
    /// Returns `None` when a generation is already in flight.
    pub async fn generate(&self, input: &FormInput) -> Option<ResultsView> {
        self.run(GenerationRequest::from_form(input)).await
    }

    /// Same as [`Controller::generate`] for callers that already hold a
    /// validated request.
    pub async fn generate_request(&self, request: GenerationRequest) -> Option<ResultsView> {
        self.run(Ok(request)).await
    }

    async fn run(&self, request: Result<GenerationRequest>) -> Option<ResultsView> {
        if self.is_busy() {
            debug!("generation already in flight; ignoring trigger");
            return None;
        }
        self.phase.set(Phase::Generating);
        let _guard = PhaseGuard(&self.phase);

        self.scheduler.sleep(self.delay).await;

        let view = match request {
            Ok(request) => {
                debug!(
                    bit_width = request.bit_width(),
                    count = request.count(),
                    format = %request.format(),
                    "measuring"
                );
                let values = generate_for(&mut *self.source.borrow_mut(), &request);
                ResultsView::render(&request, values)
            }
            Err(e) => {
                warn!(error = %e, "generation failed");
                ResultsView::failed(DECOHERENCE_MESSAGE)
            }
        };
        Some(view)
    }
}
