//! Tracks the polled BTC/USD rate along with its direction, loading and error state.

use std::future::Future;
use std::time::Duration;

use dioxus_logger::tracing;

use crate::error::SpotPriceError;
use crate::price_providers::PriceProvider;

/// The only error text the user ever sees.
pub const RATE_NOT_RECEIVED: &str = "Price was not received from server";

/// Which way the rate moved on the last successful fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::EnumIs)]
pub enum Direction {
    #[default]
    Up,
    Down,
}

/// The state behind the live rate line of the converter.
///
/// Starts out loading with a rate of zero. The first fetch to resolve, whether
/// it succeeds or not, ends the loading phase. A failed fetch never touches
/// the held rate or direction.
#[derive(Debug, Clone, PartialEq)]
pub struct SpotRate {
    rate: f64,
    direction: Direction,
    loading: bool,
    error: Option<&'static str>,
}

impl Default for SpotRate {
    fn default() -> Self {
        Self::new()
    }
}

impl SpotRate {
    pub fn new() -> Self {
        Self {
            rate: 0.0,
            direction: Direction::default(),
            loading: true,
            error: None,
        }
    }

    /// The last successfully fetched rate in USD per BTC, zero until one arrives.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    /// What the rate line shows: the error text if the last fetch failed, otherwise the rate.
    pub fn display_text(&self) -> String {
        match self.error {
            Some(msg) => msg.to_string(),
            None => self.rate.to_string(),
        }
    }

    /// Records a freshly fetched rate.
    ///
    /// The direction is `Up` only when the new rate is strictly greater than
    /// the one held before; an unchanged rate counts as `Down`.
    pub fn record_rate(&mut self, rate: f64) {
        let previous = self.rate;
        self.direction = if rate > previous {
            Direction::Up
        } else {
            Direction::Down
        };
        if rate != previous {
            self.rate = rate;
        }
        self.loading = false;
        self.error = None;
        tracing::debug!("spot rate {} ({:?})", rate, self.direction);
    }

    /// Records a failed fetch. The held rate and direction are kept.
    pub fn record_failure(&mut self, err: &SpotPriceError) {
        tracing::warn!("spot rate fetch failed: {}", err);
        self.error = Some(RATE_NOT_RECEIVED);
        self.loading = false;
    }

    /// Applies the outcome of one fetch.
    pub fn apply(&mut self, outcome: Result<f64, SpotPriceError>) {
        match outcome {
            Ok(rate) => self.record_rate(rate),
            Err(e) => self.record_failure(&e),
        }
    }
}

/// Fetches once from `provider` and folds the outcome into `state`.
pub async fn poll_once<P: PriceProvider>(provider: &P, state: &mut SpotRate) {
    let outcome = provider.get_spot_price().await;
    state.apply(outcome);
}

/// Polls `provider` forever, handing every new state to `publish`.
///
/// The first fetch starts right away. Each later fetch starts `interval`
/// after the previous one finished, so fetches never overlap and the
/// schedule does not depend on the values it produces. `sleep` supplies the
/// platform's timer. Dropping the returned future stops polling, including
/// any fetch in flight.
pub async fn run_poller<P, S, F>(
    provider: &P,
    interval: Duration,
    sleep: S,
    mut publish: impl FnMut(SpotRate),
) where
    P: PriceProvider,
    S: Fn(Duration) -> F,
    F: Future<Output = ()>,
{
    let mut state = SpotRate::new();
    loop {
        poll_once(provider, &mut state).await;
        publish(state.clone());
        sleep(interval).await;
    }
}
