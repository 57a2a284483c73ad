use api::prefs::converter_prefs::ConverterPrefs;
use api::spot_rate::run_poller;
use api::spot_rate::SpotRate;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::compat;

/// Polls the configured provider for the spot price for as long as the
/// calling component is mounted.
///
/// Scheduling lives in [`run_poller`]. Unmounting the component drops the
/// coroutine along with any request still in flight.
pub fn use_spot_rate(prefs: ConverterPrefs) -> Signal<SpotRate> {
    let mut spot_rate = use_signal(SpotRate::new);

    use_coroutine(move |_rx: UnboundedReceiver<()>| async move {
        let provider = prefs.provider();
        tracing::info!(
            "polling {} every {:?}",
            provider.name(),
            prefs.poll_interval()
        );
        run_poller(&provider, prefs.poll_interval(), compat::sleep, |next| {
            spot_rate.set(next)
        })
        .await;
    });

    spot_rate
}
