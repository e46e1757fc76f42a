//! Trace relay session loop.

use coral_admin::{TraceOptions, TraceStreams};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::error::TraceRelayError;
use super::record::TraceRecord;
use super::sink::TextSink;

/// Relay the admin API's live trace stream to one UI client.
///
/// Subscribes to the trace stream with the given `options`, then forwards
/// one compact record per event until the shutdown signal fires, the stream
/// ends, or any error occurs. Every error is fatal to the session: nothing
/// is retried or re-delivered, and no write happens after the terminal
/// transition. Cancellation and stream exhaustion return `Ok(())`; the
/// caller owns closing the underlying connection afterwards.
pub async fn stream_trace<C, S>(
    mut shutdown: watch::Receiver<bool>,
    client: &C,
    sink: &mut S,
    options: TraceOptions,
) -> Result<(), TraceRelayError>
where
    C: TraceStreams,
    S: TextSink,
{
    let mut events = client.service_trace(shutdown.clone(), options);

    loop {
        // A shutdown that fired before this session subscribed still wins.
        if *shutdown.borrow() {
            info!("Trace session cancelled");
            return Ok(());
        }

        tokio::select! {
            // Cancellation is polled first so a fast-producing stream
            // cannot starve termination. A dropped shutdown sender counts
            // as cancellation.
            biased;

            _ = shutdown.changed() => {
                info!("Trace session cancelled");
                return Ok(());
            }
            item = events.recv() => match item {
                None => {
                    info!("Trace stream closed");
                    return Ok(());
                }
                Some(Err(e)) => {
                    warn!(error = %e, "Trace stream reported an error");
                    return Err(TraceRelayError::Source(e));
                }
                Some(Ok(trace)) => {
                    let record = TraceRecord::from_trace(&trace);
                    let payload = serde_json::to_vec(&record)
                        .inspect_err(|e| warn!(error = %e, "Failed to encode trace record"))?;
                    sink.write_text(payload).await.map_err(|e| {
                        warn!(error = %e, "Push channel write failed");
                        TraceRelayError::Transport(e.to_string())
                    })?;
                    debug!(
                        api = %record.func_name,
                        status = record.status_code,
                        "Trace record delivered"
                    );
                }
            }
        }
    }
}
