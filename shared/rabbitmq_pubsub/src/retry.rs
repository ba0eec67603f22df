use std::{fmt::Display, future::Future, time::Duration};

///
/// Runs async function until it succeeds, sleeping `retry_interval` between attempts.
///
pub async fn retry<F, Fut, T, E>(retry_interval: Duration, action: &str, async_fn: F) -> T
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let mut attempt = 0_u32;

    loop {
        attempt += 1;

        tracing::info!(attempt, "{action}");
        match async_fn().await {
            Ok(output) => return output,
            Err(err) => tracing::warn!(attempt, %err, "{action} failed"),
        }

        tokio::time::sleep(retry_interval).await;
    }
}
