use std::future::Future;

/// Runs `body` to completion and then `cleanup`, whether the body returned
/// `Ok`, `Err` or bailed out early. The body's output is handed back untouched
/// once cleanup has finished. A panic in `body` or dropping the future before
/// it completes skips `cleanup`; only `Drop` guards held by the body run then.
pub async fn with_cleanup<T, B, C>(body: B, cleanup: C) -> T
where
    B: Future<Output = T>,
    C: Future<Output = ()>,
{
    let output = body.await;
    cleanup.await;
    output
}
