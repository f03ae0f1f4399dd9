use tracing::{Level, Span};

pub async fn record_error<
    T,
    E: std::fmt::Display,
    F: FnOnce() -> R,
    R: std::future::Future<Output = Result<T, E>>,
>(
    level: Level,
    func: F,
) -> Result<T, E> {
    let result = func().await;
    if let Err(ref e) = result {
        insert_error_fields(level, e);
    }
    result
}

/// Marks the current span as failed. The span must declare `error`,
/// `error.level` and `error.message` fields for the values to be kept.
pub fn insert_error_fields(level: Level, error: impl std::fmt::Display) {
    Span::current().record("error", &tracing::field::display("true"));
    Span::current().record("error.level", &tracing::field::display(level));
    Span::current().record("error.message", &tracing::field::display(error));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn record_error_passes_result_through() {
        let ok: Result<u32, String> = record_error(Level::WARN, || async { Ok(1) }).await;
        assert_eq!(ok, Ok(1));
        let err: Result<u32, String> = record_error(Level::ERROR, || async { Err("boom".to_string()) }).await;
        assert_eq!(err, Err("boom".to_string()));
    }
}
