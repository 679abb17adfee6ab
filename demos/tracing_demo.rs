//! Demonstrates the trace events emitted while combining validations
//!
//! Run with: cargo run --example tracing_demo --features tracing

use accrue::Validation;

fn port(raw: &str) -> Validation<u16, String> {
    raw.parse::<u16>()
        .map_err(|e| format!("port '{}': {}", raw, e))
        .into()
}

fn host(raw: &str) -> Validation<String, String> {
    if raw.is_empty() {
        Validation::failure("host must not be empty".to_string())
    } else {
        Validation::success(raw.to_string())
    }
}

fn workers(raw: &str) -> Validation<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Validation::failure("workers must be at least 1".to_string()),
        Ok(n) => Validation::success(n),
        Err(e) => Validation::failure(format!("workers '{}': {}", raw, e)),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    tracing::info!("Validating a good configuration");
    let good = host("localhost")
        .combine(port("8080"))
        .combine(workers("4"))
        .apply(|host, port, workers| format!("{}:{} x{}", host, port, workers));
    tracing::info!("Result: {}", good.map_err(|errors| errors.to_string()));

    tracing::info!("Validating a broken configuration");
    let bad = host("")
        .combine(port("http"))
        .combine(workers("0"))
        .apply(|host, port, workers| format!("{}:{} x{}", host, port, workers));
    tracing::info!("Result: {}", bad.map_err(|errors| errors.to_string()));
}
