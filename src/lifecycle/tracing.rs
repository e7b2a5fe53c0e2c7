//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a `tracing-subscriber` formatter. Verbosity comes
//! from `RUST_LOG`; module paths are hidden (`with_target(false)`) because
//! every actor event already carries a `component_type` field.
//!
//! ## Usage Examples
//!
//! ```bash
//! # State changes only: cars added, sales recorded and undone, shutdown
//! RUST_LOG=info cargo run
//!
//! # Every command with its full payload
//! RUST_LOG=debug cargo run
//!
//! # Just the actor plumbing
//! RUST_LOG=dealership::framework=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: startup, shutdown and number of commands handled
//! - **State changes** (`info`): car added or removed, sale recorded or undone, catalog loaded
//! - **Reads and payloads** (`debug`): every command as it reaches the actor
//! - **Anomalies** (`warn`): rejected commands, sales for unknown cars, unresolved price index entries
//!
//! Client methods are `#[instrument]`ed; the actor logs from its own task, so
//! with `RUST_LOG=debug` a sale shows up as two lines:
//!
//! ```text
//! DEBUG record_sale{customer_id=CustomerId(1) car_id=CarId(1) amount=25000.0 sold_at=None}:request{...}: Sending request
//! INFO Sale recorded sale_id=sale_1 car_id=car_1 size=1
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
