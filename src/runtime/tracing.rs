/// Initializes the tracing/logging infrastructure for the application.
///
/// This sets up structured logging using the `tracing` crate with:
/// - **Environment-based filtering**: Controlled via `RUST_LOG` environment variable
/// - **Compact formatting**: Spans shown inline, module paths hidden
/// - **Stderr output**: Standard output is reserved for the demonstration lines
///
/// # Environment Variables
///
/// Set `RUST_LOG` to control log verbosity:
/// - `RUST_LOG=info` - Show each completed order, payment and listing
/// - `RUST_LOG=debug` - Also show every pizza stage, charge and shelved book
/// - `RUST_LOG=pattern_recipe::payment=debug` - Debug only for the payment module
///
/// With `RUST_LOG` unset only errors are logged.
///
/// # Example
///
/// ```ignore
/// setup_tracing();
/// tracing::info!("Application started");
/// ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
