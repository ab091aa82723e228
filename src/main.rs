fn main() -> Result<(), eframe::Error> {
    // Set up logging for development
    env_logger::init();

    // File saving runs on background tokio tasks; keep a runtime entered for
    // the lifetime of the UI.
    #[cfg(not(target_arch = "wasm32"))]
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("failed to start tokio runtime");
    #[cfg(not(target_arch = "wasm32"))]
    let _guard = runtime.enter();

    // Run the network tool
    network_export::run_app()
}
