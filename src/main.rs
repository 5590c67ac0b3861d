use pattern_recipe::console::StdoutConsole;
use pattern_recipe::demo;
use pattern_recipe::runtime::setup_tracing;
use tracing::info;

fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting application");

    let mut console = StdoutConsole::new();
    demo::run(&mut console).map_err(|e| e.to_string())?;

    info!("Application completed successfully");
    Ok(())
}
