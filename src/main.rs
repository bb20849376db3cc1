use anyhow::Context;
use log::info;

use timegrid::config;
use timegrid::schedule::ScheduleEditor;
use timegrid::web;

const CONFIG_ENV: &str = "TIMEGRID_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "timegrid.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let port = args
        .get(1)
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    let config_path =
        std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let grid_config = config::load(&config_path)
        .with_context(|| format!("invalid grid configuration ({})", config_path))?;

    info!(
        "grid: {} days, hours {:02}:00-{:02}:00, break at {:02}:00",
        grid_config.day_names.len(),
        grid_config.start_hour,
        grid_config.end_hour + 1,
        grid_config.break_hour
    );

    let editor = ScheduleEditor::new(grid_config)?;

    println!("Starting timegrid on port {}...", port);
    println!("Access the editor at http://localhost:{}", port);

    web::start_server(port, editor).await?;
    Ok(())
}
