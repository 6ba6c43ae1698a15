#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Context as _;
use tipdesk_business::ApiConfig;
use tipdesk_ui::state::State;

mod alloc {
    #[global_allocator]
    static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;
}

fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();

    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("egui_winit::clipboard", log::LevelFilter::Off)
        .init();
    if let Err(err) = dotenv {
        log::debug!("no .env loaded: {err}");
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;
    let config = ApiConfig::from_env().context("invalid API configuration")?;
    log::info!("using API at {}", config.base_url());
    let state = State::new(config, runtime.handle().clone())?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 760.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Tipdesk Admin",
        native_options,
        Box::new(move |_cc| Ok(Box::new(tipdesk_ui::TipdeskApp::new(state)))),
    )
    .map_err(|err| anyhow::anyhow!("{err}"))?;

    drop(runtime);
    Ok(())
}
