use korean_prep::{AppConfig, KoreanPrepApp};

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use tracing_subscriber::EnvFilter;

    // RUST_LOG wins, info otherwise. Also picks up `log` records.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();
    log::info!("starting {} v{}", config.window_title, env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size([900.0, 700.0]),
        ..Default::default()
    };
    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(KoreanPrepApp::new(cc, config)?))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    eframe::WebLogger::init(log::LevelFilter::Info).ok();

    let web_options = eframe::WebOptions::default();
    wasm_bindgen_futures::spawn_local(async {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("no document to mount into");
            return;
        };
        let canvas = match document
            .get_element_by_id("the_canvas_id")
            .map(|el| el.dyn_into::<web_sys::HtmlCanvasElement>())
        {
            Some(Ok(canvas)) => canvas,
            _ => {
                log::error!("#the_canvas_id is missing or not a canvas");
                return;
            }
        };

        // no env vars in the browser
        let config = AppConfig::default();
        let result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| Ok(Box::new(KoreanPrepApp::new(cc, config)?))),
            )
            .await;
        if let Err(err) = result {
            log::error!("failed to start: {err:?}");
        }
    });
}
