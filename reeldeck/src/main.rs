use reeldeck::app::App;

const APP_TITLE: &str = "ReelDeck";

/// eframe wrapper: pumps async results, advances the playback clock, renders.
struct ReelDeckApp {
    app: App,
}

impl ReelDeckApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Thumbnails and portraits arrive over HTTP via the image loaders.
        egui_extras::install_image_loaders(&cc.egui_ctx);
        Self { app: App::new() }
    }
}

impl eframe::App for ReelDeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();

        let dt = ctx.input(|i| i.stable_dt);
        self.app.handle_playback_tick(dt);

        reeldeck::ui::render(ctx, &mut self.app);

        // Keep the playback clock and pending async results flowing even
        // without input events.
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.app.on_exit();
    }
}

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("reeldeck=info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([420.0, 760.0])
            .with_min_inner_size([360.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(ReelDeckApp::new(cc)))),
    )
}
