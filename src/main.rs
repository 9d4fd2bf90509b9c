use anyhow::Context as _;
use gpui::{App, AppContext as _, Application, Bounds, WindowBounds, WindowOptions, px, size};
use ruler::app::RulerApp;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ruler=info")),
        )
        .init();

    Application::new().run(|cx: &mut App| {
        gpui_component::init(cx);

        if let Err(e) = open_main_window(cx) {
            tracing::error!("{:#}", e);
            cx.quit();
            return;
        }
        cx.activate(true);
    });
}

fn open_main_window(cx: &mut App) -> anyhow::Result<()> {
    let bounds = Bounds::centered(None, size(px(1024.0), px(360.0)), cx);
    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        window_min_size: Some(size(px(800.0), px(300.0))),
        ..Default::default()
    };

    cx.open_window(options, |window, cx| cx.new(|cx| RulerApp::new(window, cx)))
        .context("failed to open ruler window")?;
    Ok(())
}
