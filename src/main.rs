use std::path::PathBuf;

use bevy::prelude::*;
use bevy_rapier2d::render::RapierDebugRenderPlugin;
use clap::Parser;

use rain_walker::{GameConfig, GamePlugin};

#[derive(Parser, Debug)]
#[command(about = "A stick-figure walker in a physics-driven rain shower", version)]
struct Args {
    /// Path to the RON game configuration.
    #[arg(long, default_value = "assets/config/game.ron")]
    config: PathBuf,
    /// Override the configured raindrops-per-second rate (clamped to 1..=50).
    #[arg(long)]
    rain_rate: Option<i64>,
    /// Exit automatically after this many seconds (0 disables; useful for smoke runs).
    #[arg(long)]
    auto_close: Option<f32>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (mut cfg, load_err) = GameConfig::load_or_default(&args.config);
    if let Some(rate) = args.rain_rate {
        cfg.rain.rate = rate;
    }
    if let Some(secs) = args.auto_close {
        anyhow::ensure!(secs >= 0.0, "--auto-close must be non-negative");
        cfg.window.auto_close = secs;
    }
    let startup_warnings = {
        let mut w: Vec<String> = Vec::new();
        if let Some(e) = load_err {
            w.push(format!(
                "config {}: {e}; using defaults",
                args.config.display()
            ));
        }
        w.extend(cfg.validate());
        w
    };

    let mut app = App::new();
    app.insert_resource(ClearColor(cfg.background_color()))
        .insert_resource(StartupWarnings(startup_warnings))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_systems(Startup, report_startup_warnings);
    if cfg.rapier_debug {
        app.add_plugins(RapierDebugRenderPlugin::default());
    }
    app.insert_resource(cfg).add_plugins(GamePlugin).run();
    Ok(())
}

/// Config problems collected before logging was up; drained on the first frame.
#[derive(Resource)]
struct StartupWarnings(Vec<String>);

fn report_startup_warnings(warnings: Res<StartupWarnings>) {
    for w in &warnings.0 {
        warn!("{w}");
    }
}
