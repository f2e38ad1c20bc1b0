mod models;

use anyhow::Result;
use tessella_engine::coords::Vec3;
use tessella_engine::paint::Color;
use tessella_engine::scene::Scene;
use tessella_engine::transform::Pose;
use tessella_engine::window::{WindowConfig, WindowPlatform};

fn main() -> Result<()> {
    tessella_engine::logging::init();

    let mut scene = Scene::new(Color::new(0.0, 0.5, 0.5));

    let at = |x: f32, y: f32, scale: f32| Pose::new(Vec3::new(x, y, 0.0), 0.0, scale);

    scene.add_model(models::fir_tree(at(-0.15, -0.8, 0.6))?);
    scene.add_model(models::fir_tree(at(-0.8, -0.6, 0.6))?);
    scene.add_model(models::house(at(-0.25, -0.6, 0.5))?);
    scene.add_model(models::fir_tree(at(0.2, 0.6, 0.3))?);
    scene.add_model(models::fir_tree(at(-0.15, 0.4, 0.4))?);
    scene.add_model(models::house(at(0.5, 0.5, 0.25))?);
    scene.add_model(models::fir_tree(at(0.5, 0.3, 0.5))?);

    log::info!("arrow/page keys move the camera, 0 outlines, 1 fills, Q quits");

    let mut platform = WindowPlatform::new(WindowConfig {
        title: "tessella viewer".to_string(),
        ..WindowConfig::default()
    })?;

    scene.run(&mut platform)
}
