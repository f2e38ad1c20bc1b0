use anyhow::Result;

use crate::input::{InputEvent, Key};
use crate::paint::{Color, FillMode};

use super::{Camera, Model, Painter};

/// External collaborator for [`Scene::run`].
///
/// `pump` drains every input event pending since the previous call; `present`
/// consumes the frame recorded into the painter. The windowed implementation
/// lives in `window::WindowPlatform`; tests use scripted implementations.
pub trait Platform {
    fn pump(&mut self, out: &mut Vec<InputEvent>) -> Result<()>;

    fn present(&mut self, painter: &Painter, fill_mode: FillMode) -> Result<()>;
}

/// Owns the top-level model list and the camera, and drives the frame loop.
///
/// Model insertion order is paint order: later models paint over earlier
/// ones where geometry overlaps.
#[derive(Debug)]
pub struct Scene {
    models: Vec<Model>,
    camera: Camera,
    background: Color,
    fill_mode: FillMode,
    running: bool,
}

impl Scene {
    pub fn new(background: Color) -> Self {
        Self {
            models: Vec::new(),
            camera: Camera::new(),
            background,
            fill_mode: FillMode::Filled,
            running: true,
        }
    }

    /// Appends a top-level model; it will paint over everything added before.
    pub fn add_model(&mut self, model: Model) {
        self.models.push(model);
    }

    #[inline]
    pub fn models(&self) -> &[Model] {
        &self.models
    }

    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[inline]
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    #[inline]
    pub fn fill_mode(&self) -> FillMode {
        self.fill_mode
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit => self.running = false,
            InputEvent::KeyPressed(key) => self.handle_key(key),
            InputEvent::Other => {}
        }
    }

    /// The closed key mapping: Q quits, 0 switches to outline rendering,
    /// 1 back to filled; every other key is offered to the camera.
    pub fn handle_key(&mut self, key: Key) {
        match key {
            Key::Q => self.running = false,
            Key::Digit0 => self.fill_mode = FillMode::Outline,
            Key::Digit1 => self.fill_mode = FillMode::Filled,
            other => self.camera.handle_key(other),
        }
    }

    /// Records one frame: clear, push the camera translation, draw every
    /// model in list order under it, restore. The transform stack is balanced
    /// again when this returns.
    pub fn draw(&self, painter: &mut Painter) {
        painter.begin(self.background);

        let mut frame = painter.pushed(&self.camera.pose());
        for model in &self.models {
            model.draw(&mut frame);
        }
    }

    /// The program loop: drain pending events, dispatch each, draw, present;
    /// repeat until stopped. Single-threaded and unbounded-rate — presenting
    /// is where any pacing (vsync) happens.
    ///
    /// A quit event received mid-drain still lets the current frame complete;
    /// the loop exits before the next one.
    pub fn run(&mut self, platform: &mut impl Platform) -> Result<()> {
        let mut painter = Painter::new();
        let mut events = Vec::new();

        while self.running {
            events.clear();
            platform.pump(&mut events)?;
            for event in events.drain(..) {
                self.handle_event(event);
            }

            self.draw(&mut painter);
            platform.present(&painter, self.fill_mode)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec3;
    use crate::scene::TriangleMesh;
    use crate::transform::Pose;

    fn leaf_at(x: f32, y: f32) -> Model {
        let mesh = TriangleMesh::new(vec![
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
        ])
        .unwrap();
        Model::leaf(Pose::translation(Vec3::new(x, y, 0.0)), Color::WHITE, mesh)
    }

    // ── key dispatch ──────────────────────────────────────────────────────

    #[test]
    fn quit_key_stops_the_scene() {
        let mut scene = Scene::new(Color::default());
        assert!(scene.is_running());
        scene.handle_key(Key::Q);
        assert!(!scene.is_running());
    }

    #[test]
    fn fill_mode_toggle_round_trips() {
        let mut scene = Scene::new(Color::default());
        assert_eq!(scene.fill_mode(), FillMode::Filled);

        scene.handle_key(Key::Digit0);
        assert_eq!(scene.fill_mode(), FillMode::Outline);

        scene.handle_key(Key::Digit1);
        assert_eq!(scene.fill_mode(), FillMode::Filled);
    }

    #[test]
    fn unrecognized_key_changes_nothing() {
        let mut scene = Scene::new(Color::default());
        scene.handle_key(Key::Space);
        assert!(scene.is_running());
        assert_eq!(scene.fill_mode(), FillMode::Filled);
        assert_eq!(scene.camera().position(), Vec3::ZERO);
    }

    #[test]
    fn movement_keys_reach_the_camera() {
        let mut scene = Scene::new(Color::default());
        scene.handle_event(InputEvent::KeyPressed(Key::ArrowRight));
        assert_eq!(scene.camera().position().x, -0.01);
    }

    // ── frame recording ───────────────────────────────────────────────────

    #[test]
    fn draw_applies_camera_offset_to_every_model() {
        let mut scene = Scene::new(Color::default());
        scene.add_model(leaf_at(0.0, 0.0));
        scene.camera_mut().handle_key(Key::ArrowLeft);

        let mut painter = Painter::new();
        scene.draw(&mut painter);

        assert_eq!(painter.depth(), 0);
        // Local (0,0,0) vertex shifted by the camera translation.
        assert_eq!(painter.triangles()[0].vertices[1], Vec3::new(0.01, 0.0, 0.0));
    }

    #[test]
    fn draw_preserves_model_insertion_order() {
        let mut scene = Scene::new(Color::default());
        scene.add_model(leaf_at(0.0, 0.0));
        scene.add_model(leaf_at(0.25, 0.0));

        let mut painter = Painter::new();
        scene.draw(&mut painter);

        let tris = painter.triangles();
        assert_eq!(tris.len(), 2);
        assert_eq!(tris[1].vertices[1].x, 0.25);
    }

    // ── run loop ──────────────────────────────────────────────────────────

    /// Feeds one scripted event batch per pump and counts presents.
    struct ScriptedPlatform {
        script: Vec<Vec<InputEvent>>,
        pumps: usize,
        presents: usize,
        last_fill_mode: Option<FillMode>,
    }

    impl ScriptedPlatform {
        fn new(script: Vec<Vec<InputEvent>>) -> Self {
            Self {
                script,
                pumps: 0,
                presents: 0,
                last_fill_mode: None,
            }
        }
    }

    impl Platform for ScriptedPlatform {
        fn pump(&mut self, out: &mut Vec<InputEvent>) -> Result<()> {
            if let Some(batch) = self.script.get(self.pumps) {
                out.extend_from_slice(batch);
            }
            self.pumps += 1;
            Ok(())
        }

        fn present(&mut self, painter: &Painter, fill_mode: FillMode) -> Result<()> {
            assert_eq!(painter.depth(), 0, "present saw an unbalanced stack");
            self.presents += 1;
            self.last_fill_mode = Some(fill_mode);
            Ok(())
        }
    }

    #[test]
    fn run_draws_every_iteration_and_stops_on_quit() {
        let mut scene = Scene::new(Color::default());
        scene.add_model(leaf_at(0.0, 0.0));

        let mut platform = ScriptedPlatform::new(vec![
            vec![],
            vec![InputEvent::KeyPressed(Key::Digit0)],
            vec![InputEvent::Other, InputEvent::Quit],
        ]);

        scene.run(&mut platform).unwrap();

        // The quit frame still completes: three pumps, three presents.
        assert_eq!(platform.pumps, 3);
        assert_eq!(platform.presents, 3);
        assert_eq!(platform.last_fill_mode, Some(FillMode::Outline));
        assert!(!scene.is_running());
    }

    #[test]
    fn run_returns_immediately_when_already_stopped() {
        let mut scene = Scene::new(Color::default());
        scene.handle_event(InputEvent::Quit);

        let mut platform = ScriptedPlatform::new(vec![]);
        scene.run(&mut platform).unwrap();
        assert_eq!(platform.presents, 0);
    }
}
