// Host-side tests for the per-frame driver: ordering, input draining and the
// asynchronous load hand-off.

use artifact_core::{
    client_to_ndc, Artifact, FrameDriver, InputState, LoadError, LoadSlot, MaterialParams,
    MeshData, ParticleField, ParticleSurface, SceneController, SceneRenderer, Showcase,
    ShowcaseConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;

type Log = Rc<RefCell<Vec<String>>>;

struct LoggingRenderer {
    log: Log,
    fail: bool,
}

impl SceneRenderer for LoggingRenderer {
    fn render(&mut self, scene: &SceneController) -> anyhow::Result<()> {
        let yaw = scene.artifact().map(|a| a.orientation.yaw);
        self.log.borrow_mut().push(format!("render yaw={:?}", yaw));
        if self.fail {
            anyhow::bail!("lost surface");
        }
        Ok(())
    }
}

struct LoggingSurface {
    log: Log,
    circles: usize,
}

impl ParticleSurface for LoggingSurface {
    fn clear(&mut self) {
        self.log.borrow_mut().push("clear".to_string());
        self.circles = 0;
    }
    fn fill_circle(&mut self, _x: f32, _y: f32, _r: f32, _rgb: [u8; 3], _a: f32) {
        self.circles += 1;
    }
}

fn triangle() -> Artifact {
    Artifact::new(vec![MeshData {
        positions: vec![[0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        normals: vec![[0.0, 0.0, 1.0]; 3],
        indices: vec![0, 1, 2],
        base_color: [1.0; 4],
        material: MaterialParams::default(),
    }])
}

struct Harness {
    driver: FrameDriver,
    input: artifact_core::SharedInput,
    load: LoadSlot,
    log: Log,
}

fn harness() -> Harness {
    let config = ShowcaseConfig::default();
    let showcase = Showcase {
        scene: SceneController::new(&config, 1.0),
        particles: ParticleField::with_rng(config.particles, StdRng::seed_from_u64(2)),
    };
    let input = InputState::shared();
    let load: LoadSlot = Rc::new(RefCell::new(None));
    Harness {
        driver: FrameDriver::new(showcase, input.clone(), load.clone()),
        input,
        load,
        log: Rc::new(RefCell::new(Vec::new())),
    }
}

#[test]
fn scene_renders_before_particle_pass() {
    let mut h = harness();
    let mut r = LoggingRenderer {
        log: h.log.clone(),
        fail: false,
    };
    let mut s = LoggingSurface {
        log: h.log.clone(),
        circles: 0,
    };
    h.driver.frame(Some(&mut r), &mut s);
    h.driver.frame(Some(&mut r), &mut s);
    let log = h.log.borrow();
    assert_eq!(log.len(), 4);
    assert!(log[0].starts_with("render"));
    assert_eq!(log[1], "clear");
    assert!(log[2].starts_with("render"));
    assert_eq!(log[3], "clear");
    assert_eq!(h.driver.frame_index(), 2);
}

#[test]
fn queued_moves_become_trail_particles() {
    let mut h = harness();
    for i in 0..7 {
        let (x, y) = (10.0 * i as f32, 5.0);
        h.input
            .borrow_mut()
            .pointer_moved([x, y], client_to_ndc(x, y, 800.0, 600.0));
    }
    let mut s = LoggingSurface {
        log: h.log.clone(),
        circles: 0,
    };
    h.driver.frame(None, &mut s);
    assert_eq!(h.driver.showcase().particles.len(), 21);
    assert_eq!(s.circles, 21);
    assert!(h.input.borrow().is_empty());
}

#[test]
fn wheel_and_resize_are_applied_at_frame_start() {
    let mut h = harness();
    {
        let mut i = h.input.borrow_mut();
        for _ in 0..10 {
            i.wheel_ticked(100.0);
        }
        i.wheel_ticked(-100.0);
        i.resized(1200, 600);
    }
    let mut s = LoggingSurface {
        log: h.log.clone(),
        circles: 0,
    };
    assert_eq!(h.driver.showcase().scene.camera().distance(), 15.0);
    h.driver.frame(None, &mut s);
    let cam = h.driver.showcase().scene.camera();
    // clamped at 30 before the final zoom-in tick
    assert_eq!(cam.distance(), 28.0);
    assert_eq!(cam.aspect, 2.0);
}

#[test]
fn finished_load_is_installed_and_advanced_same_frame() {
    let mut h = harness();
    h.input
        .borrow_mut()
        .pointer_moved([800.0, 300.0], client_to_ndc(800.0, 300.0, 800.0, 600.0));
    let mut r = LoggingRenderer {
        log: h.log.clone(),
        fail: false,
    };
    let mut s = LoggingSurface {
        log: h.log.clone(),
        circles: 0,
    };
    h.driver.frame(Some(&mut r), &mut s);
    assert!(h.driver.showcase().scene.artifact().is_none());
    assert_eq!(h.log.borrow()[0], "render yaw=None");

    *h.load.borrow_mut() = Some(Ok(triangle()));
    h.driver.frame(Some(&mut r), &mut s);
    let yaw = h.driver.showcase().scene.artifact().expect("loaded").orientation.yaw;
    let expected = std::f32::consts::FRAC_PI_4
        + 0.1 * (std::f32::consts::FRAC_PI_2 - std::f32::consts::FRAC_PI_4);
    assert!((yaw - expected).abs() < 1e-6);
    assert!(h.load.borrow().is_none());
}

#[test]
fn failed_load_keeps_frames_running() {
    let mut h = harness();
    *h.load.borrow_mut() = Some(Err(LoadError::Fetch {
        path: "models/artifact.glb".into(),
        reason: "HTTP 404".into(),
    }));
    h.input.borrow_mut().pointer_moved([1.0, 1.0], [0.0, 0.0]);
    let mut s = LoggingSurface {
        log: h.log.clone(),
        circles: 0,
    };
    h.driver.frame(None, &mut s);
    h.driver.frame(None, &mut s);
    assert!(h.driver.showcase().scene.artifact().is_none());
    assert_eq!(h.driver.showcase().particles.len(), 3);
}

#[test]
fn render_error_does_not_skip_particles() {
    let mut h = harness();
    h.input.borrow_mut().pointer_moved([1.0, 1.0], [0.0, 0.0]);
    let mut r = LoggingRenderer {
        log: h.log.clone(),
        fail: true,
    };
    let mut s = LoggingSurface {
        log: h.log.clone(),
        circles: 0,
    };
    h.driver.frame(Some(&mut r), &mut s);
    assert_eq!(s.circles, 3);
    assert_eq!(h.log.borrow().last().map(String::as_str), Some("clear"));
}
