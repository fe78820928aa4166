// Host-side tests for the background simulations.

use folio_core::constants::*;
use folio_core::effects::{
    DigitalParams, FireWaterParams, LaserParams, SceneParams, WavesParams,
};
use folio_core::{
    wrap, DigitalBrain, FireWater, FrameInput, LaserWar, Lifetime, PointerState, Scene,
    Simulation, Viewport, Waves,
};
use glam::{Vec2, Vec3};

fn vp() -> Viewport {
    Viewport::new(800.0, 600.0)
}

fn frame(elapsed_sec: f32) -> FrameInput {
    FrameInput {
        elapsed_sec,
        pointer: PointerState::default(),
    }
}

fn pointer_at(pos: Vec2) -> FrameInput {
    let mut pointer = PointerState::at(pos);
    pointer.record(pos.x, pos.y);
    FrameInput {
        elapsed_sec: 0.0,
        pointer,
    }
}

#[test]
fn wrap_reenters_on_the_far_side() {
    assert_eq!(wrap(-21.0, 800.0, 20.0), 820.0);
    assert_eq!(wrap(821.0, 800.0, 20.0), -20.0);
    assert_eq!(wrap(400.0, 800.0, 20.0), 400.0);
    assert_eq!(wrap(-20.0, 800.0, 20.0), -20.0);
}

#[test]
fn lifetime_only_counts_down() {
    let mut life = Lifetime::new(10.0);
    assert_eq!(life.ratio(), 1.0);
    let mut prev = life.remaining();
    for _ in 0..12 {
        life.tick(1.0);
        assert!(life.remaining() < prev);
        prev = life.remaining();
    }
    life.tick(-5.0);
    assert_eq!(life.remaining(), prev);
    assert!(life.is_expired());
    assert_eq!(life.ratio(), 0.0);
    assert_eq!(life.total(), 10.0);
}

#[test]
fn laser_count_never_exceeds_cap() {
    let mut war = LaserWar::new(vp(), LaserParams::default(), 11);
    assert_eq!(war.lasers.len(), LASER_INITIAL_COUNT);
    for i in 0..3000 {
        war.step(&frame(i as f32 / 60.0));
        assert!(war.lasers.len() <= LASER_MAX_COUNT);
        assert!(war.explosions.iter().all(|e| e.alpha > 0.0));
        assert!(war.flashes.iter().all(|f| !f.life.is_expired()));
    }
    assert!(war.lasers.len() > LASER_INITIAL_COUNT);
}

#[test]
fn lasers_leaving_the_screen_are_replaced() {
    let mut war = LaserWar::new(vp(), LaserParams::default(), 5);
    for _ in 0..600 {
        war.step(&frame(0.0));
        let v = war.viewport();
        assert!(war.lasers.iter().all(|l| !l.is_out_of_bounds(v)));
    }
}

#[test]
fn neurons_have_at_most_three_links() {
    let brain = DigitalBrain::new(vp(), DigitalParams::default(), 9);
    assert_eq!(brain.neurons.len(), NEURON_COUNT);
    assert_eq!(brain.bits.len(), BIT_COUNT);
    for (i, n) in brain.neurons.iter().enumerate() {
        assert!(n.connections.len() <= NEURON_MAX_CONNECTIONS);
        for &j in &n.connections {
            assert_ne!(i, j);
            assert!(n.pos.distance(brain.neurons[j].pos) < NEURON_LINK_DISTANCE);
        }
    }
    assert!(brain.connection_count() <= NEURON_COUNT * NEURON_MAX_CONNECTIONS);
}

#[test]
fn bits_stay_inside_the_wrap_band() {
    let mut brain = DigitalBrain::new(vp(), DigitalParams::default(), 2);
    for i in 0..2000 {
        brain.step(&frame(i as f32 / 60.0));
    }
    for b in &brain.bits {
        assert!(b.pos.x >= -BIT_WRAP_MARGIN && b.pos.x <= 800.0 + BIT_WRAP_MARGIN);
        assert!(b.pos.y >= -BIT_WRAP_MARGIN && b.pos.y <= 600.0 + BIT_WRAP_MARGIN);
    }
    assert!(brain.packets.iter().all(|p| p.progress < 1.0));
}

#[test]
fn wave_grid_covers_viewport() {
    let mut waves = Waves::new(vp(), WavesParams::default(), 1);
    assert_eq!((waves.cols, waves.rows), (55, 41));
    assert_eq!(waves.points.len(), 55 * 41);

    waves.resize(Viewport::new(1600.0, 1200.0));
    assert_eq!((waves.cols, waves.rows), (108, 81));
    assert_eq!(waves.points.len(), 108 * 81);
    assert!(waves.points.iter().all(|p| p.pos == p.base));
}

#[test]
fn grid_ignores_pointer_until_it_moves() {
    let mut waves = Waves::new(vp(), WavesParams::default(), 1);
    for _ in 0..10 {
        waves.step(&frame(0.0));
    }
    assert!(waves.points.iter().all(|p| p.pos == p.base));
}

#[test]
fn pointer_repels_then_grid_relaxes() {
    let mut waves = Waves::new(vp(), WavesParams::default(), 1);
    waves.step(&pointer_at(Vec2::new(400.0, 300.0)));

    // col 27 sits 5 px right of the pointer
    let near = *waves.point(27, 20).unwrap();
    assert_eq!(near.base, Vec2::new(405.0, 300.0));
    assert!(near.pos.x > near.base.x);
    let far = *waves.point(0, 0).unwrap();
    assert_eq!(far.pos, far.base);

    for _ in 0..300 {
        waves.step(&pointer_at(Vec2::new(-5000.0, -5000.0)));
    }
    assert!(waves.points.iter().all(|p| p.pos.distance(p.base) < 1e-3));
}

#[test]
fn drifters_wrap_and_cycle() {
    let mut waves = Waves::new(vp(), WavesParams::default(), 4);
    assert_eq!(waves.drifters.len(), WAVES_DRIFTER_COUNT);
    for _ in 0..5000 {
        waves.step(&frame(0.0));
    }
    for d in &waves.drifters {
        assert!((0.0..=800.0).contains(&d.pos.x));
        assert!((0.0..=600.0).contains(&d.pos.y));
        assert!((0.0..=1.0).contains(&d.life));
    }
}

#[test]
fn drops_burst_at_the_mid_line() {
    let params = FireWaterParams {
        drop_chance: 1.0,
        ..FireWaterParams::default()
    };
    let mut fw = FireWater::new(Viewport::new(300.0, 200.0), params, 8);
    let mut saw_burst = false;
    for i in 0..400 {
        fw.step(&frame(i as f32 / 60.0));
        for d in &fw.drops {
            if d.is_splashing() {
                saw_burst = true;
                assert!(d.splashes.len() <= SPLASH_COUNT);
            } else {
                assert!(d.pos.y <= fw.mid_line());
            }
        }
    }
    assert!(saw_burst);
}

#[test]
fn embers_fade_and_expire() {
    let mut fw = FireWater::new(vp(), FireWaterParams::default(), 21);
    for i in 0..1000 {
        fw.step(&frame(i as f32 / 60.0));
        for e in &fw.embers {
            assert!(!e.life.is_expired());
            assert!((0.0..=1.0).contains(&e.opacity()));
        }
    }
    assert_eq!(fw.flames.len(), FLAME_COUNT * FLAME_LAYERS);
    assert_eq!(fw.steam.len(), STEAM_PUFFS);
}

#[test]
fn scene_has_a_full_stream() {
    let scene = Scene::new(vp(), SceneParams::default(), 6);
    assert_eq!(scene.stream.len(), STREAM_PARTICLE_COUNT);
    assert_eq!(scene.objects.len(), 15 + 10 + 8);
}

#[test]
fn stream_stays_in_its_box() {
    let mut scene = Scene::new(vp(), SceneParams::default(), 6);
    for i in 0..3000 {
        scene.step(&frame(i as f32 / 60.0));
    }
    for p in &scene.stream {
        assert!(p.pos.x.abs() <= STREAM_HALF_EXTENT + 0.05);
        assert!(p.pos.y.abs() <= STREAM_HALF_EXTENT + 0.05);
    }
}

#[test]
fn scene_resize_updates_aspect() {
    let mut scene = Scene::new(vp(), SceneParams::default(), 6);
    scene.resize(Viewport::new(1000.0, 500.0));
    assert!((scene.camera.aspect - 2.0).abs() < 1e-6);
}

#[test]
fn objects_drift_home_without_pointer_nearby() {
    let mut scene = Scene::new(vp(), SceneParams::default(), 12);
    let far = FrameInput {
        elapsed_sec: 0.0,
        pointer: PointerState::at(Vec2::new(50.0, 50.0)),
    };
    for _ in 0..600 {
        scene.step(&far);
    }
    for (i, o) in scene.objects.iter().enumerate() {
        let target = o.float_target(i, 0.0);
        assert!(Vec2::new(o.position.x, o.position.y).distance(target) < 0.01);
    }
}

#[test]
fn objects_lean_toward_a_nearby_pointer() {
    let mut scene = Scene::new(vp(), SceneParams::default(), 12);
    let near_home = Vec3::new(1.0, 1.0, 0.0);
    let far_home = Vec3::new(-20.0, -20.0, 0.0);
    scene.objects[0].home = near_home;
    scene.objects[0].position = near_home;
    scene.objects[1].home = far_home;
    scene.objects[1].position = far_home;

    let near_target = scene.objects[0].float_target(0, 0.0);
    let far_target = scene.objects[1].float_target(1, 0.0);
    // Two world units to the right of object 0's float target.
    let world = Vec2::new(near_target.x + 2.0, near_target.y);
    assert!(world.distance(near_home.truncate()) < SCENE_POINTER_RADIUS);
    assert!(world.distance(far_home.truncate()) >= SCENE_POINTER_RADIUS);
    scene.step(&pointer_at(world / SCENE_POINTER_WORLD_SCALE));

    let near = scene.objects[0].position.truncate();
    assert!(near.distance(world) < near_target.distance(world) - 1e-3);
    assert!(near.x > near_target.x);
    assert!((near.y - near_target.y).abs() < 1e-5);

    let far = scene.objects[1].position.truncate();
    let relaxed = far_home.truncate() + (far_target - far_home.truncate()) * SCENE_RELAX_RATE;
    assert!(far.distance(relaxed) < 1e-5);
}

#[test]
fn empty_viewport_is_harmless() {
    let empty = Viewport::new(0.0, 0.0);
    let mut waves = Waves::new(empty, WavesParams::default(), 1);
    assert_eq!((waves.cols, waves.rows), (1, 1));
    let mut laser = LaserWar::new(empty, LaserParams::default(), 1);
    let mut brain = DigitalBrain::new(empty, DigitalParams::default(), 1);
    let mut fw = FireWater::new(empty, FireWaterParams::default(), 1);
    let mut scene = Scene::new(empty, SceneParams::default(), 1);
    for i in 0..120 {
        let input = frame(i as f32 / 60.0);
        waves.step(&input);
        laser.step(&input);
        brain.step(&input);
        fw.step(&input);
        scene.step(&input);
    }
    assert_eq!(scene.camera.aspect, 1.0);
}

#[test]
fn negative_sizes_clamp_to_zero() {
    let v = Viewport::new(-5.0, 10.0);
    assert_eq!(v.width, 0.0);
    assert!(v.is_empty());
}
