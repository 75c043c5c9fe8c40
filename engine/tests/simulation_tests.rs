//! Simulation Tests - Player Bounds, Projectile Lifecycle, Timestep
//!
//! Exercises the update step through the public API only: a default config
//! on a 640x480 screen, keys set directly on the input table.

use std::time::Duration;

use glam::Vec2;
use sprite_intro_engine::config::GameConfig;
use sprite_intro_engine::game::SimulationContext;
use sprite_intro_engine::input::{InputEvent, InputState, KeyBindings, KeyCode};
use sprite_intro_engine::world::ScreenExtents;

const DIRECTION_KEYS: [KeyCode; 4] = [KeyCode::A, KeyCode::D, KeyCode::W, KeyCode::S];

fn sim() -> SimulationContext {
    SimulationContext::new(&GameConfig::default(), ScreenExtents::new(640.0, 480.0))
}

fn held(keys: &[KeyCode]) -> InputState {
    let mut input = InputState::new();
    for &key in keys {
        input.keys.set(key, true);
    }
    input
}

fn assert_close(a: Vec2, b: Vec2) {
    assert!((a - b).abs().max_element() < 1e-3, "{a:?} != {b:?}");
}

// ============================================================================
// Player bounds
// ============================================================================

#[test]
fn test_player_always_inside_margin() {
    let starts = [
        Vec2::new(8.0, 200.0),
        Vec2::new(320.0, 240.0),
        Vec2::new(632.0, 472.0),
        Vec2::new(8.0, 8.0),
    ];
    let elapsed = [0, 1, 7, 10, 100, 5_000];

    for start in starts {
        for mask in 0..16u8 {
            let keys: Vec<KeyCode> = DIRECTION_KEYS
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, k)| *k)
                .collect();
            let input = held(&keys);

            for ms in elapsed {
                let mut sim = sim();
                sim.player.position = start;
                sim.update(&input, Duration::from_millis(ms));

                let p = sim.player.position;
                assert!(
                    (8.0..=632.0).contains(&p.x) && (8.0..=472.0).contains(&p.y),
                    "player escaped to {p:?} from {start:?} with {keys:?} over {ms}ms"
                );
            }
        }
    }
}

#[test]
fn test_left_at_edge_is_clamped() {
    let mut sim = sim();
    assert_eq!(sim.player.position, Vec2::new(8.0, 200.0));

    sim.update(&held(&[KeyCode::A]), Duration::from_millis(100));
    assert_eq!(sim.player.position, Vec2::new(8.0, 200.0));
}

#[test]
fn test_right_moves_by_speed() {
    let mut sim = sim();
    sim.update(&held(&[KeyCode::D]), Duration::from_millis(100));
    assert_close(sim.player.position, Vec2::new(28.0, 200.0));
}

#[test]
fn test_no_keys_no_movement() {
    let mut sim = sim();
    sim.player.position = Vec2::new(100.0, 100.0);
    sim.update(&InputState::new(), Duration::from_millis(250));
    assert_eq!(sim.player.position, Vec2::new(100.0, 100.0));
}

// ============================================================================
// Projectile lifecycle
// ============================================================================

#[test]
fn test_fire_spawns_at_player() {
    let mut sim = sim();
    sim.player.position = Vec2::new(320.0, 240.0);

    let outcome = sim.update(&held(&[KeyCode::Space]), Duration::from_millis(10));

    assert!(outcome.spawned);
    assert!(sim.projectile.exists);
    assert_eq!(sim.projectile.position, Vec2::new(320.0, 240.0));
    assert_eq!(sim.projectile.velocity, Vec2::new(0.0, -0.1));
}

#[test]
fn test_fire_while_live_is_noop() {
    let mut sim = sim();
    sim.player.position = Vec2::new(320.0, 240.0);
    let fire = held(&[KeyCode::Space]);

    sim.update(&fire, Duration::from_millis(10));
    sim.player.position = Vec2::new(100.0, 100.0);
    let outcome = sim.update(&fire, Duration::from_millis(10));

    assert!(!outcome.spawned);
    assert!(sim.projectile.exists);
    // Still the first projectile, one step along its path
    assert_close(sim.projectile.position, Vec2::new(320.0, 239.0));
}

#[test]
fn test_projectile_above_screen_is_removed() {
    let mut sim = sim();
    sim.projectile.spawn(Vec2::new(300.0, -5.0), Vec2::new(0.0, -0.1));

    let outcome = sim.update(&InputState::new(), Duration::ZERO);

    assert!(outcome.culled);
    assert!(!sim.projectile.exists);
}

#[test]
fn test_projectile_flies_off_then_can_refire() {
    let mut sim = sim();
    sim.player.position = Vec2::new(320.0, 200.0);

    sim.update(&held(&[KeyCode::Space]), Duration::from_millis(10));
    assert!(sim.projectile.exists);

    // 200px at 0.1px/ms = 2000ms; 10ms ticks
    let idle = InputState::new();
    let mut culled_at = None;
    for tick in 1..=300 {
        if sim.update(&idle, Duration::from_millis(10)).culled {
            culled_at = Some(tick);
            break;
        }
    }
    let culled_at = culled_at.expect("projectile never left the screen");
    assert!((200..=202).contains(&culled_at), "culled at tick {culled_at}");

    let outcome = sim.update(&held(&[KeyCode::Space]), Duration::from_millis(10));
    assert!(outcome.spawned);
}

#[test]
fn test_projectile_ignores_player_margin() {
    let mut sim = sim();
    // Inside [0, W] x [0, H] but within the player's half-size margin
    sim.projectile.spawn(Vec2::new(2.0, 478.0), Vec2::ZERO);

    sim.update(&InputState::new(), Duration::from_millis(10));
    assert!(sim.projectile.exists);
}

// ============================================================================
// Timestep
// ============================================================================

#[test]
fn test_split_update_matches_single_update() {
    for keys in [
        vec![KeyCode::D],
        vec![KeyCode::A, KeyCode::W],
        vec![KeyCode::S, KeyCode::D],
        vec![KeyCode::A, KeyCode::D, KeyCode::W],
    ] {
        let input = held(&keys);

        let mut split = sim();
        split.player.position = Vec2::new(320.0, 240.0);
        split.update(&input, Duration::from_millis(30));
        split.update(&input, Duration::from_millis(70));

        let mut whole = sim();
        whole.player.position = Vec2::new(320.0, 240.0);
        whole.update(&input, Duration::from_millis(100));

        assert_close(split.player.position, whole.player.position);
        assert_eq!(split.sim_time(), whole.sim_time());
    }
}

#[test]
fn test_split_update_matches_when_clamped() {
    let input = held(&[KeyCode::A]);

    let mut split = sim();
    split.update(&input, Duration::from_millis(40));
    split.update(&input, Duration::from_millis(60));

    let mut whole = sim();
    whole.update(&input, Duration::from_millis(100));

    assert_eq!(split.player.position, whole.player.position);
}

#[test]
fn test_queued_events_drive_update() {
    let mut sim = sim();
    sim.player.position = Vec2::new(320.0, 240.0);
    let mut input = InputState::new();

    input.key_event(KeyCode::S, true);
    input.pump();
    sim.update(&input, Duration::from_millis(50));

    input.queue.push(InputEvent::Key { code: KeyCode::S, pressed: false });
    input.pump();
    sim.update(&input, Duration::from_millis(50));

    assert_close(sim.player.position, Vec2::new(320.0, 250.0));
}

#[test]
fn test_custom_config_values() {
    let config = GameConfig::from_json(
        r#"{ "player": { "start": [100.0, 100.0], "speed": 1.0 },
             "projectile": { "velocity": [0.5, 0.0] } }"#,
    )
    .unwrap();
    let mut sim = SimulationContext::new(&config, ScreenExtents::new(640.0, 480.0));

    sim.update(&held(&[KeyCode::D, KeyCode::Space]), Duration::from_millis(10));

    assert_eq!(sim.player.position, Vec2::new(110.0, 100.0));
    assert_eq!(sim.projectile.velocity, Vec2::new(0.5, 0.0));
}

#[test]
fn test_fire_on_movement_key_keeps_movement() {
    let config = GameConfig::from_json(r#"{ "bindings": { "fire": "A" } }"#).unwrap();
    let mut sim = SimulationContext::new(&config, ScreenExtents::new(640.0, 480.0));
    sim.player.position = Vec2::new(320.0, 240.0);

    let mut input = InputState::with_bindings(KeyBindings::from(&config.bindings));
    input.keys.set(KeyCode::A, true);
    let outcome = sim.update(&input, Duration::from_millis(100));

    assert_close(sim.player.position, Vec2::new(300.0, 240.0));
    assert!(!outcome.spawned);

    // Fire fell back to its default key
    input.keys.set(KeyCode::A, false);
    input.keys.set(KeyCode::Space, true);
    assert!(sim.update(&input, Duration::from_millis(10)).spawned);
}
