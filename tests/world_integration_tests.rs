//! Integration tests for terrain streaming driven by the frame loop

use glam::Vec2;
use sidescroller::entity::{InputState, Key};
use sidescroller::world::chunk_manager::{chunk_index_for, chunk_pixel_range};
use sidescroller::world::{BlockKind, World};
use sidescroller::GameConfig;

// ============================================================================
// Streaming
// ============================================================================

#[test]
fn test_chunk_loading_lags_one_frame() {
    let mut world = World::with_seed(17);
    world.teleport_player(Vec2::new(511.0, -2000.0));
    assert_eq!(world.loaded_chunks(), vec![-2, -1, 0, 1, 2]);

    let right = InputState::holding([Key::ArrowRight]);

    // Player crosses into chunk 1, but streaming still sees x=511
    let report = world.step(&right);
    assert_eq!(world.player.position.x, 516.0);
    assert_eq!(report.chunks.player_chunk, 0);
    assert!(report.chunks.loaded.is_empty());

    // Next frame streams from x=516
    let report = world.step(&right);
    assert_eq!(report.chunks.player_chunk, 1);
    assert_eq!(report.chunks.loaded, vec![3]);
    assert_eq!(world.loaded_chunks(), vec![-2, -1, 0, 1, 2, 3]);
}

#[test]
fn test_walking_keeps_window_invariant() {
    let mut world = World::with_seed(2024);
    let right = InputState::holding([Key::ArrowRight]);

    for _ in 0..1500 {
        let before = world.player.position.x;
        world.step(&right);

        let player_chunk = chunk_index_for(before);
        let loaded = world.loaded_chunks();

        for chunk_x in (player_chunk - 2)..=(player_chunk + 2) {
            assert!(loaded.contains(&chunk_x), "chunk {} missing", chunk_x);
        }
        for chunk_x in &loaded {
            assert!((chunk_x - player_chunk).abs() <= 3, "chunk {} not evicted", chunk_x);
        }
    }

    // 1500 frames at 5px
    assert_eq!(world.player.position.x, 50.0 + 1500.0 * 5.0);
}

#[test]
fn test_terrain_partitions_into_loaded_chunks() {
    let mut world = World::with_seed(8);
    world.teleport_player(Vec2::new(-3000.0, -500.0));
    world.run(&InputState::holding([Key::ArrowLeft]), 300);

    let loaded = world.loaded_chunks();
    for block in world.snapshot().blocks() {
        let chunk_x = chunk_index_for(block.x);
        assert!(loaded.contains(&chunk_x));
        assert!(chunk_pixel_range(chunk_x).contains(&block.x));
    }

    // Every loaded chunk still matches a fresh generation
    for chunk in world.chunk_manager().chunks() {
        assert_eq!(chunk, &world.generator().generate_chunk(chunk.chunk_x));
    }
}

#[test]
fn test_revisited_chunks_regenerate_identically() {
    let mut world = World::with_seed(31);
    let original = world.chunk_manager().get_chunk(0).cloned().unwrap();

    world.teleport_player(Vec2::new(10.0 * 512.0, -500.0));
    assert!(world.chunk_manager().get_chunk(0).is_none());

    world.teleport_player(Vec2::new(50.0, -500.0));
    assert_eq!(world.chunk_manager().get_chunk(0), Some(&original));
}

// ============================================================================
// Physics in the frame loop
// ============================================================================

#[test]
fn test_player_lands_on_spawn_columns() {
    let mut world = World::with_seed(77);
    let reports = world.run(&InputState::new(), 1300);

    assert!(reports.last().unwrap().physics.grounded());

    // The body spans columns 1 and 2; it rests on the higher surface
    let top = world
        .snapshot()
        .blocks()
        .filter(|b| b.kind != BlockKind::Tree && (b.x == 32.0 || b.x == 64.0))
        .map(|b| b.y)
        .fold(f32::INFINITY, f32::min);
    assert_eq!(world.player.position.y, top - world.player.height);

    // Resting is stable frame to frame
    let y = world.player.position.y;
    world.step(&InputState::new());
    assert_eq!(world.player.position.y, y);
}

#[test]
fn test_jump_from_rest() {
    let mut world = World::with_seed(77);
    world.run(&InputState::new(), 1300);
    let rest_y = world.player.position.y;

    let report = world.step(&InputState::holding([Key::Space]));

    assert!(report.physics.jumped);
    assert_eq!(world.player.position.y, rest_y - 10.0);
}

#[test]
fn test_config_drives_world() {
    let mut config = GameConfig::default();
    config.world.seed = Some(5);
    config.world.load_radius = 1;
    config.world.evict_radius = 1;
    config.player.move_speed = 12.0;

    let mut world = World::new(&config);
    assert_eq!(world.loaded_chunks(), vec![-1, 0, 1]);

    world.step(&InputState::holding([Key::ArrowRight]));
    assert_eq!(world.player.position.x, 62.0);
}
