use dungeon::{
    core::{input::RandomWalkInput, prelude::*, scene::SceneBuilder},
    game::{level::RoomId, room::Room},
    resource::AssetRegistry,
    util::{gg_err, log::setup_log},
};

const DEMO_SECONDS: u64 = 10;

fn main() -> Result<()> {
    setup_log()?;

    let assets = AssetRegistry::with_builtin()?;
    let mut scene = SceneBuilder::new(&assets)
        .room(Room::new(Vec2::zero(), Vec2 { x: 800., y: 600. }))
        .room(Room::new(Vec2 { x: 1200., y: 0. }, Vec2 { x: 600., y: 600. }).boss())
        .door(RoomId::first(), Vec2 { x: 760., y: 280. }, RoomId::new(1))
        .obstacle(RoomId::first(), Vec2 { x: 300., y: 250. })
        .player_at(Vec2 { x: 100., y: 100. })
        .build()?;

    let mut input = RandomWalkInput::new(0xd00d, 10..=60);
    for _ in 0..DEMO_SECONDS * u64::from(TICKS_PER_SECOND) {
        scene.tick(&mut input);
        if let Some(next) = scene.touching_door() {
            gg_err::log_err_and_ignore(scene.enter_room(next));
        }
        dungeon::info_every_seconds!(1, "tick {}: camera: {}", scene.tick_count(), scene.camera());
    }

    let snapshot = scene.snapshot();
    let encoded = snapshot.encode()?;
    info!(
        "after {} ticks: {} player at {}, {} projectiles, {} colliding pairs, snapshot {} bytes",
        snapshot.tick,
        snapshot.room,
        snapshot.player.position,
        snapshot.projectiles.len(),
        snapshot.colliding_pairs.len(),
        encoded.len()
    );
    Ok(())
}
