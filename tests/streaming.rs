use std::collections::HashMap;

use cgmath::Point3;
use voxel_terrain::config::{EngineConfig, TerrainStrategy};
use voxel_terrain::core::MtResource;
use voxel_terrain::engine_state::{
    rendering::{GeometryBuffer, MeshRegistry, RenderSink},
    voxels::{chunk::ChunkId, world::World},
    EngineState,
};

/// Records every callback in order.
#[derive(Default)]
struct EventLog {
    events: Vec<(ChunkId, bool)>,
    live: HashMap<ChunkId, usize>,
}

impl RenderSink for EventLog {
    fn on_chunk_meshed(&mut self, id: ChunkId, geometry: GeometryBuffer) {
        self.events.push((id, true));
        self.live.insert(id, geometry.vertex_count());
    }

    fn on_chunk_disposed(&mut self, id: ChunkId) {
        self.events.push((id, false));
        assert!(self.live.remove(&id).is_some(), "disposed {id} twice");
    }
}

/// Reads the world from inside every callback.
#[derive(Default)]
struct WorldReadingSink {
    world: Option<MtResource<World>>,
    callbacks: usize,
}

impl WorldReadingSink {
    fn world(&self) -> &MtResource<World> {
        self.world.as_ref().expect("world handle not attached")
    }
}

impl RenderSink for WorldReadingSink {
    fn on_chunk_meshed(&mut self, id: ChunkId, _geometry: GeometryBuffer) {
        self.callbacks += 1;
        let world = self.world().try_get().expect("world locked during on_chunk_meshed");
        assert!(world.contains_chunk(id));
    }

    fn on_chunk_disposed(&mut self, id: ChunkId) {
        self.callbacks += 1;
        let world = self.world().try_get().expect("world locked during on_chunk_disposed");
        assert!(!world.contains_chunk(id));
    }
}

fn small_config() -> EngineConfig {
    EngineConfig {
        chunk_size: 8,
        load_radius: 2,
        seed: 7,
        ..EngineConfig::default()
    }
}

#[test]
fn same_seed_gives_same_meshes() {
    let mut first = EngineState::new(small_config(), MeshRegistry::new()).unwrap();
    let mut second = EngineState::new(small_config(), MeshRegistry::new()).unwrap();

    first.tick(5.0, -3.0);
    second.tick(5.0, -3.0);

    assert_eq!(first.sink().ids(), second.sink().ids());
    for id in first.sink().ids() {
        assert_eq!(first.sink().get(id), second.sink().get(id));
    }
}

#[test]
fn walking_keeps_sink_in_step_with_world() {
    let mut engine = EngineState::new(small_config(), EventLog::default()).unwrap();
    let world = engine.world();
    let step = engine.config().chunk_world_size() / 4.0;

    for tick in 0..12 {
        engine.tick(tick as f64 * step, tick as f64 * step * 0.5);

        let world = world.get();
        assert_eq!(world.chunk_count(), 25);
        assert_eq!(engine.sink().live.len(), 25);
        for id in engine.sink().live.keys() {
            assert!(world.contains_chunk(*id));
        }
    }
}

#[test]
fn every_meshed_chunk_is_disposed_on_shutdown() {
    let mut engine = EngineState::new(small_config(), EventLog::default()).unwrap();
    let step = engine.config().chunk_world_size();
    for tick in 0..4 {
        engine.tick(-(tick as f64) * step, 0.0);
    }

    engine.shutdown();

    assert!(engine.sink().live.is_empty());
    let meshed = engine.sink().events.iter().filter(|(_, meshed)| *meshed).count();
    assert!(meshed >= 25);
}

#[test]
fn returning_to_a_chunk_regenerates_it_identically() {
    let mut engine = EngineState::new(small_config(), MeshRegistry::new()).unwrap();
    let step = engine.config().chunk_world_size();

    engine.tick(0.0, 0.0);
    let before = engine.world().get().get_all_voxels(ChunkId::new(-2, 0));

    engine.tick(10.0 * step, 0.0);
    assert!(!engine.world().get().contains_chunk(ChunkId::new(-2, 0)));

    engine.tick(0.0, 0.0);
    let mut after = engine.world().get().get_all_voxels(ChunkId::new(-2, 0));
    let mut before = before;
    before.sort_by_key(|voxel| voxel.key());
    after.sort_by_key(|voxel| voxel.key());
    assert_eq!(before, after);
}

#[test]
fn flat_world_surface_is_queryable() {
    let config = EngineConfig {
        terrain: TerrainStrategy::Flat { height: 3 },
        floor: 1,
        ..small_config()
    };
    let mut engine = EngineState::new(config, MeshRegistry::new()).unwrap();
    engine.tick(0.0, 0.0);

    let world = engine.world();
    let world = world.get();
    assert!(world.is_occupied(Point3::new(-5, 3, 9)));
    assert!(world.is_occupied(Point3::new(-5, 1, 9)));
    assert!(!world.is_occupied(Point3::new(-5, 4, 9)));
    assert!(!world.is_occupied(Point3::new(-5, 0, 9)));
}

#[test]
fn sink_can_read_the_world_during_callbacks() {
    let mut engine = EngineState::new(small_config(), WorldReadingSink::default()).unwrap();
    let world = engine.world();
    engine.sink_mut().world = Some(world);
    let step = engine.config().chunk_world_size();

    for tick in 0..5 {
        engine.tick(tick as f64 * step, 0.0);
    }
    engine.shutdown();

    assert!(engine.sink().callbacks > 25);
}

#[test]
fn far_observer_does_not_overflow() {
    let config = EngineConfig {
        chunk_size: 32,
        load_radius: 1,
        ..EngineConfig::default()
    };
    let mut engine = EngineState::new(config, MeshRegistry::new()).unwrap();

    let report = engine.tick(1.2e9, 0.0);
    assert_eq!(report.generated, 0);
    assert!(engine.sink().is_empty());

    let report = engine.tick(0.0, 0.0);
    assert_eq!(report.generated, 9);
    assert_eq!(engine.sink().len(), 9);
}
