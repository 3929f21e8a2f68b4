//! Drives a session the way the binary does, with a scripted pan sequence.

use hexscape_app::frame_clock::{FIXED_DT, FrameClock};
use hexscape_app::script::parse_script;
use hexscape_app::session::Session;
use hexscape_config::Config;
use hexscape_coords::AxialPosition;

fn small_config() -> Config {
    let mut config = Config::default();
    config.terrain.chunk_width = 4;
    config
}

#[test]
fn scripted_pans_extend_the_grid() {
    let config = small_config();
    let mut session = Session::new(&config);
    let mut commands = parse_script(&["r", "r", "f", "add"]).unwrap().into_iter();
    let mut clock = FrameClock::new();
    let mut uploaded = 0;

    for _ in 0..8 {
        clock.advance(
            FIXED_DT,
            |_, _| {
                if let Some(command) = commands.next() {
                    session.apply(command);
                }
            },
            |_| {},
        );
        uploaded += session.render().1.uploaded;
    }

    let state = session.state();
    // 20 units right, 10 forward: x = round(20 / 8 / 2) = 1, y = round(-10 / 6) = -2.
    assert_eq!(state.focus(), AxialPosition::new(1, -2));
    for dx in 0..=2 {
        for dy in -3..=-1 {
            assert!(state.chunks().contains(AxialPosition::new(dx, dy)));
        }
    }
    // Every stored chunk was uploaded exactly once.
    assert_eq!(uploaded, state.chunks().len());
}

#[test]
fn same_seed_gives_same_frames() {
    let config = small_config();
    let mut a = Session::new(&config);
    let mut b = Session::new(&config);
    let (fa, _) = a.render();
    let (fb, _) = b.render();
    assert_eq!(fa.chunks.len(), fb.chunks.len());
    for (x, y) in fa.chunks.iter().zip(&fb.chunks) {
        assert_eq!(x.position, y.position);
        assert_eq!(x.mesh.mesh(), y.mesh.mesh());
    }
}

#[test]
fn config_round_trip_drives_session() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = small_config();
    config.terrain.seed = 99;
    config.save(dir.path()).unwrap();

    let loaded = Config::load_or_create(dir.path()).unwrap();
    let session = Session::new(&loaded);
    assert_eq!(session.state().chunks().len(), 9);
}
