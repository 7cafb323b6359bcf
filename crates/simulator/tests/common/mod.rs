//! Shared fixtures for the integration tests.

use std::fs;
use std::path::Path;

/// A minimal runnable configuration: one model, three wind frames, `sim1`.
pub fn write_config(root: &Path) {
    fs::create_dir_all(root.join("models")).unwrap();
    fs::write(root.join("models/room.stl"), "solid room\nendsolid room\n").unwrap();

    fs::create_dir_all(root.join("wind")).unwrap();
    for i in 0..3 {
        fs::write(root.join(format!("wind/room_{i}.csv")), "Points:0,Points:1\n").unwrap();
    }

    fs::write(
        root.join("config.yaml"),
        "
models:
  - models/room.stl
unprocessed_wind_files: wind/room
empty_point: [0.5, 0.5, 0.5]
cell_size: 0.1
",
    )
    .unwrap();

    fs::create_dir_all(root.join("simulations/sim1")).unwrap();
    fs::write(
        root.join("simulations/sim1/sim.yaml"),
        "
deltaTime: 0.1
windIterationDeltaTime: 1.0
source:
  sourceType: point
  position: [0.5, 0.5, 0.5]
  gasType: ethanol
",
    )
    .unwrap();
}
