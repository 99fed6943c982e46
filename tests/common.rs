use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

pub fn graphplay() -> Command {
    cargo_bin_cmd!("graphplay")
}

/// Four-node diamond: 1-2-3-4 chain of weight-1 edges plus a weight-5
/// shortcut 1-3. Shortest hop path 1-3-4; cheapest weighted path 1-2-3-4.
#[allow(dead_code)]
pub fn write_diamond_graph(dir: &Path) -> PathBuf {
    let path = dir.join("diamond.json");
    fs::write(
        &path,
        r#"{
  "nodes": [1, 2, 3, 4],
  "edges": [
    { "source": 1, "target": 2, "directed": false, "weight": 1 },
    { "source": 2, "target": 3, "directed": false, "weight": 1 },
    { "source": 1, "target": 3, "directed": false, "weight": 5 },
    { "source": 3, "target": 4, "directed": false, "weight": 1 }
  ]
}"#,
    )
    .expect("write graph fixture");
    path
}

/// Two disconnected components: {1, 2} and {3}.
#[allow(dead_code)]
pub fn write_split_graph(dir: &Path) -> PathBuf {
    let path = dir.join("split.json");
    fs::write(
        &path,
        r#"{
  "nodes": [1, 2, 3],
  "edges": [{ "source": 1, "target": 2 }]
}"#,
    )
    .expect("write graph fixture");
    path
}
