use crate::error::SimError;
use crate::replication::Scheme;
use crate::scenario::{ScenarioSpec, SimParams, TopologySpec};
use crate::topo::TopologyKind;

#[test]
fn minimal_spec_uses_default_params() {
    let spec = ScenarioSpec::from_json_str(r#"{"topology": {"kind": "ring", "switches": 8}}"#)
        .expect("parse");
    assert_eq!(spec.topology, TopologySpec::Ring { switches: 8 });
    assert_eq!(spec.params, SimParams::default());
    assert!(spec.seed.is_none());
    assert_eq!(spec.topology.build().unwrap().num_switches, 8);
}

#[test]
fn partial_params_fill_in_defaults() {
    let raw = r#"{
        "topology": {"kind": "mesh", "switches": 5},
        "params": {"num_controllers": 7, "iterations": 12, "consistent_updates": true},
        "seed": 3
    }"#;
    let spec = ScenarioSpec::from_json_str(raw).unwrap();
    assert_eq!(spec.params.num_controllers, 7);
    assert_eq!(spec.params.iterations, 12);
    assert!(spec.params.consistent_updates);
    assert_eq!(spec.params.ralpha, SimParams::default().ralpha);
    assert_eq!(spec.params.pcxmin, SimParams::default().pcxmin);
    assert_eq!(spec.seed, Some(3));
}

#[test]
fn fat_tree_accepts_pods_or_switches() {
    let by_pods = TopologySpec::FatTree {
        switches: None,
        pods: Some(4),
    };
    let by_switches = TopologySpec::FatTree {
        switches: Some(44),
        pods: None,
    };
    assert_eq!(by_pods.build().unwrap().num_switches, 20);
    // 44 个交换机向下取整到 k = 4
    assert_eq!(by_switches.build().unwrap().num_switches, 20);
    assert_eq!(by_pods.kind(), TopologyKind::FatTree);

    let both = TopologySpec::FatTree {
        switches: Some(1000),
        pods: Some(4),
    };
    assert_eq!(both.build().unwrap().num_switches, 20);

    let neither = TopologySpec::FatTree {
        switches: None,
        pods: None,
    };
    assert!(matches!(neither.build(), Err(SimError::InvalidTopology { .. })));

    let odd = TopologySpec::FatTree {
        switches: None,
        pods: Some(3),
    };
    assert!(matches!(odd.build(), Err(SimError::InvalidTopology { .. })));
}

#[test]
fn fat_tree_kind_parses_from_json() {
    let spec = ScenarioSpec::from_json_str(r#"{"topology": {"kind": "fat_tree", "pods": 6}}"#)
        .unwrap();
    assert_eq!(spec.topology.build().unwrap().num_switches, 45);
}

#[test]
fn topology_spec_from_kind() {
    assert_eq!(
        TopologySpec::new(TopologyKind::Star, 9),
        TopologySpec::Star { switches: 9 }
    );
    assert_eq!(
        TopologySpec::new(TopologyKind::FatTree, 20),
        TopologySpec::FatTree {
            switches: Some(20),
            pods: None
        }
    );
}

#[test]
fn seeded_spec_runs_reproducibly() {
    let raw = r#"{
        "topology": {"kind": "star", "switches": 6},
        "params": {"iterations": 40},
        "seed": 11
    }"#;
    let spec = ScenarioSpec::from_json_str(raw).unwrap();
    let a = spec.run().unwrap();
    let b = spec.run().unwrap();
    assert_eq!(a.num_switches, 6);
    assert_eq!(a.failed_link, b.failed_link);
    for scheme in Scheme::ALL {
        assert_eq!(a.totals(scheme).len(), 40, "{scheme}");
        assert_eq!(a.totals(scheme), b.totals(scheme), "{scheme}");
    }
}

#[test]
fn malformed_spec_is_a_json_error() {
    let err = ScenarioSpec::from_json_str(r#"{"topology": {"kind": "torus", "switches": 4}}"#)
        .unwrap_err();
    assert!(matches!(err, SimError::Json(_)));

    let err = ScenarioSpec::from_json_str("not json").unwrap_err();
    assert!(matches!(err, SimError::Json(_)));
}

#[test]
fn missing_spec_file_is_an_io_error() {
    let err = ScenarioSpec::from_path("/nonexistent/convsim/spec.json").unwrap_err();
    assert!(matches!(err, SimError::Io(_)));
}

#[test]
fn invalid_params_surface_from_run() {
    let raw = r#"{
        "topology": {"kind": "ring", "switches": 4},
        "params": {"walpha": 0.0},
        "seed": 1
    }"#;
    let err = ScenarioSpec::from_json_str(raw).unwrap().run().unwrap_err();
    assert!(matches!(err, SimError::InvalidParameter { name: "walpha", .. }));
}

#[test]
fn topology_spec_reports_requested_switches() {
    assert_eq!(TopologySpec::Ring { switches: 8 }.switches().unwrap(), 8);
    let by_pods = TopologySpec::FatTree {
        switches: Some(1000),
        pods: Some(6),
    };
    assert_eq!(by_pods.switches().unwrap(), 45);
    let by_switches = TopologySpec::FatTree {
        switches: Some(44),
        pods: None,
    };
    // 请求值原样返回，向下取整发生在构建时
    assert_eq!(by_switches.switches().unwrap(), 44);
    let neither = TopologySpec::FatTree {
        switches: None,
        pods: None,
    };
    assert!(matches!(neither.switches(), Err(SimError::InvalidTopology { .. })));
}
