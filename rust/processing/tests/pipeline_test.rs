// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use citymesh_geometry::{ObjOptions, UpAxis};
use citymesh_processing::{
    export_assignments, export_meshes, AssignmentRecord, CityDataset, DistrictResolver,
    MeshExporter,
};
use std::fs;
use std::path::PathBuf;

const CITY: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "id": "districts",
            "geometries": [
                { "name": "Downtown", "coordinates": [[[0, 0], [0, 10], [10, 10], [10, 0], [0, 0]]] },
                { "name": "Riverside", "coordinates": [[[10, 0], [10, 10], [20, 10], [20, 0], [10, 0]]] },
                { "name": "Overlap", "coordinates": [[[0, 0], [0, 20], [20, 20], [20, 0], [0, 0]]] }
            ]
        },
        {
            "id": "buildings",
            "coordinates": [
                [[[1, 1], [1, 2], [2, 2], [2, 1], [1, 1]]],
                [[[20, 20], [20, 21], [21, 21], [21, 20], [20, 20]]],
                [[[12, 3], [12, 5], [15, 5], [15, 3]]],
                [[[4, 14], [4, 16], [6, 16], [6, 14], [4, 14]]],
                [[[2, 6], [3, 6], [3, 7]]]
            ]
        }
    ]
}"#;

/// Fresh scratch directory for one test
fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR"))
        .join("citymesh-pipeline")
        .join(name);
    if dir.exists() {
        fs::remove_dir_all(&dir).unwrap();
    }
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn dataset() -> CityDataset {
    CityDataset::from_json_str(CITY).unwrap()
}

#[test]
fn assignment_file_matches_source_order() {
    let dir = scratch_dir("assignment_order");
    let output = dir.join("buildings_with_districts.json");

    let summary = export_assignments(&dataset(), &output).unwrap();
    assert_eq!(summary.stats.total_buildings, 5);
    assert_eq!(summary.stats.assigned, 4);
    assert_eq!(summary.stats.dropped(), 1);

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("[\n    {\n        \"coordinates\""));

    let records: Vec<AssignmentRecord> = serde_json::from_str(&text).unwrap();
    let districts: Vec<&str> = records.iter().map(|r| r.district.as_str()).collect();
    assert_eq!(districts, vec!["Downtown", "Riverside", "Overlap", "Downtown"]);

    // Building at (20, 20) is never written
    assert!(records
        .iter()
        .all(|r| r.coordinates.iter().all(|p| p[0] < 20.0)));
    // Open source ring is written closed
    assert_eq!(records[1].coordinates.first(), records[1].coordinates.last());
    assert_eq!(records[1].coordinates.len(), 5);
}

#[test]
fn assignment_file_is_overwritten_and_idempotent() {
    let dir = scratch_dir("assignment_idempotent");
    let output = dir.join("out.json");
    fs::write(&output, "stale content that is much longer than nothing at all ".repeat(200)).unwrap();

    export_assignments(&dataset(), &output).unwrap();
    let first = fs::read(&output).unwrap();
    export_assignments(&dataset(), &output).unwrap();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
    assert!(!String::from_utf8(first).unwrap().contains("stale"));
}

#[test]
fn assigned_records_resolve_to_same_district() {
    let dataset = dataset();
    let resolver = DistrictResolver::new(&dataset).unwrap();
    let assignments = resolver.resolve_all(dataset.buildings()).unwrap();

    for assignment in &assignments {
        let again = resolver.resolve(assignment.building).unwrap().unwrap();
        assert_eq!(again.name, assignment.district.name);
    }
}

#[test]
fn meshes_are_grouped_by_district() {
    let dir = scratch_dir("mesh_layout");
    let root = dir.join("mesh").join("buildings");
    let exporter = MeshExporter::new(&root, ObjOptions::default());

    let summary = export_meshes(&dataset(), &exporter).unwrap();

    let expected = vec![
        root.join("Downtown").join("Building_0.obj"),
        root.join("Riverside").join("Building_2.obj"),
        root.join("Overlap").join("Building_3.obj"),
        root.join("Downtown").join("Building_4.obj"),
    ];
    assert_eq!(summary.files, expected);
    for path in &expected {
        assert!(path.is_file(), "missing {}", path.display());
    }
    assert!(!root.join("Downtown").join("Building_1.obj").exists());

    let counts: Vec<(&str, usize)> = summary
        .stats
        .per_district
        .iter()
        .map(|c| (c.district.as_str(), c.buildings))
        .collect();
    assert_eq!(counts, vec![("Downtown", 2), ("Riverside", 1), ("Overlap", 1)]);
}

#[test]
fn mesh_files_have_extruded_geometry() {
    let dir = scratch_dir("mesh_geometry");
    let exporter = MeshExporter::new(
        dir.join("meshes"),
        ObjOptions {
            up_axis: UpAxis::Z,
            write_normals: false,
        },
    );
    export_meshes(&dataset(), &exporter).unwrap();

    // Source ring has 5 points including the closing one
    let text = fs::read_to_string(dir.join("meshes/Downtown/Building_0.obj")).unwrap();
    let vertices: Vec<&str> = text.lines().filter(|l| l.starts_with("v ")).collect();
    let faces: Vec<&str> = text.lines().filter(|l| l.starts_with("f ")).collect();
    assert_eq!(vertices.len(), 10);
    assert_eq!(faces.len(), 6);
    assert_eq!(vertices[0], "v 1.000000 1.000000 0.000000");
    assert_eq!(vertices[5], "v 1.000000 1.000000 1.000000");
    assert_eq!(faces[0], "f 1 2 3 4 5");
    assert_eq!(faces[5], "f 5 1 6 10");
    assert!(text.contains("o Building_0\n"));

    // Open source ring has 4 points
    let text = fs::read_to_string(dir.join("meshes/Riverside/Building_2.obj")).unwrap();
    assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 8);
    assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 5);
}

#[test]
fn mesh_export_is_idempotent() {
    let dir = scratch_dir("mesh_idempotent");
    let exporter = MeshExporter::new(dir.join("mesh"), ObjOptions::default());

    let first = export_meshes(&dataset(), &exporter).unwrap();
    let before: Vec<Vec<u8>> = first.files.iter().map(|p| fs::read(p).unwrap()).collect();
    let second = export_meshes(&dataset(), &exporter).unwrap();
    let after: Vec<Vec<u8>> = second.files.iter().map(|p| fs::read(p).unwrap()).collect();

    assert_eq!(first.files, second.files);
    assert_eq!(before, after);
}

#[test]
fn unwritable_root_aborts() {
    let dir = scratch_dir("mesh_blocked");
    let blocker = dir.join("not_a_dir");
    fs::write(&blocker, b"file").unwrap();

    let exporter = MeshExporter::new(blocker.join("buildings"), ObjOptions::default());
    let err = export_meshes(&dataset(), &exporter).unwrap_err();
    assert!(matches!(err, citymesh_processing::Error::Io { .. }));
}

#[test]
fn degenerate_district_fails_before_writing() {
    let dir = scratch_dir("degenerate_district");
    let json = r#"{"features": [
        {"id": "districts", "geometries": [
            {"name": "Broken", "coordinates": [[[0, 0], [5, 5]]]},
            {"name": "Downtown", "coordinates": [[[0, 0], [0, 10], [10, 10], [10, 0]]]}
        ]},
        {"id": "buildings", "coordinates": [[[[1, 1], [1, 2], [2, 2], [2, 1]]]]}
    ]}"#;
    let dataset = CityDataset::from_json_str(json).unwrap();

    let output = dir.join("out.json");
    let err = export_assignments(&dataset, &output).unwrap_err();
    assert!(matches!(err, citymesh_processing::Error::InvalidDistrict { .. }));
    assert!(!output.exists());

    let root = dir.join("mesh");
    let err = export_meshes(&dataset, &MeshExporter::new(&root, ObjOptions::default())).unwrap_err();
    assert!(matches!(err, citymesh_processing::Error::InvalidDistrict { .. }));
    assert!(!root.exists());
}

#[test]
fn unrelated_features_do_not_block_the_run() {
    let dir = scratch_dir("unrelated_features");
    let json = r#"{"features": [
        {"id": "districts", "geometries": [{"name": "Downtown", "coordinates": [[[0, 0], [0, 10], [10, 10], [10, 0]]]}]},
        {"id": "roads", "coordinates": [[0, 0], [5, 5]]},
        {"id": "buildings", "coordinates": [[[[1, 1], [1, 2], [2, 2], [2, 1]]]]}
    ]}"#;
    let dataset = CityDataset::from_json_str(json).unwrap();
    let output = dir.join("out.json");

    let summary = export_assignments(&dataset, &output).unwrap();
    assert_eq!(summary.stats.assigned, 1);
}

#[test]
fn unassigned_only_dataset_writes_nothing() {
    let dir = scratch_dir("mesh_empty");
    let json = r#"{"features": [
        {"id": "districts", "geometries": [{"name": "Downtown", "coordinates": [[[0, 0], [0, 10], [10, 10], [10, 0]]]}]},
        {"id": "buildings", "coordinates": [[[[20, 20], [20, 21], [21, 21], [21, 20]]]]}
    ]}"#;
    let dataset = CityDataset::from_json_str(json).unwrap();
    let root = dir.join("mesh");
    let summary = export_meshes(&dataset, &MeshExporter::new(&root, ObjOptions::default())).unwrap();

    assert!(summary.files.is_empty());
    assert!(root.is_dir());
    assert!(!root.join("Downtown").exists());
}
