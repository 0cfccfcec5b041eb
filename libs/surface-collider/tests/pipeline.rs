use approx::assert_relative_eq;
use glam::{DAffine3, DQuat, DVec3};
use surface_collider::{
    build_group, build_groups, BuildOutcome, FilterConfig, IndexBuffer, IndexWidth, MergeGroup, MeshError,
    ReferenceFrame, SourceMesh,
};

fn unit_square(transform: DAffine3) -> SourceMesh {
    SourceMesh::new(
        vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 1.0),
            DVec3::new(0.0, 0.0, 1.0),
        ],
        vec![[0, 2, 1], [0, 3, 2]],
        transform,
    )
    .unwrap()
}

fn flipped_square() -> SourceMesh {
    let square = unit_square(DAffine3::IDENTITY);
    let flipped: Vec<[u32; 3]> = square.triangles().iter().map(|&[a, b, c]| [a, c, b]).collect();
    SourceMesh::new(square.vertices().to_vec(), flipped, DAffine3::IDENTITY).unwrap()
}

/// A ramp of `n` quads climbing `rise` per unit, plus a wall.
fn staircase(n: usize, rise: f64) -> SourceMesh {
    let mut vertices = Vec::new();
    let mut triangles = Vec::new();
    for i in 0..n {
        let x0 = i as f64;
        let y0 = x0 * rise;
        let base = vertices.len() as u32;
        vertices.extend([
            DVec3::new(x0, y0, 0.0),
            DVec3::new(x0 + 1.0, y0 + rise, 0.0),
            DVec3::new(x0 + 1.0, y0 + rise, 1.0),
            DVec3::new(x0, y0, 1.0),
        ]);
        triangles.push([base, base + 2, base + 1]);
        triangles.push([base, base + 3, base + 2]);
    }
    let base = vertices.len() as u32;
    vertices.extend([DVec3::ZERO, DVec3::Y, DVec3::new(0.0, 1.0, 1.0), DVec3::Z]);
    triangles.push([base, base + 1, base + 2]);
    triangles.push([base, base + 2, base + 3]);
    SourceMesh::new(vertices, triangles, DAffine3::IDENTITY).unwrap()
}

fn walkable_config() -> FilterConfig {
    FilterConfig::new(35.0, 0.0, 0.01).unwrap()
}

#[test]
fn unit_square_end_to_end() {
    let meshes = [unit_square(DAffine3::IDENTITY)];
    let group = MergeGroup::new(ReferenceFrame::identity(), &meshes);
    let result = build_group(&group, &walkable_config()).unwrap();

    assert_eq!(result.stats.triangles_examined, 2);
    assert_eq!(result.stats.triangles_kept, 2);

    let mesh = result.outcome.mesh().unwrap();
    assert_eq!(mesh.vertex_count(), 6);
    assert_eq!(mesh.triangles(), &[[0, 1, 2], [3, 4, 5]]);
    assert_eq!(mesh.index_width(), IndexWidth::Narrow);
    assert_eq!(mesh.bounds().min, DVec3::new(0.0, 0.0, 0.0));
    assert_eq!(mesh.bounds().max, DVec3::new(1.0, 0.0, 1.0));
    assert_eq!(mesh.index_buffer(), IndexBuffer::U16(vec![0, 1, 2, 3, 4, 5]));
}

#[test]
fn downward_square_is_empty() {
    let meshes = [flipped_square()];
    let group = MergeGroup::new(ReferenceFrame::identity(), &meshes);
    let result = build_group(&group, &walkable_config()).unwrap();

    assert_eq!(result.outcome, BuildOutcome::Empty);
    assert_eq!(result.stats.triangles_kept, 0);
    assert_eq!(result.stats.triangles_examined, 2);
    assert_eq!(result.stats.rejected_slope, 2);
}

#[test]
fn output_is_deterministic() {
    let meshes = [staircase(40, 0.3), unit_square(DAffine3::from_translation(DVec3::new(0.0, 5.0, 0.0)))];
    let frame = ReferenceFrame::new(DAffine3::from_rotation_translation(
        DQuat::from_rotation_y(0.4),
        DVec3::new(2.0, 1.0, -3.0),
    ))
    .unwrap();
    let group = MergeGroup::new(frame, &meshes);
    let config = FilterConfig::default();

    let first = build_group(&group, &config).unwrap();
    let second = build_group(&group, &config).unwrap();
    assert_eq!(first, second);

    let a = first.outcome.mesh().unwrap();
    let b = second.outcome.mesh().unwrap();
    let bits = |v: &[DVec3]| v.iter().flat_map(|p| p.to_array().map(f64::to_bits)).collect::<Vec<_>>();
    assert_eq!(bits(a.vertices()), bits(b.vertices()));
}

#[test]
fn buffer_sizes_match_kept_triangles() {
    for rise in [0.0, 0.2, 0.6, 0.8, 1.5] {
        let meshes = [staircase(10, rise), unit_square(DAffine3::IDENTITY)];
        let group = MergeGroup::new(ReferenceFrame::identity(), &meshes);
        let result = build_group(&group, &walkable_config()).unwrap();
        let kept = result.stats.triangles_kept;

        match result.outcome {
            BuildOutcome::Mesh(mesh) => {
                assert_eq!(mesh.vertex_count(), 3 * kept);
                assert_eq!(mesh.indices_u32().len(), 3 * kept);
                assert_eq!(mesh.vertices_f32().len(), 9 * kept);
            }
            BuildOutcome::Empty => assert_eq!(kept, 0),
        }
        assert_eq!(
            result.stats.triangles_examined,
            result.stats.triangles_kept + result.stats.triangles_rejected()
        );
    }
}

#[test]
fn steep_ramp_only_kept_with_wider_cone() {
    // rise 1.0 = 45 degrees
    let meshes = [staircase(3, 1.0)];
    let group = MergeGroup::new(ReferenceFrame::identity(), &meshes);

    let strict = build_group(&group, &FilterConfig::default()).unwrap();
    assert!(strict.outcome.is_empty());

    let lite = build_group(&group, &FilterConfig::lite()).unwrap();
    assert_eq!(lite.stats.triangles_kept, 6);
    // The wall stays out even with the lite preset
    assert_eq!(lite.stats.rejected_slope, 2);
}

#[test]
fn skin_offset_moves_vertices_along_normal() {
    let meshes = [unit_square(DAffine3::IDENTITY)];
    let group = MergeGroup::new(ReferenceFrame::identity(), &meshes);

    let bare = build_group(&group, &walkable_config()).unwrap().outcome.into_mesh().unwrap();
    let skinned = build_group(&group, &FilterConfig::new(35.0, 0.25, 0.01).unwrap())
        .unwrap()
        .outcome
        .into_mesh()
        .unwrap();

    let source: Vec<DVec3> = meshes[0].world_triangles().flatten().collect();
    assert_eq!(bare.vertices(), source.as_slice());
    for (q, p) in skinned.vertices().iter().zip(&source) {
        assert!(q.abs_diff_eq(*p + DVec3::Y * 0.25, 1e-12));
    }
    assert_relative_eq!(skinned.bounds().min.y, 0.25);
}

#[test]
fn output_is_in_reference_frame_coordinates() {
    // Two copies of the same world-space square reached through different
    // local transforms
    let shifted = SourceMesh::new(
        unit_square(DAffine3::IDENTITY)
            .vertices()
            .iter()
            .map(|v| *v - DVec3::new(10.0, 0.0, 0.0))
            .collect(),
        unit_square(DAffine3::IDENTITY).triangles().to_vec(),
        DAffine3::from_translation(DVec3::new(10.0, 0.0, 0.0)),
    )
    .unwrap();
    let meshes = [unit_square(DAffine3::IDENTITY), shifted];

    let root = DAffine3::from_translation(DVec3::new(0.0, 2.0, 0.0));
    let group = MergeGroup::new(ReferenceFrame::new(root).unwrap(), &meshes);
    let mesh = build_group(&group, &walkable_config()).unwrap().outcome.into_mesh().unwrap();

    assert_eq!(mesh.vertex_count(), 12);
    let (first, second) = mesh.vertices().split_at(6);
    for (a, b) in first.iter().zip(second) {
        assert!(a.abs_diff_eq(*b, 1e-12));
        assert_relative_eq!(a.y, -2.0);
    }
}

#[test]
fn rotated_mesh_classified_in_world_space() {
    // Square flipped upside down locally, then rotated 180 degrees about X
    // so it faces up in the world
    let meshes = [SourceMesh::new(
        flipped_square().vertices().to_vec(),
        flipped_square().triangles().to_vec(),
        DAffine3::from_rotation_x(std::f64::consts::PI),
    )
    .unwrap()];
    let group = MergeGroup::new(ReferenceFrame::identity(), &meshes);
    let result = build_group(&group, &walkable_config()).unwrap();
    assert_eq!(result.stats.triangles_kept, 2);
}

#[test]
fn mesh_order_determines_vertex_order() {
    let low = unit_square(DAffine3::IDENTITY);
    let high = unit_square(DAffine3::from_translation(DVec3::new(0.0, 1.0, 0.0)));
    let forward = [low.clone(), high.clone()];
    let backward = [high, low];

    let a = build_group(&MergeGroup::new(ReferenceFrame::identity(), &forward), &walkable_config()).unwrap();
    let b = build_group(&MergeGroup::new(ReferenceFrame::identity(), &backward), &walkable_config()).unwrap();
    let a = a.outcome.into_mesh().unwrap();
    let b = b.outcome.into_mesh().unwrap();

    assert_eq!(a.vertices()[0].y, 0.0);
    assert_eq!(b.vertices()[0].y, 1.0);
    assert_eq!(a.triangles(), b.triangles());
    assert_eq!(a.bounds(), b.bounds());
}

#[test]
fn groups_are_independent() {
    let level = [unit_square(DAffine3::IDENTITY), staircase(5, 0.1)];
    let ceiling = [flipped_square()];
    let groups = [
        MergeGroup::new(ReferenceFrame::identity(), &level).with_label("level"),
        MergeGroup::new(ReferenceFrame::identity(), &ceiling).with_label("ceiling"),
        MergeGroup::new(ReferenceFrame::identity(), &level).with_label("level again"),
    ];
    let config = walkable_config();

    let results = build_groups(&groups, &config).unwrap();
    assert_eq!(results.len(), 3);
    assert!(results[1].outcome.is_empty());
    assert_eq!(results[0], results[2]);
    assert_eq!(results[0], build_group(&groups[0], &config).unwrap());
}

#[test]
fn empty_group_is_not_an_error() {
    let meshes: [SourceMesh; 0] = [];
    let group = MergeGroup::new(ReferenceFrame::identity(), &meshes);
    let result = build_group(&group, &FilterConfig::default()).unwrap();
    assert!(result.outcome.is_empty());
    assert_eq!(result.stats.triangles_examined, 0);
}

#[test]
fn singular_frame_is_rejected() {
    let err = ReferenceFrame::new(DAffine3::from_scale(DVec3::ZERO)).unwrap_err();
    assert!(matches!(err, MeshError::InvalidTransform { .. }));
}
