//! Artifact model: triangle meshes decoded from a binary glTF (`.glb`).
//!
//! Node transforms are baked into vertex data so the renderer only has to
//! apply the artifact's own placement and orientation.

use crate::config::{ArtifactPlacement, MaterialParams};
use crate::error::LoadError;
use crate::state::Orientation;
use glam::{Mat3, Mat4, Vec3};

#[derive(Clone, Debug)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
    pub base_color: [f32; 4],
    pub material: MaterialParams,
}

#[derive(Clone, Debug)]
pub struct Artifact {
    pub meshes: Vec<MeshData>,
    pub placement: ArtifactPlacement,
    pub orientation: Orientation,
}

impl Artifact {
    pub fn new(meshes: Vec<MeshData>) -> Self {
        Self {
            meshes,
            placement: ArtifactPlacement::default(),
            orientation: Orientation::default(),
        }
    }

    /// Decode every triangle primitive reachable from the default scene.
    pub fn from_glb(bytes: &[u8]) -> Result<Self, LoadError> {
        let gltf = gltf::Gltf::from_slice(bytes)?;
        let blob = gltf.blob.as_deref();
        let mut meshes = Vec::new();
        let scene = gltf.default_scene().or_else(|| gltf.scenes().next());
        if let Some(scene) = scene {
            for node in scene.nodes() {
                collect_node(&node, Mat4::IDENTITY, blob, &mut meshes);
            }
        }
        if meshes.is_empty() {
            return Err(LoadError::NoGeometry);
        }
        let vertex_count: usize = meshes.iter().map(|m| m.positions.len()).sum();
        log::info!(
            "[model] decoded {} meshes, {} vertices",
            meshes.len(),
            vertex_count
        );
        Ok(Self::new(meshes))
    }

    /// Force `material` onto every mesh in the hierarchy.
    pub fn apply_material(&mut self, material: MaterialParams) {
        for mesh in &mut self.meshes {
            mesh.material = material;
        }
    }

    /// Set scale and vertical offset, and start at the configured yaw.
    pub fn place(&mut self, placement: ArtifactPlacement) {
        self.placement = placement;
        self.orientation = Orientation {
            pitch: 0.0,
            yaw: placement.initial_yaw,
        };
    }

    /// World transform: translate · rotate · scale.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, self.placement.y_offset, 0.0))
            * self.orientation.rotation_matrix()
            * Mat4::from_scale(Vec3::splat(self.placement.scale))
    }
}

fn collect_node(
    node: &gltf::Node,
    parent: Mat4,
    blob: Option<&[u8]>,
    out: &mut Vec<MeshData>,
) {
    let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
    if let Some(mesh) = node.mesh() {
        for primitive in mesh.primitives() {
            if primitive.mode() != gltf::mesh::Mode::Triangles {
                continue;
            }
            if let Some(m) = read_primitive(&primitive, world, blob) {
                out.push(m);
            }
        }
    }
    for child in node.children() {
        collect_node(&child, world, blob, out);
    }
}

fn read_primitive(
    primitive: &gltf::Primitive,
    world: Mat4,
    blob: Option<&[u8]>,
) -> Option<MeshData> {
    let reader = primitive.reader(|buffer| match buffer.source() {
        gltf::buffer::Source::Bin => blob,
        gltf::buffer::Source::Uri(_) => None,
    });
    let positions: Vec<[f32; 3]> = reader
        .read_positions()?
        .map(|p| world.transform_point3(Vec3::from_array(p)).to_array())
        .collect();
    if positions.len() < 3 {
        return None;
    }
    let indices: Vec<u32> = match reader.read_indices() {
        Some(ix) => ix.into_u32().collect(),
        None => (0..positions.len() as u32).collect(),
    };
    let normals = match reader.read_normals() {
        Some(ns) => {
            let nm = Mat3::from_mat4(world).inverse().transpose();
            ns.map(|n| (nm * Vec3::from_array(n)).normalize_or_zero().to_array())
                .collect()
        }
        None => compute_normals(&positions, &indices),
    };
    let base_color = primitive
        .material()
        .pbr_metallic_roughness()
        .base_color_factor();
    Some(MeshData {
        positions,
        normals,
        indices,
        base_color,
        material: MaterialParams::default(),
    })
}

/// Area-weighted smooth vertex normals for an indexed triangle list.
pub fn compute_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut acc = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        if a >= positions.len() || b >= positions.len() || c >= positions.len() {
            continue;
        }
        let pa = Vec3::from_array(positions[a]);
        let pb = Vec3::from_array(positions[b]);
        let pc = Vec3::from_array(positions[c]);
        let n = (pb - pa).cross(pc - pa);
        acc[a] += n;
        acc[b] += n;
        acc[c] += n;
    }
    acc.into_iter()
        .map(|n| {
            let n = n.normalize_or_zero();
            let n = if n == Vec3::ZERO { Vec3::Y } else { n };
            n.to_array()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> MeshData {
        let positions = vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
        ];
        let indices = vec![0, 1, 2, 0, 2, 3];
        MeshData {
            normals: compute_normals(&positions, &indices),
            positions,
            indices,
            base_color: [1.0; 4],
            material: MaterialParams {
                metalness: 0.0,
                roughness: 1.0,
                env_intensity: 0.0,
            },
        }
    }

    #[test]
    fn computed_normals_face_out_of_ccw_triangles() {
        let q = quad();
        for n in &q.normals {
            assert_eq!(*n, [0.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn unreferenced_vertex_gets_fallback_normal() {
        let positions = vec![[0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [5.0; 3]];
        let normals = compute_normals(&positions, &[0, 1, 2]);
        assert_eq!(normals[3], [0.0, 1.0, 0.0]);
    }

    #[test]
    fn material_override_reaches_every_mesh() {
        let mut a = Artifact::new(vec![quad(), quad(), quad()]);
        a.apply_material(MaterialParams::default());
        for m in &a.meshes {
            assert_eq!(m.material.metalness, 0.8);
            assert_eq!(m.material.roughness, 0.2);
            assert_eq!(m.material.env_intensity, 2.0);
        }
    }

    #[test]
    fn placement_sets_start_yaw_and_offsets_origin() {
        let mut a = Artifact::new(vec![quad()]);
        a.place(ArtifactPlacement::default());
        assert!((a.orientation.yaw - std::f32::consts::FRAC_PI_4).abs() < 1e-6);
        let origin = a.model_matrix().transform_point3(Vec3::ZERO);
        assert!((origin - Vec3::new(0.0, -2.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = Artifact::from_glb(b"definitely not a glb").unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
    }
}
