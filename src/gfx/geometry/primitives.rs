//! # Primitive Shape Generation
//!
//! This module contains the generators for the four editor primitives.
//! All shapes are generated with outward normals and counter-clockwise
//! winding seen from outside, and every mesh is closed.
//!
//! Coordinate conventions (Y-up):
//! - sphere centred at the origin
//! - box centred at the origin, edge length `size`
//! - cylinder along Y, centred at the origin
//! - cone with its base on the XZ plane and the apex at `+height`

use std::f32::consts::{PI, TAU};

use super::{Mesh, ShapeKind, TessellationLevel};
use crate::gfx::scene::vertex::Vertex3D;

/// Angular segments of round primitives: 16, 32, 64 or 128.
pub fn angular_divisions(level: TessellationLevel) -> u32 {
    16 * level.multiplier()
}

/// `(latitude, longitude)` band counts of the sphere.
pub fn sphere_divisions(level: TessellationLevel) -> (u32, u32) {
    let longitude = angular_divisions(level);
    (longitude / 2, longitude)
}

/// Quads per box face edge: 1, 2, 4 or 8.
pub fn box_divisions(level: TessellationLevel) -> u32 {
    level.multiplier()
}

/// Builds the mesh of `kind` at `level`.
///
/// This is a pure function; the match is the generator table over the
/// primitive variants.
pub fn generate(kind: &ShapeKind, level: TessellationLevel) -> Mesh {
    let mesh = match *kind {
        ShapeKind::Sphere { radius } => generate_sphere(radius, level),
        ShapeKind::Box { size } => generate_box(size, level),
        ShapeKind::Cylinder { radius, height } => generate_cylinder(radius, height, level),
        ShapeKind::Cone { radius, height } => generate_cone(radius, height, level),
    };

    log::debug!(
        "generated {} at level {}: {} vertices, {} triangles",
        kind.shape_type(),
        level,
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    mesh
}

/// `(cos, sin)` of `segments` evenly spaced angles in `[0, 2π)`.
///
/// Round primitives index into this table and wrap with `% segments`, so the
/// closing segment reuses the exact first entry.
fn unit_circle(segments: u32) -> Vec<(f32, f32)> {
    (0..segments)
        .map(|i| {
            let angle = TAU * i as f32 / segments as f32;
            (angle.cos(), angle.sin())
        })
        .collect()
}

fn normalize(v: [f32; 3]) -> [f32; 3] {
    let length = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    if length > 0.0 {
        [v[0] / length, v[1] / length, v[2] / length]
    } else {
        v
    }
}

/// Generate a UV sphere of the given radius centred at the origin.
///
/// Each latitude ring holds one vertex per longitude band; ring 0 and the
/// last ring collapse onto the poles, which makes the polar quads degenerate
/// triangle fans. Triangle count is `lat · long · 2`, zero-area pole
/// triangles included.
pub fn generate_sphere(radius: f32, level: TessellationLevel) -> Mesh {
    let (lat_segs, long_segs) = sphere_divisions(level);
    let longitude = unit_circle(long_segs);

    let mut vertices = Vec::with_capacity(((lat_segs + 1) * long_segs) as usize);
    let mut indices = Vec::with_capacity((lat_segs * long_segs * 6) as usize);

    for lat in 0..=lat_segs {
        let theta = lat as f32 * PI / lat_segs as f32; // 0 to PI
        let (sin_theta, cos_theta) = theta.sin_cos();

        for &(cos_phi, sin_phi) in &longitude {
            let normal = [sin_theta * cos_phi, cos_theta, sin_theta * sin_phi];
            let position = [normal[0] * radius, normal[1] * radius, normal[2] * radius];
            vertices.push(Vertex3D::new(position, normal));
        }
    }

    for lat in 0..lat_segs {
        let ring = lat * long_segs;
        let next_ring = ring + long_segs;

        for long in 0..long_segs {
            let next = (long + 1) % long_segs;

            let upper = ring + long;
            let lower = next_ring + long;
            let upper_next = ring + next;
            let lower_next = next_ring + next;

            indices.extend_from_slice(&[upper, upper_next, lower]);
            indices.extend_from_slice(&[upper_next, lower_next, lower]);
        }
    }

    Mesh::from_parts(vertices, indices)
}

/// One box face: outward normal and the in-plane basis, with `u × v = normal`.
struct BoxFace {
    normal: [f32; 3],
    u: [f32; 3],
    v: [f32; 3],
}

// +X, -X, +Y, -Y, +Z, -Z
const BOX_FACES: [BoxFace; 6] = [
    BoxFace {
        normal: [1.0, 0.0, 0.0],
        u: [0.0, 1.0, 0.0],
        v: [0.0, 0.0, 1.0],
    },
    BoxFace {
        normal: [-1.0, 0.0, 0.0],
        u: [0.0, 0.0, 1.0],
        v: [0.0, 1.0, 0.0],
    },
    BoxFace {
        normal: [0.0, 1.0, 0.0],
        u: [0.0, 0.0, 1.0],
        v: [1.0, 0.0, 0.0],
    },
    BoxFace {
        normal: [0.0, -1.0, 0.0],
        u: [1.0, 0.0, 0.0],
        v: [0.0, 0.0, 1.0],
    },
    BoxFace {
        normal: [0.0, 0.0, 1.0],
        u: [1.0, 0.0, 0.0],
        v: [0.0, 1.0, 0.0],
    },
    BoxFace {
        normal: [0.0, 0.0, -1.0],
        u: [0.0, 1.0, 0.0],
        v: [1.0, 0.0, 0.0],
    },
];

/// Generate a cube of edge length `size` centred at the origin.
///
/// Every face is a `(d+1)×(d+1)` vertex grid with its own normal. Grid
/// coordinates are looked up in a single tick table, so vertices on an edge
/// shared by two faces have bit-identical positions.
pub fn generate_box(size: f32, level: TessellationLevel) -> Mesh {
    let divisions = box_divisions(level);
    let half = size * 0.5;
    let ticks: Vec<f32> = (0..=divisions)
        .map(|k| -half + size * k as f32 / divisions as f32)
        .collect();

    let row = divisions + 1;
    let mut vertices = Vec::with_capacity(BOX_FACES.len() * (row * row) as usize);
    let mut indices = Vec::with_capacity(BOX_FACES.len() * (divisions * divisions * 6) as usize);

    for face in &BOX_FACES {
        let base = vertices.len() as u32;

        for &s in &ticks {
            for &t in &ticks {
                let position = [0, 1, 2].map(|c| face.normal[c] * half + face.u[c] * s + face.v[c] * t);
                vertices.push(Vertex3D::new(position, face.normal));
            }
        }

        for i in 0..divisions {
            for j in 0..divisions {
                let a = base + i * row + j;
                let b = a + row; // one step along u
                let c = b + 1;
                let d = a + 1; // one step along v

                indices.extend_from_slice(&[a, b, c]);
                indices.extend_from_slice(&[a, c, d]);
            }
        }
    }

    Mesh::from_parts(vertices, indices)
}

/// Generate a cylinder along Y, from `-height/2` to `height/2`.
///
/// Layout: bottom cap centre and ring, top cap centre and ring, then the
/// lateral bottom and top rings. Caps and sides keep separate vertices so
/// each carries its own normal; all rings come from one angle table.
pub fn generate_cylinder(radius: f32, height: f32, level: TessellationLevel) -> Mesh {
    let segs = angular_divisions(level);
    let circle = unit_circle(segs);
    let half_height = height * 0.5;

    let mut vertices = Vec::with_capacity((4 * segs + 2) as usize);
    let mut indices = Vec::with_capacity((4 * segs * 3) as usize);

    let ring_point = |(cos_a, sin_a): (f32, f32), y: f32| [radius * cos_a, y, radius * sin_a];

    let bottom_center = vertices.len() as u32;
    vertices.push(Vertex3D::new([0.0, -half_height, 0.0], [0.0, -1.0, 0.0]));
    for &angle in &circle {
        vertices.push(Vertex3D::new(ring_point(angle, -half_height), [0.0, -1.0, 0.0]));
    }

    let top_center = vertices.len() as u32;
    vertices.push(Vertex3D::new([0.0, half_height, 0.0], [0.0, 1.0, 0.0]));
    for &angle in &circle {
        vertices.push(Vertex3D::new(ring_point(angle, half_height), [0.0, 1.0, 0.0]));
    }

    let side_bottom = vertices.len() as u32;
    for &angle in &circle {
        vertices.push(Vertex3D::new(ring_point(angle, -half_height), [angle.0, 0.0, angle.1]));
    }
    let side_top = vertices.len() as u32;
    for &angle in &circle {
        vertices.push(Vertex3D::new(ring_point(angle, half_height), [angle.0, 0.0, angle.1]));
    }

    for i in 0..segs {
        let next = (i + 1) % segs;

        // Bottom cap
        indices.extend_from_slice(&[bottom_center, bottom_center + 1 + i, bottom_center + 1 + next]);
        // Top cap, reverse winding
        indices.extend_from_slice(&[top_center, top_center + 1 + next, top_center + 1 + i]);
        // Side quad
        indices.extend_from_slice(&[side_bottom + i, side_top + i, side_bottom + next]);
        indices.extend_from_slice(&[side_bottom + next, side_top + i, side_top + next]);
    }

    Mesh::from_parts(vertices, indices)
}

/// Generate a cone with its base centred on the origin and apex at `(0, height, 0)`.
pub fn generate_cone(radius: f32, height: f32, level: TessellationLevel) -> Mesh {
    let segs = angular_divisions(level);
    let circle = unit_circle(segs);

    let mut vertices = Vec::with_capacity((2 * segs + 2) as usize);
    let mut indices = Vec::with_capacity((2 * segs * 3) as usize);

    let base_center = vertices.len() as u32;
    vertices.push(Vertex3D::new([0.0, 0.0, 0.0], [0.0, -1.0, 0.0]));
    for &(cos_a, sin_a) in &circle {
        vertices.push(Vertex3D::new([radius * cos_a, 0.0, radius * sin_a], [0.0, -1.0, 0.0]));
    }

    let side = vertices.len() as u32;
    for &(cos_a, sin_a) in &circle {
        let normal = normalize([height * cos_a, radius, height * sin_a]);
        vertices.push(Vertex3D::new([radius * cos_a, 0.0, radius * sin_a], normal));
    }

    let apex = vertices.len() as u32;
    vertices.push(Vertex3D::new([0.0, height, 0.0], [0.0, 1.0, 0.0]));

    for i in 0..segs {
        let next = (i + 1) % segs;

        indices.extend_from_slice(&[base_center, base_center + 1 + i, base_center + 1 + next]);
        indices.extend_from_slice(&[side + i, apex, side + next]);
    }

    Mesh::from_parts(vertices, indices)
}
