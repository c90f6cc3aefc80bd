//! CPU-side geometry: the [`MeshData`] value and generators for canonical shapes.

/// Vertex attributes and index list for one mesh.
///
/// `positions` holds xyz triples and `colors` rgba quadruples, one per vertex.
/// Indices are not validated here; they must address existing vertices.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeshData {
    pub positions: Vec<f32>,
    pub colors: Vec<f32>,
    pub indices: Vec<u16>,
}

impl MeshData {
    pub fn new(positions: Vec<f32>, colors: Vec<f32>, indices: Vec<u16>) -> Self {
        Self {
            positions,
            colors,
            indices,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }
}

const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
const YELLOW: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
const CYAN: [f32; 4] = [0.0, 1.0, 1.0, 1.0];
const MAGENTA: [f32; 4] = [1.0, 0.0, 1.0, 1.0];

/// Face colors of [`make_box`], in face order top, bottom, front, back, left, right.
pub const BOX_FACE_COLORS: [[f32; 4]; 6] = [RED, GREEN, BLUE, YELLOW, CYAN, MAGENTA];

pub fn make_triangle(scale: f32) -> MeshData {
    #[rustfmt::skip]
    let positions = vec![
        -scale, -scale, 0.0,
         scale, -scale, 0.0,
         0.0,    scale, 0.0,
    ];
    #[rustfmt::skip]
    let colors = vec![
        1.0, 0.0, 0.0, 1.0,
        0.0, 1.0, 0.0, 1.0,
        0.5, 0.5, 1.0, 1.0,
    ];
    MeshData::new(positions, colors, vec![0, 1, 2])
}

pub fn make_square(scale: f32) -> MeshData {
    #[rustfmt::skip]
    let positions = vec![
        -scale, -scale, 0.0,
         scale, -scale, 0.0,
         scale,  scale, 0.0,
        -scale,  scale, 0.0,
    ];
    #[rustfmt::skip]
    let colors = vec![
        1.0, 1.0, 1.0, 1.0,
        0.0, 1.0, 1.0, 1.0,
        1.0, 0.0, 1.0, 1.0,
        1.0, 1.0, 0.0, 1.0,
    ];
    MeshData::new(positions, colors, vec![0, 1, 2, 0, 2, 3])
}

/// Axis-aligned cube with half-extent `scale`: four vertices and one solid color per face.
pub fn make_box(scale: f32) -> MeshData {
    let s = scale;
    #[rustfmt::skip]
    let faces: [[[f32; 3]; 4]; 6] = [
        // top
        [[-s,  s, -s], [-s,  s,  s], [ s,  s,  s], [ s,  s, -s]],
        // bottom
        [[-s, -s, -s], [ s, -s, -s], [ s, -s,  s], [-s, -s,  s]],
        // front
        [[-s, -s, -s], [-s,  s, -s], [ s,  s, -s], [ s, -s, -s]],
        // back
        [[-s, -s,  s], [ s, -s,  s], [ s,  s,  s], [-s,  s,  s]],
        // left
        [[-s, -s,  s], [-s,  s,  s], [-s,  s, -s], [-s, -s, -s]],
        // right
        [[ s, -s,  s], [ s, -s, -s], [ s,  s, -s], [ s,  s,  s]],
    ];

    let mut positions = Vec::with_capacity(6 * 4 * 3);
    let mut colors = Vec::with_capacity(6 * 4 * 4);
    let mut indices = Vec::with_capacity(6 * 6);

    for (face, (corners, color)) in faces.iter().zip(BOX_FACE_COLORS).enumerate() {
        for corner in corners {
            positions.extend_from_slice(corner);
            colors.extend_from_slice(&color);
        }
        let base = (face * 4) as u16;
        indices.extend([base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    MeshData::new(positions, colors, indices)
}
