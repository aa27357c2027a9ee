//! The fixed geometry drawn every frame, and a host-side rendition of what the
//! fragment shader does with it.

/// Number of vertices in each attribute array: two triangles.
pub const VERTEX_COUNT: usize = 6;

/// Clip-space positions covering the whole viewport.
pub static POSITIONS: [[f32; 2]; VERTEX_COUNT] = [
    [-1.0, -1.0],
    [1.0, -1.0],
    [-1.0, 1.0],
    //
    [-1.0, 1.0],
    [1.0, -1.0],
    [1.0, 1.0],
];

/// Per-vertex RGB, interpolated across each triangle.
pub static COLORS: [[f32; 3]; VERTEX_COUNT] = [
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    //
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
];

pub const CLEAR_COLOR: [f32; 4] = [0.0, 0.5, 0.0, 0.5];

/// Radius of the visible disc in normalized window coordinates.
pub const CIRCLE_RADIUS: f32 = 0.2;
pub const CIRCLE_CENTER: [f32; 2] = [0.5, 0.5];

/// GLSL `step(edge, x)`.
fn step(edge: f32, x: f32) -> f32 {
    if x < edge {
        0.0
    } else {
        1.0
    }
}

/// 1.0 inside the disc, 0.0 outside, for a normalized coordinate.
///
/// Mirrors `step(length(coord - offset), radius)` in the fragment shader, so
/// the boundary itself counts as inside.
pub fn circle_mask(coord: [f32; 2]) -> f32 {
    let dx = coord[0] - CIRCLE_CENTER[0];
    let dy = coord[1] - CIRCLE_CENTER[1];
    step(dx.hypot(dy), CIRCLE_RADIUS)
}

/// Output color for a fragment at window position `frag_coord`.
pub fn shade(frag_coord: [f32; 2], resolution: [f32; 2], color: [f32; 4]) -> [f32; 4] {
    let coord = [
        frag_coord[0] / resolution[0],
        frag_coord[1] / resolution[1],
    ];
    let mask = circle_mask(coord);
    color.map(|channel| channel * mask)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_inside() {
        assert_eq!(circle_mask([0.5, 0.5]), 1.0);

        let color = [0.25, 0.5, 0.75, 1.0];
        assert_eq!(shade([300.0, 300.0], [600.0, 600.0], color), color);
    }

    #[test]
    fn corner_is_masked() {
        assert_eq!(circle_mask([0.0, 0.0]), 0.0);
        assert_eq!(
            shade([0.0, 0.0], [600.0, 600.0], [1.0, 1.0, 1.0, 1.0]),
            [0.0; 4]
        );
    }

    #[test]
    fn edge_of_disc() {
        assert_eq!(circle_mask([0.5, 0.3]), 1.0);
        assert_eq!(circle_mask([0.5, 0.29]), 0.0);
        assert_eq!(circle_mask([0.69, 0.5]), 1.0);
        assert_eq!(circle_mask([0.71, 0.5]), 0.0);
    }

    #[test]
    fn triangles_cover_the_viewport() {
        assert_eq!(POSITIONS.len(), COLORS.len());
        for corner in [[-1.0, -1.0], [1.0, -1.0], [-1.0, 1.0], [1.0, 1.0]] {
            assert!(POSITIONS.contains(&corner));
        }
    }
}
