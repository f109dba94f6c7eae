//! Triangle geometry upload
//!
//! One immutable vertex buffer holding three vertices of interleaved
//! position (vec3) and texcoord (vec2) data, described by a single
//! vertex array object.

use glow::HasContext;

use crate::render::{RenderError, RenderResult};

/// Number of vertices drawn per frame
pub const VERTEX_COUNT: i32 = 3;

/// Floats per vertex: vec3 position + vec2 texcoord
pub const FLOATS_PER_VERTEX: usize = 5;

/// Byte stride between consecutive vertices
pub const VERTEX_STRIDE_BYTES: i32 = (FLOATS_PER_VERTEX * std::mem::size_of::<f32>()) as i32;

/// Byte offset of the texcoord attribute within a vertex
pub const TEXCOORD_OFFSET_BYTES: i32 = (3 * std::mem::size_of::<f32>()) as i32;

/// The demonstration triangle, interleaved position/texcoord
pub const TRIANGLE_VERTICES: [f32; VERTEX_COUNT as usize * FLOATS_PER_VERTEX] = [
    // positions        // texcoords
    -0.5, -0.5, 0.0, 0.0, 0.0, //
    0.5, -0.5, 0.0, 1.0, 0.0, //
    0.0, 0.5, 0.0, 0.5, 1.0, //
];

/// GPU-resident triangle: vertex buffer plus vertex array description
pub struct TriangleMesh {
    vbo: glow::Buffer,
    vao: glow::VertexArray,
}

impl TriangleMesh {
    /// Upload the fixed triangle once at startup
    ///
    /// # Errors
    ///
    /// Fails only when the driver refuses to allocate the buffer or
    /// vertex array objects.
    pub fn new(gl: &glow::Context) -> RenderResult<Self> {
        let vao = unsafe { gl.create_vertex_array() }.map_err(RenderError::ObjectCreation)?;
        let vbo = unsafe { gl.create_buffer() }.map_err(RenderError::ObjectCreation)?;

        unsafe {
            gl.bind_vertex_array(Some(vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(&TRIANGLE_VERTICES),
                glow::STATIC_DRAW,
            );

            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, VERTEX_STRIDE_BYTES, 0);
            gl.enable_vertex_attrib_array(0);

            gl.vertex_attrib_pointer_f32(
                1,
                2,
                glow::FLOAT,
                false,
                VERTEX_STRIDE_BYTES,
                TEXCOORD_OFFSET_BYTES,
            );
            gl.enable_vertex_attrib_array(1);

            gl.bind_vertex_array(None);
        }

        Ok(Self { vbo, vao })
    }

    /// Bind the vertex array and issue the draw call
    pub fn draw(&self, gl: &glow::Context) {
        unsafe {
            gl.bind_vertex_array(Some(self.vao));
            gl.draw_arrays(glow::TRIANGLES, 0, VERTEX_COUNT);
        }
    }

    /// Delete buffer and vertex array
    pub fn destroy(&self, gl: &glow::Context) {
        unsafe {
            gl.delete_vertex_array(self.vao);
            gl.delete_buffer(self.vbo);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout_constants() {
        assert_eq!(TRIANGLE_VERTICES.len(), 15);
        assert_eq!(VERTEX_STRIDE_BYTES, 20);
        assert_eq!(TEXCOORD_OFFSET_BYTES, 12);
        assert_eq!(std::mem::size_of_val(&TRIANGLE_VERTICES), 60);
    }

    #[test]
    fn test_texcoords_stay_in_unit_range() {
        for vertex in TRIANGLE_VERTICES.chunks_exact(FLOATS_PER_VERTEX) {
            let (u, v) = (vertex[3], vertex[4]);
            assert!((0.0..=1.0).contains(&u));
            assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn test_vertex_bytes_cast() {
        let bytes: &[u8] = bytemuck::cast_slice(&TRIANGLE_VERTICES);
        assert_eq!(bytes.len(), 60);
    }
}
