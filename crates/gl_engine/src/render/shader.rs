//! Shader compilation and linking
//!
//! The demonstration uses a single pass-through program: positions go
//! straight to clip space, texcoords are interpolated, and the fragment
//! stage samples one texture. Compile and link failures are reported to
//! the log and the (possibly invalid) program is kept, matching the
//! degraded-mode failure semantics of the rest of the renderer.

use glow::HasContext;

use crate::render::{RenderError, RenderResult};

/// Pass-through vertex stage: position at location 0, texcoord at 1
pub const TRIANGLE_VERTEX_SHADER: &str = r"
#version 330 core
layout (location = 0) in vec3 aPos;
layout (location = 1) in vec2 aTexCoord;

out vec2 TexCoord;

void main()
{
    gl_Position = vec4(aPos, 1.0);
    TexCoord = aTexCoord;
}
";

/// Fragment stage sampling a single texture
pub const TRIANGLE_FRAGMENT_SHADER: &str = r"
#version 330 core
out vec4 FragColor;

in vec2 TexCoord;

uniform sampler2D texture1;

void main()
{
    FragColor = texture(texture1, TexCoord);
}
";

/// Linked shader program handle
pub struct ShaderProgram {
    program: glow::Program,
}

impl ShaderProgram {
    /// Compile both stages and link them into a program
    ///
    /// Compile and link diagnostics are logged, not returned: the program
    /// handle remains usable for binding even when linking failed, the
    /// visual output is simply undefined.
    ///
    /// # Errors
    ///
    /// Only object creation itself can fail here, which indicates a
    /// broken context rather than bad shader source.
    pub fn link(
        gl: &glow::Context,
        vertex_source: &str,
        fragment_source: &str,
    ) -> RenderResult<Self> {
        let vertex = compile_stage(gl, glow::VERTEX_SHADER, vertex_source)?;
        let fragment = compile_stage(gl, glow::FRAGMENT_SHADER, fragment_source)?;

        let program = unsafe { gl.create_program() }.map_err(RenderError::ObjectCreation)?;
        unsafe {
            gl.attach_shader(program, vertex);
            gl.attach_shader(program, fragment);
            gl.link_program(program);
            if !gl.get_program_link_status(program) {
                log::error!(
                    "shader program link failed: {}",
                    gl.get_program_info_log(program)
                );
            }
            // Stages are owned by the program after linking
            gl.delete_shader(vertex);
            gl.delete_shader(fragment);

            // Point the sampler at texture unit 0 once; the binding never changes
            gl.use_program(Some(program));
            let location = gl.get_uniform_location(program, "texture1");
            gl.uniform_1_i32(location.as_ref(), 0);
            gl.use_program(None);
        }

        Ok(Self { program })
    }

    /// Bind the program for drawing
    pub fn bind(&self, gl: &glow::Context) {
        unsafe { gl.use_program(Some(self.program)) }
    }

    /// Delete the program
    pub fn destroy(&self, gl: &glow::Context) {
        unsafe { gl.delete_program(self.program) }
    }
}

fn compile_stage(gl: &glow::Context, stage: u32, source: &str) -> RenderResult<glow::Shader> {
    let shader = unsafe { gl.create_shader(stage) }.map_err(RenderError::ObjectCreation)?;
    unsafe {
        gl.shader_source(shader, source);
        gl.compile_shader(shader);
        if !gl.get_shader_compile_status(shader) {
            log::error!(
                "{} shader compilation failed: {}",
                stage_name(stage),
                gl.get_shader_info_log(shader)
            );
        }
    }
    Ok(shader)
}

const fn stage_name(stage: u32) -> &'static str {
    match stage {
        glow::VERTEX_SHADER => "vertex",
        glow::FRAGMENT_SHADER => "fragment",
        _ => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shader_sources_target_core_profile() {
        assert!(TRIANGLE_VERTEX_SHADER.contains("#version 330 core"));
        assert!(TRIANGLE_FRAGMENT_SHADER.contains("#version 330 core"));
    }

    #[test]
    fn test_vertex_attribute_locations() {
        assert!(TRIANGLE_VERTEX_SHADER.contains("layout (location = 0) in vec3 aPos"));
        assert!(TRIANGLE_VERTEX_SHADER.contains("layout (location = 1) in vec2 aTexCoord"));
    }

    #[test]
    fn test_stage_names() {
        assert_eq!(stage_name(glow::VERTEX_SHADER), "vertex");
        assert_eq!(stage_name(glow::FRAGMENT_SHADER), "fragment");
    }

    #[test]
    #[ignore = "requires GL context"]
    fn linked_program_is_usable_in_same_frame() {
        // Would test: a program linked from the constant sources can be
        // bound and drawn with immediately after creation.
    }
}
