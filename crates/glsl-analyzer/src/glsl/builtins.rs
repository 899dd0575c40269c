//! Built-in GLSL types accepted as function return types.
//!
//! See <https://www.khronos.org/opengl/wiki/Data_Type_(GLSL)>.

/// Scalars first, then the 2/3/4-component vectors of each element kind.
pub const BUILTIN_TYPES: &[&str] = &[
    "bool", "int", "uint", "float", //
    "bvec2", "bvec3", "bvec4", //
    "ivec2", "ivec3", "ivec4", //
    "uvec2", "uvec3", "uvec4", //
    "vec2", "vec3", "vec4",
];

/// Not a value type, but always an admissible return type.
pub const VOID_TYPE: &str = "void";

#[cfg(test)]
#[path = "../../tests/src/glsl/builtins_tests.rs"]
mod tests;
