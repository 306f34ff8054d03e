//! Interleaved vertex layout
//!
//! Every vertex of a generated mesh is packed into one fixed 32-byte record:
//!
//! | Offset | Attribute | Type |
//! |--------|-----------|------|
//! | 0      | Position  | f32x3 |
//! | 12     | Normal    | f32x3 |
//! | 24     | TexCoord  | f32x2 |
//!
//! Renderers bind the buffer with this stride and these offsets, so the record
//! must never change shape.

use bytemuck::{Pod, Zeroable};

/// Number of floats in one interleaved record
pub const INTERLEAVED_FLOATS: usize = 8;

/// Byte distance between consecutive interleaved records
pub const INTERLEAVED_STRIDE: usize = 32;

/// Byte offset of the position inside a record
pub const POSITION_OFFSET: usize = 0;

/// Byte offset of the normal inside a record
pub const NORMAL_OFFSET: usize = 12;

/// Byte offset of the texture coordinate inside a record
pub const TEX_COORD_OFFSET: usize = 24;

/// One interleaved vertex: position, normal, texture coordinate
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct InterleavedVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub tex_coord: [f32; 2],
}

const _: () = assert!(std::mem::size_of::<InterleavedVertex>() == INTERLEAVED_STRIDE);
const _: () = assert!(std::mem::offset_of!(InterleavedVertex, position) == POSITION_OFFSET);
const _: () = assert!(std::mem::offset_of!(InterleavedVertex, normal) == NORMAL_OFFSET);
const _: () = assert!(std::mem::offset_of!(InterleavedVertex, tex_coord) == TEX_COORD_OFFSET);

impl InterleavedVertex {
    /// Create a new interleaved vertex
    pub fn new(position: [f32; 3], normal: [f32; 3], tex_coord: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            tex_coord,
        }
    }
}

/// Description of one attribute inside the interleaved record
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Human readable attribute name
    pub name: &'static str,
    /// Number of f32 components
    pub components: u32,
    /// Byte offset from the start of the record
    pub offset: usize,
}

/// Attribute table for [`InterleavedVertex`], in record order
pub const INTERLEAVED_ATTRIBUTES: [VertexAttribute; 3] = [
    VertexAttribute {
        name: "position",
        components: 3,
        offset: POSITION_OFFSET,
    },
    VertexAttribute {
        name: "normal",
        components: 3,
        offset: NORMAL_OFFSET,
    },
    VertexAttribute {
        name: "tex_coord",
        components: 2,
        offset: TEX_COORD_OFFSET,
    },
];
