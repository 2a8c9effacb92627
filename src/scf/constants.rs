//! Container format constants
//!
//! Fixed sizes, command codes and scale factors of the sprite container
//! layout.

/// File header constants
pub mod header {
    /// Object counts at the start of the stream, not needed for decoding
    pub const OBJECT_COUNTS_SIZE: usize = 12;

    /// Reserved bytes following the object counts
    pub const RESERVED_SIZE: usize = 5;
}

/// Record header constants
pub mod record {
    /// Tag type that ends the record stream
    pub const END_TAG: u8 = 0;
}

/// Shape and movie clip command constants
pub mod command {
    /// Command type that ends a shape's command list early
    pub const END: u8 = 0;

    /// The only shape command type carrying geometry
    pub const DRAW_BITMAP: u8 = 4;

    /// Vertices in every shape draw command
    pub const QUAD_VERTICES: usize = 4;

    /// Movie clips are only decoded when they hold exactly this many commands
    pub const MOVIE_CLIP_COMMANDS: u16 = 1;

    /// Vertex count that ends a movie clip's command list
    pub const NO_VERTICES: u8 = 0;
}

/// Fixed-point scale factors
pub mod scale {
    /// Divisor for the a, b, c, d matrix coefficients
    pub const MATRIX_COEFFICIENT: f64 = 1024.0;

    /// Divisor for translations and vertex positions (twips, y-down)
    pub const TWIPS: f64 = -20.0;
}

/// Identifier given to movie clips that could not be decoded
pub const INVALID_CLIP_ID: i32 = -1;
