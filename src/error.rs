use serde_json::Error as SerdeError;
use std::fmt;
use std::io;

/// Error type for the tile engine core.
#[derive(Debug)]
pub enum Error {
    /// Sprite sheet dimensions are not positive multiples of the tile footprint.
    InvalidSheetSize {
        /// Sheet width in pixels.
        width: u32,
        /// Sheet height in pixels.
        height: u32,
    },
    /// Map content referenced a tile index outside the sprite sheet.
    TileIndexOutOfRange {
        /// The offending tile index.
        index: u32,
        /// Number of tiles the sheet actually holds.
        tile_count: u32,
    },
    /// Supplied map data carries more rows or columns than the map grid.
    MapDataOutOfBounds {
        /// Rows in the supplied data.
        rows: usize,
        /// Widest row in the supplied data.
        columns: usize,
        /// Allocated grid width.
        map_width: usize,
        /// Allocated grid height.
        map_height: usize,
    },
    /// JSON parse error while decoding map data.
    Parse(SerdeError),
    /// File I/O error while reading map data.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSheetSize { width, height } => write!(
                f,
                "sprite sheet {}x{} is not a whole grid of tiles",
                width, height
            ),
            Error::TileIndexOutOfRange { index, tile_count } => write!(
                f,
                "tile index {} out of range (sheet holds {} tiles)",
                index, tile_count
            ),
            Error::MapDataOutOfBounds {
                rows,
                columns,
                map_width,
                map_height,
            } => write!(
                f,
                "map data of {}x{} cells exceeds the {}x{} grid",
                columns, rows, map_width, map_height
            ),
            Error::Parse(e) => write!(f, "JSON parse error: {}", e),
            Error::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<SerdeError> for Error {
    fn from(err: SerdeError) -> Self {
        Error::Parse(err)
    }
}

impl std::error::Error for Error {}
