use crate::error::Error;
use crate::mouse_map::MouseMap;
use crate::tile::HEIGHT_TILE_OFFSET;
use macroquad::logging::info;
use macroquad::rand::ChooseRandom;

/// Per-cell stack of the three tile layers.
///
/// Each layer is an ordered, growable sequence of sheet indices; appends
/// never reorder earlier entries.
#[derive(Debug, Clone, Default)]
pub struct MapCell {
    /// Ground layer, typically one entry.
    pub base_tiles: Vec<u32>,
    /// Elevation stack, drawn bottom to top.
    pub height_tiles: Vec<u32>,
    /// Decorations drawn above the full height stack.
    pub topper_tiles: Vec<u32>,
}

impl MapCell {
    /// Cell with a single base tile.
    pub fn with_tile_id(tile_id: u32) -> Self {
        MapCell {
            base_tiles: vec![tile_id],
            ..Default::default()
        }
    }

    /// First base tile, or 0 for an empty cell.
    pub fn tile_id(&self) -> u32 {
        self.base_tiles.first().copied().unwrap_or(0)
    }

    /// Replaces the first base tile (appends when the layer is empty).
    pub fn set_tile_id(&mut self, tile_id: u32) {
        match self.base_tiles.first_mut() {
            Some(first) => *first = tile_id,
            None => self.base_tiles.push(tile_id),
        }
    }

    /// Appends to the ground layer.
    pub fn add_base_tile(&mut self, tile_id: u32) {
        self.base_tiles.push(tile_id);
    }

    /// Appends to the elevation stack.
    pub fn add_height_tile(&mut self, tile_id: u32) {
        self.height_tiles.push(tile_id);
    }

    /// Appends to the topper layer.
    pub fn add_topper_tile(&mut self, tile_id: u32) {
        self.topper_tiles.push(tile_id);
    }

    /// Vertical lift, in pixels, for anything standing on this cell.
    pub fn elevation(&self) -> i32 {
        self.height_tiles.len() as i32 * HEIGHT_TILE_OFFSET
    }
}

/// One map row; `columns.len()` equals the map width.
#[derive(Debug, Clone, Default)]
pub struct MapRow {
    /// Cells of the row, west to east.
    pub columns: Vec<MapCell>,
}

/// Interchange shape for one supplied cell.
#[derive(Debug, Clone, Default)]
pub struct MapCellData {
    /// Base tile sheet index.
    pub tile_id: u32,
    /// Elevation stack, bottom to top.
    pub height_tiles: Vec<u32>,
    /// Topper layer.
    pub topper_tiles: Vec<u32>,
}

/// Interchange shape for one supplied row.
#[derive(Debug, Clone, Default)]
pub struct MapRowData {
    /// Supplied cells, west to east.
    pub columns: Vec<MapCellData>,
}

/// A resolved map-cell hit: the cell a world point lies over plus the
/// point's position local to that cell's hit-test bitmap frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellHit {
    /// Staggered map coordinates, possibly outside the grid.
    pub cell: (i32, i32),
    /// Sub-cell point, rebased into the resolved cell's frame.
    pub local: (i32, i32),
}

// Weight-biased ground fill: 1 and 0 at 6/13 each, 6 at 1/13.
const DIRT_CELLS: [u32; 13] = [0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 6];

// Hand-authored sample structure: a grass/water patch and a small
// ramp-and-hill silhouette. Placeholder content, not part of the contract.
const SAMPLE_BASE: &[(usize, usize, u32)] = &[
    (3, 0, 3), (4, 0, 3), (5, 0, 1), (6, 0, 1), (7, 0, 1),
    (3, 1, 3), (4, 1, 1), (5, 1, 1), (6, 1, 1), (7, 1, 1),
    (2, 2, 3), (3, 2, 1), (4, 2, 1), (5, 2, 1), (6, 2, 1), (7, 2, 1),
    (2, 3, 3), (3, 3, 1), (4, 3, 1), (5, 3, 2), (6, 3, 2), (7, 3, 2),
    (2, 4, 3), (3, 4, 1), (4, 4, 1), (5, 4, 2), (6, 4, 2), (7, 4, 2),
    (2, 5, 3), (3, 5, 1), (4, 5, 1), (5, 5, 2), (6, 5, 2), (7, 5, 2),
];

// Append order matters: it is the stack order.
const SAMPLE_HEIGHTS: &[(usize, usize, u32)] = &[
    (4, 16, 54),
    (3, 17, 54),
    (3, 15, 54),
    (3, 16, 53),
    (4, 15, 54), (4, 15, 54), (4, 15, 51),
    (3, 18, 51),
    (3, 19, 50),
    (4, 18, 55),
    (4, 14, 54),
    (5, 14, 62), (5, 14, 61), (5, 14, 63),
];

const SAMPLE_TOPPERS: &[(usize, usize, u32)] = &[
    (4, 17, 114),
    (5, 16, 115),
    (4, 14, 125),
    (5, 15, 91),
    (6, 16, 94),
];

/// 2D grid of [`MapCell`]s plus the hit-test bitmap used for inverse
/// coordinate mapping. The grid shape is fixed at construction.
#[derive(Debug, Clone)]
pub struct TileMap {
    /// Rows of the grid, north to south; `rows.len()` equals the map height.
    pub rows: Vec<MapRow>,
    map_width: usize,
    map_height: usize,
    mouse_map: MouseMap,
}

impl TileMap {
    /// Procedurally seeded map: every cell gets one base tile drawn
    /// uniformly from the weight-biased dirt list, then the fixed sample
    /// overlay is stamped on top.
    pub fn generate(map_width: usize, map_height: usize, mouse_map: MouseMap) -> Self {
        let mut map = Self::blank(map_width, map_height, mouse_map);
        let mut deck = DIRT_CELLS.to_vec();
        for row in &mut map.rows {
            for cell in &mut row.columns {
                deck.shuffle();
                cell.set_tile_id(deck[0]);
            }
        }
        map.stamp_sample_overlay();
        info!("generated {}x{} sample map", map_width, map_height);
        map
    }

    /// Map populated from supplied row data, copied field by field,
    /// row-major. Data larger than the grid is fatal.
    pub fn with_data(
        map_width: usize,
        map_height: usize,
        data: &[MapRowData],
        mouse_map: MouseMap,
    ) -> Result<Self, Error> {
        let widest = data.iter().map(|r| r.columns.len()).max().unwrap_or(0);
        if data.len() > map_height || widest > map_width {
            return Err(Error::MapDataOutOfBounds {
                rows: data.len(),
                columns: widest,
                map_width,
                map_height,
            });
        }

        let mut map = Self::blank(map_width, map_height, mouse_map);
        for (y, row) in data.iter().enumerate() {
            for (x, cell) in row.columns.iter().enumerate() {
                let target = &mut map.rows[y].columns[x];
                target.set_tile_id(cell.tile_id);
                target.height_tiles = cell.height_tiles.clone();
                target.topper_tiles = cell.topper_tiles.clone();
            }
        }
        Ok(map)
    }

    fn blank(map_width: usize, map_height: usize, mouse_map: MouseMap) -> Self {
        let rows = (0..map_height)
            .map(|_| MapRow {
                columns: (0..map_width).map(|_| MapCell::default()).collect(),
            })
            .collect();
        TileMap {
            rows,
            map_width,
            map_height,
            mouse_map,
        }
    }

    fn stamp_sample_overlay(&mut self) {
        for &(x, y, id) in SAMPLE_BASE {
            if let Some(cell) = self.cell_mut(x, y) {
                cell.set_tile_id(id);
            }
        }
        for &(x, y, id) in SAMPLE_HEIGHTS {
            if let Some(cell) = self.cell_mut(x, y) {
                cell.add_height_tile(id);
            }
        }
        for &(x, y, id) in SAMPLE_TOPPERS {
            if let Some(cell) = self.cell_mut(x, y) {
                cell.add_topper_tile(id);
            }
        }
    }

    /// Grid width in cells.
    pub fn map_width(&self) -> usize {
        self.map_width
    }

    /// Grid height in cells.
    pub fn map_height(&self) -> usize {
        self.map_height
    }

    /// Bounds-checked cell accessor.
    pub fn cell(&self, x: usize, y: usize) -> Option<&MapCell> {
        self.rows.get(y).and_then(|row| row.columns.get(x))
    }

    /// Bounds-checked mutable cell accessor.
    pub fn cell_mut(&mut self, x: usize, y: usize) -> Option<&mut MapCell> {
        self.rows.get_mut(y).and_then(|row| row.columns.get_mut(x))
    }

    /// Resolves which map cell a world-space point lies over.
    ///
    /// A coarse cell is guessed by integer division against the hit-test
    /// bitmap's period, then the bitmap's color at the point's sub-tile
    /// position corrects into the right diagonal neighbor. The constant
    /// `-2` row shift compensates for the bitmap's vertical period being
    /// half a tile row pitch.
    pub fn world_to_map_cell(&self, world_x: i32, world_y: i32) -> CellHit {
        let w = self.mouse_map.width();
        let h = self.mouse_map.height();

        let coarse_x = world_x / w;
        let coarse_y = (world_y / h) * 2;

        let mut local_x = world_x % w;
        let mut local_y = world_y % h;

        let adjust = self.mouse_map.classify(local_x, local_y);
        local_x += adjust.local_dx;
        local_y += adjust.local_dy;

        CellHit {
            cell: (coarse_x + adjust.dx, coarse_y + adjust.dy - 2),
            local: (local_x, local_y),
        }
    }

    /// [`world_to_map_cell`](Self::world_to_map_cell) for callers that
    /// only want the cell.
    pub fn map_cell_at(&self, world_x: i32, world_y: i32) -> (i32, i32) {
        self.world_to_map_cell(world_x, world_y).cell
    }
}
