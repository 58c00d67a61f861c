//! Shapes module - brick templates and their rotation states
//!
//! Every brick is an identity plus an ordered list of 4x4 rotation matrices. Nonzero entries
//! hold the brick's identity so a matrix can be merged into the grid as-is.
//! Rotation advances through the list and wraps, so symmetric bricks only list their
//! distinct states: I/S/Z have 2, J/L/T have 4 and O has 1.

use arrayvec::ArrayVec;

use crate::types::{BrickKind, Cell, SHAPE_SIZE};

/// One rotation state of a brick, indexed `[row][column]`
pub type ShapeMatrix = [[Cell; SHAPE_SIZE]; SHAPE_SIZE];

/// Occupied `(column, row)` offsets of a shape matrix
pub type ShapeCells = ArrayVec<(i32, i32), { SHAPE_SIZE * SHAPE_SIZE }>;

/// Immutable brick template
#[derive(Debug, PartialEq, Eq)]
pub struct Brick {
    kind: BrickKind,
    rotations: &'static [ShapeMatrix],
}

impl Brick {
    pub fn kind(&self) -> BrickKind {
        self.kind
    }

    /// Cell value painted by this brick
    pub fn id(&self) -> Cell {
        self.kind.id()
    }

    /// Number of distinct rotation states
    pub fn rotation_count(&self) -> usize {
        self.rotations.len()
    }

    /// Shape of rotation state `index`, wrapping past the last state
    pub fn shape(&self, index: usize) -> ShapeMatrix {
        self.rotations[index % self.rotations.len()]
    }

    /// Spawn orientation, also used for previews
    pub fn base_shape(&self) -> ShapeMatrix {
        self.rotations[0]
    }
}

/// Look up the template for a brick kind
pub fn brick(kind: BrickKind) -> &'static Brick {
    match kind {
        BrickKind::I => &I_BRICK,
        BrickKind::J => &J_BRICK,
        BrickKind::L => &L_BRICK,
        BrickKind::O => &O_BRICK,
        BrickKind::S => &S_BRICK,
        BrickKind::T => &T_BRICK,
        BrickKind::Z => &Z_BRICK,
    }
}

/// Occupied offsets of a shape, row-major
pub fn shape_cells(shape: &ShapeMatrix) -> ShapeCells {
    let mut cells = ShapeCells::new();
    for (row, line) in shape.iter().enumerate() {
        for (col, &cell) in line.iter().enumerate() {
            if cell != 0 {
                cells.push((col as i32, row as i32));
            }
        }
    }
    cells
}

static I_BRICK: Brick = Brick {
    kind: BrickKind::I,
    rotations: &I_ROTATIONS,
};

static J_BRICK: Brick = Brick {
    kind: BrickKind::J,
    rotations: &J_ROTATIONS,
};

static L_BRICK: Brick = Brick {
    kind: BrickKind::L,
    rotations: &L_ROTATIONS,
};

static O_BRICK: Brick = Brick {
    kind: BrickKind::O,
    rotations: &O_ROTATIONS,
};

static S_BRICK: Brick = Brick {
    kind: BrickKind::S,
    rotations: &S_ROTATIONS,
};

static T_BRICK: Brick = Brick {
    kind: BrickKind::T,
    rotations: &T_ROTATIONS,
};

static Z_BRICK: Brick = Brick {
    kind: BrickKind::Z,
    rotations: &Z_ROTATIONS,
};

const I_ROTATIONS: [ShapeMatrix; 2] = [
    // Horizontal
    [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]],
    // Vertical
    [[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0]],
];

const J_ROTATIONS: [ShapeMatrix; 4] = [
    [[0, 0, 0, 0], [2, 2, 2, 0], [0, 0, 2, 0], [0, 0, 0, 0]],
    [[0, 0, 0, 0], [0, 2, 2, 0], [0, 2, 0, 0], [0, 2, 0, 0]],
    [[0, 0, 0, 0], [0, 2, 0, 0], [0, 2, 2, 2], [0, 0, 0, 0]],
    [[0, 0, 2, 0], [0, 0, 2, 0], [0, 2, 2, 0], [0, 0, 0, 0]],
];

const L_ROTATIONS: [ShapeMatrix; 4] = [
    [[0, 0, 0, 0], [0, 3, 3, 3], [0, 3, 0, 0], [0, 0, 0, 0]],
    [[0, 0, 0, 0], [0, 3, 3, 0], [0, 0, 3, 0], [0, 0, 3, 0]],
    [[0, 0, 0, 0], [0, 0, 3, 0], [3, 3, 3, 0], [0, 0, 0, 0]],
    [[0, 3, 0, 0], [0, 3, 0, 0], [0, 3, 3, 0], [0, 0, 0, 0]],
];

const O_ROTATIONS: [ShapeMatrix; 1] = [[[0, 0, 0, 0], [0, 4, 4, 0], [0, 4, 4, 0], [0, 0, 0, 0]]];

const S_ROTATIONS: [ShapeMatrix; 2] = [
    [[0, 0, 0, 0], [0, 5, 5, 0], [5, 5, 0, 0], [0, 0, 0, 0]],
    [[5, 0, 0, 0], [5, 5, 0, 0], [0, 5, 0, 0], [0, 0, 0, 0]],
];

const T_ROTATIONS: [ShapeMatrix; 4] = [
    [[0, 0, 0, 0], [6, 6, 6, 0], [0, 6, 0, 0], [0, 0, 0, 0]],
    [[0, 6, 0, 0], [0, 6, 6, 0], [0, 6, 0, 0], [0, 0, 0, 0]],
    [[0, 6, 0, 0], [6, 6, 6, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    [[0, 6, 0, 0], [6, 6, 0, 0], [0, 6, 0, 0], [0, 0, 0, 0]],
];

const Z_ROTATIONS: [ShapeMatrix; 2] = [
    [[0, 0, 0, 0], [7, 7, 0, 0], [0, 7, 7, 0], [0, 0, 0, 0]],
    [[0, 7, 0, 0], [7, 7, 0, 0], [7, 0, 0, 0], [0, 0, 0, 0]],
];
