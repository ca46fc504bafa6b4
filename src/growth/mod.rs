use crate::profiler::ScopedTimer;

/// Fixed-layout record inserted repeatedly by the benchmark: a labeled
/// 3D point with an id and a parent id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    pub id: i32,
    pub pid: i32,
    pub xyz: [f32; 3],
}

impl Grid {
    pub const fn new(id: i32, pid: i32, x: f32, y: f32, z: f32) -> Self {
        Self {
            id,
            pid,
            xyz: [x, y, z],
        }
    }
}

/// The constant record both routines append n times.
pub const SAMPLE_GRID: Grid = Grid::new(3, 4, 0.5, 0.6, 0.7);

/// Push n copies one at a time, letting the Vec regrow on its own.
/// Every reallocation copies all existing elements; that cost is what
/// the benchmark exposes.
pub fn fill_grids(n: usize) -> Vec<Grid> {
    let mut v = Vec::new();
    for _ in 0..n {
        v.push(SAMPLE_GRID);
    }
    v
}

/// Same loop, but the backing storage is reserved upfront so no push
/// reallocates.
pub fn fill_grids_reserved(n: usize) -> Vec<Grid> {
    let mut v = Vec::with_capacity(n);
    for _ in 0..n {
        v.push(SAMPLE_GRID);
    }
    v
}

/// Replays the unreserved fill and counts how many times the backing
/// storage moved. Not timed; used for debug reporting and tests.
pub fn count_reallocs(n: usize) -> usize {
    let mut v: Vec<Grid> = Vec::new();
    let mut cap = v.capacity();
    let mut moves = 0;
    for _ in 0..n {
        v.push(SAMPLE_GRID);
        if v.capacity() != cap {
            cap = v.capacity();
            moves += 1;
        }
    }
    moves
}

/// Timed benchmark: grow without a capacity hint. Returns the final
/// length so callers can sanity-check the run.
pub fn vec_alloc(n: usize) -> usize {
    let _tmr = ScopedTimer::new("vec_alloc");
    fill_grids(n).len()
}

/// Timed benchmark: identical loop with an upfront reserve.
pub fn vec_alloc_by_reserve(n: usize) -> usize {
    let _tmr = ScopedTimer::new("vec_alloc_by_reserve");
    fill_grids_reserved(n).len()
}
