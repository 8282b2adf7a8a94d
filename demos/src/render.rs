//! Plain-text rendering of search results.

use pathviz_core::{Board, Point, layout};
use pathviz_search::{SearchResult, Step, StepKind};

/// Glyph for a traced cell.
pub const VISITED: char = 'o';
/// Glyph for a path cell.
pub const PATH: char = '*';

/// What a board cell shows once some steps have been revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Open,
    Wall,
    Start,
    Finish,
    Visited,
    Path,
}

impl Mark {
    pub fn glyph(self) -> char {
        match self {
            Mark::Open => layout::OPEN,
            Mark::Wall => layout::WALL,
            Mark::Start => layout::START,
            Mark::Finish => layout::FINISH,
            Mark::Visited => VISITED,
            Mark::Path => PATH,
        }
    }
}

/// Per-cell marks for a board, with endpoints always on top.
pub struct Canvas<'a> {
    board: &'a Board,
    marks: Vec<Mark>,
}

impl<'a> Canvas<'a> {
    pub fn new(board: &'a Board) -> Self {
        let marks = board
            .bounds()
            .iter()
            .map(|p| static_mark(board, p))
            .collect();
        Self { board, marks }
    }

    /// Apply one reveal step. Returns the new mark, or `None` when the cell
    /// is an endpoint or outside the board.
    pub fn reveal(&mut self, step: &Step) -> Option<Mark> {
        let b = self.board.bounds();
        if !b.contains(step.pos) || step.pos == self.board.start() || step.pos == self.board.finish()
        {
            return None;
        }
        let mark = match step.kind {
            StepKind::Visited => Mark::Visited,
            StepKind::Path => Mark::Path,
        };
        let i = (step.pos.y * b.width() + step.pos.x) as usize;
        self.marks[i] = mark;
        Some(mark)
    }

    pub fn mark(&self, p: Point) -> Mark {
        let b = self.board.bounds();
        if !b.contains(p) {
            return Mark::Open;
        }
        self.marks[(p.y * b.width() + p.x) as usize]
    }

    pub fn to_text(&self) -> String {
        let b = self.board.bounds();
        let mut out = String::with_capacity(self.marks.len() + b.height() as usize);
        for row in self.marks.chunks(b.width().max(1) as usize) {
            out.extend(row.iter().map(|m| m.glyph()));
            out.push('\n');
        }
        out.pop();
        out
    }
}

fn static_mark(board: &Board, p: Point) -> Mark {
    if p == board.start() {
        Mark::Start
    } else if p == board.finish() {
        Mark::Finish
    } else if board.is_wall(p) {
        Mark::Wall
    } else {
        Mark::Open
    }
}

/// The board with the whole trace and, when found, the path drawn over it.
pub fn render(board: &Board, result: &SearchResult) -> String {
    let mut canvas = Canvas::new(board);
    for &pos in &result.trace {
        canvas.reveal(&Step {
            at_ms: 0,
            pos,
            kind: StepKind::Visited,
        });
    }
    if result.found {
        for &pos in &result.path {
            canvas.reveal(&Step {
                at_ms: 0,
                pos,
                kind: StepKind::Path,
            });
        }
    }
    canvas.to_text()
}

/// One line: algorithm, cells visited, path length.
pub fn summary(result: &SearchResult) -> String {
    let path = match result.path_edges() {
        Some(n) => format!("path {n} steps"),
        None => "no path".to_string(),
    };
    format!(
        "{:<26} visited {:>5}  {}",
        result.algorithm.label(),
        result.trace.len(),
        path
    )
}
