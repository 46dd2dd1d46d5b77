//! Layer-synchronised breadth-first search.
//!
//! Instead of a FIFO queue every square carries a visitation tag. Each layer
//! is one full rank-major scan of the board that expands all `Queued`
//! squares; squares discovered during the scan are tagged `QueuedNext` and
//! only promoted to `Queued` once the scan is over. All squares at distance
//! *d* are therefore expanded before any square at distance *d + 1*.

use knight_core::{BoardMap, Square};
use log::{debug, trace};

use crate::path::{KnightPath, PathError, reconstruct};
use crate::traits::Pather;

/// Per-square visitation state during a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Visit {
    /// Not discovered yet.
    #[default]
    Unvisited,
    /// Discovered in the current layer, expanded in the next one.
    QueuedNext,
    /// To be expanded in the current layer.
    Queued,
    /// Expanded.
    Visited,
}

/// Outcome of [`search`]: the predecessor tree rooted at the start square.
#[derive(Debug, Clone)]
pub struct SearchTree {
    start: Square,
    end: Square,
    predecessors: BoardMap<Option<Square>>,
    distance: Option<u32>,
    layers: u32,
}

impl SearchTree {
    /// The square the search started from.
    pub fn start(&self) -> Square {
        self.start
    }

    /// The square the search was looking for.
    pub fn end(&self) -> Square {
        self.end
    }

    /// Whether `end` was reached.
    pub fn reached(&self) -> bool {
        self.distance.is_some()
    }

    /// Move count from `start` to `end`, if reached.
    pub fn distance(&self) -> Option<u32> {
        self.distance
    }

    /// Number of layers (full board scans) the search expanded, counting
    /// the layer holding `start`. A search that reaches `end` expands
    /// `distance + 1` layers.
    pub fn layers(&self) -> u32 {
        self.layers
    }

    /// The square `sq` was first discovered from. `None` for the start
    /// square and for squares never discovered.
    pub fn predecessor(&self, sq: Square) -> Option<Square> {
        self.predecessors[sq]
    }

    /// The full predecessor map.
    pub fn predecessors(&self) -> &BoardMap<Option<Square>> {
        &self.predecessors
    }

    /// Walk the predecessor chain back from `end` into a start-to-end path.
    pub fn path(&self) -> Result<KnightPath, PathError> {
        if !self.reached() {
            return Err(PathError::NoPathFound {
                start: self.start,
                end: self.end,
            });
        }
        reconstruct(&self.predecessors, self.start, self.end)
    }
}

/// Search from `start` until `end` is expanded or the frontier empties.
///
/// Always terminates: every square is queued at most once.
pub fn search<P: Pather>(pather: &P, start: Square, end: Square) -> SearchTree {
    let scan = layered_scan(pather, start, Some(end));
    SearchTree {
        start,
        end,
        predecessors: scan.predecessors,
        distance: scan.depths[end],
        layers: scan.layers,
    }
}

/// Move distance from `start` to every square; `None` where unreachable.
pub fn distance_map<P: Pather>(pather: &P, start: Square) -> BoardMap<Option<u32>> {
    layered_scan(pather, start, None).depths
}

/// Search followed by reconstruction.
pub fn shortest_path<P: Pather>(
    pather: &P,
    start: Square,
    end: Square,
) -> Result<KnightPath, PathError> {
    search(pather, start, end).path()
}

struct Scan {
    predecessors: BoardMap<Option<Square>>,
    depths: BoardMap<Option<u32>>,
    layers: u32,
}

fn layered_scan<P: Pather>(pather: &P, start: Square, target: Option<Square>) -> Scan {
    let mut tags = BoardMap::filled(Visit::Unvisited);
    let mut scan = Scan {
        predecessors: BoardMap::filled(None),
        depths: BoardMap::filled(None),
        layers: 0,
    };
    tags[start] = Visit::Queued;

    let mut nbuf = Vec::with_capacity(8);
    let mut depth = 0u32;

    'layers: loop {
        scan.layers += 1;
        for sq in Square::all() {
            if tags[sq] != Visit::Queued {
                continue;
            }
            tags[sq] = Visit::Visited;
            scan.depths[sq] = Some(depth);
            trace!("{sq} visited");

            if Some(sq) == target {
                debug!("reached {sq} from {start} in {depth} moves");
                break 'layers;
            }

            nbuf.clear();
            pather.neighbors(sq, &mut nbuf);
            for &n in nbuf.iter() {
                if tags[n] == Visit::Unvisited {
                    tags[n] = Visit::QueuedNext;
                    scan.predecessors[n] = Some(sq);
                    trace!("  considering {n}");
                }
            }
        }

        let mut queued = 0usize;
        for sq in Square::all() {
            if tags[sq] == Visit::QueuedNext {
                tags[sq] = Visit::Queued;
                queued += 1;
            }
        }
        debug!("layer {depth} done, {queued} squares queued");

        if queued == 0 {
            if let Some(end) = target {
                debug!("frontier empty, {end} unreachable from {start}");
            }
            break;
        }
        depth += 1;
    }

    scan
}
