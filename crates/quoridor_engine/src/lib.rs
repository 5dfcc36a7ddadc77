//! Quoridor game engine
//!
//! Two pawns race across a square board to the opposite edge while each side
//! places walls to lengthen the other's path. A wall may never cut a player
//! off from its goal row entirely.
//!
//! The crate holds the rules and the move chooser:
//! - [`GameState`]: board, players, move validation, execute/undo, hashing
//! - [`SearchEngine`]: iterative-deepening alpha-beta under a time budget
//! - [`api`]: free-function contract for front ends
//!
//! ```no_run
//! use quoridor_engine::{Color, GameState, SearchEngine, SearchLimits};
//!
//! let mut game = GameState::new(9)?;
//! let mut engine = SearchEngine::new(SearchLimits::default());
//! let report = engine.find_best_move(&mut game, Color::White)?;
//! game.execute_move(report.best_move)?;
//! # Ok::<(), quoridor_engine::EngineError>(())
//! ```

pub mod api;
pub mod bitset;
pub mod board;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod game;
pub mod hash;
pub mod moves;
pub mod search;
pub mod tt;
pub mod types;

pub use board::{BoardModel, Segment, Wall};
pub use error::{EngineError, EngineResult, InvalidMove};
pub use game::GameState;
pub use moves::Move;
pub use search::{find_best_move, SearchEngine, SearchLimits, SearchReport, SearchStats};
pub use tt::{Bound, TranspositionTable, TtEntry};
pub use types::{Color, Orientation, PlayerState, Score, Square};
