//! Off-thread move selection.
//!
//! The worker owns its engine and its own copy of the position for the whole
//! search, and reports exactly once over a one-shot channel. Cancellation is
//! coarse: abandoning the handle drops the receiver, the worker's final send
//! fails silently, and its result is discarded.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};

use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;

pub struct SearchHandle {
    receiver: Receiver<ChessResult<EngineOutput>>,
    worker: JoinHandle<()>,
}

/// Run `engine.choose_move` on a new thread. The caller's own state is
/// untouched; pass a clone if the session continues meanwhile.
pub fn spawn_search(
    mut engine: Box<dyn Engine>,
    game_state: GameState,
    params: SearchParams,
) -> SearchHandle {
    let (sender, receiver) = mpsc::channel();
    let worker = thread::spawn(move || {
        let result = engine.choose_move(&game_state, &params);
        // Receiver gone means the search was abandoned.
        let _ = sender.send(result);
    });
    SearchHandle { receiver, worker }
}

impl SearchHandle {
    /// Non-blocking poll. `Ok(None)` while the worker is still searching.
    pub fn try_result(&self) -> ChessResult<Option<EngineOutput>> {
        match self.receiver.try_recv() {
            Ok(result) => result.map(Some),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(ChessError::SearchWorkerLost),
        }
    }

    /// Block until the worker reports.
    pub fn wait(self) -> ChessResult<EngineOutput> {
        let result = self
            .receiver
            .recv()
            .map_err(|_| ChessError::SearchWorkerLost)?;
        // Sent value is in hand; a join failure cannot lose it.
        let _ = self.worker.join();
        result
    }

    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }

    /// Give up on the search. The worker runs to completion in the
    /// background and its result is dropped.
    pub fn abandon(self) {
        drop(self.receiver);
    }
}
