//! Independent games for a multi-session host.
//!
//! Each game sits behind its own mutex, so two sessions never contend with
//! each other and a single game is never mutated from two threads at once.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::info;
use uuid::Uuid;

use crate::error::SessionError;
use crate::game::Game;

pub type SessionId = Uuid;

pub type SharedGame = Arc<Mutex<Game>>;

#[derive(Default)]
pub struct SessionRegistry {
    games: Mutex<HashMap<SessionId, SharedGame>>,
}

// A panic while holding a lock cannot leave a game half-updated (rejected
// moves never mutate), so poisoned locks are recovered.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new game of the given size and return its id.
    pub fn create(&self, size: usize) -> Result<SessionId, SessionError> {
        let game = Game::with_size(size)?;
        let id = Uuid::new_v4();
        lock(&self.games).insert(id, Arc::new(Mutex::new(game)));
        info!(%id, size, "session created");
        Ok(id)
    }

    /// A handle to the session's game.
    pub fn get(&self, id: SessionId) -> Result<SharedGame, SessionError> {
        lock(&self.games)
            .get(&id)
            .cloned()
            .ok_or(SessionError::UnknownSession(id))
    }

    /// Run `f` with exclusive access to the session's game.
    ///
    /// The registry lock is released before `f` runs, so work on one game
    /// does not block other sessions.
    pub fn with_game<R>(
        &self,
        id: SessionId,
        f: impl FnOnce(&mut Game) -> R,
    ) -> Result<R, SessionError> {
        let game = self.get(id)?;
        let mut guard = lock(&game);
        Ok(f(&mut guard))
    }

    pub fn remove(&self, id: SessionId) -> Result<(), SessionError> {
        match lock(&self.games).remove(&id) {
            Some(_) => {
                info!(%id, "session removed");
                Ok(())
            }
            None => Err(SessionError::UnknownSession(id)),
        }
    }

    pub fn len(&self) -> usize {
        lock(&self.games).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Player};
    use crate::error::BoardError;
    use std::thread;

    #[test]
    fn test_create_and_play() {
        let registry = SessionRegistry::new();
        let id = registry.create(9).unwrap();
        assert_eq!(registry.len(), 1);

        registry
            .with_game(id, |game| game.place_stone(4, 4))
            .unwrap()
            .unwrap();
        let player = registry.with_game(id, |game| game.current_player()).unwrap();
        assert_eq!(player, Player::White);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let registry = SessionRegistry::new();
        let a = registry.create(9).unwrap();
        let b = registry.create(9).unwrap();
        assert_ne!(a, b);

        registry.with_game(a, |game| game.place_stone(0, 0)).unwrap().unwrap();
        let cell = registry
            .with_game(b, |game| game.board().get(0, 0))
            .unwrap()
            .unwrap();
        assert_eq!(cell, Cell::Empty);
    }

    #[test]
    fn test_unknown_and_removed_sessions() {
        let registry = SessionRegistry::new();
        let id = registry.create(5).unwrap();
        registry.remove(id).unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.remove(id), Err(SessionError::UnknownSession(id)));
        assert!(matches!(
            registry.with_game(id, |_| ()),
            Err(SessionError::UnknownSession(_))
        ));
    }

    #[test]
    fn test_bad_size_is_rejected() {
        let registry = SessionRegistry::new();
        assert_eq!(
            registry.create(0),
            Err(SessionError::Board(BoardError::UnsupportedSize(0)))
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_concurrent_sessions() {
        let registry = Arc::new(SessionRegistry::new());
        let ids: Vec<SessionId> = (0..4).map(|_| registry.create(9).unwrap()).collect();

        let handles: Vec<_> = ids
            .iter()
            .map(|&id| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    for x in 0..9 {
                        registry
                            .with_game(id, |game| game.place_stone(x, 0))
                            .unwrap()
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        for id in ids {
            let moves = registry.with_game(id, |game| game.move_count()).unwrap();
            assert_eq!(moves, 9);
        }
    }
}
