//=========================================================================
// Command Queue
//=========================================================================
//
// Queue for deferred game commands.
//
// Input handlers and scene hooks queue commands here during dispatch;
// the game controller processes the queue at the tick boundary. This
// keeps handlers from re-entering the scene or manager they were called
// from.
//
//=========================================================================

//=== GameCommand =========================================================

/// A deferred request against the current scene or the game controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameCommand {
    /// Pause the current scene (no-op unless Running).
    PauseScene,

    /// Resume the current scene (no-op unless Paused).
    ResumeScene,

    /// Pause if Running, resume if Paused.
    TogglePause,

    /// Transition to the named scene.
    GoToScene(String),
}

//=== CommandQueue ========================================================

/// FIFO queue of [`GameCommand`]s processed at tick boundaries.
#[derive(Debug, Default)]
pub struct CommandQueue {
    queue: Vec<GameCommand>,
}

impl CommandQueue {
    /// Creates a new empty command queue.
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Queues a command to be processed at the next tick boundary.
    pub fn push(&mut self, command: GameCommand) {
        self.queue.push(command);
    }

    /// Returns an iterator over the queued commands.
    pub fn iter(&self) -> impl Iterator<Item = &GameCommand> {
        self.queue.iter()
    }

    /// Returns true if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns the number of queued commands.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Clears all queued commands.
    pub fn clear(&mut self) {
        self.queue.clear()
    }

    /// Takes all commands from the queue, leaving it empty.
    pub fn take(&mut self) -> Vec<GameCommand> {
        std::mem::take(&mut self.queue)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_take_preserve_order() {
        let mut queue = CommandQueue::new();
        queue.push(GameCommand::PauseScene);
        queue.push(GameCommand::GoToScene("test".to_string()));

        let taken = queue.take();
        assert_eq!(
            taken,
            vec![GameCommand::PauseScene, GameCommand::GoToScene("test".to_string())]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn take_on_empty_queue_yields_nothing() {
        let mut queue = CommandQueue::new();
        assert!(queue.take().is_empty());
    }

    #[test]
    fn clear_discards_commands() {
        let mut queue = CommandQueue::new();
        queue.push(GameCommand::TogglePause);
        queue.clear();

        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
    }
}
