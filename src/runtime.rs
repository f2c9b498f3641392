//! Single-task event loop around a [`Board`].
//!
//! Commands are applied one at a time in the order they were sent; each
//! commits before the next is read. Renderers watch the latest snapshot.

use crate::{
    command::{BoardActions, BoardCommand},
    domain::{Board, BoardSnapshot},
    error::{BoardError, Result},
};
use tokio::{
    sync::{mpsc, watch},
    task::JoinHandle,
};
use tracing::{debug, warn};

/// Cloneable handle used by components and the front-end bridge
#[derive(Debug, Clone)]
pub struct BoardHandle {
    commands: mpsc::UnboundedSender<BoardCommand>,
    snapshots: watch::Receiver<BoardSnapshot>,
}

/// Moves the board into its own task.
///
/// The task ends once every handle is dropped and hands the board back.
pub fn spawn_board(board: Board) -> (BoardHandle, JoinHandle<Board>) {
    let (commands, inbox) = mpsc::unbounded_channel();
    let (publisher, snapshots) = watch::channel(board.snapshot());

    let task = tokio::spawn(run(board, inbox, publisher));
    (
        BoardHandle {
            commands,
            snapshots,
        },
        task,
    )
}

async fn run(
    mut board: Board,
    mut inbox: mpsc::UnboundedReceiver<BoardCommand>,
    publisher: watch::Sender<BoardSnapshot>,
) -> Board {
    debug!("Board runtime started");

    while let Some(command) = inbox.recv().await {
        let before = board.revision();
        board.apply(command);

        if board.revision() != before {
            publisher.send_replace(board.snapshot());
        }
    }

    debug!(revision = board.revision(), "Board runtime stopped");
    board
}

impl BoardHandle {
    /// Queues a command behind everything sent before it
    pub fn send(&self, command: BoardCommand) -> Result<()> {
        self.commands
            .send(command)
            .map_err(|_| BoardError::RuntimeClosed)
    }

    /// Decodes a command from the front end and queues it
    pub fn dispatch_json(&self, raw: &str) -> Result<()> {
        let command = BoardCommand::from_json(raw).map_err(|e| {
            warn!(error = %e, "Dropping undecodable board command");
            e
        })?;
        self.send(command)
    }

    /// Receiver that is notified whenever the board changes
    pub fn subscribe(&self) -> watch::Receiver<BoardSnapshot> {
        self.snapshots.clone()
    }

    /// The most recently published snapshot
    pub fn snapshot(&self) -> BoardSnapshot {
        self.snapshots.borrow().clone()
    }
}

impl BoardActions for BoardHandle {
    fn dispatch(&mut self, command: BoardCommand) {
        if let Err(e) = self.send(command) {
            warn!(error = %e, "Board command lost");
        }
    }
}
