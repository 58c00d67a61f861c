//! A session owned by a single tokio task, fed over a channel.

use tokio::sync::{mpsc, oneshot};

use brickfall::engine::{Session, SessionStats};
use brickfall::types::{GameAction, GameMode};

enum Command {
    Action(GameAction),
    Stats(oneshot::Sender<(SessionStats, u32)>),
}

#[tokio::test]
async fn test_session_driven_from_a_task() {
    let (tx, mut rx) = mpsc::channel::<Command>(32);

    let engine = tokio::spawn(async move {
        let mut session = Session::new(GameMode::Classic, 11);
        while let Some(cmd) = rx.recv().await {
            match cmd {
                Command::Action(action) => {
                    session.apply_action(action);
                }
                Command::Stats(reply) => {
                    let _ = reply.send((session.stats(), session.score()));
                }
            }
        }
        session
    });

    for _ in 0..5 {
        tx.send(Command::Action(GameAction::MoveLeft)).await.unwrap();
        tx.send(Command::Action(GameAction::HardDrop)).await.unwrap();
    }

    let (reply_tx, reply_rx) = oneshot::channel();
    tx.send(Command::Stats(reply_tx)).await.unwrap();
    let (stats, _score) = reply_rx.await.unwrap();
    assert_eq!(stats.pieces_locked, 5);

    drop(tx);
    let session = engine.await.unwrap();
    assert_eq!(session.stats(), stats);
}
