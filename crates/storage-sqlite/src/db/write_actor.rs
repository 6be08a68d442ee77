//! Single-writer actor for SQLite.
//!
//! SQLite allows many readers but only one writer. All mutations are sent to
//! one background task that owns a dedicated connection and executes jobs
//! serially, each inside an immediate transaction.

use std::any::Any;

use diesel::SqliteConnection;
use tokio::sync::{mpsc, oneshot};

use super::DbPool;
use crate::errors::StorageError;
use catalog_core::errors::Result;

// A write job: runs against the actor's connection and returns a core Result.
type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;

/// Handle for sending write jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    // Jobs are type-erased through Box<dyn Any>; each request carries a
    // oneshot sender for its reply.
    #[allow(clippy::type_complexity)]
    tx: mpsc::Sender<(
        Job<Box<dyn Any + Send + 'static>>,
        oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>,
    )>,
}

impl WriteHandle {
    /// Executes a database job on the writer actor's dedicated connection
    /// and returns its result.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static + Any,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |c| job(c).map(|v| Box::new(v) as Box<dyn Any + Send>)),
                ret_tx,
            ))
            .await
            .expect("writer actor channel closed, the actor has stopped");

        ret_rx
            .await
            .expect("writer actor dropped the reply sender without answering")
            .map(|boxed: Box<dyn Any + Send + 'static>| {
                *boxed
                    .downcast::<T>()
                    .unwrap_or_else(|_| panic!("writer actor result had an unexpected type"))
            })
    }
}

/// Spawns the writer actor. It holds one connection from the pool for its
/// whole lifetime and processes jobs in order; the actor terminates when the
/// last `WriteHandle` is dropped.
pub fn spawn_writer(pool: DbPool) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<(
        Job<Box<dyn Any + Send + 'static>>,
        oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>,
    )>(1024);

    tokio::spawn(async move {
        let mut conn = pool
            .get()
            .expect("failed to check out the writer actor's connection");

        while let Some((job, reply_tx)) = rx.recv().await {
            // Each job runs in an immediate transaction so partially applied
            // writes never become visible.
            let result: Result<Box<dyn Any + Send + 'static>> = conn
                .immediate_transaction::<_, StorageError, _>(|c| {
                    job(c).map_err(StorageError::from)
                })
                .map_err(|e: StorageError| e.into());

            // The requester may have gone away; that is fine.
            let _ = reply_tx.send(result);
        }
    });

    WriteHandle { tx }
}
