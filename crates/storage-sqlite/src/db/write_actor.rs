//! Single-writer actor.
//!
//! SQLite allows one writer at a time. Instead of letting every caller
//! race for the write lock, all mutations are sent to one background task
//! that owns a dedicated connection and runs each job inside an immediate
//! transaction. This also serializes the lookup-then-write upsert against
//! concurrent refresh cycles: two upserts of the same name can never
//! interleave.

use std::any::Any;

use diesel::SqliteConnection;
use tokio::sync::{mpsc, oneshot};

use super::DbPool;
use crate::errors::StorageError;
use atlas_core::errors::Result;

/// A queued write job: runs against the actor's connection and answers
/// with a core Result. The return type is erased so one channel carries
/// every job shape.
type Job = Box<dyn FnOnce(&mut SqliteConnection) -> Result<Box<dyn Any + Send + 'static>> + Send + 'static>;

type JobReply = oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>;

/// Handle for submitting jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<(Job, JobReply)>,
}

impl WriteHandle {
    /// Run `job` on the writer's connection, inside an immediate
    /// transaction, and wait for its result.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static + Any,
    {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |conn| job(conn).map(|v| Box::new(v) as Box<dyn Any + Send>)),
                reply_tx,
            ))
            .await
            .expect("writer actor channel closed; the actor task has stopped");

        reply_rx
            .await
            .expect("writer actor dropped the reply without answering")
            .map(|boxed: Box<dyn Any + Send + 'static>| {
                *boxed
                    .downcast::<T>()
                    .unwrap_or_else(|_| panic!("writer actor reply had the wrong type"))
            })
    }
}

/// Spawn the writer task. It checks one connection out of the pool and
/// keeps it for its whole life, draining jobs serially.
pub fn spawn_writer(pool: DbPool) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<(Job, JobReply)>(1024);

    tokio::spawn(async move {
        let mut conn = pool
            .get()
            .expect("could not reserve a connection for the writer actor");

        while let Some((job, reply_tx)) = rx.recv().await {
            // Immediate transaction: take the write lock up front so the
            // job never upgrades mid-flight. Core errors round-trip
            // through StorageError because the transaction needs a single
            // error type.
            let result = conn
                .immediate_transaction::<_, StorageError, _>(|c| job(c).map_err(StorageError::from))
                .map_err(Into::into);

            // The caller may have gone away (request cancelled); that is
            // not the actor's problem.
            let _ = reply_tx.send(result);
        }
        // Channel closed: every WriteHandle is gone, the actor can stop.
    });

    WriteHandle { tx }
}
