//! Running solves off the caller's thread.
//!
//! A [`Runner`] hands one instance at a time to a dedicated worker thread.
//! Instance and result cross the thread boundary as JSON, exactly as they
//! would cross a process or network boundary. Submitting a new instance
//! supersedes the previous one: its ticket reports [`Error::Cancelled`] and
//! its result is dropped when the worker finishes. Threads cannot be
//! interrupted, so a superseded worker still runs to completion in the
//! background. Such workers count against [`RunnerConfig::max_workers`];
//! once that many are alive, [`Runner::submit`] fails with [`Error::Busy`]
//! instead of spawning another one.
//!
//! ```
//! use np_reductions::graph::graph_from_edges;
//! use np_reductions::problem::HamCycle;
//! use np_reductions::runner::Runner;
//!
//! let graph = graph_from_edges([("a", "b"), ("b", "c"), ("c", "a")]);
//! let mut runner = Runner::default();
//! let ticket = runner.submit::<HamCycle>(&graph)?;
//! let solution = ticket.wait()?;
//! assert_eq!(solution.into_certificate().unwrap().len(), 3);
//! # Ok::<(), np_reductions::error::Error>(())
//! ```

use std::any::Any;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{debug, warn};

use crate::certificate::Solution;
use crate::codec;
use crate::error::{Error, Result};
use crate::problem::Problem;

/// Worker thread settings.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    pub thread_name: String,
    /// Backtracking solvers recurse once per node, so large reduced graphs need
    /// more than the default stack.
    pub stack_size: usize,
    /// Upper bound on live worker threads, superseded ones included.
    pub max_workers: usize,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            thread_name: "np-solver".to_string(),
            stack_size: 64 * 1024 * 1024,
            max_workers: 4,
        }
    }
}

#[derive(Debug, Default)]
pub struct Runner {
    config: RunnerConfig,
    /// Generation of the only solve whose result may still be delivered.
    current: Arc<AtomicU64>,
    /// Worker threads that have not finished solving yet.
    active: Arc<AtomicUsize>,
}

impl Runner {
    pub fn new(config: RunnerConfig) -> Self {
        Self {
            config,
            current: Arc::new(AtomicU64::new(0)),
            active: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Number of workers still solving, including superseded and timed-out ones.
    pub fn active_workers(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }

    /// Starts solving `instance` on a fresh worker, superseding any solve
    /// still in flight.
    ///
    /// A superseded worker keeps its thread (and its stack) until the search
    /// ends. When [`RunnerConfig::max_workers`] workers are alive this fails
    /// with [`Error::Busy`] and the solve in flight is left untouched.
    pub fn submit<P: Problem>(&mut self, instance: &P::Instance) -> Result<SolveTicket<P>> {
        let active = self.active_workers();
        if active >= self.config.max_workers {
            warn!("runner: refusing {} solve, {} workers still running", P::NAME, active);
            return Err(Error::Busy(active));
        }

        let generation = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        let request = codec::encode(instance)?;
        debug!(
            "runner: submitting {} solve #{} ({} bytes)",
            P::NAME,
            generation,
            request.len()
        );

        let (tx, rx) = mpsc::channel();
        let current = Arc::clone(&self.current);
        let guard = WorkerGuard::new(&self.active);
        let handle = thread::Builder::new()
            .name(self.config.thread_name.clone())
            .stack_size(self.config.stack_size)
            .spawn(move || {
                let response = codec::decode::<P::Instance>(&request)
                    .map(|instance| P::solve(&instance))
                    .and_then(|solution| codec::encode(&solution));
                drop(guard);
                if current.load(Ordering::SeqCst) != generation {
                    debug!("runner: dropping result of superseded solve #{}", generation);
                    return;
                }
                let _ = tx.send(response);
            })?;

        Ok(SolveTicket {
            generation,
            current: Arc::clone(&self.current),
            receiver: rx,
            handle: Some(handle),
            problem: PhantomData,
        })
    }

    /// Abandons the solve in flight, if any.
    pub fn cancel(&mut self) {
        let generation = self.current.fetch_add(1, Ordering::SeqCst);
        debug!("runner: cancelled solve #{}", generation);
    }
}

/// Counts a worker as active until dropped, unwinding included.
struct WorkerGuard(Arc<AtomicUsize>);

impl WorkerGuard {
    fn new(active: &Arc<AtomicUsize>) -> Self {
        active.fetch_add(1, Ordering::SeqCst);
        Self(Arc::clone(active))
    }
}

impl Drop for WorkerGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Handle to a submitted solve.
pub struct SolveTicket<P: Problem> {
    generation: u64,
    current: Arc<AtomicU64>,
    receiver: Receiver<Result<String>>,
    handle: Option<JoinHandle<()>>,
    problem: PhantomData<fn() -> P>,
}

impl<P: Problem> SolveTicket<P> {
    /// Whether a newer submission or a cancel has superseded this solve.
    pub fn is_cancelled(&self) -> bool {
        self.current.load(Ordering::SeqCst) != self.generation
    }

    /// Blocks until the solve finishes.
    pub fn wait(mut self) -> Result<Solution<P::Certificate>> {
        if self.is_cancelled() {
            return Err(Error::Cancelled);
        }
        match self.receiver.recv() {
            Ok(response) => self.accept(response),
            Err(_) => Err(self.disconnected()),
        }
    }

    /// Blocks for at most `timeout`.
    ///
    /// On [`Error::Timeout`] the solve is left running; the ticket is consumed,
    /// so its result will never be read.
    pub fn wait_timeout(mut self, timeout: Duration) -> Result<Solution<P::Certificate>> {
        if self.is_cancelled() {
            return Err(Error::Cancelled);
        }
        match self.receiver.recv_timeout(timeout) {
            Ok(response) => self.accept(response),
            Err(RecvTimeoutError::Timeout) => {
                warn!("runner: {} solve #{} timed out", P::NAME, self.generation);
                Err(Error::Timeout)
            }
            Err(RecvTimeoutError::Disconnected) => Err(self.disconnected()),
        }
    }

    fn accept(&self, response: Result<String>) -> Result<Solution<P::Certificate>> {
        if self.is_cancelled() {
            return Err(Error::Cancelled);
        }
        codec::decode(&response?)
    }

    /// The worker ended without sending: it panicked or was superseded.
    fn disconnected(&mut self) -> Error {
        let panic = self.handle.take().and_then(|h| h.join().err());
        match panic {
            Some(payload) => Error::WorkerPanicked(panic_message(payload.as_ref())),
            None => Error::Cancelled,
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
