use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use log::{trace, warn};

/// A thread pool with a constant number of named worker threads.
pub struct ThreadPool {
    workers: Vec<Worker>,
    sender: mpsc::Sender<Message>,
}

/// A job for a thread pool. The job may run on any thread, and will only be run once.
type Job = Box<dyn FnOnce() + Send + 'static>;

/// A message to a worker.
enum Message {
    /// A new job to run.
    NewJob(Job),
    /// Tells the worker to return.
    Terminate,
}

impl ThreadPool {
    /// Creates a new thread pool with `size` workers. Threads are named `<name>-<index>`.
    ///
    /// # Panics
    ///
    /// Panics if the size is zero.
    pub fn new(size: usize, name: &str) -> std::io::Result<ThreadPool> {
        assert!(size > 0);

        let (sender, receiver) = mpsc::channel();
        let receiver = Arc::new(Mutex::new(receiver));

        let workers = (0..size)
            .map(|i| spawn_worker(format!("{}-{}", name, i), Arc::clone(&receiver)))
            .collect::<std::io::Result<Vec<Worker>>>()?;

        Ok(ThreadPool { workers, sender })
    }

    pub fn size(&self) -> usize {
        self.workers.len()
    }

    /// Queues the given closure to run on the next free worker.
    pub fn execute<F>(&self, f: F)
        where
            F: FnOnce() + Send + 'static,
    {
        if self.sender.send(Message::NewJob(Box::new(f))).is_err() {
            warn!("Thread pool has no workers left, dropping job");
        }
    }
}

impl Drop for ThreadPool {
    /// Sends the termination message to every worker and waits for them to return.
    fn drop(&mut self) {
        for _ in &self.workers {
            // a send only fails when every worker is gone already
            let _ = self.sender.send(Message::Terminate);
        }

        for worker in &mut self.workers {
            if let Some(thread) = worker.take() {
                if thread.join().is_err() {
                    warn!("A worker thread panicked");
                }
            }
        }
    }
}

/// A worker, represented by a join handle if the thread is still running, or None.
type Worker = Option<thread::JoinHandle<()>>;

/// Spawns a worker that runs jobs from the given receiver until it gets a Terminate message or
/// the sending end is dropped.
fn spawn_worker(name: String, receiver: Arc<Mutex<mpsc::Receiver<Message>>>) -> std::io::Result<Worker> {
    let thread = thread::Builder::new().name(name).spawn(move || loop {
        let message = match receiver.lock() {
            Ok(receiver) => receiver.recv(),
            Err(_) => break,
        };

        match message {
            Ok(Message::NewJob(job)) => job(),
            Ok(Message::Terminate) | Err(_) => break,
        }
    })?;

    trace!("Spawned worker {:?}", thread.thread().name());
    Ok(Some(thread))
}
