use crossbeam_channel::{Receiver, Sender};
use tracing::{debug, warn};
use wc_domain::{
    config::CountConfig,
    model::{BatchReport, CountReport, InputResult, InputState},
};
use wc_ports::{InputOpener, NoProgress, ProgressSink, StreamCounter};
use wc_shared_kernel::{Counts, ErrorContext, InfraResult, InfrastructureError, InputError, Result};

/// Counts a set of inputs: one task per input on a worker pool, a single
/// collector folding the results.
pub struct CountInputs<'a> {
    opener: &'a dyn InputOpener,
    counter: &'a dyn StreamCounter,
    progress: &'a dyn ProgressSink,
    jobs: usize,
}

enum Event {
    Started { index: usize },
    Finished { index: usize, result: InputResult },
}

impl<'a> CountInputs<'a> {
    pub fn new(opener: &'a dyn InputOpener, counter: &'a dyn StreamCounter) -> Self {
        Self { opener, counter, progress: &NoProgress, jobs: CountConfig::default().jobs }
    }

    #[must_use]
    pub fn with_progress(mut self, progress: &'a dyn ProgressSink) -> Self {
        self.progress = progress;
        self
    }

    #[must_use]
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    /// Counts standard input when `identifiers` is empty, every identifier
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Only batch-level failures (the worker pool could not be built).
    /// Per-input failures are recorded on the report.
    pub fn run<S: AsRef<str>>(&self, identifiers: &[S]) -> Result<CountReport> {
        if identifiers.is_empty() {
            return Ok(CountReport::Stdin(self.count_stdin()));
        }
        let batch = self
            .count_batch(identifiers)
            .with_context(|| format!("counting {} inputs", identifiers.len()))?;
        Ok(CountReport::Batch(batch))
    }

    /// Counts the process's standard input on the calling thread.
    ///
    /// # Errors
    ///
    /// Whatever the opener or the engine reports for standard input.
    pub fn count_stdin(&self) -> std::result::Result<Counts, InputError> {
        let mut stream = self.opener.open_stdin()?;
        self.counter.count(&mut *stream)
    }

    /// Counts every identifier concurrently and returns the results in
    /// request order.
    ///
    /// # Errors
    ///
    /// Returns an error if the worker pool cannot be created.
    pub fn count_batch<S: AsRef<str>>(&self, identifiers: &[S]) -> InfraResult<BatchReport> {
        let names: Vec<&str> = identifiers.iter().map(AsRef::as_ref).collect();
        let threads = self.jobs.min(names.len()).max(1);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("wc-count-{i}"))
            .build()
            .map_err(|e| InfrastructureError::ThreadPoolCreation { details: e.to_string() })?;
        debug!(inputs = names.len(), threads, "dispatching batch");

        let collector = Collector::new(&names, self.progress);

        let collected = std::thread::scope(|scope| {
            // Owned by this closure so an unwinding task pool still closes
            // the channel before the scope joins the collector.
            let (tx, rx) = crossbeam_channel::unbounded();
            let handle = scope.spawn(move || collector.drain(&rx));
            let (stdin, files): (Vec<_>, Vec<_>) =
                names.iter().copied().enumerate().partition(|(_, name)| self.opener.is_stdin(name));
            pool.scope(|tasks| {
                if !stdin.is_empty() {
                    let tx = tx.clone();
                    tasks.spawn(move |_| {
                        for (index, name) in stdin {
                            self.count_task(index, name, &tx);
                        }
                    });
                }
                for (index, name) in files {
                    let tx = tx.clone();
                    tasks.spawn(move |_| self.count_task(index, name, &tx));
                }
            });
            // Last sender gone: the collector sees the channel close once
            // every task has reported.
            drop(tx);
            handle.join()
        });

        collected.unwrap_or_else(|payload| std::panic::resume_unwind(payload))
    }

    fn count_task(&self, index: usize, identifier: &str, tx: &Sender<Event>) {
        // The collector only stops after every sender is dropped, so sends
        // cannot fail while it is alive.
        let _ = tx.send(Event::Started { index });
        let outcome = self
            .opener
            .open(identifier)
            .and_then(|mut stream| self.counter.count(&mut *stream));
        let _ = tx.send(Event::Finished { index, result: InputResult::from_outcome(identifier, outcome) });
    }
}

/// Sole owner of the result slots; the total is folded here once every
/// slot is filled.
struct Collector<'n, 'p> {
    names: &'n [&'n str],
    states: Vec<InputState>,
    slots: Vec<Option<InputResult>>,
    progress: &'p dyn ProgressSink,
}

impl<'n, 'p> Collector<'n, 'p> {
    fn new(names: &'n [&'n str], progress: &'p dyn ProgressSink) -> Self {
        Self {
            names,
            states: vec![InputState::Submitted; names.len()],
            slots: std::iter::repeat_with(|| None).take(names.len()).collect(),
            progress,
        }
    }

    fn drain(mut self, rx: &Receiver<Event>) -> InfraResult<BatchReport> {
        for event in rx {
            match event {
                Event::Started { index } => {
                    if self.transition(index, InputState::start) {
                        self.progress.on_started(index, self.names[index]);
                    }
                }
                Event::Finished { index, result } => {
                    let succeeded = result.is_success();
                    if !self.transition(index, |state| state.finish(succeeded)) {
                        continue;
                    }
                    self.progress.on_finished(index, &result);
                    self.slots[index] = Some(result);
                }
            }
        }
        self.finish()
    }

    fn transition(&mut self, index: usize, next: impl FnOnce(InputState) -> Option<InputState>) -> bool {
        let current = self.states[index];
        match next(current) {
            Some(state) => {
                self.states[index] = state;
                true
            }
            None => {
                warn!(index, ?current, "ignoring out-of-order input event");
                false
            }
        }
    }

    fn finish(self) -> InfraResult<BatchReport> {
        let results = self
            .slots
            .into_iter()
            .zip(self.states)
            .enumerate()
            .map(|(index, (slot, state))| {
                slot.filter(|_| state.is_terminal()).ok_or(InfrastructureError::WorkerPanicked { index })
            })
            .collect::<InfraResult<Vec<_>>>()?;
        let report = BatchReport::from_results(results);
        self.progress.on_complete(&report.total, report.len());
        Ok(report)
    }
}
