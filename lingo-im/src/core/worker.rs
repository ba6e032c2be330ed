//! Sequential background worker for translation calls.
//!
//! One thread, one call in flight at a time. Requests go in over a channel,
//! outcomes come back over another; the session drains outcomes on the host's
//! input thread. A request that has already been handed to the worker is
//! never cancelled; its outcome is applied whenever it is drained.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use tracing::{debug, trace};

use super::host::TranslationClient;

/// What the session should do with a finished translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestPurpose {
    /// Live mode: replace the previously committed output span.
    LiveReplace,
    /// Buffered mode, debounced refresh: replace the committed span, keep
    /// the compose buffer.
    BufferedPreview,
    /// Buffered mode, explicit translate-on-done: replace the committed
    /// span, then clear the buffer and preview.
    BufferedCommit,
}

/// A translation request as handed to the worker.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub source_lang: String,
    pub target_lang: String,
    pub text: String,
    pub purpose: RequestPurpose,
}

/// Result of a finished request. `translated` is `None` on backend failure.
#[derive(Debug, Clone)]
pub struct TranslationOutcome {
    pub purpose: RequestPurpose,
    pub translated: Option<String>,
}

pub struct TranslationWorker {
    requests: Option<Sender<TranslationRequest>>,
    outcomes: Receiver<TranslationOutcome>,
    handle: Option<thread::JoinHandle<()>>,
}

impl TranslationWorker {
    /// Spawn the worker thread around a translation client.
    pub fn spawn(client: Box<dyn TranslationClient>) -> Self {
        let (request_tx, request_rx) = mpsc::channel::<TranslationRequest>();
        let (outcome_tx, outcome_rx) = mpsc::channel::<TranslationOutcome>();

        let handle = thread::Builder::new()
            .name("lingo-translate".to_string())
            .spawn(move || {
                while let Ok(request) = request_rx.recv() {
                    trace!(text = %request.text, "translating");
                    let translated = client.translate(
                        &request.source_lang,
                        &request.target_lang,
                        &request.text,
                    );
                    let outcome = TranslationOutcome {
                        purpose: request.purpose,
                        translated,
                    };
                    // Receiver gone means the session was dropped; stop.
                    if outcome_tx.send(outcome).is_err() {
                        break;
                    }
                }
                debug!("translation worker shutting down");
            })
            .expect("failed to spawn translation worker thread");

        Self {
            requests: Some(request_tx),
            outcomes: outcome_rx,
            handle: Some(handle),
        }
    }

    /// Queue a request. Never blocks; the worker processes sequentially.
    pub fn submit(&self, request: TranslationRequest) {
        if let Some(tx) = &self.requests {
            let _ = tx.send(request);
        }
    }

    /// Drain one finished outcome if available.
    pub fn try_recv(&self) -> Option<TranslationOutcome> {
        self.outcomes.try_recv().ok()
    }

    /// Wait up to `timeout` for the next outcome.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<TranslationOutcome> {
        match self.outcomes.recv_timeout(timeout) {
            Ok(outcome) => Some(outcome),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }
}

impl Drop for TranslationWorker {
    fn drop(&mut self) {
        // Closing the request channel ends the worker loop.
        self.requests.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct EchoClient {
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl TranslationClient for EchoClient {
        fn translate(&self, _source: &str, target: &str, text: &str) -> Option<String> {
            self.calls.lock().unwrap().push(text.to_string());
            Some(format!("{target}:{text}"))
        }
    }

    struct FailingClient;

    impl TranslationClient for FailingClient {
        fn translate(&self, _s: &str, _t: &str, _text: &str) -> Option<String> {
            None
        }
    }

    fn request(text: &str) -> TranslationRequest {
        TranslationRequest {
            source_lang: "en".to_string(),
            target_lang: "es".to_string(),
            text: text.to_string(),
            purpose: RequestPurpose::LiveReplace,
        }
    }

    #[test]
    fn test_worker_round_trip() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let worker = TranslationWorker::spawn(Box::new(EchoClient {
            calls: calls.clone(),
        }));

        worker.submit(request("hello"));
        let outcome = worker.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(outcome.translated.as_deref(), Some("es:hello"));
        assert_eq!(calls.lock().unwrap().as_slice(), &["hello".to_string()]);
    }

    #[test]
    fn test_worker_processes_in_order() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let worker = TranslationWorker::spawn(Box::new(EchoClient {
            calls: calls.clone(),
        }));

        worker.submit(request("one"));
        worker.submit(request("two"));

        let first = worker.recv_timeout(Duration::from_secs(5)).unwrap();
        let second = worker.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(first.translated.as_deref(), Some("es:one"));
        assert_eq!(second.translated.as_deref(), Some("es:two"));
    }

    #[test]
    fn test_worker_failure_is_none() {
        let worker = TranslationWorker::spawn(Box::new(FailingClient));
        worker.submit(request("x"));
        let outcome = worker.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(outcome.translated.is_none());
    }

    #[test]
    fn test_drop_joins_worker() {
        let worker = TranslationWorker::spawn(Box::new(FailingClient));
        drop(worker);
    }
}
