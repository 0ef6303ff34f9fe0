mod flow;
mod toast;

use crate::{Notifier, QueryClient, TagCreationFlow};

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tag_client::{CliClientResult, ClientError, TagService};
use tag_core::{CreateTagRequest, Tag};
use tokio::sync::Notify;

/// In-memory tag service that counts calls and can be told to fail or to
/// hold creation requests until released.
#[derive(Default)]
pub(crate) struct MockTagService {
    pub(crate) create_calls: AtomicUsize,
    pub(crate) list_calls: AtomicUsize,
    pub(crate) requests: Mutex<Vec<CreateTagRequest>>,
    pub(crate) tags: Vec<Tag>,
    pub(crate) fail: bool,
    pub(crate) gate: Option<Arc<Notify>>,
}

impl MockTagService {
    pub(crate) fn create_count(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn list_count(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TagService for MockTagService {
    async fn create_tag(&self, request: &CreateTagRequest) -> CliClientResult<()> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        if self.fail {
            Err(ClientError::status(503, "http://mock/tags"))
        } else {
            Ok(())
        }
    }

    async fn list_tags(&self) -> CliClientResult<Vec<Tag>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            Err(ClientError::status(503, "http://mock/tags"))
        } else {
            Ok(self.tags.clone())
        }
    }
}

#[derive(Default)]
pub(crate) struct RecordingNotifier {
    pub(crate) messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub(crate) fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

pub(crate) struct Harness {
    pub(crate) service: Arc<MockTagService>,
    pub(crate) queries: QueryClient,
    pub(crate) notifier: Arc<RecordingNotifier>,
    pub(crate) flow: Arc<TagCreationFlow>,
}

pub(crate) fn harness(service: MockTagService) -> Harness {
    let service = Arc::new(service);
    let queries = QueryClient::new();
    let notifier = Arc::new(RecordingNotifier::default());
    let flow = Arc::new(TagCreationFlow::new(
        service.clone(),
        queries.clone(),
        notifier.clone(),
    ));

    Harness {
        service,
        queries,
        notifier,
        flow,
    }
}

/// Writer whose contents stay readable after being boxed into a toaster.
#[derive(Clone, Default)]
pub(crate) struct SharedBuffer(pub(crate) Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
