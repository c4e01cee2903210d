//! In-memory data source with scripted replies.

use std::collections::VecDeque;
use std::time::Duration;

use artgrid::source::{ArtworkPage, DataSource, FetchError, PageRequest};
use async_trait::async_trait;
use parking_lot::Mutex;

use super::page;

/// One scripted answer.
#[derive(Debug, Clone)]
pub enum Reply {
    Page(ArtworkPage),
    Status(u16),
}

/// Records every request and answers from a queue.
///
/// When the queue is empty it answers with a full page out of 100 records.
#[derive(Default)]
pub struct ScriptedSource {
    requests: Mutex<Vec<PageRequest>>,
    replies: Mutex<VecDeque<(Reply, Duration)>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, reply: Reply) -> &Self {
        self.reply_after(reply, Duration::ZERO)
    }

    pub fn reply_after(&self, reply: Reply, delay: Duration) -> &Self {
        self.replies.lock().push_back((reply, delay));
        self
    }

    pub fn requests(&self) -> Vec<PageRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl DataSource for ScriptedSource {
    async fn fetch_page(&self, request: PageRequest) -> Result<ArtworkPage, FetchError> {
        self.requests.lock().push(request);
        let scripted = self.replies.lock().pop_front();
        let (reply, delay) = scripted.unwrap_or_else(|| {
            let first_id = (request.page - 1) * u64::from(request.limit) + 1;
            (
                Reply::Page(page(first_id, u64::from(request.limit), 100)),
                Duration::ZERO,
            )
        });

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        match reply {
            Reply::Page(page) => Ok(page),
            Reply::Status(status) => Err(FetchError::Status { status }),
        }
    }
}
