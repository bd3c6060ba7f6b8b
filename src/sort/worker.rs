use std::sync::Arc;

use tokio::{
    sync::mpsc::{self, UnboundedReceiver},
    task::JoinHandle,
};

use crate::{
    error::{Error, Result},
    sort::{SortEvent, run_sort},
    spotify::PlaylistApi,
    types::PlaylistTarget,
};

/// Runs sorts on a background task, one at a time.
///
/// Each submission gets its own event channel. The worker only sends events;
/// the receiving side owns all presentation state.
pub struct SortWorker {
    api: Arc<dyn PlaylistApi>,
    handle: Option<JoinHandle<()>>,
}

impl SortWorker {
    pub fn new(api: Arc<dyn PlaylistApi>) -> Self {
        SortWorker { api, handle: None }
    }

    pub fn is_busy(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Starts sorting `target` and returns the channel its events arrive on.
    ///
    /// The first event disables the trigger and the last one enables it again.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] while a previous sort is still running.
    pub fn submit(&mut self, target: PlaylistTarget) -> Result<UnboundedReceiver<SortEvent>> {
        if self.is_busy() {
            return Err(Error::Validation(
                "A sort is already running. Please wait.".to_string(),
            ));
        }

        let (tx, rx) = mpsc::unbounded_channel();
        let _ = tx.send(SortEvent::Trigger { enabled: false });

        let api = Arc::clone(&self.api);
        self.handle = Some(tokio::spawn(async move {
            run_sort(api.as_ref(), &target, &tx).await;
            let _ = tx.send(SortEvent::Trigger { enabled: true });
        }));

        Ok(rx)
    }

    /// Waits for the running sort, if any, to finish.
    pub async fn join(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}
