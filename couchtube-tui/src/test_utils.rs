//! 测试辅助

use std::sync::{Arc, Mutex, MutexGuard};

use couchtube_core::playback::EmbedPlayback;
use couchtube_core::{FeedRequest, RequestId};
use ratatui::layout::Rect;

use crate::backend::FeedLoader;
use crate::model::App;

/// Records loads instead of running them.
#[derive(Default)]
pub struct RecordingLoader {
    loads: Mutex<Vec<(RequestId, FeedRequest)>>,
}

impl RecordingLoader {
    fn lock(&self) -> MutexGuard<'_, Vec<(RequestId, FeedRequest)>> {
        self.loads
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    pub fn loads(&self) -> Vec<(RequestId, FeedRequest)> {
        self.lock().clone()
    }

    pub fn last(&self) -> Option<(RequestId, FeedRequest)> {
        self.lock().last().cloned()
    }
}

impl FeedLoader for RecordingLoader {
    fn load(&self, id: RequestId, request: FeedRequest) {
        self.lock().push((id, request));
    }
}

/// An App on a 120x40 terminal with an embed player and a recording loader.
pub fn test_app() -> (App, Arc<RecordingLoader>) {
    let loader = Arc::new(RecordingLoader::default());
    let mut app = App::new(loader.clone(), Box::new(EmbedPlayback::nocookie()));
    app.set_viewport(Rect::new(0, 0, 120, 40));
    (app, loader)
}
