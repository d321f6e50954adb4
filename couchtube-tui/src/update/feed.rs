//! 抓取结果处理

use couchtube_core::Feed;
use log::{error, info, warn};

use crate::i18n::t;
use crate::message::FeedLoaded;
use crate::model::{App, FeedState};

pub fn update(app: &mut App, loaded: FeedLoaded) {
    let FeedLoaded {
        id,
        request,
        result,
    } = loaded;

    if !app.requests.is_current(id) {
        info!("Discarding stale result {id} for {request:?}");
        return;
    }

    match result {
        Ok(Feed::Videos(cards)) => {
            info!("Request {id}: {} cards", cards.len());
            app.set_status(format!("{} {}", cards.len(), t().status.loaded));
            app.feed = FeedState::Videos(cards);
            app.relayout();
            if !app.search.visible {
                app.navigator
                    .focus_first_where(&mut app.screen, |k| k.is_video_card());
            }
        }
        Ok(Feed::NoResults) => {
            info!("Request {id}: no results");
            app.feed = FeedState::NoResults;
            app.relayout();
        }
        Err(e) => {
            if e.is_expected() {
                warn!("Request {id} failed: {e}");
            } else {
                error!("Request {id} failed: {e}");
            }
            if e.is_exhaustion() {
                app.set_status(t().status.backends_down);
            }
            app.feed = FeedState::Failed {
                request,
                message: e.to_string(),
            };
            app.relayout();
        }
    }
}
