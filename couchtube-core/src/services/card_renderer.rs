//! 视频卡片渲染
//!
//! Turns fetched items into cards. Items that are not watchable, or whose
//! watch reference carries no usable id, are skipped silently.

use couchtube_provider::VideoItem;
use log::debug;
use url::Url;

use crate::error::{CoreError, CoreResult};
use crate::types::VideoCard;
use crate::utils::format::{format_time, format_views};

// 仅用于解析相对 watch 引用
const WATCH_BASE: &str = "https://watch.invalid/";

/// Whether `id` only uses the characters video ids are made of.
pub fn is_valid_video_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// Video id from a watch reference such as `/watch?v=xyz`.
pub fn extract_video_id(watch_ref: &str) -> CoreResult<String> {
    let invalid = || CoreError::InvalidVideoId(watch_ref.to_string());

    let base = Url::parse(WATCH_BASE).map_err(|_| invalid())?;
    let url = base.join(watch_ref).map_err(|_| invalid())?;
    let id = url
        .query_pairs()
        .find(|(key, _)| key == "v")
        .map(|(_, value)| value.into_owned())
        .ok_or_else(invalid)?;

    if is_valid_video_id(&id) {
        Ok(id)
    } else {
        Err(invalid())
    }
}

/// One card for an item, or `None` when the item is not a playable video.
pub fn render_card(item: &VideoItem) -> Option<VideoCard> {
    if !item.is_watchable() {
        return None;
    }
    let watch_ref = item.url.as_deref()?;
    let video_id = match extract_video_id(watch_ref) {
        Ok(id) => id,
        Err(e) => {
            debug!("Skipping item: {e}");
            return None;
        }
    };

    Some(VideoCard {
        video_id,
        title: item.title.clone().unwrap_or_default(),
        thumbnail: item.thumbnail.clone().unwrap_or_default(),
        duration_label: format_time(item.duration.as_ref()),
        uploader: item.uploader_name.clone().unwrap_or_default(),
        views_label: format_views(item.views),
    })
}

/// Cards for every playable item, in response order.
pub fn render_cards(items: &[VideoItem]) -> Vec<VideoCard> {
    items.iter().filter_map(render_card).collect()
}

#[cfg(test)]
mod tests {
    use couchtube_provider::DurationValue;

    use super::*;

    fn item(url: &str) -> VideoItem {
        VideoItem {
            url: Some(url.to_string()),
            ..VideoItem::default()
        }
    }

    #[test]
    fn only_watch_references_become_cards() {
        let cards = render_cards(&[item("/watch?v=xyz"), item("/about")]);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].video_id, "xyz");
    }

    #[test]
    fn items_without_url_are_skipped() {
        let cards = render_cards(&[VideoItem::default(), item("/watch?v=a1")]);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].video_id, "a1");
    }

    #[test]
    fn extra_query_parameters_are_ignored() {
        assert_eq!(
            extract_video_id("/watch?t=30&v=dQw4w9WgXcQ&list=x").unwrap_or_default(),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn missing_or_unsafe_ids_are_rejected() {
        assert!(extract_video_id("/watch").is_err());
        assert!(extract_video_id("/watch?v=").is_err());
        assert!(extract_video_id("/watch?v=a%22onload%3D").is_err());
        assert!(render_cards(&[item("/watch?list=abc")]).is_empty());
    }

    #[test]
    fn card_fields_are_formatted() {
        let video = VideoItem {
            url: Some("/watch?v=abc".to_string()),
            title: Some("Clip".to_string()),
            thumbnail: Some("https://i/abc.jpg".to_string()),
            duration: Some(DurationValue::Seconds(125.0)),
            uploader_name: Some("Someone".to_string()),
            views: Some(1_234_567),
        };
        let card = render_card(&video);
        assert_eq!(
            card,
            Some(VideoCard {
                video_id: "abc".to_string(),
                title: "Clip".to_string(),
                thumbnail: "https://i/abc.jpg".to_string(),
                duration_label: "2:05".to_string(),
                uploader: "Someone".to_string(),
                views_label: "1,234,567".to_string(),
            })
        );
    }

    #[test]
    fn missing_views_render_as_zero() {
        let card = render_card(&item("/watch?v=abc"));
        assert_eq!(card.map(|c| c.views_label), Some("0".to_string()));
    }
}
