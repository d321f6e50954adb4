//! 英文翻译 (en-US)

use super::keys::{
    CommonTexts, FeedTexts, HintTexts, NavTexts, PageTexts, PlayerTexts, SearchTexts,
    StatusTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "CouchTube",
        views: "views",
    },

    nav: NavTexts {
        home: "Home",
        trending: "Trending",
        music: "Music",
        search: "Search",
    },

    pages: PageTexts {
        trending: "🔥 Trending Videos",
        music: "🎵 Trending Music",
        search: "🔍 Search Videos",
    },

    feed: FeedTexts {
        loading: "Loading videos, please wait...",
        searching: "Searching...",
        no_results: "No videos found!",
        load_failed: "Couldn't load videos! Please try again in a moment.",
        search_failed: "Search failed!",
        search_prompt: "Type a query, then select the Search button",
    },

    search: SearchTexts {
        placeholder: "Search videos...",
        button: "Search",
    },

    player: PlayerTexts {
        title: "Now Playing",
        source: "Player URL",
        backend: "Backend",
        embed_note: "Open this address in a browser or point an external player at it",
    },

    hints: HintTexts {
        navigate: "Move",
        select: "Select",
        edit: "Type",
        close: "Close",
        quit: "Quit",
    },

    status: StatusTexts {
        backends_down: "All API servers are down!",
        loaded: "videos loaded",
        player_failed: "Couldn't start the player",
    },
};
