//! 孟加拉语翻译 (bn-BD)

use super::keys::{
    CommonTexts, FeedTexts, HintTexts, NavTexts, PageTexts, PlayerTexts, SearchTexts,
    StatusTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "CouchTube",
        views: "বার দেখা হয়েছে",
    },

    nav: NavTexts {
        home: "হোম",
        trending: "ট্রেন্ডিং",
        music: "মিউজিক",
        search: "সার্চ",
    },

    pages: PageTexts {
        trending: "🔥 ট্রেন্ডিং ভিডিও",
        music: "🎵 ট্রেন্ডিং মিউজিক",
        search: "🔍 ভিডিও খুঁজুন",
    },

    feed: FeedTexts {
        loading: "ভিডিও লোড হচ্ছে, দয়া করে অপেক্ষা করুন...",
        searching: "খোঁজা হচ্ছে...",
        no_results: "কোনো ভিডিও পাওয়া যায়নি!",
        load_failed: "ভিডিও লোড করতে সমস্যা হয়েছে! কিছুক্ষণ পর আবার চেষ্টা করুন।",
        search_failed: "সার্চ করতে সমস্যা হয়েছে!",
        search_prompt: "কিছু লিখে সার্চ বাটন চাপুন",
    },

    search: SearchTexts {
        placeholder: "ভিডিও খুঁজুন...",
        button: "সার্চ",
    },

    player: PlayerTexts {
        title: "এখন চলছে",
        source: "প্লেয়ার ঠিকানা",
        backend: "ব্যাকএন্ড",
        embed_note: "ঠিকানাটি ব্রাউজারে বা বাইরের প্লেয়ারে খুলুন",
    },

    hints: HintTexts {
        navigate: "সরান",
        select: "নির্বাচন",
        edit: "লিখুন",
        close: "বন্ধ",
        quit: "বের হন",
    },

    status: StatusTexts {
        backends_down: "সবগুলো API সার্ভার ডাউন আছে!",
        loaded: "টি ভিডিও লোড হয়েছে",
        player_failed: "প্লেয়ার চালু করা যায়নি",
    },
};
