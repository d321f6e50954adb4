//! 翻译键定义
//!
//! 按 UI 组件位置分类：文本归属于它出现的组件，键盘提示归 `hints.*`。

/// 所有翻译文本的根结构
pub struct Translations {
    pub common: CommonTexts,
    pub nav: NavTexts,
    pub pages: PageTexts,
    pub feed: FeedTexts,
    pub search: SearchTexts,
    pub player: PlayerTexts,
    pub hints: HintTexts,
    pub status: StatusTexts,
}

pub struct CommonTexts {
    pub app_name: &'static str,
    pub views: &'static str,
}

/// 侧边栏
pub struct NavTexts {
    pub home: &'static str,
    pub trending: &'static str,
    pub music: &'static str,
    pub search: &'static str,
}

/// 页面标题
pub struct PageTexts {
    pub trending: &'static str,
    pub music: &'static str,
    pub search: &'static str,
}

/// 视频网格占位文本
pub struct FeedTexts {
    pub loading: &'static str,
    pub searching: &'static str,
    pub no_results: &'static str,
    pub load_failed: &'static str,
    pub search_failed: &'static str,
    pub search_prompt: &'static str,
}

pub struct SearchTexts {
    pub placeholder: &'static str,
    pub button: &'static str,
}

pub struct PlayerTexts {
    pub title: &'static str,
    pub source: &'static str,
    pub backend: &'static str,
    pub embed_note: &'static str,
}

/// 键盘提示（按键名称 + 动作词）
pub struct HintTexts {
    pub navigate: &'static str,
    pub select: &'static str,
    pub edit: &'static str,
    pub close: &'static str,
    pub quit: &'static str,
}

/// 状态栏消息
pub struct StatusTexts {
    pub backends_down: &'static str,
    pub loaded: &'static str,
    pub player_failed: &'static str,
}
