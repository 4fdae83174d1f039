//! Static page content: the profile block and every dialog's copy.
//!
//! The dialog set is fixed at build time. Both the rendered markup and the
//! [`behavior::modal::ModalManager`] are built from [`DIALOGS`], so a
//! category present here always has a button or link, a dialog element,
//! and a slot in the state machine.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// Where a dialog's trigger lives on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogKind {
    /// Opened from a `.social-btn[data-social]` button.
    Social,
    /// Opened from a `.footer-nav a[data-modal]` link.
    Footer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DialogLink {
    pub href: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DialogEntry {
    pub category: &'static str,
    pub kind: DialogKind,
    /// Button label or footer link text.
    pub label: &'static str,
    /// Button icon glyph; unused for footer links.
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static [&'static str],
    pub link: Option<DialogLink>,
}

pub const DIALOGS: &[DialogEntry] = &[
    DialogEntry {
        category: "email",
        kind: DialogKind::Social,
        label: "邮箱",
        icon: "✉",
        title: "邮箱联系方式",
        body: &["欢迎来信交流技术与生活。", "hello@example.com"],
        link: Some(DialogLink { href: "mailto:hello@example.com", text: "发送邮件" }),
    },
    DialogEntry {
        category: "gitee",
        kind: DialogKind::Social,
        label: "Gitee",
        icon: "G",
        title: "Gitee 主页",
        body: &["个人项目与练习代码都托管在 Gitee。"],
        link: Some(DialogLink { href: "https://gitee.com/", text: "访问 Gitee" }),
    },
    DialogEntry {
        category: "cnblogs",
        kind: DialogKind::Social,
        label: "博客园",
        icon: "B",
        title: "博客园主页",
        body: &["技术笔记与学习总结。"],
        link: Some(DialogLink { href: "https://www.cnblogs.com/", text: "访问博客园" }),
    },
    DialogEntry {
        category: "qq",
        kind: DialogKind::Social,
        label: "QQ",
        icon: "Q",
        title: "QQ 联系方式",
        body: &["添加好友时请备注来意。", "QQ：123456789"],
        link: None,
    },
    DialogEntry {
        category: "about",
        kind: DialogKind::Footer,
        label: "关于本站",
        icon: "",
        title: "关于本站",
        body: &["一个简单的个人主页，记录我是谁、在做什么。", "使用 Rust、Leptos 与 WebAssembly 构建。"],
        link: None,
    },
    DialogEntry {
        category: "friends",
        kind: DialogKind::Footer,
        label: "友链",
        icon: "",
        title: "友链",
        body: &["暂无友链，欢迎交换。"],
        link: None,
    },
    DialogEntry {
        category: "postscript",
        kind: DialogKind::Footer,
        label: "后记",
        icon: "",
        title: "后记",
        body: &["感谢你的到访。"],
        link: None,
    },
];

/// Profile block content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub bio: &'static str,
    pub motto: &'static str,
    pub avatar_src: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Your Name",
    bio: "热爱编程，也热爱生活。写代码，读书，偶尔拍照。",
    motto: "保持好奇，持续学习。",
    avatar_src: "/avatar.png",
};

/// Shown when the avatar image fails to load.
pub const AVATAR_PLACEHOLDER: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 200 200'%3E%3Ccircle cx='100' cy='100' r='100' fill='%23333'/%3E%3Ctext x='50%25' y='50%25' text-anchor='middle' dy='.3em' font-size='80' fill='%23fff'%3E👤%3C/text%3E%3C/svg%3E";

#[must_use]
pub fn entry(category: &str) -> Option<&'static DialogEntry> {
    DIALOGS.iter().find(|e| e.category == category)
}

pub fn of_kind(kind: DialogKind) -> impl Iterator<Item = &'static DialogEntry> {
    DIALOGS.iter().filter(move |e| e.kind == kind)
}

pub fn categories() -> impl Iterator<Item = &'static str> {
    DIALOGS.iter().map(|e| e.category)
}
