use quickaction_domain::action::Action;
use quickaction_domain::category::Category;
use quickaction_domain::quick_action::QuickAction;
use quickaction_domain::trigger::Scene;

use super::triggers;

pub(super) fn presets() -> Vec<QuickAction> {
    vec![
        QuickAction {
            id: "comm_wechat".into(),
            name: "WeChat".to_string(),
            description: "Open WeChat chats".to_string(),
            icon: "chat".to_string(),
            category: Category::Communication,
            action: Action::app_launch("com.tencent.mm"),
            context_triggers: triggers(&[], &[]),
            enabled: true,
            priority: 100,
        },
        QuickAction {
            id: "comm_phone".into(),
            name: "Phone".to_string(),
            description: "Open the dialer".to_string(),
            icon: "call".to_string(),
            category: Category::Communication,
            action: Action::deep_link("tel:"),
            context_triggers: triggers(&[], &[]),
            enabled: true,
            priority: 95,
        },
        QuickAction {
            id: "comm_sms".into(),
            name: "Messages".to_string(),
            description: "Compose a text message".to_string(),
            icon: "sms".to_string(),
            category: Category::Communication,
            action: Action::deep_link("sms:"),
            context_triggers: triggers(&[], &[]),
            enabled: true,
            priority: 90,
        },
        QuickAction {
            id: "comm_call_family".into(),
            name: "Call Family".to_string(),
            description: "Call the contact marked as family".to_string(),
            icon: "family_restroom".to_string(),
            category: Category::Communication,
            action: Action::deep_link_with_shortcut("tel:", "call_family"),
            context_triggers: triggers(&[Scene::Commute, Scene::Travel], &[("17:00", "21:00")]),
            enabled: true,
            priority: 85,
        },
        QuickAction {
            id: "comm_qq".into(),
            name: "QQ".to_string(),
            description: "Open QQ".to_string(),
            icon: "forum".to_string(),
            category: Category::Communication,
            action: Action::app_launch("com.tencent.mobileqq"),
            context_triggers: triggers(&[Scene::Home], &[]),
            enabled: true,
            priority: 80,
        },
        QuickAction {
            id: "comm_dingtalk".into(),
            name: "DingTalk".to_string(),
            description: "Open DingTalk for work messages and check-in".to_string(),
            icon: "business".to_string(),
            category: Category::Communication,
            action: Action::app_launch("com.alibaba.android.rimet"),
            context_triggers: triggers(&[Scene::Office], &[("08:30", "18:30")]),
            enabled: true,
            priority: 75,
        },
        QuickAction {
            id: "comm_wecom".into(),
            name: "WeCom".to_string(),
            description: "Open WeCom for work messages".to_string(),
            icon: "business".to_string(),
            category: Category::Communication,
            action: Action::app_launch("com.tencent.wework"),
            context_triggers: triggers(&[Scene::Office], &[("08:30", "18:30")]),
            enabled: true,
            priority: 70,
        },
        QuickAction {
            id: "comm_email".into(),
            name: "Email".to_string(),
            description: "Compose a new email".to_string(),
            icon: "mail".to_string(),
            category: Category::Communication,
            action: Action::deep_link("mailto:"),
            context_triggers: triggers(&[Scene::Office], &[("09:00", "18:00")]),
            enabled: true,
            priority: 65,
        },
        QuickAction {
            id: "comm_feishu".into(),
            name: "Feishu".to_string(),
            description: "Open Feishu for work messages and docs".to_string(),
            icon: "business".to_string(),
            category: Category::Communication,
            action: Action::app_launch("com.ss.android.lark"),
            context_triggers: triggers(&[Scene::Office], &[]),
            enabled: true,
            priority: 60,
        },
        QuickAction {
            id: "comm_whatsapp".into(),
            name: "WhatsApp".to_string(),
            description: "Open WhatsApp chats".to_string(),
            icon: "chat".to_string(),
            category: Category::Communication,
            action: Action::app_launch("com.whatsapp"),
            context_triggers: triggers(&[Scene::Travel], &[]),
            enabled: true,
            priority: 50,
        },
        QuickAction {
            id: "comm_telegram".into(),
            name: "Telegram".to_string(),
            description: "Open Telegram chats".to_string(),
            icon: "send".to_string(),
            category: Category::Communication,
            action: Action::app_launch("org.telegram.messenger"),
            context_triggers: triggers(&[Scene::Travel], &[]),
            enabled: false,
            priority: 45,
        },
    ]
}
