use quickaction_domain::action::Action;
use quickaction_domain::category::Category;
use quickaction_domain::quick_action::QuickAction;
use quickaction_domain::trigger::Scene;

use super::triggers;

pub(super) fn presets() -> Vec<QuickAction> {
    vec![
        QuickAction {
            id: "pay_alipay_scan".into(),
            name: "Alipay Scan".to_string(),
            description: "Open the Alipay scanner to pay a merchant QR code".to_string(),
            icon: "qr_code_scanner".to_string(),
            category: Category::Payment,
            action: Action::deep_link("alipays://platformapi/startapp?saId=10000007"),
            context_triggers: triggers(&[Scene::Commute, Scene::Travel, Scene::Unknown], &[]),
            enabled: true,
            priority: 100,
        },
        QuickAction {
            id: "pay_alipay_code".into(),
            name: "Alipay Pay Code".to_string(),
            description: "Show the Alipay payment code for the cashier to scan".to_string(),
            icon: "qr_code".to_string(),
            category: Category::Payment,
            action: Action::deep_link("alipays://platformapi/startapp?appId=20000056"),
            context_triggers: triggers(
                &[Scene::Office, Scene::Commute],
                &[("11:00", "13:30"), ("17:30", "20:00")],
            ),
            enabled: true,
            priority: 95,
        },
        QuickAction {
            id: "pay_wechat_scan".into(),
            name: "WeChat Scan".to_string(),
            description: "Open the WeChat scanner to pay or add a contact".to_string(),
            icon: "qr_code_scanner".to_string(),
            category: Category::Payment,
            action: Action::deep_link("weixin://scanqrcode"),
            context_triggers: triggers(&[Scene::Commute, Scene::Travel], &[]),
            enabled: true,
            priority: 90,
        },
        QuickAction {
            id: "pay_wechat_pay".into(),
            name: "WeChat Pay".to_string(),
            description: "Open WeChat to reach the Pay and Services page".to_string(),
            icon: "account_balance_wallet".to_string(),
            category: Category::Payment,
            action: Action::app_launch("com.tencent.mm"),
            context_triggers: triggers(&[Scene::Office, Scene::Home], &[]),
            enabled: true,
            priority: 85,
        },
        QuickAction {
            id: "pay_transit_code".into(),
            name: "Transit Ride Code".to_string(),
            description: "Show the metro and bus ride code at the gate".to_string(),
            icon: "directions_subway".to_string(),
            category: Category::Payment,
            action: Action::deep_link_with_shortcut(
                "alipays://platformapi/startapp?appId=200011235",
                "transit_ride_code",
            ),
            context_triggers: triggers(
                &[Scene::Commute],
                &[("07:00", "10:00"), ("17:00", "20:00")],
            ),
            enabled: true,
            priority: 80,
        },
        QuickAction {
            id: "pay_unionpay".into(),
            name: "UnionPay QuickPass".to_string(),
            description: "Open UnionPay QuickPass for card payments".to_string(),
            icon: "credit_card".to_string(),
            category: Category::Payment,
            action: Action::app_launch("com.unionpay"),
            context_triggers: triggers(&[Scene::Travel], &[]),
            enabled: true,
            priority: 70,
        },
        QuickAction {
            id: "pay_google_wallet".into(),
            name: "Google Wallet".to_string(),
            description: "Open Google Wallet for contactless payment abroad".to_string(),
            icon: "contactless".to_string(),
            category: Category::Payment,
            action: Action::app_launch("com.google.android.apps.walletnfcrel"),
            context_triggers: triggers(&[Scene::Travel], &[]),
            enabled: false,
            priority: 60,
        },
    ]
}
