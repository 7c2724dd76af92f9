use quickaction_domain::action::Action;
use quickaction_domain::category::Category;
use quickaction_domain::quick_action::QuickAction;
use quickaction_domain::trigger::Scene;

use super::triggers;

pub(super) fn presets() -> Vec<QuickAction> {
    vec![
        QuickAction {
            id: "nav_home".into(),
            name: "Navigate Home".to_string(),
            description: "Start turn-by-turn navigation to the saved home address".to_string(),
            icon: "home".to_string(),
            category: Category::Navigation,
            action: Action::deep_link_with_shortcut(
                "amapuri://route/plan/?dname=home&dev=0&t=0",
                "navigate_home",
            ),
            context_triggers: triggers(&[Scene::Office, Scene::Unknown], &[("17:00", "23:00")]),
            enabled: true,
            priority: 100,
        },
        QuickAction {
            id: "nav_office".into(),
            name: "Navigate to Work".to_string(),
            description: "Start turn-by-turn navigation to the saved office address".to_string(),
            icon: "work".to_string(),
            category: Category::Navigation,
            action: Action::deep_link_with_shortcut(
                "amapuri://route/plan/?dname=company&dev=0&t=0",
                "navigate_office",
            ),
            context_triggers: triggers(&[Scene::Home], &[("06:30", "10:00")]),
            enabled: true,
            priority: 95,
        },
        QuickAction {
            id: "nav_amap".into(),
            name: "Amap".to_string(),
            description: "Open Amap".to_string(),
            icon: "map".to_string(),
            category: Category::Navigation,
            action: Action::app_launch("com.autonavi.minimap"),
            context_triggers: triggers(&[Scene::Commute, Scene::Travel], &[]),
            enabled: true,
            priority: 90,
        },
        QuickAction {
            id: "nav_transit_route".into(),
            name: "Transit Route".to_string(),
            description: "Plan a public transport route from the current location".to_string(),
            icon: "directions_transit".to_string(),
            category: Category::Navigation,
            action: Action::deep_link_with_shortcut(
                "baidumap://map/direction?mode=transit",
                "transit_route",
            ),
            context_triggers: triggers(
                &[Scene::Commute],
                &[("07:00", "09:30"), ("17:30", "19:30")],
            ),
            enabled: true,
            priority: 85,
        },
        QuickAction {
            id: "nav_baidu_maps".into(),
            name: "Baidu Maps".to_string(),
            description: "Open Baidu Maps".to_string(),
            icon: "map".to_string(),
            category: Category::Navigation,
            action: Action::app_launch("com.baidu.BaiduMap"),
            context_triggers: triggers(&[Scene::Travel], &[]),
            enabled: true,
            priority: 80,
        },
        QuickAction {
            id: "nav_google_maps".into(),
            name: "Google Maps".to_string(),
            description: "Open Google Maps".to_string(),
            icon: "map".to_string(),
            category: Category::Navigation,
            action: Action::app_launch("com.google.android.apps.maps"),
            context_triggers: triggers(&[Scene::Travel], &[]),
            enabled: true,
            priority: 75,
        },
        QuickAction {
            id: "nav_nearby_parking".into(),
            name: "Nearby Parking".to_string(),
            description: "Search for parking around the current location".to_string(),
            icon: "local_parking".to_string(),
            category: Category::Navigation,
            action: Action::deep_link("geo:0,0?q=parking"),
            context_triggers: triggers(&[Scene::Commute, Scene::Travel], &[]),
            enabled: true,
            priority: 70,
        },
        QuickAction {
            id: "nav_nearby_gas".into(),
            name: "Nearby Gas Station".to_string(),
            description: "Search for gas and charging stations nearby".to_string(),
            icon: "local_gas_station".to_string(),
            category: Category::Navigation,
            action: Action::deep_link("geo:0,0?q=gas+station"),
            context_triggers: triggers(&[Scene::Travel], &[]),
            enabled: true,
            priority: 65,
        },
        QuickAction {
            id: "nav_didi".into(),
            name: "DiDi Ride".to_string(),
            description: "Hail a ride with DiDi".to_string(),
            icon: "local_taxi".to_string(),
            category: Category::Navigation,
            action: Action::app_launch("com.sdu.didi.psnger"),
            context_triggers: triggers(&[Scene::Office, Scene::Travel], &[("20:00", "23:59")]),
            enabled: true,
            priority: 60,
        },
        QuickAction {
            id: "nav_waze".into(),
            name: "Waze".to_string(),
            description: "Open Waze for community traffic reports".to_string(),
            icon: "navigation".to_string(),
            category: Category::Navigation,
            action: Action::app_launch("com.waze"),
            context_triggers: triggers(&[], &[]),
            enabled: false,
            priority: 40,
        },
    ]
}
