//! Display mappings for enumerated fields
//!
//! Each mapping is an exhaustive match over the closed enum; the `Other`
//! arm passes the raw backend value through.

use std::borrow::Cow;

use crate::types::{Direction, FillStatus, OrderAction, OrderStatus};

/// Neutral colour for unmapped actions
const FALLBACK_COLOR: &str = "#a1a1aa";

/// Status pill: CSS class and localized text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub class: Cow<'static, str>,
    pub label: Cow<'static, str>,
}

pub fn status_badge(status: &OrderStatus) -> StatusBadge {
    let (class, label) = match status {
        OrderStatus::Pending => ("status-pending", "待處理"),
        OrderStatus::Submitted => ("status-pending", "委託中"),
        OrderStatus::PartialFilled => ("status-pending", "部分成交"),
        OrderStatus::Filled => ("status-success", "已成交"),
        OrderStatus::Success => ("status-success", "成功"),
        OrderStatus::Failed => ("status-failed", "失敗"),
        OrderStatus::Cancelled => ("status-no_action", "已取消"),
        OrderStatus::NoAction => ("status-no_action", "無動作"),
        OrderStatus::Other(raw) => {
            return StatusBadge {
                class: Cow::Owned(format!("status-{raw}")),
                label: Cow::Owned(raw.clone()),
            };
        }
    };
    StatusBadge {
        class: Cow::Borrowed(class),
        label: Cow::Borrowed(label),
    }
}

/// Icon, short label, long title and colour for an order action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionStyle {
    pub icon: &'static str,
    pub label: Cow<'static, str>,
    pub title: Cow<'static, str>,
    pub color: &'static str,
}

pub fn action_style(action: &OrderAction) -> ActionStyle {
    let (icon, label, title, color) = match action {
        OrderAction::LongEntry => ("📈", "多入", "做多進場", "#00ff88"),
        OrderAction::LongExit => ("📤", "多出", "做多出場", "#00d9ff"),
        OrderAction::ShortEntry => ("📉", "空入", "做空進場", "#ff6b6b"),
        OrderAction::ShortExit => ("📥", "空出", "做空出場", "#ffc107"),
        OrderAction::Other(raw) => {
            return ActionStyle {
                icon: "●",
                label: Cow::Owned(raw.clone()),
                title: Cow::Owned(raw.clone()),
                color: FALLBACK_COLOR,
            };
        }
    };
    ActionStyle {
        icon,
        label: Cow::Borrowed(label),
        title: Cow::Borrowed(title),
        color,
    }
}

/// Localized label for an exchange-side status
pub fn fill_status_label(status: &FillStatus) -> Cow<'static, str> {
    match status {
        FillStatus::PendingSubmit => Cow::Borrowed("待送出"),
        FillStatus::PreSubmitted => Cow::Borrowed("預送出"),
        FillStatus::Submitted => Cow::Borrowed("委託中"),
        FillStatus::Filled => Cow::Borrowed("已成交"),
        FillStatus::PartFilled => Cow::Borrowed("部分成交"),
        FillStatus::Cancelled => Cow::Borrowed("已取消"),
        FillStatus::Failed => Cow::Borrowed("失敗"),
        FillStatus::Other(raw) => Cow::Owned(raw.clone()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionStyle {
    pub icon: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

pub fn direction_style(direction: Direction) -> DirectionStyle {
    match direction {
        Direction::Buy => DirectionStyle {
            icon: "🟢",
            label: "多",
            color: "#00ff88",
        },
        Direction::Sell => DirectionStyle {
            icon: "🔴",
            label: "空",
            color: "#ff6b6b",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_status_badges() {
        let badge = status_badge(&OrderStatus::Filled);
        assert_eq!(badge.class, "status-success");
        assert_eq!(badge.label, "已成交");

        assert_eq!(status_badge(&OrderStatus::Failed).class, "status-failed");
        assert_eq!(status_badge(&OrderStatus::Cancelled).class, "status-no_action");
        assert_eq!(status_badge(&OrderStatus::PartialFilled).label, "部分成交");
    }

    #[test]
    fn test_unknown_status_passes_through() {
        for raw in ["expired", "rejected", "weird_state"] {
            let badge = status_badge(&OrderStatus::Other(raw.to_string()));
            assert_eq!(badge.class, format!("status-{raw}"));
            assert_eq!(badge.label, raw);
        }
    }

    #[test]
    fn test_action_styles() {
        let style = action_style(&OrderAction::LongEntry);
        assert_eq!(style.icon, "📈");
        assert_eq!(style.label, "多入");
        assert_eq!(style.title, "做多進場");

        let style = action_style(&OrderAction::Other("hedge".into()));
        assert_eq!(style.icon, "●");
        assert_eq!(style.label, "hedge");
        assert_eq!(style.color, "#a1a1aa");
    }

    #[test]
    fn test_fill_status_labels() {
        assert_eq!(fill_status_label(&FillStatus::PartFilled), "部分成交");
        assert_eq!(fill_status_label(&FillStatus::Other("Inactive".into())), "Inactive");
    }

    #[test]
    fn test_direction_styles() {
        assert_eq!(direction_style(Direction::Buy).label, "多");
        assert_eq!(direction_style(Direction::Sell).icon, "🔴");
    }
}
