//! Well-known configuration keys
//!
//! Keys are plain camelCase strings; these constants exist so components and
//! tools agree on spelling. Any other string is an equally valid key.

pub const ACTIVATOR: &str = "activator";
pub const ACTION_SHEET_ENTER: &str = "actionSheetEnter";
pub const ACTION_SHEET_LEAVE: &str = "actionSheetLeave";
pub const ALERT_ENTER: &str = "alertEnter";
pub const ALERT_LEAVE: &str = "alertLeave";
pub const BACK_BUTTON_TEXT: &str = "backButtonText";
pub const BACK_BUTTON_ICON: &str = "backButtonIcon";
pub const ICON_MODE: &str = "iconMode";
pub const LOCATION_STRATEGY: &str = "locationStrategy";
pub const LOADING_ENTER: &str = "loadingEnter";
pub const LOADING_LEAVE: &str = "loadingLeave";
pub const MENU_TYPE: &str = "menuType";
pub const MODAL_ENTER: &str = "modalEnter";
pub const MODAL_LEAVE: &str = "modalLeave";
pub const MODE: &str = "mode";
pub const PAGE_TRANSITION: &str = "pageTransition";
pub const PICKER_ENTER: &str = "pickerEnter";
pub const PICKER_LEAVE: &str = "pickerLeave";
pub const POPOVER_ENTER: &str = "popoverEnter";
pub const POPOVER_LEAVE: &str = "popoverLeave";
pub const SPINNER: &str = "spinner";
pub const SWIPE_BACK_ENABLED: &str = "swipeBackEnabled";
pub const TABS_HIGHLIGHT: &str = "tabsHighlight";
pub const TABS_LAYOUT: &str = "tabsLayout";
pub const TABS_PLACEMENT: &str = "tabsPlacement";
pub const TABS_HIDE_ON_SUB_PAGES: &str = "tabsHideOnSubPages";
pub const TOAST_ENTER: &str = "toastEnter";
pub const TOAST_LEAVE: &str = "toastLeave";

/// Every well-known key, in documentation order.
pub const ALL: &[&str] = &[
    ACTIVATOR,
    ACTION_SHEET_ENTER,
    ACTION_SHEET_LEAVE,
    ALERT_ENTER,
    ALERT_LEAVE,
    BACK_BUTTON_TEXT,
    BACK_BUTTON_ICON,
    ICON_MODE,
    LOCATION_STRATEGY,
    LOADING_ENTER,
    LOADING_LEAVE,
    MENU_TYPE,
    MODAL_ENTER,
    MODAL_LEAVE,
    MODE,
    PAGE_TRANSITION,
    PICKER_ENTER,
    PICKER_LEAVE,
    POPOVER_ENTER,
    POPOVER_LEAVE,
    SPINNER,
    SWIPE_BACK_ENABLED,
    TABS_HIGHLIGHT,
    TABS_LAYOUT,
    TABS_PLACEMENT,
    TABS_HIDE_ON_SUB_PAGES,
    TOAST_ENTER,
    TOAST_LEAVE,
];
