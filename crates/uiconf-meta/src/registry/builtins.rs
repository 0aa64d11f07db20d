//! Built-in mode definitions
//!
//! The three built-in styles every application gets at bootstrap: `ios`,
//! `md` (material design) and `wp` (windows).

use crate::keys::*;
use crate::settings::Settings;

/// Number of built-in modes.
pub const BUILTIN_MODE_COUNT: usize = 3;

/// Returns all built-in modes as `(name, settings)` pairs.
pub fn builtin_modes() -> Vec<(&'static str, Settings)> {
    vec![("ios", ios()), ("md", md()), ("wp", wp())]
}

fn ios() -> Settings {
    Settings::new()
        .with(ACTIVATOR, "highlight")
        .with(ACTION_SHEET_ENTER, "action-sheet-slide-in")
        .with(ACTION_SHEET_LEAVE, "action-sheet-slide-out")
        .with(ALERT_ENTER, "alert-pop-in")
        .with(ALERT_LEAVE, "alert-pop-out")
        .with(BACK_BUTTON_TEXT, "Back")
        .with(BACK_BUTTON_ICON, "ios-arrow-back")
        .with(ICON_MODE, "ios")
        .with(LOADING_ENTER, "loading-pop-in")
        .with(LOADING_LEAVE, "loading-pop-out")
        .with(MENU_TYPE, "reveal")
        .with(MODAL_ENTER, "modal-slide-in")
        .with(MODAL_LEAVE, "modal-slide-out")
        .with(PAGE_TRANSITION, "ios-transition")
        .with(PICKER_ENTER, "picker-slide-in")
        .with(PICKER_LEAVE, "picker-slide-out")
        .with(POPOVER_ENTER, "popover-pop-in")
        .with(POPOVER_LEAVE, "popover-pop-out")
        .with(SPINNER, "ios")
        .with(TABS_HIGHLIGHT, false)
        .with(TABS_PLACEMENT, "bottom")
        .with(TABS_HIDE_ON_SUB_PAGES, false)
        .with(TOAST_ENTER, "toast-slide-in")
        .with(TOAST_LEAVE, "toast-slide-out")
}

fn md() -> Settings {
    Settings::new()
        .with(ACTIVATOR, "ripple")
        .with(ACTION_SHEET_ENTER, "action-sheet-md-slide-in")
        .with(ACTION_SHEET_LEAVE, "action-sheet-md-slide-out")
        .with(ALERT_ENTER, "alert-md-pop-in")
        .with(ALERT_LEAVE, "alert-md-pop-out")
        .with(BACK_BUTTON_TEXT, "")
        .with(BACK_BUTTON_ICON, "md-arrow-back")
        .with(ICON_MODE, "md")
        .with(LOADING_ENTER, "loading-md-pop-in")
        .with(LOADING_LEAVE, "loading-md-pop-out")
        .with(MENU_TYPE, "overlay")
        .with(MODAL_ENTER, "modal-md-slide-in")
        .with(MODAL_LEAVE, "modal-md-slide-out")
        .with(PAGE_TRANSITION, "md-transition")
        .with(PICKER_ENTER, "picker-slide-in")
        .with(PICKER_LEAVE, "picker-slide-out")
        .with(POPOVER_ENTER, "popover-md-pop-in")
        .with(POPOVER_LEAVE, "popover-md-pop-out")
        .with(SPINNER, "crescent")
        .with(TABS_HIGHLIGHT, false)
        .with(TABS_PLACEMENT, "bottom")
        .with(TABS_HIDE_ON_SUB_PAGES, false)
        .with(TOAST_ENTER, "toast-md-slide-in")
        .with(TOAST_LEAVE, "toast-md-slide-out")
}

fn wp() -> Settings {
    Settings::new()
        .with(ACTIVATOR, "highlight")
        .with(ACTION_SHEET_ENTER, "action-sheet-wp-slide-in")
        .with(ACTION_SHEET_LEAVE, "action-sheet-wp-slide-out")
        .with(ALERT_ENTER, "alert-wp-pop-in")
        .with(ALERT_LEAVE, "alert-wp-pop-out")
        .with(BACK_BUTTON_TEXT, "")
        .with(BACK_BUTTON_ICON, "ios-arrow-back")
        .with(ICON_MODE, "ios")
        .with(LOADING_ENTER, "loading-wp-pop-in")
        .with(LOADING_LEAVE, "loading-wp-pop-out")
        .with(MENU_TYPE, "overlay")
        .with(MODAL_ENTER, "modal-md-slide-in")
        .with(MODAL_LEAVE, "modal-md-slide-out")
        .with(PAGE_TRANSITION, "wp-transition")
        .with(PICKER_ENTER, "picker-slide-in")
        .with(PICKER_LEAVE, "picker-slide-out")
        .with(POPOVER_ENTER, "popover-md-pop-in")
        .with(POPOVER_LEAVE, "popover-md-pop-out")
        .with(SPINNER, "circles")
        .with(TABS_HIGHLIGHT, false)
        .with(TABS_LAYOUT, "icon-hide")
        .with(TABS_PLACEMENT, "top")
        .with(TABS_HIDE_ON_SUB_PAGES, true)
        .with(TOAST_ENTER, "toast-wp-slide-in")
        .with(TOAST_LEAVE, "toast-wp-slide-out")
}
