//! Style class constants for the login controls

// Login button
pub const LOGIN_BUTTON_BASE: &str = "text-sm font-normal text-default-600 bg-default-100";
pub const FLAT_BUTTON: &str = "inline-flex items-center justify-center gap-2 px-4 py-2 rounded-md hover:bg-default-200 focus:outline-none focus-visible:ring-2 focus-visible:ring-blue-500 transition-colors";

// Icons
pub const GOOGLE_ICON: &str = "text-danger";
pub const INFO_ICON: &str = "text-default-400";

// Tooltip
pub const TOOLTIP_ANCHOR: &str = "relative inline-flex";
pub const TOOLTIP_SURFACE: &str = "absolute z-50 rounded-md shadow-md bg-gray-900 text-white dark:bg-gray-100 dark:text-gray-900 transition-opacity duration-150";
pub const TOOLTIP_VISIBLE: &str = "visible opacity-100";
pub const TOOLTIP_HIDDEN: &str = "invisible opacity-0 pointer-events-none";

// Beta notice inside the tooltip
pub const NOTICE_BODY: &str = "px-1 py-2 max-w-xs";
pub const NOTICE_HEADING: &str = "text-sm font-bold mb-1";
pub const NOTICE_TEXT: &str = "text-xs";
