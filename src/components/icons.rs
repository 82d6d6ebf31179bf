//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowLeft as ArrowLeft, LuArrowRight as ArrowRight, LuBookmark as Bookmark,
        LuBookmarkCheck as Bookmarked, LuCalendar as Calendar, LuClock as Clock,
        LuGithub as Github, LuLinkedin as Linkedin, LuMail as Mail, LuMenu as Menu,
        LuMoon as Moon, LuSearch as Search, LuShare2 as Share, LuSun as Sun,
        LuTwitter as Twitter, LuUser as User, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowLeft as ArrowLeft, BsArrowRight as ArrowRight, BsBookmark as Bookmark,
        BsBookmarkCheckFill as Bookmarked, BsCalendar as Calendar, BsShare as Share,
        BsClock as Clock, BsEnvelope as Mail, BsGithub as Github, BsLinkedin as Linkedin,
        BsList as Menu, BsMoon as Moon, BsPerson as User, BsSearch as Search, BsSun as Sun,
        BsTwitter as Twitter, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(ARROW_LEFT, ArrowLeft);
themed_icon!(ARROW_RIGHT, ArrowRight);
themed_icon!(CALENDAR, Calendar);
themed_icon!(CLOCK, Clock);
themed_icon!(USER, User);
themed_icon!(BOOKMARK, Bookmark);
themed_icon!(BOOKMARKED, Bookmarked);
themed_icon!(SHARE, Share);
themed_icon!(SEARCH, Search);
themed_icon!(MENU, Menu);
themed_icon!(CLOSE, Close);
themed_icon!(SUN, Sun);
themed_icon!(MOON, Moon);
themed_icon!(GITHUB, Github);
themed_icon!(TWITTER, Twitter);
themed_icon!(LINKEDIN, Linkedin);
themed_icon!(MAIL, Mail);
