//! Web handlers rendering server-side pages

pub mod catalog;
pub mod health;
pub mod history;
pub mod loans;
pub mod pages;
pub mod search;

use tower_cookies::{Cookie, Cookies};

const FLASH_COOKIE: &str = "flash";

/// Flash notice level, mapped to a CSS class on render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Danger,
}

impl FlashLevel {
    pub fn css_class(self) -> &'static str {
        match self {
            FlashLevel::Success => "flash-success",
            FlashLevel::Danger => "flash-danger",
        }
    }

    fn tag(self) -> &'static str {
        match self {
            FlashLevel::Success => "success",
            FlashLevel::Danger => "danger",
        }
    }
}

/// A one-shot notice carried to the next rendered page in a cookie
#[derive(Debug, Clone)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    /// Queue a success notice for the next page
    pub fn success(cookies: &Cookies, message: impl Into<String>) {
        Self::set(cookies, FlashLevel::Success, message.into());
    }

    /// Queue a danger notice for the next page
    pub fn danger(cookies: &Cookies, message: impl Into<String>) {
        Self::set(cookies, FlashLevel::Danger, message.into());
    }

    fn set(cookies: &Cookies, level: FlashLevel, message: String) {
        let value = format!("{}:{}", level.tag(), urlencoding::encode(&message));
        let mut cookie = Cookie::new(FLASH_COOKIE, value);
        cookie.set_path("/");
        cookie.set_http_only(true);
        cookies.add(cookie);
    }

    /// Take the pending notice, clearing the cookie
    pub fn take(cookies: &Cookies) -> Option<Flash> {
        let value = cookies.get(FLASH_COOKIE)?.value().to_string();

        let mut removal = Cookie::new(FLASH_COOKIE, "");
        removal.set_path("/");
        cookies.remove(removal);

        let (tag, encoded) = value.split_once(':')?;
        let level = match tag {
            "success" => FlashLevel::Success,
            "danger" => FlashLevel::Danger,
            _ => return None,
        };
        let message = urlencoding::decode(encoded).ok()?.into_owned();

        Some(Flash { level, message })
    }
}
