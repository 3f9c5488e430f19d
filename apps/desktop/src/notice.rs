//! # Notices
//!
//! Short success/error messages the presentation layer shows and then
//! dismisses after `ConfigState::notice_ms`.

use serde::Serialize;

use crate::error::ApiError;
use crate::state::ConfigState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    /// Milliseconds until the notice disappears.
    pub dismiss_after: u64,
}

impl Notice {
    pub fn success(message: impl Into<String>, config: &ConfigState) -> Self {
        Notice {
            kind: NoticeKind::Success,
            message: message.into(),
            dismiss_after: config.notice_ms,
        }
    }

    pub fn error(message: impl Into<String>, config: &ConfigState) -> Self {
        Notice {
            kind: NoticeKind::Error,
            message: message.into(),
            dismiss_after: config.notice_ms,
        }
    }

    /// Turns a command outcome into a notice.
    ///
    /// ```rust
    /// use fragrance_desktop_lib::notice::{Notice, NoticeKind};
    /// use fragrance_desktop_lib::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// let outcome: Result<u32, _> = Ok(2);
    /// let notice = Notice::from_result(&outcome, &config, |n| format!("{} sold", n));
    /// assert_eq!(notice.kind, NoticeKind::Success);
    /// assert_eq!(notice.message, "2 sold");
    /// ```
    pub fn from_result<T>(
        result: &Result<T, ApiError>,
        config: &ConfigState,
        on_success: impl FnOnce(&T) -> String,
    ) -> Self {
        match result {
            Ok(value) => Notice::success(on_success(value), config),
            Err(err) => Notice::error(err.message.clone(), config),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fragrance_core::CoreError;

    #[test]
    fn test_error_notice_uses_api_message() {
        let config = ConfigState {
            notice_ms: 1200,
            ..ConfigState::default()
        };
        let outcome: Result<(), ApiError> = Err(CoreError::EmptyCart.into());

        let notice = Notice::from_result(&outcome, &config, |_| unreachable!());

        assert!(notice.is_error());
        assert_eq!(notice.message, "There are no products in the sale");
        assert_eq!(notice.dismiss_after, 1200);
    }

    #[test]
    fn test_serialized_shape() {
        let notice = Notice::success("Inventory updated", &ConfigState::default());
        let json = serde_json::to_value(&notice).unwrap();

        assert_eq!(json["kind"], "success");
        assert_eq!(json["dismissAfter"], 3000);
    }
}
