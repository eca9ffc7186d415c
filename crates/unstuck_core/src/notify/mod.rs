//! Best-effort notification capability.
//!
//! # Responsibility
//! - Model the platform notification surface as an injectable trait.
//! - Track the permission state the platform reported at bootstrap.
//!
//! # Invariants
//! - Notification absence, denial, or failure degrades to a no-op; it never
//!   surfaces an error and never blocks the mutation that triggered it.
//! - Permission is requested once at bootstrap and gates nothing else.

use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

const MAX_NOTIFY_BODY_CHARS: usize = 160;

/// Permission state reported by the platform notification surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotifyPermission {
    /// The user granted notifications; delivery may be attempted.
    Granted,
    /// The user denied notifications; delivery must be skipped.
    Denied,
    /// The user has not answered yet; delivery must be skipped.
    Prompt,
}

/// Stable string value for granted permission.
pub const NOTIFY_PERMISSION_GRANTED: &str = "granted";
/// Stable string value for denied permission.
pub const NOTIFY_PERMISSION_DENIED: &str = "denied";
/// Stable string value for unanswered permission.
pub const NOTIFY_PERMISSION_PROMPT: &str = "prompt";

impl NotifyPermission {
    /// Stable string id matching the platform permission vocabulary.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Granted => NOTIFY_PERMISSION_GRANTED,
            Self::Denied => NOTIFY_PERMISSION_DENIED,
            Self::Prompt => NOTIFY_PERMISSION_PROMPT,
        }
    }
}

/// Parses one permission state from its stable string value.
pub fn parse_notify_permission(value: &str) -> Result<NotifyPermission, NotifyPermissionError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(NotifyPermissionError::EmptyPermission);
    }

    match normalized {
        NOTIFY_PERMISSION_GRANTED => Ok(NotifyPermission::Granted),
        NOTIFY_PERMISSION_DENIED => Ok(NotifyPermission::Denied),
        NOTIFY_PERMISSION_PROMPT => Ok(NotifyPermission::Prompt),
        other => Err(NotifyPermissionError::UnsupportedPermission(
            other.to_string(),
        )),
    }
}

/// Permission parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyPermissionError {
    EmptyPermission,
    UnsupportedPermission(String),
}

impl Display for NotifyPermissionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPermission => write!(f, "notification permission value must not be empty"),
            Self::UnsupportedPermission(value) => {
                write!(f, "notification permission is unsupported: {value}")
            }
        }
    }
}

impl Error for NotifyPermissionError {}

/// Injectable notification surface.
///
/// Implementations must be fire-and-forget: `notify` has no result and must
/// swallow any platform failure internally.
pub trait Notifier {
    /// One-time, best-effort permission request at bootstrap.
    fn request_permission(&mut self) -> NotifyPermission;

    /// Shows a short text notification. Failure is silent.
    fn notify(&self, title: &str, body: &str);
}

/// Notifier for environments without a notification surface.
///
/// Permission is always denied and delivery is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn request_permission(&mut self) -> NotifyPermission {
        NotifyPermission::Denied
    }

    fn notify(&self, _title: &str, _body: &str) {}
}

/// Notifier that records deliveries as structured log events.
///
/// Stands in for a desktop notification surface during development and in
/// headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn request_permission(&mut self) -> NotifyPermission {
        NotifyPermission::Granted
    }

    fn notify(&self, title: &str, body: &str) {
        info!(
            "event=notification_shown module=notify status=ok title={} body={}",
            sanitize_for_log(title),
            sanitize_for_log(body)
        );
    }
}

fn sanitize_for_log(value: &str) -> String {
    let normalized = value.replace(['\n', '\r'], " ");
    let mut truncated = normalized
        .chars()
        .take(MAX_NOTIFY_BODY_CHARS)
        .collect::<String>();
    if normalized.chars().count() > MAX_NOTIFY_BODY_CHARS {
        truncated.push_str("...");
    }
    truncated
}

#[cfg(test)]
mod tests {
    use super::{
        parse_notify_permission, sanitize_for_log, NotifyPermission, NotifyPermissionError,
    };

    #[test]
    fn parses_all_supported_permission_values() {
        assert_eq!(
            parse_notify_permission("granted").expect("granted parse"),
            NotifyPermission::Granted
        );
        assert_eq!(
            parse_notify_permission("denied").expect("denied parse"),
            NotifyPermission::Denied
        );
        assert_eq!(
            parse_notify_permission("prompt").expect("prompt parse"),
            NotifyPermission::Prompt
        );
    }

    #[test]
    fn permission_strings_round_trip() {
        for permission in [
            NotifyPermission::Granted,
            NotifyPermission::Denied,
            NotifyPermission::Prompt,
        ] {
            assert_eq!(
                parse_notify_permission(permission.as_str()).expect("round trip"),
                permission
            );
        }
    }

    #[test]
    fn rejects_empty_permission() {
        let err = parse_notify_permission("   ").expect_err("empty permission must fail");
        assert_eq!(err, NotifyPermissionError::EmptyPermission);
    }

    #[test]
    fn rejects_unsupported_permission() {
        let err = parse_notify_permission("default").expect_err("unsupported value must fail");
        assert_eq!(
            err,
            NotifyPermissionError::UnsupportedPermission("default".to_string())
        );
    }

    #[test]
    fn sanitize_removes_newlines_and_truncates() {
        let long = "line1\nline2\r".repeat(40);
        let sanitized = sanitize_for_log(&long);
        assert!(!sanitized.contains('\n'));
        assert!(!sanitized.contains('\r'));
        assert!(sanitized.ends_with("..."));
    }
}
