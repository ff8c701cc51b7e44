use chrono::{DateTime, Duration, Utc};

/// How long a toast stays up
pub const TOAST_LIFETIME_MS: i64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Warning,
}

/// Fire-and-forget notification; it is never dismissed explicitly, it just
/// stops being visible once its lifetime is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub raised_at: DateTime<Utc>,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind, raised_at: DateTime<Utc>) -> Self {
        Self {
            message: message.into(),
            kind,
            raised_at,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Success, Utc::now())
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Warning, Utc::now())
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.raised_at + Duration::milliseconds(TOAST_LIFETIME_MS)
    }

    pub fn is_visible_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_toast_expires_after_lifetime() {
        let raised = Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap();
        let toast = Toast::new("Passkey Provisioned! ✅", ToastKind::Success, raised);

        assert!(toast.is_visible_at(raised));
        assert!(toast.is_visible_at(raised + Duration::milliseconds(2999)));
        assert!(!toast.is_visible_at(raised + Duration::milliseconds(3000)));
    }
}
