//! Notification stub
//!
//! Logs the message in place of a real delivery channel. No retries, no
//! delivery confirmation.

use tracing::info;

/// Outcome of a notification attempt
#[derive(Debug, Clone)]
pub struct NotificationResult {
    pub success: bool,
    pub message: String,
}

pub struct NotificationService;

impl NotificationService {
    pub fn notify(&self, recipient: &str, message: &str) -> NotificationResult {
        info!("Notification sent to {}: {}", recipient, message);
        NotificationResult {
            success: true,
            message: "Notification sent successfully".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_reports_success() {
        let result = NotificationService.notify("alice", "Your slot booking with ID 1 is confirmed!");
        assert!(result.success);
    }
}
