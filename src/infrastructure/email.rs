use crate::domain::error::DomainError;
use crate::domain::interfaces::EmailSender;
use async_trait::async_trait;
use parking_lot::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub body: String,
}

/// Sender that never leaves the process; mails are logged and kept in memory.
#[derive(Default)]
pub struct FakeEmailSender {
    outbox: Mutex<Vec<SentEmail>>,
}

impl FakeEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<SentEmail> {
        self.outbox.lock().clone()
    }
}

#[async_trait]
impl EmailSender for FakeEmailSender {
    async fn send_email(
        &self,
        to: &str,
        from: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), DomainError> {
        log::debug!("Not actually sending an email to {to} from {from} with subject {subject}");
        self.outbox.lock().push(SentEmail {
            to: to.to_string(),
            from: from.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}
