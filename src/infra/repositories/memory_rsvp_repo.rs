use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use crate::domain::{models::rsvp::{NewRsvp, RsvpSubmission}, ports::{Clock, RsvpRepository}};
use crate::error::AppError;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Process-lifetime RSVP store. Contents are lost on restart.
pub struct InMemoryRsvpRepo {
    clock: Arc<dyn Clock>,
    next_id: AtomicU64,
    rows: RwLock<Vec<RsvpSubmission>>,
}

impl InMemoryRsvpRepo {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            next_id: AtomicU64::new(1),
            rows: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl RsvpRepository for InMemoryRsvpRepo {
    async fn append(&self, rsvp: NewRsvp) -> Result<RsvpSubmission, AppError> {
        let n = self.next_id.fetch_add(1, Ordering::Relaxed);
        let submission = RsvpSubmission::from_new(format!("RSVP-{}", n), rsvp, self.clock.now());

        self.rows.write().await.push(submission.clone());
        Ok(submission)
    }

    async fn all(&self) -> Result<Vec<RsvpSubmission>, AppError> {
        Ok(self.rows.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::rsvp::Attending;
    use crate::infra::clock::ManualClock;
    use chrono::Duration;

    fn rsvp(name: &str) -> NewRsvp {
        NewRsvp {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            attending: Attending::No,
            meal_choice: None,
            plus_one_name: None,
            dietary_restrictions: None,
        }
    }

    #[tokio::test]
    async fn test_ids_are_sequential_and_order_is_kept() {
        let clock = Arc::new(ManualClock::default());
        let repo = InMemoryRsvpRepo::new(clock.clone());

        let first = repo.append(rsvp("Ann")).await.unwrap();
        clock.advance(Duration::minutes(5));
        let second = repo.append(rsvp("Bob")).await.unwrap();

        assert_eq!(first.id, "RSVP-1");
        assert_eq!(second.id, "RSVP-2");
        assert_eq!(second.created_at - first.created_at, Duration::minutes(5));

        let all = repo.all().await.unwrap();
        let names: Vec<_> = all.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Ann", "Bob"]);
    }
}
